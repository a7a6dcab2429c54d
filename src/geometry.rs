//! Cell rectangles and hit testing.
//!
//! Each color owns one horizontal cell. Cells are laid out on whole pixels:
//! every edge is truncated toward zero, so neighbouring cells share an edge
//! and the row is contiguous from left to right.

use floem::kurbo::{Point, Rect};

use crate::constants;

/// Index-aligned inset and full rectangles for every color cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryTable {
    inset: Vec<Rect>,
    full: Vec<Rect>,
}

impl GeometryTable {
    /// Lay out `count` cells across a `width` x `height` area.
    pub fn compute(count: usize, width: f64, height: f64) -> Self {
        if count == 0 {
            return Self::default();
        }
        // Edges are computed in single precision so they land on the same
        // pixels as the platform's float layout.
        let (width, height) = (width as f32, height as f32);
        let cell = width / count as f32;
        let margin = height * constants::CELL_MARGIN_RATIO;
        let px = |v: f32| f64::from(v.trunc());
        let top = px(margin);
        let bottom = px(height - margin);
        let mut inset = Vec::with_capacity(count);
        let mut full = Vec::with_capacity(count);
        for i in 0..count {
            let x0 = px(cell * i as f32);
            let x1 = px(cell * (i + 1) as f32);
            inset.push(Rect::new(x0, top, x1, bottom));
            full.push(Rect::new(x0, 0.0, x1, px(height)));
        }
        Self { inset, full }
    }

    pub fn len(&self) -> usize {
        self.full.len()
    }

    pub fn is_empty(&self) -> bool {
        self.full.is_empty()
    }

    /// Rectangle painted for an unselected cell.
    pub fn inset(&self, index: usize) -> Option<Rect> {
        self.inset.get(index).copied()
    }

    /// Rectangle painted for the selected cell, also its hit region.
    pub fn full(&self, index: usize) -> Option<Rect> {
        self.full.get(index).copied()
    }

    /// `(inset, full)` pairs in left-to-right order.
    pub fn iter(&self) -> impl Iterator<Item = (Rect, Rect)> + '_ {
        self.inset.iter().copied().zip(self.full.iter().copied())
    }

    /// First cell under `pos` other than `current`.
    ///
    /// In lock mode the pointer must be strictly inside the cell. Otherwise
    /// only the horizontal span counts (edges inclusive), so dragging above
    /// or below the row still selects.
    pub fn hit(&self, pos: Point, lock_mode: bool, current: usize) -> Option<usize> {
        let p = Point::new(pos.x.trunc(), pos.y.trunc());
        self.full
            .iter()
            .enumerate()
            .find(|(i, rect)| *i != current && in_range(rect, p, lock_mode))
            .map(|(i, _)| i)
    }
}

fn in_range(rect: &Rect, p: Point, lock_mode: bool) -> bool {
    if lock_mode {
        rect.contains(p)
    } else {
        rect.x0 <= p.x && p.x <= rect.x1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_cells_across_two_hundred_pixels() {
        let g = GeometryTable::compute(20, 200.0, 20.0);
        assert_eq!(g.len(), 20);
        assert_eq!(g.inset(1), Some(Rect::new(10.0, 2.0, 20.0, 18.0)));
        assert_eq!(g.full(1), Some(Rect::new(10.0, 0.0, 20.0, 20.0)));
        assert_eq!(g.full(19), Some(Rect::new(190.0, 0.0, 200.0, 20.0)));
    }

    #[test]
    fn fractional_cells_truncate_and_stay_contiguous() {
        let g = GeometryTable::compute(3, 100.0, 25.0);
        let full: Vec<Rect> = g.iter().map(|(_, f)| f).collect();
        assert_eq!(full[0], Rect::new(0.0, 0.0, 33.0, 25.0));
        assert_eq!(full[1], Rect::new(33.0, 0.0, 66.0, 25.0));
        assert_eq!(full[2], Rect::new(66.0, 0.0, 100.0, 25.0));
        // margin 2.5 -> 2, bottom 22.5 -> 22
        assert_eq!(g.inset(0), Some(Rect::new(0.0, 2.0, 33.0, 22.0)));
    }

    #[test]
    fn last_edge_reaches_the_full_width() {
        // 115 / 7 * 7 falls just short of 115 in double precision.
        let g = GeometryTable::compute(7, 115.0, 20.0);
        assert_eq!(g.full(6), Some(Rect::new(98.0, 0.0, 115.0, 20.0)));
        assert_eq!(g.hit(Point::new(114.0, 10.0), true, 0), Some(6));
    }

    #[test]
    fn empty_table_for_no_colors() {
        let g = GeometryTable::compute(0, 100.0, 20.0);
        assert!(g.is_empty());
        assert_eq!(g.hit(Point::new(5.0, 5.0), false, 0), None);
    }

    #[test]
    fn lock_mode_requires_vertical_containment() {
        let g = GeometryTable::compute(20, 200.0, 20.0);
        assert_eq!(g.hit(Point::new(15.0, 10.0), true, 0), Some(1));
        assert_eq!(g.hit(Point::new(15.0, -3.0), true, 0), None);
        assert_eq!(g.hit(Point::new(15.0, 20.0), true, 0), None);
        assert_eq!(g.hit(Point::new(15.0, 45.0), true, 0), None);
    }

    #[test]
    fn free_mode_ignores_vertical_position() {
        let g = GeometryTable::compute(20, 200.0, 20.0);
        assert_eq!(g.hit(Point::new(15.0, -30.0), false, 0), Some(1));
        assert_eq!(g.hit(Point::new(15.0, 300.0), false, 0), Some(1));
    }

    #[test]
    fn shared_edge_skips_the_current_cell() {
        let g = GeometryTable::compute(20, 200.0, 20.0);
        // x = 20 touches cells 1 and 2 in free mode.
        assert_eq!(g.hit(Point::new(20.0, 5.0), false, 0), Some(1));
        assert_eq!(g.hit(Point::new(20.0, 5.0), false, 1), Some(2));
        // Already on the only matching cell.
        assert_eq!(g.hit(Point::new(15.0, 5.0), false, 1), None);
    }

    #[test]
    fn pointer_coordinates_truncate_toward_zero() {
        let g = GeometryTable::compute(20, 200.0, 20.0);
        assert_eq!(g.hit(Point::new(19.9, 19.9), true, 0), Some(1));
        assert_eq!(g.hit(Point::new(-0.5, 5.0), true, 3), Some(0));
    }
}
