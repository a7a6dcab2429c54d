//! Color slider state: colors, cell geometry, selection and pointer tracking.
//!
//! [`ColorSlider`] is independent of any view tree. A host feeds it the
//! laid-out size and pointer events, asks it to paint onto a
//! [`SliderCanvas`], and polls [`ColorSlider::take_repaint`] after each call
//! to learn whether the widget needs to be redrawn.
//!
//! Only pointer-driven selection changes reach the listener; programmatic
//! selection is silent.

use floem::kurbo::{Point, Rect};
use floem::peniko::Color;

use crate::color::{Argb, ParseColorError};
use crate::config::SliderConfig;
use crate::constants;
use crate::error::{Error, Result};
use crate::geometry::GeometryTable;
use crate::gradient;

/// Callback for pointer-driven selection changes: `(index, color)`.
pub type SliderListener = Box<dyn FnMut(usize, Argb)>;

/// Pointer input the slider understands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliderEvent {
    Press(Point),
    Move(Point),
    Release(Point),
    /// Any other pointer event; never handled.
    Cancel,
}

/// How the selector is drawn over the selected cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectorStyle {
    Fill,
    #[default]
    Stroke,
    FillAndStroke,
}

/// Drawing surface the slider paints onto.
pub trait SliderCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64);
}

pub struct ColorSlider {
    colors: Vec<Argb>,
    geometry: GeometryTable,
    selected: usize,
    lock_mode: bool,
    width: f64,
    height: f64,
    selector_color: Argb,
    selector_style: SelectorStyle,
    selector_width: f64,
    listener: Option<SliderListener>,
    repaint: bool,
}

impl std::fmt::Debug for ColorSlider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorSlider")
            .field("colors", &self.colors.len())
            .field("selected", &self.selected)
            .field("lock_mode", &self.lock_mode)
            .field("size", &(self.width, self.height))
            .field("selector_color", &self.selector_color)
            .field("selector_style", &self.selector_style)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}

impl Default for ColorSlider {
    fn default() -> Self {
        Self::new(&SliderConfig::default())
    }
}

impl ColorSlider {
    /// Build a slider from declarative options. Never fails; see
    /// [`SliderConfig::resolve`].
    pub fn new(config: &SliderConfig) -> Self {
        let resolved = config.resolve();
        let geometry = GeometryTable::compute(resolved.colors.len(), 0.0, 0.0);
        Self {
            colors: resolved.colors,
            geometry,
            selected: 0,
            lock_mode: resolved.lock_mode,
            width: 0.0,
            height: 0.0,
            selector_color: resolved.selector_color,
            selector_style: SelectorStyle::default(),
            selector_width: constants::SELECTOR_STROKE_WIDTH,
            listener: None,
            repaint: true,
        }
    }

    // ── Colors ──────────────────────────────────────────────────────────

    pub fn colors(&self) -> &[Argb] {
        &self.colors
    }

    /// Replace the colors. An empty slice is ignored.
    pub fn set_colors(&mut self, colors: &[Argb]) {
        if colors.is_empty() {
            return;
        }
        self.replace_colors(colors.to_vec());
    }

    /// Replace the colors with parsed color strings. An empty slice is
    /// ignored.
    ///
    /// # Errors
    ///
    /// Fails on the first malformed string; the current colors are kept.
    pub fn set_hex_colors<S: AsRef<str>>(&mut self, hex: &[S]) -> Result<(), ParseColorError> {
        if hex.is_empty() {
            return Ok(());
        }
        let colors = hex
            .iter()
            .map(|s| Argb::parse(s.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        self.replace_colors(colors);
        Ok(())
    }

    /// Replace the colors with a two-anchor gradient.
    ///
    /// Zero anchors or zero steps leave the slider untouched.
    pub fn set_gradient(&mut self, from: Argb, to: Argb, steps: usize) {
        if from.is_unset() || to.is_unset() || steps == 0 {
            return;
        }
        self.replace_colors(gradient::interpolate_two(from, to, steps));
    }

    /// Replace the colors with a gradient through `anchors`.
    ///
    /// # Errors
    ///
    /// [`Error::TooFewAnchors`] for fewer than two anchors,
    /// [`Error::TooFewSteps`] if three or more anchors cannot share `steps`.
    pub fn set_gradient_anchors(&mut self, anchors: &[Argb], steps: usize) -> Result<()> {
        match anchors {
            [] | [_] => Err(Error::TooFewAnchors {
                count: anchors.len(),
            }),
            [from, to] => {
                self.set_gradient(*from, *to, steps);
                Ok(())
            }
            _ => {
                let colors = gradient::interpolate_multi(anchors, steps)?;
                self.replace_colors(colors);
                Ok(())
            }
        }
    }

    fn replace_colors(&mut self, colors: Vec<Argb>) {
        self.colors = colors;
        if self.selected >= self.colors.len() {
            let clamped = self.colors.len().saturating_sub(1);
            tracing::debug!(
                from = self.selected,
                to = clamped,
                "selection clamped to shorter color list"
            );
            self.selected = clamped;
        }
        self.relayout();
        self.repaint = true;
    }

    // ── Selection ───────────────────────────────────────────────────────

    pub fn selected_item(&self) -> usize {
        self.selected
    }

    pub fn selected_color(&self) -> Argb {
        self.colors[self.selected]
    }

    /// Select the first cell holding `color`. Does not notify the listener.
    pub fn select_color(&mut self, color: Argb) {
        if let Some(index) = self.colors.iter().position(|&c| c == color) {
            self.selected = index;
            self.repaint = true;
        }
    }

    /// Select `index` if it is in range. Does not notify the listener.
    pub fn set_selection(&mut self, index: usize) {
        if index >= self.colors.len() {
            return;
        }
        self.selected = index;
        self.repaint = true;
    }

    /// Register the selection listener, replacing any previous one.
    pub fn set_listener(&mut self, listener: impl FnMut(usize, Argb) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    // ── Mode and selector style ─────────────────────────────────────────

    pub fn lock_mode(&self) -> bool {
        self.lock_mode
    }

    /// In lock mode the pointer must stay inside the row to select.
    pub fn set_lock_mode(&mut self, lock: bool) {
        self.lock_mode = lock;
    }

    pub fn selector_color(&self) -> Argb {
        self.selector_color
    }

    pub fn set_selector_color(&mut self, color: Argb) {
        self.selector_color = color;
        self.repaint = true;
    }

    pub fn selector_style(&self) -> SelectorStyle {
        self.selector_style
    }

    pub fn set_selector_style(&mut self, style: SelectorStyle) {
        self.selector_style = style;
        self.repaint = true;
    }

    pub fn set_selector_stroke_width(&mut self, width: f64) {
        self.selector_width = width;
        self.repaint = true;
    }

    // ── Layout ──────────────────────────────────────────────────────────

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Accept the laid-out size, rebuilding cell geometry if it changed.
    pub fn set_size(&mut self, width: f64, height: f64) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        self.relayout();
        self.repaint = true;
    }

    pub fn geometry(&self) -> &GeometryTable {
        &self.geometry
    }

    fn relayout(&mut self) {
        self.geometry = GeometryTable::compute(self.colors.len(), self.width, self.height);
    }

    // ── Events ──────────────────────────────────────────────────────────

    /// Feed a pointer event. Returns whether the slider handled it.
    ///
    /// A press only claims the gesture; moves and releases select the cell
    /// under the pointer and notify the listener when the selection changes.
    pub fn on_pointer(&mut self, event: SliderEvent) -> bool {
        match event {
            SliderEvent::Press(_) => true,
            SliderEvent::Move(pos) | SliderEvent::Release(pos) => {
                self.update_from_pointer(pos);
                true
            }
            SliderEvent::Cancel => false,
        }
    }

    fn update_from_pointer(&mut self, pos: Point) {
        let Some(index) = self.geometry.hit(pos, self.lock_mode, self.selected) else {
            return;
        };
        self.selected = index;
        self.repaint = true;
        let color = self.colors[index];
        tracing::trace!(index, %color, "color slider selection changed");
        if let Some(listener) = self.listener.as_mut() {
            listener(index, color);
        }
    }

    // ── Painting ────────────────────────────────────────────────────────

    /// Whether a repaint was requested since the last call. Clears the flag.
    pub fn take_repaint(&mut self) -> bool {
        std::mem::take(&mut self.repaint)
    }

    /// Paint the row left to right. The selected cell fills its full
    /// rectangle and carries the selector.
    pub fn paint(&self, canvas: &mut impl SliderCanvas) {
        for (i, ((inset, full), &color)) in self.geometry.iter().zip(&self.colors).enumerate() {
            if i == self.selected {
                canvas.fill_rect(full, color.into());
                self.paint_selector(canvas, full);
            } else {
                canvas.fill_rect(inset, color.into());
            }
        }
    }

    fn paint_selector(&self, canvas: &mut impl SliderCanvas, rect: Rect) {
        let color: Color = self.selector_color.into();
        match self.selector_style {
            SelectorStyle::Fill => canvas.fill_rect(rect, color),
            SelectorStyle::Stroke => canvas.stroke_rect(rect, color, self.selector_width),
            SelectorStyle::FillAndStroke => {
                canvas.fill_rect(rect, color);
                canvas.stroke_rect(rect, color, self.selector_width);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn sized(config: &SliderConfig) -> ColorSlider {
        let mut s = ColorSlider::new(config);
        s.set_size(200.0, 20.0);
        s
    }

    fn recorded(slider: &mut ColorSlider) -> Rc<RefCell<Vec<(usize, Argb)>>> {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = calls.clone();
        slider.set_listener(move |i, c| sink.borrow_mut().push((i, c)));
        calls
    }

    #[test]
    fn empty_inputs_are_ignored() {
        let mut s = sized(&SliderConfig::default());
        s.set_colors(&[]);
        s.set_hex_colors::<&str>(&[]).unwrap();
        assert_eq!(s.colors().len(), 20);
    }

    #[test]
    fn colors_rebuild_geometry() {
        let mut s = sized(&SliderConfig::default());
        s.set_colors(&[Argb::RED, Argb::GREEN, Argb::BLUE, Argb::WHITE]);
        assert_eq!(s.geometry().len(), 4);
        assert_eq!(s.geometry().full(3), Some(Rect::new(150.0, 0.0, 200.0, 20.0)));
    }

    #[test]
    fn zero_gradient_arguments_are_a_no_op() {
        let mut s = sized(&SliderConfig::default());
        s.set_gradient(Argb::TRANSPARENT, Argb::BLUE, 5);
        s.set_gradient(Argb::RED, Argb::TRANSPARENT, 5);
        s.set_gradient(Argb::RED, Argb::BLUE, 0);
        assert_eq!(s.colors(), &constants::DEFAULT_PALETTE[..]);
    }

    #[test]
    fn shrinking_the_colors_clamps_the_selection() {
        let mut s = sized(&SliderConfig::default());
        s.set_selection(15);
        s.set_colors(&[Argb::RED, Argb::BLUE]);
        assert_eq!(s.selected_item(), 1);
        assert_eq!(s.selected_color(), Argb::BLUE);
    }

    #[test]
    fn cancel_is_not_handled() {
        let mut s = sized(&SliderConfig::default());
        assert!(!s.on_pointer(SliderEvent::Cancel));
        assert!(s.on_pointer(SliderEvent::Press(Point::new(-100.0, -100.0))));
    }

    #[test]
    fn last_listener_wins() {
        let mut s = sized(&SliderConfig::default());
        let first = recorded(&mut s);
        let second = recorded(&mut s);
        s.on_pointer(SliderEvent::Release(Point::new(35.0, 5.0)));
        assert!(first.borrow().is_empty());
        assert_eq!(second.borrow().as_slice(), &[(3, constants::DEFAULT_PALETTE[3])]);

        s.clear_listener();
        s.on_pointer(SliderEvent::Release(Point::new(45.0, 5.0)));
        assert_eq!(second.borrow().len(), 1);
        assert_eq!(s.selected_item(), 4);
    }

    #[test]
    fn repaint_flag_is_consumed() {
        let mut s = sized(&SliderConfig::default());
        assert!(s.take_repaint());
        assert!(!s.take_repaint());
        s.set_selection(2);
        assert!(s.take_repaint());
        s.on_pointer(SliderEvent::Move(Point::new(25.0, 5.0)));
        assert!(!s.take_repaint());
    }

    #[test]
    fn resizing_to_the_same_size_keeps_geometry() {
        let mut s = sized(&SliderConfig::default());
        s.take_repaint();
        s.set_size(200.0, 20.0);
        assert!(!s.take_repaint());
        s.set_size(400.0, 20.0);
        assert!(s.take_repaint());
        assert_eq!(s.geometry().full(0), Some(Rect::new(0.0, 0.0, 20.0, 20.0)));
    }
}
