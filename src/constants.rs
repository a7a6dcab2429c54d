//! Sizing, color, and styling constants for the slider.

use crate::color::Argb;

/// Default view height
pub const SLIDER_HEIGHT: f32 = 24.0;

/// Vertical inset of unselected cells, as a fraction of the height
pub const CELL_MARGIN_RATIO: f32 = 0.1;

/// Step count used when a gradient is configured without one
pub const DEFAULT_STEPS: usize = 21;

/// Selector outline stroke width
pub const SELECTOR_STROKE_WIDTH: f64 = 2.0;

/// Selector outline color (opaque dark background)
pub const SELECTOR_COLOR: Argb = Argb::BLACK;

/// Palette shown when nothing else is configured.
pub const DEFAULT_PALETTE: [Argb; 20] = [
    Argb(0xFFF4_4336),
    Argb(0xFFE9_1E63),
    Argb(0xFF9C_27B0),
    Argb(0xFF67_3AB7),
    Argb(0xFF3F_51B5),
    Argb(0xFF21_96F3),
    Argb(0xFF03_A9F4),
    Argb(0xFF00_BCD4),
    Argb(0xFF00_9688),
    Argb(0xFF4C_AF50),
    Argb(0xFF8B_C34A),
    Argb(0xFFCD_DC39),
    Argb(0xFFFF_EB3B),
    Argb(0xFFFF_C107),
    Argb(0xFFFF_9800),
    Argb(0xFFFF_5722),
    Argb(0xFF79_5548),
    Argb(0xFF9E_9E9E),
    Argb(0xFF60_7D8B),
    Argb(0xFFFF_FFFF),
];
