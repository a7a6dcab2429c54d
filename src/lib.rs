//! # floem-color-slider
//!
//! A horizontal color slider: a row of color cells, one of them selected.
//!
//! Colors come from an explicit list, from hex strings, or from a gradient
//! generated between anchor colors. The user picks a cell by pressing and
//! dragging across the row; a listener is told about every change.
//!
//! [`ColorSlider`] holds the state and logic and can be driven by any host.
//! With the default `view` feature, [`color_slider`] wraps it as a
//! [Floem](https://github.com/lapce/floem) view.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem_color_slider::{color_slider, Argb, SliderConfig};
//!
//! let slider = color_slider(SliderConfig::with_gradient(Argb::RED, Argb::BLUE, 21))
//!     .on_color_changed(|index, color| println!("{index}: {color}"));
//! // Use `slider` in your Floem view tree.
//! ```

mod color;
mod config;
mod constants;
mod error;
mod geometry;
pub mod gradient;
mod slider;
#[cfg(feature = "view")]
mod view;

pub use color::{Argb, ParseColorError};
pub use config::{Resolved, SliderConfig};
pub use constants::DEFAULT_PALETTE;
pub use error::{Error, Result};
pub use geometry::GeometryTable;
pub use slider::{ColorSlider, SelectorStyle, SliderCanvas, SliderEvent, SliderListener};
#[cfg(feature = "view")]
pub use view::{color_slider, ColorSliderView, SliderCommand, SliderHandle};
