//! Declarative construction options.
//!
//! A [`SliderConfig`] is resolved once when the slider is built. Colors come
//! from the first source that yields any, in order: packed `colors`,
//! `hex_colors`, a `from_color`/`to_color` gradient, then the default
//! palette. Resolution never fails; bad entries are logged and skipped.

use crate::color::Argb;
use crate::constants;
use crate::error::Result;
use crate::gradient;

/// Construction options for a color slider. Every field is optional.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderConfig {
    pub colors: Vec<Argb>,
    pub hex_colors: Vec<String>,
    pub from_color: Argb,
    pub to_color: Argb,
    pub steps: usize,
    /// Selector outline color; zero keeps the default.
    pub selector_color: Argb,
    pub lock_mode: bool,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            colors: Vec::new(),
            hex_colors: Vec::new(),
            from_color: Argb::TRANSPARENT,
            to_color: Argb::TRANSPARENT,
            steps: constants::DEFAULT_STEPS,
            selector_color: Argb::TRANSPARENT,
            lock_mode: false,
        }
    }
}

/// Outcome of [`SliderConfig::resolve`].
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    /// Never empty.
    pub colors: Vec<Argb>,
    pub selector_color: Argb,
    pub lock_mode: bool,
}

impl SliderConfig {
    pub fn with_colors(colors: impl Into<Vec<Argb>>) -> Self {
        Self {
            colors: colors.into(),
            ..Self::default()
        }
    }

    pub fn with_hex_colors<S: Into<String>>(hex: impl IntoIterator<Item = S>) -> Self {
        Self {
            hex_colors: hex.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_gradient(from: Argb, to: Argb, steps: usize) -> Self {
        Self {
            from_color: from,
            to_color: to,
            steps,
            ..Self::default()
        }
    }

    pub fn selector_color(mut self, color: Argb) -> Self {
        self.selector_color = color;
        self
    }

    pub fn lock_mode(mut self, lock: bool) -> Self {
        self.lock_mode = lock;
        self
    }

    /// Apply the precedence chain, falling back to the default palette.
    pub fn resolve(&self) -> Resolved {
        let colors = match self.resolve_colors() {
            Ok(colors) => colors,
            Err(err) => {
                tracing::debug!(%err, "color slider config rejected, using defaults");
                Vec::new()
            }
        };
        let colors = if colors.is_empty() {
            constants::DEFAULT_PALETTE.to_vec()
        } else {
            colors
        };
        let selector_color = if self.selector_color.is_unset() {
            constants::SELECTOR_COLOR
        } else {
            self.selector_color
        };
        Resolved {
            colors,
            selector_color,
            lock_mode: self.lock_mode,
        }
    }

    fn resolve_colors(&self) -> Result<Vec<Argb>> {
        if !self.colors.is_empty() {
            return Ok(self.colors.clone());
        }
        let mut colors = Vec::new();
        if !self.hex_colors.is_empty() {
            colors = self
                .hex_colors
                .iter()
                .map(|s| Argb::parse(s))
                .collect::<Result<_, _>>()?;
        }
        if colors.is_empty()
            && !self.from_color.is_unset()
            && !self.to_color.is_unset()
            && self.steps != 0
        {
            colors = gradient::interpolate_two(self.from_color, self.to_color, self.steps);
        }
        Ok(colors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_default_palette() {
        let r = SliderConfig::default().resolve();
        assert_eq!(r.colors, constants::DEFAULT_PALETTE.to_vec());
        assert_eq!(r.selector_color, constants::SELECTOR_COLOR);
        assert!(!r.lock_mode);
    }

    #[test]
    fn packed_colors_win_over_everything() {
        let config = SliderConfig {
            colors: vec![Argb::RED, Argb::BLUE],
            hex_colors: vec!["#00FF00".into()],
            from_color: Argb::WHITE,
            to_color: Argb::BLACK,
            ..SliderConfig::default()
        };
        assert_eq!(config.resolve().colors, vec![Argb::RED, Argb::BLUE]);
    }

    #[test]
    fn hex_colors_win_over_gradient() {
        let config = SliderConfig {
            from_color: Argb::WHITE,
            to_color: Argb::BLACK,
            ..SliderConfig::with_hex_colors(["#00FF00", "navy"])
        };
        assert_eq!(
            config.resolve().colors,
            vec![Argb::GREEN, Argb(0xFF00_0080)]
        );
    }

    #[test]
    fn gradient_uses_default_steps() {
        let config = SliderConfig {
            from_color: Argb::RED,
            to_color: Argb::BLUE,
            ..SliderConfig::default()
        };
        let r = config.resolve();
        assert_eq!(r.colors.len(), 21);
        assert_eq!(r.colors[0], Argb::RED);
    }

    #[test]
    fn unset_gradient_anchor_falls_back() {
        let config = SliderConfig::with_gradient(Argb::TRANSPARENT, Argb::BLUE, 10);
        assert_eq!(config.resolve().colors.len(), 20);
        let config = SliderConfig::with_gradient(Argb::RED, Argb::BLUE, 0);
        assert_eq!(config.resolve().colors.len(), 20);
    }

    #[test]
    fn malformed_hex_degrades_to_defaults() {
        let config = SliderConfig {
            from_color: Argb::RED,
            to_color: Argb::BLUE,
            ..SliderConfig::with_hex_colors(["#00FF00", "not a color"])
        };
        assert_eq!(
            config.resolve().colors,
            constants::DEFAULT_PALETTE.to_vec()
        );
    }

    #[test]
    fn selector_color_applies_when_set() {
        let r = SliderConfig::default().selector_color(Argb::BLUE).resolve();
        assert_eq!(r.selector_color, Argb::BLUE);
    }
}
