//! Argb type — the packed 32-bit color used throughout the slider.
//!
//! Channels are laid out as `0xAARRGGBB`. Parsing follows the platform color
//! string rules: `#RRGGBB`, `#AARRGGBB`, or one of a fixed set of names.

use std::fmt;
use std::str::FromStr;

use floem::peniko::Color;

/// Packed ARGB color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Argb(pub u32);

/// Error returned when a color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseColorError {
    /// `#` followed by something other than 6 or 8 characters.
    #[error("hex color {0:?} must have 6 or 8 digits after '#'")]
    BadLength(String),
    /// `#` followed by non-hex characters.
    #[error("hex color {0:?} contains non-hex digits")]
    InvalidHex(String),
    /// Not a hex color and not a known color name.
    #[error("unknown color {0:?}")]
    UnknownName(String),
}

impl Argb {
    pub const TRANSPARENT: Argb = Argb(0x0000_0000);
    pub const BLACK: Argb = Argb(0xFF00_0000);
    pub const DKGRAY: Argb = Argb(0xFF44_4444);
    pub const GRAY: Argb = Argb(0xFF88_8888);
    pub const LTGRAY: Argb = Argb(0xFFCC_CCCC);
    pub const WHITE: Argb = Argb(0xFFFF_FFFF);
    pub const RED: Argb = Argb(0xFFFF_0000);
    pub const GREEN: Argb = Argb(0xFF00_FF00);
    pub const BLUE: Argb = Argb(0xFF00_00FF);
    pub const YELLOW: Argb = Argb(0xFFFF_FF00);
    pub const CYAN: Argb = Argb(0xFF00_FFFF);
    pub const MAGENTA: Argb = Argb(0xFFFF_00FF);

    /// Pack four 0–255 channels.
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    /// Pack an opaque color from 0–255 RGB channels.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(0xFF, r, g, b)
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Zero is the "unset" sentinel for gradient anchors and selector colors.
    pub const fn is_unset(self) -> bool {
        self.0 == 0
    }

    /// Parse `#RRGGBB`, `#AARRGGBB` or a color name such as `"teal"`.
    ///
    /// Six-digit hex is fully opaque. Names are matched case-insensitively.
    pub fn parse(s: &str) -> Result<Self, ParseColorError> {
        if let Some(digits) = s.strip_prefix('#') {
            if digits.len() != 6 && digits.len() != 8 {
                return Err(ParseColorError::BadLength(s.to_string()));
            }
            if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(ParseColorError::InvalidHex(s.to_string()));
            }
            let value = u32::from_str_radix(digits, 16)
                .map_err(|_| ParseColorError::InvalidHex(s.to_string()))?;
            return Ok(if digits.len() == 6 {
                Self(0xFF00_0000 | value)
            } else {
                Self(value)
            });
        }
        named(&s.to_ascii_lowercase()).ok_or_else(|| ParseColorError::UnknownName(s.to_string()))
    }

    /// Format as uppercase `#AARRGGBB`.
    pub fn to_hex(self) -> String {
        format!("#{:08X}", self.0)
    }
}

fn named(name: &str) -> Option<Argb> {
    let color = match name {
        "black" => Argb::BLACK,
        "darkgray" | "darkgrey" => Argb::DKGRAY,
        "gray" | "grey" => Argb::GRAY,
        "lightgray" | "lightgrey" => Argb::LTGRAY,
        "white" => Argb::WHITE,
        "red" => Argb::RED,
        "green" | "lime" => Argb::GREEN,
        "blue" => Argb::BLUE,
        "yellow" => Argb::YELLOW,
        "cyan" | "aqua" => Argb::CYAN,
        "magenta" | "fuchsia" => Argb::MAGENTA,
        "maroon" => Argb(0xFF80_0000),
        "navy" => Argb(0xFF00_0080),
        "olive" => Argb(0xFF80_8000),
        "purple" => Argb(0xFF80_0080),
        "silver" => Argb(0xFFC0_C0C0),
        "teal" => Argb(0xFF00_8080),
        _ => return None,
    };
    Some(color)
}

impl FromStr for Argb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<u32> for Argb {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Argb> for u32 {
    fn from(color: Argb) -> Self {
        color.0
    }
}

impl From<Argb> for Color {
    fn from(c: Argb) -> Self {
        Color::rgba8(c.red(), c.green(), c.blue(), c.alpha())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_unpack_in_argb_order() {
        let c = Argb(0x80FF_4020);
        assert_eq!(c.alpha(), 0x80);
        assert_eq!(c.red(), 0xFF);
        assert_eq!(c.green(), 0x40);
        assert_eq!(c.blue(), 0x20);
        assert_eq!(Argb::from_argb(0x80, 0xFF, 0x40, 0x20), c);
    }

    #[test]
    fn six_digit_hex_is_opaque() {
        assert_eq!(Argb::parse("#F44336").unwrap(), Argb(0xFFF4_4336));
        assert_eq!(Argb::parse("#f44336").unwrap(), Argb(0xFFF4_4336));
    }

    #[test]
    fn eight_digit_hex_keeps_alpha() {
        assert_eq!(Argb::parse("#00112233").unwrap(), Argb(0x0011_2233));
    }

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!(Argb::parse("Teal").unwrap(), Argb(0xFF00_8080));
        assert_eq!("GREY".parse::<Argb>().unwrap(), Argb::GRAY);
    }

    #[test]
    fn malformed_strings_are_rejected() {
        assert!(matches!(
            Argb::parse("#FFF"),
            Err(ParseColorError::BadLength(_))
        ));
        assert!(matches!(
            Argb::parse("#GGGGGG"),
            Err(ParseColorError::InvalidHex(_))
        ));
        assert!(matches!(
            Argb::parse("F44336"),
            Err(ParseColorError::UnknownName(_))
        ));
        assert!(matches!(Argb::parse(""), Err(ParseColorError::UnknownName(_))));
    }

    #[test]
    fn hex_output_is_uppercase_argb() {
        assert_eq!(Argb(0xFF2196F3).to_hex(), "#FF2196F3");
        assert_eq!(Argb::TRANSPARENT.to_string(), "#00000000");
    }
}
