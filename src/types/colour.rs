//! Resolved colour values.

use std::fmt;

use palette::{FromColor, Hsl, Srgb};

use crate::error::{ExpandError, Result};

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent colour.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Parse a hex colour string.
    ///
    /// Supports formats:
    /// - `#RGB` (3 digits, expanded to 6)
    /// - `#RGBA` (4 digits, expanded to 8)
    /// - `#RRGGBB` (6 digits)
    /// - `#RRGGBBAA` (8 digits)
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        let digits = hex
            .chars()
            .map(parse_hex_digit)
            .collect::<Result<Vec<u8>>>()?;

        match digits.as_slice() {
            &[r, g, b] => Ok(Self::rgb(r << 4 | r, g << 4 | g, b << 4 | b)),
            &[r, g, b, a] => Ok(Self::new(r << 4 | r, g << 4 | g, b << 4 | b, a << 4 | a)),
            &[r1, r2, g1, g2, b1, b2] => Ok(Self::rgb(r1 << 4 | r2, g1 << 4 | g2, b1 << 4 | b2)),
            &[r1, r2, g1, g2, b1, b2, a1, a2] => Ok(Self::new(
                r1 << 4 | r2,
                g1 << 4 | g2,
                b1 << 4 | b2,
                a1 << 4 | a2,
            )),
            _ => Err(ExpandError::Parse {
                message: format!("Invalid hex colour: {}", s),
                help: Some("Use #RGB, #RGBA, #RRGGBB, or #RRGGBBAA format".to_string()),
            }),
        }
    }

    /// Look up a CSS named colour (`red`, `rebeccapurple`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        palette::named::from_str(&name.to_ascii_lowercase())
            .map(|c| Self::rgb(c.red, c.green, c.blue))
    }

    /// Build a colour from HSL components.
    ///
    /// `hue` is in degrees, `saturation` and `lightness` in `0.0..=1.0`,
    /// `alpha` in `0.0..=1.0`.
    pub fn from_hsl(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Self {
        let hsl = Hsl::new(hue, saturation.clamp(0.0, 1.0), lightness.clamp(0.0, 1.0));
        let rgb: Srgb<u8> = Srgb::from_color(hsl).into_format();
        Self::new(rgb.red, rgb.green, rgb.blue, unit_to_byte(alpha))
    }

    /// Check if the colour is fully transparent.
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Map a `0.0..=1.0` channel to a byte.
pub(crate) fn unit_to_byte(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Parse a single hex digit.
fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| ExpandError::Parse {
            message: format!("Invalid hex digit: {}", c),
            help: None,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_6digit() {
        let c = Colour::from_hex("#FF0000").unwrap();
        assert_eq!(c, Colour::rgb(255, 0, 0));

        let c = Colour::from_hex("#1a1a2e").unwrap();
        assert_eq!(c, Colour::rgb(0x1a, 0x1a, 0x2e));
    }

    #[test]
    fn test_from_hex_3digit() {
        let c = Colour::from_hex("#ABC").unwrap();
        assert_eq!(c, Colour::rgb(0xAA, 0xBB, 0xCC));
    }

    #[test]
    fn test_from_hex_4digit() {
        let c = Colour::from_hex("f008").unwrap();
        assert_eq!(c, Colour::new(255, 0, 0, 0x88));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(Colour::from_hex("#GGG").is_err());
        assert!(Colour::from_hex("#12345").is_err());
        assert!(Colour::from_hex("").is_err());
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Colour::from_name("red"), Some(Colour::rgb(255, 0, 0)));
        assert_eq!(Colour::from_name("Green"), Some(Colour::rgb(0, 128, 0)));
        assert_eq!(Colour::from_name("invert"), None);
        assert_eq!(Colour::from_name("dotted"), None);
    }

    #[test]
    fn test_from_hsl() {
        assert_eq!(Colour::from_hsl(0.0, 1.0, 0.5, 1.0), Colour::rgb(255, 0, 0));
        assert_eq!(Colour::from_hsl(120.0, 1.0, 0.5, 0.0), Colour::new(0, 255, 0, 0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Colour::rgb(255, 0, 0).to_string(), "#ff0000");
        assert_eq!(Colour::new(255, 0, 0, 128).to_string(), "#ff000080");
        assert!(Colour::TRANSPARENT.is_transparent());
    }
}
