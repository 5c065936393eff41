//! Length units and conversion to absolute sizes.
//!
//! Conversion follows the CSS reference pixel: 96 pixels per inch, with
//! `1em` equal to the font size and `1ex` taken as half of it.

use std::fmt;
use std::str::FromStr;

/// Pixels per inch.
const PX_PER_IN: f32 = 96.0;

/// A CSS length unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    // Absolute units
    Px,
    Cm,
    Mm,
    Q,
    In,
    Pt,
    Pc,
    // Font-relative units
    Em,
    Rem,
    Ex,
    Ch,
    // Viewport units
    Vw,
    Vh,
    Vmin,
    Vmax,
}

impl LengthUnit {
    /// The canonical unit suffix.
    pub fn as_str(&self) -> &'static str {
        match self {
            LengthUnit::Px => "px",
            LengthUnit::Cm => "cm",
            LengthUnit::Mm => "mm",
            LengthUnit::Q => "q",
            LengthUnit::In => "in",
            LengthUnit::Pt => "pt",
            LengthUnit::Pc => "pc",
            LengthUnit::Em => "em",
            LengthUnit::Rem => "rem",
            LengthUnit::Ex => "ex",
            LengthUnit::Ch => "ch",
            LengthUnit::Vw => "vw",
            LengthUnit::Vh => "vh",
            LengthUnit::Vmin => "vmin",
            LengthUnit::Vmax => "vmax",
        }
    }

    /// Pixels per one unit, for units independent of any context.
    pub fn absolute_factor(&self) -> Option<f32> {
        match self {
            LengthUnit::Px => Some(1.0),
            LengthUnit::In => Some(PX_PER_IN),
            LengthUnit::Cm => Some(PX_PER_IN / 2.54),
            LengthUnit::Mm => Some(PX_PER_IN / 25.4),
            LengthUnit::Q => Some(PX_PER_IN / 101.6),
            LengthUnit::Pt => Some(PX_PER_IN / 72.0),
            LengthUnit::Pc => Some(PX_PER_IN / 6.0),
            _ => None,
        }
    }

    /// Convert `value` in this unit to pixels.
    ///
    /// Font-relative units need `font_size`. Units that depend on the root
    /// element or viewport are not resolvable here and yield `None`.
    pub fn to_px(&self, value: f32, font_size: Option<f32>) -> Option<f32> {
        if let Some(factor) = self.absolute_factor() {
            return Some(value * factor);
        }
        match self {
            LengthUnit::Em => font_size.map(|fs| value * fs),
            LengthUnit::Ex => font_size.map(|fs| value * fs / 2.0),
            _ => None,
        }
    }
}

impl FromStr for LengthUnit {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, ()> {
        let unit = match s.to_ascii_lowercase().as_str() {
            "px" => LengthUnit::Px,
            "cm" => LengthUnit::Cm,
            "mm" => LengthUnit::Mm,
            "q" => LengthUnit::Q,
            "in" => LengthUnit::In,
            "pt" => LengthUnit::Pt,
            "pc" => LengthUnit::Pc,
            "em" => LengthUnit::Em,
            "rem" => LengthUnit::Rem,
            "ex" => LengthUnit::Ex,
            "ch" => LengthUnit::Ch,
            "vw" => LengthUnit::Vw,
            "vh" => LengthUnit::Vh,
            "vmin" => LengthUnit::Vmin,
            "vmax" => LengthUnit::Vmax,
            _ => return Err(()),
        };
        Ok(unit)
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
