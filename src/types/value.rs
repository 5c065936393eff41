//! Parsed CSS value tokens.
//!
//! A `Value` is one component of a declaration's value, as produced by the
//! value parser. The `Display` form is the canonical serialization used for
//! output (`6px`, `0`, `red`, `url(foo.png)`).

use std::fmt;

use serde::{Serialize, Serializer};

use super::colour::Colour;
use super::units::LengthUnit;

/// A single parsed CSS value token.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A dimensionless number: `0`, `1.5`
    Number(f32),
    /// A percentage, stored as written: `50%` is `50.0`
    Percentage(f32),
    /// A number with a unit: `6px`, `2in`, `90deg`
    Dimension(Dimension),
    /// An identifier, lowercased: `solid`, `inherit`, `invert`
    Keyword(String),
    /// A colour literal or named colour
    Color(Color),
    /// A quoted string, unescaped
    String(String),
    /// A function call such as `url(foo.png)` or `attr(title)`
    Function(FunctionCall),
}

/// A number with a unit suffix.
#[derive(Debug, Clone, PartialEq)]
pub struct Dimension {
    pub value: f32,
    /// Lowercased unit suffix.
    pub unit: String,
}

impl Dimension {
    pub fn new(value: f32, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into().to_ascii_lowercase(),
        }
    }

    /// The length unit, if this dimension is a length.
    pub fn length_unit(&self) -> Option<LengthUnit> {
        self.unit.parse().ok()
    }

    pub fn is_length(&self) -> bool {
        self.length_unit().is_some()
    }

    /// Absolute size in pixels.
    pub fn to_px(&self, font_size: Option<f32>) -> Option<f32> {
        self.length_unit()?.to_px(self.value, font_size)
    }
}

/// A colour value, keeping the text it was written as.
#[derive(Debug, Clone, PartialEq)]
pub struct Color {
    /// Canonical text: `red`, `#f00`, `rgb(255, 0, 0)`.
    pub text: String,
    /// Resolved RGBA, or `None` for `currentcolor`.
    pub rgba: Option<Colour>,
}

/// A function call: name plus its comma- or space-separated arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    /// Lowercased function name.
    pub name: String,
    pub args: Vec<Value>,
}

impl FunctionCall {
    pub fn new(name: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            name: name.into().to_ascii_lowercase(),
            args,
        }
    }

    /// The target of a `url()` call.
    pub fn url(&self) -> Option<&str> {
        match (self.name.as_str(), self.args.as_slice()) {
            ("url", [Value::String(target)]) => Some(target),
            _ => None,
        }
    }
}

impl Value {
    /// Create a keyword value.
    pub fn keyword(ident: impl Into<String>) -> Self {
        Value::Keyword(ident.into().to_ascii_lowercase())
    }

    /// Create a dimension value.
    pub fn dimension(value: f32, unit: impl Into<String>) -> Self {
        Value::Dimension(Dimension::new(value, unit))
    }

    /// Create a pixel length.
    pub fn px(value: f32) -> Self {
        Self::dimension(value, "px")
    }

    /// Create a `url()` value.
    pub fn url(target: impl Into<String>) -> Self {
        Value::Function(FunctionCall::new("url", vec![Value::String(target.into())]))
    }

    /// Create a colour value from a CSS colour name.
    ///
    /// Returns `None` if the name is not a known colour.
    pub fn named_color(name: &str) -> Option<Self> {
        let name = name.to_ascii_lowercase();
        let rgba = match name.as_str() {
            "transparent" => Some(Colour::TRANSPARENT),
            "currentcolor" => None,
            _ => Some(Colour::from_name(&name)?),
        };
        Some(Value::Color(Color { text: name, rgba }))
    }

    /// Check whether this is the given keyword.
    pub fn is_keyword(&self, ident: &str) -> bool {
        matches!(self, Value::Keyword(k) if k.eq_ignore_ascii_case(ident))
    }

    /// Short description of the value's kind, for messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Percentage(_) => "percentage",
            Value::Dimension(d) if d.is_length() => "length",
            Value::Dimension(_) => "dimension",
            Value::Keyword(_) => "keyword",
            Value::Color(_) => "color",
            Value::String(_) => "string",
            Value::Function(_) => "function",
        }
    }

    /// Absolute size in pixels.
    ///
    /// Numbers are taken as pixels, percentages resolve against
    /// `percentage_reference` and font-relative lengths against `font_size`.
    pub fn to_px(&self, font_size: Option<f32>, percentage_reference: Option<f32>) -> Option<f32> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Percentage(p) => percentage_reference.map(|r| p * r / 100.0),
            Value::Dimension(d) => d.to_px(font_size),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", unsigned_zero(*n)),
            Value::Percentage(p) => write!(f, "{}%", unsigned_zero(*p)),
            Value::Dimension(d) => write!(f, "{}{}", unsigned_zero(d.value), d.unit),
            Value::Keyword(k) => f.write_str(k),
            Value::Color(c) => f.write_str(&c.text),
            Value::String(s) => write!(f, "\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\"")),
            Value::Function(call) => write!(f, "{}", call),
        }
    }
}

/// `-0` serializes as `0`.
fn unsigned_zero(n: f32) -> f32 {
    if n == 0.0 {
        0.0
    } else {
        n
    }
}

impl fmt::Display for FunctionCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(target) = self.url() {
            return write!(f, "url({})", target);
        }
        write!(f, "{}(", self.name)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", arg)?;
        }
        f.write_str(")")
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
