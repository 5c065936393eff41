//! Core value types for shorthand expansion.
//!
//! This module contains the data model shared by the parser and expanders:
//! - `Value` - one parsed CSS value token
//! - `Declaration` - a property name with its values
//! - `Longhand` / `Expansion` - the output of expanding a shorthand

mod colour;
mod declaration;
mod units;
mod value;

pub use colour::Colour;
pub(crate) use colour::unit_to_byte;
pub use declaration::{join_values, normalize_name, Declaration, Expansion, Longhand};
pub use units::LengthUnit;
pub use value::{Color, Dimension, FunctionCall, Value};
