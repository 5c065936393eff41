//! shorthand - CSS shorthand property expansion
//!
//! A library for expanding CSS shorthand declarations (`margin`, `border`,
//! `list-style`, ...) into the longhand declarations they stand for.

pub mod cli;
pub mod discovery;
pub mod error;
pub mod expand;
pub mod output;
pub mod parser;
pub mod registry;
pub mod types;
pub mod validation;

pub use discovery::{discover, load_config, Config, ScanResult, CONFIG_FILENAME};
pub use error::{ExpandError, Result};
pub use expand::{expand, expand_declarations, expand_with, BlockExpansion, BlockOptions, OnError};
pub use parser::{parse_declaration, parse_declarations, parse_stylesheet, parse_values, Rule};
pub use registry::{Category, Component, RegistryBuilder, Shorthand, ShorthandRegistry, Strategy};
pub use types::{Color, Colour, Declaration, Dimension, Expansion, FunctionCall, LengthUnit, Longhand, Value};
pub use validation::{validate_declarations, Diagnostic, Severity, ValidationResult};
