//! Parsing of CSS text into `Declaration`s.
//!
//! The expansion engine works on already tokenized values. This module is
//! the bridge from CSS source text, built on the `cssparser` tokenizer.
//!
//! # Usage
//!
//! ```
//! use shorthand::parser::parse_declarations;
//!
//! let block = parse_declarations("margin: 0 auto; border: 1px solid").unwrap();
//! assert_eq!(block.len(), 2);
//! assert_eq!(block[1].name, "border");
//! ```

mod declaration;
mod stylesheet;
mod values;

pub use declaration::{parse_declaration, parse_declarations};
pub use stylesheet::{parse_stylesheet, Rule};
pub use values::parse_values;
