//! Shorthand expansion engine.
//!
//! `expand` turns one shorthand declaration into its longhands. The call is
//! pure: it either returns the complete expansion or fails without output.
//!
//! # Usage
//!
//! ```
//! use shorthand::expand::expand;
//! use shorthand::parser::parse_declaration;
//!
//! let declaration = parse_declaration("border-top: 3px dotted red").unwrap();
//! let expansion = expand(&declaration).unwrap();
//!
//! assert_eq!(expansion.get_text("border-top-style").as_deref(), Some("dotted"));
//! ```

mod block;
pub mod classify;
mod components;
mod four_sides;
mod keywords;

pub use block::{expand_declarations, BlockExpansion, BlockOptions, OnError};
pub use classify::{accepts, classify};
pub use components::{expand_component_set, expand_side_fan_out};
pub use four_sides::expand_four_sides;
pub use keywords::expand_keyword_dispatch;

use tracing::debug;

use crate::error::Result;
use crate::registry::{Shorthand, ShorthandRegistry, Strategy};
use crate::types::{Declaration, Expansion, Value};

/// Expand a declaration using the standard registry.
pub fn expand(declaration: &Declaration) -> Result<Expansion> {
    expand_with(ShorthandRegistry::standard(), declaration)
}

/// Expand a declaration using the given registry.
///
/// Fails with `UnknownShorthand` if the property is not registered.
pub fn expand_with(registry: &ShorthandRegistry, declaration: &Declaration) -> Result<Expansion> {
    let shorthand = registry.lookup(&declaration.name)?;
    let expansion = expand_shorthand(shorthand, &declaration.values, declaration.important)?;

    debug!(
        shorthand = %shorthand.name,
        strategy = shorthand.strategy.name(),
        longhands = expansion.len(),
        "expanded shorthand"
    );

    Ok(expansion)
}

/// Expand values for a known shorthand.
///
/// A value list of exactly `inherit` sets every longhand to `inherit`
/// before any classification happens.
pub fn expand_shorthand(shorthand: &Shorthand, values: &[Value], important: bool) -> Result<Expansion> {
    if let [value] = values {
        if value.is_keyword("inherit") {
            return Ok(expand_inherit(shorthand, important));
        }
    }

    match shorthand.strategy {
        Strategy::FourSides => expand_four_sides(shorthand, values, important),
        Strategy::ComponentSet(components) => {
            expand_component_set(shorthand, components, values, important)
        }
        Strategy::SideFanOut(components) => {
            expand_side_fan_out(shorthand, components, values, important)
        }
        Strategy::KeywordDispatch(components) => {
            expand_keyword_dispatch(shorthand, components, values, important)
        }
    }
}

fn expand_inherit(shorthand: &Shorthand, important: bool) -> Expansion {
    let mut expansion = Expansion::new();
    for longhand in &shorthand.longhands {
        expansion.push(longhand.clone(), vec![Value::keyword("inherit")], important);
    }
    expansion
}
