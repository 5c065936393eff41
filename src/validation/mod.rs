//! Validation for declaration blocks.
//!
//! Runs a suite of checks against parsed declarations and reports errors
//! and warnings. Used by `shorthand check`.

mod checks;
mod warning;

pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::registry::ShorthandRegistry;
use crate::types::Declaration;

/// Run all validation checks against a declaration block.
pub fn validate_declarations(registry: &ShorthandRegistry, declarations: &[Declaration]) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_expansions(registry, declarations));
    result.merge(checks::check_overridden_longhands(registry, declarations));
    result.merge(checks::check_repeated_properties(declarations));

    result
}
