//! Validation checks for declaration blocks.
//!
//! Each check takes the registry and a block and returns a `ValidationResult`.

use std::collections::HashMap;

use crate::expand::expand_shorthand;
use crate::registry::ShorthandRegistry;
use crate::types::Declaration;

use super::warning::{Diagnostic, ValidationResult};

/// Check that every shorthand declaration expands.
pub fn check_expansions(registry: &ShorthandRegistry, declarations: &[Declaration]) -> ValidationResult {
    let mut result = ValidationResult::new();

    for declaration in declarations {
        let Some(shorthand) = registry.get(&declaration.name) else {
            continue;
        };
        if let Err(err) = expand_shorthand(shorthand, &declaration.values, declaration.important) {
            result.push(Diagnostic::from_error(&err, declaration));
        }
    }

    result
}

/// Check for longhands that a later shorthand in the same block overrides.
///
/// `margin-top: 1px; margin: 0` discards the first declaration, unless only
/// the earlier one is `!important`. Only longhands the later shorthand
/// actually emits count.
pub fn check_overridden_longhands(
    registry: &ShorthandRegistry,
    declarations: &[Declaration],
) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (index, declaration) in declarations.iter().enumerate() {
        let overriding = declarations[index + 1..].iter().find_map(|later| {
            let shorthand = registry.get(&later.name)?;
            if !shorthand.sets(&declaration.name) {
                return None;
            }
            // Failing shorthands are dropped and unspecified components are not emitted
            let expansion = expand_shorthand(shorthand, &later.values, later.important).ok()?;
            let sets = expansion.get(&declaration.name).is_some();
            (sets && (later.important || !declaration.important)).then_some(shorthand)
        });

        if let Some(shorthand) = overriding {
            result.push(
                Diagnostic::warning(
                    "shorthand::overridden",
                    format!(
                        "'{}' is overridden by a later '{}' declaration",
                        declaration.name, shorthand.name
                    ),
                )
                .with_help(format!(
                    "Move '{}' after '{}' or remove it",
                    declaration.name, shorthand.name
                )),
            );
        }
    }

    result
}

/// Check for properties declared more than once in a block.
pub fn check_repeated_properties(declarations: &[Declaration]) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for declaration in declarations {
        let count = counts.entry(declaration.name.as_str()).or_insert(0);
        *count += 1;
        if *count == 2 {
            result.push(Diagnostic::warning(
                "shorthand::repeated",
                format!("'{}' is declared more than once", declaration.name),
            ));
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_declarations;

    fn block(css: &str) -> Vec<Declaration> {
        parse_declarations(css).unwrap()
    }

    #[test]
    fn test_check_expansions() {
        let registry = ShorthandRegistry::standard();
        let result = check_expansions(registry, &block("color: red; border: 1px 2px; margin: 1px"));
        assert_eq!(result.error_count(), 1);
        assert_eq!(result.iter().next().unwrap().code, "shorthand::duplicate");
    }

    #[test]
    fn test_check_overridden() {
        let registry = ShorthandRegistry::standard();
        let result = check_overridden_longhands(registry, &block("margin-top: 1px; margin: 0"));
        assert_eq!(result.warning_count(), 1);

        let result = check_overridden_longhands(registry, &block("margin: 0; margin-top: 1px"));
        assert!(result.is_ok());

        let result =
            check_overridden_longhands(registry, &block("border-top-color: red !important; border: thin"));
        assert!(result.is_ok());

        let result = check_overridden_longhands(registry, &block("border-left-width: 1px; border: thin"));
        assert_eq!(result.warning_count(), 1);
    }

    #[test]
    fn test_unspecified_component_is_not_overridden() {
        let registry = ShorthandRegistry::standard();
        let result = check_overridden_longhands(registry, &block("border-top-color: red; border: thin"));
        assert!(result.is_ok());

        let result = check_overridden_longhands(registry, &block("list-style-type: disc; list-style: inside"));
        assert!(result.is_ok());
    }

    #[test]
    fn test_failing_shorthand_overrides_nothing() {
        let registry = ShorthandRegistry::standard();
        let result =
            check_overridden_longhands(registry, &block("margin-top: 1px; margin: 1px 2px 3px 4px 5px"));
        assert!(result.is_ok());

        let result = check_overridden_longhands(registry, &block("outline-color: red; outline: 1px 2px"));
        assert!(result.is_ok());
    }

    #[test]
    fn test_check_repeated() {
        let result = check_repeated_properties(&block("color: red; color: blue; color: green"));
        assert_eq!(result.warning_count(), 1);
        assert!(check_repeated_properties(&block("color: red; margin: 0")).is_ok());
    }
}
