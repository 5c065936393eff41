//! Expansion of whole declaration blocks.
//!
//! Shorthands are expanded in place. Other properties pass through as-is,
//! and a declaration that fails to expand is either dropped (and reported)
//! or aborts the block, depending on `OnError`.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ExpandError, Result};
use crate::registry::ShorthandRegistry;
use crate::types::{Declaration, Longhand};
use crate::validation::{Diagnostic, ValidationResult};

use super::expand_shorthand;

/// What to do with a declaration that fails to expand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OnError {
    /// Drop the declaration, record a diagnostic and keep going.
    #[default]
    Skip,
    /// Stop at the first failure.
    Fail,
}

/// Options for block expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockOptions {
    pub on_error: OnError,
    /// Emit non-shorthand declarations unchanged. When off they fail with
    /// `UnknownShorthand`.
    pub passthrough: bool,
}

impl Default for BlockOptions {
    fn default() -> Self {
        Self {
            on_error: OnError::Skip,
            passthrough: true,
        }
    }
}

/// Longhands produced from a block, plus diagnostics for dropped declarations.
#[derive(Debug, Clone, Default)]
pub struct BlockExpansion {
    pub longhands: Vec<Longhand>,
    pub diagnostics: ValidationResult,
    /// Number of declarations that were dropped.
    pub dropped: usize,
}

/// Expand every declaration of a block, in order.
pub fn expand_declarations(
    registry: &ShorthandRegistry,
    declarations: &[Declaration],
    options: &BlockOptions,
) -> Result<BlockExpansion> {
    let mut result = BlockExpansion::default();

    for declaration in declarations {
        let expanded = match registry.get(&declaration.name) {
            Some(shorthand) => {
                expand_shorthand(shorthand, &declaration.values, declaration.important)
                    .map(|e| e.into_iter().collect::<Vec<_>>())
            }
            None if options.passthrough => Ok(vec![Longhand::new(
                declaration.name.clone(),
                declaration.values.clone(),
                declaration.important,
            )]),
            None => Err(ExpandError::UnknownShorthand {
                name: declaration.name.clone(),
            }),
        };

        match expanded {
            Ok(longhands) => result.longhands.extend(longhands),
            Err(err) if options.on_error == OnError::Skip => {
                warn!(declaration = %declaration, error = %err, "dropping declaration");
                result.diagnostics.push(Diagnostic::from_error(&err, declaration));
                result.dropped += 1;
            }
            Err(err) => return Err(err),
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_declarations;
    use pretty_assertions::assert_eq;

    fn run(css: &str, options: BlockOptions) -> Result<BlockExpansion> {
        let declarations = parse_declarations(css).unwrap();
        expand_declarations(ShorthandRegistry::standard(), &declarations, &options)
    }

    fn lines(block: &BlockExpansion) -> Vec<String> {
        block.longhands.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_passthrough_and_expand() {
        let block = run("color: blue; margin: 0 auto; list-style: none", BlockOptions::default()).unwrap();
        assert_eq!(
            lines(&block),
            vec![
                "color: blue",
                "margin-top: 0",
                "margin-right: auto",
                "margin-bottom: 0",
                "margin-left: auto",
                "list-style-image: none",
            ]
        );
        assert!(block.diagnostics.is_ok());
    }

    #[test]
    fn test_skip_drops_only_invalid() {
        let block = run(
            "border-top: left; padding: 1px; list-style: red",
            BlockOptions::default(),
        )
        .unwrap();
        assert_eq!(block.dropped, 2);
        assert_eq!(block.longhands.len(), 4);
        assert_eq!(block.diagnostics.error_count(), 2);
        let codes: Vec<_> = block.diagnostics.iter().map(|d| d.code.as_str()).collect();
        assert_eq!(codes, vec!["shorthand::unknown-value", "shorthand::unknown-value"]);
    }

    #[test]
    fn test_fail_stops_without_output() {
        let options = BlockOptions {
            on_error: OnError::Fail,
            ..Default::default()
        };
        let err = run("margin: 1px; border: 1px 2px", options).unwrap_err();
        assert!(matches!(err, ExpandError::DuplicateComponent { .. }));
    }

    #[test]
    fn test_no_passthrough() {
        let options = BlockOptions {
            passthrough: false,
            ..Default::default()
        };
        let block = run("color: red; outline: thin", options).unwrap();
        assert_eq!(lines(&block), vec!["outline-width: thin"]);
        assert_eq!(
            block.diagnostics.iter().next().map(|d| d.code.as_str()),
            Some("shorthand::unknown-shorthand")
        );
    }

    #[test]
    fn test_importance_kept() {
        let block = run("border-left: 1px solid !important; width: 5px !important", BlockOptions::default()).unwrap();
        assert_eq!(
            lines(&block),
            vec![
                "border-left-width: 1px !important",
                "border-left-style: solid !important",
                "width: 5px !important",
            ]
        );
    }
}
