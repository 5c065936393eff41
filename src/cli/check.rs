//! Check command implementation.
//!
//! Parses every discovered stylesheet, validates each rule's declarations
//! and reports the diagnostics found.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use tracing::info;

use crate::discovery::{discover, Config};
use crate::error::{ExpandError, Result};
use crate::output::{display_path, plural, Printer};
use crate::parser::parse_stylesheet;
use crate::registry::ShorthandRegistry;
use crate::validation::{validate_declarations, Diagnostic, ValidationResult};

/// Check stylesheets for declarations that fail to expand
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Files or directories to check (default: current directory)
    pub paths: Vec<PathBuf>,

    /// Treat warnings as failures
    #[arg(long)]
    pub deny_warnings: bool,
}

/// A diagnostic and the line of the rule it came from.
#[derive(Debug)]
pub struct Finding {
    pub line: Option<u32>,
    pub diagnostic: Diagnostic,
}

/// Validate every rule of a stylesheet.
///
/// A syntax error is reported as a single finding for the whole source.
pub fn check_source(registry: &ShorthandRegistry, source: &str) -> Vec<Finding> {
    let rules = match parse_stylesheet(source) {
        Ok(rules) => rules,
        Err(err) => {
            return vec![Finding {
                line: None,
                diagnostic: Diagnostic::error(err.validation_code(), err.to_string()),
            }]
        }
    };

    rules
        .iter()
        .flat_map(|rule| {
            validate_declarations(registry, &rule.declarations)
                .iter()
                .map(|diagnostic| Finding {
                    line: Some(rule.line),
                    diagnostic: diagnostic.clone(),
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

fn check_file(registry: &ShorthandRegistry, path: &Path) -> Result<Vec<Finding>> {
    let source = fs::read_to_string(path).map_err(|e| ExpandError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read stylesheet: {}", e),
    })?;
    Ok(check_source(registry, &source))
}

pub fn run(args: CheckArgs, config: &Config, printer: &Printer) -> Result<()> {
    let scan = discover(&args.paths, config);
    if let Some(missing) = scan.missing.first() {
        return Err(ExpandError::Io {
            path: missing.clone(),
            message: "No such file or directory".to_string(),
        });
    }
    if scan.is_empty() {
        printer.warning("Finished", "no stylesheets found");
        return Ok(());
    }

    let registry = ShorthandRegistry::standard();
    let mut totals = ValidationResult::new();

    for path in &scan.files {
        let shown = display_path(path);
        printer.status("Checking", &shown);

        let findings = check_file(registry, path)?;
        info!(path = %shown, findings = findings.len(), "checked stylesheet");

        for finding in findings {
            let location = match finding.line {
                Some(line) => format!("{}:{}", shown, line),
                None => shown.clone(),
            };
            printer.diagnostic(&finding.diagnostic, Some(&location));
            totals.push(finding.diagnostic);
        }
    }

    let summary = format!(
        "{} ({}, {})",
        plural(scan.total(), "stylesheet", "stylesheets"),
        plural(totals.error_count(), "error", "errors"),
        plural(totals.warning_count(), "warning", "warnings"),
    );

    let failed = totals.has_errors() || (args.deny_warnings && totals.has_warnings());
    if failed {
        printer.error("Failed", &summary);
        return Err(ExpandError::Check {
            message: format!("Check failed: {}", summary),
            help: if totals.has_errors() {
                None
            } else {
                Some("Warnings are failures because of --deny-warnings".to_string())
            },
        });
    }

    printer.status("Finished", &summary);
    Ok(())
}
