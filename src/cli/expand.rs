//! Expand command implementation.
//!
//! Reads declarations from the arguments (or stdin) and prints the
//! longhands to stdout.

use std::io::{self, Write};

use clap::Args;
use serde::Serialize;

use crate::discovery::Config;
use crate::error::{ExpandError, Result};
use crate::expand::{expand_declarations, BlockExpansion, OnError};
use crate::output::{plural, OutputFormat, Printer};
use crate::parser::parse_declarations;
use crate::registry::ShorthandRegistry;
use crate::types::Longhand;
use crate::validation::ValidationResult;

/// Expand shorthand declarations and print the longhands
#[derive(Args, Debug)]
pub struct ExpandArgs {
    /// Declarations such as "border: 1px solid red" (read from stdin when omitted)
    pub declarations: Vec<String>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// What to do with a declaration that fails to expand
    #[arg(long, value_enum)]
    pub on_error: Option<OnError>,

    /// Report non-shorthand declarations instead of passing them through
    #[arg(long)]
    pub no_passthrough: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    longhands: &'a [Longhand],
    diagnostics: &'a ValidationResult,
}

pub fn run(args: ExpandArgs, config: &Config, printer: &Printer) -> Result<()> {
    let source = if args.declarations.is_empty() {
        io::read_to_string(io::stdin())?
    } else {
        args.declarations.join(";\n")
    };

    let mut options = config.block_options();
    if let Some(on_error) = args.on_error {
        options.on_error = on_error;
    }
    if args.no_passthrough {
        options.passthrough = false;
    }

    let declarations = parse_declarations(&source)?;
    let block = expand_declarations(ShorthandRegistry::standard(), &declarations, &options)?;

    let output = match args.format.unwrap_or(config.format) {
        OutputFormat::Text => render_text(&block),
        OutputFormat::Json => render_json(&block)?,
    };
    io::stdout().lock().write_all(output.as_bytes())?;

    for diagnostic in block.diagnostics.iter() {
        printer.diagnostic(diagnostic, None);
    }
    if block.dropped > 0 {
        printer.warning(
            "Dropped",
            &plural(block.dropped, "declaration", "declarations"),
        );
    }

    Ok(())
}

/// One longhand per line.
pub fn render_text(block: &BlockExpansion) -> String {
    block
        .longhands
        .iter()
        .map(|longhand| format!("{}\n", longhand))
        .collect()
}

/// Longhands and diagnostics as a JSON document.
pub fn render_json(block: &BlockExpansion) -> Result<String> {
    let report = JsonReport {
        longhands: &block.longhands,
        diagnostics: &block.diagnostics,
    };
    let mut json = serde_json::to_string_pretty(&report).map_err(|e| ExpandError::Parse {
        message: format!("Failed to serialize output: {}", e),
        help: None,
    })?;
    json.push('\n');
    Ok(json)
}
