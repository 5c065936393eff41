//! List command implementation.
//!
//! Prints the registered shorthands and the longhands they set.

use clap::Args;

use crate::error::Result;
use crate::output::{plural, Printer};
use crate::registry::{Category, Shorthand, ShorthandRegistry};

/// List the supported shorthands and their longhands
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Show the values each component accepts
    #[arg(long)]
    pub components: bool,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let registry = ShorthandRegistry::standard();

    for shorthand in registry.iter() {
        printer.info(&shorthand.name, &describe(shorthand, printer));
        if args.components {
            for component in shorthand.strategy.components() {
                let accepts: Vec<String> = component.accepts.iter().map(describe_category).collect();
                printer.info("", &format!("{} {}", printer.dim(component.name), accepts.join(" | ")));
            }
        }
    }

    printer.status(
        "Listed",
        &plural(registry.len(), "shorthand", "shorthands"),
    );
    Ok(())
}

fn describe(shorthand: &Shorthand, printer: &Printer) -> String {
    format!(
        "{} {}",
        shorthand.longhands.join(", "),
        printer.dim(&format!("({})", shorthand.strategy.name()))
    )
}

fn describe_category(category: &Category) -> String {
    match category {
        Category::Length => "<length>".to_string(),
        Category::Color => "<color>".to_string(),
        Category::UrlOrNone => "<url> | none".to_string(),
        Category::KeywordSet(keywords) => keywords.join(" | "),
    }
}
