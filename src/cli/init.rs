//! Init command implementation.
//!
//! Writes a `shorthand.yaml` with the default settings spelled out.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::discovery::{Config, CONFIG_FILENAME};
use crate::error::{ExpandError, Result};
use crate::output::{display_path, Printer};

const HEADER: &str = "\
# shorthand configuration
#
# format:      text | json
# on_error:    skip (drop the declaration and report it) | fail
# passthrough: emit non-shorthand declarations unchanged
# excludes:    path patterns skipped by `shorthand check`, e.g. \"*.min.css\"

";

/// Write a default shorthand.yaml
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write the config into (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite an existing shorthand.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let config_path = args.path.join(CONFIG_FILENAME);

    if config_path.exists() && !args.force {
        return Err(ExpandError::Config {
            message: format!("{} already exists", display_path(&config_path)),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let yaml = format!("{}{}", HEADER, Config::default().to_yaml()?);
    fs::write(&config_path, yaml).map_err(|e| ExpandError::Io {
        path: config_path.clone(),
        message: format!("Failed to write config: {}", e),
    })?;

    printer.status("Created", &display_path(&config_path));
    Ok(())
}
