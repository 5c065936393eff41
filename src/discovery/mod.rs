//! Configuration loading and stylesheet discovery.
//!
//! # Example
//!
//! ```ignore
//! use shorthand::discovery::{discover, load_config};
//!
//! let config = load_config(None, ".")?;
//! let scan = discover(&["styles".into()], &config);
//! println!("Found {} stylesheets", scan.total());
//! ```

mod config;
mod scanner;

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;

pub use config::Config;
pub use scanner::{is_stylesheet, scan_directory, scan_paths, ScanResult};

/// The name of the project configuration file.
pub const CONFIG_FILENAME: &str = "shorthand.yaml";

/// Load the configuration.
///
/// An explicit path must exist. Otherwise `shorthand.yaml` in `root` is used
/// when present, and the defaults when not.
pub fn load_config(explicit: Option<&Path>, root: impl AsRef<Path>) -> Result<Config> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let candidate = root.as_ref().join(CONFIG_FILENAME);
            if !candidate.exists() {
                debug!("no {} found, using defaults", CONFIG_FILENAME);
                return Ok(Config::default());
            }
            candidate
        }
    };

    debug!(path = %path.display(), "loading config");
    Config::load(&path)
}

/// Find stylesheets under the given paths, defaulting to the current
/// directory.
pub fn discover(paths: &[PathBuf], config: &Config) -> ScanResult {
    if paths.is_empty() {
        scan_directory(Path::new("."), config)
    } else {
        scan_paths(paths, config)
    }
}
