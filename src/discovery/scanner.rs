//! File system scanner for stylesheets.
//!
//! Recursively walks directories for `.css` files. Files named explicitly
//! are always taken, whatever their extension.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::config::Config;

/// Stylesheets found by a scan, in walk order.
#[derive(Debug, Default)]
pub struct ScanResult {
    pub files: Vec<PathBuf>,
    /// Paths given on the command line that do not exist.
    pub missing: Vec<PathBuf>,
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Merge another scan result into this one.
    pub fn merge(&mut self, other: ScanResult) {
        self.files.extend(other.files);
        self.missing.extend(other.missing);
    }
}

/// Scan a directory for stylesheets.
pub fn scan_directory(root: &Path, config: &Config) -> ScanResult {
    let mut result = ScanResult::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !entry.file_type().is_file() || !is_stylesheet(path) {
            continue;
        }
        // Patterns are matched against the path below the scanned root
        let relative = path.strip_prefix(root).unwrap_or(path);
        if config.is_excluded(relative) {
            continue;
        }
        result.files.push(path.to_path_buf());
    }

    result
}

/// Scan files and directories given by the user.
pub fn scan_paths(paths: &[PathBuf], config: &Config) -> ScanResult {
    let mut result = ScanResult::new();

    for path in paths {
        if path.is_dir() {
            result.merge(scan_directory(path, config));
        } else if path.is_file() {
            result.files.push(path.clone());
        } else {
            result.missing.push(path.clone());
        }
    }

    result
}

/// Whether a path has a `.css` extension.
pub fn is_stylesheet(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("css"))
}
