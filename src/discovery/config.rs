//! Project configuration (shorthand.yaml) parsing.
//!
//! Every field is optional. A missing file behaves like an empty one.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ExpandError, Result};
use crate::expand::{BlockOptions, OnError};
use crate::output::OutputFormat;

/// Project configuration loaded from shorthand.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Output format for `expand`.
    pub format: OutputFormat,

    /// What to do with a declaration that fails to expand.
    pub on_error: OnError,

    /// Emit non-shorthand declarations unchanged.
    pub passthrough: bool,

    /// Patterns to exclude from stylesheet discovery.
    pub excludes: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            on_error: OnError::Skip,
            passthrough: true,
            excludes: vec![],
        }
    }
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ExpandError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to a map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| ExpandError::Config {
            message: format!("Invalid config: {}", e),
            help: Some("Check shorthand.yaml syntax, or run `shorthand init --force`".to_string()),
        })
    }

    /// Block expansion options described by this configuration.
    pub fn block_options(&self) -> BlockOptions {
        BlockOptions {
            on_error: self.on_error,
            passthrough: self.passthrough,
        }
    }

    /// Render the configuration as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| ExpandError::Config {
            message: format!("Failed to serialize config: {}", e),
            help: None,
        })
    }

    /// Check if a path should be excluded based on exclude patterns.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path = path.to_string_lossy().replace('\\', "/");
        self.excludes
            .iter()
            .any(|pattern| matches_pattern(&path, pattern))
    }
}

/// Glob-like matching: `*.min.css`, `vendor/*`, `**/dist/*` or a plain
/// substring.
fn matches_pattern(path: &str, pattern: &str) -> bool {
    if let Some(rest) = pattern.strip_prefix("**/") {
        return match rest.strip_suffix("/*") {
            Some(dir) => path.starts_with(&format!("{}/", dir)) || path.contains(&format!("/{}/", dir)),
            None => path.ends_with(rest) || path.contains(&format!("/{}", rest)),
        };
    }

    if let Some(suffix) = pattern.strip_prefix('*') {
        if !suffix.contains('/') {
            return path.ends_with(suffix);
        }
    }

    if let Some(dir) = pattern.strip_suffix("/*") {
        return path.starts_with(&format!("{}/", dir)) || path.contains(&format!("/{}/", dir));
    }

    path.contains(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
format: json
on_error: fail
passthrough: false
excludes:
  - "*.min.css"
  - "**/vendor/*"
"#;
        let config = Config::parse(yaml).unwrap();

        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.on_error, OnError::Fail);
        assert!(!config.passthrough);
        assert_eq!(config.excludes, vec!["*.min.css", "**/vendor/*"]);
    }

    #[test]
    fn test_parse_partial_config() {
        let config = Config::parse("on_error: fail").unwrap();
        assert_eq!(config.on_error, OnError::Fail);
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.passthrough);
    }

    #[test]
    fn test_parse_empty_config() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
        assert_eq!(Config::parse("  \n").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_invalid_config() {
        assert!(matches!(Config::parse("format: xml"), Err(ExpandError::Config { .. })));
        assert!(matches!(Config::parse("colour: red"), Err(ExpandError::Config { .. })));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = Config::load(&dir.path().join("shorthand.yaml")).unwrap_err();
        assert!(matches!(err, ExpandError::Io { .. }));
    }

    #[test]
    fn test_yaml_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("shorthand.yaml");
        let config = Config {
            on_error: OnError::Fail,
            excludes: vec!["*.min.css".to_string()],
            ..Default::default()
        };
        fs::write(&path, config.to_yaml().unwrap()).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn test_block_options() {
        let config = Config {
            passthrough: false,
            ..Default::default()
        };
        let options = config.block_options();
        assert_eq!(options.on_error, OnError::Skip);
        assert!(!options.passthrough);
    }

    #[test]
    fn test_is_excluded_extension() {
        let config = Config {
            excludes: vec!["*.min.css".to_string()],
            ..Default::default()
        };

        assert!(config.is_excluded(Path::new("site.min.css")));
        assert!(config.is_excluded(Path::new("dist/app.min.css")));
        assert!(!config.is_excluded(Path::new("site.css")));
    }

    #[test]
    fn test_is_excluded_directory() {
        let config = Config {
            excludes: vec!["**/vendor/*".to_string(), "build/*".to_string()],
            ..Default::default()
        };

        assert!(config.is_excluded(Path::new("vendor/reset.css")));
        assert!(config.is_excluded(Path::new("styles/vendor/grid.css")));
        assert!(config.is_excluded(Path::new("build/site.css")));
        assert!(!config.is_excluded(Path::new("styles/site.css")));
    }

    #[test]
    fn test_is_excluded_substring() {
        let config = Config {
            excludes: vec!["legacy".to_string()],
            ..Default::default()
        };

        assert!(config.is_excluded(Path::new("styles/legacy/old.css")));
        assert!(!config.is_excluded(Path::new("styles/new.css")));
    }
}
