use miette::Diagnostic;
use thiserror::Error;

use crate::types::Value;

/// Main error type for shorthand operations
#[derive(Error, Diagnostic, Debug)]
pub enum ExpandError {
    #[error("Expected 1 to 4 values for '{shorthand}', got {count}")]
    #[diagnostic(
        code(shorthand::invalid_count),
        help("Box shorthands take one value per side: top, right, bottom, left")
    )]
    InvalidValueCount { shorthand: String, count: usize },

    #[error("Invalid value for '{shorthand}': {token}")]
    #[diagnostic(code(shorthand::unknown_value))]
    UnknownComponentValue {
        shorthand: String,
        token: Value,
        #[help]
        help: Option<String>,
    },

    #[error("Duplicate {category} in '{shorthand}'")]
    #[diagnostic(
        code(shorthand::duplicate),
        help("Each component may appear at most once in a shorthand")
    )]
    DuplicateComponent { shorthand: String, category: String },

    #[error("Unknown shorthand property: {name}")]
    #[diagnostic(code(shorthand::unknown_shorthand))]
    UnknownShorthand { name: String },

    #[error("IO error: {0}")]
    #[diagnostic(code(shorthand::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(shorthand::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(shorthand::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("{message}")]
    #[diagnostic(code(shorthand::check))]
    Check {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(shorthand::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl ExpandError {
    /// Stable validation code for expansion failures.
    pub fn validation_code(&self) -> &'static str {
        match self {
            ExpandError::InvalidValueCount { .. } => "shorthand::invalid-count",
            ExpandError::UnknownComponentValue { .. } => "shorthand::unknown-value",
            ExpandError::DuplicateComponent { .. } => "shorthand::duplicate",
            ExpandError::UnknownShorthand { .. } => "shorthand::unknown-shorthand",
            ExpandError::IoError(_) | ExpandError::Io { .. } => "shorthand::io",
            ExpandError::Parse { .. } => "shorthand::parse",
            ExpandError::Check { .. } => "shorthand::check",
            ExpandError::Config { .. } => "shorthand::config",
        }
    }
}

pub type Result<T> = std::result::Result<T, ExpandError>;
