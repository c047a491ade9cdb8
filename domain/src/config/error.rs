//! Configuration error types

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised while loading or saving a configuration file.
///
/// Every variant carries the offending key and value so callers can both
/// print a readable message and match on the failure programmatically.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value \"{value}\" for \"{key}\": {reason}")]
    Malformed {
        key: String,
        value: String,
        reason: String,
    },

    #[error("Value \"{value}\" for \"{key}\" is out of range [{min}, {max}]")]
    OutOfRange {
        key: String,
        value: String,
        min: String,
        max: String,
    },

    #[error("Unknown section \"{section}\"")]
    UnknownSection { section: String },

    #[error("Unknown key \"{key}\" in section \"{section}\"")]
    UnknownKey { section: String, key: String },

    #[error("Required key \"{key}\" is missing in section \"{section}\"")]
    MissingRequiredField { section: String, key: String },

    #[error("Unknown action \"{key}\" in shortcut \"{value}\"")]
    UnknownAction { key: String, value: String },

    #[error("You can't define more than {limit} shortcuts")]
    ShortcutLimitExceeded { limit: usize },

    #[error("Syntax error on line {line}: {message}")]
    Syntax { line: usize, message: String },

    #[error("Failed to access config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    pub(crate) fn malformed(key: &str, value: &str, reason: impl Into<String>) -> Self {
        ConfigError::Malformed {
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn out_of_range(
        key: &str,
        value: &str,
        min: impl ToString,
        max: impl ToString,
    ) -> Self {
        ConfigError::OutOfRange {
            key: key.to_string(),
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    /// Wrap an I/O failure with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::Io {
            path: path.into(),
            source,
        }
    }

    /// The key this error refers to, if any
    pub fn key(&self) -> Option<&str> {
        match self {
            ConfigError::Malformed { key, .. }
            | ConfigError::OutOfRange { key, .. }
            | ConfigError::UnknownKey { key, .. }
            | ConfigError::MissingRequiredField { key, .. }
            | ConfigError::UnknownAction { key, .. } => Some(key),
            _ => None,
        }
    }
}
