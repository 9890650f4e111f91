//! # Configuration Errors

use std::path::PathBuf;

use thiserror::Error;

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {reason}")]
    Read { path: PathBuf, reason: String },

    #[error("Cannot parse config file {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("Invalid value for {field}: {value:?}")]
    Invalid { field: &'static str, value: String },
}

impl ConfigError {
    pub fn invalid(field: &'static str, value: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            value: value.into(),
        }
    }
}
