//! CLI-specific error types
//!
//! All CLI errors end the process with a non-zero exit code.

use std::io;

use thiserror::Error;

use crate::config::ConfigError;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be resolved
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// Runtime or listener failure
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Output encoding failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        match self {
            Self::Config(_) => "RECORDBOX_CLI_CONFIG_ERROR",
            Self::Io(_) => "RECORDBOX_CLI_IO_ERROR",
            Self::Json(_) => "RECORDBOX_CLI_JSON_ERROR",
        }
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
