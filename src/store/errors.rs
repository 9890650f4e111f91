//! # Store Errors

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The existence precondition of a conditional write did not hold
    #[error("The conditional request failed")]
    ConditionalCheckFailed,

    /// The table could not be reached
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// Table contents could not be decoded
    #[error("Corrupt table state: {0}")]
    Corrupt(String),

    /// I/O failure while reading or writing the table
    #[error("I/O error: {0}")]
    Io(String),
}

impl StoreError {
    /// Stable kind label used in logs and for classification
    pub fn kind(&self) -> &'static str {
        match self {
            StoreError::ConditionalCheckFailed => "conditional_check_failed",
            StoreError::Unavailable(_) => "unavailable",
            StoreError::Corrupt(_) => "corrupt",
            StoreError::Io(_) => "io",
        }
    }

    /// True when the failure is a precondition miss rather than an outage
    pub fn is_conditional_check_failed(&self) -> bool {
        matches!(self, StoreError::ConditionalCheckFailed)
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err.to_string())
    }
}
