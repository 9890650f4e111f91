//! # Service Errors

use thiserror::Error;

use crate::record::ValidationError;
use crate::store::StoreError;

/// Result type for record service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Outcome of a failed record operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Rejected before reaching the store
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Create hit an existing id
    #[error("Item with this ID already exists")]
    AlreadyExists(String),

    /// Read, update or delete hit a missing id
    #[error("Item not found")]
    NotFound(String),

    /// Any other store failure
    #[error(transparent)]
    Store(StoreError),
}

impl ServiceError {
    /// Stable kind label used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::Validation(err) => err.kind(),
            ServiceError::AlreadyExists(_) => "already_exists",
            ServiceError::NotFound(_) => "not_found",
            ServiceError::Store(err) => err.kind(),
        }
    }
}
