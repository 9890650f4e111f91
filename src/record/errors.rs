//! # Validation Errors

use thiserror::Error;

/// Result type for request validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Reasons an inbound request is rejected before it reaches the store.
///
/// The display text is the exact `error` string returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A body is required but none was sent
    #[error("Request body is required")]
    MissingBody,

    /// A body was sent but it is not a JSON object
    #[error("Request body must be a JSON object")]
    MalformedBody,

    /// The body exceeds the request size limit
    #[error("Request body is too large")]
    BodyTooLarge,

    /// `name` (or `title`) is absent, not a string, or blank
    #[error("Name is required")]
    MissingRequiredField,

    /// The path identifier is absent or blank
    #[error("Item ID is required")]
    MissingIdentifier,
}

impl ValidationError {
    /// Stable kind label used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::MissingBody => "missing_body",
            ValidationError::MalformedBody => "malformed_body",
            ValidationError::BodyTooLarge => "body_too_large",
            ValidationError::MissingRequiredField => "missing_required_field",
            ValidationError::MissingIdentifier => "missing_identifier",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_facing_messages() {
        assert_eq!(
            ValidationError::MissingBody.to_string(),
            "Request body is required"
        );
        assert_eq!(
            ValidationError::MissingRequiredField.to_string(),
            "Name is required"
        );
        assert_eq!(
            ValidationError::MissingIdentifier.to_string(),
            "Item ID is required"
        );
    }
}
