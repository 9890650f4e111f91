//! # REST API Errors
//!
//! Maps a failed record operation onto the HTTP error contract and logs it
//! before the response leaves.

use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use crate::record::ValidationError;
use crate::service::ServiceError;

/// Result type for REST handlers
pub type RestResult<T> = Result<T, RestError>;

/// Record operations exposed over HTTP
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Get,
    Update,
    Delete,
    List,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::Get => "get",
            Operation::Update => "update",
            Operation::Delete => "delete",
            Operation::List => "list",
        }
    }

    /// Generic `error` text for an unhandled store failure
    pub fn failure_message(&self) -> &'static str {
        match self {
            Operation::Create => "Could not create item",
            Operation::Get => "Could not get item",
            Operation::Update => "Could not update item",
            Operation::Delete => "Could not delete item",
            Operation::List => "Could not list items",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed operation, ready to be rendered as a response
#[derive(Debug, Clone, Error)]
#[error("{operation} failed: {source}")]
pub struct RestError {
    pub operation: Operation,
    #[source]
    pub source: ServiceError,
}

impl RestError {
    pub fn new(operation: Operation, source: ServiceError) -> Self {
        Self { operation, source }
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match &self.source {
            // 413 Payload Too Large
            ServiceError::Validation(ValidationError::BodyTooLarge) => {
                StatusCode::PAYLOAD_TOO_LARGE
            }

            // 400 Bad Request
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,

            // 409 Conflict
            ServiceError::AlreadyExists(_) => StatusCode::CONFLICT,

            // 404 Not Found
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,

            // 500 Internal Server Error
            ServiceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Response body for this error
    pub fn body(&self) -> ErrorResponse {
        match &self.source {
            ServiceError::Store(err) => ErrorResponse {
                error: self.operation.failure_message().to_string(),
                message: Some(err.to_string()),
            },
            other => ErrorResponse {
                error: other.to_string(),
                message: None,
            },
        }
    }

    fn log(&self) {
        let operation = self.operation.as_str();
        let kind = self.source.kind();

        match &self.source {
            ServiceError::Store(err) => {
                error!(operation, kind, error = %err, "record operation failed");
            }
            ServiceError::AlreadyExists(id) | ServiceError::NotFound(id) => {
                warn!(operation, kind, %id, "record operation rejected");
            }
            ServiceError::Validation(_) => {
                warn!(operation, kind, "invalid request");
            }
        }
    }
}

/// Error response body: `{error}` or, for store failures, `{error, message}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        self.log();
        (self.status_code(), Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;

    #[test]
    fn test_status_codes() {
        let cases = [
            (
                ServiceError::Validation(ValidationError::MissingBody),
                StatusCode::BAD_REQUEST,
            ),
            (
                ServiceError::Validation(ValidationError::BodyTooLarge),
                StatusCode::PAYLOAD_TOO_LARGE,
            ),
            (
                ServiceError::AlreadyExists("r1".into()),
                StatusCode::CONFLICT,
            ),
            (ServiceError::NotFound("r1".into()), StatusCode::NOT_FOUND),
            (
                ServiceError::Store(StoreError::Io("disk".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (source, status) in cases {
            assert_eq!(RestError::new(Operation::Create, source).status_code(), status);
        }
    }

    #[test]
    fn test_client_errors_have_no_message() {
        let err = RestError::new(Operation::Update, ServiceError::NotFound("r1".into()));
        let json = serde_json::to_value(err.body()).unwrap();

        assert_eq!(json, serde_json::json!({"error": "Item not found"}));
    }

    #[test]
    fn test_store_failure_carries_diagnostic() {
        let err = RestError::new(
            Operation::List,
            ServiceError::Store(StoreError::Unavailable("connection refused".into())),
        );
        let body = err.body();

        assert_eq!(body.error, "Could not list items");
        assert_eq!(
            body.message.as_deref(),
            Some("Store unavailable: connection refused")
        );
    }
}
