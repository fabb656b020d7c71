//! API error types with JSON responses.
//!
//! Every handler-level failure collapses to HTTP 500 with a
//! `{message, error}` body: `message` is the operation-level summary
//! ("Update failed"), `error` is a stable classification code. The
//! underlying error text never reaches the client; it is logged
//! server-side when the response is built.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use studyhub_store::StoreError;

/// API error that can be returned from handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The store could not complete the operation.
    #[error("{message}")]
    Store {
        message: String,
        #[source]
        source: StoreError,
    },

    /// The path identifier could not be parsed.
    #[error("{message}")]
    InvalidId {
        message: String,
        #[source]
        source: uuid::Error,
    },
}

impl ApiError {
    /// Wrap a store failure with its operation-level message.
    pub fn store(message: impl Into<String>, source: StoreError) -> Self {
        Self::Store {
            message: message.into(),
            source,
        }
    }

    /// Wrap a malformed path identifier with its operation-level message.
    pub fn invalid_id(message: impl Into<String>, source: uuid::Error) -> Self {
        Self::InvalidId {
            message: message.into(),
            source,
        }
    }

    /// Stable classification code sent to the client in place of the
    /// underlying error text.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Store {
                source: StoreError::Serialization(_),
                ..
            } => "MALFORMED_RECORD",
            Self::Store { .. } => "STORE_UNAVAILABLE",
            Self::InvalidId { .. } => "INVALID_ID",
        }
    }

    /// Get the HTTP status code for this error.
    ///
    /// Handler-level failures never produce 404 or 400; every path
    /// collapses to 500.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// JSON error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Operation-level summary.
    pub message: String,
    /// Stable classification code.
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Full detail stays in the server log; the client sees the code.
        match &self {
            Self::Store { message, source } => {
                tracing::error!(error = %source, code = self.code(), "{}", message);
            }
            Self::InvalidId { message, source } => {
                tracing::error!(error = %source, code = self.code(), "{}", message);
            }
        }

        let body = ErrorResponse {
            message: self.to_string(),
            error: self.code().to_string(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_classification() {
        let err = ApiError::store(
            "Failed to fetch notes",
            StoreError::Migration("connection refused".to_string()),
        );
        assert_eq!(err.code(), "STORE_UNAVAILABLE");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Failed to fetch notes");
    }

    #[test]
    fn test_serialization_error_classification() {
        let source: serde_json::Error =
            serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = ApiError::store("Failed to fetch notes", StoreError::Serialization(source));
        assert_eq!(err.code(), "MALFORMED_RECORD");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_invalid_id_classification() {
        let source = uuid::Uuid::parse_str("not-a-uuid").unwrap_err();
        let err = ApiError::invalid_id("Update failed", source);
        assert_eq!(err.code(), "INVALID_ID");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_response_shape() {
        let body = ErrorResponse {
            message: "Delete failed".to_string(),
            error: "STORE_UNAVAILABLE".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["message"], "Delete failed");
        assert_eq!(json["error"], "STORE_UNAVAILABLE");
    }
}
