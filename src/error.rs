//! Error handling module
//!
//! Centralized error types and HTTP response conversion.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::storage::StorageError;

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Client errors (4xx)
    #[error(transparent)]
    Domain(#[from] crate::domain::DomainError),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    // Server errors (5xx)
    /// The record may or may not have been written
    #[error("Failed to save transaction")]
    Persistence(#[source] StorageError),

    #[error("{message}")]
    Query {
        message: &'static str,
        #[source]
        source: StorageError,
    },

    /// `detail` is logged, never returned
    #[error("{message}")]
    Internal {
        message: &'static str,
        detail: String,
    },
}

impl AppError {
    /// Store failure while listing transactions
    pub fn list_failed(source: StorageError) -> Self {
        AppError::Query {
            message: "Failed to fetch transactions",
            source,
        }
    }

    /// Store failure while aggregating a balance
    pub fn balance_failed(source: StorageError) -> Self {
        AppError::Query {
            message: "Failed to calculate balance",
            source,
        }
    }

    /// Arithmetic overflow while aggregating a balance
    pub fn balance_overflow(detail: impl Into<String>) -> Self {
        AppError::Internal {
            message: "Failed to calculate balance",
            detail: detail.into(),
        }
    }

    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Domain(_) | AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Persistence(_)
            | AppError::Query { .. }
            | AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_code: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error_code = match &self {
            // 400 Bad Request
            AppError::Domain(domain_err) => domain_err.code(),
            AppError::InvalidRequest(_) => "invalid_request",

            // 500 Internal Server Error
            AppError::Persistence(e) => {
                tracing::error!("Error saving transaction: {:?}", e);
                "persistence_error"
            }
            AppError::Query { message, source } => {
                tracing::error!("{}: {:?}", message, source);
                "query_error"
            }
            AppError::Internal { message, detail } => {
                tracing::error!("{}: {}", message, detail);
                "internal_error"
            }
        };

        let body = ErrorResponse {
            error: self.to_string(),
            error_code: error_code.to_string(),
        };

        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn test_domain_error_is_bad_request_with_exact_reason() {
        let err = AppError::from(DomainError::ZeroAmount);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Amount cannot be zero");
    }

    #[test]
    fn test_store_failures_hide_cause() {
        let err = AppError::Persistence(StorageError::Unavailable("throttled".to_string()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Failed to save transaction");

        let err = AppError::balance_failed(StorageError::Unavailable("timeout".to_string()));
        assert_eq!(err.to_string(), "Failed to calculate balance");
        assert!(!err.to_string().contains("timeout"));
    }

    #[test]
    fn test_list_failure_message() {
        let err = AppError::list_failed(StorageError::Unavailable("down".to_string()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Failed to fetch transactions");
    }

    #[test]
    fn test_overflow_hides_detail() {
        let err = AppError::balance_overflow("balance overflow at 2025-04");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Failed to calculate balance");
    }
}
