//! Error types for HTTP handlers.
//!
//! Bridges domain errors and axum extractor rejections to JSON responses
//! of the form `{"code": "...", "message": "..."}`.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use ironmonger_core::CoreError;
use serde::Serialize;
use std::fmt;

/// Handler error: status code plus a stable code for clients.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    /// 400, for bodies and parameters that could not be parsed.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "BAD_REQUEST", message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "NOT_FOUND", message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn code(&self) -> &'static str {
        self.code
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Error response body (JSON).
#[derive(Debug, Serialize)]
struct ErrorResponse {
    code: &'static str,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            code: self.code,
            message: self.message,
        };

        (self.status, Json(body)).into_response()
    }
}

/// Domain error classification.
///
/// ```text
/// InvalidInput       → 400 VALIDATION_ERROR
/// NotFound           → 404 NOT_FOUND
/// Conflict           → 409 CONFLICT
/// InsufficientStock  → 409 INSUFFICIENT_STOCK
/// Overflow           → 422 AMOUNT_OUT_OF_RANGE
/// Storage            → 500 DATABASE_ERROR (details logged only)
/// ```
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidInput(e) => {
                Self::new(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", e.to_string())
            }
            err @ CoreError::NotFound { .. } => Self::not_found(err.to_string()),
            CoreError::Conflict(msg) => Self::new(StatusCode::CONFLICT, "CONFLICT", msg),
            err @ CoreError::InsufficientStock { .. } => {
                Self::new(StatusCode::CONFLICT, "INSUFFICIENT_STOCK", err.to_string())
            }
            err @ CoreError::Overflow(_) => Self::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                "AMOUNT_OUT_OF_RANGE",
                err.to_string(),
            ),
            CoreError::Storage(msg) => {
                tracing::error!(error = %msg, "Storage failure");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "internal database error",
                )
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use ironmonger_core::ValidationError;

    #[test]
    fn test_domain_mapping() {
        let err = ApiError::from(CoreError::InsufficientStock {
            product_id: 2,
            requested: 5,
        });
        assert_eq!(err.status(), StatusCode::CONFLICT);
        assert_eq!(err.code(), "INSUFFICIENT_STOCK");

        let err = ApiError::from(CoreError::InvalidInput(ValidationError::Empty {
            field: "items".to_string(),
        }));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "[VALIDATION_ERROR] items must not be empty");

        let err = ApiError::from(CoreError::Overflow("sum of sale totals".to_string()));
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.code(), "AMOUNT_OUT_OF_RANGE");

        let err = ApiError::from(CoreError::not_found("Sale", 4));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_storage_details_are_hidden() {
        let err = ApiError::from(CoreError::Storage("disk I/O error at /var/db".to_string()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code(), "DATABASE_ERROR");
        assert!(!err.to_string().contains("/var/db"));
    }
}
