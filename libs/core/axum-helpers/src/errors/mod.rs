pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Standard error body returned for every failed request.
///
/// - `timestamp`: when the failure was produced (UTC)
/// - `status`: numeric HTTP status
/// - `error`: HTTP reason phrase (e.g. "Bad Request")
/// - `message`: human-readable, localized message
/// - `details`: `"field: message"` entries for validation failures
///
/// # JSON Example
///
/// ```json
/// {
///   "timestamp": "2025-03-01T12:00:00Z",
///   "status": 400,
///   "error": "Bad Request",
///   "message": "Validation Failed",
///   "details": ["title: Title must not be empty and must be at most 100 characters."]
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub timestamp: DateTime<Utc>,
    pub status: u16,
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Unknown").to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Vec<String>) -> Self {
        self.details = Some(details);
        self
    }
}

/// Application error type that can be converted to HTTP responses.
///
/// Messages carried by the string variants are already localized by the
/// caller; `AppError` only decides the status code and logging level.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Query extraction error: {0}")]
    QueryExtractorRejection(#[from] QueryRejection),

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        details: Vec<String>,
    },

    #[error("Type mismatch: {0}")]
    TypeMismatch(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, details) = match self {
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!(
                    error_code = ErrorCode::JsonExtraction.code(),
                    "JSON extraction error: {:?}",
                    e
                );
                (e.status(), e.body_text(), None)
            }
            AppError::QueryExtractorRejection(e) => {
                tracing::info!(
                    error_code = ErrorCode::BadRequest.code(),
                    "Query extraction error: {:?}",
                    e
                );
                (e.status(), e.body_text(), None)
            }
            AppError::Validation { message, details } => {
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    ?details,
                    "Validation error"
                );
                (ErrorCode::ValidationError.status(), message, Some(details))
            }
            AppError::TypeMismatch(msg) => {
                tracing::info!(
                    error_code = ErrorCode::TypeMismatch.code(),
                    "Type mismatch: {}",
                    msg
                );
                (ErrorCode::TypeMismatch.status(), msg, None)
            }
            AppError::BadRequest(msg) => {
                tracing::info!(
                    error_code = ErrorCode::BadRequest.code(),
                    "Bad request: {}",
                    msg
                );
                (ErrorCode::BadRequest.status(), msg, None)
            }
            AppError::Unauthorized(msg) => {
                tracing::info!(
                    error_code = ErrorCode::Unauthorized.code(),
                    "Unauthorized: {}",
                    msg
                );
                (ErrorCode::Unauthorized.status(), msg, None)
            }
            AppError::NotFound(msg) => {
                tracing::info!(
                    error_code = ErrorCode::NotFound.code(),
                    "Not found: {}",
                    msg
                );
                (ErrorCode::NotFound.status(), msg, None)
            }
            AppError::Database(e) => {
                tracing::error!(
                    error_code = ErrorCode::DatabaseError.code(),
                    "Database error: {:?}",
                    e
                );
                (
                    ErrorCode::DatabaseError.status(),
                    ErrorCode::DatabaseError.default_message().to_string(),
                    None,
                )
            }
            AppError::InternalServerError(msg) => {
                tracing::error!(
                    error_code = ErrorCode::InternalError.code(),
                    "Internal server error: {}",
                    msg
                );
                (
                    ErrorCode::InternalError.status(),
                    ErrorCode::InternalError.default_message().to_string(),
                    None,
                )
            }
        };

        let mut body = ErrorResponse::new(status, message);
        body.details = details;

        (status, Json(body)).into_response()
    }
}
