//! Stable identifiers attached to every logged API failure.
//!
//! Log pipelines filter on the numeric `error_code` field, so numbers are
//! never reused. `1xxx` are request-level failures, `2xxx` storage failures.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! assert_eq!(ErrorCode::TypeMismatch.as_str(), "TYPE_MISMATCH");
//! assert_eq!(ErrorCode::TypeMismatch.code(), 1002);
//! ```

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Body parsed but broke a field rule
    ValidationError,
    /// Path or query value of the wrong type
    TypeMismatch,
    /// Body is not JSON, or not the expected shape
    JsonExtraction,
    NotFound,
    Unauthorized,
    BadRequest,
    InternalError,
    DatabaseError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        self.describe().0
    }

    pub fn code(&self) -> i32 {
        self.describe().1
    }

    /// Status the failure is reported with, when the code alone decides it.
    pub fn status(&self) -> StatusCode {
        self.describe().2
    }

    /// English fallback, used where the real cause must not reach the client.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::InternalError | Self::DatabaseError => "An internal server error occurred",
            Self::ValidationError => "Validation Failed",
            Self::TypeMismatch => "Invalid parameter value",
            Self::JsonExtraction => "Failed to parse request body",
            Self::NotFound => "Resource not found",
            Self::Unauthorized => "Authentication required",
            Self::BadRequest => "Bad request",
        }
    }

    fn describe(&self) -> (&'static str, i32, StatusCode) {
        match self {
            Self::ValidationError => ("VALIDATION_ERROR", 1001, StatusCode::BAD_REQUEST),
            Self::TypeMismatch => ("TYPE_MISMATCH", 1002, StatusCode::BAD_REQUEST),
            Self::JsonExtraction => ("JSON_EXTRACTION", 1003, StatusCode::BAD_REQUEST),
            Self::NotFound => ("NOT_FOUND", 1004, StatusCode::NOT_FOUND),
            Self::InternalError => ("INTERNAL_ERROR", 1005, StatusCode::INTERNAL_SERVER_ERROR),
            Self::Unauthorized => ("UNAUTHORIZED", 1006, StatusCode::UNAUTHORIZED),
            Self::BadRequest => ("BAD_REQUEST", 1007, StatusCode::BAD_REQUEST),
            Self::DatabaseError => ("DATABASE_ERROR", 2003, StatusCode::INTERNAL_SERVER_ERROR),
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
