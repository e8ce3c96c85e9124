//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "timestamp": "2025-03-01T12:00:00Z",
        "status": 500,
        "error": "Internal Server Error",
        "message": "An internal server error occurred"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "timestamp": "2025-03-01T12:00:00Z",
        "status": 400,
        "error": "Bad Request",
        "message": "Validation Failed",
        "details": ["title: Title must not be empty and must be at most 100 characters."]
    })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Parameter could not be converted",
    content_type = "application/json",
    example = json!({
        "timestamp": "2025-03-01T12:00:00Z",
        "status": 400,
        "error": "Bad Request",
        "message": "Failed to convert 'id' with value: 'abc'"
    })
)]
pub struct BadRequestTypeMismatchResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "timestamp": "2025-03-01T12:00:00Z",
        "status": 404,
        "error": "Not Found",
        "message": "Task with ID 6f1c1a52-8f0e-4d8e-9a57-2f8f3c4a1b7e not found."
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Unauthorized - Basic credentials missing or invalid",
    content_type = "application/json",
    example = json!({
        "timestamp": "2025-03-01T12:00:00Z",
        "status": 401,
        "error": "Unauthorized",
        "message": "Invalid or missing credentials."
    })
)]
pub struct UnauthorizedResponse(pub ErrorResponse);
