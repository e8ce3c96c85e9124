use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Success envelope carrying a message and the affected resource.
///
/// ```json
/// {
///   "message": "Task 'Buy coffee' created successfully.",
///   "data": { "id": "...", "title": "Buy coffee" },
///   "timestamp": "2025-03-01T12:00:00Z"
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: T,
    pub timestamp: DateTime<Utc>,
}

impl<T> ApiResponse<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data,
            timestamp: Utc::now(),
        }
    }
}

/// Success envelope for operations that return no resource (e.g. deletes).
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_shape() {
        let json = serde_json::to_value(ApiResponse::new("done", vec![1, 2])).unwrap();
        assert_eq!(json["message"], "done");
        assert_eq!(json["data"], serde_json::json!([1, 2]));
        assert!(json["timestamp"].is_string());
    }

    #[test]
    fn test_message_response_has_no_data() {
        let json = serde_json::to_value(MessageResponse::new("deleted")).unwrap();
        assert!(json.get("data").is_none());
        assert_eq!(json["message"], "deleted");
        assert!(json["timestamp"].is_string());
    }
}
