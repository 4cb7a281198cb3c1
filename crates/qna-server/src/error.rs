//! Server error types

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use qna_store::StoreError;
use serde_json::json;
use std::fmt;

/// Server error type
///
/// The full failure taxonomy of the service: malformed input, absent
/// resources, and store-boundary failures. Validators and guards only
/// ever produce the first two; a store failure is converted at the
/// handler boundary and never retried.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed, missing, or out-of-range request data (400)
    InvalidInput(String),

    /// Referenced resource does not exist (404)
    NotFound(String),

    /// Underlying data-store failure (500)
    StoreFailure(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::StoreFailure(msg) => write!(f, "Store failure: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::StoreFailure(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::StoreFailure(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let message = match rejection {
            JsonRejection::JsonDataError(err) => {
                format!("Invalid JSON data: {}", err)
            }
            JsonRejection::JsonSyntaxError(err) => {
                format!("JSON syntax error: {}", err)
            }
            JsonRejection::MissingJsonContentType(_) => {
                "Missing 'Content-Type: application/json' header".to_string()
            }
            _ => format!("Failed to parse JSON: {}", rejection),
        };

        ApiError::InvalidInput(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = ApiError::InvalidInput("Invalid request data.".to_string());
        assert_eq!(err.to_string(), "Invalid input: Invalid request data.");
    }

    #[test]
    fn test_not_found_display() {
        let err = ApiError::NotFound("Question not found.".to_string());
        assert_eq!(err.to_string(), "Not found: Question not found.");
    }

    #[test]
    fn test_store_failure_display() {
        let err = ApiError::StoreFailure("connection refused".to_string());
        assert_eq!(err.to_string(), "Store failure: connection refused");
    }

    #[test]
    fn test_into_response_invalid_input() {
        let err = ApiError::InvalidInput("bad input".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_into_response_not_found() {
        let err = ApiError::NotFound("missing".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_into_response_store_failure() {
        let err = ApiError::StoreFailure("boom".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_store_error_conversion() {
        let store_err = StoreError::Constraint("fk broken".to_string());
        let api_err: ApiError = store_err.into();
        assert!(api_err.to_string().contains("Store failure"));
        assert!(api_err.to_string().contains("fk broken"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ApiError>();
    }
}
