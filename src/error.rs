//! Error types for the record service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Service Error Enum ==
/// Unified error type for the record service.
///
/// Absence of a record is not an error at the store or service level;
/// `NotFound` exists only so the HTTP layer can answer 404.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Mutation intentionally failed via the "fail" sentinel type
    #[error("Simulated failure: mutation intentionally rejected")]
    SimulatedFailure,

    /// Record not found (never existed, evicted, or expired)
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServiceError::SimulatedFailure => StatusCode::INTERNAL_SERVER_ERROR,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the record service.
pub type Result<T> = std::result::Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        let cases = vec![
            (ServiceError::SimulatedFailure, StatusCode::INTERNAL_SERVER_ERROR),
            (
                ServiceError::NotFound("r1".to_string()),
                StatusCode::NOT_FOUND,
            ),
            (
                ServiceError::InvalidRequest("bad".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                ServiceError::Internal("oops".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in cases {
            let response = error.into_response();
            assert_eq!(response.status(), expected_status);
        }
    }

    #[tokio::test]
    async fn test_error_body_has_error_field() {
        let response = ServiceError::SimulatedFailure.into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert!(json.get("error").is_some());
        assert!(json["error"].as_str().unwrap().contains("Simulated failure"));
    }
}
