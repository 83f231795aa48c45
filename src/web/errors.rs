//! # Web API Error Types
//!
//! Maps core roster failures and boundary validation failures onto HTTP
//! responses. Leverages thiserror for structured error handling and Axum's
//! `IntoResponse` for HTTP conversion.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::error::RosterError;

/// Web API specific errors with HTTP status code mappings.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A roster operation failed; the core error kind drives the status.
    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error("Invalid request: {message}")]
    BadRequest { message: String },

    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    /// Create a BadRequest error with a custom message.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status_code, error_code) = match &self {
            // Unknown activity is the only not-found condition; duplicate
            // sign-up, missing registration, and a full activity are all
            // client errors against existing state.
            ApiError::Roster(RosterError::ActivityNotFound { .. }) => {
                (StatusCode::NOT_FOUND, "NOT_FOUND")
            }
            ApiError::Roster(RosterError::AlreadyRegistered { .. }) => {
                (StatusCode::BAD_REQUEST, "ALREADY_REGISTERED")
            }
            ApiError::Roster(RosterError::NotRegistered { .. }) => {
                (StatusCode::BAD_REQUEST, "NOT_REGISTERED")
            }
            ApiError::Roster(RosterError::ActivityFull { .. }) => {
                (StatusCode::BAD_REQUEST, "ACTIVITY_FULL")
            }
            ApiError::BadRequest { .. } => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let error_response = json!({
            "error": {
                "code": error_code,
                "message": self.to_string()
            }
        });

        (status_code, Json(error_response)).into_response()
    }
}

/// Result type alias for web API operations.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_errors_map_to_expected_statuses() {
        let cases = [
            (
                ApiError::from(RosterError::activity_not_found("Chess Club")),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::from(RosterError::already_registered("a@b", "Chess Club")),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::from(RosterError::not_registered("a@b", "Chess Club")),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::from(RosterError::ActivityFull {
                    activity: "Chess Club".to_string(),
                    max_participants: 12,
                }),
                StatusCode::BAD_REQUEST,
            ),
            (ApiError::bad_request("nope"), StatusCode::BAD_REQUEST),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }
}
