//! Response types for the Equity Vesting Engine API.
//!
//! This module defines the success and error response structures and the
//! error mapping for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Response body for a successful `/batch` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResponse {
    /// The number of employees submitted for processing.
    pub processed: usize,
    /// The date the batch was evaluated at.
    pub as_of_date: NaiveDate,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::InvalidGrant {
                employee_id,
                total_units,
            } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_GRANT",
                    format!("Invalid grant for employee '{}'", employee_id),
                    format!("Total units must be positive, got {}", total_units),
                ),
            },
            EngineError::InvalidSchedule { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_SCHEDULE",
                    format!("Invalid schedule field '{}'", field),
                    message,
                ),
            },
            EngineError::ResultNotFound { employee_id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "RESULT_NOT_FOUND",
                    format!("No result found for employee: {}", employee_id),
                    "Run a batch calculation for this employee first",
                ),
            },
            EngineError::RosterNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "ROSTER_ERROR",
                    "Roster error",
                    format!("Roster file not found: {}", path),
                ),
            },
            EngineError::RosterParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "ROSTER_ERROR",
                    "Roster parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::WorkerFailed { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("WORKER_FAILED", "Batch worker failed", message),
            },
        }
    }
}
