//! Error type and wire error body

use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application error with a structured error code
///
/// Raised by the backend services and rendered as [`ApiErrorBody`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: {message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    pub fn restaurant_not_found() -> Self {
        Self::new(ErrorCode::RestaurantNotFound)
    }

    pub fn already_joined() -> Self {
        Self::new(ErrorCode::QueueAlreadyJoined)
    }

    pub fn not_in_queue() -> Self {
        Self::new(ErrorCode::NotInQueue)
    }

    pub fn table_not_found() -> Self {
        Self::new(ErrorCode::TableNotFound)
    }

    /// Table already in `current_status`
    pub fn table_invalid_action(current_status: impl std::fmt::Display) -> Self {
        Self::with_message(
            ErrorCode::TableInvalidAction,
            format!("Cannot set a table that is already {}.", current_status),
        )
    }

    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }
}

/// Detail object nested in [`ApiErrorBody`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    pub code: ErrorCode,
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body returned by the backend on non-2xx responses
///
/// ```json
/// { "error": { "code": "QUEUE_ALREADY_JOINED", "message": "You are already in the queue." } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

impl From<&AppError> for ApiErrorBody {
    fn from(err: &AppError) -> Self {
        Self {
            error: ApiErrorDetail {
                code: err.code,
                message: Some(err.message.clone()),
            },
        }
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
