//! Client error types

use http::StatusCode;
use shared::ErrorCode;
use thiserror::Error;

/// Client error type
///
/// Every [`RestaurantApi`](crate::RestaurantApi) operation fails with one of
/// these; nothing is swallowed into empty data.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure (connect, TLS, body read)
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    /// Request exceeded the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// Structured error returned by the backend
    #[error("API error {status} [{code}]: {message}")]
    Api {
        status: StatusCode,
        code: ErrorCode,
        message: String,
    },

    /// 404 without a structured body
    #[error("Not found: {0}")]
    NotFound(String),

    /// 400 / 422 without a structured body
    #[error("Validation error: {0}")]
    Validation(String),

    /// 409 without a structured body
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Any other non-2xx status, or an in-process dispatch failure
    #[error("Internal error: {0}")]
    Internal(String),

    /// 2xx body that does not match the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Request body could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Bad client configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout
        } else {
            ClientError::Http(err)
        }
    }
}

impl ClientError {
    /// Backend error code, when the response carried one
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            ClientError::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// HTTP status of a rejected request
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::NotFound(_) => Some(StatusCode::NOT_FOUND),
            ClientError::Validation(_) => Some(StatusCode::BAD_REQUEST),
            ClientError::Conflict(_) => Some(StatusCode::CONFLICT),
            _ => None,
        }
    }

    /// Human-readable message of a rejected request
    pub fn message(&self) -> Option<&str> {
        match self {
            ClientError::Api { message, .. }
            | ClientError::NotFound(message)
            | ClientError::Validation(message)
            | ClientError::Conflict(message)
            | ClientError::Internal(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_not_in_queue(&self) -> bool {
        self.code() == Some(ErrorCode::NotInQueue)
    }

    /// Fill in `default` when the backend rejected the request without a message
    pub(crate) fn or_message(mut self, default: &str) -> Self {
        match &mut self {
            ClientError::Api { message, .. }
            | ClientError::NotFound(message)
            | ClientError::Validation(message)
            | ClientError::Conflict(message)
            | ClientError::Internal(message)
                if message.trim().is_empty() =>
            {
                *message = default.to_string();
            }
            _ => {}
        }
        self
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn api(code: ErrorCode, message: &str) -> ClientError {
        ClientError::Api {
            status: code.http_status(),
            code,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_code_and_status() {
        let err = api(ErrorCode::NotInQueue, "User is not in queue.");
        assert_eq!(err.code(), Some(ErrorCode::NotInQueue));
        assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
        assert!(err.is_not_in_queue());

        assert_eq!(ClientError::Timeout.code(), None);
        assert_eq!(
            ClientError::Conflict(String::new()).status(),
            Some(StatusCode::CONFLICT)
        );
    }

    #[test]
    fn test_or_message_fills_blank() {
        let err = api(ErrorCode::QueueAlreadyJoined, "").or_message("Failed to join queue");
        assert_eq!(err.message(), Some("Failed to join queue"));

        let err = ClientError::NotFound(" ".into()).or_message("Failed to leave queue");
        assert_eq!(err.message(), Some("Failed to leave queue"));
    }

    #[test]
    fn test_or_message_keeps_backend_message() {
        let err = api(ErrorCode::QueueAlreadyJoined, "You are already in the queue.")
            .or_message("Failed to join queue");
        assert_eq!(err.message(), Some("You are already in the queue."));
    }

    #[test]
    fn test_display() {
        let err = api(ErrorCode::NotInQueue, "User is not in queue.");
        assert_eq!(
            err.to_string(),
            "API error 400 Bad Request [NOT_IN_QUEUE]: User is not in queue."
        );
    }
}
