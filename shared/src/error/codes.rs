//! Error codes understood by the queue backend and its clients
//!
//! Codes travel as SCREAMING_SNAKE_CASE strings inside the error body:
//!
//! ```json
//! { "error": { "code": "NOT_IN_QUEUE", "message": "User is not in queue." } }
//! ```
//!
//! Codes the client does not recognise decode as [`ErrorCode::Unknown`]
//! so a newer backend never breaks an older client.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Machine-readable error code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // ==================== General ====================
    /// Malformed or unacceptable request
    InvalidRequest,
    /// Unexpected server-side failure
    InternalError,

    // ==================== Restaurant ====================
    /// Restaurant id does not exist
    RestaurantNotFound,

    // ==================== Queue ====================
    /// User already holds a ticket somewhere
    QueueAlreadyJoined,
    /// User (or ticket) is not waiting in the queue
    NotInQueue,

    // ==================== Table ====================
    /// Table id does not exist for this restaurant
    TableNotFound,
    /// Table already has the requested status
    TableInvalidAction,

    // ==================== Fallback ====================
    /// Code not known to this build
    #[serde(other)]
    Unknown,
}

impl ErrorCode {
    /// Wire representation of the code
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidRequest => "INVALID_REQUEST",
            ErrorCode::InternalError => "INTERNAL_ERROR",
            ErrorCode::Unknown => "UNKNOWN",
            ErrorCode::RestaurantNotFound => "RESTAURANT_NOT_FOUND",
            ErrorCode::QueueAlreadyJoined => "QUEUE_ALREADY_JOINED",
            ErrorCode::NotInQueue => "NOT_IN_QUEUE",
            ErrorCode::TableNotFound => "TABLE_NOT_FOUND",
            ErrorCode::TableInvalidAction => "TABLE_INVALID_ACTION",
        }
    }

    /// Default human-readable message
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::InvalidRequest => "Invalid request.",
            ErrorCode::InternalError => "Internal server error.",
            ErrorCode::Unknown => "An unknown error occurred.",
            ErrorCode::RestaurantNotFound => "Restaurant does not exist.",
            ErrorCode::QueueAlreadyJoined => "You are already in the queue.",
            ErrorCode::NotInQueue => "User is not in queue.",
            ErrorCode::TableNotFound => "Table does not exist.",
            ErrorCode::TableInvalidAction => "Table status is unchanged.",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_match_as_str() {
        for code in [
            ErrorCode::InvalidRequest,
            ErrorCode::InternalError,
            ErrorCode::RestaurantNotFound,
            ErrorCode::QueueAlreadyJoined,
            ErrorCode::NotInQueue,
            ErrorCode::TableNotFound,
            ErrorCode::TableInvalidAction,
            ErrorCode::Unknown,
        ] {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{}\"", code.as_str()));
        }
    }

    #[test]
    fn test_unrecognised_code_is_unknown() {
        let code: ErrorCode = serde_json::from_str("\"PAYMENT_REQUIRED\"").unwrap();
        assert_eq!(code, ErrorCode::Unknown);
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorCode::NotInQueue.to_string(), "NOT_IN_QUEUE");
    }
}
