//! Shared types for the restaurant queue system
//!
//! Data models and the error contract used by both the backend and
//! `queue-client`.

pub mod error;
pub mod models;

// Re-exports
pub use error::{ApiErrorBody, AppError, AppResult, ErrorCode};
