//! Error system shared by the queue backend and its clients
//!
//! - [`ErrorCode`]: machine-readable codes carried on the wire
//! - [`AppError`]: error raised by backend services
//! - [`ApiErrorBody`]: JSON body of every non-2xx response
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiErrorBody};
//!
//! let err = AppError::new(ErrorCode::NotInQueue);
//! let body = ApiErrorBody::from(&err);
//! assert_eq!(body.error.code, ErrorCode::NotInQueue);
//! ```

mod codes;
mod http;
mod types;

pub use codes::ErrorCode;
pub use types::{ApiErrorBody, ApiErrorDetail, AppError, AppResult};
