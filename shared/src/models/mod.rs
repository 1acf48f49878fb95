//! Data models
//!
//! Request/response records exchanged between the queue backend and its
//! clients. Wire names are the snake_case field names. All IDs are `i64`.

pub mod queue;
pub mod restaurant;
pub mod seat;

// Re-exports
pub use queue::*;
pub use restaurant::*;
pub use seat::*;
