//! Client module - transports and the restaurant client.
//!
//! [`RestaurantClient`] is generic over the [`HttpClient`] strategy:
//! [`NetworkHttpClient`] for a real backend, or [`OneshotHttpClient`] for a
//! router in the same process.

pub mod http;
#[cfg(feature = "in-process")]
pub mod http_oneshot;
mod response;
mod restaurant;

pub use http::{HttpClient, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use http_oneshot::OneshotHttpClient;
pub use restaurant::RestaurantClient;
