//! Queue Client - typed client for the restaurant queue backend
//!
//! - [`RestaurantApi`]: the eight backend operations
//! - [`RestaurantClient`]: implementation over a [`HttpClient`] transport
//! - [`routes`]: front-end page table

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod routes;

pub use api::RestaurantApi;
#[cfg(feature = "in-process")]
pub use client::OneshotHttpClient;
pub use client::{HttpClient, NetworkHttpClient, RestaurantClient};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use routes::{Audience, Page, PageRoute, resolve};

// Re-export shared types for convenience
pub use shared::ErrorCode;
pub use shared::models::{
    JoinQueueResponse, QueueNextResponse, QueueStatusResponse, RestaurantItem, RestaurantStatus,
    SeatDetail, SeatStatus, UpdateTableStatusResponse, UserQueueStatusResponse,
};
