//! In-memory fake of the restaurant queue backend
//!
//! Serves the same HTTP contract as the real backend from a seeded
//! [`store::Store`], with a fixed simulated latency.
//!
//! ```text
//! queue-mock/src/
//! ├── api/        # axum routes and handlers
//! ├── services/   # queue, restaurant and table rules
//! ├── store.rs    # RwLock-guarded state
//! └── fixtures.rs # seed data
//! ```

pub mod api;
pub mod config;
pub mod fixtures;
pub mod logger;
pub mod services;
pub mod state;
pub mod store;

pub use api::build_router;
pub use config::Config;
pub use fixtures::Seed;
pub use logger::init_logger;
pub use state::{AppState, SharedState};

/// Router over `seed` with no simulated latency
pub fn test_router(seed: Seed) -> axum::Router {
    let config = Config::from_env().with_latency(std::time::Duration::ZERO);
    build_router(AppState::new(config, seed))
}
