//! Logging setup
//!
//! `RUST_LOG` wins over the configured level when both are present.

use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logger(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{log_level},tower_http=debug")));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false)
        .try_init();
}
