//! HTTP API of the fake backend
//!
//! # Routes
//!
//! | Path | Method | Purpose |
//! |------|--------|---------|
//! | / | GET | Liveness banner |
//! | /health | GET | Health check |
//! | /api/restaurants | GET | Restaurant list |
//! | /api/restaurants/{id}/queue | POST / DELETE | Join / leave |
//! | /api/restaurants/{id}/queue/status | GET | Queue status |
//! | /api/restaurants/{id}/queue/next | GET | Next ticket to call |
//! | /api/user/{id}/queue | GET | A user's ticket |
//! | /api/restaurants/{id}/table | GET | Seat layout |
//! | /api/restaurants/{id}/tables/{table_id} | POST | Seat or clear a table |

mod health;
mod queue;
mod restaurants;
mod tables;

use axum::Router;
use axum::extract::{Request, State};
use axum::middleware::{self, Next};
use axum::response::Response;
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::SharedState;

/// Routes under `/api`, without middleware or state
pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .merge(restaurants::router())
        .merge(queue::router())
        .merge(tables::router())
}

/// Fully configured application
///
/// Used by the binary and, through `oneshot`, by tests and the in-process
/// client.
pub fn build_router(state: SharedState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        .merge(health::router())
        .nest("/api", api_routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            simulate_latency,
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn simulate_latency(
    State(state): State<SharedState>,
    request: Request,
    next: Next,
) -> Response {
    let latency = state.config.latency;
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
    next.run(request).await
}
