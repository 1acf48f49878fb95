use axum::{Json, Router, extract::State, routing::get};
use shared::models::RestaurantItem;

use crate::state::SharedState;

pub fn router() -> Router<SharedState> {
    Router::new().route("/restaurants", get(list))
}

/// GET /api/restaurants
async fn list(State(state): State<SharedState>) -> Json<Vec<RestaurantItem>> {
    Json(state.restaurants.list().await)
}
