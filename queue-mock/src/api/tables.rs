//! Seat map API

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    routing::{get, post},
};
use shared::models::{RestaurantSeatsResponse, UpdateTableStatusRequest, UpdateTableStatusResponse};
use shared::{AppError, AppResult};

use crate::state::SharedState;

pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/restaurants/{restaurant_id}/table", get(seats))
        .route("/restaurants/{restaurant_id}/tables/{table_id}", post(update_status))
        // Legacy singular path still used by older front-ends
        .route("/restaurant/{restaurant_id}/tables/{table_id}", post(update_status))
}

/// GET /api/restaurants/:id/table - 座位圖
async fn seats(
    State(state): State<SharedState>,
    Path(restaurant_id): Path<i64>,
) -> AppResult<Json<RestaurantSeatsResponse>> {
    Ok(Json(state.tables.seats(restaurant_id).await?))
}

/// POST /api/restaurants/:id/tables/:table_id - 入座 / 離座
async fn update_status(
    State(state): State<SharedState>,
    Path((restaurant_id, table_id)): Path<(i64, i64)>,
    payload: Result<Json<UpdateTableStatusRequest>, JsonRejection>,
) -> AppResult<Json<UpdateTableStatusResponse>> {
    let Json(req) = payload.map_err(|e| AppError::invalid_request(e.body_text()))?;
    let resp = state.tables.update_status(restaurant_id, table_id, req).await?;
    Ok(Json(resp))
}
