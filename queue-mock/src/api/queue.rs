//! Queue API

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    routing::{get, post},
};
use http::StatusCode;
use shared::models::{
    JoinQueueRequest, JoinQueueResponse, LeaveQueueRequest, QueueNextResponse,
    QueueStatusResponse, UserQueueStatusResponse,
};
use shared::{AppError, AppResult};

use crate::state::SharedState;

pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/restaurants/{restaurant_id}/queue", post(join).delete(leave))
        .route("/restaurants/{restaurant_id}/queue/status", get(status))
        .route("/restaurants/{restaurant_id}/queue/next", get(next))
        .route("/user/{user_id}/queue", get(user_status))
}

/// POST /api/restaurants/:id/queue - 取號
async fn join(
    State(state): State<SharedState>,
    Path(restaurant_id): Path<i64>,
    payload: Result<Json<JoinQueueRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<JoinQueueResponse>)> {
    let Json(req) = payload.map_err(|e| AppError::invalid_request(e.body_text()))?;
    let resp = state.queue.join(restaurant_id, req.user_id).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

/// DELETE /api/restaurants/:id/queue - 取消排隊
async fn leave(
    State(state): State<SharedState>,
    Path(restaurant_id): Path<i64>,
    payload: Result<Json<LeaveQueueRequest>, JsonRejection>,
) -> AppResult<StatusCode> {
    let Json(req) = payload.map_err(|e| AppError::invalid_request(e.body_text()))?;
    state.queue.leave(restaurant_id, req.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/restaurants/:id/queue/status
async fn status(
    State(state): State<SharedState>,
    Path(restaurant_id): Path<i64>,
) -> AppResult<Json<QueueStatusResponse>> {
    Ok(Json(state.queue.status(restaurant_id).await?))
}

/// GET /api/restaurants/:id/queue/next - 下一位叫號
async fn next(
    State(state): State<SharedState>,
    Path(restaurant_id): Path<i64>,
) -> AppResult<Json<QueueNextResponse>> {
    Ok(Json(state.queue.next(restaurant_id).await?))
}

/// GET /api/user/:id/queue
async fn user_status(
    State(state): State<SharedState>,
    Path(user_id): Path<i64>,
) -> AppResult<Json<UserQueueStatusResponse>> {
    Ok(Json(state.queue.user_status(user_id).await?))
}
