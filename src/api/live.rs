use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::LiveStream;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list))
        .route("/:id", get(get_one))
}

async fn list(State(state): State<AppState>) -> Result<Json<Vec<LiveStream>>> {
    Ok(Json(state.services.live.list().await?))
}

async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<LiveStream>> {
    let live = state
        .services
        .live
        .get(id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(live))
}
