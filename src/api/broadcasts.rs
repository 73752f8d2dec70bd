use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::{Broadcast, CreateBroadcast, UpdateBroadcast};
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create).put(update))
        .route("/:id", get(get_one).delete(remove))
        .route("/archive/:username", get(archive))
}

async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreateBroadcast>,
) -> Result<Json<Broadcast>> {
    let broadcast = state.services.broadcasts.create(payload).await?;
    Ok(Json(broadcast))
}

async fn update(
    State(state): State<AppState>,
    Json(payload): Json<UpdateBroadcast>,
) -> Result<Json<Broadcast>> {
    let broadcast = state.services.broadcasts.update(payload).await?;
    Ok(Json(broadcast))
}

async fn list(State(state): State<AppState>) -> Result<Json<Vec<Broadcast>>> {
    Ok(Json(state.services.broadcasts.list().await?))
}

async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Broadcast>> {
    let broadcast = state
        .services
        .broadcasts
        .get(id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(broadcast))
}

async fn archive(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<Vec<Broadcast>>> {
    Ok(Json(state.services.broadcasts.archive(&username).await?))
}

#[derive(Debug, Serialize)]
struct DeletedResponse {
    id: Uuid,
}

async fn remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeletedResponse>> {
    let id = state
        .services
        .broadcasts
        .delete(id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(DeletedResponse { id }))
}
