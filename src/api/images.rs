use axum::{
    body::Bytes,
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/:id", get(fetch).post(attach).delete(detach))
}

#[derive(Debug, Serialize)]
struct AttachedResponse {
    preview_url: String,
}

async fn attach(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    body: Bytes,
) -> Result<Json<AttachedResponse>> {
    let preview_url = state.services.images.attach(id, &body).await?;
    Ok(Json(AttachedResponse { preview_url }))
}

async fn fetch(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let file = state
        .services
        .images
        .fetch(id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(([(header::CONTENT_TYPE, "application/octet-stream")], file))
}

#[derive(Debug, Serialize)]
struct DetachedResponse {
    id: Uuid,
}

async fn detach(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DetachedResponse>> {
    let id = state.services.images.detach(id).await?;
    Ok(Json(DetachedResponse { id }))
}
