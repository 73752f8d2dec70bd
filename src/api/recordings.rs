use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::{RecordingEvent, RecordingSummary, StoredRecording};
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(find_by_email).post(ingest))
        .route("/:id", get(get_one))
}

/// Webhook endpoint. The raw body is kept verbatim for audit, so it is taken
/// as a string rather than a typed extractor.
async fn ingest(State(state): State<AppState>, raw: String) -> Result<Json<StoredRecording>> {
    let stored = state.services.recordings.ingest(&raw).await?;
    Ok(Json(stored))
}

#[derive(Debug, Deserialize)]
struct EmailQuery {
    email: String,
}

async fn find_by_email(
    State(state): State<AppState>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<Vec<RecordingSummary>>> {
    Ok(Json(
        state.services.recordings.find_by_email(&query.email).await?,
    ))
}

async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RecordingEvent>> {
    let recording = state
        .services
        .recordings
        .get(id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(recording))
}
