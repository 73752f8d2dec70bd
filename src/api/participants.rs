use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::error::Result;
use crate::models::{Participant, RegisterParticipant};
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/:channel", get(list).post(register))
}

async fn list(
    State(state): State<AppState>,
    Path(channel): Path<String>,
) -> Result<Json<Vec<Participant>>> {
    Ok(Json(state.services.presence.list(&channel).await?))
}

async fn register(
    State(state): State<AppState>,
    Path(channel): Path<String>,
    Json(payload): Json<RegisterParticipant>,
) -> Result<()> {
    state.services.presence.register(&channel, payload).await
}
