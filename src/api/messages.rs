use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::error::Result;
use crate::models::{AddReaction, ChatMessage, PostChatMessage, RemoveReaction};
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/:channel", get(list).post(post_message).delete(clear))
        .route(
            "/:channel/reactions",
            axum::routing::post(add_reaction).delete(remove_reaction),
        )
}

async fn list(
    State(state): State<AppState>,
    Path(channel): Path<String>,
) -> Result<Json<Vec<ChatMessage>>> {
    Ok(Json(state.services.chat.list(&channel).await?))
}

async fn post_message(
    State(state): State<AppState>,
    Path(channel): Path<String>,
    Json(payload): Json<PostChatMessage>,
) -> Result<Json<ChatMessage>> {
    let stored = state.services.chat.post(&channel, payload).await?;
    Ok(Json(stored))
}

async fn add_reaction(
    State(state): State<AppState>,
    Path(channel): Path<String>,
    Json(payload): Json<AddReaction>,
) -> Result<Json<ChatMessage>> {
    let updated = state.services.chat.add_reaction(&channel, payload).await?;
    Ok(Json(updated))
}

async fn remove_reaction(
    State(state): State<AppState>,
    Path(channel): Path<String>,
    Json(payload): Json<RemoveReaction>,
) -> Result<Json<ChatMessage>> {
    let updated = state
        .services
        .chat
        .remove_reaction(&channel, payload)
        .await?;
    Ok(Json(updated))
}

/// Clear-chat goes through the stream service so subscribers are told.
async fn clear(State(state): State<AppState>, Path(channel): Path<String>) -> Result<()> {
    state.services.streams.clear_chat(&channel).await
}
