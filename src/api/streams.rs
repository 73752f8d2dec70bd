use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};

use crate::error::Result;
use crate::models::{StreamProfile, UpdateStreamDescription};
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/:username", get(get_or_create))
        .route("/", put(update_description))
}

/// First fetch of an unknown username creates the profile.
async fn get_or_create(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<StreamProfile>> {
    Ok(Json(state.services.streams.get_or_create(&username).await?))
}

async fn update_description(
    State(state): State<AppState>,
    Json(payload): Json<UpdateStreamDescription>,
) -> Result<Json<StreamProfile>> {
    let profile = state.services.streams.update_description(payload).await?;
    Ok(Json(profile))
}
