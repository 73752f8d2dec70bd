use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::error::Result;
use crate::models::SessionToken;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/:username", get(check_privilege))
        .route("/:username/token", get(issue_token))
}

#[derive(Debug, Serialize)]
struct PrivilegeResponse {
    admin: bool,
}

async fn check_privilege(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<PrivilegeResponse>> {
    let admin = state.services.admin.is_privileged(&username).await?;
    Ok(Json(PrivilegeResponse { admin }))
}

async fn issue_token(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<SessionToken>> {
    let session = state.services.admin.issue_token(&username).await?;
    Ok(Json(session))
}
