//! Thin HTTP surface. Handlers deserialize, call one service, map the
//! result; no business logic lives here.

mod admin;
mod broadcasts;
mod images;
mod live;
mod messages;
mod participants;
mod recordings;
mod streams;

use axum::Router;

use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/admin", admin::routes())
        .nest("/broadcasts", broadcasts::routes())
        .nest("/messages", messages::routes())
        .nest("/participants", participants::routes())
        .nest("/streams", streams::routes())
        .nest("/images", images::routes())
        .nest("/live", live::routes())
        .nest("/recordings", recordings::routes())
}
