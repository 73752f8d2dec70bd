use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Read-only catalogue of currently-live sources.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LiveStream {
    pub id: Uuid,
    pub description: String,
    pub place: String,
    pub stream_url: String,
}
