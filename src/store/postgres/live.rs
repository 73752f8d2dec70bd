use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::LiveStream;
use crate::store::LiveStore;

pub struct PgLiveStore {
    pool: PgPool,
}

impl PgLiveStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LiveStore for PgLiveStore {
    async fn list(&self) -> Result<Vec<LiveStream>> {
        let items = sqlx::query_as::<_, LiveStream>(
            "SELECT id, description, place, stream_url FROM live",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    async fn find(&self, id: Uuid) -> Result<Option<LiveStream>> {
        let item = sqlx::query_as::<_, LiveStream>(
            "SELECT id, description, place, stream_url FROM live WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }
}
