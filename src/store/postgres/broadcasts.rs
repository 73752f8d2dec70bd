use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Broadcast, BroadcastChanges, Lifecycle, NewBroadcast};
use crate::store::BroadcastStore;

const BROADCAST_COLUMNS: &str =
    "id, name, owner, description, stream_key, preview_url, start_time, life";

pub struct PgBroadcastStore {
    pool: PgPool,
}

impl PgBroadcastStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BroadcastStore for PgBroadcastStore {
    async fn insert(&self, item: &NewBroadcast) -> Result<Broadcast> {
        let mut tx = self.pool.begin().await?;

        let broadcast = sqlx::query_as::<_, Broadcast>(&format!(
            "INSERT INTO broadcasts (id, life, name, owner, description, stream_key, start_time) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {BROADCAST_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(Lifecycle::Created.as_str())
        .bind(&item.name)
        .bind(&item.owner)
        .bind(&item.description)
        .bind(&item.stream_key)
        .bind(item.start_time)
        .fetch_one(&mut *tx)
        .await?;

        // The companion image row shares the broadcast id and must commit
        // with it; a failure here rolls the broadcast insert back too.
        sqlx::query("INSERT INTO images (id) VALUES ($1)")
            .bind(broadcast.id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(broadcast)
    }

    async fn update(&self, changes: &BroadcastChanges) -> Result<Option<Broadcast>> {
        let broadcast = sqlx::query_as::<_, Broadcast>(&format!(
            "UPDATE broadcasts \
             SET name = $2, description = $3, stream_key = $4, start_time = $5 \
             WHERE id = $1 \
             RETURNING {BROADCAST_COLUMNS}"
        ))
        .bind(changes.id)
        .bind(&changes.name)
        .bind(&changes.description)
        .bind(&changes.stream_key)
        .bind(changes.start_time)
        .fetch_optional(&self.pool)
        .await?;

        Ok(broadcast)
    }

    async fn list_created(&self) -> Result<Vec<Broadcast>> {
        let items = sqlx::query_as::<_, Broadcast>(&format!(
            "SELECT {BROADCAST_COLUMNS} FROM broadcasts WHERE life = $1 ORDER BY start_time ASC"
        ))
        .bind(Lifecycle::Created.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    async fn find(&self, id: Uuid) -> Result<Option<Broadcast>> {
        let item = sqlx::query_as::<_, Broadcast>(&format!(
            "SELECT {BROADCAST_COLUMNS} FROM broadcasts WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    async fn delete_with_history(&self, id: Uuid) -> Result<Option<Uuid>> {
        let mut tx = self.pool.begin().await?;

        // Chat history is indexed by the broadcast id; removing both in one
        // transaction keeps orphaned messages unobservable.
        sqlx::query("DELETE FROM messages WHERE channel = $1")
            .bind(id.to_string())
            .execute(&mut *tx)
            .await?;

        let deleted: Option<(Uuid,)> =
            sqlx::query_as("DELETE FROM broadcasts WHERE id = $1 RETURNING id")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        tx.commit().await?;

        Ok(deleted.map(|(id,)| id))
    }

    async fn list_past(&self) -> Result<Vec<Broadcast>> {
        let items = sqlx::query_as::<_, Broadcast>(&format!(
            "SELECT {BROADCAST_COLUMNS} FROM broadcasts WHERE life = $1 ORDER BY start_time DESC"
        ))
        .bind(Lifecycle::Past.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    async fn list_past_by_owner(&self, owner: &str) -> Result<Vec<Broadcast>> {
        let items = sqlx::query_as::<_, Broadcast>(&format!(
            "SELECT {BROADCAST_COLUMNS} FROM broadcasts \
             WHERE life = $1 AND owner = $2 ORDER BY start_time DESC"
        ))
        .bind(Lifecycle::Past.as_str())
        .bind(owner)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }
}
