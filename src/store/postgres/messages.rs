use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{ChatMessage, NewChatMessage, ReactionChange, ReactionRemoval};
use crate::store::MessageStore;

const MESSAGE_COLUMNS: &str =
    "id, channel, username, fullname, avatar, text, time, is_anon, is_question, reactions";

pub struct PgMessageStore {
    pool: PgPool,
}

impl PgMessageStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageStore for PgMessageStore {
    async fn list_by_channel(&self, channel: &str) -> Result<Vec<ChatMessage>> {
        let items = sqlx::query_as::<_, ChatMessage>(&format!(
            "SELECT {MESSAGE_COLUMNS} FROM messages WHERE channel = $1 ORDER BY time ASC"
        ))
        .bind(channel)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    async fn insert(&self, channel: &str, msg: &NewChatMessage) -> Result<ChatMessage> {
        let item = sqlx::query_as::<_, ChatMessage>(&format!(
            "INSERT INTO messages \
             (id, channel, username, fullname, avatar, text, time, is_anon, is_question) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {MESSAGE_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(channel)
        .bind(&msg.username)
        .bind(&msg.fullname)
        .bind(&msg.avatar)
        .bind(&msg.text)
        .bind(msg.time)
        .bind(msg.is_anon)
        .bind(msg.is_question)
        .fetch_one(&self.pool)
        .await?;

        Ok(item)
    }

    async fn delete_by_channel(&self, channel: &str) -> Result<()> {
        sqlx::query("DELETE FROM messages WHERE channel = $1")
            .bind(channel)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn merge_reaction(&self, change: &ReactionChange) -> Result<ChatMessage> {
        // jsonb concatenation replaces an existing key: last write wins per
        // username, concurrent writers race at the row level only.
        let item = sqlx::query_as::<_, ChatMessage>(&format!(
            "UPDATE messages \
             SET reactions = reactions || jsonb_build_object($2::text, $3::text) \
             WHERE id = $1 \
             RETURNING {MESSAGE_COLUMNS}"
        ))
        .bind(change.id)
        .bind(&change.username)
        .bind(&change.kind)
        .fetch_one(&self.pool)
        .await?;

        Ok(item)
    }

    async fn remove_reaction(&self, removal: &ReactionRemoval) -> Result<ChatMessage> {
        let item = sqlx::query_as::<_, ChatMessage>(&format!(
            "UPDATE messages SET reactions = reactions - $2::text WHERE id = $1 \
             RETURNING {MESSAGE_COLUMNS}"
        ))
        .bind(removal.id)
        .bind(&removal.username)
        .fetch_one(&self.pool)
        .await?;

        Ok(item)
    }
}
