use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{NewRecording, RecordingEvent, RecordingSummary, StoredRecording};
use crate::store::RecordingStore;

pub struct PgRecordingStore {
    pool: PgPool,
}

impl PgRecordingStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordingStore for PgRecordingStore {
    async fn insert(&self, item: &NewRecording) -> Result<StoredRecording> {
        let stored = sqlx::query_as::<_, StoredRecording>(
            "INSERT INTO recordings (id, start_time, email, topic, recording_count, raw) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING id, topic, email",
        )
        .bind(Uuid::new_v4())
        .bind(item.start_time)
        .bind(&item.email)
        .bind(&item.topic)
        .bind(item.recording_count)
        .bind(&item.raw)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }

    async fn list_by_email(&self, email: &str) -> Result<Vec<RecordingSummary>> {
        let items = sqlx::query_as::<_, RecordingSummary>(
            "SELECT id, start_time, topic, recording_count FROM recordings \
             WHERE LOWER(email) = LOWER($1) ORDER BY start_time DESC",
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    async fn find(&self, id: Uuid) -> Result<Option<RecordingEvent>> {
        let item = sqlx::query_as::<_, RecordingEvent>(
            "SELECT id, start_time, email, topic, recording_count, raw \
             FROM recordings WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }
}
