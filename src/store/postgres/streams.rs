use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{StreamDescription, StreamProfile};
use crate::store::StreamStore;

pub struct PgStreamStore {
    pool: PgPool,
}

impl PgStreamStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StreamStore for PgStreamStore {
    async fn get_or_create(&self, username: &str) -> Result<StreamProfile> {
        let existing = sqlx::query_as::<_, StreamProfile>(
            "SELECT id, username, description FROM streams WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(profile) = existing {
            return Ok(profile);
        }

        // First access seeds the description with the username itself.
        let profile = sqlx::query_as::<_, StreamProfile>(
            "INSERT INTO streams (id, username, description) VALUES ($1, $2, $2) \
             RETURNING id, username, description",
        )
        .bind(Uuid::new_v4())
        .bind(username)
        .fetch_one(&self.pool)
        .await?;

        Ok(profile)
    }

    async fn find(&self, username: &str) -> Result<Option<StreamProfile>> {
        let profile = sqlx::query_as::<_, StreamProfile>(
            "SELECT id, username, description FROM streams WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(profile)
    }

    async fn update_description(&self, desc: &StreamDescription) -> Result<Option<StreamProfile>> {
        let profile = sqlx::query_as::<_, StreamProfile>(
            "UPDATE streams SET description = $2 WHERE username = $1 \
             RETURNING id, username, description",
        )
        .bind(&desc.username)
        .bind(&desc.description)
        .fetch_optional(&self.pool)
        .await?;

        Ok(profile)
    }
}
