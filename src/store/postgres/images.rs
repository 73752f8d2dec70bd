use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::store::ImageStore;

const IMAGE_API_PREFIX: &str = "api/images/";

pub struct PgImageStore {
    pool: PgPool,
}

impl PgImageStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ImageStore for PgImageStore {
    async fn attach(&self, id: Uuid, file: &[u8]) -> Result<String> {
        let preview_url = format!("{IMAGE_API_PREFIX}{id}");

        let mut tx = self.pool.begin().await?;

        sqlx::query("UPDATE images SET file = $2 WHERE id = $1")
            .bind(id)
            .bind(file)
            .execute(&mut *tx)
            .await?;

        sqlx::query("UPDATE broadcasts SET preview_url = $2 WHERE id = $1")
            .bind(id)
            .bind(&preview_url)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(preview_url)
    }

    async fn fetch(&self, id: Uuid) -> Result<Option<Vec<u8>>> {
        let file: Option<Option<Vec<u8>>> =
            sqlx::query_scalar("SELECT file FROM images WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(file.flatten())
    }

    async fn detach(&self, id: Uuid) -> Result<Uuid> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("UPDATE images SET file = NULL WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("UPDATE broadcasts SET preview_url = '' WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(id)
    }
}
