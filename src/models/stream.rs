use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::AppError;

/// Per-username streamer profile; created lazily on first access.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct StreamProfile {
    pub id: Uuid,
    pub username: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStreamDescription {
    pub username: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StreamDescription {
    pub username: String,
    pub description: String,
}

impl UpdateStreamDescription {
    pub fn validate(self) -> Result<StreamDescription, AppError> {
        let username = self
            .username
            .ok_or_else(|| AppError::BadRequest(super::MSG_USERNAME_EMPTY.into()))?;
        let description = self
            .description
            .ok_or_else(|| AppError::BadRequest(super::MSG_DESCRIPTION_EMPTY.into()))?;

        Ok(StreamDescription {
            username,
            description,
        })
    }
}
