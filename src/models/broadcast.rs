use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::AppError;

/// Two-state broadcast classification. Rows are created as `Created`; nothing
/// in this service transitions them to `Past` (external tooling does).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Created,
    Past,
}

impl Lifecycle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Lifecycle::Created => "created",
            Lifecycle::Past => "past",
        }
    }
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Broadcast {
    pub id: Uuid,
    pub name: String,
    pub owner: String,
    pub description: String,
    pub stream_key: String,
    pub preview_url: String,
    pub start_time: DateTime<Utc>,
    pub life: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateBroadcast {
    pub name: Option<String>,
    pub description: Option<String>,
    pub owner: Option<String>,
    pub stream_key: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
}

/// A `CreateBroadcast` that passed validation: every field present.
#[derive(Debug, Clone)]
pub struct NewBroadcast {
    pub name: String,
    pub description: String,
    pub owner: String,
    pub stream_key: String,
    pub start_time: DateTime<Utc>,
}

impl CreateBroadcast {
    pub fn validate(self) -> Result<NewBroadcast, AppError> {
        let name = self
            .name
            .ok_or_else(|| AppError::BadRequest(super::MSG_NAME_EMPTY.into()))?;
        let description = self
            .description
            .ok_or_else(|| AppError::BadRequest(super::MSG_DESCRIPTION_EMPTY.into()))?;
        let owner = self
            .owner
            .ok_or_else(|| AppError::BadRequest(super::MSG_OWNER_EMPTY.into()))?;
        let stream_key = self
            .stream_key
            .ok_or_else(|| AppError::BadRequest(super::MSG_STREAM_KEY_EMPTY.into()))?;
        let start_time = self
            .start_time
            .ok_or_else(|| AppError::BadRequest(super::MSG_START_TIME_EMPTY.into()))?;

        Ok(NewBroadcast {
            name,
            description,
            owner,
            stream_key,
            start_time,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBroadcast {
    pub id: Option<Uuid>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub stream_key: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct BroadcastChanges {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub stream_key: String,
    pub start_time: DateTime<Utc>,
}

impl UpdateBroadcast {
    pub fn validate(self) -> Result<BroadcastChanges, AppError> {
        let id = self
            .id
            .ok_or_else(|| AppError::BadRequest(super::MSG_ID_EMPTY.into()))?;
        let name = self
            .name
            .ok_or_else(|| AppError::BadRequest(super::MSG_NAME_EMPTY.into()))?;
        let description = self
            .description
            .ok_or_else(|| AppError::BadRequest(super::MSG_DESCRIPTION_EMPTY.into()))?;
        let stream_key = self
            .stream_key
            .ok_or_else(|| AppError::BadRequest(super::MSG_STREAM_KEY_EMPTY.into()))?;
        let start_time = self
            .start_time
            .ok_or_else(|| AppError::BadRequest(super::MSG_START_TIME_EMPTY.into()))?;

        Ok(BroadcastChanges {
            id,
            name,
            description,
            stream_key,
            start_time,
        })
    }
}
