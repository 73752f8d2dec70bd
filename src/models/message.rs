use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::AppError;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    #[serde(skip)]
    pub channel: String,
    pub username: String,
    pub fullname: String,
    pub avatar: String,
    pub text: String,
    pub time: DateTime<Utc>,
    pub is_anon: bool,
    pub is_question: bool,
    /// JSON object mapping username to reaction type; at most one reaction
    /// per user per message.
    pub reactions: serde_json::Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostChatMessage {
    pub username: Option<String>,
    pub fullname: Option<String>,
    pub avatar: Option<String>,
    pub text: Option<String>,
    pub time: Option<DateTime<Utc>>,
    pub is_anon: Option<bool>,
    pub is_question: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct NewChatMessage {
    pub username: String,
    pub fullname: String,
    pub avatar: String,
    pub text: String,
    pub time: DateTime<Utc>,
    pub is_anon: bool,
    pub is_question: bool,
}

impl PostChatMessage {
    pub fn validate(self) -> Result<NewChatMessage, AppError> {
        let username = self
            .username
            .ok_or_else(|| AppError::BadRequest(super::MSG_USERNAME_EMPTY.into()))?;
        let fullname = self
            .fullname
            .ok_or_else(|| AppError::BadRequest(super::MSG_FULLNAME_EMPTY.into()))?;
        let text = self
            .text
            .ok_or_else(|| AppError::BadRequest(super::MSG_TEXT_EMPTY.into()))?;
        let avatar = self
            .avatar
            .ok_or_else(|| AppError::BadRequest(super::MSG_AVATAR_EMPTY.into()))?;
        let time = self
            .time
            .ok_or_else(|| AppError::BadRequest(super::MSG_TIME_EMPTY.into()))?;
        let is_anon = self
            .is_anon
            .ok_or_else(|| AppError::BadRequest(super::MSG_IS_ANON_EMPTY.into()))?;
        let is_question = self
            .is_question
            .ok_or_else(|| AppError::BadRequest(super::MSG_IS_QUESTION_EMPTY.into()))?;

        Ok(NewChatMessage {
            username,
            fullname,
            avatar,
            text,
            time,
            is_anon,
            is_question,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddReaction {
    pub id: Option<Uuid>,
    pub username: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ReactionChange {
    pub id: Uuid,
    pub username: String,
    pub kind: String,
}

impl AddReaction {
    pub fn validate(self) -> Result<ReactionChange, AppError> {
        let id = self
            .id
            .ok_or_else(|| AppError::BadRequest(super::MSG_ID_EMPTY.into()))?;
        let username = self
            .username
            .ok_or_else(|| AppError::BadRequest(super::MSG_USERNAME_EMPTY.into()))?;
        let kind = self
            .kind
            .ok_or_else(|| AppError::BadRequest(super::MSG_TYPE_EMPTY.into()))?;

        Ok(ReactionChange { id, username, kind })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoveReaction {
    pub id: Option<Uuid>,
    pub username: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ReactionRemoval {
    pub id: Uuid,
    pub username: String,
}

impl RemoveReaction {
    pub fn validate(self) -> Result<ReactionRemoval, AppError> {
        let id = self
            .id
            .ok_or_else(|| AppError::BadRequest(super::MSG_ID_EMPTY.into()))?;
        let username = self
            .username
            .ok_or_else(|| AppError::BadRequest(super::MSG_USERNAME_EMPTY.into()))?;

        Ok(ReactionRemoval { id, username })
    }
}
