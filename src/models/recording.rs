use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::AppError;

/// Full recorded-session row, raw webhook body included for audit/replay.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RecordingEvent {
    pub id: Uuid,
    pub start_time: DateTime<Utc>,
    pub email: String,
    pub topic: String,
    pub recording_count: i64,
    pub raw: String,
}

/// Minimal projection returned by the by-email listing.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RecordingSummary {
    pub id: Uuid,
    pub start_time: DateTime<Utc>,
    pub topic: String,
    pub recording_count: i64,
}

/// Minimal projection returned by the insert; everything the notification
/// mail needs.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StoredRecording {
    pub id: Uuid,
    pub topic: String,
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct NewRecording {
    pub start_time: DateTime<Utc>,
    pub email: String,
    pub topic: String,
    pub recording_count: i64,
    pub raw: String,
}

#[derive(Debug, Deserialize)]
struct WebhookBody {
    payload: Option<WebhookPayload>,
}

#[derive(Debug, Deserialize)]
struct WebhookPayload {
    object: Option<WebhookObject>,
}

#[derive(Debug, Deserialize)]
struct WebhookObject {
    host_email: Option<String>,
    topic: Option<String>,
    start_time: Option<String>,
    recording_count: Option<i64>,
}

/// Parsed webhook payload. `parse` is the first saga step: it touches no
/// collaborator and fails with a distinct condition per missing field.
#[derive(Debug, Clone)]
pub struct RecordingWebhook;

impl RecordingWebhook {
    pub fn parse(raw: &str) -> Result<NewRecording, AppError> {
        let body: WebhookBody =
            serde_json::from_str(raw).map_err(|e| AppError::BadRequest(e.to_string()))?;
        let object = body.payload.and_then(|p| p.object).unwrap_or(WebhookObject {
            host_email: None,
            topic: None,
            start_time: None,
            recording_count: None,
        });

        let email = match object.host_email {
            Some(email) if !email.is_empty() => email,
            _ => return Err(AppError::BadRequest(super::MSG_HOST_EMAIL_EMPTY.into())),
        };
        let topic = match object.topic {
            Some(topic) if !topic.is_empty() => topic,
            _ => return Err(AppError::BadRequest(super::MSG_TOPIC_EMPTY.into())),
        };
        let start_time = DateTime::parse_from_rfc3339(object.start_time.as_deref().unwrap_or(""))?
            .with_timezone(&Utc);

        Ok(NewRecording {
            start_time,
            email,
            topic,
            recording_count: object.recording_count.unwrap_or(0),
            raw: raw.to_string(),
        })
    }
}
