use chrono::{DateTime, Utc};
use serde::Serialize;

pub const EVENT_CHAT_REACTIONS: &str = "chat_reactions";
pub const EVENT_CHAT_CLEAR: &str = "chat_clear";

/// Envelope relayed to subscribers after a mutating chat operation. New
/// messages are published bare; reaction and clear events are wrapped.
#[derive(Debug, Clone, Serialize)]
pub struct ChannelEvent {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub payload: serde_json::Value,
}

impl ChannelEvent {
    pub fn reactions(payload: serde_json::Value) -> Self {
        Self {
            kind: EVENT_CHAT_REACTIONS,
            payload,
        }
    }

    pub fn clear() -> Self {
        Self {
            kind: EVENT_CHAT_CLEAR,
            payload: serde_json::Value::String(String::new()),
        }
    }
}

/// Signed pub/sub connection credential; never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct SessionToken {
    pub token: String,
    pub exp: DateTime<Utc>,
}
