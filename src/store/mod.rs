//! Collaborator seams of the coordination layer. Each trait mirrors one
//! backing store; services depend on the traits so the orchestration logic
//! can be exercised without infrastructure.

#[cfg(test)]
pub mod mock;
pub mod postgres;
pub mod redis;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{
    Broadcast, BroadcastChanges, ChatMessage, LiveStream, NewBroadcast, NewChatMessage,
    NewRecording, Participant, ReactionChange, ReactionRemoval, RecordingEvent, RecordingSummary,
    StoredRecording, StreamDescription, StreamProfile,
};

/// Fixed participant TTL: five days from the last write, reset on every
/// registration.
pub const PARTICIPANT_TTL_SECS: i64 = 432_000;

#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// Row existence is the whole privilege model; absence is a valid
    /// negative, not an error.
    async fn user_exists(&self, username: &str) -> Result<bool>;
}

#[async_trait]
pub trait BroadcastStore: Send + Sync {
    /// Inserts the broadcast row and its empty companion image row in one
    /// transaction; neither survives alone.
    async fn insert(&self, item: &NewBroadcast) -> Result<Broadcast>;

    /// `None` means the row does not exist (zero rows updated).
    async fn update(&self, changes: &BroadcastChanges) -> Result<Option<Broadcast>>;

    /// `life = 'created'`, ascending by start time.
    async fn list_created(&self) -> Result<Vec<Broadcast>>;

    async fn find(&self, id: Uuid) -> Result<Option<Broadcast>>;

    /// Deletes the broadcast row and the channel's chat history in one
    /// transaction. Returns the deleted id, `None` when absent.
    async fn delete_with_history(&self, id: Uuid) -> Result<Option<Uuid>>;

    /// All `past` rows, descending by start time.
    async fn list_past(&self) -> Result<Vec<Broadcast>>;

    /// `past` rows of one owner, descending by start time.
    async fn list_past_by_owner(&self, owner: &str) -> Result<Vec<Broadcast>>;
}

#[async_trait]
pub trait MessageStore: Send + Sync {
    async fn list_by_channel(&self, channel: &str) -> Result<Vec<ChatMessage>>;

    async fn insert(&self, channel: &str, msg: &NewChatMessage) -> Result<ChatMessage>;

    async fn delete_by_channel(&self, channel: &str) -> Result<()>;

    /// Merges `{username: kind}` into the reaction set; last write wins per
    /// username key. Returns the updated message.
    async fn merge_reaction(&self, change: &ReactionChange) -> Result<ChatMessage>;

    /// Removes the username key from the reaction set. Returns the updated
    /// message.
    async fn remove_reaction(&self, removal: &ReactionRemoval) -> Result<ChatMessage>;
}

#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Stores the payload and updates the broadcast's preview URL in one
    /// transaction; returns the preview URL.
    async fn attach(&self, id: Uuid, file: &[u8]) -> Result<String>;

    async fn fetch(&self, id: Uuid) -> Result<Option<Vec<u8>>>;

    /// Clears payload and preview URL in one transaction.
    async fn detach(&self, id: Uuid) -> Result<Uuid>;
}

#[async_trait]
pub trait StreamStore: Send + Sync {
    async fn get_or_create(&self, username: &str) -> Result<StreamProfile>;

    async fn find(&self, username: &str) -> Result<Option<StreamProfile>>;

    async fn update_description(&self, desc: &StreamDescription) -> Result<Option<StreamProfile>>;
}

#[async_trait]
pub trait LiveStore: Send + Sync {
    async fn list(&self) -> Result<Vec<LiveStream>>;

    async fn find(&self, id: Uuid) -> Result<Option<LiveStream>>;
}

#[async_trait]
pub trait RecordingStore: Send + Sync {
    async fn insert(&self, item: &NewRecording) -> Result<StoredRecording>;

    /// Case-insensitive email match, most recent first.
    async fn list_by_email(&self, email: &str) -> Result<Vec<RecordingSummary>>;

    async fn find(&self, id: Uuid) -> Result<Option<RecordingEvent>>;
}

#[async_trait]
pub trait ParticipantCache: Send + Sync {
    /// Upsert under (channel, username) and reset the channel TTL to the
    /// full five-day window, unconditionally.
    async fn register(&self, channel: &str, participant: &Participant) -> Result<()>;

    async fn list(&self, channel: &str) -> Result<Vec<Participant>>;
}
