//! In-memory collaborator doubles for exercising the coordination layer
//! without Postgres/Redis/bus/SMTP. Failure injection is per-store via an
//! atomic flag; publishes and mails are captured for assertions.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::mail::MailSender;
use crate::models::{
    Broadcast, BroadcastChanges, ChatMessage, Lifecycle, LiveStream, NewBroadcast, NewChatMessage,
    NewRecording, Participant, ReactionChange, ReactionRemoval, RecordingEvent, RecordingSummary,
    SessionToken, StoredRecording, StreamDescription, StreamProfile,
};
use crate::realtime::{RealtimeBus, TokenSigner};
use crate::store::{
    BroadcastStore, IdentityStore, LiveStore, MessageStore, ParticipantCache, RecordingStore,
    StreamStore,
};

fn forced_failure() -> AppError {
    AppError::Database(sqlx::Error::PoolClosed)
}

#[derive(Default)]
pub struct MockIdentityStore {
    users: Mutex<Vec<String>>,
    pub fail: AtomicBool,
}

impl MockIdentityStore {
    pub fn with_users(users: &[&str]) -> Self {
        Self {
            users: Mutex::new(users.iter().map(|u| u.to_string()).collect()),
            fail: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl IdentityStore for MockIdentityStore {
    async fn user_exists(&self, username: &str) -> Result<bool> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(forced_failure());
        }
        Ok(self.users.lock().unwrap().iter().any(|u| u == username))
    }
}

/// Broadcasts plus the chat history they cascade onto; shared with
/// `MemoryMessageStore` through `Services` wiring in tests via two handles
/// over the same `MemoryChat`.
#[derive(Default)]
pub struct MemoryChat {
    pub messages: Mutex<HashMap<String, Vec<ChatMessage>>>,
}

pub struct MemoryBroadcastStore {
    pub broadcasts: Mutex<Vec<Broadcast>>,
    chat: std::sync::Arc<MemoryChat>,
    pub fail_insert: AtomicBool,
    pub fail_delete: AtomicBool,
}

impl MemoryBroadcastStore {
    pub fn new(chat: std::sync::Arc<MemoryChat>) -> Self {
        Self {
            broadcasts: Mutex::new(Vec::new()),
            chat,
            fail_insert: AtomicBool::new(false),
            fail_delete: AtomicBool::new(false),
        }
    }

    pub fn seed_past(&self, owner: &str, start_time: DateTime<Utc>) -> Uuid {
        let id = Uuid::new_v4();
        self.broadcasts.lock().unwrap().push(Broadcast {
            id,
            name: format!("past-{owner}"),
            owner: owner.to_string(),
            description: String::new(),
            stream_key: String::new(),
            preview_url: String::new(),
            start_time,
            life: Lifecycle::Past.as_str().to_string(),
        });
        id
    }
}

#[async_trait]
impl BroadcastStore for MemoryBroadcastStore {
    async fn insert(&self, item: &NewBroadcast) -> Result<Broadcast> {
        if self.fail_insert.load(Ordering::SeqCst) {
            return Err(forced_failure());
        }
        let broadcast = Broadcast {
            id: Uuid::new_v4(),
            name: item.name.clone(),
            owner: item.owner.clone(),
            description: item.description.clone(),
            stream_key: item.stream_key.clone(),
            preview_url: String::new(),
            start_time: item.start_time,
            life: Lifecycle::Created.as_str().to_string(),
        };
        self.broadcasts.lock().unwrap().push(broadcast.clone());
        Ok(broadcast)
    }

    async fn update(&self, changes: &BroadcastChanges) -> Result<Option<Broadcast>> {
        let mut broadcasts = self.broadcasts.lock().unwrap();
        let Some(item) = broadcasts.iter_mut().find(|b| b.id == changes.id) else {
            return Ok(None);
        };
        item.name = changes.name.clone();
        item.description = changes.description.clone();
        item.stream_key = changes.stream_key.clone();
        item.start_time = changes.start_time;
        Ok(Some(item.clone()))
    }

    async fn list_created(&self) -> Result<Vec<Broadcast>> {
        let mut items: Vec<Broadcast> = self
            .broadcasts
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.life == Lifecycle::Created.as_str())
            .cloned()
            .collect();
        items.sort_by_key(|b| b.start_time);
        Ok(items)
    }

    async fn find(&self, id: Uuid) -> Result<Option<Broadcast>> {
        Ok(self
            .broadcasts
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.id == id)
            .cloned())
    }

    async fn delete_with_history(&self, id: Uuid) -> Result<Option<Uuid>> {
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(forced_failure());
        }
        let mut broadcasts = self.broadcasts.lock().unwrap();
        let before = broadcasts.len();
        broadcasts.retain(|b| b.id != id);
        if broadcasts.len() == before {
            return Ok(None);
        }
        self.chat.messages.lock().unwrap().remove(&id.to_string());
        Ok(Some(id))
    }

    async fn list_past(&self) -> Result<Vec<Broadcast>> {
        let mut items: Vec<Broadcast> = self
            .broadcasts
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.life == Lifecycle::Past.as_str())
            .cloned()
            .collect();
        items.sort_by_key(|b| std::cmp::Reverse(b.start_time));
        Ok(items)
    }

    async fn list_past_by_owner(&self, owner: &str) -> Result<Vec<Broadcast>> {
        let mut items: Vec<Broadcast> = self
            .broadcasts
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.life == Lifecycle::Past.as_str() && b.owner == owner)
            .cloned()
            .collect();
        items.sort_by_key(|b| std::cmp::Reverse(b.start_time));
        Ok(items)
    }
}

pub struct MemoryMessageStore {
    chat: std::sync::Arc<MemoryChat>,
    pub fail_insert: AtomicBool,
    pub fail_delete: AtomicBool,
    pub fail_reactions: AtomicBool,
}

impl MemoryMessageStore {
    pub fn new(chat: std::sync::Arc<MemoryChat>) -> Self {
        Self {
            chat,
            fail_insert: AtomicBool::new(false),
            fail_delete: AtomicBool::new(false),
            fail_reactions: AtomicBool::new(false),
        }
    }

    fn update_message<F>(&self, id: Uuid, apply: F) -> Result<ChatMessage>
    where
        F: FnOnce(&mut ChatMessage),
    {
        let mut channels = self.chat.messages.lock().unwrap();
        for messages in channels.values_mut() {
            if let Some(msg) = messages.iter_mut().find(|m| m.id == id) {
                apply(msg);
                return Ok(msg.clone());
            }
        }
        Err(AppError::Database(sqlx::Error::RowNotFound))
    }
}

#[async_trait]
impl MessageStore for MemoryMessageStore {
    async fn list_by_channel(&self, channel: &str) -> Result<Vec<ChatMessage>> {
        let mut items = self
            .chat
            .messages
            .lock()
            .unwrap()
            .get(channel)
            .cloned()
            .unwrap_or_default();
        items.sort_by_key(|m| m.time);
        Ok(items)
    }

    async fn insert(&self, channel: &str, msg: &NewChatMessage) -> Result<ChatMessage> {
        if self.fail_insert.load(Ordering::SeqCst) {
            return Err(forced_failure());
        }
        let message = ChatMessage {
            id: Uuid::new_v4(),
            channel: channel.to_string(),
            username: msg.username.clone(),
            fullname: msg.fullname.clone(),
            avatar: msg.avatar.clone(),
            text: msg.text.clone(),
            time: msg.time,
            is_anon: msg.is_anon,
            is_question: msg.is_question,
            reactions: serde_json::json!({}),
        };
        self.chat
            .messages
            .lock()
            .unwrap()
            .entry(channel.to_string())
            .or_default()
            .push(message.clone());
        Ok(message)
    }

    async fn delete_by_channel(&self, channel: &str) -> Result<()> {
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(forced_failure());
        }
        self.chat.messages.lock().unwrap().remove(channel);
        Ok(())
    }

    async fn merge_reaction(&self, change: &ReactionChange) -> Result<ChatMessage> {
        if self.fail_reactions.load(Ordering::SeqCst) {
            return Err(forced_failure());
        }
        let (username, kind) = (change.username.clone(), change.kind.clone());
        self.update_message(change.id, |msg| {
            msg.reactions[username] = serde_json::Value::String(kind);
        })
    }

    async fn remove_reaction(&self, removal: &ReactionRemoval) -> Result<ChatMessage> {
        if self.fail_reactions.load(Ordering::SeqCst) {
            return Err(forced_failure());
        }
        let username = removal.username.clone();
        self.update_message(removal.id, |msg| {
            if let Some(map) = msg.reactions.as_object_mut() {
                map.remove(&username);
            }
        })
    }
}

#[derive(Default)]
pub struct RecordingBus {
    pub published: Mutex<Vec<(String, serde_json::Value)>>,
    pub fail: AtomicBool,
}

impl RecordingBus {
    pub fn publishes_for(&self, channel: &str) -> Vec<serde_json::Value> {
        self.published
            .lock()
            .unwrap()
            .iter()
            .filter(|(c, _)| c == channel)
            .map(|(_, v)| v.clone())
            .collect()
    }
}

#[async_trait]
impl RealtimeBus for RecordingBus {
    async fn publish(&self, channel: &str, data: serde_json::Value) -> Result<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(AppError::Realtime("forced publish failure".into()));
        }
        self.published
            .lock()
            .unwrap()
            .push((channel.to_string(), data));
        Ok(())
    }
}

pub struct StaticTokenSigner;

impl TokenSigner for StaticTokenSigner {
    fn issue(&self, username: &str) -> Result<SessionToken> {
        Ok(SessionToken {
            token: format!("token-for-{username}"),
            exp: Utc::now() + chrono::Duration::hours(10),
        })
    }
}

#[derive(Default)]
pub struct MockMailSender {
    pub sent: Mutex<Vec<StoredRecording>>,
    pub fail: AtomicBool,
}

#[async_trait]
impl MailSender for MockMailSender {
    async fn send_recording_link(&self, recording: &StoredRecording) -> Result<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(AppError::Mail("forced mail failure".into()));
        }
        self.sent.lock().unwrap().push(recording.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryRecordingStore {
    pub rows: Mutex<Vec<RecordingEvent>>,
    pub fail_insert: AtomicBool,
}

#[async_trait]
impl RecordingStore for MemoryRecordingStore {
    async fn insert(&self, item: &NewRecording) -> Result<StoredRecording> {
        if self.fail_insert.load(Ordering::SeqCst) {
            return Err(forced_failure());
        }
        let row = RecordingEvent {
            id: Uuid::new_v4(),
            start_time: item.start_time,
            email: item.email.clone(),
            topic: item.topic.clone(),
            recording_count: item.recording_count,
            raw: item.raw.clone(),
        };
        self.rows.lock().unwrap().push(row.clone());
        Ok(StoredRecording {
            id: row.id,
            topic: row.topic,
            email: row.email,
        })
    }

    async fn list_by_email(&self, email: &str) -> Result<Vec<RecordingSummary>> {
        let mut items: Vec<RecordingSummary> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.email.eq_ignore_ascii_case(email))
            .map(|r| RecordingSummary {
                id: r.id,
                start_time: r.start_time,
                topic: r.topic.clone(),
                recording_count: r.recording_count,
            })
            .collect();
        items.sort_by_key(|r| std::cmp::Reverse(r.start_time));
        Ok(items)
    }

    async fn find(&self, id: Uuid) -> Result<Option<RecordingEvent>> {
        Ok(self.rows.lock().unwrap().iter().find(|r| r.id == id).cloned())
    }
}

#[derive(Default)]
pub struct MemoryParticipantCache {
    pub channels: Mutex<HashMap<String, HashMap<String, Participant>>>,
    /// Every TTL reset as (channel, seconds), in call order.
    pub ttl_resets: Mutex<Vec<(String, i64)>>,
}

#[async_trait]
impl ParticipantCache for MemoryParticipantCache {
    async fn register(&self, channel: &str, participant: &Participant) -> Result<()> {
        self.channels
            .lock()
            .unwrap()
            .entry(channel.to_string())
            .or_default()
            .insert(participant.username.clone(), participant.clone());
        self.ttl_resets
            .lock()
            .unwrap()
            .push((channel.to_string(), crate::store::PARTICIPANT_TTL_SECS));
        Ok(())
    }

    async fn list(&self, channel: &str) -> Result<Vec<Participant>> {
        Ok(self
            .channels
            .lock()
            .unwrap()
            .get(channel)
            .map(|m| m.values().cloned().collect())
            .unwrap_or_default())
    }
}

#[derive(Default)]
pub struct MemoryStreamStore {
    pub profiles: Mutex<Vec<StreamProfile>>,
}

#[async_trait]
impl StreamStore for MemoryStreamStore {
    async fn get_or_create(&self, username: &str) -> Result<StreamProfile> {
        let mut profiles = self.profiles.lock().unwrap();
        if let Some(profile) = profiles.iter().find(|p| p.username == username) {
            return Ok(profile.clone());
        }
        let profile = StreamProfile {
            id: Uuid::new_v4(),
            username: username.to_string(),
            description: username.to_string(),
        };
        profiles.push(profile.clone());
        Ok(profile)
    }

    async fn find(&self, username: &str) -> Result<Option<StreamProfile>> {
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.username == username)
            .cloned())
    }

    async fn update_description(&self, desc: &StreamDescription) -> Result<Option<StreamProfile>> {
        let mut profiles = self.profiles.lock().unwrap();
        let Some(profile) = profiles.iter_mut().find(|p| p.username == desc.username) else {
            return Ok(None);
        };
        profile.description = desc.description.clone();
        Ok(Some(profile.clone()))
    }
}

#[derive(Default)]
pub struct MemoryLiveStore {
    pub items: Mutex<Vec<LiveStream>>,
}

#[async_trait]
impl LiveStore for MemoryLiveStore {
    async fn list(&self) -> Result<Vec<LiveStream>> {
        Ok(self.items.lock().unwrap().clone())
    }

    async fn find(&self, id: Uuid) -> Result<Option<LiveStream>> {
        Ok(self.items.lock().unwrap().iter().find(|l| l.id == id).cloned())
    }
}
