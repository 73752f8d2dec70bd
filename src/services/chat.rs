use std::sync::Arc;

use serde::Serialize;

use crate::error::{AppError, Result};
use crate::models::{AddReaction, ChannelEvent, ChatMessage, PostChatMessage, RemoveReaction};
use crate::realtime::RealtimeBus;
use crate::store::MessageStore;

/// Persist first, relay second. A failed persist publishes nothing; a failed
/// publish after a successful persist surfaces the relay error even though
/// the write stands.
pub struct ChatService {
    messages: Arc<dyn MessageStore>,
    bus: Arc<dyn RealtimeBus>,
}

fn event_payload<T: Serialize>(value: &T) -> Result<serde_json::Value> {
    serde_json::to_value(value).map_err(|e| AppError::Realtime(e.to_string()))
}

impl ChatService {
    pub fn new(messages: Arc<dyn MessageStore>, bus: Arc<dyn RealtimeBus>) -> Self {
        Self { messages, bus }
    }

    pub async fn list(&self, channel: &str) -> Result<Vec<ChatMessage>> {
        self.messages.list_by_channel(channel).await
    }

    /// New messages are relayed bare, exactly as persisted.
    pub async fn post(&self, channel: &str, payload: PostChatMessage) -> Result<ChatMessage> {
        let msg = payload.validate()?;
        let stored = self.messages.insert(channel, &msg).await?;
        self.bus.publish(channel, event_payload(&stored)?).await?;
        Ok(stored)
    }

    pub async fn add_reaction(&self, channel: &str, payload: AddReaction) -> Result<ChatMessage> {
        let change = payload.validate()?;
        let updated = self.messages.merge_reaction(&change).await?;
        self.relay_reactions(channel, &updated).await?;
        Ok(updated)
    }

    pub async fn remove_reaction(
        &self,
        channel: &str,
        payload: RemoveReaction,
    ) -> Result<ChatMessage> {
        let removal = payload.validate()?;
        let updated = self.messages.remove_reaction(&removal).await?;
        self.relay_reactions(channel, &updated).await?;
        Ok(updated)
    }

    pub async fn delete_all(&self, channel: &str) -> Result<()> {
        self.messages.delete_by_channel(channel).await
    }

    async fn relay_reactions(&self, channel: &str, message: &ChatMessage) -> Result<()> {
        let event = ChannelEvent::reactions(event_payload(message)?);
        self.bus.publish(channel, event_payload(&event)?).await
    }
}
