use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::models::{ChannelEvent, StreamProfile, UpdateStreamDescription};
use crate::realtime::RealtimeBus;
use crate::store::{MessageStore, StreamStore};

/// Streamer profiles plus the clear-chat entry point, which shares the chat
/// relay's persist-then-publish ordering.
pub struct StreamService {
    streams: Arc<dyn StreamStore>,
    messages: Arc<dyn MessageStore>,
    bus: Arc<dyn RealtimeBus>,
}

impl StreamService {
    pub fn new(
        streams: Arc<dyn StreamStore>,
        messages: Arc<dyn MessageStore>,
        bus: Arc<dyn RealtimeBus>,
    ) -> Self {
        Self {
            streams,
            messages,
            bus,
        }
    }

    /// First access creates the profile with the username as description.
    pub async fn get_or_create(&self, username: &str) -> Result<StreamProfile> {
        self.streams.get_or_create(username).await
    }

    pub async fn get(&self, username: &str) -> Result<Option<StreamProfile>> {
        self.streams.find(username).await
    }

    pub async fn update_description(
        &self,
        payload: UpdateStreamDescription,
    ) -> Result<StreamProfile> {
        let desc = payload.validate()?;
        self.streams
            .update_description(&desc)
            .await?
            .ok_or(AppError::NotFound)
    }

    /// Wipes the channel's history, then tells subscribers. A failed delete
    /// publishes nothing.
    pub async fn clear_chat(&self, channel: &str) -> Result<()> {
        self.messages.delete_by_channel(channel).await?;
        let event = serde_json::to_value(ChannelEvent::clear())
            .map_err(|e| AppError::Realtime(e.to_string()))?;
        self.bus.publish(channel, event).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EVENT_CHAT_CLEAR;
    use crate::store::mock::{MemoryChat, MemoryMessageStore, MemoryStreamStore, RecordingBus};
    use std::sync::atomic::Ordering;

    fn service() -> (StreamService, Arc<MemoryMessageStore>, Arc<RecordingBus>) {
        let chat = Arc::new(MemoryChat::default());
        let messages = Arc::new(MemoryMessageStore::new(chat));
        let bus = Arc::new(RecordingBus::default());
        let service = StreamService::new(
            Arc::new(MemoryStreamStore::default()),
            messages.clone(),
            bus.clone(),
        );
        (service, messages, bus)
    }

    #[tokio::test]
    async fn first_access_creates_the_profile() {
        let (service, _, _) = service();

        assert!(service.get("alice").await.unwrap().is_none());
        let created = service.get_or_create("alice").await.unwrap();
        assert_eq!(created.description, "alice");

        let again = service.get_or_create("alice").await.unwrap();
        assert_eq!(again.id, created.id);
    }

    #[tokio::test]
    async fn description_update_requires_an_existing_profile() {
        let (service, _, _) = service();

        let missing = service
            .update_description(UpdateStreamDescription {
                username: Some("ghost".into()),
                description: Some("boo".into()),
            })
            .await;
        assert!(matches!(missing, Err(AppError::NotFound)));

        service.get_or_create("alice").await.unwrap();
        let updated = service
            .update_description(UpdateStreamDescription {
                username: Some("alice".into()),
                description: Some("weekly show".into()),
            })
            .await
            .unwrap();
        assert_eq!(updated.description, "weekly show");
    }

    #[tokio::test]
    async fn clear_chat_wipes_then_announces() {
        let (service, messages, bus) = service();
        messages
            .insert(
                "ch-1",
                &crate::models::NewChatMessage {
                    username: "bob".into(),
                    fullname: "Bob B".into(),
                    avatar: "b.png".into(),
                    text: "hi".into(),
                    time: chrono::Utc::now(),
                    is_anon: false,
                    is_question: false,
                },
            )
            .await
            .unwrap();

        service.clear_chat("ch-1").await.unwrap();

        assert!(messages.list_by_channel("ch-1").await.unwrap().is_empty());
        let published = bus.publishes_for("ch-1");
        assert_eq!(published.len(), 1);
        assert_eq!(published[0]["type"], EVENT_CHAT_CLEAR);
        assert_eq!(published[0]["payload"], "");
    }

    #[tokio::test]
    async fn failed_clear_publishes_nothing() {
        let (service, messages, bus) = service();
        messages.fail_delete.store(true, Ordering::SeqCst);

        assert!(service.clear_chat("ch-1").await.is_err());
        assert!(bus.publishes_for("ch-1").is_empty());
    }
}
