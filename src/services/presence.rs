use std::sync::Arc;

use crate::error::Result;
use crate::models::{Participant, RegisterParticipant};
use crate::store::ParticipantCache;

/// Presence is cache-owned: writes upsert and reset the channel TTL, reads
/// return whatever has not expired. Nothing here ever deletes.
pub struct PresenceService {
    cache: Arc<dyn ParticipantCache>,
}

impl PresenceService {
    pub fn new(cache: Arc<dyn ParticipantCache>) -> Self {
        Self { cache }
    }

    pub async fn register(&self, channel: &str, payload: RegisterParticipant) -> Result<()> {
        let participant = payload.validate()?;
        self.cache.register(channel, &participant).await
    }

    pub async fn list(&self, channel: &str) -> Result<Vec<Participant>> {
        self.cache.list(channel).await
    }
}
