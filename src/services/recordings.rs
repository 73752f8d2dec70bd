use std::sync::Arc;

use uuid::Uuid;

use crate::error::Result;
use crate::mail::MailSender;
use crate::models::{RecordingEvent, RecordingSummary, RecordingWebhook, StoredRecording};
use crate::store::RecordingStore;

/// Webhook ingestion runs parse, persist, notify in order, each at most
/// once. A failed step aborts the rest; completed steps are not undone, so a
/// failed mail leaves the row in place.
pub struct RecordingService {
    store: Arc<dyn RecordingStore>,
    mail: Arc<dyn MailSender>,
}

impl RecordingService {
    pub fn new(store: Arc<dyn RecordingStore>, mail: Arc<dyn MailSender>) -> Self {
        Self { store, mail }
    }

    pub async fn ingest(&self, raw: &str) -> Result<StoredRecording> {
        let recording = RecordingWebhook::parse(raw)?;
        let stored = self.store.insert(&recording).await?;
        tracing::info!(id = %stored.id, email = %stored.email, "recording stored");
        self.mail.send_recording_link(&stored).await?;
        Ok(stored)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Vec<RecordingSummary>> {
        self.store.list_by_email(email).await
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<RecordingEvent>> {
        self.store.find(id).await
    }
}
