use std::sync::Arc;

use uuid::Uuid;

use crate::error::Result;
use crate::models::LiveStream;
use crate::store::LiveStore;

/// Read-only listing of currently live sources; rows are managed elsewhere.
pub struct LiveService {
    live: Arc<dyn LiveStore>,
}

impl LiveService {
    pub fn new(live: Arc<dyn LiveStore>) -> Self {
        Self { live }
    }

    pub async fn list(&self) -> Result<Vec<LiveStream>> {
        self.live.list().await
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<LiveStream>> {
        self.live.find(id).await
    }
}
