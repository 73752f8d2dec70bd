use std::sync::Arc;

use uuid::Uuid;

use crate::error::Result;
use crate::store::ImageStore;

/// Broadcast preview images. The image row already exists (created with the
/// broadcast); attach and detach only flip its payload and the preview URL.
pub struct ImageService {
    images: Arc<dyn ImageStore>,
}

impl ImageService {
    pub fn new(images: Arc<dyn ImageStore>) -> Self {
        Self { images }
    }

    pub async fn attach(&self, id: Uuid, file: &[u8]) -> Result<String> {
        self.images.attach(id, file).await
    }

    pub async fn fetch(&self, id: Uuid) -> Result<Option<Vec<u8>>> {
        self.images.fetch(id).await
    }

    pub async fn detach(&self, id: Uuid) -> Result<Uuid> {
        self.images.detach(id).await
    }
}
