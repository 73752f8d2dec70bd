use std::sync::Arc;

use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::{Broadcast, CreateBroadcast, UpdateBroadcast};
use crate::store::{BroadcastStore, IdentityStore};

pub struct BroadcastService {
    store: Arc<dyn BroadcastStore>,
    identity: Arc<dyn IdentityStore>,
}

impl BroadcastService {
    pub fn new(store: Arc<dyn BroadcastStore>, identity: Arc<dyn IdentityStore>) -> Self {
        Self { store, identity }
    }

    /// Validation precedes any I/O; the store inserts the broadcast and its
    /// empty image row in one transaction.
    pub async fn create(&self, payload: CreateBroadcast) -> Result<Broadcast> {
        let item = payload.validate()?;
        let broadcast = self.store.insert(&item).await?;
        tracing::info!(id = %broadcast.id, owner = %broadcast.owner, "broadcast created");
        Ok(broadcast)
    }

    /// A zero-row update is a visible failure, not a silent success.
    pub async fn update(&self, payload: UpdateBroadcast) -> Result<Broadcast> {
        let changes = payload.validate()?;
        self.store
            .update(&changes)
            .await?
            .ok_or(AppError::NotFound)
    }

    pub async fn list(&self) -> Result<Vec<Broadcast>> {
        self.store.list_created().await
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<Broadcast>> {
        self.store.find(id).await
    }

    /// Privileged callers see the whole archive; everyone else only their
    /// own rows. The privilege check runs before either query.
    pub async fn archive(&self, username: &str) -> Result<Vec<Broadcast>> {
        if self.identity.user_exists(username).await? {
            self.store.list_past().await
        } else {
            self.store.list_past_by_owner(username).await
        }
    }

    /// Row and chat history go in one transaction; `None` when absent.
    pub async fn delete(&self, id: Uuid) -> Result<Option<Uuid>> {
        let deleted = self.store.delete_with_history(id).await?;
        if deleted.is_some() {
            tracing::info!(%id, "broadcast and chat history deleted");
        }
        Ok(deleted)
    }
}
