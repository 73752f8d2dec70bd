use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::models::SessionToken;
use crate::realtime::TokenSigner;
use crate::store::IdentityStore;

/// Admin authorization. Privilege is row existence in `users`; there are no
/// roles and no grades of access.
pub struct AdminService {
    identity: Arc<dyn IdentityStore>,
    signer: Arc<dyn TokenSigner>,
}

impl AdminService {
    pub fn new(identity: Arc<dyn IdentityStore>, signer: Arc<dyn TokenSigner>) -> Self {
        Self { identity, signer }
    }

    /// Absence of the row is an ordinary `false`; only I/O failures error.
    pub async fn is_privileged(&self, username: &str) -> Result<bool> {
        self.identity.user_exists(username).await
    }

    /// Connection tokens are only issued to privileged users.
    pub async fn issue_token(&self, username: &str) -> Result<SessionToken> {
        if !self.is_privileged(username).await? {
            return Err(AppError::Forbidden);
        }
        self.signer.issue(username)
    }
}
