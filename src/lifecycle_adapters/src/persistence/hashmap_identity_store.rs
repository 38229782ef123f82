use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use lifecycle_core::{
    BearerToken, CallerIdentity, IdentityAdmin, IdentityAdminError, IdentityVerifier,
    IdentityVerifierError, UserId,
};
use secrecy::ExposeSecret;

/// In-memory identity store: answers both as verifier and as admin, so a
/// deleted user's tokens stop resolving.
#[derive(Default, Clone)]
pub struct HashMapIdentityStore {
    sessions: Arc<RwLock<HashMap<String, CallerIdentity>>>,
}

impl HashMapIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user reachable through `token`.
    pub async fn add_session(&self, token: impl Into<String>, identity: CallerIdentity) {
        self.sessions.write().await.insert(token.into(), identity);
    }

    pub async fn contains_user(&self, user_id: &UserId) -> bool {
        self.sessions
            .read()
            .await
            .values()
            .any(|identity| identity.user_id() == user_id)
    }
}

#[async_trait::async_trait]
impl IdentityVerifier for HashMapIdentityStore {
    async fn verify(&self, token: &BearerToken) -> Result<CallerIdentity, IdentityVerifierError> {
        let sessions = self.sessions.read().await;
        sessions
            .get(token.as_ref().expose_secret())
            .cloned()
            .ok_or_else(|| IdentityVerifierError::InvalidCredential("Unknown token".to_string()))
    }
}

#[async_trait::async_trait]
impl IdentityAdmin for HashMapIdentityStore {
    async fn delete_user(&self, user_id: &UserId) -> Result<(), IdentityAdminError> {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, identity| identity.user_id() != user_id);

        if sessions.len() == before {
            return Err(IdentityAdminError::UserNotFound("User not found".into()));
        }
        Ok(())
    }
}
