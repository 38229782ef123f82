use std::sync::Arc;

use lifecycle_core::{EmailClient, EmailClientError, EmailMessage};
use tokio::sync::RwLock;

/// Keeps every message instead of sending it.
#[derive(Debug, Clone, Default)]
pub struct MockEmailClient {
    sent: Arc<RwLock<Vec<EmailMessage>>>,
}

impl MockEmailClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn sent(&self) -> Vec<EmailMessage> {
        self.sent.read().await.clone()
    }
}

#[async_trait::async_trait]
impl EmailClient for MockEmailClient {
    async fn send_email(&self, message: &EmailMessage) -> Result<(), EmailClientError> {
        self.sent.write().await.push(message.clone());
        Ok(())
    }
}
