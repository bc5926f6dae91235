use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::RwLock;

use super::{MessageRepository, RepositoryError};
use crate::config::{ConfigError, RepositoryConfig};
use crate::model::{Message, MessageId};

/// Default simulated round-trip time.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1000);

/// In-memory repository with simulated network latency.
///
/// Cloning yields another handle onto the same message set.
#[derive(Clone)]
pub struct InMemoryRepository {
    messages: Arc<RwLock<Vec<Message>>>,
    latency: Duration,
}

impl InMemoryRepository {
    pub fn new(messages: Vec<Message>, latency: Duration) -> Self {
        Self {
            messages: Arc::new(RwLock::new(messages)),
            latency,
        }
    }

    /// Build a repository seeded from the configured fixture.
    pub fn from_config(config: &RepositoryConfig) -> Result<Self, ConfigError> {
        let messages = config.load_fixture()?;
        Ok(Self::new(messages, Duration::from_millis(config.latency_ms)))
    }
}

#[async_trait]
impl MessageRepository for InMemoryRepository {
    async fn fetch_all(&self) -> Result<Vec<Message>, RepositoryError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        let messages = self.messages.read().clone();
        tracing::debug!(count = messages.len(), "Messages fetched");
        Ok(messages)
    }

    fn snapshot(&self) -> Vec<Message> {
        self.messages.read().clone()
    }

    fn mark_as_read(&self, id: MessageId) -> Vec<Message> {
        let mut messages = self.messages.write();
        match messages.iter_mut().find(|m| m.id == id) {
            Some(message) => {
                message.is_read = true;
                tracing::debug!(id, "Message marked as read");
            }
            None => tracing::debug!(id, "Mark as read ignored, unknown id"),
        }
        messages.clone()
    }

    fn delete(&self, id: MessageId) -> Vec<Message> {
        let mut messages = self.messages.write();
        let before = messages.len();
        messages.retain(|m| m.id != id);
        if messages.len() < before {
            tracing::debug!(id, "Message deleted");
        } else {
            tracing::debug!(id, "Delete ignored, unknown id");
        }
        messages.clone()
    }
}
