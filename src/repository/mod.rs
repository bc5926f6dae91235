//! Message repository: the simulated, latency-bearing backend.
//!
//! The repository owns the canonical message set for a session. Mutations
//! never fail; unknown ids are no-ops. Only fetching can fail, and only the
//! view store decides what to do about it.

mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::{Message, MessageId};

pub use memory::{InMemoryRepository, DEFAULT_LATENCY};

/// Errors surfaced by a repository.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// Fetching the message set failed.
    #[error("Failed to load messages: {reason}")]
    LoadFailure { reason: String },
}

/// Contract of a message backend.
///
/// Implementations retain the latest state internally, so `snapshot` always
/// reflects the most recent `mark_as_read`/`delete`.
#[async_trait]
pub trait MessageRepository: Send + Sync + 'static {
    /// Fetch the full message set.
    ///
    /// May wait before resolving, but never reorders or duplicates entries.
    async fn fetch_all(&self) -> Result<Vec<Message>, RepositoryError>;

    /// The latest retained message set, without latency.
    fn snapshot(&self) -> Vec<Message>;

    /// Mark the message with `id` as read and return the updated set.
    fn mark_as_read(&self, id: MessageId) -> Vec<Message>;

    /// Remove the message with `id` and return the updated set.
    fn delete(&self, id: MessageId) -> Vec<Message>;
}
