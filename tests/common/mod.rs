//! Shared test repositories and fixtures.

#![allow(dead_code, unused_imports)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bank_messages::model::{Message, MessageId};
use bank_messages::repository::{InMemoryRepository, MessageRepository, RepositoryError};
use bank_messages::view::ViewState;
use parking_lot::Mutex;

/// `[{1,"Alpha",unread},{2,"Beta",read},{3,"Gamma",unread}]`
pub fn sample_messages() -> Vec<Message> {
    vec![
        Message::new(1, "Alpha", false),
        Message::new(2, "Beta", true),
        Message::new(3, "Gamma", false),
    ]
}

pub fn sample_repository() -> InMemoryRepository {
    InMemoryRepository::new(sample_messages(), Duration::ZERO)
}

pub fn ids(messages: &[Message]) -> Vec<MessageId> {
    messages.iter().map(|m| m.id).collect()
}

pub fn visible_ids(state: &ViewState) -> Vec<MessageId> {
    ids(&state.visible_messages)
}

/// Repository whose fetch always fails.
#[derive(Clone, Default)]
pub struct FailingRepository;

#[async_trait]
impl MessageRepository for FailingRepository {
    async fn fetch_all(&self) -> Result<Vec<Message>, RepositoryError> {
        Err(RepositoryError::LoadFailure {
            reason: "backend unavailable".into(),
        })
    }

    fn snapshot(&self) -> Vec<Message> {
        Vec::new()
    }

    fn mark_as_read(&self, _id: MessageId) -> Vec<Message> {
        Vec::new()
    }

    fn delete(&self, _id: MessageId) -> Vec<Message> {
        Vec::new()
    }
}

/// In-memory repository that counts fetches started and completed.
#[derive(Clone)]
pub struct CountingRepository {
    inner: InMemoryRepository,
    started: Arc<AtomicUsize>,
    completed: Arc<AtomicUsize>,
}

impl CountingRepository {
    pub fn new(messages: Vec<Message>, latency: Duration) -> Self {
        Self {
            inner: InMemoryRepository::new(messages, latency),
            started: Arc::new(AtomicUsize::new(0)),
            completed: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn fetches_started(&self) -> usize {
        self.started.load(Ordering::SeqCst)
    }

    pub fn fetches_completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MessageRepository for CountingRepository {
    async fn fetch_all(&self) -> Result<Vec<Message>, RepositoryError> {
        self.started.fetch_add(1, Ordering::SeqCst);
        let result = self.inner.fetch_all().await;
        self.completed.fetch_add(1, Ordering::SeqCst);
        result
    }

    fn snapshot(&self) -> Vec<Message> {
        self.inner.snapshot()
    }

    fn mark_as_read(&self, id: MessageId) -> Vec<Message> {
        self.inner.mark_as_read(id)
    }

    fn delete(&self, id: MessageId) -> Vec<Message> {
        self.inner.delete(id)
    }
}

/// Records every state an observer is notified with.
pub fn recorder() -> (Arc<Mutex<Vec<ViewState>>>, impl Fn(&ViewState) + Send + 'static) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    (seen, move |state: &ViewState| sink.lock().push(state.clone()))
}
