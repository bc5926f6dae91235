//! Owning container for the message view.

use std::sync::Arc;

use tokio::task::{JoinError, JoinHandle};

use crate::model::{Message, MessageId, SortOrder};
use crate::mvi::Reducer;
use crate::repository::{MessageRepository, RepositoryError};

use super::intent::ViewIntent;
use super::reducer::ViewReducer;
use super::state::ViewState;

/// Callback invoked with the new state after every change.
pub type Observer = Box<dyn Fn(&ViewState) + Send>;

type LoadResult = Result<Vec<Message>, RepositoryError>;

/// Single owner of the view state and the repository handle.
///
/// Renderers read [`MessageStore::state`] and issue commands; every command
/// runs synchronously except `load`, whose fetch runs as a tokio task until
/// [`MessageStore::settle`] applies the response. At most one fetch is in
/// flight. Dropping the store aborts it, so a late response is discarded.
pub struct MessageStore<R: MessageRepository> {
    repository: Arc<R>,
    state: ViewState,
    observers: Vec<Observer>,
    in_flight: Option<JoinHandle<LoadResult>>,
    /// Set when the repository was mutated while a fetch was in flight.
    mutated_during_load: bool,
}

impl<R: MessageRepository> MessageStore<R> {
    pub fn new(repository: R) -> Self {
        Self::with_sort_order(repository, SortOrder::default())
    }

    pub fn with_sort_order(repository: R, sort_order: SortOrder) -> Self {
        Self {
            repository: Arc::new(repository),
            state: ViewState::with_sort_order(sort_order),
            observers: Vec::new(),
            in_flight: None,
            mutated_during_load: false,
        }
    }

    /// Current view snapshot.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn unread_count(&self) -> usize {
        self.state.unread_count
    }

    pub fn is_load_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Register an observer notified after each state change.
    pub fn subscribe(&mut self, observer: impl Fn(&ViewState) + Send + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Start fetching messages.
    ///
    /// Returns `false` when a fetch is already in flight; the request is
    /// coalesced into it. Must be called within a tokio runtime.
    pub fn load(&mut self) -> bool {
        if self.in_flight.is_some() {
            tracing::debug!("Load already in flight, coalescing");
            return false;
        }

        let repository = Arc::clone(&self.repository);
        self.mutated_during_load = false;
        self.in_flight = Some(tokio::spawn(async move { repository.fetch_all().await }));
        tracing::info!("Loading messages");
        self.dispatch(ViewIntent::LoadRequested);
        true
    }

    /// Wait for the in-flight fetch, if any, and apply its response.
    ///
    /// Cancel-safe: dropping the returned future leaves the fetch in flight.
    pub async fn settle(&mut self) {
        let Some(handle) = self.in_flight.as_mut() else {
            return;
        };
        let result = handle.await;
        self.in_flight = None;
        self.finish_load(result);
    }

    /// Record new filter text and re-derive from the repository's current set.
    pub fn filter(&mut self, text: impl Into<String>) {
        let text = text.into();
        tracing::debug!(filter = %text, "Filter changed");
        let source = self.repository.snapshot();
        self.dispatch(ViewIntent::FilterChanged { text, source });
    }

    /// Record a new sort order and re-sort the visible messages.
    pub fn sort(&mut self, order: SortOrder) {
        tracing::debug!(%order, "Sort order changed");
        self.dispatch(ViewIntent::SortChanged { order });
    }

    pub fn mark_as_read(&mut self, id: MessageId) {
        let messages = self.repository.mark_as_read(id);
        self.repository_changed(messages);
    }

    pub fn delete(&mut self, id: MessageId) {
        let messages = self.repository.delete(id);
        self.repository_changed(messages);
    }

    /// Tear the store down, discarding any in-flight response.
    pub fn shutdown(self) {
        tracing::debug!(pending_load = self.is_load_in_flight(), "Message store shut down");
    }

    fn finish_load(&mut self, result: Result<LoadResult, JoinError>) {
        let result = result.unwrap_or_else(|join_error| {
            Err(RepositoryError::LoadFailure {
                reason: join_error.to_string(),
            })
        });

        match result {
            Ok(fetched) => {
                // The fetched set predates mutations made while it was in flight
                let messages = if std::mem::take(&mut self.mutated_during_load) {
                    tracing::debug!("Repository changed during load, using latest snapshot");
                    self.repository.snapshot()
                } else {
                    fetched
                };
                tracing::info!(count = messages.len(), "Messages loaded");
                self.dispatch(ViewIntent::LoadSucceeded { messages });
            }
            Err(error) => {
                self.mutated_during_load = false;
                tracing::warn!(%error, "Message load failed");
                self.dispatch(ViewIntent::LoadFailed { error });
            }
        }
    }

    fn repository_changed(&mut self, messages: Vec<Message>) {
        if self.in_flight.is_some() {
            self.mutated_during_load = true;
        }
        self.dispatch(ViewIntent::RepositoryChanged { messages });
    }

    fn dispatch(&mut self, intent: ViewIntent) {
        let next = ViewReducer::reduce(self.state.clone(), intent);
        if next == self.state {
            return;
        }
        self.state = next;
        for observer in &self.observers {
            observer(&self.state);
        }
    }
}

impl<R: MessageRepository> Drop for MessageStore<R> {
    fn drop(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
            tracing::debug!("In-flight load aborted");
        }
    }
}
