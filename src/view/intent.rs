//! Intents accepted by the message view.

use crate::model::{Message, SortOrder};
use crate::mvi::Intent;
use crate::repository::RepositoryError;

/// User actions and repository responses.
///
/// Intents that need the repository's current set carry it, keeping the
/// reducer pure.
#[derive(Debug, Clone)]
pub enum ViewIntent {
    /// A fetch was started.
    LoadRequested,

    /// The fetch resolved.
    LoadSucceeded { messages: Vec<Message> },

    /// The fetch failed. Logged and otherwise swallowed.
    LoadFailed { error: RepositoryError },

    /// Filter text changed.
    FilterChanged {
        text: String,
        /// Repository's current set.
        source: Vec<Message>,
    },

    /// Sort order changed. Re-sorts what is visible without re-filtering.
    SortChanged { order: SortOrder },

    /// A message was marked as read or deleted.
    RepositoryChanged { messages: Vec<Message> },
}

impl Intent for ViewIntent {}
