//! View state handed to renderers.

use crate::model::{Message, SortOrder};
use crate::mvi::UiState;

/// Position of the view in its load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// The initial fetch is in flight.
    Loading,
    /// A fetch has resolved, successfully or not.
    Ready,
}

/// Everything a renderer needs to draw the message list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    pub phase: LoadPhase,
    /// Messages to show, filtered by `filter_text` and ordered by `sort_order`.
    pub visible_messages: Vec<Message>,
    pub sort_order: SortOrder,
    pub filter_text: String,
    /// True only while the initial load is in flight.
    pub is_loading: bool,
    /// Unread messages in the repository's current set, filter ignored.
    pub unread_count: usize,
}

impl UiState for ViewState {}

impl ViewState {
    pub fn with_sort_order(sort_order: SortOrder) -> Self {
        Self {
            sort_order,
            ..Self::default()
        }
    }

    pub fn is_ready(&self) -> bool {
        self.phase == LoadPhase::Ready
    }

    /// Unread messages among the visible ones.
    pub fn visible_unread_count(&self) -> usize {
        super::query::count_unread(&self.visible_messages)
    }
}
