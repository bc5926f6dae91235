//! Pure derivations over message sequences.

use crate::model::{Message, SortOrder};

/// Keep messages whose title contains `filter_text`, ignoring case.
///
/// Blank filter text (empty or whitespace only) keeps everything as is.
pub fn filter_messages(messages: &[Message], filter_text: &str) -> Vec<Message> {
    if filter_text.trim().is_empty() {
        return messages.to_vec();
    }

    let needle = filter_text.to_lowercase();
    messages
        .iter()
        .filter(|m| m.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Stable two-way partition by read flag.
///
/// Messages leading under `order` come first; relative order inside each
/// partition is preserved.
pub fn sort_messages(mut messages: Vec<Message>, order: SortOrder) -> Vec<Message> {
    // sort_by_key is stable
    messages.sort_by_key(|m| !order.leads(m));
    messages
}

/// Filter then sort, the derivation behind every refreshed view.
pub fn derive_visible(messages: &[Message], filter_text: &str, order: SortOrder) -> Vec<Message> {
    sort_messages(filter_messages(messages, filter_text), order)
}

pub fn count_unread(messages: &[Message]) -> usize {
    messages.iter().filter(|m| !m.is_read).count()
}
