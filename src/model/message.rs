use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable identifier of a message.
pub type MessageId = u64;

/// A single bank message.
///
/// Only the repository creates or mutates messages. `is_read` flips one way,
/// from `false` to `true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: MessageId,
    pub title: String,
    pub is_read: bool,
    #[serde(default)]
    pub body: String,
}

impl Message {
    pub fn new(id: MessageId, title: impl Into<String>, is_read: bool) -> Self {
        Self {
            id,
            title: title.into(),
            is_read,
            body: String::new(),
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }
}

/// Ordering preference for the visible list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Read messages before unread ones.
    #[default]
    ReadFirst,
    /// Unread messages before read ones.
    UnreadFirst,
}

impl SortOrder {
    /// Whether `message` belongs to the leading partition for this order.
    pub fn leads(self, message: &Message) -> bool {
        match self {
            SortOrder::ReadFirst => message.is_read,
            SortOrder::UnreadFirst => !message.is_read,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::ReadFirst => write!(f, "read-first"),
            SortOrder::UnreadFirst => write!(f, "unread-first"),
        }
    }
}

/// Error for sort order names other than `read-first` and `unread-first`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown sort order '{0}' (expected 'read-first' or 'unread-first')")]
pub struct ParseSortOrderError(pub String);

impl FromStr for SortOrder {
    type Err = ParseSortOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [SortOrder::ReadFirst, SortOrder::UnreadFirst]
            .into_iter()
            .find(|order| order.to_string() == s)
            .ok_or_else(|| ParseSortOrderError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_first_leads_with_read_messages() {
        let read = Message::new(1, "a", true);
        let unread = Message::new(2, "b", false);
        assert!(SortOrder::ReadFirst.leads(&read));
        assert!(!SortOrder::ReadFirst.leads(&unread));
        assert!(SortOrder::UnreadFirst.leads(&unread));
        assert!(!SortOrder::UnreadFirst.leads(&read));
    }

    #[test]
    fn message_serializes_camel_case() {
        let json = serde_json::to_value(Message::new(7, "Hello", true)).unwrap();
        assert_eq!(json["isRead"], serde_json::Value::Bool(true));
        assert_eq!(json["title"], "Hello");
    }

    #[test]
    fn sort_order_uses_kebab_case_names() {
        let order: SortOrder = serde_json::from_str("\"unread-first\"").unwrap();
        assert_eq!(order, SortOrder::UnreadFirst);
        assert_eq!(SortOrder::ReadFirst.to_string(), "read-first");
    }

    #[test]
    fn sort_order_parses_display_names() {
        for order in [SortOrder::ReadFirst, SortOrder::UnreadFirst] {
            assert_eq!(order.to_string().parse::<SortOrder>(), Ok(order));
        }
        assert_eq!(
            "newest".parse::<SortOrder>(),
            Err(ParseSortOrderError("newest".into()))
        );
    }
}
