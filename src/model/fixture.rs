//! Built-in message fixture used when no fixture file is configured.

use super::message::{Message, MessageId};

/// Number of fixture messages (ids 0 through 20).
pub const DEFAULT_MESSAGE_COUNT: u32 = 21;

const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. \
Nullam in nunc nec arcu lacinia congue. Nullam nec nunc nec arcu lacinia congue. \
Nullam nec nunc nec arcu lacinia congue. Nullam nec nunc nec arcu lacinia congue. \
Nullam nec nunc nec arcu lacinia congue.";

/// Generate `count` fixture messages.
///
/// Ids start at zero, titles read `Bank Message {id}` and every even id
/// starts out read.
pub fn bank_messages(count: u32) -> Vec<Message> {
    (0..MessageId::from(count))
        .map(|id| Message::new(id, format!("Bank Message {id}"), id % 2 == 0).with_body(LOREM))
        .collect()
}
