//! Message data model and the built-in fixture.

mod fixture;
mod message;

pub use fixture::{bank_messages, DEFAULT_MESSAGE_COUNT};
pub use message::{Message, MessageId, ParseSortOrderError, SortOrder};
