//! Message view engine.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent):
//! - `state.rs` - View snapshot handed to renderers
//! - `intent.rs` - User actions and repository responses
//! - `reducer.rs` - State transitions
//! - `query.rs` - Filter and sort derivations
//! - `store.rs` - Owner of state, repository and the in-flight load

mod intent;
mod query;
mod reducer;
mod state;
mod store;

pub use intent::ViewIntent;
pub use query::{count_unread, derive_visible, filter_messages, sort_messages};
pub use reducer::ViewReducer;
pub use state::{LoadPhase, ViewState};
pub use store::{MessageStore, Observer};
