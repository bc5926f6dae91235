//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents are either issued by the renderer (filter text typed, a message
/// deleted) or produced by the store itself when the repository answers a
/// load. Reducers turn them into new states.
pub trait Intent: Send + 'static {}
