//! Base trait for view state.

/// Marker trait for state objects.
///
/// States are replaced wholesale on every transition, never patched:
/// `Clone` produces the next state, `PartialEq` lets the store skip
/// observer notification when nothing changed.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
