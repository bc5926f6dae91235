//! Model-View-Intent (MVI) primitives.
//!
//! The message view is driven by unidirectional data flow:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Renderer
//!    ↑                                │
//!    └────────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot handed to renderers
//! - **Intent**: user actions or repository responses
//! - **Reducer**: pure function producing the next state

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
