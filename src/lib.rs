//! Query/update engine for a list of bank messages.
//!
//! A [`repository::MessageRepository`] owns the canonical message set and a
//! [`view::MessageStore`] derives filtered and sorted snapshots from it in
//! response to intents issued by a renderer.

pub mod config;
pub mod logging;
pub mod model;
pub mod mvi;
pub mod render;
pub mod repository;
pub mod view;
