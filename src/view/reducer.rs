//! Reducer for the message view.

use crate::mvi::Reducer;

use super::intent::ViewIntent;
use super::query::{count_unread, derive_visible, sort_messages};
use super::state::{LoadPhase, ViewState};

/// Message view state transitions.
///
/// Before the first load resolves there is no message set to derive from,
/// so filter and sort intents only record the preference and repository
/// changes are left for the load response to pick up.
pub struct ViewReducer;

impl Reducer for ViewReducer {
    type State = ViewState;
    type Intent = ViewIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ViewIntent::LoadRequested => match state.phase {
                LoadPhase::Idle => ViewState {
                    phase: LoadPhase::Loading,
                    is_loading: true,
                    ..state
                },
                // Refreshes after the first load run in the background
                LoadPhase::Loading | LoadPhase::Ready => state,
            },

            ViewIntent::LoadSucceeded { messages } => ViewState {
                phase: LoadPhase::Ready,
                is_loading: false,
                visible_messages: derive_visible(&messages, &state.filter_text, state.sort_order),
                unread_count: count_unread(&messages),
                ..state
            },

            ViewIntent::LoadFailed { .. } => ViewState {
                phase: LoadPhase::Ready,
                is_loading: false,
                ..state
            },

            ViewIntent::FilterChanged { text, source } => {
                if !state.is_ready() {
                    return ViewState {
                        filter_text: text,
                        ..state
                    };
                }
                ViewState {
                    visible_messages: derive_visible(&source, &text, state.sort_order),
                    unread_count: count_unread(&source),
                    filter_text: text,
                    ..state
                }
            }

            ViewIntent::SortChanged { order } => {
                if !state.is_ready() {
                    return ViewState {
                        sort_order: order,
                        ..state
                    };
                }
                ViewState {
                    visible_messages: sort_messages(state.visible_messages, order),
                    sort_order: order,
                    ..state
                }
            }

            ViewIntent::RepositoryChanged { messages } => match state.phase {
                LoadPhase::Ready => ViewState {
                    visible_messages: derive_visible(
                        &messages,
                        &state.filter_text,
                        state.sort_order,
                    ),
                    unread_count: count_unread(&messages),
                    ..state
                },
                LoadPhase::Idle | LoadPhase::Loading => state,
            },
        }
    }
}
