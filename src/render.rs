//! Plain-text and JSON renderers for a view snapshot.

use std::io::{self, Write};

use serde::Serialize;

use crate::model::{Message, SortOrder};
use crate::view::{LoadPhase, ViewState};

/// JSON shape of a rendered view.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RenderedView<'a> {
    is_loading: bool,
    unread_count: usize,
    sort_order: SortOrder,
    filter_text: &'a str,
    messages: &'a [Message],
}

/// Write the badge line followed by one line per visible message.
pub fn render_text(state: &ViewState, out: &mut impl Write) -> io::Result<()> {
    if state.phase == LoadPhase::Loading {
        return writeln!(out, "Loading messages...");
    }

    writeln!(
        out,
        "Bank Messages ({} unread) sort: {}{}",
        state.unread_count,
        state.sort_order,
        if state.filter_text.is_empty() {
            String::new()
        } else {
            format!(" filter: {:?}", state.filter_text)
        }
    )?;

    if state.visible_messages.is_empty() {
        return writeln!(out, "  (no messages)");
    }

    for message in &state.visible_messages {
        let marker = if message.is_read { ' ' } else { '*' };
        writeln!(out, "{} {:>4}  {}", marker, message.id, message.title)?;
    }
    Ok(())
}

/// Write the view as a single JSON object.
pub fn render_json(state: &ViewState, out: &mut impl Write) -> io::Result<()> {
    let view = RenderedView {
        is_loading: state.is_loading,
        unread_count: state.unread_count,
        sort_order: state.sort_order,
        filter_text: &state.filter_text,
        messages: &state.visible_messages,
    };
    serde_json::to_writer_pretty(&mut *out, &view)?;
    writeln!(out)
}
