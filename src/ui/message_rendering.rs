//! Message line formatting.
//!
//! Each message renders as one line: its display position and text, followed
//! by dimmed meta (edited tag, pin marker, local time and, for the user's own
//! messages, seen marks). Own messages are right-aligned to the shell width
//! the way chat bubbles sit on the sender's side.

use chrono::{DateTime, Local, Utc};
use unicode_width::UnicodeWidthStr;

use crate::domain::message::Message;

use super::styles;

const PIN_MARKER: &str = "📌";
const EDITED_TAG: &str = "edited";
const SENT_MARK: &str = "✓";
const SEEN_MARK: &str = "✓✓";
const META_GAP: &str = "  ";

/// Unstyled pieces of a rendered message line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageColumns {
    pub indent: usize,
    pub body: String,
    pub meta: String,
}

pub fn message_columns(position: usize, message: &Message, width: usize) -> MessageColumns {
    let body = format!("{position}. {}", message.text);
    let meta = message_meta(message);

    let indent = if message.is_own() {
        let used = body.width() + META_GAP.width() + meta.width();
        width.saturating_sub(used)
    } else {
        0
    };

    MessageColumns { indent, body, meta }
}

pub fn render_message(position: usize, message: &Message, width: usize) -> String {
    let columns = message_columns(position, message, width);
    let body_style = if message.is_own() {
        styles::own_message_style()
    } else {
        styles::other_message_style()
    };

    format!(
        "{}{}{META_GAP}{}",
        " ".repeat(columns.indent),
        body_style.apply(columns.body),
        styles::meta_style().apply(columns.meta)
    )
}

fn message_meta(message: &Message) -> String {
    let mut parts = Vec::with_capacity(4);
    if message.edited {
        parts.push(EDITED_TAG.to_owned());
    }
    if message.pinned {
        parts.push(PIN_MARKER.to_owned());
    }
    parts.push(format_time(message.created_at));
    if message.is_own() {
        let mark = if message.seen { SEEN_MARK } else { SENT_MARK };
        parts.push(mark.to_owned());
    }
    parts.join(" ")
}

fn format_time(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%H:%M").to_string()
}
