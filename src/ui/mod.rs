//! UI layer: the line-oriented shell that reads commands and prints state.

mod event_source;
mod message_rendering;
pub mod shell;
mod styles;
mod view;

pub(crate) use event_source::StdinEventSource;

/// Returns the UI module name for smoke checks.
pub fn module_name() -> &'static str {
    "ui"
}
