//! UI layer: terminal rendering and input.

mod composer;
mod event_source;
pub mod shell;
mod styles;
mod terminal;
mod transcript_rendering;
mod view;

pub(crate) use event_source::CrosstermEventSource;

/// Returns the UI module name for smoke checks.
pub fn module_name() -> &'static str {
    "ui"
}
