//! Domain layer: widget state, messages and exchange outcomes.

pub mod attachment;
pub mod events;
pub mod message;
pub mod reply;
pub mod screen;
pub mod session;
pub mod text_input;
pub mod transcript;
pub mod widget_state;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
