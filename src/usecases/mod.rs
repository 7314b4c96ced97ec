//! Use case layer: navigation, attachment selection and message dispatch.

pub mod attach;
pub mod bootstrap;
pub mod context;
pub mod contracts;
pub mod keymap;
pub mod navigate;
pub mod send_message;
pub mod widget;

/// Returns the usecases module name for smoke checks.
pub fn module_name() -> &'static str {
    "usecases"
}
