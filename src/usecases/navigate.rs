//! Screen transitions: landing → name entry → chat.

use std::time::{Duration, Instant};

use thiserror::Error;

use crate::domain::{
    message::Message,
    screen::{NameFocus, Screen},
    widget_state::WidgetState,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigateError {
    #[error("Please enter your name")]
    EmptyName,
}

/// Opens the name screen and schedules focus of the name field.
pub fn show_name_screen(state: &mut WidgetState, focus_delay: Duration, now: Instant) {
    if state.screen() != Screen::Landing {
        return;
    }

    state.set_screen(Screen::NameEntry);
    *state.name_focus_mut() = NameFocus::Scheduled {
        due_at: now + focus_delay,
    };
}

/// Applies a due focus schedule. Returns true when focus moved.
pub fn resolve_name_focus(state: &mut WidgetState, now: Instant) -> bool {
    state.screen() == Screen::NameEntry && state.name_focus_mut().resolve(now)
}

/// Accepts the typed name and enters the chat with a greeting.
///
/// # Errors
/// Returns `NavigateError::EmptyName` when the trimmed name is empty; state is
/// left untouched.
pub fn save_name(
    state: &mut WidgetState,
    assistant_name: &str,
    timestamp_ms: i64,
) -> Result<(), NavigateError> {
    let name = state.name_input().trimmed().to_owned();
    if name.is_empty() {
        return Err(NavigateError::EmptyName);
    }

    state.set_screen(Screen::Chat);
    state
        .transcript_mut()
        .append(Message::assistant(greeting(&name, assistant_name), timestamp_ms));
    state.set_user_name(name);
    Ok(())
}

pub fn welcome_text(user_name: &str) -> String {
    format!("Welcome, {user_name}!")
}

pub fn greeting(user_name: &str, assistant_name: &str) -> String {
    format!(
        "Hello {user_name}! I'm {assistant_name}, your AI assistant. How can I help you today?"
    )
}
