//! Key → action dispatch table for the widget.

use crate::domain::{events::KeyInput, screen::Screen, widget_state::WidgetState};

/// Lines moved per PageUp/PageDown in the transcript.
pub const SCROLL_STEP: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetAction {
    Quit,
    DismissAlert,
    ShowNameScreen,
    SaveName,
    Send,
    OpenFilePrompt,
    ConfirmFilePrompt,
    CancelFilePrompt,
    ScrollUp,
    ScrollDown,
    Edit(EditAction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    Insert(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
}

/// Resolves a key press against the current state.
///
/// An open alert swallows every key. `Enter` in the composer and `Ctrl+S`
/// both map to [`WidgetAction::Send`].
pub fn action_for(state: &WidgetState, key: &KeyInput) -> Option<WidgetAction> {
    if state.alert().is_some() {
        return Some(WidgetAction::DismissAlert);
    }

    match state.screen() {
        Screen::Landing => match key.key.as_str() {
            "enter" if !key.ctrl => Some(WidgetAction::ShowNameScreen),
            "q" if !key.ctrl => Some(WidgetAction::Quit),
            _ => None,
        },
        Screen::NameEntry => match key.key.as_str() {
            "enter" => Some(WidgetAction::SaveName),
            _ => edit_action(key).map(WidgetAction::Edit),
        },
        Screen::Chat if state.file_prompt().is_some() => match key.key.as_str() {
            "enter" => Some(WidgetAction::ConfirmFilePrompt),
            "esc" => Some(WidgetAction::CancelFilePrompt),
            _ => edit_action(key).map(WidgetAction::Edit),
        },
        Screen::Chat => match (key.key.as_str(), key.ctrl) {
            ("enter", _) | ("s", true) => Some(WidgetAction::Send),
            ("o", true) => Some(WidgetAction::OpenFilePrompt),
            ("pageup", _) => Some(WidgetAction::ScrollUp),
            ("pagedown", _) => Some(WidgetAction::ScrollDown),
            _ => edit_action(key).map(WidgetAction::Edit),
        },
    }
}

fn edit_action(key: &KeyInput) -> Option<EditAction> {
    if let Some(ch) = key.printable_char() {
        return Some(EditAction::Insert(ch));
    }

    if key.ctrl {
        return None;
    }

    match key.key.as_str() {
        "backspace" => Some(EditAction::Backspace),
        "delete" => Some(EditAction::Delete),
        "left" => Some(EditAction::Left),
        "right" => Some(EditAction::Right),
        "home" => Some(EditAction::Home),
        "end" => Some(EditAction::End),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(name: &str) -> KeyInput {
        KeyInput::new(name, false)
    }

    fn ctrl(name: &str) -> KeyInput {
        KeyInput::new(name, true)
    }

    fn state_on(screen: Screen) -> WidgetState {
        let mut state = WidgetState::default();
        state.set_screen(screen);
        state
    }

    #[test]
    fn landing_starts_or_quits() {
        let state = state_on(Screen::Landing);

        assert_eq!(
            action_for(&state, &key("enter")),
            Some(WidgetAction::ShowNameScreen)
        );
        assert_eq!(action_for(&state, &key("q")), Some(WidgetAction::Quit));
        assert_eq!(action_for(&state, &key("x")), None);
    }

    #[test]
    fn name_screen_types_and_submits() {
        let state = state_on(Screen::NameEntry);

        assert_eq!(
            action_for(&state, &key("q")),
            Some(WidgetAction::Edit(EditAction::Insert('q')))
        );
        assert_eq!(action_for(&state, &key("enter")), Some(WidgetAction::SaveName));
    }

    #[test]
    fn enter_and_ctrl_s_share_the_send_action() {
        let state = state_on(Screen::Chat);

        assert_eq!(action_for(&state, &key("enter")), Some(WidgetAction::Send));
        assert_eq!(action_for(&state, &ctrl("s")), Some(WidgetAction::Send));
    }

    #[test]
    fn chat_keys_cover_attachment_and_scrolling() {
        let state = state_on(Screen::Chat);

        assert_eq!(
            action_for(&state, &ctrl("o")),
            Some(WidgetAction::OpenFilePrompt)
        );
        assert_eq!(action_for(&state, &key("pageup")), Some(WidgetAction::ScrollUp));
        assert_eq!(
            action_for(&state, &key("pagedown")),
            Some(WidgetAction::ScrollDown)
        );
        assert_eq!(action_for(&state, &ctrl("x")), None);
    }

    #[test]
    fn open_prompt_redirects_enter_and_esc() {
        let mut state = state_on(Screen::Chat);
        state.open_file_prompt();

        assert_eq!(
            action_for(&state, &key("enter")),
            Some(WidgetAction::ConfirmFilePrompt)
        );
        assert_eq!(
            action_for(&state, &key("esc")),
            Some(WidgetAction::CancelFilePrompt)
        );
        assert_eq!(
            action_for(&state, &key("backspace")),
            Some(WidgetAction::Edit(EditAction::Backspace))
        );
    }

    #[test]
    fn alert_swallows_any_key() {
        let mut state = state_on(Screen::NameEntry);
        state.raise_alert("Please enter your name");

        assert_eq!(
            action_for(&state, &key("enter")),
            Some(WidgetAction::DismissAlert)
        );
        assert_eq!(action_for(&state, &key("a")), Some(WidgetAction::DismissAlert));
    }
}
