use std::time::{Duration, Instant};

use anyhow::Result;

use crate::{
    agent::AgentTransport,
    domain::{
        events::AppEvent,
        screen::{NameFocus, Screen},
        widget_state::WidgetState,
    },
    infra::config::UiConfig,
};

use super::{
    attach,
    contracts::WidgetOrchestrator,
    keymap::{self, EditAction, WidgetAction, SCROLL_STEP},
    navigate, send_message,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetSettings {
    pub assistant_name: String,
    pub name_focus_delay: Duration,
}

impl WidgetSettings {
    pub fn from_config(config: &UiConfig) -> Self {
        Self {
            assistant_name: config.assistant_name.clone(),
            name_focus_delay: Duration::from_millis(config.name_focus_delay_ms),
        }
    }
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self::from_config(&UiConfig::default())
    }
}

/// The chat widget controller: owns the state and routes events to use cases.
pub struct DefaultWidgetOrchestrator<T>
where
    T: AgentTransport,
{
    state: WidgetState,
    transport: T,
    settings: WidgetSettings,
}

impl<T> DefaultWidgetOrchestrator<T>
where
    T: AgentTransport,
{
    pub fn new(transport: T, settings: WidgetSettings) -> Self {
        Self {
            state: WidgetState::default(),
            transport,
            settings,
        }
    }

    /// Executes one action regardless of which key produced it.
    pub fn perform(&mut self, action: WidgetAction) {
        match action {
            WidgetAction::Quit => self.state.stop(),
            WidgetAction::DismissAlert => self.state.dismiss_alert(),
            WidgetAction::ShowNameScreen => navigate::show_name_screen(
                &mut self.state,
                self.settings.name_focus_delay,
                Instant::now(),
            ),
            WidgetAction::SaveName => {
                if let Err(error) =
                    navigate::save_name(&mut self.state, &self.settings.assistant_name, now_ms())
                {
                    tracing::debug!(error = %error, "name rejected");
                    self.state.raise_alert(error.to_string());
                }
            }
            WidgetAction::Send => {
                let outcome = send_message::send_message(&mut self.state, &self.transport, now_ms());
                tracing::debug!(outcome = ?outcome, "send action handled");
            }
            WidgetAction::OpenFilePrompt => attach::open_file_prompt(&mut self.state),
            WidgetAction::ConfirmFilePrompt => {
                attach::confirm_file_prompt(&mut self.state);
            }
            WidgetAction::CancelFilePrompt => attach::cancel_file_prompt(&mut self.state),
            WidgetAction::ScrollUp => self.state.transcript_mut().scroll_up(SCROLL_STEP),
            WidgetAction::ScrollDown => self.state.transcript_mut().scroll_down(SCROLL_STEP),
            WidgetAction::Edit(edit) => self.edit(edit),
        }
    }

    fn edit(&mut self, edit: EditAction) {
        // Typing into the name field before the delayed focus lands takes focus early.
        if self.state.screen() == Screen::NameEntry && !self.state.name_focus().is_focused() {
            *self.state.name_focus_mut() = NameFocus::Focused;
        }

        let Some(input) = self.state.focused_input_mut() else {
            return;
        };

        match edit {
            EditAction::Insert(ch) => input.insert_char(ch),
            EditAction::Backspace => input.backspace(),
            EditAction::Delete => input.delete(),
            EditAction::Left => input.move_left(),
            EditAction::Right => input.move_right(),
            EditAction::Home => input.move_home(),
            EditAction::End => input.move_end(),
        }
    }
}

impl<T> WidgetOrchestrator for DefaultWidgetOrchestrator<T>
where
    T: AgentTransport,
{
    fn state(&self) -> &WidgetState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut WidgetState {
        &mut self.state
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Tick => {
                if navigate::resolve_name_focus(&mut self.state, Instant::now()) {
                    tracing::debug!("name field focused");
                }
            }
            AppEvent::QuitRequested => self.state.stop(),
            AppEvent::InputKey(key) => {
                if let Some(action) = keymap::action_for(&self.state, &key) {
                    self.perform(action);
                }
            }
            AppEvent::AgentReplied { request_id, reply } => {
                send_message::apply_reply(&mut self.state, request_id, reply, now_ms());
            }
        }

        Ok(())
    }
}

pub(crate) fn now_ms() -> i64 {
    chrono::Local::now().timestamp_millis()
}
