use anyhow::Result;

use crate::domain::{events::AppEvent, widget_state::WidgetState};

pub trait AppEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>>;
}

pub trait WidgetOrchestrator {
    fn state(&self) -> &WidgetState;
    fn state_mut(&mut self) -> &mut WidgetState;
    fn handle_event(&mut self, event: AppEvent) -> Result<()>;
}
