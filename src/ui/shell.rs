use anyhow::Result;

use crate::usecases::{
    context::AppContext,
    contracts::{AppEventSource, WidgetOrchestrator},
};

use super::{terminal::TerminalSession, view};

pub fn start(
    context: &AppContext,
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn WidgetOrchestrator,
) -> Result<()> {
    tracing::info!(
        log_level = %context.config.logging.level,
        agent_base_url = %context.config.agent.base_url,
        "starting chat widget"
    );

    let assistant_name = context.config.ui.assistant_name.as_str();
    let mut terminal = TerminalSession::new()?;

    while orchestrator.state().is_running() {
        terminal.draw(|frame| view::render(frame, orchestrator.state_mut(), assistant_name))?;
        pump_event(event_source, orchestrator)?;
    }

    tracing::info!("chat widget stopped");
    Ok(())
}

/// Reads one event, if any, and hands it to the orchestrator.
fn pump_event(
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn WidgetOrchestrator,
) -> Result<bool> {
    match event_source.next_event()? {
        Some(event) => {
            orchestrator.handle_event(event)?;
            Ok(true)
        }
        None => Ok(false),
    }
}
