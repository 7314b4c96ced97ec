use std::{path::Path, sync::mpsc};

use tracing_appender::non_blocking::WorkerGuard;

use crate::{
    agent::http::HttpAgentTransport,
    infra::{
        self, config::FileConfigAdapter, contracts::ConfigAdapter, error::AppError,
        storage_layout::StorageLayout,
    },
    ui::CrosstermEventSource,
    usecases::{
        context::AppContext,
        contracts::{AppEventSource, WidgetOrchestrator},
        widget::{DefaultWidgetOrchestrator, WidgetSettings},
    },
};

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
}

/// Loads config and installs logging. Keep the guard alive until exit.
pub fn bootstrap(
    config_path: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<(AppContext, WorkerGuard), AppError> {
    let context = build_context(config_path, overrides)?;
    let layout = StorageLayout::resolve()?;
    let guard = infra::logging::init(&context.config.logging, &layout)?;

    tracing::debug!(log_dir = %layout.log_dir.display(), "logging initialized");
    Ok((context, guard))
}

fn build_context(
    config_path: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<AppContext, AppError> {
    let config_adapter = FileConfigAdapter::new(config_path);
    let mut config = config_adapter.load()?;

    if let Some(base_url) = &overrides.base_url {
        config.agent.base_url = base_url.clone();
    }

    Ok(AppContext::new(config))
}

pub struct WidgetComposition {
    pub event_source: Box<dyn AppEventSource>,
    pub orchestrator: Box<dyn WidgetOrchestrator>,
}

/// Wires the terminal event source and the HTTP transport through one reply channel.
pub fn compose_widget(context: &AppContext) -> Result<WidgetComposition, AppError> {
    let (reply_tx, reply_rx) = mpsc::channel();
    let transport = HttpAgentTransport::new(&context.config.agent, reply_tx)?;
    let settings = WidgetSettings::from_config(&context.config.ui);

    Ok(WidgetComposition {
        event_source: Box::new(CrosstermEventSource::new(reply_rx)),
        orchestrator: Box::new(DefaultWidgetOrchestrator::new(transport, settings)),
    })
}
