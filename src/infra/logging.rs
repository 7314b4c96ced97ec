use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::infra::{config::LogConfig, error::AppError, storage_layout::StorageLayout};

const LOG_FILE_PREFIX: &str = "agent-chat.log";

/// Installs a file-backed subscriber; the terminal belongs to the TUI.
///
/// The returned guard flushes buffered lines on drop and must outlive the app.
pub fn init(config: &LogConfig, layout: &StorageLayout) -> Result<WorkerGuard, AppError> {
    layout.ensure_dirs()?;

    let appender = tracing_appender::rolling::daily(&layout.log_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level)),
        )
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(AppError::LoggingInit)?;

    Ok(guard)
}
