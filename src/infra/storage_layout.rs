use std::{env, fs, path::PathBuf};

use crate::infra::error::AppError;

const APP_DIR_NAME: &str = "agent-chat";

/// Per-user directories. Only logs are written; conversations stay in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLayout {
    pub data_dir: PathBuf,
    pub log_dir: PathBuf,
}

impl StorageLayout {
    pub fn resolve() -> Result<Self, AppError> {
        let data_base = env::var_os("XDG_DATA_HOME")
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .or_else(dirs::data_dir)
            .ok_or_else(|| AppError::StoragePathResolution {
                details: "unable to resolve data base directory (XDG_DATA_HOME/HOME)".into(),
            })?;

        let data_dir = data_base.join(APP_DIR_NAME);
        let log_dir = data_dir.join("logs");

        Ok(Self { data_dir, log_dir })
    }

    pub fn ensure_dirs(&self) -> Result<(), AppError> {
        for dir in [&self.data_dir, &self.log_dir] {
            fs::create_dir_all(dir).map_err(|source| AppError::StorageDirCreate {
                path: dir.clone(),
                source,
            })?;
        }

        Ok(())
    }
}
