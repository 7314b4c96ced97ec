use serde::Deserialize;

use crate::infra::config::{AgentConfig, AppConfig, LogConfig, UiConfig};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub agent: Option<FileAgentConfig>,
    pub ui: Option<FileUiConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(agent) = self.agent {
            agent.merge_into(&mut config.agent);
        }

        if let Some(ui) = self.ui {
            ui.merge_into(&mut config.ui);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileAgentConfig {
    pub base_url: Option<String>,
    pub endpoint_path: Option<String>,
    pub request_timeout_ms: Option<u64>,
}

impl FileAgentConfig {
    fn merge_into(self, config: &mut AgentConfig) {
        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }

        if let Some(endpoint_path) = self.endpoint_path {
            config.endpoint_path = endpoint_path;
        }

        if let Some(timeout_ms) = self.request_timeout_ms {
            config.request_timeout_ms = timeout_ms;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileUiConfig {
    pub assistant_name: Option<String>,
    pub name_focus_delay_ms: Option<u64>,
}

impl FileUiConfig {
    fn merge_into(self, config: &mut UiConfig) {
        if let Some(assistant_name) = self.assistant_name {
            config.assistant_name = assistant_name;
        }

        if let Some(delay_ms) = self.name_focus_delay_ms {
            config.name_focus_delay_ms = delay_ms;
        }
    }
}
