use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "agent-chat", about = "Terminal chat client for the document agent")]
pub struct Cli {
    /// Path to config file (default: ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Agent base URL, e.g. http://127.0.0.1:8000 (overrides config)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Start the interactive chat
    Run,
    /// Send a single message and print the exchange
    Send {
        /// Message text; may be empty when a file is attached
        #[arg(default_value = "")]
        message: String,

        /// File to attach
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Continue an existing backend session
        #[arg(short, long)]
        session: Option<String>,
    },
}

impl Cli {
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or(Command::Run)
    }
}
