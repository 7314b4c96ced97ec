mod agent;
mod app;
mod cli;
mod domain;
mod infra;
#[cfg(test)]
mod test_support;
mod ui;
mod usecases;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<ExitCode> {
    let cli = cli::Cli::parse();
    app::run(cli)
}
