//! Barq CLI
//!
//! Command-line interface for the Barq fleet registry.

#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use barq_cli::{BarqConfig, Cli, Command, ConfigAction, commands, logging};
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // `config path` and `config init` must work before the file exists.
    let config = match &cli.command {
        Command::Config {
            action: ConfigAction::Path | ConfigAction::Init { .. },
        } => BarqConfig::default(),
        _ => BarqConfig::load(cli.config.as_deref()).context("Failed to load configuration")?,
    };
    logging::init(cli.verbose, &config.log_level);
    tracing::debug!(?config, "Effective configuration");

    let mut stdout = std::io::stdout().lock();
    commands::run(cli, &config, &mut stdout)?;
    Ok(())
}
