//! Command-line argument definitions.

use clap::{Parser, Subcommand};

/// Barq fleet registry tool
#[derive(Parser, Debug)]
#[command(name = "barq")]
#[command(author, version, about = "Import and browse a fishing-boat registry", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "BARQ_CONFIG")]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a spreadsheet export and report rejected rows
    Import {
        /// CSV file to read
        csv: String,
    },

    /// Import a spreadsheet and print the vessels matching the filters
    List {
        /// CSV file to read
        csv: String,

        /// Case-insensitive text matched against name or registration
        #[arg(long, default_value = "")]
        search: String,

        /// Exact home port
        #[arg(long, default_value = "")]
        port: String,

        /// Exact status (`active` or `inactive`)
        #[arg(long, default_value = "")]
        status: String,

        /// Exact responsible-party identifier
        #[arg(long, default_value = "")]
        gerant: String,
    },

    /// Import a spreadsheet and print its distinct home ports
    Ports {
        /// CSV file to read
        csv: String,
    },

    /// Configuration management
    Config {
        /// Config action
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// `barq config` subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the resolved config file path
    Path,

    /// Print the effective configuration as TOML
    Show,

    /// Write a default config file
    Init {
        /// Destination (defaults to the platform config directory)
        #[arg(long)]
        file: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
