//! # barq-cli
//!
//! Command-line front end for the Barq fleet registry:
//! - `barq import` validates a spreadsheet export and lists rejected rows
//! - `barq list` prints the vessels matching a set of filters
//! - `barq ports` prints the distinct home ports
//! - `barq config` locates, shows and initializes the config file

#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;

pub use cli::{Cli, Command, ConfigAction};
pub use config::BarqConfig;
