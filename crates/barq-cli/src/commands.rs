//! Command handlers.
//!
//! Every handler writes its output to the given writer so it can be
//! captured in tests; `main` passes stdout.

use std::io::Write;
use std::path::{Path, PathBuf};

use barq_core::{Error, Result};
use barq_ingest::{ImportReport, import_rows, read_csv_path};
use barq_query::{FilterCriteria, VesselViews};
use barq_store::FleetStore;

use crate::cli::{Cli, Command, ConfigAction};
use crate::config::BarqConfig;

// ============================================================================
// Dispatch
// ============================================================================

/// Runs the parsed command line against an already-loaded config.
pub fn run(cli: Cli, config: &BarqConfig, out: &mut impl Write) -> Result<()> {
    match cli.command {
        Command::Import { csv } => cmd_import(config, Path::new(&csv), out).map(|_| ()),
        Command::List {
            csv,
            search,
            port,
            status,
            gerant,
        } => {
            let criteria = FilterCriteria::default()
                .with_search(search)
                .with_port(port)
                .with_status(status)
                .with_gerant(gerant);
            cmd_list(config, Path::new(&csv), &criteria, out).map(|_| ())
        }
        Command::Ports { csv } => cmd_ports(config, Path::new(&csv), out).map(|_| ()),
        Command::Config { action } => match action {
            ConfigAction::Path => cmd_config_path(cli.config.as_deref(), out),
            ConfigAction::Show => cmd_config_show(config, out),
            ConfigAction::Init { file, force } => {
                cmd_config_init(file.as_deref().or(cli.config.as_deref()), force, out)
            }
        },
    }
}

// ============================================================================
// Registry commands
// ============================================================================

/// Reads a CSV export into a fresh fleet store, keeping only accepted
/// rows.
pub fn load_fleet(config: &BarqConfig, csv: &Path) -> Result<(FleetStore, ImportReport)> {
    let mut fleet = FleetStore::new();
    let report = load_into(&mut fleet, config, csv)?;
    Ok((fleet, report))
}

/// Imports a CSV export into `fleet`. The load status ends idle on
/// success and failed on any error; it never stays loading.
pub fn load_into(fleet: &mut FleetStore, config: &BarqConfig, csv: &Path) -> Result<ImportReport> {
    fleet.begin_loading();
    let result = config
        .csv_options()
        .and_then(|options| read_csv_path(csv, &options))
        .and_then(|rows| {
            let report = import_rows(rows, &config.import_options());
            fleet.accept_import(report.accepted.iter().cloned())?;
            Ok(report)
        });

    match result {
        Ok(report) => {
            fleet.finish_loading();
            Ok(report)
        }
        Err(e) => {
            fleet.fail_loading(e.to_string());
            Err(e)
        }
    }
}

/// Validates a CSV export and prints the rejected rows with their
/// violation messages.
pub fn cmd_import(config: &BarqConfig, csv: &Path, out: &mut impl Write) -> Result<ImportReport> {
    let (_, report) = load_fleet(config, csv)?;

    writeln!(
        out,
        "Accepted {} of {} rows from {}",
        report.accepted.len(),
        report.total(),
        csv.display()
    )?;
    for rejected in &report.rejected {
        for message in rejected.messages() {
            writeln!(out, "row {}: {message}", rejected.row_number)?;
        }
    }
    Ok(report)
}

/// Prints the vessels matching `criteria`, one per line. Returns how many
/// were printed.
pub fn cmd_list(
    config: &BarqConfig,
    csv: &Path,
    criteria: &FilterCriteria,
    out: &mut impl Write,
) -> Result<usize> {
    let (fleet, _) = load_fleet(config, csv)?;
    let views = VesselViews::new();
    let vessels = views.select_filtered(fleet.vessels(), criteria);

    for vessel in vessels.iter() {
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}",
            vessel.id,
            vessel.name,
            vessel.registration_str(),
            vessel.port,
            vessel.status
        )?;
    }
    Ok(vessels.len())
}

/// Prints the distinct home ports, sorted. Returns how many were printed.
pub fn cmd_ports(config: &BarqConfig, csv: &Path, out: &mut impl Write) -> Result<usize> {
    let (fleet, _) = load_fleet(config, csv)?;
    let ports = VesselViews::new().select_ports(fleet.vessels());

    for port in ports.iter() {
        writeln!(out, "{port}")?;
    }
    Ok(ports.len())
}

// ============================================================================
// Config commands
// ============================================================================

/// Prints the resolved config file path.
pub fn cmd_config_path(explicit: Option<&str>, out: &mut impl Write) -> Result<()> {
    let path = BarqConfig::resolve_config_path(explicit).ok_or_else(|| {
        Error::config("Could not determine config directory for this platform")
    })?;
    writeln!(out, "{}", path.display())?;
    if !path.exists() {
        tracing::warn!("Config file does not exist; run `barq config init` to create it");
    }
    Ok(())
}

/// Prints the effective configuration.
pub fn cmd_config_show(config: &BarqConfig, out: &mut impl Write) -> Result<()> {
    write!(out, "{}", config.to_toml_string()?)?;
    Ok(())
}

/// Writes a default config file.
pub fn cmd_config_init(file: Option<&str>, force: bool, out: &mut impl Write) -> Result<()> {
    let path = match file {
        Some(p) => PathBuf::from(p),
        None => BarqConfig::default_config_path()
            .ok_or_else(|| Error::config("Could not determine config directory"))?,
    };

    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, BarqConfig::default().to_toml_string()?)?;

    writeln!(out, "Config file created at {}", path.display())?;
    Ok(())
}
