//! CLI configuration.
//!
//! Settings are read from a TOML file. The file is located, in order:
//!
//! 1. the `--config` flag (or the `BARQ_CONFIG` environment variable, which
//!    clap maps onto the same flag);
//! 2. `<platform config dir>/barq/config.toml`.
//!
//! A missing default file is not an error; every field has a default.

use std::path::{Path, PathBuf};

use barq_core::{Error, Result, VesselStatus};
use barq_ingest::{CsvOptions, ImportOptions};
use serde::{Deserialize, Serialize};

/// Settings for reading spreadsheets and logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarqConfig {
    /// CSV field delimiter. Must be a single ASCII character.
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// Normalize header whitespace before matching column synonyms.
    #[serde(default = "default_trim_headers")]
    pub trim_headers: bool,

    /// Status given to imported rows without one.
    #[serde(default)]
    pub default_status: VesselStatus,

    /// Log filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_delimiter() -> char {
    ','
}

fn default_trim_headers() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for BarqConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            trim_headers: default_trim_headers(),
            default_status: VesselStatus::default(),
            log_level: default_log_level(),
        }
    }
}

impl BarqConfig {
    /// Platform default location of the config file.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("barq").join("config.toml"))
    }

    /// The file that [`BarqConfig::load`] would read.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(PathBuf::from(path)),
            None => Self::default_config_path(),
        }
    }

    /// Loads the configuration.
    ///
    /// An explicit path that does not exist is an error. A missing default
    /// file yields [`BarqConfig::default`].
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        match Self::resolve_config_path(explicit) {
            Some(path) if path.exists() => Self::from_file(&path),
            Some(path) if explicit.is_some() => Err(Error::config(format!(
                "Config file not found: {}",
                path.display()
            ))),
            _ => {
                tracing::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Parses a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Parses config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| Error::config(e.to_string()))?;
        config.csv_options()?;
        Ok(config)
    }

    /// Serializes the config as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// CSV reader settings.
    pub fn csv_options(&self) -> Result<CsvOptions> {
        if !self.delimiter.is_ascii() {
            return Err(Error::config(format!(
                "delimiter must be a single ASCII character, got '{}'",
                self.delimiter
            )));
        }
        Ok(CsvOptions {
            delimiter: self.delimiter as u8,
            normalize_headers: self.trim_headers,
        })
    }

    /// Row promotion settings.
    pub fn import_options(&self) -> ImportOptions {
        ImportOptions {
            default_status: self.default_status,
        }
    }
}
