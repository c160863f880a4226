//! Configuration loading and typed config structures for the simulator.
//!
//! The canonical configuration lives in `xiuxian-config.yaml` at the
//! project root. This module defines strongly-typed structs that mirror the
//! YAML structure and provides a loader that reads the file; every field
//! has a default so an absent or partial file is fine.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use xiuxian_types::Realm;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level simulator configuration.
///
/// Mirrors the structure of `xiuxian-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SimulatorConfig {
    /// Simulator-level settings (name, starting realm).
    #[serde(default)]
    pub simulator: SimulatorSection,

    /// Autoplay sequencer settings.
    #[serde(default)]
    pub autoplay: AutoplayConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SimulatorConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_yml::from_str(&contents)?;
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        Ok(config)
    }
}

/// Simulator-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SimulatorSection {
    /// Human-readable simulator name.
    #[serde(default = "default_simulator_name")]
    pub name: String,

    /// The realm the store starts in.
    #[serde(default = "default_starting_realm")]
    pub starting_realm: Realm,
}

impl Default for SimulatorSection {
    fn default() -> Self {
        Self {
            name: default_simulator_name(),
            starting_realm: default_starting_realm(),
        }
    }
}

/// Autoplay sequencer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AutoplayConfig {
    /// Delay before the first autoplay tick, in milliseconds.
    #[serde(default = "default_start_delay_ms")]
    pub start_delay_ms: u64,

    /// Per-realm overrides of the catalog's autoplay tick interval,
    /// in milliseconds.
    #[serde(default)]
    pub interval_overrides: BTreeMap<Realm, u64>,
}

impl AutoplayConfig {
    /// The effective autoplay tick interval for a realm: the configured
    /// override when present, the catalog cadence otherwise.
    pub fn interval_ms(&self, realm: Realm) -> u64 {
        self.interval_overrides
            .get(&realm)
            .copied()
            .unwrap_or_else(|| xiuxian_realms::info(realm).autoplay_interval_ms)
    }
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            start_delay_ms: default_start_delay_ms(),
            interval_overrides: BTreeMap::new(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

fn default_simulator_name() -> String {
    "修真模拟器".to_owned()
}

const fn default_starting_realm() -> Realm {
    Realm::LianQi
}

const fn default_start_delay_ms() -> u64 {
    500
}

fn default_log_level() -> String {
    "info".to_owned()
}
