//! Configuration file loading with precedence handling.

use crate::model::{EntryList, FontSize};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "FITBOX_CONFIG";

/// Environment variable overriding the container width percentage.
pub const WIDTH_PERCENT_ENV_VAR: &str = "FITBOX_WIDTH_PERCENT";

/// Default container width as a share of the terminal width.
pub const DEFAULT_WIDTH_PERCENT: u8 = 30;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown fields.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// Config file parsed but holds an out-of-range value.
    #[error("Invalid value in {path}: {reason}")]
    Invalid {
        /// Path with the bad value.
        path: PathBuf,
        /// Which value and why.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/fitbox/config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Labels to render, in order.
    #[serde(default)]
    pub entries: Option<Vec<String>>,

    /// Container width as a percentage of the terminal width (1-100).
    #[serde(default)]
    pub width_percent: Option<u8>,

    /// Font size in pixels before the first measurement.
    #[serde(default)]
    pub default_font_size: Option<u16>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

impl ConfigFile {
    fn validate(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        let invalid = |reason: String| ConfigError::Invalid {
            path: path.to_path_buf(),
            reason,
        };
        if let Some(pct) = self.width_percent {
            if !(1..=100).contains(&pct) {
                return Err(invalid(format!(
                    "width_percent must be between 1 and 100, got {pct}"
                )));
            }
        }
        if self.default_font_size == Some(0) {
            return Err(invalid("default_font_size must be positive".to_string()));
        }
        Ok(())
    }
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Labels to render.
    pub entries: EntryList,
    /// Container width percentage.
    pub width_percent: u8,
    /// Font size before the first measurement.
    pub default_font_size: FontSize,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            entries: EntryList::example(),
            width_percent: DEFAULT_WIDTH_PERCENT,
            default_font_size: FontSize::DEFAULT,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/fitbox/fitbox.log` on Unix-like systems,
/// or the platform state directory elsewhere. Falls back to the current
/// directory if no state directory can be determined.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("fitbox").join("fitbox.log")
    } else {
        PathBuf::from("fitbox.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if the file exists but cannot be read, parsed, or holds
/// out-of-range values.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;
    config.validate(&path)?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/fitbox/config.toml` on Unix, the platform config
/// directory elsewhere, or `None` if it cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("fitbox").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `FITBOX_CONFIG` environment variable
/// 3. Default path `~/.config/fitbox/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be loaded.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        entries: config.entries.map(EntryList::from).unwrap_or(defaults.entries),
        width_percent: config.width_percent.unwrap_or(defaults.width_percent),
        default_font_size: config
            .default_font_size
            .and_then(FontSize::new)
            .unwrap_or(defaults.default_font_size),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `FITBOX_WIDTH_PERCENT`: container width percentage (1-100); other values
///   are ignored with a warning.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var(WIDTH_PERCENT_ENV_VAR) {
        match raw.trim().parse::<u8>() {
            Ok(pct) if (1..=100).contains(&pct) => config.width_percent = pct,
            _ => warn!(
                value = %raw,
                "Ignoring {WIDTH_PERCENT_ENV_VAR}: expected an integer between 1 and 100"
            ),
        }
    }

    config
}

/// CLI-supplied values. `None` means the flag was not given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// Entries from repeated `--entry` flags.
    pub entries: Option<EntryList>,
    /// `--width-percent`.
    pub width_percent: Option<u8>,
    /// `--font-size`.
    pub font_size: Option<FontSize>,
}

/// Apply CLI argument overrides to resolved config.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(entries) = cli.entries {
        config.entries = entries;
    }

    if let Some(pct) = cli.width_percent {
        config.width_percent = pct;
    }

    if let Some(font_size) = cli.font_size {
        config.default_font_size = font_size;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
