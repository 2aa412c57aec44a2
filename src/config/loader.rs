//! Configuration file loading with precedence handling.

use crate::view::OutputFormat;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "CHATV_CONFIG";
/// Environment variable overriding the output format.
pub const FORMAT_ENV: &str = "CHATV_FORMAT";
/// Environment variable overriding the star store path.
pub const STAR_STORE_ENV: &str = "CHATV_STAR_STORE";

const APP_DIR: &str = "chatv";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/chatv/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Output format ("text", "html", "json").
    #[serde(default)]
    pub format: Option<OutputFormat>,

    /// Path to the starred-ids JSON file.
    #[serde(default)]
    pub star_store_path: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Show only starred messages by default.
    #[serde(default)]
    pub starred_only: Option<bool>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Output format.
    pub format: OutputFormat,
    /// Starred-ids file.
    pub star_store_path: PathBuf,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Show only starred messages.
    pub starred_only: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            star_store_path: default_star_store_path(),
            log_file_path: default_log_path(),
            starred_only: false,
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/chatv/chatv.log` on Linux, or the platform's
/// state directory elsewhere. Falls back to the current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join(APP_DIR).join("chatv.log")
    } else {
        PathBuf::from("chatv.log")
    }
}

/// Resolve default star store path.
///
/// Returns `~/.local/share/chatv/starred.json` on Linux, or the platform's
/// data directory elsewhere. Falls back to the current directory.
pub fn default_star_store_path() -> PathBuf {
    if let Some(data_dir) = dirs::data_dir() {
        data_dir.join(APP_DIR).join("starred.json")
    } else {
        PathBuf::from("starred.json")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
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

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/chatv/config.toml` on Linux, appropriate path elsewhere.
/// Returns `None` if the config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `CHATV_CONFIG` environment variable
/// 3. Default path `~/.config/chatv/config.toml`
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
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
        format: config.format.unwrap_or(defaults.format),
        star_store_path: config.star_store_path.unwrap_or(defaults.star_store_path),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        starred_only: config.starred_only.unwrap_or(defaults.starred_only),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `CHATV_FORMAT`: Override output format (unrecognized values are logged and ignored)
/// - `CHATV_STAR_STORE`: Override star store path
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var(FORMAT_ENV) {
        match raw.parse::<OutputFormat>() {
            Ok(format) => config.format = format,
            Err(error) => warn!(%error, "Ignoring {}", FORMAT_ENV),
        }
    }

    if let Ok(path) = std::env::var(STAR_STORE_ENV) {
        if !path.is_empty() {
            config.star_store_path = PathBuf::from(path);
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    format_override: Option<OutputFormat>,
    starred_only_override: Option<bool>,
) -> ResolvedConfig {
    if let Some(format) = format_override {
        config.format = format;
    }

    if let Some(starred_only) = starred_only_override {
        config.starred_only = starred_only;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
