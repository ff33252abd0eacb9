// Rust guideline compliant 2026-10-16

//! Configuration management for Quorum.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Name of the configuration file inside `.quorum`.
pub const CONFIG_FILE: &str = "config.toml";

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

impl OutputFormat {
    /// Parses `json`, `table` or `plain`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "json" => Some(OutputFormat::Json),
            "table" => Some(OutputFormat::Table),
            "plain" => Some(OutputFormat::Plain),
            _ => None,
        }
    }
}

/// Configuration for Quorum behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Identity used when a command does not name one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_user: Option<String>,

    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Milliseconds to wait for the store lock.
    #[serde(default = "default_lock_timeout_ms")]
    pub lock_timeout_ms: u64,

    /// Log level (error, warn, info, debug, trace).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_lock_timeout_ms() -> u64 {
    5000
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_user: None,
            output_format: OutputFormat::default(),
            lock_timeout_ms: default_lock_timeout_ms(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `.quorum/config.toml`
    /// 3. Environment variables with `QUORUM_` prefix
    ///
    /// # Arguments
    ///
    /// * `quorum_dir` - Path to the `.quorum` directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(quorum_dir: &Path) -> Result<Self> {
        Self::load_with_env(quorum_dir, |key| std::env::var(key).ok())
    }

    /// Like [`Config::load`], reading overrides through `env` instead of the
    /// process environment.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`].
    pub fn load_with_env<F>(quorum_dir: &Path, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let config_path = quorum_dir.join(CONFIG_FILE);
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Invalid config file: {}", e)))?;
        }

        config.apply_env_overrides(env)?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides.
    ///
    /// Supported environment variables:
    /// - `QUORUM_USER` - Default requester identity
    /// - `QUORUM_OUTPUT_FORMAT` - Output format (json/table/plain)
    /// - `QUORUM_LOCK_TIMEOUT_MS` - Store lock timeout in milliseconds
    /// - `QUORUM_LOG` - Log level
    fn apply_env_overrides<F>(&mut self, env: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = env("QUORUM_USER") {
            self.default_user = Some(val);
        }

        if let Some(val) = env("QUORUM_OUTPUT_FORMAT") {
            self.output_format = OutputFormat::parse(&val).ok_or_else(|| {
                Error::Config("QUORUM_OUTPUT_FORMAT must be json, table, or plain".to_string())
            })?;
        }

        if let Some(val) = env("QUORUM_LOCK_TIMEOUT_MS") {
            self.lock_timeout_ms = val.parse().map_err(|_| {
                Error::Config("QUORUM_LOCK_TIMEOUT_MS must be a positive number".to_string())
            })?;
        }

        if let Some(val) = env("QUORUM_LOG") {
            self.log_level = val;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `default_user` is blank
    /// - `lock_timeout_ms` is zero
    /// - `log_level` is not a known level
    fn validate(&self) -> Result<()> {
        if let Some(user) = &self.default_user {
            if user.trim().is_empty() {
                return Err(Error::Config("default_user cannot be empty".to_string()));
            }
        }

        if self.lock_timeout_ms == 0 {
            return Err(Error::Config(
                "lock_timeout_ms must be greater than 0".to_string(),
            ));
        }

        match self.log_level.to_lowercase().as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => Ok(()),
            other => Err(Error::Config(format!(
                "log_level must be error, warn, info, debug, or trace, got '{other}'"
            ))),
        }
    }

    /// Store lock timeout as a duration.
    #[must_use]
    pub fn lock_timeout(&self) -> Duration {
        Duration::from_millis(self.lock_timeout_ms)
    }

    /// Saves the configuration to `config.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, quorum_dir: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(quorum_dir.join(CONFIG_FILE), content)?;
        Ok(())
    }
}
