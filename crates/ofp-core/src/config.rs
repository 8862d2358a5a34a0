// Rust guideline compliant 2026-10-14

//! Configuration management for ofp.

use crate::directory::{
    DirectorySource, FileDirectory, HttpDirectory, DEFAULT_DIRECTORY_URL, DEFAULT_TIMEOUT_SECS,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Log levels accepted by `log_level`.
pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
}

/// Configuration for ofp behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Participants endpoint of the directory.
    #[serde(default = "default_directory_url")]
    pub directory_url: String,

    /// Offline snapshot to read instead of the live directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory_file: Option<PathBuf>,

    /// HTTP request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Default output format.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Maximum log level (error, warn, info, debug, trace).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_directory_url() -> String {
    DEFAULT_DIRECTORY_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            directory_url: default_directory_url(),
            directory_file: None,
            timeout_secs: default_timeout_secs(),
            output_format: OutputFormat::default(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Loads configuration from an optional file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. The TOML file at `path`, when given
    /// 3. Environment variables with `OFP_` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration file cannot be read
    /// - The configuration file contains invalid TOML
    /// - An environment override or the final values fail validation
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)?;
                toml::from_str(&content).map_err(|e| {
                    Error::InvalidConfig(format!("{}: {}", path.display(), e))
                })?
            }
            None => Self::default(),
        };

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `OFP_DIRECTORY_URL` - Participants endpoint
    /// - `OFP_DIRECTORY_FILE` - Offline snapshot path
    /// - `OFP_TIMEOUT_SECS` - Request timeout in seconds
    /// - `OFP_OUTPUT_FORMAT` - Output format (json/table)
    /// - `OFP_LOG_LEVEL` - Maximum log level
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("OFP_DIRECTORY_URL") {
            self.directory_url = val;
        }

        if let Ok(val) = std::env::var("OFP_DIRECTORY_FILE") {
            self.directory_file = Some(PathBuf::from(val));
        }

        if let Ok(val) = std::env::var("OFP_TIMEOUT_SECS") {
            self.timeout_secs = val.parse().map_err(|_| {
                Error::InvalidConfig("OFP_TIMEOUT_SECS must be a positive number".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("OFP_OUTPUT_FORMAT") {
            self.output_format = match val.as_str() {
                "json" => OutputFormat::Json,
                "table" => OutputFormat::Table,
                _ => {
                    return Err(Error::InvalidConfig(
                        "OFP_OUTPUT_FORMAT must be json or table".to_string(),
                    ))
                }
            };
        }

        if let Ok(val) = std::env::var("OFP_LOG_LEVEL") {
            self.log_level = val.to_lowercase();
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - timeout_secs is zero
    /// - directory_url is not an http(s) URL
    /// - log_level is not a known level
    fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(Error::InvalidConfig(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }

        if !(self.directory_url.starts_with("http://") || self.directory_url.starts_with("https://"))
        {
            return Err(Error::InvalidConfig(format!(
                "directory_url must be an http(s) URL, got {}",
                self.directory_url
            )));
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(Error::InvalidConfig(format!(
                "log_level must be one of {}, got {}",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }

        Ok(())
    }

    /// Saves the configuration to a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Builds the directory source this configuration points at.
    ///
    /// A configured snapshot file wins over the HTTP endpoint.
    pub fn source(&self) -> Box<dyn DirectorySource> {
        match &self.directory_file {
            Some(path) => Box::new(FileDirectory::new(path)),
            None => Box::new(HttpDirectory::new(
                self.directory_url.clone(),
                Duration::from_secs(self.timeout_secs),
            )),
        }
    }
}
