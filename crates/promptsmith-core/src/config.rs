//! Configuration handling for promptsmith

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::PromptError;
use crate::interaction::DEFAULT_MAX_FIELD_LEN;

/// Project-local config file, relative to the working directory
pub const LOCAL_CONFIG_PATH: &str = ".promptsmith/config.toml";

/// Promptsmith configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Session behavior
    #[serde(default)]
    pub session: SessionConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Session behavior settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionConfig {
    /// Offer the previous cycle's values as defaults after a restart
    #[serde(default = "default_prefill_on_restart")]
    pub prefill_on_restart: bool,

    /// Character limit for each form field
    #[serde(default = "default_max_field_len")]
    pub max_field_len: usize,

    /// Pause before showing guidance, in milliseconds
    #[serde(default = "default_guidance_pause_ms")]
    pub guidance_pause_ms: u64,

    /// Pause while "preparing" the final prompt, in milliseconds
    #[serde(default = "default_prepare_pause_ms")]
    pub prepare_pause_ms: u64,

    /// Pause after a declined confirmation, in milliseconds
    #[serde(default = "default_restart_pause_ms")]
    pub restart_pause_ms: u64,
}

fn default_prefill_on_restart() -> bool {
    true
}

fn default_max_field_len() -> usize {
    DEFAULT_MAX_FIELD_LEN
}

fn default_guidance_pause_ms() -> u64 {
    500
}

fn default_prepare_pause_ms() -> u64 {
    1000
}

fn default_restart_pause_ms() -> u64 {
    1000
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            prefill_on_restart: default_prefill_on_restart(),
            max_field_len: default_max_field_len(),
            guidance_pause_ms: default_guidance_pause_ms(),
            prepare_pause_ms: default_prepare_pause_ms(),
            restart_pause_ms: default_restart_pause_ms(),
        }
    }
}

impl SessionConfig {
    pub fn guidance_pause(&self) -> Duration {
        Duration::from_millis(self.guidance_pause_ms)
    }

    pub fn prepare_pause(&self) -> Duration {
        Duration::from_millis(self.prepare_pause_ms)
    }

    pub fn restart_pause(&self) -> Duration {
        Duration::from_millis(self.restart_pause_ms)
    }

    /// Zero every courtesy pause
    pub fn without_pauses(mut self) -> Self {
        self.guidance_pause_ms = 0;
        self.prepare_pause_ms = 0;
        self.restart_pause_ms = 0;
        self
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load config from an explicit path, else the first default location found,
    /// else built-in defaults
    ///
    /// An explicit path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, PromptError> {
        if let Some(config_path) = path {
            if !config_path.exists() {
                return Err(PromptError::Config(format!(
                    "config file not found: {}",
                    config_path.display()
                )));
            }
            return Self::from_file(config_path);
        }

        for candidate in Self::default_paths() {
            if candidate.exists() {
                return Self::from_file(&candidate);
            }
        }

        debug!("Config::load: no config file found, using defaults");
        Ok(Config::default())
    }

    /// Default lookup locations, in priority order
    pub fn default_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(LOCAL_CONFIG_PATH)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("promptsmith").join("config.toml"));
        }
        paths
    }

    /// Parse a config file
    pub fn from_file(path: &Path) -> Result<Self, PromptError> {
        debug!(path = %path.display(), "Config::from_file");
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse config from TOML text
    pub fn parse(content: &str) -> Result<Self, PromptError> {
        let config: Config = toml::from_str(content)?;
        if config.session.max_field_len == 0 {
            return Err(PromptError::Config(
                "session.max_field_len must be greater than zero".to_string(),
            ));
        }
        Ok(config)
    }
}
