//! File-based tracing setup
//!
//! The terminal belongs to the interactive prompts, so logs go to
//! `<data_local_dir>/promptsmith/logs/promptsmith.log`.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Directory holding the log file
pub fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("promptsmith")
        .join("logs")
}

/// Parse a level name, case-insensitively
pub fn parse_level(name: &str) -> Option<Level> {
    match name.to_uppercase().as_str() {
        "TRACE" => Some(Level::TRACE),
        "DEBUG" => Some(Level::DEBUG),
        "INFO" => Some(Level::INFO),
        "WARN" | "WARNING" => Some(Level::WARN),
        "ERROR" => Some(Level::ERROR),
        _ => None,
    }
}

/// Initialize logging with priority: CLI --log-level > config file > INFO
pub fn setup_logging(cli_level: Option<&str>, config_level: Option<&str>) -> Result<()> {
    let level = match cli_level.or(config_level) {
        Some(name) => parse_level(name).unwrap_or_else(|| {
            eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", name);
            Level::INFO
        }),
        None => Level::INFO,
    };

    let dir = log_dir();
    fs::create_dir_all(&dir).context("Failed to create log directory")?;
    let log_file =
        fs::File::create(dir.join("promptsmith.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    tracing::info!("Logging initialized (level: {:?})", level);
    Ok(())
}
