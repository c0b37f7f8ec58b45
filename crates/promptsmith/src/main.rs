//! promptsmith CLI - compose structured LLM prompts with intent-aware guidance

mod cli;
mod colors;
mod commands;
mod interaction;
mod logging;
mod output;
mod session_loop;
mod splash;

use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::debug;

use cli::{Cli, Commands};
use promptsmith_core::Config;

/// Load config and apply CLI overrides to the session settings
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if cli.no_pause {
        config.session = config.session.without_pauses();
    }
    if cli.fresh_restart {
        config.session.prefill_on_restart = false;
    }
    Ok(config)
}

fn main() -> ExitCode {
    let cli = cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {:#}", e);
            return ExitCode::from(1);
        }
    };

    if let Err(e) = logging::setup_logging(cli.log_level.as_deref(), Some(&config.logging.level)) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }
    debug!(command = ?cli.command, "main: dispatching command");

    let result = match cli.command {
        Some(Commands::Classify { ref goal }) => commands::run_classify(goal, cli.json, cli.quiet),
        None => commands::run_compose(config.session, cli.json, cli.quiet),
    };

    match result {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli() {
        crate::cli::Cli::command().debug_assert();
    }

    #[test]
    fn test_load_config_applies_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[session]\nprepare_pause_ms = 250\n").unwrap();

        let cli = Cli::try_parse_from([
            "promptsmith",
            "--config",
            path.to_str().unwrap(),
            "--no-pause",
            "--fresh-restart",
        ])
        .unwrap();
        let config = load_config(&cli).unwrap();

        assert_eq!(config.session.prepare_pause_ms, 0);
        assert!(!config.session.prefill_on_restart);
    }

    #[test]
    fn test_load_config_missing_file_fails() {
        let cli =
            Cli::try_parse_from(["promptsmith", "--config", "/nonexistent/promptsmith.toml"]).unwrap();
        let err = load_config(&cli).unwrap_err();
        assert!(format!("{:#}", err).contains("config file not found"));
    }
}
