//! CLI argument parsing with clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Promptsmith - compose structured LLM prompts with intent-aware guidance
#[derive(Parser, Debug)]
#[command(name = "promptsmith")]
#[command(version = VERSION)]
#[command(about = "Compose structured LLM prompts with intent-aware guidance")]
#[command(long_about = "Promptsmith walks you through a four-part prompt (Goal, Return Format, Warnings, Context Dump).\n\nWhen the goal looks like a summarization or question-answering task it offers tips, a refined goal, format options and common warnings, then prints the assembled prompt.\n\nRun without a subcommand to start an interactive session.")]
pub struct Cli {
    /// Suppress the banner and step headers
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to a config file (default: .promptsmith/config.toml, then the user config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level written to the log file (trace, debug, info, warn, error)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Skip the courtesy pauses between steps
    #[arg(long)]
    pub no_pause: bool,

    /// Start each restarted cycle with empty fields instead of the previous values
    #[arg(long)]
    pub fresh_restart: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify a goal and show the matching guidance
    ///
    /// Non-interactive. Prints the detected archetype and its tips.
    #[command(long_about = "Classify a goal and show the matching guidance.\n\nArchetypes:\n  QuestionAnswering  goals like \"what is\", \"explain\", \"compare\"\n  Summarization      goals like \"summarize\", \"overview\", \"tldr\"\n  Unknown            anything else\n\nQuestion keywords win when both kinds match.")]
    Classify {
        /// The goal text to classify
        goal: String,
    },
}

/// Get the command args for use in the application
pub fn parse() -> Cli {
    Cli::parse()
}
