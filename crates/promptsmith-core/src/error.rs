//! Error types for promptsmith operations

use thiserror::Error;

/// Core error type for promptsmith operations
#[derive(Error, Debug)]
pub enum PromptError {
    // === Session errors (E001-E002) ===
    /// E001: User cancelled the session
    #[error("E001: Operation cancelled by user")]
    UserAborted,

    /// E002: The interaction layer failed (non-TTY, terminal I/O, bad input)
    #[error("E002: Interaction failed: {reason}")]
    InteractionFailed { reason: String },

    // === Configuration errors (E003-E004) ===
    /// E003: Configuration is invalid or unreadable
    #[error("E003: configuration error: {0}")]
    Config(String),

    /// E004: Configuration file is not valid TOML
    #[error("E004: failed to parse configuration: {0}")]
    TomlParse(#[from] toml::de::Error),

    // === IO and output errors ===
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Output could not be serialized
    #[error("serialization error: {0}")]
    Serialize(String),
}

impl PromptError {
    /// Get the error code (e.g., "E001")
    pub fn code(&self) -> &'static str {
        match self {
            PromptError::UserAborted => "E001",
            PromptError::InteractionFailed { .. } => "E002",
            PromptError::Config(_) => "E003",
            PromptError::TomlParse(_) => "E004",
            PromptError::Io(_) => "E005",
            PromptError::Serialize(_) => "E006",
        }
    }

    /// Get the process exit code for this error
    ///
    /// Cancellation is a clean exit; everything else is fatal.
    pub fn exit_code(&self) -> i32 {
        match self {
            PromptError::UserAborted => 0,
            PromptError::InteractionFailed { .. }
            | PromptError::Config(_)
            | PromptError::TomlParse(_)
            | PromptError::Io(_)
            | PromptError::Serialize(_) => 1,
        }
    }

    /// Whether this error represents a user-initiated cancellation
    pub fn is_abort(&self) -> bool {
        matches!(self, PromptError::UserAborted)
    }
}
