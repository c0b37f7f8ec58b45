//! User interaction abstraction
//!
//! The session logic talks to the user only through `InteractionAdapter`, so the
//! same flow can run against a terminal or a scripted test double.

use std::time::Duration;

use thiserror::Error;

/// Default per-field character limit
pub const DEFAULT_MAX_FIELD_LEN: usize = 500;

/// Errors reported by an interaction adapter
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InteractionError {
    /// The user cancelled (Ctrl+C, Esc)
    #[error("operation cancelled by user")]
    Cancelled,

    /// Interactive input requires a terminal
    #[error("stdin is not a TTY - interactive input unavailable")]
    NonTty,

    /// The request itself was malformed (e.g. no options to choose from)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Terminal I/O failed
    #[error("terminal I/O error: {0}")]
    Io(String),
}

/// Result type for interaction operations
pub type InteractionResult<T> = Result<T, InteractionError>;

/// Description of one free-text form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub label: String,
    /// Example text shown when there is no default
    pub placeholder: String,
    /// Maximum length in characters
    pub max_len: usize,
    /// Pre-filled value, if any
    pub default: Option<String>,
}

impl FieldSpec {
    pub fn new(label: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            placeholder: placeholder.into(),
            max_len: DEFAULT_MAX_FIELD_LEN,
            default: None,
        }
    }

    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    /// Pre-fill with a value; empty values are treated as no default
    pub fn with_default(mut self, default: &str) -> Self {
        self.default = if default.is_empty() {
            None
        } else {
            Some(default.to_string())
        };
        self
    }

    /// Check a candidate value against the length limit
    pub fn validate(&self, value: &str) -> Result<(), String> {
        let len = value.chars().count();
        if len > self.max_len {
            Err(format!(
                "{} must be at most {} characters (got {})",
                self.label, self.max_len, len
            ))
        } else {
            Ok(())
        }
    }
}

/// Opaque handle for a running progress indicator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressHandle {
    id: u64,
    message: String,
}

impl ProgressHandle {
    pub fn new(id: u64, message: &str) -> Self {
        Self {
            id,
            message: message.to_string(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Everything the session needs from the user-facing layer
pub trait InteractionAdapter {
    /// Ask for one free-text field
    fn ask_field(&self, field: &FieldSpec) -> InteractionResult<String>;

    /// Ask for a group of fields in order, returning one value per field
    fn ask_form(&self, fields: &[FieldSpec]) -> InteractionResult<Vec<String>> {
        fields.iter().map(|field| self.ask_field(field)).collect()
    }

    /// Ask for a single line of text with an optional default
    fn ask_text(&self, prompt: &str, default: Option<&str>) -> InteractionResult<String>;

    /// Pick exactly one option; returns its index
    fn ask_select(
        &self,
        prompt: &str,
        options: &[&str],
        default: usize,
    ) -> InteractionResult<usize>;

    /// Pick zero or more options; returns their indices in option order
    fn ask_multi_select(&self, prompt: &str, options: &[&str]) -> InteractionResult<Vec<usize>>;

    /// Ask a yes/no question
    fn ask_confirm(&self, prompt: &str, default: bool) -> InteractionResult<bool>;

    /// Start a spinner with a message
    fn start_progress(&self, message: &str) -> ProgressHandle;

    /// Stop a spinner started by `start_progress`
    fn end_progress(&self, handle: ProgressHandle, success: bool);

    /// Block for a fixed courtesy delay
    fn pause(&self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }

    fn print_info(&self, message: &str);
    fn print_warning(&self, message: &str);
    fn print_error(&self, message: &str);
    fn print_success(&self, message: &str);

    /// Print a section header
    fn print_header(&self, message: &str) {
        self.print_info(message);
    }

    /// Print de-emphasized text
    fn print_dim(&self, message: &str) {
        self.print_info(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_spec_defaults() {
        let field = FieldSpec::new("Goal", "e.g., Summarize the key requirements");
        assert_eq!(field.max_len, DEFAULT_MAX_FIELD_LEN);
        assert_eq!(field.default, None);
    }

    #[test]
    fn test_field_spec_empty_default_is_none() {
        let field = FieldSpec::new("Goal", "").with_default("");
        assert_eq!(field.default, None);

        let field = FieldSpec::new("Goal", "").with_default("Summarize");
        assert_eq!(field.default.as_deref(), Some("Summarize"));
    }

    #[test]
    fn test_field_spec_validate_counts_chars() {
        let field = FieldSpec::new("Warnings", "").with_max_len(3);
        assert!(field.validate("abc").is_ok());
        assert!(field.validate("äöü").is_ok());
        let err = field.validate("abcd").unwrap_err();
        assert!(err.contains("at most 3"));
    }

    #[test]
    fn test_progress_handle() {
        let handle = ProgressHandle::new(7, "Preparing");
        assert_eq!(handle.id(), 7);
        assert_eq!(handle.message(), "Preparing");
    }

    #[test]
    fn test_interaction_error_display() {
        assert_eq!(
            InteractionError::NonTty.to_string(),
            "stdin is not a TTY - interactive input unavailable"
        );
        assert_eq!(
            InteractionError::InvalidInput("options cannot be empty".to_string()).to_string(),
            "invalid input: options cannot be empty"
        );
    }
}
