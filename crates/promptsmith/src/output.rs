//! Output formatting: styled text for the terminal and a JSON envelope

use chrono::{DateTime, Utc};
use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};

use promptsmith_core::{Archetype, FinalPrompt};

use crate::colors::COLORS;

const SCHEMA_VERSION: &str = "1";

/// JSON response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonResponse<T> {
    /// Schema version for forward compatibility
    pub schema_version: String,
    /// Command that generated this response
    pub command: String,
    /// Status: "ok", "cancelled" or "error"
    pub status: String,
    /// Command-specific payload
    pub data: T,
}

impl<T> JsonResponse<T> {
    /// Create a successful response
    pub fn ok(command: &str, data: T) -> Self {
        Self::with_status(command, "ok", data)
    }

    /// Create a response for a session the user cancelled
    pub fn cancelled(command: &str, data: T) -> Self {
        Self::with_status(command, "cancelled", data)
    }

    /// Create an error response
    pub fn error(command: &str, data: T) -> Self {
        Self::with_status(command, "error", data)
    }

    fn with_status(command: &str, status: &str, data: T) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            command: command.to_string(),
            status: status.to_string(),
            data,
        }
    }
}

/// Data payload for a composed prompt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptData {
    pub session_id: String,
    pub generated_at: DateTime<Utc>,
    /// Collection cycles it took, including the confirmed one
    pub cycles: usize,
    pub prompt: FinalPrompt,
    /// The plain-text rendering
    pub text: String,
}

/// Data payload for a cancelled session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancelledData {
    pub session_id: String,
}

/// Data payload for a failed command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorData {
    pub code: String,
    pub message: String,
}

/// Data payload for the classify command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyData {
    pub goal: String,
    pub archetype: Archetype,
    pub tips: Vec<String>,
}

/// Render the final prompt with bold labels and colored content
pub fn render_styled(prompt: &FinalPrompt) -> String {
    let mut out = String::new();
    for (label, content) in prompt.sections() {
        out.push_str(&format!("{}", format!("{}:", label).style(COLORS.label)));
        out.push('\n');
        out.push_str(&format!("{}", content.style(COLORS.content)));
        out.push_str("\n\n");
    }
    out
}

/// Serialize a response as pretty JSON
pub fn to_json<T: Serialize>(response: &JsonResponse<T>) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(response)
}
