//! Archetype-conditioned enrichment suggestions
//!
//! For a detected archetype the engine proposes a rewritten goal, a list of
//! return-format options, and a list of common warnings. The user's original
//! format is always offered and, when non-empty, becomes the default choice.

use serde::{Deserialize, Serialize};

use crate::types::Archetype;

/// Goal suggested for summarization requests
pub const SUMMARIZATION_GOAL: &str =
    "Summarize the key requirements and obligations mentioned in the provided documents.";

/// Label of the placeholder option used when the original format was empty
pub const KEEP_EMPTY_LABEL: &str = "Keep original (empty)";

/// A selectable option: what the user sees, and what gets stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// An option whose label and value are identical
    pub fn same(text: &str) -> Self {
        Self::new(text, text)
    }
}

/// Suggestions for one cycle; recomputed every time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionSet {
    pub suggested_goal: String,
    pub format_options: Vec<SelectOption>,
    /// Value of the format option that should be pre-selected
    pub default_format: Option<String>,
    pub warning_options: Vec<SelectOption>,
}

impl SuggestionSet {
    /// Whether there is anything to offer (false for unknown archetypes)
    pub fn has_enrichment(&self) -> bool {
        !self.format_options.is_empty() || !self.warning_options.is_empty()
    }

    /// Index of the pre-selected format option
    pub fn default_format_index(&self) -> usize {
        self.default_format
            .as_deref()
            .and_then(|value| self.format_options.iter().position(|o| o.value == value))
            .unwrap_or(0)
    }

    /// Format option labels, for display
    pub fn format_labels(&self) -> Vec<&str> {
        self.format_options.iter().map(|o| o.label.as_str()).collect()
    }

    /// Warning option labels, for display
    pub fn warning_labels(&self) -> Vec<&str> {
        self.warning_options.iter().map(|o| o.label.as_str()).collect()
    }
}

/// Build suggestions for an archetype from the user's original goal and format
pub fn suggest(archetype: Archetype, original_goal: &str, original_format: &str) -> SuggestionSet {
    let (suggested_goal, fixed_formats, warning_options) = match archetype {
        Archetype::Summarization => (
            SUMMARIZATION_GOAL.to_string(),
            vec![
                SelectOption::same("Bulleted list of key points"),
                SelectOption::same("Concise paragraph overview"),
            ],
            vec![
                SelectOption::new("Focus only on actionable requirements", "Focus on requirements"),
                SelectOption::new("Avoid technical jargon where possible", "Avoid jargon"),
            ],
        ),
        Archetype::QuestionAnswering => (
            format!(
                "Based only on the provided documents, answer the question: {}",
                original_goal
            ),
            vec![
                SelectOption::same("Direct answer"),
                SelectOption::new(
                    "Answer with citations to relevant sections",
                    "Answer with citations",
                ),
                SelectOption::new(
                    "Extract relevant quotes supporting the answer",
                    "Extract relevant quotes",
                ),
            ],
            vec![
                SelectOption::new(
                    "Do not infer information not explicitly present",
                    "Do not infer",
                ),
                SelectOption::new("Cite the source section(s) for the answer", "Cite sources"),
                SelectOption::new(
                    "If the answer is not found, state that clearly",
                    "State if not found",
                ),
            ],
        ),
        Archetype::Unknown => {
            return SuggestionSet {
                suggested_goal: original_goal.to_string(),
                format_options: vec![],
                default_format: None,
                warning_options: vec![],
            };
        }
    };

    let (format_options, default_format) = with_original_format(fixed_formats, original_format);

    SuggestionSet {
        suggested_goal,
        format_options,
        default_format,
        warning_options,
    }
}

/// Offer the original format alongside the fixed options and pick the default
///
/// A non-empty original is appended as a "Keep:" option when no fixed option
/// already carries it, then moved to the front and made the default. An empty
/// original gets a "Keep original (empty)" entry at the end and the first fixed
/// option stays the default.
fn with_original_format(
    mut options: Vec<SelectOption>,
    original_format: &str,
) -> (Vec<SelectOption>, Option<String>) {
    let first_fixed = options.first().map(|o| o.value.clone());

    if original_format.is_empty() {
        options.push(SelectOption::new(KEEP_EMPTY_LABEL, ""));
        return (options, first_fixed);
    }

    if !options.iter().any(|o| o.value == original_format) {
        options.push(SelectOption::new(
            format!("Keep: {}", original_format),
            original_format,
        ));
    }

    if let Some(index) = options.iter().position(|o| o.value == original_format) {
        if index > 0 {
            let original = options.remove(index);
            options.insert(0, original);
        }
    }

    (options, Some(original_format.to_string()))
}
