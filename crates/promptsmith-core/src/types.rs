//! Core data types: the working draft, the finalized prompt, and task archetypes

use serde::{Deserialize, Serialize};

use crate::warnings::merge_warnings;

/// Detected task type of a Goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    /// The user wants a condensed overview of the context
    Summarization,
    /// The user is asking a question to be answered from the context
    QuestionAnswering,
    /// No known intent was detected
    Unknown,
}

impl Archetype {
    /// Whether this archetype has guidance and enrichment suggestions
    pub fn is_known(&self) -> bool {
        !matches!(self, Archetype::Unknown)
    }
}

impl std::fmt::Display for Archetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Archetype::Summarization => write!(f, "Summarization"),
            Archetype::QuestionAnswering => write!(f, "QuestionAnswering"),
            Archetype::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Mutable working state of one session cycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptDraft {
    /// The user's stated objective (may be replaced by an accepted suggestion)
    pub goal: String,
    /// Desired output shape
    pub return_format: String,
    /// Manually typed caveats, kept apart from suggested warnings
    pub warnings: String,
    /// Free-form background text
    pub context_dump: String,
    /// Suggested-warning values the user opted into during this cycle
    pub selected_warnings: Vec<String>,
    /// Result of this cycle's confirmation step
    pub confirmed: bool,
}

impl PromptDraft {
    /// Create an empty draft
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepare the draft for another collection cycle after a declined confirmation
    ///
    /// Selections and confirmation never survive a restart. Field values are kept
    /// only when `prefill` is set, so the form can offer them as defaults.
    pub fn reset_for_restart(&mut self, prefill: bool) {
        self.selected_warnings.clear();
        self.confirmed = false;
        if !prefill {
            self.goal.clear();
            self.return_format.clear();
            self.warnings.clear();
            self.context_dump.clear();
        }
    }

    /// Consume the confirmed draft into the final four-section prompt
    pub fn finalize(self) -> FinalPrompt {
        let warnings = merge_warnings(&self.warnings, &self.selected_warnings);
        FinalPrompt {
            goal: self.goal,
            return_format: self.return_format,
            warnings,
            context_dump: self.context_dump,
        }
    }
}

/// Section labels of the final prompt, in output order
pub const SECTION_LABELS: [&str; 4] = ["Goal", "Return Format", "Warnings", "Context Dump"];

/// Read-only projection of a confirmed draft
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalPrompt {
    pub goal: String,
    pub return_format: String,
    /// Manual warnings merged with the selected suggestions
    pub warnings: String,
    pub context_dump: String,
}

impl FinalPrompt {
    /// Labeled sections in fixed order
    pub fn sections(&self) -> [(&'static str, &str); 4] {
        [
            (SECTION_LABELS[0], self.goal.as_str()),
            (SECTION_LABELS[1], self.return_format.as_str()),
            (SECTION_LABELS[2], self.warnings.as_str()),
            (SECTION_LABELS[3], self.context_dump.as_str()),
        ]
    }

    /// Render as plain text: each label on its own line, then content and a blank line
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (label, content) in self.sections() {
            out.push_str(label);
            out.push_str(":\n");
            out.push_str(content);
            out.push_str("\n\n");
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> PromptDraft {
        PromptDraft {
            goal: "Summarize the findings".to_string(),
            return_format: "Bulleted list".to_string(),
            warnings: "No speculation".to_string(),
            context_dump: "Audit report text".to_string(),
            selected_warnings: vec!["Avoid jargon".to_string()],
            confirmed: true,
        }
    }

    #[test]
    fn test_archetype_display() {
        assert_eq!(Archetype::Summarization.to_string(), "Summarization");
        assert_eq!(Archetype::QuestionAnswering.to_string(), "QuestionAnswering");
        assert_eq!(Archetype::Unknown.to_string(), "Unknown");
    }

    #[test]
    fn test_archetype_is_known() {
        assert!(Archetype::Summarization.is_known());
        assert!(Archetype::QuestionAnswering.is_known());
        assert!(!Archetype::Unknown.is_known());
    }

    #[test]
    fn test_reset_for_restart_with_prefill() {
        let mut draft = filled_draft();
        draft.reset_for_restart(true);

        assert!(draft.selected_warnings.is_empty());
        assert!(!draft.confirmed);
        assert_eq!(draft.goal, "Summarize the findings");
        assert_eq!(draft.context_dump, "Audit report text");
    }

    #[test]
    fn test_reset_for_restart_without_prefill() {
        let mut draft = filled_draft();
        draft.reset_for_restart(false);

        assert_eq!(draft, PromptDraft::new());
    }

    #[test]
    fn test_finalize_merges_warnings() {
        let prompt = filled_draft().finalize();

        assert_eq!(prompt.goal, "Summarize the findings");
        assert_eq!(prompt.return_format, "Bulleted list");
        assert_eq!(prompt.warnings, "No speculation\n- Avoid jargon");
        assert_eq!(prompt.context_dump, "Audit report text");
    }

    #[test]
    fn test_render_section_order() {
        let rendered = filled_draft().finalize().render();

        let goal = rendered.find("Goal:").unwrap();
        let format = rendered.find("Return Format:").unwrap();
        let warnings = rendered.find("Warnings:").unwrap();
        let context = rendered.find("Context Dump:").unwrap();
        assert!(goal < format && format < warnings && warnings < context);
        assert!(rendered.starts_with("Goal:\nSummarize the findings\n\nReturn Format:\n"));
        assert!(rendered.ends_with("Context Dump:\nAudit report text\n\n"));
    }

    #[test]
    fn test_render_keeps_empty_sections() {
        let rendered = PromptDraft::new().finalize().render();
        assert_eq!(
            rendered,
            "Goal:\n\n\nReturn Format:\n\n\nWarnings:\n\n\nContext Dump:\n\n\n"
        );
    }
}
