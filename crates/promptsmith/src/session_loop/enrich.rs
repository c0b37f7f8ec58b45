//! Guidance display and the optional enrichment step

use promptsmith_core::interaction::InteractionAdapter;
use promptsmith_core::{Archetype, PromptError, SuggestionSet, guidance};

use super::convert_interaction_error;
use super::types::EnrichmentChoice;

/// Shown instead of a guidance block when no archetype is detected
pub const NEUTRAL_SEPARATOR: &str = "---";

/// Presents guidance and enrichment suggestions for a detected archetype
pub struct Enricher;

impl Enricher {
    pub fn new() -> Self {
        Self
    }

    /// Show the archetype's tips, or a neutral separator when there are none
    pub fn present_guidance(&self, adapter: &dyn InteractionAdapter, archetype: Archetype) {
        let tips = guidance(archetype);
        if tips.is_empty() {
            adapter.print_dim(&format!("\n{}", NEUTRAL_SEPARATOR));
            return;
        }

        adapter.print_success("\nPrompt Guidance:");
        for tip in tips {
            adapter.print_dim(&format!("- {}", tip));
        }
        adapter.print_info("");
    }

    /// Let the user refine the goal, pick a format and add common warnings
    pub fn enrich(
        &self,
        adapter: &dyn InteractionAdapter,
        archetype: Archetype,
        suggestions: &SuggestionSet,
    ) -> Result<EnrichmentChoice, PromptError> {
        adapter.print_info(&format!("Detected Intent: {}", archetype));
        adapter.print_dim(
            "We detected a potential intent. You can refine the Goal, Return Format, and add common Warnings below.",
        );

        let goal = adapter
            .ask_text("Refined Goal", Some(&suggestions.suggested_goal))
            .map_err(convert_interaction_error)?;

        let format_labels = suggestions.format_labels();
        let format_index = adapter
            .ask_select(
                "Suggested Return Format",
                &format_labels,
                suggestions.default_format_index(),
            )
            .map_err(convert_interaction_error)?;
        let return_format = suggestions
            .format_options
            .get(format_index)
            .map(|o| o.value.clone())
            .ok_or_else(|| PromptError::InteractionFailed {
                reason: format!("format selection {} is out of range", format_index),
            })?;

        let warning_labels = suggestions.warning_labels();
        let warning_indices = adapter
            .ask_multi_select("Add Common Warnings (Optional)", &warning_labels)
            .map_err(convert_interaction_error)?;
        let selected_warnings = warning_indices
            .into_iter()
            .map(|i| {
                suggestions
                    .warning_options
                    .get(i)
                    .map(|o| o.value.clone())
                    .ok_or_else(|| PromptError::InteractionFailed {
                        reason: format!("warning selection {} is out of range", i),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(EnrichmentChoice {
            goal,
            return_format,
            selected_warnings,
        })
    }
}

impl Default for Enricher {
    fn default() -> Self {
        Self::new()
    }
}
