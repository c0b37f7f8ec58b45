//! Initial form collection
//!
//! Asks for the four prompt fields and binds the answers into the draft.

use promptsmith_core::interaction::{FieldSpec, InteractionAdapter};
use promptsmith_core::{PromptDraft, PromptError};

use super::convert_interaction_error;

/// Label and placeholder of each form field, in form order
const FIELDS: [(&str, &str); 4] = [
    ("Goal", "e.g., Summarize the key requirements"),
    ("Return Format", "e.g., Bulleted list"),
    ("Warnings", "e.g., Exclude information about XYZ"),
    (
        "Context Dump",
        "e.g., Paste relevant sections of compliance docs here",
    ),
];

/// Collects the initial prompt details
pub struct FormCollector {
    max_field_len: usize,
}

impl FormCollector {
    pub fn new(max_field_len: usize) -> Self {
        Self { max_field_len }
    }

    /// Field specs for the form, pre-filled from whatever the draft holds
    pub fn field_specs(&self, draft: &PromptDraft) -> Vec<FieldSpec> {
        let current = [
            &draft.goal,
            &draft.return_format,
            &draft.warnings,
            &draft.context_dump,
        ];
        FIELDS
            .iter()
            .zip(current)
            .map(|((label, placeholder), value)| {
                FieldSpec::new(*label, *placeholder)
                    .with_max_len(self.max_field_len)
                    .with_default(value)
            })
            .collect()
    }

    /// Ask for all four fields and overwrite the draft with the answers
    ///
    /// The draft is left untouched if the form does not complete.
    pub fn collect(
        &self,
        adapter: &dyn InteractionAdapter,
        draft: &mut PromptDraft,
    ) -> Result<(), PromptError> {
        let specs = self.field_specs(draft);
        let values = adapter
            .ask_form(&specs)
            .map_err(convert_interaction_error)?;

        let [goal, return_format, warnings, context_dump]: [String; 4] =
            values.try_into().map_err(|v: Vec<String>| {
                PromptError::InteractionFailed {
                    reason: format!("expected 4 form values, got {}", v.len()),
                }
            })?;

        draft.goal = goal;
        draft.return_format = return_format;
        draft.warnings = warnings;
        draft.context_dump = context_dump;
        Ok(())
    }
}
