//! Session state machine for composing a prompt
//!
//! The loop runs: collect -> classify -> (guidance + enrichment) -> confirm
//! until the user confirms or aborts. Declining confirmation restarts the cycle
//! with selections cleared.
//!
//! The working `PromptDraft` is owned by `run` and handed to each step
//! explicitly; the loop itself only tracks the current state.

mod collect;
mod enrich;
#[cfg(test)]
pub(crate) mod test_support;
mod types;

use tracing::{debug, info};

use promptsmith_core::interaction::{InteractionAdapter, InteractionError};
use promptsmith_core::{Archetype, PromptDraft, PromptError, SessionConfig, classify, suggest};

use collect::FormCollector;
use enrich::Enricher;
pub use types::{SessionOutcome, SessionState};

const CONFIRM_PROMPT: &str = "Generate prompt with current details?";
const PREPARING_MESSAGE: &str = "Preparing your prompt...";

/// Session loop manager
pub struct SessionLoop<'a> {
    /// Current state
    state: SessionState,
    /// Number of collection cycles started
    cycles: usize,
    /// Session behavior settings
    settings: SessionConfig,
    /// Suppress step headers
    quiet: bool,
    /// Interaction adapter for user interaction
    adapter: &'a dyn InteractionAdapter,
    collector: FormCollector,
    enricher: Enricher,
}

impl<'a> SessionLoop<'a> {
    /// Create a new session loop
    pub fn new(settings: SessionConfig, quiet: bool, adapter: &'a dyn InteractionAdapter) -> Self {
        let collector = FormCollector::new(settings.max_field_len);
        Self {
            state: SessionState::CollectInitial,
            cycles: 0,
            settings,
            quiet,
            adapter,
            collector,
            enricher: Enricher::new(),
        }
    }

    /// Get the current state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Get the number of collection cycles started so far
    pub fn cycles(&self) -> usize {
        self.cycles
    }

    /// Transition to the next state
    fn transition(&mut self, new_state: SessionState) {
        debug!(from = %self.state, to = %new_state, "session transition");
        self.state = new_state;
    }

    /// Move along the single-successor edge of the current state
    fn advance(&mut self) {
        if let Some(next) = self.state.next() {
            self.transition(next);
        }
    }

    /// Run the session to completion
    ///
    /// Cancellation at any prompt ends the session with `SessionOutcome::Cancelled`.
    ///
    /// # Errors
    ///
    /// Returns `PromptError::InteractionFailed` if the interaction layer fails
    /// (e.g., non-TTY environment). No prompt is produced in that case.
    pub fn run(&mut self) -> Result<SessionOutcome, PromptError> {
        match self.drive() {
            Err(err) if err.is_abort() => {
                info!(cycles = self.cycles, state = %self.state, "session cancelled by user");
                self.transition(SessionState::Cancelled);
                Ok(SessionOutcome::Cancelled)
            }
            other => other,
        }
    }

    fn drive(&mut self) -> Result<SessionOutcome, PromptError> {
        let mut draft = PromptDraft::new();
        let mut archetype = Archetype::Unknown;
        self.state = SessionState::CollectInitial;

        while !self.state.is_terminal() {
            match self.state {
                SessionState::CollectInitial => {
                    self.cycles += 1;
                    self.collect_initial(&mut draft)?;
                    self.advance();
                }
                SessionState::Classify => {
                    archetype = classify(&draft.goal);
                    info!(%archetype, cycle = self.cycles, "classified goal");
                    if archetype.is_known() {
                        self.transition(SessionState::GuidanceAndEnrich);
                    } else {
                        self.enricher.present_guidance(self.adapter, archetype);
                        self.transition(SessionState::Confirm);
                    }
                }
                SessionState::GuidanceAndEnrich => {
                    self.guidance_and_enrich(archetype, &mut draft)?;
                    self.advance();
                }
                SessionState::Confirm => {
                    draft.confirmed = self.confirm()?;
                    if draft.confirmed {
                        self.transition(SessionState::Finalize);
                    } else {
                        self.transition(SessionState::Restart);
                    }
                }
                SessionState::Restart => {
                    self.restart(&mut draft);
                    self.advance();
                }
                SessionState::Finalize | SessionState::Cancelled => break,
            }
        }

        if self.state == SessionState::Cancelled {
            return Ok(SessionOutcome::Cancelled);
        }

        let prompt = self.finalize(draft);
        info!(cycles = self.cycles, "session finalized");
        Ok(SessionOutcome::Finalized {
            prompt,
            cycles: self.cycles,
        })
    }

    fn header(&self, title: &str) {
        if !self.quiet {
            self.adapter.print_header(title);
        }
    }

    fn collect_initial(&self, draft: &mut PromptDraft) -> Result<(), PromptError> {
        self.header("Step 1: Initial Prompt Details");
        self.collector.collect(self.adapter, draft)
    }

    fn guidance_and_enrich(
        &self,
        archetype: Archetype,
        draft: &mut PromptDraft,
    ) -> Result<(), PromptError> {
        self.adapter.pause(self.settings.guidance_pause());
        self.enricher.present_guidance(self.adapter, archetype);

        self.header("Step 2: Refine Prompt (Optional)");
        let suggestions = suggest(archetype, &draft.goal, &draft.return_format);
        let choice = self.enricher.enrich(self.adapter, archetype, &suggestions)?;

        debug!(
            format = %choice.return_format,
            warnings = choice.selected_warnings.len(),
            "enrichment accepted"
        );
        draft.goal = choice.goal;
        draft.return_format = choice.return_format;
        draft.selected_warnings = choice.selected_warnings;
        Ok(())
    }

    fn confirm(&self) -> Result<bool, PromptError> {
        self.header("\nStep 3: Confirm Generation");
        self.adapter
            .ask_confirm(CONFIRM_PROMPT, false)
            .map_err(convert_interaction_error)
    }

    fn restart(&self, draft: &mut PromptDraft) {
        info!(cycle = self.cycles, "confirmation declined, restarting");
        self.adapter.print_warning("\nRestarting prompt generation...");
        self.adapter.pause(self.settings.restart_pause());
        draft.reset_for_restart(self.settings.prefill_on_restart);
    }

    fn finalize(&self, draft: PromptDraft) -> promptsmith_core::FinalPrompt {
        let handle = self.adapter.start_progress(PREPARING_MESSAGE);
        self.adapter.pause(self.settings.prepare_pause());
        self.adapter.end_progress(handle, true);
        draft.finalize()
    }
}

/// Convert an InteractionError to a PromptError
pub(crate) fn convert_interaction_error(err: InteractionError) -> PromptError {
    match err {
        InteractionError::Cancelled => PromptError::UserAborted,
        other => PromptError::InteractionFailed {
            reason: other.to_string(),
        },
    }
}
