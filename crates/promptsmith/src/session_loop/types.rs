//! Types for the session state machine
//!
//! Flow: CollectInitial -> Classify -> GuidanceAndEnrich (known archetypes only)
//! -> Confirm -> (Finalize | Restart -> CollectInitial)

use promptsmith_core::FinalPrompt;

/// Session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Gather goal, return format, warnings and context dump
    CollectInitial,
    /// Detect the archetype of the collected goal
    Classify,
    /// Show guidance and offer enrichment suggestions
    GuidanceAndEnrich,
    /// Ask whether to generate the prompt
    Confirm,
    /// User declined; clear selections and collect again
    Restart,
    /// User confirmed; build the final prompt
    Finalize,
    /// User aborted at some prompt
    Cancelled,
}

impl SessionState {
    /// Check if this is a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::Finalize | SessionState::Cancelled)
    }

    /// Get the next state in the normal flow
    ///
    /// `Classify` and `Confirm` branch and have no single successor.
    pub fn next(&self) -> Option<SessionState> {
        match self {
            SessionState::CollectInitial => Some(SessionState::Classify),
            SessionState::Classify => None, // Branches on the archetype
            SessionState::GuidanceAndEnrich => Some(SessionState::Confirm),
            SessionState::Confirm => None, // Branches to Restart or Finalize
            SessionState::Restart => Some(SessionState::CollectInitial),
            SessionState::Finalize | SessionState::Cancelled => None,
        }
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SessionState::CollectInitial => "collect-initial",
            SessionState::Classify => "classify",
            SessionState::GuidanceAndEnrich => "guidance-and-enrich",
            SessionState::Confirm => "confirm",
            SessionState::Restart => "restart",
            SessionState::Finalize => "finalize",
            SessionState::Cancelled => "cancelled",
        };
        write!(f, "{}", name)
    }
}

/// How a session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The user confirmed and a prompt was produced
    Finalized {
        prompt: FinalPrompt,
        /// Number of collection cycles, including the confirmed one
        cycles: usize,
    },
    /// The user aborted; nothing was produced
    Cancelled,
}

/// What the user chose during enrichment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichmentChoice {
    pub goal: String,
    pub return_format: String,
    pub selected_warnings: Vec<String>,
}
