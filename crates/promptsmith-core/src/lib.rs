//! promptsmith-core: intent classification, enrichment suggestions, and prompt drafts
//!
//! This crate holds the session's data model and pure logic. Terminal I/O lives
//! behind the `InteractionAdapter` trait.

/// Core error types for promptsmith operations
pub mod error;

/// Configuration handling
pub mod config;

/// Core data types (PromptDraft, FinalPrompt, Archetype)
pub mod types;

/// Goal classification
pub mod classifier;

/// Archetype guidance tips
pub mod guidance;

/// Enrichment suggestions
pub mod suggestion;

/// Warning merge
pub mod warnings;

/// User interaction abstraction
pub mod interaction;

// Re-exports for convenience
pub use classifier::classify;
pub use config::{Config, LoggingConfig, SessionConfig};
pub use error::PromptError;
pub use guidance::guidance;
pub use suggestion::{SelectOption, SuggestionSet, suggest};
pub use types::{Archetype, FinalPrompt, PromptDraft};
pub use warnings::merge_warnings;
