//! Archetype-specific advisory tips

use crate::types::Archetype;

const SUMMARIZATION_TIPS: &[&str] = &[
    "Tip: Consider specifying desired length (e.g., 'one paragraph', 'bullet points').",
    "Tip: Mention the target audience if applicable.",
    "Tip: Focus on specific aspects if needed (e.g., 'summarize security controls').",
];

const QUESTION_ANSWERING_TIPS: &[&str] = &[
    "Tip: Ensure your question is specific for better answers.",
    "Tip: Use terminology likely found in the provided context.",
    "Tip: If asking about multiple things, consider separate prompts.",
];

/// Tips for an archetype, in display order. Empty for `Unknown`.
pub fn guidance(archetype: Archetype) -> &'static [&'static str] {
    match archetype {
        Archetype::Summarization => SUMMARIZATION_TIPS,
        Archetype::QuestionAnswering => QUESTION_ANSWERING_TIPS,
        Archetype::Unknown => &[],
    }
}
