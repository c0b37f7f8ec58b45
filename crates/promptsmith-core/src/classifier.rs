//! Keyword-based intent classification of a Goal

use tracing::debug;

use crate::types::Archetype;

/// Question-answering keywords, checked first
pub const QA_KEYWORDS: &[&str] = &[
    "what is", "explain", "how does", "list", "compare", "does it", "can i", "where", "who",
    "when", "why",
];

/// Summarization keywords, checked only when no QA keyword matches
pub const SUMMARIZATION_KEYWORDS: &[&str] = &[
    "summarize",
    "summary",
    "overview",
    "tldr",
    "key points",
    "abstract",
    "give me the gist",
];

/// Classify a goal into an archetype
///
/// Case-insensitive substring match. Question answering takes priority over
/// summarization when both keyword sets match.
pub fn classify(goal: &str) -> Archetype {
    let lower = goal.to_lowercase();

    if let Some(keyword) = QA_KEYWORDS.iter().find(|k| lower.contains(*k)) {
        debug!(keyword, "classify: matched question-answering keyword");
        return Archetype::QuestionAnswering;
    }

    if let Some(keyword) = SUMMARIZATION_KEYWORDS.iter().find(|k| lower.contains(*k)) {
        debug!(keyword, "classify: matched summarization keyword");
        return Archetype::Summarization;
    }

    Archetype::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_goal_is_unknown() {
        assert_eq!(classify(""), Archetype::Unknown);
        assert_eq!(classify("   "), Archetype::Unknown);
    }

    #[test]
    fn test_no_keyword_is_unknown() {
        assert_eq!(classify("Draft a cover letter"), Archetype::Unknown);
    }

    #[test]
    fn test_summarization_keywords() {
        for goal in [
            "Summarize the findings",
            "Write a summary",
            "Give an overview of the policy",
            "tldr please",
            "Pull out the key points",
            "Write an abstract",
            "Give me the gist of this",
        ] {
            assert_eq!(classify(goal), Archetype::Summarization, "goal: {goal}");
        }
    }

    #[test]
    fn test_question_answering_keywords() {
        for goal in [
            "What is the retention period?",
            "Explain the approval flow",
            "How does billing work",
            "List the vendors",
            "Compare plan A and plan B",
            "Does it support SSO",
            "Can I export data",
            "Where are logs stored",
            "Who owns this",
            "When does it expire",
            "Why was it rejected",
        ] {
            assert_eq!(classify(goal), Archetype::QuestionAnswering, "goal: {goal}");
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("SUMMARIZE THIS"), Archetype::Summarization);
        assert_eq!(classify("WHAT IS this"), Archetype::QuestionAnswering);
    }

    #[test]
    fn test_question_answering_has_priority() {
        assert_eq!(
            classify("Summarize and explain the key points"),
            Archetype::QuestionAnswering
        );
        assert_eq!(classify("Give an overview of who is affected"), Archetype::QuestionAnswering);
    }

    #[test]
    fn test_substring_match_inside_words() {
        // "list" is found inside "checklist"
        assert_eq!(classify("Summarize this checklist"), Archetype::QuestionAnswering);
    }
}
