//! Merging of manual warnings with selected suggested warnings

/// Combine manually typed warnings with the selected suggestions
///
/// Each selection becomes a `- ` bullet line after the manual text. Always merge
/// from the original manual warnings: feeding a merged result back in with the
/// same selections duplicates the bullets.
pub fn merge_warnings(manual: &str, selected: &[String]) -> String {
    if selected.is_empty() {
        return manual.to_string();
    }

    let mut merged = String::from(manual);
    if !merged.is_empty() {
        merged.push('\n');
    }
    for warning in selected {
        merged.push_str("- ");
        merged.push_str(warning);
        merged.push('\n');
    }
    merged.trim().to_string()
}
