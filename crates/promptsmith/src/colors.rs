//! Semantic color theme for consistent terminal output
//!
//! - `success` => green - guidance titles, completed output
//! - `warning` => yellow - restart notices
//! - `fail` => red - errors
//! - `label` => bold - section labels of the final prompt
//! - `content` => magenta - section content of the final prompt

use std::sync::LazyLock;

use owo_colors::Style;

/// Semantic color definitions for terminal output
pub struct SemanticColors {
    pub success: Style,
    pub warning: Style,
    pub fail: Style,
    pub label: Style,
    pub content: Style,
}

impl Default for SemanticColors {
    fn default() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            fail: Style::new().red(),
            label: Style::new().bold(),
            content: Style::new().magenta(),
        }
    }
}

/// Global default theme
pub static COLORS: LazyLock<SemanticColors> = LazyLock::new(SemanticColors::default);
