//! CLI command implementations

pub mod classify;
pub mod compose;

pub use classify::run_classify;
pub use compose::run_compose;
