//! CLI adapter implementation using dialoguer for interactive prompts
//!
//! `CliAdapter` implements `InteractionAdapter` for the terminal. Ctrl+C and Esc
//! are reported as `InteractionError::Cancelled`.

use std::collections::HashMap;
use std::fmt::Write as FmtWrite;
use std::io::{ErrorKind, IsTerminal, Write};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use console::Style;
use dialoguer::theme::Theme;
use dialoguer::{Confirm, Input, MultiSelect, Select};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;

use promptsmith_core::interaction::{
    FieldSpec, InteractionAdapter, InteractionError, InteractionResult, ProgressHandle,
};

use crate::colors::COLORS;

/// Global flag to track if Ctrl+C was pressed
static CANCELLED: AtomicBool = AtomicBool::new(false);

/// Check if cancellation was requested
fn is_cancelled() -> bool {
    CANCELLED.load(Ordering::SeqCst)
}

/// Set up the global Ctrl+C handler
pub fn setup_ctrl_c_handler() {
    static HANDLER_SET: AtomicBool = AtomicBool::new(false);

    if HANDLER_SET.swap(true, Ordering::SeqCst) {
        return;
    }

    if let Err(e) = ctrlc::set_handler(move || {
        CANCELLED.store(true, Ordering::SeqCst);
        eprintln!();
    }) {
        eprintln!("Warning: Could not set Ctrl+C handler: {}", e);
    }
}

/// Reset the cancellation flag
pub fn reset_cancellation() {
    CANCELLED.store(false, Ordering::SeqCst);
}

/// Form theme: bold prompt titles, dim hints, spaced option lists
struct FormTheme {
    title_style: Style,
    active_style: Style,
    hint_style: Style,
}

impl FormTheme {
    fn new() -> Self {
        Self {
            title_style: Style::new().magenta().bold(),
            active_style: Style::new().magenta(),
            hint_style: Style::new().dim(),
        }
    }

    fn title(&self, f: &mut dyn FmtWrite, prompt: &str) -> std::fmt::Result {
        write!(f, "{}", self.title_style.apply_to(format!("┃ {}", prompt)))
    }

    fn answered(&self, f: &mut dyn FmtWrite, prompt: &str, answer: &str) -> std::fmt::Result {
        self.title(f, prompt)?;
        write!(f, " {}", self.active_style.apply_to(answer))
    }
}

impl Theme for FormTheme {
    fn format_prompt(&self, f: &mut dyn FmtWrite, prompt: &str) -> std::fmt::Result {
        self.title(f, prompt)
    }

    fn format_input_prompt(
        &self,
        f: &mut dyn FmtWrite,
        prompt: &str,
        default: Option<&str>,
    ) -> std::fmt::Result {
        self.title(f, prompt)?;
        match default {
            Some(d) => write!(f, " {} ", self.hint_style.apply_to(format!("({})", d))),
            None => write!(f, " "),
        }
    }

    fn format_input_prompt_selection(
        &self,
        f: &mut dyn FmtWrite,
        prompt: &str,
        sel: &str,
    ) -> std::fmt::Result {
        self.answered(f, prompt, sel)
    }

    fn format_confirm_prompt(
        &self,
        f: &mut dyn FmtWrite,
        prompt: &str,
        default: Option<bool>,
    ) -> std::fmt::Result {
        let hint = match default {
            Some(true) => "(Yes!/no)",
            Some(false) => "(yes/No!)",
            None => "(yes/no)",
        };
        self.title(f, prompt)?;
        write!(f, " {} ", self.hint_style.apply_to(hint))
    }

    fn format_confirm_prompt_selection(
        &self,
        f: &mut dyn FmtWrite,
        prompt: &str,
        selection: Option<bool>,
    ) -> std::fmt::Result {
        let answer = match selection {
            Some(true) => "Yes!",
            Some(false) => "No!",
            None => "?",
        };
        self.answered(f, prompt, answer)
    }

    fn format_select_prompt_selection(
        &self,
        f: &mut dyn FmtWrite,
        prompt: &str,
        sel: &str,
    ) -> std::fmt::Result {
        self.answered(f, prompt, sel)
    }

    fn format_select_prompt_item(
        &self,
        f: &mut dyn FmtWrite,
        text: &str,
        active: bool,
    ) -> std::fmt::Result {
        writeln!(f)?;
        if active {
            write!(f, "  {}", self.active_style.apply_to(format!("> {}", text)))
        } else {
            write!(f, "    {}", text)
        }
    }

    fn format_multi_select_prompt_selection(
        &self,
        f: &mut dyn FmtWrite,
        prompt: &str,
        selections: &[&str],
    ) -> std::fmt::Result {
        let answer = if selections.is_empty() {
            "(none)".to_string()
        } else {
            selections.join(", ")
        };
        self.answered(f, prompt, &answer)
    }

    fn format_multi_select_prompt_item(
        &self,
        f: &mut dyn FmtWrite,
        text: &str,
        checked: bool,
        active: bool,
    ) -> std::fmt::Result {
        writeln!(f)?;
        let checkbox = if checked { "[✓]" } else { "[ ]" };
        if active {
            write!(
                f,
                "  {}",
                self.active_style.apply_to(format!("> {} {}", checkbox, text))
            )
        } else {
            write!(f, "    {} {}", checkbox, text)
        }
    }
}

/// CLI adapter for terminal-based user interaction
pub struct CliAdapter {
    is_tty: bool,
    /// Send display output to stderr, keeping stdout clean for JSON
    stderr_output: bool,
    progress_counter: AtomicU64,
    active_progress: Arc<Mutex<HashMap<u64, ProgressBar>>>,
}

impl CliAdapter {
    pub fn new() -> Self {
        Self::with_tty(std::io::stdin().is_terminal())
    }

    pub fn with_tty(is_tty: bool) -> Self {
        setup_ctrl_c_handler();
        Self {
            is_tty,
            stderr_output: false,
            progress_counter: AtomicU64::new(0),
            active_progress: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Route display output to stderr
    pub fn with_stderr_output(mut self) -> Self {
        self.stderr_output = true;
        self
    }

    pub fn is_tty(&self) -> bool {
        self.is_tty
    }

    fn emit(&self, line: &str) {
        if self.stderr_output {
            eprintln!("{}", line);
            let _ = std::io::stderr().flush();
        } else {
            println!("{}", line);
            let _ = std::io::stdout().flush();
        }
    }

    /// Common preconditions for every prompt
    fn ready(&self) -> InteractionResult<()> {
        if !self.is_tty {
            return Err(InteractionError::NonTty);
        }
        if is_cancelled() {
            return Err(InteractionError::Cancelled);
        }
        Ok(())
    }

    fn require_options(options: &[&str]) -> InteractionResult<()> {
        if options.is_empty() {
            Err(InteractionError::InvalidInput(
                "options cannot be empty".to_string(),
            ))
        } else {
            Ok(())
        }
    }

    /// Map a dialoguer error, treating an interrupted read as cancellation
    fn convert_dialoguer_error(err: dialoguer::Error) -> InteractionError {
        match err {
            dialoguer::Error::IO(io) if io.kind() == ErrorKind::Interrupted => {
                InteractionError::Cancelled
            }
            _ if is_cancelled() => InteractionError::Cancelled,
            other => InteractionError::Io(other.to_string()),
        }
    }

    /// `None` from an `interact_opt` call means the user pressed Esc or q
    fn cancelled_if_none<T>(value: Option<T>) -> InteractionResult<T> {
        value.ok_or(InteractionError::Cancelled)
    }
}

impl Default for CliAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractionAdapter for CliAdapter {
    fn ask_field(&self, field: &FieldSpec) -> InteractionResult<String> {
        self.ready()?;

        if field.default.is_none() && !field.placeholder.is_empty() {
            self.print_dim(&field.placeholder);
        }

        let theme = FormTheme::new();
        let limit = field.clone();
        let mut input: Input<String> = Input::with_theme(&theme)
            .with_prompt(field.label.as_str())
            .allow_empty(true)
            .validate_with(move |value: &String| limit.validate(value));
        if let Some(d) = &field.default {
            input = input.with_initial_text(d.as_str());
        }

        input.interact_text().map_err(Self::convert_dialoguer_error)
    }

    fn ask_text(&self, prompt: &str, default: Option<&str>) -> InteractionResult<String> {
        self.ready()?;

        let theme = FormTheme::new();
        let mut input: Input<String> = Input::with_theme(&theme)
            .with_prompt(prompt)
            .allow_empty(true);
        if let Some(d) = default {
            input = input.with_initial_text(d);
        }

        input.interact_text().map_err(Self::convert_dialoguer_error)
    }

    fn ask_select(
        &self,
        prompt: &str,
        options: &[&str],
        default: usize,
    ) -> InteractionResult<usize> {
        self.ready()?;
        Self::require_options(options)?;

        let theme = FormTheme::new();
        let default = default.min(options.len() - 1);

        Select::with_theme(&theme)
            .with_prompt(prompt)
            .items(options)
            .default(default)
            .interact_opt()
            .map_err(Self::convert_dialoguer_error)
            .and_then(Self::cancelled_if_none)
    }

    fn ask_multi_select(&self, prompt: &str, options: &[&str]) -> InteractionResult<Vec<usize>> {
        self.ready()?;
        Self::require_options(options)?;

        let theme = FormTheme::new();

        MultiSelect::with_theme(&theme)
            .with_prompt(prompt)
            .items(options)
            .interact_opt()
            .map_err(Self::convert_dialoguer_error)
            .and_then(Self::cancelled_if_none)
    }

    fn ask_confirm(&self, prompt: &str, default: bool) -> InteractionResult<bool> {
        self.ready()?;

        let theme = FormTheme::new();

        Confirm::with_theme(&theme)
            .with_prompt(prompt)
            .default(default)
            .interact_opt()
            .map_err(Self::convert_dialoguer_error)
            .and_then(Self::cancelled_if_none)
    }

    fn start_progress(&self, message: &str) -> ProgressHandle {
        let id = self.progress_counter.fetch_add(1, Ordering::SeqCst);

        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.magenta} {msg}") {
            pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "));
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(80));

        if let Ok(mut progress_map) = self.active_progress.lock() {
            progress_map.insert(id, pb);
        }

        ProgressHandle::new(id, message)
    }

    fn end_progress(&self, handle: ProgressHandle, success: bool) {
        let Ok(mut progress_map) = self.active_progress.lock() else {
            return;
        };
        let Some(pb) = progress_map.remove(&handle.id()) else {
            return;
        };

        pb.finish_and_clear();
        if !success {
            self.emit(&format!(
                "{} {}",
                "✗".style(COLORS.fail),
                handle.message().style(COLORS.fail)
            ));
        }
    }

    fn print_info(&self, message: &str) {
        self.emit(message);
    }

    fn print_warning(&self, message: &str) {
        self.emit(&message.style(COLORS.warning).to_string());
    }

    fn print_error(&self, message: &str) {
        eprintln!("{} {}", "error:".red().bold(), message.style(COLORS.fail));
        let _ = std::io::stderr().flush();
    }

    fn print_success(&self, message: &str) {
        self.emit(&message.style(COLORS.success).to_string());
    }

    fn print_header(&self, message: &str) {
        self.emit(&message.bold().to_string());
    }

    fn print_dim(&self, message: &str) {
        self.emit(&message.dimmed().to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_adapter_with_tty_override() {
        let adapter_tty = CliAdapter::with_tty(true);
        assert!(adapter_tty.is_tty());

        let adapter_no_tty = CliAdapter::with_tty(false);
        assert!(!adapter_no_tty.is_tty());
    }

    #[test]
    fn test_non_tty_returns_error_for_field() {
        let adapter = CliAdapter::with_tty(false);
        let result = adapter.ask_field(&FieldSpec::new("Goal", "e.g., Summarize"));
        assert!(matches!(result, Err(InteractionError::NonTty)));
    }

    #[test]
    fn test_non_tty_returns_error_for_form() {
        let adapter = CliAdapter::with_tty(false);
        let fields = vec![FieldSpec::new("Goal", ""), FieldSpec::new("Warnings", "")];
        let result = adapter.ask_form(&fields);
        assert!(matches!(result, Err(InteractionError::NonTty)));
    }

    #[test]
    fn test_non_tty_returns_error_for_select() {
        let adapter = CliAdapter::with_tty(false);
        let result = adapter.ask_select("test", &["a", "b"], 1);
        assert!(matches!(result, Err(InteractionError::NonTty)));
    }

    #[test]
    fn test_non_tty_returns_error_for_confirm() {
        let adapter = CliAdapter::with_tty(false);
        let result = adapter.ask_confirm("test?", false);
        assert!(matches!(result, Err(InteractionError::NonTty)));
    }

    #[test]
    fn test_non_tty_returns_error_for_multi_select() {
        let adapter = CliAdapter::with_tty(false);
        let result = adapter.ask_multi_select("test", &["a", "b"]);
        assert!(matches!(result, Err(InteractionError::NonTty)));
    }

    #[test]
    fn test_require_options_rejects_empty() {
        assert!(matches!(
            CliAdapter::require_options(&[]),
            Err(InteractionError::InvalidInput(_))
        ));
        assert!(CliAdapter::require_options(&["a"]).is_ok());
    }

    #[test]
    fn test_interrupted_read_is_cancellation() {
        let err = dialoguer::Error::IO(std::io::Error::new(ErrorKind::Interrupted, "read interrupted"));
        assert_eq!(
            CliAdapter::convert_dialoguer_error(err),
            InteractionError::Cancelled
        );
    }

    #[test]
    fn test_none_from_interact_opt_is_cancellation() {
        assert_eq!(
            CliAdapter::cancelled_if_none::<usize>(None),
            Err(InteractionError::Cancelled)
        );
        assert_eq!(CliAdapter::cancelled_if_none(Some(2)), Ok(2));
    }

    #[test]
    fn test_progress_handle_creation() {
        let adapter = CliAdapter::with_tty(false);
        let handle = adapter.start_progress("Preparing your prompt...");
        assert_eq!(handle.message(), "Preparing your prompt...");
        adapter.end_progress(handle, true);
    }

    #[test]
    fn test_progress_counter_increments() {
        let adapter = CliAdapter::with_tty(false);
        let handle1 = adapter.start_progress("first");
        let handle2 = adapter.start_progress("second");
        assert_ne!(handle1.id(), handle2.id());
        adapter.end_progress(handle1, true);
        adapter.end_progress(handle2, false);
    }

    #[test]
    fn test_print_methods_dont_panic() {
        let adapter = CliAdapter::with_tty(false);
        adapter.print_info("info message");
        adapter.print_warning("warning message");
        adapter.print_error("error message");
        adapter.print_success("success message");
        adapter.print_header("header message");
        adapter.print_dim("dim message");
    }

    #[test]
    fn test_stderr_output_builder() {
        let adapter = CliAdapter::with_tty(false).with_stderr_output();
        assert!(adapter.stderr_output);
        adapter.print_info("goes to stderr");
    }

    #[test]
    fn test_reset_cancellation_clears_flag() {
        reset_cancellation();
        assert!(!is_cancelled());
    }
}
