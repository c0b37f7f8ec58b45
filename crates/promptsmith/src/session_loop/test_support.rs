//! Scripted interaction adapter for session tests

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use promptsmith_core::interaction::{
    FieldSpec, InteractionAdapter, InteractionResult, ProgressHandle,
};

/// A mock adapter that replays queued responses in order (thread-safe)
///
/// When a queue runs dry the adapter accepts the prompt's default.
pub struct ScriptedAdapter {
    progress_counter: AtomicU64,
    fields: Mutex<VecDeque<InteractionResult<String>>>,
    texts: Mutex<VecDeque<InteractionResult<String>>>,
    selects: Mutex<VecDeque<InteractionResult<usize>>>,
    multi_selects: Mutex<VecDeque<InteractionResult<Vec<usize>>>>,
    confirms: Mutex<VecDeque<InteractionResult<bool>>>,
    /// Every field spec that was asked, in order
    pub asked_fields: Mutex<Vec<FieldSpec>>,
    /// Every select prompt: (options, default index)
    pub asked_selects: Mutex<Vec<(Vec<String>, usize)>>,
    /// Every printed message, in order
    pub printed: Mutex<Vec<String>>,
    /// Every requested pause
    pub pauses: Mutex<Vec<Duration>>,
}

impl ScriptedAdapter {
    pub fn new() -> Self {
        Self {
            progress_counter: AtomicU64::new(0),
            fields: Mutex::new(VecDeque::new()),
            texts: Mutex::new(VecDeque::new()),
            selects: Mutex::new(VecDeque::new()),
            multi_selects: Mutex::new(VecDeque::new()),
            confirms: Mutex::new(VecDeque::new()),
            asked_fields: Mutex::new(vec![]),
            asked_selects: Mutex::new(vec![]),
            printed: Mutex::new(vec![]),
            pauses: Mutex::new(vec![]),
        }
    }

    /// Queue the four form values of one collection cycle
    pub fn with_form(self, goal: &str, format: &str, warnings: &str, context: &str) -> Self {
        {
            let mut fields = self.fields.lock().unwrap();
            for value in [goal, format, warnings, context] {
                fields.push_back(Ok(value.to_string()));
            }
        }
        self
    }

    pub fn with_field_result(self, result: InteractionResult<String>) -> Self {
        self.fields.lock().unwrap().push_back(result);
        self
    }

    pub fn with_text(self, result: InteractionResult<String>) -> Self {
        self.texts.lock().unwrap().push_back(result);
        self
    }

    pub fn with_select(self, result: InteractionResult<usize>) -> Self {
        self.selects.lock().unwrap().push_back(result);
        self
    }

    pub fn with_multi_select(self, result: InteractionResult<Vec<usize>>) -> Self {
        self.multi_selects.lock().unwrap().push_back(result);
        self
    }

    pub fn with_confirm(self, result: InteractionResult<bool>) -> Self {
        self.confirms.lock().unwrap().push_back(result);
        self
    }

    pub fn printed(&self) -> Vec<String> {
        self.printed.lock().unwrap().clone()
    }

    pub fn printed_contains(&self, needle: &str) -> bool {
        self.printed().iter().any(|m| m.contains(needle))
    }

    fn record(&self, message: &str) {
        self.printed.lock().unwrap().push(message.to_string());
    }
}

impl InteractionAdapter for ScriptedAdapter {
    fn ask_field(&self, field: &FieldSpec) -> InteractionResult<String> {
        self.asked_fields.lock().unwrap().push(field.clone());
        match self.fields.lock().unwrap().pop_front() {
            Some(result) => result,
            None => Ok(field.default.clone().unwrap_or_default()),
        }
    }

    fn ask_text(&self, _prompt: &str, default: Option<&str>) -> InteractionResult<String> {
        match self.texts.lock().unwrap().pop_front() {
            Some(result) => result,
            None => Ok(default.unwrap_or_default().to_string()),
        }
    }

    fn ask_select(
        &self,
        _prompt: &str,
        options: &[&str],
        default: usize,
    ) -> InteractionResult<usize> {
        self.asked_selects.lock().unwrap().push((
            options.iter().map(|o| o.to_string()).collect(),
            default,
        ));
        match self.selects.lock().unwrap().pop_front() {
            Some(result) => result,
            None => Ok(default),
        }
    }

    fn ask_multi_select(&self, _prompt: &str, _options: &[&str]) -> InteractionResult<Vec<usize>> {
        match self.multi_selects.lock().unwrap().pop_front() {
            Some(result) => result,
            None => Ok(vec![]),
        }
    }

    fn ask_confirm(&self, _prompt: &str, default: bool) -> InteractionResult<bool> {
        match self.confirms.lock().unwrap().pop_front() {
            Some(result) => result,
            None => Ok(default),
        }
    }

    fn start_progress(&self, message: &str) -> ProgressHandle {
        let id = self.progress_counter.fetch_add(1, Ordering::SeqCst);
        ProgressHandle::new(id, message)
    }

    fn end_progress(&self, _handle: ProgressHandle, _success: bool) {}

    fn pause(&self, duration: Duration) {
        self.pauses.lock().unwrap().push(duration);
    }

    fn print_info(&self, message: &str) {
        self.record(message);
    }
    fn print_warning(&self, message: &str) {
        self.record(message);
    }
    fn print_error(&self, message: &str) {
        self.record(message);
    }
    fn print_success(&self, message: &str) {
        self.record(message);
    }
}
