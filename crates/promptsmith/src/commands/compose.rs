//! Implementation of the interactive compose session (the default command)

use std::io::IsTerminal;

use chrono::Utc;
use tracing::{error, info, info_span};
use uuid::Uuid;

use promptsmith_core::{PromptError, SessionConfig};

use crate::interaction::{CliAdapter, reset_cancellation};
use crate::output::{CancelledData, ErrorData, JsonResponse, PromptData, render_styled, to_json};
use crate::session_loop::{SessionLoop, SessionOutcome};
use crate::splash;

const COMMAND: &str = "compose";

/// Run an interactive session and print the composed prompt
///
/// # Returns
///
/// Exit code: 0 = prompt produced or user cancelled, 1 = interaction error
pub fn run_compose(settings: SessionConfig, json_output: bool, quiet: bool) -> Result<i32, String> {
    let session_id = Uuid::new_v4().to_string();
    let span = info_span!("session", session_id = %session_id);
    let _guard = span.enter();

    if !quiet && !json_output {
        splash::show_splash();
    }

    let mut adapter = CliAdapter::new();
    if json_output {
        adapter = adapter.with_stderr_output();
    }
    reset_cancellation();
    info!(tty = adapter.is_tty(), prefill = settings.prefill_on_restart, "session starting");

    let mut session = SessionLoop::new(settings, quiet, &adapter);
    let result = session.run();
    info!(state = %session.state(), cycles = session.cycles(), "session ended");

    match result {
        Ok(SessionOutcome::Finalized { prompt, cycles }) => {
            if json_output {
                let response = JsonResponse::ok(
                    COMMAND,
                    PromptData {
                        session_id,
                        generated_at: Utc::now(),
                        cycles,
                        text: prompt.render(),
                        prompt,
                    },
                );
                println!("{}", to_json(&response).map_err(|e| e.to_string())?);
            } else if std::io::stdout().is_terminal() {
                print!("{}", render_styled(&prompt));
            } else {
                print!("{}", prompt.render());
            }
            Ok(0)
        }
        Ok(SessionOutcome::Cancelled) => {
            if json_output {
                let response = JsonResponse::cancelled(COMMAND, CancelledData { session_id });
                println!("{}", to_json(&response).map_err(|e| e.to_string())?);
            } else {
                eprintln!("\nOperation cancelled by user.");
            }
            Ok(PromptError::UserAborted.exit_code())
        }
        Err(e) => {
            error!(code = e.code(), error = %e, "session failed");
            if json_output {
                output_error_json(&e);
            } else {
                eprintln!("Uh oh: {}", e);
            }
            Ok(e.exit_code())
        }
    }
}

/// Output an error in JSON format
fn output_error_json(err: &PromptError) {
    let response = JsonResponse::error(
        COMMAND,
        ErrorData {
            code: err.code().to_string(),
            message: err.to_string(),
        },
    );
    match to_json(&response) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("error: {}", e),
    }
}
