//! Splash banner for the promptsmith CLI

use owo_colors::OwoColorize;
use std::io::{IsTerminal, Write};

/// Anvil mark shown next to the name
const ANVIL: &[&str] = &["▄▄▄▄▄▄▄", " ▀███▀ "];

/// Display the splash banner
pub fn show_splash() {
    if !std::io::stdout().is_terminal() {
        return;
    }

    let mut stdout = std::io::stdout();
    let version = env!("CARGO_PKG_VERSION");

    writeln!(
        stdout,
        "{}   {} v{}",
        ANVIL[0].magenta(),
        "promptsmith".bold().magenta(),
        version.dimmed()
    )
    .ok();
    writeln!(
        stdout,
        "{}   {}",
        ANVIL[1].magenta(),
        "Structured prompts, one field at a time".dimmed()
    )
    .ok();
    writeln!(stdout).ok();

    stdout.flush().ok();
}
