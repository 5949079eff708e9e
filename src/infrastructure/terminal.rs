//! Terminal implementations of the host collaborators.
//!
//! A terminal has no clipboard we can rely on, so the "clipboard" is stdout:
//! the short URL is the only thing printed there and can be piped onwards.
//! Everything else goes to stderr.

use colored::Colorize;
use std::io::Write;

use crate::error::ShlinkError;
use crate::plugin::{Clipboard, Notifier};

/// Writes copied text to stdout, one entry per line.
#[derive(Debug, Default)]
pub struct StdoutClipboard;

impl Clipboard for StdoutClipboard {
    fn set_text(&self, text: &str) -> Result<(), ShlinkError> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{text}")
            .and_then(|()| stdout.flush())
            .map_err(|e| ShlinkError::Clipboard(e.to_string()))
    }
}

/// Prints notifications to stderr.
#[derive(Debug, Default)]
pub struct TerminalNotifier {
    quiet: bool,
}

impl TerminalNotifier {
    /// Suppresses informational messages; errors are always shown.
    pub fn quiet(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl Notifier for TerminalNotifier {
    fn show_message(&self, title: &str, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", "✔".green(), title.bright_white());
            if !message.is_empty() {
                eprintln!("  {}", message.dimmed());
            }
        }
    }

    fn show_error(&self, title: &str, message: &str) {
        eprintln!("{} {}", "✖".red(), title.red().bold());
        if !message.is_empty() {
            eprintln!("  {message}");
        }
    }
}
