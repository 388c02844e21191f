//! Output management and formatting.

use std::env;
use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;

/// Writes the template's human-facing lines to the terminal.
pub struct Console {
    no_color: bool,
    term: Term,
}

impl Console {
    /// Build a `Console`, resolving colour support from the environment.
    ///
    /// There are no CLI flags, so colour is controlled by `NO_COLOR`
    /// (see <https://no-color.org>) and disabled when stdout is not a TTY.
    pub fn from_env() -> Self {
        let no_color = env::var_os("NO_COLOR").is_some() || !io::stdout().is_terminal();
        Self {
            no_color,
            term: Term::stdout(),
        }
    }

    /// A `Console` that never emits ANSI codes, for deterministic output.
    pub fn plain() -> Self {
        Self {
            no_color: true,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message line.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        self.term.write_line(msg)
    }

    /// Empty spacer line.
    pub fn blank(&self) -> io::Result<()> {
        self.term.write_line("")
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Failure indicator: `✗ <msg>`.
    pub fn failure(&self, msg: &str) -> io::Result<()> {
        let line = if self.no_color {
            format!("\u{2717} {msg}") // ✗
        } else {
            format!("{} {}", "\u{2717}".red().bold(), msg.red())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_console_disables_color() {
        assert!(!Console::plain().supports_color());
    }

    #[test]
    fn write_methods_return_ok_without_a_tty() {
        // Term::stdout() in a test environment won't panic even without a
        // TTY; we verify the methods complete rather than inspect bytes.
        let out = Console::plain();
        assert!(out.print("hello").is_ok());
        assert!(out.blank().is_ok());
        assert!(out.success("ok").is_ok());
        assert!(out.failure("bad").is_ok());
        assert!(out.header("Header:").is_ok());
    }
}
