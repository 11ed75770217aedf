//! Styled terminal output.

use console::style;

use super::UserInterface;

/// Terminal implementation of [`UserInterface`].
///
/// Messages go to stdout; errors go to stderr. Styling respects
/// `NO_COLOR` through the `console` crate's detection.
#[derive(Debug, Default)]
pub struct TerminalUI {
    quiet: bool,
}

impl TerminalUI {
    /// Create a terminal UI.
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        if !self.quiet {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if !self.quiet {
            println!("{}", style(msg).green());
        }
    }

    fn warning(&mut self, msg: &str) {
        if !self.quiet {
            println!("{}", style(msg).yellow());
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", style(msg).red().bold());
    }
}
