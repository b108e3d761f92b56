//! # Line Input
//!
//! The REPL reads one line at a time through [`LineReader`] so the loop can
//! be driven by a real terminal or by a script in tests.
//!
//! ```text
//! Production:  ReplLoop ──▶ TerminalLineReader ──▶ rustyline::Editor
//! Testing:     ReplLoop ──▶ ScriptedLineReader ──▶ VecDeque<ReadOutcome>
//! ```

use anyhow::Result;

pub mod mock;
pub mod terminal;

pub use mock::ScriptedLineReader;
pub use terminal::{complete_verb, CommandCompleter, TerminalLineReader};

/// What one prompt produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// A line of input without its newline
    Line(String),

    /// Ctrl-C; the partial line is discarded
    Interrupted,

    /// Ctrl-D or end of piped input
    EndOfInput,
}

/// Source of input lines with history
pub trait LineReader {
    /// Show `prompt` and wait for a line
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome>;

    /// Record a line so it can be recalled later
    fn add_history(&mut self, line: &str);

    /// Write the history to wherever it persists
    fn save_history(&mut self) -> Result<()>;
}
