//! # Command Events
//!
//! What a command asks the REPL loop to do once it has run.

/// Outcome of one dispatched line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandEvent {
    /// The command did its work; read the next line
    Handled,

    /// Persist settings and end the session
    QuitRequested,

    /// Print the command table
    HelpRequested,
}
