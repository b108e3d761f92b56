//! # Terminal Line Reader
//!
//! rustyline editor with tab completion over command verbs and history
//! kept in the per-user directory.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use rustyline::completion::Completer;
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use crate::config::ensure_parent_dir;
use crate::repl::io::{LineReader, ReadOutcome};

/// Verbs starting with `prefix`, compared case-insensitively
pub fn complete_verb(verbs: &[&'static str], prefix: &str) -> Vec<String> {
    let prefix = prefix.to_ascii_lowercase();
    verbs
        .iter()
        .filter(|verb| verb.starts_with(&prefix))
        .map(|verb| (*verb).to_string())
        .collect()
}

/// Completes the first word of the line against the command table
pub struct CommandCompleter {
    verbs: Vec<&'static str>,
}

impl CommandCompleter {
    pub fn new(verbs: Vec<&'static str>) -> Self {
        Self { verbs }
    }
}

impl Completer for CommandCompleter {
    type Candidate = String;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<String>)> {
        let head = &line[..pos];
        // Only the verb is completed; arguments are free text
        if head.contains(' ') {
            return Ok((pos, Vec::new()));
        }
        Ok((0, complete_verb(&self.verbs, head)))
    }
}

impl Hinter for CommandCompleter {
    type Hint = String;
}

impl Highlighter for CommandCompleter {}

impl Validator for CommandCompleter {}

impl Helper for CommandCompleter {}

/// Interactive reader backed by rustyline
pub struct TerminalLineReader {
    editor: Editor<CommandCompleter, DefaultHistory>,
    history_path: PathBuf,
}

impl TerminalLineReader {
    /// Create the editor and load any saved history
    pub fn new(history_path: PathBuf, verbs: Vec<&'static str>) -> Result<Self> {
        let mut editor = Editor::<CommandCompleter, DefaultHistory>::new()
            .context("Failed to create line editor")?;
        editor.set_helper(Some(CommandCompleter::new(verbs)));

        match editor.load_history(&history_path) {
            Ok(()) => tracing::debug!("Loaded history from '{}'", history_path.display()),
            Err(e) => tracing::debug!(
                "No history loaded from '{}': {}",
                history_path.display(),
                e
            ),
        }

        Ok(Self {
            editor,
            history_path,
        })
    }
}

impl LineReader for TerminalLineReader {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadOutcome::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadOutcome::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadOutcome::EndOfInput),
            Err(e) => Err(e).context("Failed to read input"),
        }
    }

    fn add_history(&mut self, line: &str) {
        if let Err(e) = self.editor.add_history_entry(line) {
            tracing::warn!("Could not add history entry: {}", e);
        }
    }

    fn save_history(&mut self) -> Result<()> {
        ensure_parent_dir(&self.history_path).with_context(|| {
            format!("Failed to create directory for '{}'", self.history_path.display())
        })?;
        self.editor
            .save_history(&self.history_path)
            .with_context(|| format!("Failed to save history to '{}'", self.history_path.display()))?;
        tracing::debug!("Saved history to '{}'", self.history_path.display());
        Ok(())
    }
}
