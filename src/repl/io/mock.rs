//! # Scripted Line Reader
//!
//! Feeds a fixed sequence of outcomes to the REPL and records what the loop
//! did with them.

use std::collections::VecDeque;

use anyhow::Result;

use crate::repl::io::{LineReader, ReadOutcome};

/// Reader that replays a script and then reports end of input
#[derive(Debug, Default)]
pub struct ScriptedLineReader {
    script: VecDeque<ReadOutcome>,
    prompts: Vec<String>,
    history: Vec<String>,
    history_saves: usize,
}

impl ScriptedLineReader {
    /// Script made only of typed lines
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_outcomes(lines.into_iter().map(|line| ReadOutcome::Line(line.into())))
    }

    pub fn from_outcomes(outcomes: impl IntoIterator<Item = ReadOutcome>) -> Self {
        Self {
            script: outcomes.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Every prompt shown so far
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Lines recorded in history
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn history_saves(&self) -> usize {
        self.history_saves
    }

    /// Lines still unread
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl LineReader for ScriptedLineReader {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome> {
        self.prompts.push(prompt.to_string());
        Ok(self.script.pop_front().unwrap_or(ReadOutcome::EndOfInput))
    }

    fn add_history(&mut self, line: &str) {
        self.history.push(line.to_string());
    }

    fn save_history(&mut self) -> Result<()> {
        self.history_saves += 1;
        Ok(())
    }
}
