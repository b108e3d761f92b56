//! # Command Registry
//!
//! The fixed table of REPL verbs. A line is split at its first space into a
//! verb and an argument string; the verb picks exactly one command.

use std::io::Write;

use crate::repl::commands::{
    CommandContext, CommandEvent, ConfigGetCommand, ConfigSetCommand, HeaderListCommand,
    HeaderSetCommand, HelpCommand, HttpCommand, QuitCommand, ServerCommand,
};
use crate::repl::error::{ReplError, ReplResult};
use crate::repl::models::split_first;

/// A single REPL verb
pub trait ReplCommand: Send {
    /// Verb typed at the prompt, lower case
    fn name(&self) -> &'static str;

    /// Other verbs that run the same command
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// Argument synopsis shown by `help` and in usage errors
    fn usage(&self) -> &'static str;

    /// One line description for `help`
    fn about(&self) -> &'static str;

    /// Run with the raw text after the verb (empty when there is none)
    fn execute(&self, args: &str, context: &mut CommandContext<'_>) -> ReplResult<CommandEvent>;

    fn can_handle(&self, verb: &str) -> bool {
        verb == self.name() || self.aliases().contains(&verb)
    }
}

type CommandCollection = Vec<Box<dyn ReplCommand>>;

/// Registry for managing REPL commands
pub struct CommandRegistry {
    commands: CommandCollection,
}

impl CommandRegistry {
    /// Create a registry with every built-in command
    pub fn new() -> Self {
        let commands: CommandCollection = vec![
            Box::new(HttpCommand::get()),
            Box::new(HttpCommand::post()),
            Box::new(HttpCommand::put()),
            Box::new(HttpCommand::delete()),
            Box::new(HeaderSetCommand),
            Box::new(HeaderListCommand),
            Box::new(ConfigSetCommand),
            Box::new(ConfigGetCommand),
            Box::new(ServerCommand),
            Box::new(HelpCommand),
            Box::new(QuitCommand),
        ];

        Self { commands }
    }

    /// Find the command for `verb`, ignoring case
    pub fn find(&self, verb: &str) -> Option<&dyn ReplCommand> {
        let verb = verb.to_ascii_lowercase();
        self.commands
            .iter()
            .find(|command| command.can_handle(&verb))
            .map(|command| &**command)
    }

    /// Dispatch one input line.
    ///
    /// Blank lines do nothing. An unknown verb is a [`ReplError::Dispatch`]
    /// carrying the whole trimmed line.
    pub fn execute_line(
        &self,
        line: &str,
        context: &mut CommandContext<'_>,
    ) -> ReplResult<CommandEvent> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(CommandEvent::Handled);
        }

        let (verb, args) = split_first(trimmed);
        match self.find(verb) {
            Some(command) => {
                tracing::debug!("'{}' handled by {}", trimmed, command.name());
                command.execute(args.unwrap_or(""), context)
            }
            None => {
                tracing::debug!("Unknown command: {}", trimmed);
                Err(ReplError::Dispatch(trimmed.to_string()))
            }
        }
    }

    /// Every verb and alias, in table order; used for tab completion
    pub fn verbs(&self) -> Vec<&'static str> {
        self.commands
            .iter()
            .flat_map(|command| {
                std::iter::once(command.name()).chain(command.aliases().iter().copied())
            })
            .collect()
    }

    /// Print the usage table
    pub fn write_help(&self, out: &mut dyn Write) -> std::io::Result<()> {
        let width = self
            .commands
            .iter()
            .map(|command| command.usage().len())
            .max()
            .unwrap_or(0);
        for command in &self.commands {
            writeln!(out, "  {:<width$}  {}", command.usage(), command.about())?;
        }
        Ok(())
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
