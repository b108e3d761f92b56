//! # Header Commands

use std::io::Write;

use crate::repl::commands::{CommandContext, CommandEvent, ReplCommand};
use crate::repl::error::{ReplError, ReplResult};
use crate::repl::models::split_first;

/// `header_set <key> <value>`: set a default header and save it
pub struct HeaderSetCommand;

impl ReplCommand for HeaderSetCommand {
    fn name(&self) -> &'static str {
        "header_set"
    }

    fn usage(&self) -> &'static str {
        "header_set <key> <value>"
    }

    fn about(&self) -> &'static str {
        "set a header sent with every request"
    }

    fn execute(&self, args: &str, context: &mut CommandContext<'_>) -> ReplResult<CommandEvent> {
        match split_first(args.trim()) {
            (key, Some(value)) if !key.is_empty() => {
                context.session.headers_mut().set(key, value)?;
                Ok(CommandEvent::Handled)
            }
            _ => Err(ReplError::Usage(self.usage())),
        }
    }
}

/// `header_list`: print the default headers
pub struct HeaderListCommand;

impl ReplCommand for HeaderListCommand {
    fn name(&self) -> &'static str {
        "header_list"
    }

    fn usage(&self) -> &'static str {
        "header_list"
    }

    fn about(&self) -> &'static str {
        "show the headers sent with every request"
    }

    fn execute(&self, _args: &str, context: &mut CommandContext<'_>) -> ReplResult<CommandEvent> {
        for (key, value) in context.session.headers().list() {
            writeln!(context.out, "{key}: {value}")?;
        }
        Ok(CommandEvent::Handled)
    }
}
