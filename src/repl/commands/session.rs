//! # Session Commands

use crate::repl::commands::{CommandContext, CommandEvent, ReplCommand};
use crate::repl::error::ReplResult;

/// `quit` / `exit`: end the session, saving settings
pub struct QuitCommand;

impl ReplCommand for QuitCommand {
    fn name(&self) -> &'static str {
        "quit"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["exit"]
    }

    fn usage(&self) -> &'static str {
        "quit | exit"
    }

    fn about(&self) -> &'static str {
        "save settings and leave"
    }

    fn execute(&self, _args: &str, _context: &mut CommandContext<'_>) -> ReplResult<CommandEvent> {
        Ok(CommandEvent::QuitRequested)
    }
}

/// `help`: list the commands
pub struct HelpCommand;

impl ReplCommand for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn usage(&self) -> &'static str {
        "help"
    }

    fn about(&self) -> &'static str {
        "show this list"
    }

    fn execute(&self, _args: &str, _context: &mut CommandContext<'_>) -> ReplResult<CommandEvent> {
        Ok(CommandEvent::HelpRequested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repl::commands::testing::TestHarness;

    #[test]
    fn quit_command_should_handle_exit_alias() {
        assert!(QuitCommand.can_handle("quit"));
        assert!(QuitCommand.can_handle("exit"));
        assert!(!QuitCommand.can_handle("q"));
    }

    #[test]
    fn quit_command_should_produce_quit_event() {
        let mut harness = TestHarness::new();
        let event = harness
            .with_context(|context| QuitCommand.execute("", context))
            .unwrap();
        assert_eq!(event, CommandEvent::QuitRequested);
    }

    #[test]
    fn help_command_should_produce_help_event() {
        let mut harness = TestHarness::new();
        let event = harness
            .with_context(|context| HelpCommand.execute("", context))
            .unwrap();
        assert_eq!(event, CommandEvent::HelpRequested);
    }
}
