//! # Settings Commands
//!
//! `config_set`, `config_get` and `server`. Only `base_url`, `headers` and
//! `timeout` are recognised.

use std::io::Write;

use crate::config::KEY_BASE_URL;

use crate::repl::commands::{CommandContext, CommandEvent, ReplCommand};
use crate::repl::error::{ReplError, ReplResult};
use crate::repl::models::split_first;

/// `config_set <key> <value>`: change a setting and save the config file
pub struct ConfigSetCommand;

impl ReplCommand for ConfigSetCommand {
    fn name(&self) -> &'static str {
        "config_set"
    }

    fn usage(&self) -> &'static str {
        "config_set <key> <value>"
    }

    fn about(&self) -> &'static str {
        "change base_url, headers (on|off) or timeout (seconds)"
    }

    fn execute(&self, args: &str, context: &mut CommandContext<'_>) -> ReplResult<CommandEvent> {
        let (key, value) = match split_first(args.trim()) {
            (key, Some(value)) if !key.is_empty() => (key, value.trim()),
            _ => return Err(ReplError::Usage(self.usage())),
        };
        context.session.set_setting(key, value)?;
        context.session.save_config()?;
        Ok(CommandEvent::Handled)
    }
}

/// `config_get <key>`: print a setting
pub struct ConfigGetCommand;

impl ReplCommand for ConfigGetCommand {
    fn name(&self) -> &'static str {
        "config_get"
    }

    fn usage(&self) -> &'static str {
        "config_get <key>"
    }

    fn about(&self) -> &'static str {
        "show the value of a setting"
    }

    fn execute(&self, args: &str, context: &mut CommandContext<'_>) -> ReplResult<CommandEvent> {
        let key = args.trim();
        if key.is_empty() {
            return Err(ReplError::Usage(self.usage()));
        }
        let value = context.session.setting(key)?;
        writeln!(context.out, "{value}")?;
        Ok(CommandEvent::Handled)
    }
}

/// `server <url>`: point the session at a new base URL
pub struct ServerCommand;

impl ReplCommand for ServerCommand {
    fn name(&self) -> &'static str {
        "server"
    }

    fn usage(&self) -> &'static str {
        "server <url>"
    }

    fn about(&self) -> &'static str {
        "set the base url; saved when the session ends with quit"
    }

    fn execute(&self, args: &str, context: &mut CommandContext<'_>) -> ReplResult<CommandEvent> {
        let url = args.trim();
        if url.is_empty() {
            return Err(ReplError::Usage(self.usage()));
        }
        context.session.set_setting(KEY_BASE_URL, url)?;
        Ok(CommandEvent::Handled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repl::commands::testing::TestHarness;

    #[test]
    fn server_should_change_prompt_without_saving() {
        let mut harness = TestHarness::new();
        harness
            .with_context(|context| ServerCommand.execute("http://localhost:3000", context))
            .unwrap();

        assert_eq!(harness.session.prompt_label(), "http://localhost:3000");
        assert_eq!(harness.reload().base_url(), None);
    }

    #[test]
    fn server_should_reject_missing_or_invalid_url() {
        let mut harness = TestHarness::new();
        assert!(matches!(
            harness.with_context(|context| ServerCommand.execute("", context)),
            Err(ReplError::Usage(_))
        ));
        assert!(matches!(
            harness.with_context(|context| ServerCommand.execute("localhost", context)),
            Err(ReplError::InvalidUrl { .. })
        ));
        assert_eq!(harness.session.base_url(), None);
    }

    #[test]
    fn config_set_should_save_immediately() {
        let mut harness = TestHarness::new();
        harness
            .with_context(|context| ConfigSetCommand.execute("headers on", context))
            .unwrap();
        assert!(harness.reload().show_headers());
    }

    #[test]
    fn config_set_should_reject_unknown_keys() {
        let mut harness = TestHarness::new();
        let err = harness
            .with_context(|context| ConfigSetCommand.execute("colour blue", context))
            .unwrap_err();
        assert_eq!(err.to_string(), "unknown setting 'colour'");
    }

    #[test]
    fn config_set_without_value_should_be_usage_error() {
        let mut harness = TestHarness::new();
        assert!(matches!(
            harness.with_context(|context| ConfigSetCommand.execute("headers", context)),
            Err(ReplError::Usage("config_set <key> <value>"))
        ));
    }

    #[test]
    fn config_get_should_print_value_or_not_set() {
        let mut harness = TestHarness::new();
        harness
            .with_context(|context| {
                ConfigGetCommand.execute("base_url", context)?;
                ConfigSetCommand.execute("timeout 5", context)?;
                ConfigGetCommand.execute("timeout", context)
            })
            .unwrap();
        assert_eq!(harness.output(), "(not set)\n5\n");
    }

    #[test]
    fn config_get_headers_should_default_to_off() {
        let mut harness = TestHarness::new();
        harness
            .with_context(|context| ConfigGetCommand.execute("headers", context))
            .unwrap();
        assert_eq!(harness.output(), "off\n");
    }

    #[test]
    fn config_set_should_validate_base_url_like_server() {
        let mut harness = TestHarness::new();
        assert!(matches!(
            harness.with_context(|context| ConfigSetCommand.execute("base_url localhost", context)),
            Err(ReplError::InvalidUrl { .. })
        ));
        assert_eq!(harness.reload().base_url(), None);
    }

    #[test]
    fn config_get_should_reject_unknown_keys() {
        let mut harness = TestHarness::new();
        assert!(matches!(
            harness.with_context(|context| ConfigGetCommand.execute("nope", context)),
            Err(ReplError::UnknownSetting(key)) if key == "nope"
        ));
        assert!(harness.output().is_empty());
    }
}
