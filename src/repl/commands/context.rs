//! # Command Context
//!
//! Mutable access to the session and the services a command runs against.

use std::io::Write;

use crate::repl::models::SessionState;
use crate::repl::services::HttpService;
use crate::repl::views::ExchangeRenderer;

/// Everything a command may touch while it runs
pub struct CommandContext<'a> {
    pub session: &'a mut SessionState,
    pub http: &'a HttpService,
    pub renderer: &'a ExchangeRenderer,
    /// Normal command output; errors are reported by the caller
    pub out: &'a mut dyn Write,
}

impl<'a> CommandContext<'a> {
    pub fn new(
        session: &'a mut SessionState,
        http: &'a HttpService,
        renderer: &'a ExchangeRenderer,
        out: &'a mut dyn Write,
    ) -> Self {
        Self {
            session,
            http,
            renderer,
            out,
        }
    }
}
