//! # REPL Controller
//!
//! Reads a line, hands it to the command registry and applies the event the
//! command produced. A failing command prints one line and the loop goes on.

use std::io::Write;

use anyhow::Result;

use crate::repl::commands::{CommandContext, CommandEvent, CommandRegistry};
use crate::repl::error::ReplError;
use crate::repl::io::{LineReader, ReadOutcome};
use crate::repl::models::SessionState;
use crate::repl::services::HttpService;
use crate::repl::views::ExchangeRenderer;

/// How the session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// `quit` or `exit`; settings were saved
    Quit,

    /// Input ran out; settings were left as they are on disk
    EndOfInput,
}

/// The read-dispatch-print loop
pub struct ReplLoop<R: LineReader> {
    reader: R,
    registry: CommandRegistry,
    session: SessionState,
    http: HttpService,
    renderer: ExchangeRenderer,
}

impl<R: LineReader> ReplLoop<R> {
    pub fn new(
        reader: R,
        session: SessionState,
        http: HttpService,
        renderer: ExchangeRenderer,
    ) -> Self {
        Self {
            reader,
            registry: CommandRegistry::new(),
            session,
            http,
            renderer,
        }
    }

    /// Run against stdout and stderr
    pub fn run(&mut self) -> Result<SessionEnd> {
        let stdout = std::io::stdout();
        let stderr = std::io::stderr();
        self.run_with(&mut stdout.lock(), &mut stderr.lock())
    }

    /// Run until `quit`/`exit` or end of input.
    ///
    /// Command output goes to `out`, one line per failed command to `err`.
    /// History is saved however the session ends.
    pub fn run_with(&mut self, out: &mut dyn Write, err: &mut dyn Write) -> Result<SessionEnd> {
        tracing::info!("REPL started");

        let end = loop {
            let prompt = format!("{}> ", self.session.prompt_label());
            let line = match self.reader.read_line(&prompt)? {
                ReadOutcome::Line(line) => line,
                ReadOutcome::Interrupted => {
                    tracing::debug!("Line discarded on interrupt");
                    continue;
                }
                ReadOutcome::EndOfInput => break SessionEnd::EndOfInput,
            };

            if !line.trim().is_empty() {
                self.reader.add_history(&line);
            }

            let result = {
                let mut context =
                    CommandContext::new(&mut self.session, &self.http, &self.renderer, &mut *out);
                self.registry.execute_line(&line, &mut context)
            };

            match result {
                Ok(CommandEvent::Handled) => {}
                Ok(CommandEvent::HelpRequested) => self.registry.write_help(out)?,
                Ok(CommandEvent::QuitRequested) => {
                    if let Err(e) = self.session.save_config() {
                        report(err, &e)?;
                    }
                    break SessionEnd::Quit;
                }
                Err(e) => report(err, &e)?,
            }
        };

        if let Err(e) = self.reader.save_history() {
            tracing::warn!("{:#}", e);
            writeln!(err, "{e:#}")?;
        }

        tracing::info!("REPL ended: {:?}", end);
        Ok(end)
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }
}

/// Print a command failure as a single line
fn report(err: &mut dyn Write, error: &ReplError) -> std::io::Result<()> {
    tracing::debug!("Command failed: {:?}", error);
    writeln!(err, "{error}")?;
    err.flush()
}
