//! Fixture for running commands against a throwaway session

use tempfile::TempDir;

use crate::config::ConfigStore;
use crate::repl::commands::CommandContext;
use crate::repl::models::{HeaderStore, SessionState};
use crate::repl::services::HttpService;
use crate::repl::views::ansi_escape_codes::strip;
use crate::repl::views::ExchangeRenderer;

/// Session state rooted in a temp dir plus a captured output buffer
pub(crate) struct TestHarness {
    pub dir: TempDir,
    pub session: SessionState,
    pub http: HttpService,
    pub renderer: ExchangeRenderer,
    pub out: Vec<u8>,
}

impl TestHarness {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let session = Self::load_session(&dir);
        Self {
            dir,
            session,
            http: HttpService::new().unwrap(),
            renderer: ExchangeRenderer::with_width(8),
            out: Vec::new(),
        }
    }

    /// A fresh session read back from the same files
    pub fn reload(&self) -> SessionState {
        Self::load_session(&self.dir)
    }

    fn load_session(dir: &TempDir) -> SessionState {
        SessionState::new(
            ConfigStore::load(dir.path().join("config")),
            HeaderStore::load(dir.path().join("headers")),
        )
    }

    pub fn with_context<T>(&mut self, f: impl FnOnce(&mut CommandContext<'_>) -> T) -> T {
        let mut context =
            CommandContext::new(&mut self.session, &self.http, &self.renderer, &mut self.out);
        f(&mut context)
    }

    /// Captured output with colours removed
    pub fn output(&self) -> String {
        strip(&String::from_utf8_lossy(&self.out))
    }
}
