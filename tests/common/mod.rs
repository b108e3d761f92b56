//! Shared fixtures for integration tests.
//!
//! The client under test is blocking, so each test owns a tokio runtime
//! only to drive the mock server and calls the client from the test thread.

#![allow(dead_code)]

use std::io::Write;

use flate2::write::GzEncoder;
use flate2::Compression;
use restline::config::{ConfigStore, StatePaths};
use restline::{HeaderStore, SessionState};
use tempfile::TempDir;
use tokio::runtime::Runtime;
use wiremock::{Mock, MockServer};

/// A running mock server and the runtime that drives it
pub struct TestServer {
    pub server: MockServer,
    pub runtime: Runtime,
}

impl TestServer {
    pub fn start() -> Self {
        let runtime = Runtime::new().unwrap();
        let server = runtime.block_on(MockServer::start());
        Self { server, runtime }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    pub fn mount(&self, mock: Mock) {
        self.runtime.block_on(mock.mount(&self.server));
    }

    /// Check the `expect` counts of every mounted mock
    pub fn verify(&self) {
        self.runtime.block_on(self.server.verify());
    }
}

/// Per-user files in a temp dir
pub struct TestHome {
    pub dir: TempDir,
    pub paths: StatePaths,
}

impl TestHome {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let paths = StatePaths::under(dir.path());
        Self { dir, paths }
    }

    pub fn session(&self) -> SessionState {
        SessionState::new(
            ConfigStore::load(&self.paths.config),
            HeaderStore::load(&self.paths.headers),
        )
    }

    /// Session already pointed at `base_url`, not yet saved
    pub fn session_for(&self, base_url: &str) -> SessionState {
        let mut session = self.session();
        session.set_base_url(base_url);
        session
    }
}

pub fn gzip(data: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

/// Address nothing is listening on
pub fn closed_port_url() -> String {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    format!("http://127.0.0.1:{port}")
}
