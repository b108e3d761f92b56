//! # REPL
//!
//! The interactive shell: line input, command dispatch, the HTTP service
//! and the renderer that prints each exchange.

pub mod commands;
pub mod controller;
pub mod error;
pub mod io;
pub mod models;
pub mod services;
pub mod views;

// Re-export core types
pub use commands::{CommandContext, CommandEvent, CommandRegistry, ReplCommand};
pub use controller::{ReplLoop, SessionEnd};
pub use error::{ReplError, ReplResult};
pub use io::{LineReader, ReadOutcome, ScriptedLineReader, TerminalLineReader};
pub use models::{CookieJar, HeaderStore, HttpExchange, HttpRequest, SessionState};
pub use services::HttpService;
pub use views::ExchangeRenderer;
