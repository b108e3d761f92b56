//! # Restline - Interactive HTTP Client
//!
//! A line-oriented REPL for poking at HTTP APIs. Requests are resolved
//! against a configurable base URL, sent with a persisted set of default
//! headers and session cookies, and printed with JSON re-indented and
//! highlighted.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐  line   ┌─────────────────┐  verb   ┌──────────────┐
//! │  LineReader  │────────▶│    ReplLoop     │────────▶│   Command    │
//! │ (rustyline)  │         │                 │◀────────│   Registry   │
//! └──────────────┘         └─────────────────┘  event  └──────┬───────┘
//!                                                            │
//!                   ┌──────────────┬─────────────────┬───────┴────────┐
//!                   ▼              ▼                 ▼                ▼
//!             SessionState    HttpService     ExchangeRenderer   HeaderStore
//!             (ConfigStore)   (CookieJar)     (highlight)        (JSON file)
//! ```

pub mod cmd_args;
pub mod config;
pub mod repl;

// Re-export main types for easy access
pub use repl::*;
