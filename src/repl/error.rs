//! # REPL Errors
//!
//! Every component returns these instead of printing. The controller is the
//! only place that turns them into user-visible text.

use thiserror::Error;

/// Errors raised while handling a single REPL command
#[derive(Debug, Error)]
pub enum ReplError {
    /// A command needs a base URL and none is configured
    #[error("no server configured, use `server <url>` first")]
    Configuration,

    /// The path could not be joined onto the base URL
    #[error("invalid url '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// DNS, connection or timeout failure
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The response body could not be decoded
    #[error("could not decode response body: {0}")]
    Decode(#[source] std::io::Error),

    /// A header, config or history file could not be read or written
    #[error("could not persist {what} to {path}: {source}")]
    Persistence {
        what: &'static str,
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The verb is not in the command table
    #[error("{0} not found")]
    Dispatch(String),

    /// The verb is known but its arguments are missing or malformed
    #[error("usage: {0}")]
    Usage(&'static str),

    /// `config_get`/`config_set` with a key the session does not know
    #[error("unknown setting '{0}'")]
    UnknownSetting(String),

    /// A known setting was given a value it cannot take
    #[error("invalid value '{value}' for setting '{key}'")]
    InvalidSetting { key: String, value: String },

    /// Writing to the terminal failed
    #[error("could not write output: {0}")]
    Output(#[from] std::io::Error),
}

impl ReplError {
    /// Wrap an I/O failure on one of the per-user files
    pub fn persistence(
        what: &'static str,
        path: impl AsRef<std::path::Path>,
        source: std::io::Error,
    ) -> Self {
        Self::Persistence {
            what,
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}

/// Result alias used by the REPL components
pub type ReplResult<T> = std::result::Result<T, ReplError>;
