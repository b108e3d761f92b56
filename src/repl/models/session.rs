//! # Session State
//!
//! Base URL, header echo flag and the persisted header map for one running
//! REPL. Settings live in the [`ConfigStore`]; this type gives them meaning.

use std::time::Duration;

use url::Url;

use crate::config::{ConfigStore, KEY_BASE_URL, KEY_HEADERS, KEY_TIMEOUT, KNOWN_KEYS};
use crate::repl::error::{ReplError, ReplResult};
use crate::repl::models::headers::HeaderStore;

/// Prompt label used when no base URL is set
pub const NO_SERVER_LABEL: &str = "[no server configured]";

/// Value printed by `config_get` for a known but unset key
pub const UNSET_VALUE: &str = "(not set)";

/// Header echo is off unless configured
pub const DEFAULT_HEADERS_FLAG: &str = "off";

/// State owned by the REPL for the lifetime of the process
#[derive(Debug)]
pub struct SessionState {
    config: ConfigStore,
    headers: HeaderStore,
}

impl SessionState {
    pub fn new(config: ConfigStore, headers: HeaderStore) -> Self {
        Self { config, headers }
    }

    /// Configured base URL; an empty value counts as unset
    pub fn base_url(&self) -> Option<&str> {
        self.config
            .get(KEY_BASE_URL)
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Set the base URL for this session. Persisted on quit or config_set.
    pub fn set_base_url(&mut self, url: &str) {
        tracing::info!("Base URL set to '{}'", url);
        self.config.set(KEY_BASE_URL, url);
    }

    /// Whether response headers are echoed before the body
    pub fn show_headers(&self) -> bool {
        self.config
            .get(KEY_HEADERS)
            .is_some_and(|value| value.eq_ignore_ascii_case("on"))
    }

    /// Request timeout, if one is configured
    pub fn timeout(&self) -> Option<Duration> {
        self.config
            .get(KEY_TIMEOUT)
            .and_then(|value| value.trim().parse::<f64>().ok())
            .filter(|secs| secs.is_finite() && *secs > 0.0)
            .map(Duration::from_secs_f64)
    }

    /// Text shown before `> ` in the prompt
    pub fn prompt_label(&self) -> &str {
        self.base_url().unwrap_or(NO_SERVER_LABEL)
    }

    /// Effective value of a known setting. `headers` reads as `off` when
    /// unset; the others read as `(not set)`.
    pub fn setting(&self, key: &str) -> ReplResult<String> {
        if !KNOWN_KEYS.contains(&key) {
            return Err(ReplError::UnknownSetting(key.to_string()));
        }
        let fallback = if key == KEY_HEADERS {
            DEFAULT_HEADERS_FLAG
        } else {
            UNSET_VALUE
        };
        Ok(self.config.get(key).unwrap_or(fallback).to_string())
    }

    /// Change a known setting in memory after validating its value
    pub fn set_setting(&mut self, key: &str, value: &str) -> ReplResult<()> {
        let invalid = || ReplError::InvalidSetting {
            key: key.to_string(),
            value: value.to_string(),
        };
        match key {
            KEY_HEADERS => {
                let normalized = value.to_ascii_lowercase();
                if normalized != "on" && normalized != "off" {
                    return Err(invalid());
                }
                self.config.set(key, &normalized);
            }
            KEY_TIMEOUT => {
                value
                    .parse::<f64>()
                    .ok()
                    .filter(|secs| secs.is_finite() && *secs >= 0.0)
                    .ok_or_else(invalid)?;
                self.config.set(key, value);
            }
            KEY_BASE_URL => {
                Url::parse(value).map_err(|source| ReplError::InvalidUrl {
                    url: value.to_string(),
                    source,
                })?;
                self.set_base_url(value);
            }
            _ => return Err(ReplError::UnknownSetting(key.to_string())),
        }
        Ok(())
    }

    /// Persist the settings file
    pub fn save_config(&self) -> ReplResult<()> {
        self.config.save()
    }

    pub fn config(&self) -> &ConfigStore {
        &self.config
    }

    pub fn headers(&self) -> &HeaderStore {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut HeaderStore {
        &mut self.headers
    }
}
