//! # Header Store
//!
//! Default request headers persisted as a JSON object in the per-user
//! directory. Every mutation is written through immediately.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::config::ensure_parent_dir;
use crate::repl::error::{ReplError, ReplResult};

/// Header name to value. Sorted so listing order is stable.
pub type HeaderMap = BTreeMap<String, String>;

/// Headers every session starts with unless the file overrides them
pub const DEFAULT_HEADERS: [(&str, &str); 2] = [
    ("Accept", "application/json"),
    ("Content-Type", "application/json"),
];

/// Build the seed map
pub fn default_headers() -> HeaderMap {
    DEFAULT_HEADERS
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

/// Persisted default request headers
#[derive(Debug, Clone)]
pub struct HeaderStore {
    path: PathBuf,
    headers: HeaderMap,
}

impl HeaderStore {
    /// Load headers from `path`, falling back to the defaults when the
    /// file is missing or not a JSON object of strings
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut headers = default_headers();

        match std::fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str::<HeaderMap>(&text) {
                Ok(stored) => {
                    tracing::debug!(
                        "Loaded {} headers from '{}'",
                        stored.len(),
                        path.display()
                    );
                    headers.extend(stored);
                }
                Err(e) => {
                    tracing::warn!("Ignoring corrupt header file '{}': {}", path.display(), e);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No header file at '{}', using defaults", path.display());
            }
            Err(e) => {
                tracing::warn!("Could not read header file '{}': {}", path.display(), e);
            }
        }

        Self { path, headers }
    }

    /// Write the full map, replacing whatever the file held
    pub fn save(&self) -> ReplResult<()> {
        let text = serde_json::to_string_pretty(&self.headers)
            .map_err(|e| ReplError::persistence("headers", &self.path, e.into()))?;
        ensure_parent_dir(&self.path)
            .and_then(|()| std::fs::write(&self.path, text))
            .map_err(|e| ReplError::persistence("headers", &self.path, e))?;
        tracing::debug!("Saved {} headers to '{}'", self.headers.len(), self.path.display());
        Ok(())
    }

    /// Insert or overwrite one header and save immediately.
    ///
    /// The in-memory map keeps the new value even if the save fails.
    pub fn set(&mut self, key: &str, value: &str) -> ReplResult<()> {
        self.headers.insert(key.to_string(), value.to_string());
        self.save()
    }

    /// All headers in stable order
    pub fn list(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(String::as_str)
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
