//! Configuration paths and the settings store for restline
//!
//! All per-user state lives under one directory: the default header map,
//! the `[general]` settings INI file and the line editor history.

use std::path::{Path, PathBuf};

use ini::Ini;

use crate::repl::error::{ReplError, ReplResult};

/// Default per-user directory for restline
pub const DEFAULT_HOME_PATH: &str = "~/.restline";

/// Environment variable name for overriding the per-user directory
pub const HOME_PATH_ENV_VAR: &str = "RESTLINE_HOME";

/// File holding the persisted default request headers (JSON object)
pub const HEADERS_FILE_NAME: &str = "headers";

/// File holding the `[general]` settings (INI)
pub const CONFIG_FILE_NAME: &str = "config";

/// File holding the REPL input history
pub const HISTORY_FILE_NAME: &str = "history";

/// INI section the settings are stored under
pub const GENERAL_SECTION: &str = "general";

/// Setting key for the base URL
pub const KEY_BASE_URL: &str = "base_url";

/// Setting key for echoing response headers (`on`/`off`)
pub const KEY_HEADERS: &str = "headers";

/// Setting key for the request timeout in seconds
pub const KEY_TIMEOUT: &str = "timeout";

/// Every key `config_get`/`config_set` accept
pub const KNOWN_KEYS: [&str; 3] = [KEY_BASE_URL, KEY_HEADERS, KEY_TIMEOUT];

/// Get the per-user directory, checking environment variable first, then falling back to default
pub fn get_home_path() -> PathBuf {
    let raw = std::env::var_os(HOME_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_HOME_PATH.to_string());
    PathBuf::from(shellexpand::tilde(&raw).into_owned())
}

/// Locations of the three per-user files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatePaths {
    pub headers: PathBuf,
    pub config: PathBuf,
    pub history: PathBuf,
}

impl StatePaths {
    /// Lay the files out under `home`
    pub fn under(home: impl AsRef<Path>) -> Self {
        let home = home.as_ref();
        Self {
            headers: home.join(HEADERS_FILE_NAME),
            config: home.join(CONFIG_FILE_NAME),
            history: home.join(HISTORY_FILE_NAME),
        }
    }

    /// Resolve from `RESTLINE_HOME` or the default directory
    pub fn resolve() -> Self {
        Self::under(get_home_path())
    }
}

/// Create the parent directory of `path` if needed
pub(crate) fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

/// Key-value settings backed by the `[general]` section of an INI file
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
    ini: Ini,
}

impl ConfigStore {
    /// Load settings from `path`; a missing or unreadable file gives an empty store
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let ini = match Ini::load_from_file(&path) {
            Ok(ini) => {
                tracing::debug!("Loaded settings from '{}'", path.display());
                ini
            }
            Err(ini::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No settings file at '{}', using defaults", path.display());
                Ini::new()
            }
            Err(e) => {
                tracing::warn!("Ignoring unreadable settings file '{}': {}", path.display(), e);
                Ini::new()
            }
        };
        Self { path, ini }
    }

    /// Current value of `key`, if any
    pub fn get(&self, key: &str) -> Option<&str> {
        self.ini
            .section(Some(GENERAL_SECTION))
            .and_then(|section| section.get(key))
    }

    /// Set `key` in memory; call [`ConfigStore::save`] to persist
    pub fn set(&mut self, key: &str, value: &str) {
        self.ini
            .with_section(Some(GENERAL_SECTION))
            .set(key, value);
    }

    /// Write the whole store back to its file
    pub fn save(&self) -> ReplResult<()> {
        ensure_parent_dir(&self.path)
            .and_then(|()| self.ini.write_to_file(&self.path))
            .map_err(|e| ReplError::persistence("config", &self.path, e))?;
        tracing::debug!("Saved settings to '{}'", self.path.display());
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
