//! JSON file backed settings store
//!
//! Settings live in a small JSON document. Writes go to a sibling temp file
//! that is renamed over the original, so a crash never leaves a torn file.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use application::error::ApplicationError;
use application::ports::SettingsPort;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors raised by [`FileSettingsStore`]
#[derive(Debug, Error)]
pub enum SettingsStoreError {
    /// Reading or writing the file failed
    #[error("Settings I/O error at {path}: {source}")]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// The settings could not be encoded
    #[error("Settings serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<SettingsStoreError> for ApplicationError {
    fn from(err: SettingsStoreError) -> Self {
        Self::Settings(err.to_string())
    }
}

/// Persisted user preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSettings {
    /// Ambient sounds globally enabled
    #[serde(default = "default_true")]
    pub sounds_enabled: bool,
}

const fn default_true() -> bool {
    true
}

impl Default for StoredSettings {
    fn default() -> Self {
        Self {
            sounds_enabled: default_true(),
        }
    }
}

/// Settings persisted to a JSON file
#[derive(Debug)]
pub struct FileSettingsStore {
    path: PathBuf,
    current: RwLock<StoredSettings>,
}

impl FileSettingsStore {
    /// Open the store at `path`
    ///
    /// A missing file yields defaults. An unreadable or malformed file is
    /// logged and also yields defaults; the next write replaces it.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let current = match Self::read(&path) {
            Ok(Some(settings)) => settings,
            Ok(None) => {
                debug!(path = %path.display(), "No settings file, using defaults");
                StoredSettings::default()
            },
            Err(e) => {
                warn!(error = %e, "Ignoring unreadable settings file");
                StoredSettings::default()
            },
        };

        Self {
            path,
            current: RwLock::new(current),
        }
    }

    /// Location of the settings file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current settings
    #[must_use]
    pub fn settings(&self) -> StoredSettings {
        *self.current.read()
    }

    fn read(path: &Path) -> Result<Option<StoredSettings>, SettingsStoreError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(SettingsStoreError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            },
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn write(&self, settings: &StoredSettings) -> Result<(), SettingsStoreError> {
        let io_err = |source| SettingsStoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let body = serde_json::to_vec_pretty(settings)?;
        let tmp = self.path.with_extension("json.tmp");
        let mut file = fs::File::create(&tmp).map_err(io_err)?;
        file.write_all(&body).map_err(io_err)?;
        file.sync_all().map_err(io_err)?;
        fs::rename(&tmp, &self.path).map_err(io_err)?;
        Ok(())
    }
}

impl SettingsPort for FileSettingsStore {
    fn sounds_enabled(&self) -> bool {
        self.current.read().sounds_enabled
    }

    fn set_sounds_enabled(&self, enabled: bool) -> Result<(), ApplicationError> {
        let mut current = self.current.write();
        let updated = StoredSettings {
            sounds_enabled: enabled,
        };
        self.write(&updated)?;
        *current = updated;
        debug!(enabled, path = %self.path.display(), "Settings persisted");
        Ok(())
    }
}
