//! Persisted application configuration
//!
//! This module handles:
//! - the process-wide storage directory ([`StorageDir`])
//! - TOML load with defaults when nothing was saved yet
//! - atomic save via a temp file renamed over the target

mod storage;

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

pub use storage::StorageDir;

use crate::error::{PersistenceError, ValidationError};
use crate::validation::validate_repository_url;

/// The tool's own settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where the synced store lives
    pub database_path: PathBuf,

    /// Remote backing the store; empty in local-only mode
    #[serde(default)]
    pub database_repo_url: String,

    /// Whether the store is ever synced to a remote
    #[serde(default)]
    pub local_only: bool,
}

impl AppConfig {
    /// Defaults used before anything has been saved
    #[must_use]
    pub fn defaults(storage: &StorageDir) -> Self {
        Self {
            database_path: storage.default_database_path(),
            database_repo_url: String::new(),
            local_only: false,
        }
    }

    /// Check the URL against the mode
    ///
    /// A remote-tracked config may still have an empty URL (fresh defaults);
    /// a non-empty one must be valid. A local-only config records no URL.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.local_only {
            if !self.database_repo_url.is_empty() {
                return Err(ValidationError::UrlInLocalOnly);
            }
        } else if !self.database_repo_url.is_empty() {
            validate_repository_url(&self.database_repo_url)?;
        }
        Ok(())
    }

    /// Load the config from `storage`, or defaults if none was saved
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, parsed or
    /// validated. A truncated file is an error, never silently defaulted.
    pub fn load(storage: &StorageDir) -> Result<Self, PersistenceError> {
        let path = storage.config_file();

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("no config at {}, using defaults", path.display());
                return Ok(Self::defaults(storage));
            }
            Err(source) => return Err(PersistenceError::Read { path, source }),
        };

        let config: Self = toml::from_str(&content)
            .map_err(|source| PersistenceError::Parse {
                path: path.clone(),
                source,
            })?;
        config
            .validate()
            .map_err(|source| PersistenceError::Invalid { path, source })?;

        Ok(config)
    }

    /// Save the config into `storage`
    ///
    /// The content is written to a temp file in the same directory, synced and
    /// renamed over the target, so readers see the old or the new file whole.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid or cannot be written.
    pub fn save(&self, storage: &StorageDir) -> Result<(), PersistenceError> {
        let path = storage.config_file();
        self.validate()
            .map_err(|source| PersistenceError::Invalid {
                path: path.clone(),
                source,
            })?;

        let content = toml::to_string_pretty(self)?;
        let write_err = |source| PersistenceError::Write {
            path: path.clone(),
            source,
        };

        let mut tmp = NamedTempFile::new_in(storage.root()).map_err(write_err)?;
        tmp.write_all(content.as_bytes()).map_err(write_err)?;
        tmp.as_file().sync_all().map_err(write_err)?;
        tmp.persist(&path).map_err(|e| write_err(e.error))?;

        tracing::info!("saved config to {}", path.display());
        Ok(())
    }
}
