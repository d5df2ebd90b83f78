//! Process-wide storage directory

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::PersistenceError;

const APP_DIR: &str = "idesync";
const CONFIG_FILE: &str = "config.toml";
const DATABASE_DIR: &str = "database";

/// Directory holding the tool's config file and, by default, its store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageDir {
    root: PathBuf,
}

impl StorageDir {
    /// Storage rooted at an explicit directory
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Platform default: `<config dir>/idesync` (e.g. `~/.config/idesync`)
    pub fn platform_default() -> Result<Self, PersistenceError> {
        let config_dir = dirs::config_dir().ok_or(PersistenceError::NoConfigDir)?;
        Ok(Self::new(config_dir.join(APP_DIR)))
    }

    /// Use `root` when given, otherwise the platform default
    pub fn resolve(root: Option<&Path>) -> Result<Self, PersistenceError> {
        root.map_or_else(Self::platform_default, |r| Ok(Self::new(r)))
    }

    /// Root directory
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Location of the persisted [`AppConfig`](super::AppConfig)
    #[must_use]
    pub fn config_file(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    /// Database path offered when nothing else is configured
    #[must_use]
    pub fn default_database_path(&self) -> PathBuf {
        self.root.join(DATABASE_DIR)
    }

    /// Create the root directory if it is missing
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn ensure(&self) -> io::Result<()> {
        if !self.root.is_dir() {
            tracing::debug!("creating storage directory {}", self.root.display());
        }
        fs::create_dir_all(&self.root)
    }
}
