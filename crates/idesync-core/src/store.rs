//! Backing store creation
//!
//! The store is the git repository that holds synced IDE configuration.
//! It can be adopted from a local directory or cloned from a remote URL.
//! Callers guarantee the target path is fresh; nothing here re-checks it.

use std::fs;
use std::path::{Path, PathBuf};

use git2::{Cred, CredentialType, FetchOptions, RemoteCallbacks, build::RepoBuilder};
use tracing::{info, instrument};
use url::Url;

use crate::error::InitializationError;

/// Credential attempts before a clone gives up on authentication
const MAX_CREDENTIAL_ATTEMPTS: usize = 3;

/// Handle to an initialized store, identified by its local path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Handle for a store that already exists at `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Local path of the store
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Creates stores; the seam the `init` flow is tested through
pub trait StoreInitializer {
    /// Adopt an existing local directory as the store
    fn initialize_from_path(&self, path: &Path) -> Result<Store, InitializationError>;

    /// Create the store at `local_path` from the content at `url`
    fn initialize_from_url(&self, url: &Url, local_path: &Path)
    -> Result<Store, InitializationError>;
}

/// [`StoreInitializer`] backed by libgit2
#[derive(Debug, Clone, Copy, Default)]
pub struct GitStoreInitializer;

impl GitStoreInitializer {
    /// Create a new git store initializer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Credentials callback: ssh-agent, then the git credential helper, then default
    fn callbacks<'a>() -> RemoteCallbacks<'a> {
        let mut attempts = 0;
        let mut callbacks = RemoteCallbacks::new();
        callbacks.credentials(move |url, username_from_url, allowed| {
            attempts += 1;
            if attempts > MAX_CREDENTIAL_ATTEMPTS {
                return Err(git2::Error::from_str("authentication failed"));
            }

            if allowed.contains(CredentialType::SSH_KEY) {
                return Cred::ssh_key_from_agent(username_from_url.unwrap_or("git"));
            }
            if allowed.contains(CredentialType::USER_PASS_PLAINTEXT) {
                let config = git2::Config::open_default()?;
                return Cred::credential_helper(&config, url, username_from_url);
            }
            Cred::default()
        });
        callbacks
    }
}

impl StoreInitializer for GitStoreInitializer {
    #[instrument(level = "debug", skip(self))]
    fn initialize_from_path(&self, path: &Path) -> Result<Store, InitializationError> {
        let metadata = fs::metadata(path).map_err(|source| InitializationError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if !metadata.is_dir() {
            return Err(InitializationError::NotADirectory(path.to_path_buf()));
        }

        if git2::Repository::open(path).is_ok() {
            info!("adopting existing repository at {}", path.display());
        } else {
            info!("initializing store at {}", path.display());
            git2::Repository::init(path).map_err(|source| InitializationError::Init {
                path: path.to_path_buf(),
                source,
            })?;
        }

        Ok(Store {
            path: path.to_path_buf(),
        })
    }

    #[instrument(level = "debug", skip(self, url), fields(url = %url))]
    fn initialize_from_url(
        &self,
        url: &Url,
        local_path: &Path,
    ) -> Result<Store, InitializationError> {
        info!("cloning store from {url} into {}", local_path.display());

        let mut fetch_options = FetchOptions::new();
        fetch_options.remote_callbacks(Self::callbacks());

        RepoBuilder::new()
            .fetch_options(fetch_options)
            .clone(url.as_str(), local_path)
            .map_err(|source| InitializationError::Clone {
                url: url.to_string(),
                path: local_path.to_path_buf(),
                source,
            })?;

        Ok(Store {
            path: local_path.to_path_buf(),
        })
    }
}
