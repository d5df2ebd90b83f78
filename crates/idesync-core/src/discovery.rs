//! Repository discovery under a base directory
//!
//! This module provides:
//! - [`RepositoryWalker`]: lazy, restartable walk yielding git working copies
//! - [`read_remotes`]: remote name to URL mapping for one repository
//! - [`RepositoryIdentity`]: canonical `host/owner/name` derived from a remote

mod identity;
mod remotes;
mod walker;


use std::path::{Path, PathBuf};

pub use identity::RepositoryIdentity;
pub use remotes::{Remotes, read_remotes};
pub use walker::RepositoryWalker;

use crate::error::RemoteReadError;

/// Name of the metadata entry that marks a git working copy
pub(crate) const GIT_DIR: &str = ".git";

/// Remote preferred when deriving an identity
const PRIMARY_REMOTE: &str = "origin";

/// Check whether `dir` is the root of a git working copy
///
/// `.git` is a directory for regular clones and a file for worktrees and
/// submodules; both count.
pub(crate) fn is_repository_root(dir: &Path) -> bool {
    dir.join(GIT_DIR).exists()
}

/// A discovered git working copy and its remotes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    /// Absolute path of the working copy root
    pub root: PathBuf,
    /// Remotes configured for the repository
    pub remotes: Remotes,
}

impl Repository {
    /// Read a repository's remotes and pair them with its root
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, RemoteReadError> {
        let root = root.into();
        let remotes = read_remotes(&root)?;
        Ok(Self { root, remotes })
    }

    /// Canonical identity, taken from `origin` or else the first remote by name
    #[must_use]
    pub fn identity(&self) -> Option<RepositoryIdentity> {
        self.remotes
            .get(PRIMARY_REMOTE)
            .and_then(|url| RepositoryIdentity::from_url(url))
            .or_else(|| {
                self.remotes
                    .values()
                    .find_map(|url| RepositoryIdentity::from_url(url))
            })
    }
}
