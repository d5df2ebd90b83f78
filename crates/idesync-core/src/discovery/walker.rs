//! Lazy directory walk that yields git working copy roots

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use super::{GIT_DIR, is_repository_root};

type EntryFilter = fn(&DirEntry) -> bool;

/// Iterator over every git working copy below a base directory
///
/// Nested repositories are found at any depth. The walk never enters `.git`
/// and does not follow symlinks, so each root is yielded once. Unreadable
/// entries are logged and skipped.
pub struct RepositoryWalker {
    entries: walkdir::FilterEntry<walkdir::IntoIter, EntryFilter>,
}

impl RepositoryWalker {
    /// Start a fresh walk rooted at `base`
    ///
    /// The base is canonicalized when possible so yielded roots are absolute.
    #[must_use]
    pub fn new(base: impl AsRef<Path>) -> Self {
        let base = base.as_ref();
        let base = dunce::canonicalize(base).unwrap_or_else(|_| base.to_path_buf());
        tracing::debug!("walking {} for repositories", base.display());

        let filter: EntryFilter = not_git_metadata;
        Self {
            entries: WalkDir::new(base)
                .follow_links(false)
                .into_iter()
                .filter_entry(filter),
        }
    }
}

fn not_git_metadata(entry: &DirEntry) -> bool {
    entry.file_name() != GIT_DIR
}

impl Iterator for RepositoryWalker {
    type Item = PathBuf;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("skipping unreadable entry: {e}");
                    continue;
                }
            };

            if entry.file_type().is_dir() && is_repository_root(entry.path()) {
                tracing::debug!("repository found at {}", entry.path().display());
                return Some(entry.into_path());
            }
        }
    }
}
