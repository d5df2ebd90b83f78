//! Remote metadata extraction

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::RemoteReadError;

/// Remote name to URL, ordered by name
pub type Remotes = BTreeMap<String, String>;

/// Read the configured remotes of the repository rooted at `path`
///
/// Remotes without a URL, or with a URL that is not valid UTF-8, are skipped.
///
/// # Errors
///
/// Returns [`RemoteReadError`] if the repository cannot be opened or its
/// configuration cannot be parsed.
pub fn read_remotes(path: &Path) -> Result<Remotes, RemoteReadError> {
    let wrap = |source| RemoteReadError {
        path: path.to_path_buf(),
        source,
    };

    let repo = git2::Repository::open(path).map_err(wrap)?;
    let names = repo.remotes().map_err(wrap)?;

    let mut remotes = Remotes::new();
    for name in names.iter().flatten() {
        let remote = repo.find_remote(name).map_err(wrap)?;
        match remote.url() {
            Some(url) => {
                remotes.insert(name.to_string(), url.to_string());
            }
            None => tracing::debug!("remote '{name}' in {} has no usable URL", path.display()),
        }
    }

    Ok(remotes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_reads_all_remotes() {
        let tmp = TempDir::new().unwrap();
        let repo = git2::Repository::init(tmp.path()).unwrap();
        repo.remote("origin", "https://github.com/acme/app.git")
            .unwrap();
        repo.remote("upstream", "git@github.com:upstream/app.git")
            .unwrap();

        let remotes = read_remotes(tmp.path()).unwrap();

        assert_eq!(remotes.len(), 2);
        assert_eq!(remotes["origin"], "https://github.com/acme/app.git");
        assert_eq!(remotes["upstream"], "git@github.com:upstream/app.git");
    }

    #[test]
    fn test_repository_without_remotes() {
        let tmp = TempDir::new().unwrap();
        git2::Repository::init(tmp.path()).unwrap();

        assert!(read_remotes(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn test_not_a_repository() {
        let tmp = TempDir::new().unwrap();
        let plain = tmp.path().join("plain");
        fs::create_dir(&plain).unwrap();

        let err = read_remotes(&plain).unwrap_err();
        assert_eq!(err.path, plain);
    }

    #[test]
    fn test_corrupted_metadata() {
        let tmp = TempDir::new().unwrap();
        git2::Repository::init(tmp.path()).unwrap();
        fs::write(tmp.path().join(".git/config"), "[remote \"origin\"\n  url = ").unwrap();

        assert!(read_remotes(tmp.path()).is_err());
    }
}
