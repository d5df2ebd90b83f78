use std::fs;
use std::io;
use std::path::Path;

/// Check whether anything exists at `path`
///
/// Broken symlinks count as missing.
pub fn exists(path: &Path) -> io::Result<bool> {
    path.try_exists()
}

/// Check whether the directory at `path` has no entries
///
/// # Errors
///
/// Returns an error if `path` is not a readable directory.
pub fn is_directory_empty(path: &Path) -> io::Result<bool> {
    Ok(fs::read_dir(path)?.next().is_none())
}
