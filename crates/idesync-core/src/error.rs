use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A repository's remote metadata could not be read.
///
/// Non-fatal during discovery: the caller reports it and moves on to the
/// next repository.
#[derive(Error, Debug)]
#[error("failed to read remotes of {}: {source}", path.display())]
pub struct RemoteReadError {
    /// Repository root that could not be read
    pub path: PathBuf,
    /// Underlying git failure
    #[source]
    pub source: git2::Error,
}

/// User-supplied input failed validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Nothing was entered and no default applies
    #[error("input cannot be empty")]
    Empty,
    /// Not a usable repository URL
    #[error("invalid URL '{input}': {reason}")]
    InvalidUrl {
        /// Rejected input
        input: String,
        /// Why it was rejected
        reason: String,
    },
    /// Answer outside the accepted set
    #[error("invalid option '{0}'")]
    InvalidOption(String),
    /// Local-only config carrying a URL
    #[error("local-only configuration must not record a repository URL")]
    UrlInLocalOnly,
}

/// The target database path is not usable for a fresh store
#[derive(Error, Debug)]
pub enum PreconditionError {
    /// Directory already has entries
    #[error("database path must be an empty directory: {}", .0.display())]
    NotEmpty(PathBuf),
    /// Something other than a directory is in the way
    #[error("database path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    /// Missing path could not be created
    #[error("failed to create database path {}: {source}", path.display())]
    Create {
        /// Target path
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },
    /// Path could not be examined
    #[error("failed to inspect database path {}: {source}", path.display())]
    Inspect {
        /// Target path
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },
}

/// Store creation from a path or a URL failed
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Adopted path is not a directory
    #[error("cannot adopt {}: not a directory", .0.display())]
    NotADirectory(PathBuf),
    /// Adopted path could not be accessed
    #[error("cannot access {}: {source}", path.display())]
    Io {
        /// Store path
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },
    /// `git init` failed
    #[error("failed to initialize repository at {}: {source}", path.display())]
    Init {
        /// Store path
        path: PathBuf,
        /// Underlying git failure
        #[source]
        source: git2::Error,
    },
    /// Clone failed (network, auth, missing remote)
    #[error("failed to clone {url} into {}: {source}", path.display())]
    Clone {
        /// Remote URL
        url: String,
        /// Store path
        path: PathBuf,
        /// Underlying git failure
        #[source]
        source: git2::Error,
    },
}

/// Loading or saving the application config failed
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Config file exists but could not be read
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        /// Config file
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },
    /// Config file is not valid TOML for [`AppConfig`](crate::AppConfig)
    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        /// Config file
        path: PathBuf,
        /// Parser failure
        #[source]
        source: toml::de::Error,
    },
    /// Config could not be rendered
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// Config could not be written or renamed into place
    #[error("failed to write config {}: {source}", path.display())]
    Write {
        /// Config file
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },
    /// Config parsed but violates its invariants
    #[error("invalid config {}: {source}", path.display())]
    Invalid {
        /// Config file
        path: PathBuf,
        /// Violated rule
        #[source]
        source: ValidationError,
    },
    /// No platform config directory
    #[error("could not determine a configuration directory for this platform")]
    NoConfigDir,
}

/// The prompting collaborator could not produce a value
#[derive(Error, Debug)]
pub enum PromptError {
    /// Input ended before a valid answer
    #[error("failed to read input")]
    Exhausted,
    /// Terminal I/O failed
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

/// Failure of the `init` flow, tagged with the step that failed
#[derive(Error, Debug)]
pub enum InitError {
    /// Step 1: storage directory could not be created
    #[error("failed to create storage directory {}: {source}", path.display())]
    Storage {
        /// Storage root
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },
    /// Step 2
    #[error("failed to load config: {0}")]
    LoadConfig(#[source] PersistenceError),
    /// Steps 3 and 4
    #[error("failed to read input: {0}")]
    Prompt(#[from] PromptError),
    /// Step 5
    #[error("{0}")]
    Precondition(#[from] PreconditionError),
    /// Step 6
    #[error("failed to create database repository: {0}")]
    Initialization(#[from] InitializationError),
    /// Step 7; the store already exists at this point
    #[error("failed to save config: {0}")]
    SaveConfig(#[source] PersistenceError),
}

impl InitError {
    /// Whether the process cannot continue in any meaningful way
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Storage { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_message_names_requirement() {
        let err = PreconditionError::NotEmpty(PathBuf::from("/tmp/db"));
        assert!(
            err.to_string()
                .contains("database path must be an empty directory")
        );
    }

    #[test]
    fn test_init_error_wraps_precondition_verbatim() {
        let err = InitError::from(PreconditionError::NotEmpty(PathBuf::from("/tmp/db")));
        assert!(err.to_string().starts_with("database path must be"));
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_storage_failure_is_fatal() {
        let err = InitError::Storage {
            path: PathBuf::from("/nope"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert!(err.is_fatal());
    }
}
