//! The `init` flow
//!
//! Steps run in order and the first failure ends the flow:
//! 1. ensure the storage directory exists
//! 2. load the current config (defaults if none)
//! 3. ask for the database path and local-only mode
//! 4. in remote-tracked mode, ask for the repository URL
//! 5. require the database path to be missing or an empty directory
//! 6. create the store from the path or by cloning the URL
//! 7. save the config
//!
//! A save failure in step 7 leaves the store in place. The path is then
//! non-empty and a rerun stops at step 5 until the user clears it.

mod prompt;


use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use url::Url;

pub use prompt::{Prompter, Question, ScriptedPrompter};

use crate::config::{AppConfig, StorageDir};
use crate::error::{InitError, PreconditionError};
use crate::fsutil;
use crate::store::{Store, StoreInitializer};
use crate::validation::{parse_database_path, parse_yes_no, validate_repository_url};

/// Result of a successful `init`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitOutcome {
    /// The created store
    pub store: Store,
    /// The config as it was saved
    pub config: AppConfig,
}

/// Collected answers for steps 3 and 4
#[derive(Debug, Clone, PartialEq, Eq)]
enum StoreSource {
    LocalOnly,
    /// URL as the user typed it, and its parsed form
    Remote(String, Url),
}

/// Orchestrates the `init` command
pub struct InitFlow<'a, P, S> {
    storage: &'a StorageDir,
    prompter: &'a mut P,
    initializer: &'a S,
}

impl<'a, P: Prompter, S: StoreInitializer> InitFlow<'a, P, S> {
    /// Flow over the given storage, input source and store initializer
    pub fn new(storage: &'a StorageDir, prompter: &'a mut P, initializer: &'a S) -> Self {
        Self {
            storage,
            prompter,
            initializer,
        }
    }

    /// Run every step, stopping at the first error
    pub fn run(self) -> Result<InitOutcome, InitError> {
        self.storage
            .ensure()
            .map_err(|source| InitError::Storage {
                path: self.storage.root().to_path_buf(),
                source,
            })?;

        let mut config = AppConfig::load(self.storage).map_err(InitError::LoadConfig)?;

        let database_path = self.prompter.prompt(
            &Question::new("Where should the configurations be stored?")
                .with_default(config.database_path.display().to_string()),
            &parse_database_path,
        )?;
        config.database_path = absolute_database_path(&database_path)?;

        let local_only = self.prompter.prompt(&local_only_question(), &parse_yes_no)?;

        let source = if local_only {
            StoreSource::LocalOnly
        } else {
            let mut question = Question::new("Enter the database repository URL");
            if !config.database_repo_url.is_empty() {
                question = question.with_default(config.database_repo_url.clone());
            }
            let (raw, url) = self.prompter.prompt(&question, &|input: &str| {
                validate_repository_url(input).map(|url| (input.trim().to_string(), url))
            })?;
            StoreSource::Remote(raw, url)
        };

        config.local_only = local_only;
        config.database_repo_url = match &source {
            StoreSource::LocalOnly => String::new(),
            StoreSource::Remote(raw, _) => raw.clone(),
        };

        prepare_database_path(&config.database_path)?;

        let store = match &source {
            StoreSource::LocalOnly => self.initializer.initialize_from_path(&config.database_path)?,
            StoreSource::Remote(_, url) => self
                .initializer
                .initialize_from_url(url, &config.database_path)?,
        };
        info!("database repository created at {}", store.path().display());

        config.save(self.storage).map_err(InitError::SaveConfig)?;

        Ok(InitOutcome { store, config })
    }
}

/// `[y/N]` is part of the text; empty input already parses as "no"
fn local_only_question() -> Question {
    Question::new("Do you want to use local only mode? [y/N]")
}

/// Anchor a relative answer to the current directory before it is persisted
fn absolute_database_path(path: &Path) -> Result<PathBuf, PreconditionError> {
    std::path::absolute(path).map_err(|source| PreconditionError::Inspect {
        path: path.to_path_buf(),
        source,
    })
}

/// Make sure `path` can receive a fresh store
///
/// A missing path is created. An existing path must be an empty directory.
///
/// # Errors
///
/// Returns [`PreconditionError`] if the path holds anything or cannot be
/// created.
pub fn prepare_database_path(path: &Path) -> Result<(), PreconditionError> {
    let inspect = |source| PreconditionError::Inspect {
        path: path.to_path_buf(),
        source,
    };

    if !fsutil::exists(path).map_err(inspect)? {
        debug!("creating database path {}", path.display());
        return fs::create_dir_all(path).map_err(|source| PreconditionError::Create {
            path: path.to_path_buf(),
            source,
        });
    }

    if !path.is_dir() {
        return Err(PreconditionError::NotADirectory(path.to_path_buf()));
    }
    if !fsutil::is_directory_empty(path).map_err(inspect)? {
        return Err(PreconditionError::NotEmpty(path.to_path_buf()));
    }

    Ok(())
}
