//! # idesync-core
//!
//! Core library for IDE Configuration Synchronization.
//!
//! This library provides the pieces the `idesync` binary composes:
//! - discovery of git repositories under a base directory and their remotes
//! - location of IDE configuration folders inside each repository
//! - bootstrap of the git-backed store that holds synced configurations
//! - load/save of the tool's own persisted settings

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Error types for every failure class the core can report
pub mod error;

/// Filesystem existence and emptiness primitives
pub mod fsutil;

/// Input validation for URLs, yes/no answers and paths
pub mod validation;

/// Repository discovery and remote identity
pub mod discovery;

/// IDE configuration folder location
pub mod ide;

/// Backing store creation
pub mod store;

/// Persisted application configuration
pub mod config;

/// The `init` flow that ties prompting, store creation and config together
pub mod bootstrap;

pub use bootstrap::{InitFlow, InitOutcome, Prompter, Question, ScriptedPrompter};
pub use config::{AppConfig, StorageDir};
pub use discovery::{Remotes, Repository, RepositoryIdentity, RepositoryWalker, read_remotes};
pub use error::{
    InitError, InitializationError, PersistenceError, PreconditionError, PromptError,
    RemoteReadError, ValidationError,
};
pub use ide::{IdeConfigLocator, IdeConfigPath, IdeKind};
pub use store::{GitStoreInitializer, Store, StoreInitializer};
