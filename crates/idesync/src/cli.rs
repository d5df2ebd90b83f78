use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// IDE Configuration Synchronization Tool
///
/// Discover IDE settings folders across local repositories and keep them in a git-backed store
#[derive(Parser, Debug)]
#[command(name = "idesync")]
#[command(about, long_about = None, version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Override the storage directory (default: platform config dir)
    #[arg(long, global = true, value_name = "PATH", env = "IDESYNC_HOME")]
    pub home: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Discover IDE config folders in repositories below a directory
    Discover {
        /// The directory to search for repositories. Defaults to the current working directory.
        #[arg(short, long, value_name = "PATH")]
        dir: Option<PathBuf>,
    },

    /// Initialize the database repository that stores synced configs
    Init,

    /// Show the storage location and persisted settings
    Config,
}
