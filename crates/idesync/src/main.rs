mod cli;
mod commands;
mod interactive;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
use idesync_core::StorageDir;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<ExitCode> {
    // Set up Ctrl+C handler for graceful interruption
    ctrlc::set_handler(|| {
        eprintln!("\n\nInterrupted by user (Ctrl+C)");
        std::process::exit(130); // Standard exit code for SIGINT
    })
    .context("Failed to set Ctrl+C handler")?;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.verbose {
        println!("Verbose mode enabled");
    }

    match &cli.command {
        Commands::Discover { dir } => {
            commands::Discover::execute(dir.as_deref(), cli.verbose)
                .context("Failed to execute discover command")?;
        }
        Commands::Init => {
            let storage = StorageDir::resolve(cli.home.as_deref())
                .context("Failed to locate storage directory")?;
            return commands::Init::execute(&storage, cli.verbose)
                .context("Failed to execute init command");
        }
        Commands::Config => {
            let storage = StorageDir::resolve(cli.home.as_deref())
                .context("Failed to locate storage directory")?;
            commands::Config::execute(&storage, cli.verbose)
                .context("Failed to execute config command")?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Log to stderr; `RUST_LOG` wins over the `--verbose` default
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
