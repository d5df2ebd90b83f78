use std::process::ExitCode;

use dialoguer::console::style;
use idesync_core::{GitStoreInitializer, InitFlow, StorageDir};

use crate::interactive::TerminalPrompter;

pub struct Init;

impl Init {
    /// Run the init flow against the terminal
    ///
    /// Flow failures print one line and exit non-zero. An unusable storage
    /// directory is returned as an error instead, since nothing else can run.
    pub fn execute(storage: &StorageDir, verbose: bool) -> anyhow::Result<ExitCode> {
        if verbose {
            println!("Executing init command");
            println!("Storage directory: {}", storage.root().display());
        }

        tracing::debug!("using storage directory {}", storage.root().display());

        let mut prompter = TerminalPrompter::new();
        let initializer = GitStoreInitializer::new();

        match InitFlow::new(storage, &mut prompter, &initializer).run() {
            Ok(outcome) => {
                println!(
                    "{}",
                    style(format!(
                        "Database repository created at {}",
                        outcome.store.path().display()
                    ))
                    .green()
                );
                Ok(ExitCode::SUCCESS)
            }
            Err(e) if e.is_fatal() => Err(e.into()),
            Err(e) => {
                eprintln!("{}", style(e).red());
                Ok(ExitCode::FAILURE)
            }
        }
    }
}
