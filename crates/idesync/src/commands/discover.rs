use std::fmt::Write;
use std::path::Path;

use anyhow::Context;
use dialoguer::console::style;
use idesync_core::{IdeConfigLocator, RemoteReadError, Repository, RepositoryWalker};

pub struct Discover;

/// Counts shown after a scan
#[derive(Debug, Default)]
struct DiscoverySummary {
    repositories: usize,
    unreadable: usize,
    ide_configs: usize,
}

impl Discover {
    pub fn execute(dir: Option<&Path>, verbose: bool) -> anyhow::Result<()> {
        let base = match dir {
            Some(dir) => dir.to_path_buf(),
            None => std::env::current_dir().context("Failed to get current directory")?,
        };

        if verbose {
            println!("Executing discover command");
            println!("Base directory: {}", base.display());
        }

        if !base.is_dir() {
            eprintln!(
                "{}",
                style(format!("{} is not a directory", base.display())).red()
            );
            return Ok(());
        }

        let mut summary = DiscoverySummary::default();

        for root in RepositoryWalker::new(&base) {
            let repo = match Repository::open(&root) {
                Ok(repo) => repo,
                Err(e) => {
                    summary.unreadable += 1;
                    println!("{}", Self::format_failed_to_read_remotes(&root, &e));
                    continue;
                }
            };

            summary.repositories += 1;
            println!("{}", Self::format_repository_discovered(&repo));

            for config in IdeConfigLocator::new(&repo.root) {
                summary.ide_configs += 1;
                println!(
                    "{} IDE config found at {} ({})",
                    style("  +").blue(),
                    style(config.absolute(&repo.root).display()).blue(),
                    config.ide
                );
            }
        }

        println!("{}", Self::format_summary(&summary));
        Ok(())
    }

    fn format_repository_discovered(repo: &Repository) -> String {
        let mut output = format!(
            "{} Repository discovered at {}",
            style("✓").green(),
            style(repo.root.display()).green()
        );

        if repo.remotes.is_empty() {
            output.push_str("\n    (no remotes)");
        }
        for (name, url) in &repo.remotes {
            let _ = write!(output, "\n    {name} {url}");
        }
        if let Some(identity) = repo.identity() {
            let _ = write!(output, "\n    identity: {}", style(identity).cyan());
        }

        output
    }

    fn format_failed_to_read_remotes(root: &Path, err: &RemoteReadError) -> String {
        format!(
            "{} Failed to read remotes of {}: {}",
            style("✗").red(),
            style(root.display()).red(),
            err.source.message()
        )
    }

    fn format_summary(summary: &DiscoverySummary) -> String {
        let mut output = format!(
            "\nRepositories: {}  IDE configs: {}",
            summary.repositories, summary.ide_configs
        );
        if summary.unreadable > 0 {
            let _ = write!(output, "  Unreadable: {}", summary.unreadable);
        }
        output
    }
}
