use anyhow::Context;
use idesync_core::{AppConfig, StorageDir};

pub struct Config;

impl Config {
    pub fn execute(storage: &StorageDir, verbose: bool) -> anyhow::Result<()> {
        if verbose {
            println!("Executing config command");
        }

        let config_file = storage.config_file();
        let saved = config_file.is_file();
        let config = AppConfig::load(storage).context("Failed to load config")?;

        println!("Storage directory: {}", storage.root().display());
        if saved {
            println!("Config file:       {}", config_file.display());
        } else {
            println!(
                "Config file:       {} (not saved yet, showing defaults)",
                config_file.display()
            );
        }
        println!("Database path:     {}", config.database_path.display());
        println!("Local only:        {}", config.local_only);
        if config.database_repo_url.is_empty() {
            println!("Repository URL:    (none)");
        } else {
            println!("Repository URL:    {}", config.database_repo_url);
        }

        Ok(())
    }
}
