//! Manage the global cidep configuration.
//!
//! ```bash
//! cidep config init           # write an example config
//! cidep config init --force   # overwrite an existing one
//! cidep config show           # effective configuration (the default)
//! cidep config path           # where the config file lives
//! ```

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use super::CliConfig;
use crate::config::GlobalConfig;

/// Command to manage the global configuration file.
#[derive(Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    command: Option<ConfigSubcommands>,
}

#[derive(Subcommand)]
enum ConfigSubcommands {
    /// Write an example configuration file
    ///
    /// Refuses to overwrite an existing file unless `--force` is given.
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Show the effective configuration, overrides included
    Show,

    /// Print the configuration file location
    Path,
}

impl ConfigCommand {
    pub async fn execute(self, config: &CliConfig) -> Result<()> {
        let path = match &config.config_path {
            Some(path) => path.clone(),
            None => GlobalConfig::default_path()?,
        };

        match self.command {
            Some(ConfigSubcommands::Init {
                force,
            }) => Self::init(force, path).await,
            Some(ConfigSubcommands::Show) | None => Self::show(config, path).await,
            Some(ConfigSubcommands::Path) => {
                println!("{}", path.display());
                Ok(())
            }
        }
    }

    async fn init(force: bool, path: PathBuf) -> Result<()> {
        if path.exists() && !force {
            println!("❌ Config already exists at: {}", path.display());
            println!("   Use --force to overwrite");
            return Ok(());
        }

        let example = GlobalConfig::example();
        example.save_to(&path).await?;
        tracing::info!("Wrote example config to {}", path.display());

        println!("✅ Created config at: {}", path.display());
        println!("\n{}", "Example configuration:".bold());
        println!("{}", toml::to_string_pretty(&example)?);
        println!("{}", "Next steps:".yellow());
        println!("  Point 'endpoint' at your GitLab instance's API, e.g. https://gitlab.example.com/api/v4/");

        Ok(())
    }

    async fn show(config: &CliConfig, path: PathBuf) -> Result<()> {
        let global = config.load_global_config().await?;

        println!("{}", "Configuration".bold());
        println!("Location: {}{}\n", path.display(), if path.exists() { "" } else { " (not found)" });
        println!("platform = {}", global.platform.map_or("(unset)".to_string(), |p| p.to_string()));
        println!("endpoint = {}", global.endpoint.as_deref().unwrap_or("(unset)"));
        println!("file_patterns = {:?}", global.file_patterns);

        match global.origin_context().registry_url() {
            Some(url) => println!("\nIncludes resolve against: {}", url.green()),
            None => println!("\nIncludes resolve against the datasource default registry"),
        }

        Ok(())
    }
}
