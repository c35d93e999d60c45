//! Command-line interface for cidep.
//!
//! # Available Commands
//!
//! - `extract` - Report the include dependencies of specific pipeline files
//! - `scan` - Discover pipeline files under a directory and report them all
//! - `config` - Show, locate, or initialize the global configuration
//!
//! # Global Options
//!
//! - `--verbose` / `--quiet` - Log level (`debug` / `error`, default `warn`)
//! - `--config` - Path to the configuration file (`CIDEP_CONFIG_PATH`)
//! - `--platform` - Hosting platform (`CIDEP_PLATFORM`)
//! - `--endpoint` - API endpoint of the platform (`CIDEP_ENDPOINT`)
//!
//! # Example
//!
//! ```bash
//! cidep extract .gitlab-ci.yml
//! cidep --platform gitlab --endpoint https://gitlab.example.com/api/v4 scan --format json
//! cidep config init
//! ```
//!
//! Logs are written to stderr so `--format json` output on stdout stays
//! machine readable.

pub mod common;
mod config;
mod extract;
pub mod output;
mod scan;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::{GlobalConfig, Platform};
use crate::constants::{CONFIG_PATH_ENV, ENDPOINT_ENV, PLATFORM_ENV};

/// Runtime configuration for CLI execution.
///
/// Built from the parsed arguments by [`Cli::build_config`] and injected into
/// every command, so commands never read process-wide state themselves.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Filter directive for the tracing subscriber. `None` defers to
    /// `RUST_LOG`, falling back to `warn`.
    pub log_level: Option<String>,

    /// Explicit configuration file path
    pub config_path: Option<PathBuf>,

    /// Platform override
    pub platform: Option<Platform>,

    /// Endpoint override
    pub endpoint: Option<String>,
}

impl CliConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the global tracing subscriber.
    ///
    /// Safe to call more than once; later calls are no-ops.
    pub fn init_logging(&self) {
        let filter = match &self.log_level {
            Some(level) => EnvFilter::new(level),
            None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }

    /// Load the global configuration and apply the overrides.
    pub async fn load_global_config(&self) -> Result<GlobalConfig> {
        let config = GlobalConfig::load_with_optional(self.config_path.clone()).await?;
        Ok(config.with_overrides(self.platform, self.endpoint.clone()))
    }
}

/// Discover cross-project CI includes and report them as pinned dependencies.
#[derive(Parser)]
#[command(
    name = "cidep",
    about = "Report cross-project CI pipeline includes as dependencies",
    version,
    long_about = "cidep walks CI pipeline files, finds every `include` that pulls configuration from another project, and reports each one as a repository dependency pinned to its ref."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to the global configuration file
    #[arg(short, long, global = true, env = CONFIG_PATH_ENV)]
    config: Option<PathBuf>,

    /// Hosting platform of the scanned repositories
    #[arg(long, global = true, value_enum, ignore_case = true, env = PLATFORM_ENV)]
    platform: Option<Platform>,

    /// API endpoint of the hosting platform
    #[arg(long, global = true, env = ENDPOINT_ENV)]
    endpoint: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract include dependencies from pipeline files
    Extract(extract::ExtractCommand),

    /// Discover pipeline files under a directory and extract them
    Scan(scan::ScanCommand),

    /// Manage the global configuration
    Config(config::ConfigCommand),
}

impl Cli {
    /// Execute the CLI with the configuration built from its arguments.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config).await
    }

    /// Translate global flags into a [`CliConfig`].
    ///
    /// ```rust,ignore
    /// let cli = Cli::parse_from(["cidep", "--verbose", "extract", "a.yml"]);
    /// assert_eq!(cli.build_config().log_level.as_deref(), Some("debug"));
    /// ```
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            Some("error".to_string())
        } else {
            None
        };

        CliConfig {
            log_level,
            config_path: self.config.clone(),
            platform: self.platform,
            endpoint: self.endpoint.clone(),
        }
    }

    /// Execute with an injected configuration.
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        config.init_logging();

        match self.command {
            Commands::Extract(cmd) => cmd.execute(&config).await,
            Commands::Scan(cmd) => cmd.execute(&config).await,
            Commands::Config(cmd) => cmd.execute(&config).await,
        }
    }
}
