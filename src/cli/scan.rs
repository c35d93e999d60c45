//! Discover pipeline files under a directory and extract them all.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use super::CliConfig;
use super::common::{extract_reports, read_pipeline_files};
use super::output::{OutputFormat, render};
use crate::extract::{FilePatterns, discover_files};

/// Command to scan a directory tree for pipeline files.
#[derive(Args)]
pub struct ScanCommand {
    /// Directory to scan
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// File pattern (regex on the relative path); replaces the configured
    /// patterns, may be repeated
    #[arg(long = "pattern", value_name = "REGEX")]
    pub patterns: Vec<String>,

    /// Output format: text or json
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl ScanCommand {
    pub async fn execute(self, config: &CliConfig) -> Result<()> {
        let global = config.load_global_config().await?;
        let origin = global.origin_context();

        let patterns = if self.patterns.is_empty() {
            global.file_patterns()?
        } else {
            FilePatterns::new(&self.patterns)?
        };

        let dir = self.dir.clone();
        let paths = tokio::task::spawn_blocking(move || discover_files(&dir, &patterns))
            .await
            .context("File discovery task failed")??;
        tracing::info!("Discovered {} pipeline file(s) under {}", paths.len(), self.dir.display());

        let files = read_pipeline_files(&paths, Some(&self.dir)).await?;
        let reports = extract_reports(&files, &origin);

        println!("{}", render(&reports, &self.format)?);
        Ok(())
    }
}
