//! Extract include dependencies from explicitly named pipeline files.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::CliConfig;
use super::common::{extract_reports, read_pipeline_files};
use super::output::{OutputFormat, render};

/// Command to extract dependencies from pipeline files.
///
/// Files that fail to parse report no dependencies; files that cannot be read
/// fail the command.
#[derive(Args)]
pub struct ExtractCommand {
    /// Pipeline files to extract
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Output format: text or json
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl ExtractCommand {
    pub async fn execute(self, config: &CliConfig) -> Result<()> {
        let global = config.load_global_config().await?;
        let origin = global.origin_context();

        let files = read_pipeline_files(&self.files, None).await?;
        let reports = extract_reports(&files, &origin);
        tracing::info!("Extracted {} of {} file(s)", reports.len(), files.len());

        println!("{}", render(&reports, &self.format)?);
        Ok(())
    }
}
