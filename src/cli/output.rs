//! Rendering extraction results as text or JSON.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use crate::dependency::DependencyRecord;

/// Output format for extraction results.
#[derive(Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing grouped by file
    Text,

    /// A JSON array of `{ "packageFile", "deps" }` objects
    Json,
}

/// Dependencies of one pipeline file, as reported to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageFileReport {
    pub package_file: String,
    pub deps: Vec<DependencyRecord>,
}

/// Render reports in the requested format.
pub fn render(reports: &[PackageFileReport], format: &OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(reports).context("Failed to serialize dependencies")
        }
        OutputFormat::Text => Ok(render_text(reports)),
    }
}

fn render_text(reports: &[PackageFileReport]) -> String {
    if reports.is_empty() {
        return "No include dependencies found".to_string();
    }

    let mut lines = Vec::new();
    for report in reports {
        lines.push(report.package_file.bold().to_string());
        for dep in &report.deps {
            lines.push(format!("  {}", render_dep(dep)));
        }
    }

    let total: usize = reports.iter().map(|r| r.deps.len()).sum();
    lines.push(String::new());
    lines.push(format!("{} dependencies in {} file(s)", total, reports.len()));
    lines.join("\n")
}

fn render_dep(dep: &DependencyRecord) -> String {
    let version = match (&dep.version, dep.skip_reason) {
        (Some(version), _) => version.green().to_string(),
        (None, Some(reason)) => format!("({reason})").yellow().to_string(),
        (None, None) => "-".dimmed().to_string(),
    };

    let mut line = format!("{} @ {}", dep.name.cyan(), version);
    if let Some(urls) = &dep.registry_urls {
        line.push_str(&format!("  [{}]", urls.join(", ")));
    }
    line
}
