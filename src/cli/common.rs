//! Shared plumbing for commands that extract pipeline files.

use anyhow::Result;
use futures::future::join_all;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::core::CidepError;
use crate::dependency::OriginContext;
use crate::extract::extract_package_file;

use super::output::PackageFileReport;

/// A pipeline file read from disk.
#[derive(Debug, Clone)]
pub struct PipelineFile {
    /// Path used to read the file
    pub path: PathBuf,
    /// Path shown to the user
    pub display_path: String,
    pub content: String,
}

/// Read every file concurrently, failing on the first unreadable one.
///
/// `display_root` is stripped from the displayed paths when given.
pub async fn read_pipeline_files(
    paths: &[PathBuf],
    display_root: Option<&Path>,
) -> Result<Vec<PipelineFile>> {
    let reads = paths.iter().map(|path| async move {
        let content = fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CidepError::PathNotFound {
                    path: path.display().to_string(),
                }
            } else {
                CidepError::FileReadError {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                }
            }
        })?;
        Ok::<_, CidepError>(PipelineFile {
            path: path.clone(),
            display_path: display_path(path, display_root),
            content,
        })
    });

    let mut files = Vec::with_capacity(paths.len());
    for result in join_all(reads).await {
        files.push(result?);
    }
    Ok(files)
}

/// Extract every file, keeping only those with dependencies.
pub fn extract_reports(files: &[PipelineFile], origin: &OriginContext) -> Vec<PackageFileReport> {
    files
        .iter()
        .filter_map(|file| {
            let package_file = extract_package_file(&file.content, origin);
            match &package_file {
                Some(package_file) => tracing::debug!(
                    "{}: {} dependencies, {} without a pinned ref",
                    file.display_path,
                    package_file.deps.len(),
                    package_file.deps.iter().filter(|dep| dep.is_skipped()).count()
                ),
                None => tracing::debug!("No include dependencies in {}", file.display_path),
            }
            package_file.map(|package_file| PackageFileReport {
                package_file: file.display_path.clone(),
                deps: package_file.deps,
            })
        })
        .collect()
}

fn display_path(path: &Path, root: Option<&Path>) -> String {
    let shown = root.and_then(|root| path.strip_prefix(root).ok()).unwrap_or(path);
    shown
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
