//! Discovery of pipeline files under a directory tree.

use regex::Regex;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::CidepError;

/// Compiled file-name patterns selecting pipeline files.
#[derive(Debug, Clone)]
pub struct FilePatterns {
    patterns: Vec<Regex>,
}

impl FilePatterns {
    /// Compile `patterns`, failing on the first invalid regex.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self, CidepError> {
        let patterns = patterns
            .iter()
            .map(|pattern| {
                Regex::new(pattern.as_ref()).map_err(|e| CidepError::InvalidFilePattern {
                    pattern: pattern.as_ref().to_string(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            patterns,
        })
    }

    /// Whether a path (relative, `/`-separated) matches any pattern.
    pub fn matches(&self, relative_path: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(relative_path))
    }
}

/// Find pipeline files below `root`, sorted by path.
///
/// `.git` directories are skipped and symlinks are not followed. Patterns are
/// matched against the path relative to `root` with `/` separators, so
/// `^ci/` style anchors behave the same on every platform.
pub fn discover_files(root: &Path, patterns: &FilePatterns) -> Result<Vec<PathBuf>, CidepError> {
    if !root.exists() {
        return Err(CidepError::PathNotFound {
            path: root.display().to_string(),
        });
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| entry.file_name() != ".git");

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!("Skipping unreadable entry during discovery: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        let relative = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        if patterns.matches(&relative) {
            tracing::debug!("Discovered pipeline file: {}", relative);
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}
