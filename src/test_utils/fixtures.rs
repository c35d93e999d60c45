//! Sample pipeline files.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A named pipeline file used in tests.
#[derive(Clone, Debug)]
pub struct PipelineFixture {
    pub name: String,
    pub content: String,
}

impl PipelineFixture {
    fn new(name: &str, content: &str) -> Self {
        Self {
            name: name.to_string(),
            content: content.trim_start().to_string(),
        }
    }

    /// Project includes with and without a ref, plus ignored kinds
    pub fn mixed() -> Self {
        Self::new(
            "mixed",
            r#"
include:
  - project: group/templates
    ref: v1.4.0
    file:
      - /build.yml
      - /lint.yml
  - project: group/unpinned
    file: /deploy.yml
  - local: /ci/test.yml
  - remote: https://example.com/ci.yml
  - template: Auto-DevOps.gitlab-ci.yml

stages: [build, test]
"#,
        )
    }

    /// Includes nested inside jobs, mixed with top-level ones
    pub fn nested() -> Self {
        Self::new(
            "nested",
            r#"
build:
  include:
    project: group/inner
    ref: '2.0'
include:
  project: group/outer
  ref: main
"#,
        )
    }

    /// `!reference` tags next to a pinned include
    pub fn with_reference_tags() -> Self {
        Self::new(
            "with_reference_tags",
            r#"
.setup:
  script:
    - echo setup

test:
  script:
    - !reference [.setup, script]
    - cargo test

include:
  - project: group/templates
    ref: v2.0.0
    file: /test.yml
"#,
        )
    }

    /// Only local includes
    pub fn local_only() -> Self {
        Self::new(
            "local_only",
            r#"
include:
  - local: /ci/build.yml
  - local: /ci/test.yml
"#,
        )
    }

    /// Unterminated flow sequence
    pub fn malformed() -> Self {
        Self::new(
            "malformed",
            r#"
include:
  - project: group/templates
    ref: [v1
"#,
        )
    }

    /// Write the fixture to `dir/file_name`, creating parent directories.
    pub fn write_to(&self, dir: &Path, file_name: &str) -> Result<PathBuf> {
        let path = dir.join(file_name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&path, &self.content)
            .with_context(|| format!("Failed to write fixture {}", self.name))?;
        Ok(path)
    }
}
