//! cidep - CI pipeline include dependency extractor
//!
//! Reads GitLab CI pipeline files, finds every `include` that pulls
//! configuration from another project, and reports each one as a repository
//! dependency pinned to the included `ref`, ready for an automated updater to
//! track.
//!
//! # Architecture Overview
//!
//! Extraction is a straight pipeline over one file's text:
//!
//! 1. [`document`] rewrites `!reference` tags into plain sequences and parses
//!    the text into a [`Node`](document::Node) tree
//! 2. [`include`] walks that tree and collects every `include` entry,
//!    classifying each as local, project, or other
//! 3. [`dependency`] turns each project include into a
//!    [`DependencyRecord`](dependency::DependencyRecord)
//! 4. [`extract`] ties the steps together and turns parse failures into "no
//!    dependencies"
//!
//! # Core Modules
//!
//! - [`cli`] - Command-line interface (`extract`, `scan`, `config`)
//! - [`config`] - Global configuration (`~/.cidep/config.toml`)
//! - [`constants`] - Datasource names and other fixed values
//! - [`core`] - Error types and user-facing error formatting
//! - [`dependency`] - Dependency records and their assembly
//! - [`document`] - YAML document model, parsing and tag preprocessing
//! - [`extract`] - Per-file extraction and pipeline file discovery
//! - [`include`] - Include entry classification and tree walking
//!
//! # Example
//!
//! ```rust
//! use cidep_cli::dependency::OriginContext;
//! use cidep_cli::extract::extract_package_file;
//!
//! let content = r#"
//! include:
//!   - project: group/templates
//!     ref: v1.4.0
//!     file: /build.yml
//!   - local: /ci/test.yml
//! "#;
//!
//! let package_file = extract_package_file(content, &OriginContext::default()).unwrap();
//! assert_eq!(package_file.deps.len(), 1);
//! assert_eq!(package_file.deps[0].name, "group/templates");
//! assert_eq!(package_file.deps[0].version.as_deref(), Some("v1.4.0"));
//! ```
//!
//! # Pipeline File Format
//!
//! ```yaml
//! include:
//!   - project: group/templates      # reported, version v1.4.0
//!     ref: v1.4.0
//!     file: [/build.yml, /lint.yml]
//!   - project: group/other          # reported, skipped: unknown-version
//!   - local: /ci/test.yml           # ignored
//!   - remote: https://example.com/ci.yml  # ignored
//!
//! test:
//!   script:
//!     - !reference [.setup, script]
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod dependency;
pub mod document;
pub mod extract;
pub mod include;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
