//! Include directive classification and discovery.
//!
//! A pipeline's `include` key holds one entry or a list of entries. Each entry
//! is decoded once into [`IncludeEntry`]; only [`ProjectInclude`] entries point
//! at another repository and therefore become dependencies.
//!
//! ```yaml
//! include:
//!   - local: ci/lint.yml                 # LocalInclude
//!   - project: group/templates           # ProjectInclude
//!     ref: v1.4.0
//!     file: [build.yml, deploy.yml]
//!   - remote: https://example.com/ci.yml # Other
//!   - ci/shorthand.yml                   # Other
//! ```

pub mod walker;

pub use walker::{collect_include_entries, collect_project_includes};

use crate::document::Node;

/// An include that pulls configuration from another project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInclude {
    /// Full path of the target project, e.g. `group/subgroup/repo`
    pub project: String,
    /// Branch, tag, or commit pin. `None` when the key is absent, null, or
    /// falsy (`false`, `0`, `''`).
    pub ref_name: Option<String>,
    /// Files included from the project, in declaration order
    pub files: Vec<String>,
}

/// An include of a file from the same repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalInclude {
    pub local: String,
}

/// A classified entry of an `include` directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncludeEntry {
    Local(LocalInclude),
    Project(ProjectInclude),
    /// Remote, template, and shorthand includes, or anything malformed
    Other,
}

impl IncludeEntry {
    /// Classify a single include entry.
    ///
    /// A mapping with a scalar `project` field is a project include even if it
    /// also carries `local`. Bare strings are shorthand includes and are not
    /// treated as project references.
    pub fn classify(node: &Node) -> Self {
        let Some(mapping) = node.as_mapping() else {
            return Self::Other;
        };

        if let Some(project) = mapping.get("project") {
            return match project.as_scalar() {
                Some(project) => Self::Project(ProjectInclude {
                    project: project.as_text().into_owned(),
                    ref_name: mapping
                        .get("ref")
                        .and_then(Node::as_scalar)
                        .filter(|r| !r.is_falsy())
                        .map(|r| r.as_text().into_owned()),
                    files: mapping.get("file").map(file_list).unwrap_or_default(),
                }),
                None => Self::Other,
            };
        }

        match mapping.get("local").and_then(Node::as_scalar) {
            Some(local) => Self::Local(LocalInclude {
                local: local.as_text().into_owned(),
            }),
            None => Self::Other,
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, Self::Local(_))
    }

    pub fn is_project(&self) -> bool {
        matches!(self, Self::Project(_))
    }

    /// Consume the entry, keeping it only if it is a project include.
    pub fn into_project(self) -> Option<ProjectInclude> {
        match self {
            Self::Project(project) => Some(project),
            _ => None,
        }
    }
}

/// `file` accepts a single path or a list of paths.
fn file_list(node: &Node) -> Vec<String> {
    match node {
        Node::Scalar(file) => vec![file.as_text().into_owned()],
        Node::Sequence(items) => items
            .iter()
            .filter_map(Node::as_scalar)
            .map(|file| file.as_text().into_owned())
            .collect(),
        Node::Null | Node::Mapping(_) => Vec::new(),
    }
}
