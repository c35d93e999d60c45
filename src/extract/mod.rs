//! Top-level extraction of pipeline include dependencies.
//!
//! [`extract_package_file`] is the boundary between the infallible core (tree
//! walk and record assembly) and the fallible outside world (parsing). Every
//! failure is absorbed here: a file either yields dependencies or it yields
//! `None`.
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
//!   - local: ci/lint.yml
//! "#;
//!
//! let package_file = extract_package_file(content, &OriginContext::default()).unwrap();
//! assert_eq!(package_file.deps.len(), 1);
//! assert_eq!(package_file.deps[0].version.as_deref(), Some("v1.4.0"));
//! ```

pub mod discovery;

pub use discovery::{FilePatterns, discover_files};

use serde::Serialize;

use crate::dependency::{DependencyRecord, OriginContext, to_dependency};
use crate::document::{DocumentError, Node, load_document};
use crate::include::collect_project_includes;

/// Dependencies extracted from one pipeline file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageFile {
    pub deps: Vec<DependencyRecord>,
}

/// Extract the cross-project include dependencies of a pipeline file.
///
/// Returns `None` when the file has no project includes or cannot be parsed;
/// the two cases are deliberately indistinguishable to callers. Syntax errors
/// are logged at debug level, anything else at warn level.
pub fn extract_package_file(content: &str, origin: &OriginContext) -> Option<PackageFile> {
    package_file_from(load_document(content), origin)
}

fn package_file_from(
    parsed: Result<Node, DocumentError>,
    origin: &OriginContext,
) -> Option<PackageFile> {
    let doc = match parsed {
        Ok(doc) => doc,
        Err(err) if err.is_syntax() => {
            tracing::debug!("YAML exception extracting pipeline includes: {}", err);
            return None;
        }
        Err(err) => {
            tracing::warn!("Error extracting pipeline includes: {}", err);
            return None;
        }
    };

    let deps: Vec<DependencyRecord> = collect_project_includes(&doc)
        .iter()
        .map(|include| to_dependency(include, origin))
        .collect();

    if deps.is_empty() {
        return None;
    }
    Some(PackageFile {
        deps,
    })
}
