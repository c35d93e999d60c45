//! Dependency records produced from project includes.
//!
//! A [`DependencyRecord`] carries what a downstream datasource client needs to
//! look up the latest tag of the referenced repository: the datasource, the
//! project path, the current pin, and optionally the registry to query. No
//! lookup happens here.
//!
//! # JSON Output Example
//!
//! ```json
//! {
//!   "datasource": "gitlab-tags",
//!   "name": "group/templates",
//!   "type": "repository",
//!   "version": "v1.4.0",
//!   "registryUrls": ["https://gitlab.example.com"]
//! }
//! ```

pub mod assembler;

pub use assembler::{OriginContext, registry_url_from_endpoint, to_dependency};

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{GITLAB_TAGS_DATASOURCE, REPOSITORY_DEP_TYPE, UNKNOWN_VERSION};

/// Why a dependency cannot be updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkipReason {
    /// The include does not pin a `ref`, so there is no current version.
    UnknownVersion,
}

impl SkipReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UnknownVersion => UNKNOWN_VERSION,
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One external repository referenced by a pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyRecord {
    /// Resolution strategy, always [`GITLAB_TAGS_DATASOURCE`]
    pub datasource: String,
    /// Project path, verbatim from the include
    pub name: String,
    /// Always [`REPOSITORY_DEP_TYPE`]
    #[serde(rename = "type")]
    pub dep_type: String,
    /// The pinned ref
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_reason: Option<SkipReason>,
    /// Registry to resolve against; unset means the datasource default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry_urls: Option<Vec<String>>,
}

impl DependencyRecord {
    /// A repository record for `name` with no version information yet.
    pub fn repository(name: impl Into<String>) -> Self {
        Self {
            datasource: GITLAB_TAGS_DATASOURCE.to_string(),
            name: name.into(),
            dep_type: REPOSITORY_DEP_TYPE.to_string(),
            version: None,
            skip_reason: None,
            registry_urls: None,
        }
    }

    pub fn is_skipped(&self) -> bool {
        self.skip_reason.is_some()
    }
}
