//! Turning project includes into dependency records.

use regex::Regex;
use std::sync::LazyLock;

use super::{DependencyRecord, SkipReason};
use crate::include::ProjectInclude;

static API_VERSION_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/?api/v4/?$").expect("API suffix pattern is valid"));

/// Where the scanned pipeline is hosted, as far as registry URLs are concerned.
///
/// Built from [`GlobalConfig::origin_context`](crate::config::GlobalConfig::origin_context)
/// and passed explicitly; the assembler never reads process-wide state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OriginContext {
    /// The active platform is the one includes resolve against
    pub is_known_platform: bool,
    /// API base URL of that platform, e.g. `https://gitlab.example.com/api/v4/`
    pub endpoint: Option<String>,
}

impl OriginContext {
    pub fn new(is_known_platform: bool, endpoint: Option<String>) -> Self {
        Self {
            is_known_platform,
            endpoint,
        }
    }

    /// Registry URL to stamp on records, if the origin pins one.
    pub fn registry_url(&self) -> Option<String> {
        if !self.is_known_platform {
            return None;
        }
        self.endpoint.as_deref().map(registry_url_from_endpoint)
    }
}

/// Strip a trailing `api/v4` segment from an API endpoint.
///
/// ```rust
/// use cidep_cli::dependency::registry_url_from_endpoint;
///
/// assert_eq!(registry_url_from_endpoint("https://gitlab.example.com/api/v4/"), "https://gitlab.example.com");
/// assert_eq!(registry_url_from_endpoint("https://gitlab.example.com"), "https://gitlab.example.com");
/// ```
pub fn registry_url_from_endpoint(endpoint: &str) -> String {
    API_VERSION_SUFFIX.replace(endpoint, "").into_owned()
}

/// Build the dependency record for one project include.
///
/// An absent or empty `ref` marks the record with
/// [`SkipReason::UnknownVersion`] and leaves `version` unset.
pub fn to_dependency(entry: &ProjectInclude, origin: &OriginContext) -> DependencyRecord {
    let mut dep = DependencyRecord::repository(&entry.project);

    match entry.ref_name.as_deref().filter(|r| !r.is_empty()) {
        Some(ref_name) => dep.version = Some(ref_name.to_string()),
        None => {
            tracing::debug!("Include of project '{}' has no ref", entry.project);
            dep.skip_reason = Some(SkipReason::UnknownVersion);
        }
    }

    dep.registry_urls = origin.registry_url().map(|url| vec![url]);
    dep
}
