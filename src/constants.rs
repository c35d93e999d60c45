//! Global constants used throughout the cidep codebase.
//!
//! Identifiers stamped on every dependency record, the reserved document key,
//! and the environment variables read by the configuration layer live here so
//! they are discoverable from one place.

/// Datasource identifier telling downstream lookups to list the tags of a
/// Git repository hosted on GitLab.
pub const GITLAB_TAGS_DATASOURCE: &str = "gitlab-tags";

/// Dependency type recorded for every cross-project include.
pub const REPOSITORY_DEP_TYPE: &str = "repository";

/// Skip reason attached when an include does not pin a `ref`.
pub const UNKNOWN_VERSION: &str = "unknown-version";

/// Mapping key that carries include directives.
pub const INCLUDE_KEY: &str = "include";

/// Default pattern for pipeline files picked up by `cidep scan`.
pub const DEFAULT_FILE_PATTERN: &str = r"\.gitlab-ci\.ya?ml$";

/// Overrides the location of the global configuration file.
pub const CONFIG_PATH_ENV: &str = "CIDEP_CONFIG_PATH";

/// Overrides the configured hosting platform.
pub const PLATFORM_ENV: &str = "CIDEP_PLATFORM";

/// Overrides the configured API endpoint.
pub const ENDPOINT_ENV: &str = "CIDEP_ENDPOINT";
