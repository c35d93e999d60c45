//! Global configuration management for cidep.
//!
//! The global configuration file (`~/.cidep/config.toml`) tells cidep where the
//! scanned repositories are hosted and which files to scan.
//!
//! # File Format
//!
//! ```toml
//! # Hosting platform of the scanned repositories
//! platform = "gitlab"
//!
//! # API endpoint of that platform; "/api/v4" is stripped for registry URLs
//! endpoint = "https://gitlab.example.com/api/v4/"
//!
//! # Regexes matched against paths relative to the scanned directory
//! file_patterns = ['\.gitlab-ci\.ya?ml$', '^ci/.*\.ya?ml$']
//! ```
//!
//! # Layering
//!
//! 1. Built-in defaults
//! 2. The configuration file
//! 3. Explicit overrides ([`GlobalConfig::with_overrides`]), which the CLI fills
//!    from `--platform`/`--endpoint` or `CIDEP_PLATFORM`/`CIDEP_ENDPOINT`

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tokio::fs;

use crate::constants::DEFAULT_FILE_PATTERN;
use crate::dependency::OriginContext;
use crate::extract::FilePatterns;

/// Hosting platform of the scanned repositories.
///
/// Only [`Platform::Gitlab`] resolves project includes, so it is the only
/// platform whose endpoint is attached to dependency records.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Gitlab,
    Github,
    Bitbucket,
    Gitea,
    Azure,
    /// Any platform cidep has no special handling for
    #[serde(other)]
    Other,
}

impl Platform {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gitlab => "gitlab",
            Self::Github => "github",
            Self::Bitbucket => "bitbucket",
            Self::Gitea => "gitea",
            Self::Azure => "azure",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = std::convert::Infallible;

    /// Case-insensitive; unknown names parse as [`Platform::Other`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "gitlab" => Self::Gitlab,
            "github" => Self::Github,
            "bitbucket" => Self::Bitbucket,
            "gitea" => Self::Gitea,
            "azure" => Self::Azure,
            _ => Self::Other,
        })
    }
}

fn default_file_patterns() -> Vec<String> {
    vec![DEFAULT_FILE_PATTERN.to_string()]
}

fn is_default_file_patterns(patterns: &[String]) -> bool {
    patterns == default_file_patterns().as_slice()
}

/// Global configuration loaded from `~/.cidep/config.toml`.
///
/// # Examples
///
/// ```rust
/// use cidep_cli::config::{GlobalConfig, Platform};
///
/// let config = GlobalConfig::default()
///     .with_overrides(Some(Platform::Gitlab), Some("https://gitlab.example.com/api/v4".to_string()));
///
/// let origin = config.origin_context();
/// assert!(origin.is_known_platform);
/// assert_eq!(origin.registry_url().as_deref(), Some("https://gitlab.example.com"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Hosting platform, unset when unknown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,

    /// API endpoint of the platform
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Regexes selecting pipeline files during `cidep scan`
    #[serde(
        default = "default_file_patterns",
        skip_serializing_if = "is_default_file_patterns"
    )]
    pub file_patterns: Vec<String>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            platform: None,
            endpoint: None,
            file_patterns: default_file_patterns(),
        }
    }
}

impl GlobalConfig {
    /// Load from the default location, or defaults if the file is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined, or the
    /// file exists but cannot be read or parsed.
    pub async fn load() -> Result<Self> {
        Self::load_with_optional(None).await
    }

    /// Load from `path` if given, otherwise from the default location.
    ///
    /// A missing file yields the default configuration.
    pub async fn load_with_optional(path: Option<PathBuf>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None => Self::default_path()?,
        };
        if path.exists() {
            Self::load_from(&path).await
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML for
    /// this structure.
    pub async fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read global config from {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse global config from {}", path.display()))
    }

    /// Write the configuration as pretty TOML, creating parent directories.
    pub async fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize global config")?;

        fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write global config to {}", path.display()))
    }

    /// Platform-specific default location of the configuration file.
    ///
    /// - **Windows**: `%LOCALAPPDATA%\cidep\config.toml`
    /// - **Unix/macOS**: `~/.cidep/config.toml`
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "windows") {
            dirs::data_local_dir()
                .ok_or_else(|| anyhow::anyhow!("Unable to determine local data directory"))?
                .join("cidep")
        } else {
            dirs::home_dir()
                .ok_or_else(|| anyhow::anyhow!("Unable to determine home directory"))?
                .join(".cidep")
        };

        Ok(config_dir.join("config.toml"))
    }

    /// Apply explicit overrides on top of the loaded values.
    #[must_use]
    pub fn with_overrides(mut self, platform: Option<Platform>, endpoint: Option<String>) -> Self {
        if platform.is_some() {
            self.platform = platform;
        }
        if endpoint.is_some() {
            self.endpoint = endpoint;
        }
        self
    }

    /// The origin handed to the dependency assembler.
    pub fn origin_context(&self) -> OriginContext {
        OriginContext::new(
            self.platform == Some(Platform::Gitlab),
            self.endpoint.clone().filter(|e| !e.is_empty()),
        )
    }

    /// Compile the configured file patterns.
    pub fn file_patterns(&self) -> Result<FilePatterns, crate::core::CidepError> {
        FilePatterns::new(&self.file_patterns)
    }

    /// The configuration written by `cidep config init`.
    pub fn example() -> Self {
        Self {
            platform: Some(Platform::Gitlab),
            endpoint: Some("https://gitlab.com/api/v4/".to_string()),
            file_patterns: default_file_patterns(),
        }
    }
}
