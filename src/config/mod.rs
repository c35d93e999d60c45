//! Configuration management for cidep
//!
//! cidep reads a single user-wide configuration file that describes the
//! hosting platform of the scanned repositories and which files count as
//! pipeline files.
//!
//! # Configuration Priority
//!
//! 1. Command-line flags (`--platform`, `--endpoint`, `--config`)
//! 2. Environment variables (`CIDEP_PLATFORM`, `CIDEP_ENDPOINT`, `CIDEP_CONFIG_PATH`)
//! 3. Global configuration (`~/.cidep/config.toml`)
//! 4. Default values
//!
//! # Example
//!
//! ```rust,no_run
//! use cidep_cli::config::GlobalConfig;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = GlobalConfig::load().await?;
//! let origin = config.origin_context();
//! println!("Registry URL: {:?}", origin.registry_url());
//! # Ok(())
//! # }
//! ```

mod global;

pub use global::{GlobalConfig, Platform};
