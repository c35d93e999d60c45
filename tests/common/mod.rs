//! Common helpers for cidep integration tests

// Not every helper is used by every test module
#![allow(dead_code)]

use anyhow::Result;
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub use cidep_cli::test_utils::PipelineFixture;

/// A scratch repository with its own isolated cidep configuration.
pub struct TestProject {
    _temp_dir: TempDir, // Keep alive for RAII cleanup
    project_dir: PathBuf,
    config_path: PathBuf,
}

impl TestProject {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().join("project");
        let config_path = temp_dir.path().join(".cidep").join("config.toml");
        fs::create_dir_all(&project_dir)?;

        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
            config_path,
        })
    }

    pub fn project_path(&self) -> &Path {
        &self.project_dir
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Write a file relative to the project directory
    pub fn write_file(&self, relative: &str, content: &str) -> Result<PathBuf> {
        let path = self.project_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Write a fixture relative to the project directory
    pub fn write_fixture(&self, relative: &str, fixture: &PipelineFixture) -> Result<PathBuf> {
        fixture.write_to(&self.project_dir, relative)
    }

    pub fn write_config(&self, content: &str) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.config_path, content)?;
        Ok(())
    }

    /// A `cidep` command running in the project directory with an isolated
    /// config file and no platform settings inherited from the environment.
    pub fn cidep(&self) -> Command {
        let mut cmd = Command::cargo_bin("cidep").unwrap();
        cmd.current_dir(&self.project_dir)
            .env("CIDEP_CONFIG_PATH", &self.config_path)
            .env_remove("CIDEP_PLATFORM")
            .env_remove("CIDEP_ENDPOINT")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1");
        cmd
    }

    /// Run a command expected to succeed and parse its stdout as JSON
    pub fn run_json(&self, args: &[&str]) -> serde_json::Value {
        let output = self.cidep().args(args).output().unwrap();
        assert!(
            output.status.success(),
            "Command failed\nStderr: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).unwrap()
    }
}
