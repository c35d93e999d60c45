//! Integration test suite for cidep
//!
//! End-to-end tests running the `cidep` binary against scratch repositories.
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **extract**: `cidep extract` on explicit files
//! - **scan**: `cidep scan` discovery and reporting
//! - **config**: `cidep config` and configuration layering
//! - **error_scenarios**: Exit codes and user-facing error messages

#[path = "../common/mod.rs"]
mod common;

mod config;
mod error_scenarios;
mod extract;
mod scan;
