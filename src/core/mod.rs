//! Core types for cidep
//!
//! Error handling shared by the configuration layer and the CLI:
//! - [`CidepError`] - Strongly-typed failure cases
//! - [`ErrorContext`] - User-friendly wrapper with details and suggestions
//! - [`user_friendly_error`] - Convert any error for CLI display
//!
//! The extraction core (`document`, `include`, `dependency`, `extract`) does
//! not return these errors. It degrades to "no dependencies" instead.
//!
//! # Example
//!
//! ```rust
//! use cidep_cli::core::{CidepError, ErrorContext};
//!
//! let context = ErrorContext::new(CidepError::PathNotFound {
//!     path: ".gitlab-ci.yml".to_string(),
//! })
//! .with_suggestion("Run cidep from the repository root");
//!
//! assert!(context.to_string().contains("Suggestion: Run cidep from the repository root"));
//! ```

pub mod error;

pub use error::{CidepError, ErrorContext, user_friendly_error};
