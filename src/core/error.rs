//! Error handling for cidep
//!
//! Extraction itself never fails: malformed pipelines simply yield no
//! dependencies. The errors here cover everything around it, such as reading
//! files, loading configuration, and compiling discovery patterns.
//!
//! - [`CidepError`] - Enumerated failure cases
//! - [`ErrorContext`] - Wrapper adding details and a suggestion for CLI users
//! - [`user_friendly_error`] - Convert any [`anyhow::Error`] into an [`ErrorContext`]
//!
//! # Example
//!
//! ```rust,no_run
//! use cidep_cli::core::{CidepError, user_friendly_error};
//!
//! let err = anyhow::Error::from(CidepError::PathNotFound {
//!     path: "ci/missing.yml".to_string(),
//! });
//! user_friendly_error(err).display();
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for cidep operations
#[derive(Error, Debug)]
pub enum CidepError {
    /// Configuration file content is invalid
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the problem
        message: String,
    },

    /// A pipeline file could not be read
    #[error("Failed to read {path}: {reason}")]
    FileReadError {
        /// Path of the file
        path: String,
        /// Underlying I/O message
        reason: String,
    },

    /// A file or directory given on the command line does not exist
    #[error("Path not found: {path}")]
    PathNotFound {
        /// The missing path
        path: String,
    },

    /// A discovery pattern is not a valid regular expression
    #[error("Invalid file pattern '{pattern}': {reason}")]
    InvalidFilePattern {
        /// The offending pattern
        pattern: String,
        /// Regex compiler message
        reason: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// Anything else
    #[error("{message}")]
    Other {
        /// Error message
        message: String,
    },
}

/// Error with user-facing details and an actionable suggestion.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: CidepError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    #[must_use]
    pub const fn new(error: CidepError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error to stderr: error in red, details in yellow, suggestion
    /// in green.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`].
///
/// Recognizes [`CidepError`], [`std::io::Error`] and [`toml::de::Error`]
/// anywhere in the cause chain; everything else is reported with its full
/// chain as details.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    let error = match error.downcast::<ErrorContext>() {
        Ok(context) => return context,
        Err(error) => error,
    };
    let error = match error.downcast::<CidepError>() {
        Ok(cidep_error) => return create_error_context(cidep_error),
        Err(error) => error,
    };

    for cause in error.chain() {
        if let Some(io_error) = cause.downcast_ref::<std::io::Error>() {
            let context = ErrorContext::new(CidepError::Other {
                message: error.to_string(),
            });
            return match io_error.kind() {
                std::io::ErrorKind::NotFound => context
                    .with_details(io_error.to_string())
                    .with_suggestion("Check that the file or directory exists and the path is correct"),
                std::io::ErrorKind::PermissionDenied => context
                    .with_details(io_error.to_string())
                    .with_suggestion("Check file permissions or run from a directory you can read"),
                _ => context.with_details(io_error.to_string()),
            };
        }

        if let Some(toml_error) = cause.downcast_ref::<toml::de::Error>() {
            return ErrorContext::new(CidepError::ConfigError {
                message: error.to_string(),
            })
            .with_details(toml_error.message().to_string())
            .with_suggestion("Fix the TOML syntax in your cidep configuration file");
        }
    }

    let details = error.chain().skip(1).map(ToString::to_string).collect::<Vec<_>>();
    let context = ErrorContext::new(CidepError::Other {
        message: error.to_string(),
    });
    if details.is_empty() {
        context
    } else {
        context.with_details(details.join(": "))
    }
}

fn create_error_context(error: CidepError) -> ErrorContext {
    match &error {
        CidepError::ConfigError { .. } | CidepError::TomlError(_) => {
            ErrorContext::new(error).with_suggestion(format!(
                "Check your configuration file, or point {} at another one",
                crate::constants::CONFIG_PATH_ENV
            ))
        }
        CidepError::FileReadError { .. } => ErrorContext::new(error)
            .with_suggestion("Check that the file exists and is readable"),
        CidepError::PathNotFound { .. } => ErrorContext::new(error)
            .with_suggestion("Check the path, it is resolved relative to the current directory"),
        CidepError::InvalidFilePattern { .. } => ErrorContext::new(error)
            .with_details("File patterns are regular expressions matched against paths relative to the scanned directory")
            .with_suggestion("Escape literal dots, e.g. '\\.gitlab-ci\\.ya?ml$'"),
        CidepError::IoError(_) | CidepError::Other { .. } => ErrorContext::new(error),
    }
}
