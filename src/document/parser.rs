//! Parsing raw pipeline text into a [`Node`] tree.
//!
//! Failures are classified so the extraction boundary can tell a malformed
//! file (expected, logged quietly) apart from anything else.

use thiserror::Error;

use super::{Node, replace_reference_tags};

/// Why a pipeline document could not be turned into a [`Node`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DocumentError {
    /// The source text is not valid YAML.
    #[error("Invalid YAML at line {line}, column {column}: {message}")]
    Syntax {
        /// Parser message
        message: String,
        /// 1-based line of the failure
        line: usize,
        /// 1-based column of the failure
        column: usize,
    },

    /// The parser failed without pointing at a location in the source.
    #[error("Unexpected error loading document: {message}")]
    Unexpected {
        /// Parser message
        message: String,
    },
}

impl DocumentError {
    /// Whether this failure is a syntax error in the source text.
    pub fn is_syntax(&self) -> bool {
        matches!(self, Self::Syntax { .. })
    }
}

impl From<serde_yaml::Error> for DocumentError {
    fn from(err: serde_yaml::Error) -> Self {
        match err.location() {
            Some(location) => Self::Syntax {
                message: err.to_string(),
                line: location.line(),
                column: location.column(),
            },
            None => Self::Unexpected {
                message: err.to_string(),
            },
        }
    }
}

/// Parse YAML (or JSON, which is a YAML subset) into a document tree.
///
/// Empty input parses to [`Node::Null`]. Repeated mapping keys are accepted,
/// the last one wins.
pub fn parse_document(content: &str) -> Result<Node, DocumentError> {
    if content.trim().is_empty() {
        return Ok(Node::Null);
    }
    Ok(serde_yaml::from_str::<Node>(content)?)
}

/// Normalize custom tags, then parse.
pub fn load_document(content: &str) -> Result<Node, DocumentError> {
    parse_document(&replace_reference_tags(content))
}
