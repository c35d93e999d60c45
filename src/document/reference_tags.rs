//! Normalization of GitLab's `!reference` custom tag.
//!
//! `!reference [.setup, script]` is not understood by a plain YAML parser in a
//! way that helps include discovery. Dropping the tag leaves the flow sequence
//! behind, which parses as an ordinary list of strings.

use regex::Regex;
use std::sync::LazyLock;

static REFERENCE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!reference").expect("reference tag pattern is valid"));

/// Strip every `!reference` tag from `content`.
///
/// The transform is idempotent: applying it to its own output changes nothing.
///
/// ```rust
/// use cidep_cli::document::replace_reference_tags;
///
/// let content = "script:\n  - !reference [.setup, script]\n";
/// assert_eq!(replace_reference_tags(content), "script:\n  -  [.setup, script]\n");
/// ```
pub fn replace_reference_tags(content: &str) -> String {
    let mut normalized = REFERENCE_TAG.replace_all(content, "").into_owned();
    // removal can splice a new tag together, e.g. `!re!referenceference`
    while REFERENCE_TAG.is_match(&normalized) {
        normalized = REFERENCE_TAG.replace_all(&normalized, "").into_owned();
    }
    normalized
}
