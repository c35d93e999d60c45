//! Generic document tree for pipeline configuration files.
//!
//! Pipeline files are decoded by a generic YAML parser straight into
//! [`Node`], a closed recursive sum type. Everything downstream (the
//! include walker, the pipeline views) matches on `Node` exhaustively instead
//! of probing an untyped value at every call site.
//!
//! # Shape
//!
//! ```text
//! Node
//! ├── Null
//! ├── Scalar(String | Number | Bool)
//! ├── Sequence(Vec<Node>)
//! └── Mapping(string keys → Node, source order kept)
//! ```
//!
//! # Example
//!
//! ```rust
//! use cidep_cli::document::{Node, load_document};
//!
//! let doc = load_document("include:\n  project: group/repo\n").unwrap();
//! let include = doc.get("include").unwrap();
//! assert_eq!(include.get("project").and_then(Node::as_str), Some("group/repo"));
//! ```

pub mod parser;
pub mod reference_tags;

pub use parser::{DocumentError, load_document, parse_document};
pub use reference_tags::replace_reference_tags;

use serde::de::{self, Deserialize, Deserializer, EnumAccess, MapAccess, SeqAccess, VariantAccess, Visitor};
use serde_json::Value as JsonValue;
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

use crate::constants::INCLUDE_KEY;

/// A node of a parsed pipeline document.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Node {
    /// An explicit `null`, `~`, or a missing value.
    #[default]
    Null,
    /// A string, number, or boolean leaf.
    Scalar(Scalar),
    /// An ordered list of nodes.
    Sequence(Vec<Node>),
    /// A mapping with unique string keys.
    Mapping(Mapping),
}

/// Leaf values of the document tree.
///
/// Numbers are stored as the parser's rendering of the resolved value: `ref: 3`
/// becomes `"3"`, while a float such as `ref: 1.10` resolves to `"1.1"`. Quote
/// version-like refs to keep them verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    String(String),
    Number(String),
    Bool(bool),
}

impl Scalar {
    /// Textual form of the scalar.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::String(s) | Self::Number(s) => Cow::Borrowed(s),
            Self::Bool(b) => Cow::Owned(b.to_string()),
        }
    }

    /// `false`, zero, NaN, and the empty string.
    pub fn is_falsy(&self) -> bool {
        match self {
            Self::String(s) => s.is_empty(),
            Self::Number(n) => n.parse::<f64>().is_ok_and(|n| n == 0.0 || n.is_nan()),
            Self::Bool(b) => !b,
        }
    }
}

impl Node {
    /// Build a string scalar node.
    pub fn string(value: impl Into<String>) -> Self {
        Self::Scalar(Scalar::String(value.into()))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Node]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// Borrow the node as a string, only for string scalars.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Look up a key when the node is a mapping.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.as_mapping().and_then(|mapping| mapping.get(key))
    }
}

/// An insertion-ordered mapping with unique string keys.
///
/// Inserting an existing key replaces its value in place, the way YAML loaders
/// in JSON mode treat repeated keys: the last occurrence wins.
#[derive(Debug, Clone, Default)]
pub struct Mapping {
    entries: Vec<(String, Node)>,
    index: HashMap<String, usize>,
}

impl PartialEq for Mapping {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the previous value for `key` if any.
    pub fn insert(&mut self, key: impl Into<String>, value: Node) -> Option<Node> {
        let key = key.into();
        if let Some(&position) = self.index.get(&key) {
            return Some(std::mem::replace(&mut self.entries[position].1, value));
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        None
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.index.get(key).map(|&position| &self.entries[position].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in source order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&str, &Node)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// The same pipeline with its own `include` key removed.
    ///
    /// Nested mappings are kept untouched; only this level's directive goes.
    ///
    /// ```rust
    /// use cidep_cli::document::{Mapping, Node};
    ///
    /// let mut pipeline = Mapping::new();
    /// pipeline.insert("stages", Node::Sequence(vec![Node::Null, Node::Null]));
    /// pipeline.insert("include", Node::string("ci/build.yml"));
    ///
    /// let view = pipeline.without_include();
    /// assert_eq!(view.keys().collect::<Vec<_>>(), vec!["stages"]);
    /// ```
    #[must_use]
    pub fn without_include(&self) -> Mapping {
        self.entries
            .iter()
            .filter(|(key, _)| key != INCLUDE_KEY)
            .cloned()
            .collect()
    }
}

impl FromIterator<(String, Node)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (String, Node)>>(iter: I) -> Self {
        let mut mapping = Mapping::new();
        for (key, value) in iter {
            mapping.insert(key, value);
        }
        mapping
    }
}

/// Decodes straight from the parser's event stream.
///
/// Repeated mapping keys are accepted and the last one wins. Custom tags
/// (`!tag value`) are dropped and their value kept.
impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(NodeVisitor)
    }
}

struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = Node;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a YAML node")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Node, E> {
        Ok(Node::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Node, E> {
        Ok(Node::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Node, D::Error> {
        Node::deserialize(deserializer)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Node, E> {
        Ok(Node::Scalar(Scalar::Bool(v)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Node, E> {
        Ok(Node::Scalar(Scalar::Number(v.to_string())))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Node, E> {
        Ok(Node::Scalar(Scalar::Number(v.to_string())))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Node, E> {
        Ok(Node::Scalar(Scalar::Number(v.to_string())))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Node, E> {
        Ok(Node::string(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Node, E> {
        Ok(Node::string(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Node, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element::<Node>()? {
            items.push(item);
        }
        Ok(Node::Sequence(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Node, A::Error> {
        let mut mapping = Mapping::new();
        while let Some(key) = map.next_key::<Node>()? {
            match mapping_key(key) {
                Some(key) => {
                    let value = map.next_value::<Node>()?;
                    if mapping.insert(key.clone(), value).is_some() {
                        tracing::debug!("Repeated mapping key '{}', keeping the last value", key);
                    }
                }
                None => {
                    tracing::debug!("Dropping mapping entry with a non-scalar key");
                    map.next_value::<de::IgnoredAny>()?;
                }
            }
        }
        Ok(Node::Mapping(mapping))
    }

    fn visit_enum<A: EnumAccess<'de>>(self, data: A) -> Result<Node, A::Error> {
        let (_tag, value) = data.variant::<de::IgnoredAny>()?;
        value.newtype_variant::<Node>()
    }
}

/// Mapping keys are coerced to strings; complex keys cannot address anything
/// and are dropped.
fn mapping_key(key: Node) -> Option<String> {
    match key {
        Node::Scalar(Scalar::String(s) | Scalar::Number(s)) => Some(s),
        Node::Scalar(Scalar::Bool(b)) => Some(b.to_string()),
        Node::Null => Some("null".to_string()),
        Node::Sequence(_) | Node::Mapping(_) => None,
    }
}

impl From<JsonValue> for Node {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Node::Null,
            JsonValue::Bool(b) => Node::Scalar(Scalar::Bool(b)),
            JsonValue::Number(n) => Node::Scalar(Scalar::Number(n.to_string())),
            JsonValue::String(s) => Node::Scalar(Scalar::String(s)),
            JsonValue::Array(items) => Node::Sequence(items.into_iter().map(Node::from).collect()),
            JsonValue::Object(entries) => {
                Node::Mapping(entries.into_iter().map(|(k, v)| (k, Node::from(v))).collect())
            }
        }
    }
}
