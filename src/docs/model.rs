//! Typed configuration doc tree
//!
//! Converts parsed JSON into a closed set of node variants once, up front, so
//! the renderer can match exhaustively instead of re-checking JSON types.

use serde_json::Value;

use crate::error::{DocgenError, Result};

/// Top-level key holding the documentation tree.
pub const DOCS_KEY: &str = "docs";

/// Reserved key stripped from the root before rendering.
pub const RESERVED_KEY: &str = "description";

/// Variant of a [`ConfigNode`], used by the renderer's sibling tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Section,
    Description,
    Verbatim,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Section => "section",
            NodeKind::Description => "description",
            NodeKind::Verbatim => "verbatim",
        }
    }
}

/// A node in the documentation tree.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigNode {
    /// Nested grouping, rendered as a heading plus its children.
    Section(Section),
    /// Leaf string, rendered as a single bullet.
    Description(String),
    /// Leaf list of strings, rendered as raw lines.
    Verbatim(Vec<String>),
}

impl ConfigNode {
    pub fn kind(&self) -> NodeKind {
        match self {
            ConfigNode::Section(_) => NodeKind::Section,
            ConfigNode::Description(_) => NodeKind::Description,
            ConfigNode::Verbatim(_) => NodeKind::Verbatim,
        }
    }

    /// Convert a parsed JSON value into a node.
    ///
    /// `path` is the dotted key path used in error messages. Anything other
    /// than an object, a string, or an array of strings is rejected.
    pub fn from_value(value: Value, path: &str) -> Result<ConfigNode> {
        match value {
            Value::Object(map) => Ok(ConfigNode::Section(Section::from_object(map, path)?)),
            Value::String(text) => Ok(ConfigNode::Description(text)),
            Value::Array(items) => {
                let mut lines = Vec::with_capacity(items.len());
                for (i, item) in items.into_iter().enumerate() {
                    match item {
                        Value::String(line) => lines.push(line),
                        other => {
                            return Err(DocgenError::UnsupportedValue {
                                path: format!("{path}[{i}]"),
                                found: json_type_name(&other),
                            })
                        }
                    }
                }
                Ok(ConfigNode::Verbatim(lines))
            }
            other => Err(DocgenError::UnsupportedValue {
                path: path.to_string(),
                found: json_type_name(&other),
            }),
        }
    }
}

/// Ordered children of a section. Key order matches the source document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Section {
    entries: Vec<(String, ConfigNode)>,
}

impl Section {
    pub fn entries(&self) -> impl Iterator<Item = (&str, &ConfigNode)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    fn from_object(map: serde_json::Map<String, Value>, path: &str) -> Result<Section> {
        let mut entries = Vec::with_capacity(map.len());
        for (key, value) in map {
            let child_path = format!("{path}.{key}");
            let node = ConfigNode::from_value(value, &child_path)?;
            entries.push((key, node));
        }
        Ok(Section { entries })
    }
}

/// The documentation tree extracted from a parsed configuration file.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub root: Section,
}

impl Document {
    /// Extract the `docs` tree from a parsed configuration document.
    ///
    /// The reserved root-level `description` key is removed before
    /// conversion, whatever its value type; nested `description` keys are
    /// ordinary entries.
    pub fn from_json(root: Value) -> Result<Document> {
        let docs = match root {
            Value::Object(mut map) => map.remove(DOCS_KEY).ok_or_else(|| {
                DocgenError::MissingDocs("top-level `docs` key not found".to_string())
            })?,
            other => {
                return Err(DocgenError::MissingDocs(format!(
                    "expected a top-level object, found {}",
                    json_type_name(&other)
                )))
            }
        };

        let mut docs = match docs {
            Value::Object(map) => map,
            other => {
                return Err(DocgenError::MissingDocs(format!(
                    "`docs` must be an object, found {}",
                    json_type_name(&other)
                )))
            }
        };
        docs.remove(RESERVED_KEY);

        let root = Section::from_object(docs, DOCS_KEY)?;
        Ok(Document { root })
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
