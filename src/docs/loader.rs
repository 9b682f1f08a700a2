//! Loads a configuration file and extracts its documentation tree.

use std::fs;
use std::path::Path;

use crate::docs::model::Document;
use crate::error::Result;

/// Read a JSON configuration file and build the doc tree from its `docs` key.
pub fn load_document(path: &Path) -> Result<Document> {
    let content = fs::read_to_string(path)?;
    let json: serde_json::Value = serde_json::from_str(&content)?;
    Document::from_json(json)
}
