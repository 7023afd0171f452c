//! Document deserialization

use std::fs;
use std::path::Path;

use crate::document::DialogueDocument;
use crate::error::Result;

/// Parse a document from its JSON form.
pub fn deserialize_document(json: &str) -> Result<DialogueDocument> {
    Ok(serde_json::from_str(json)?)
}

/// Read a document from a JSON file.
pub fn read_document<P: AsRef<Path>>(path: P) -> Result<DialogueDocument> {
    tracing::info!(path = %path.as_ref().display(), "reading document");
    let json = fs::read_to_string(path)?;
    deserialize_document(&json)
}
