//! Document serialization

use std::fs;
use std::path::Path;

use crate::document::DialogueDocument;
use crate::error::Result;

/// Serialize a document to pretty-printed JSON, field for field, in
/// declaration order.
pub fn serialize_document(doc: &DialogueDocument) -> Result<String> {
    Ok(serde_json::to_string_pretty(doc)?)
}

/// Write a document to a JSON file.
pub fn write_document<P: AsRef<Path>>(doc: &DialogueDocument, path: P) -> Result<()> {
    tracing::info!(path = %path.as_ref().display(), id = %doc.id, "writing document");
    let json = serialize_document(doc)?;
    fs::write(path, json)?;
    Ok(())
}
