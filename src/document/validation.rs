//! Structural validation for dialogue documents

use super::DialogueDocument;
use crate::vocab::CommandType;

/// Result of document validation.
///
/// Validation never throws and never stops at the first problem; every
/// violation found is accumulated so the caller can choose severity.
#[derive(Clone, Debug)]
pub struct ValidationReport {
    /// Whether the document is structurally valid.
    pub is_valid: bool,
    /// Every violation found.
    pub errors: Vec<String>,
}

/// Validate a document's structure.
///
/// A document is structurally valid iff id, speaker id, and name are
/// non-empty, it has at least one line, and every line either has non-empty
/// text or carries a command.
#[must_use]
pub fn validate_document(doc: &DialogueDocument) -> ValidationReport {
    let mut errors = Vec::new();

    if doc.id.is_empty() {
        errors.push("document id is empty".to_string());
    }
    if doc.speaker_id.is_empty() {
        errors.push("speaker id is empty".to_string());
    }
    if doc.name.is_empty() {
        errors.push("document name is empty".to_string());
    }
    if doc.lines.is_empty() {
        errors.push("document has no lines".to_string());
    }

    for (index, line) in doc.lines.iter().enumerate() {
        if line.text.is_empty() && line.command_type == CommandType::None {
            errors.push(format!("line {index} has neither text nor a command"));
        }
    }

    ValidationReport {
        is_valid: errors.is_empty(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::Emotion;

    #[test]
    fn valid_document_passes() {
        let mut doc = DialogueDocument::new("d1", "abigail", "greeting");
        doc.add_line(Some("Hi."), Emotion::Neutral, CommandType::None, None);
        let report = validate_document(&doc);
        assert!(report.is_valid);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn violations_accumulate_instead_of_failing_fast() {
        let mut doc = DialogueDocument::new("", "", "");
        doc.add_line(None, Emotion::Neutral, CommandType::None, None);
        let report = validate_document(&doc);
        assert!(!report.is_valid);
        // id, speaker, name, and the empty line are all reported at once.
        assert_eq!(report.errors.len(), 4);
    }

    #[test]
    fn command_only_line_is_valid() {
        let mut doc = DialogueDocument::new("d1", "abigail", "greeting");
        doc.add_line(None, Emotion::Neutral, CommandType::End, None);
        assert!(validate_document(&doc).is_valid);
    }

    #[test]
    fn empty_line_list_is_reported() {
        let doc = DialogueDocument::new("d1", "abigail", "greeting");
        let report = validate_document(&doc);
        assert!(!report.is_valid);
        assert_eq!(report.errors, vec!["document has no lines".to_string()]);
    }
}
