//! Dialogue line encoding

use crate::document::{DialogueDocument, DialogueLine};
use crate::vocab::{CommandType, Emotion, Vocabulary};

/// Encode one line as `EMOTION_CODE? COMMAND_CODE? ARGS? TEXT`.
///
/// Tags with no code in the vocabulary are skipped with a warning rather
/// than failing; encode stays total like decode.
pub(super) fn encode_line(vocab: &Vocabulary, line: &DialogueLine) -> String {
    let mut raw = String::new();

    if line.emotion != Emotion::Neutral {
        match vocab.emotion_code(line.emotion) {
            Some(code) => raw.push_str(code),
            None => tracing::warn!(emotion = line.emotion.as_str(), "no code for emotion"),
        }
    }

    if line.command_type != CommandType::None {
        match vocab.command_code(line.command_type) {
            Some(code) => {
                raw.push_str(code);
                if let Some(args) = &line.command_args {
                    raw.push_str(args);
                }
            }
            None => tracing::warn!(command = line.command_type.as_str(), "no code for command"),
        }
    }

    raw.push_str(&line.text);
    raw
}

/// Encode a whole document as delimiter-joined segments.
pub(super) fn encode_document(vocab: &Vocabulary, doc: &DialogueDocument) -> String {
    tracing::debug!(id = %doc.id, lines = doc.lines.len(), "encoding document");
    let delimiter = vocab.segment_delimiter();
    let segments: Vec<String> = doc
        .lines
        .iter()
        .map(|line| encode_line(vocab, line))
        .collect();
    segments.join(&delimiter.to_string())
}
