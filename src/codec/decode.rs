//! Dialogue line decoding
//!
//! Decode is total: any input produces a line, unrecognized codes simply
//! stay in the text. Emotion detection scans the whole segment while command
//! detection only tests the prefix; this asymmetry matches the game engine
//! and means decode is deliberately NOT the inverse of encode (an emotion
//! code in front hides the command code from the prefix check). Existing
//! authored content depends on that behavior, so it stays.

use crate::document::DialogueLine;
use crate::vocab::{CommandType, Emotion, Vocabulary};

/// A decoded line plus detection detail the line struct doesn't carry.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedLine {
    /// The decoded line.
    pub line: DialogueLine,
    /// Whether a non-neutral emotion code was actually present.
    pub emotion_explicit: bool,
}

pub(super) fn decode_line(vocab: &Vocabulary, raw: &str) -> DecodedLine {
    // Emotion: first table entry found anywhere in the segment wins.
    let mut emotion = Emotion::Neutral;
    let mut emotion_explicit = false;
    for (code, entry) in vocab.emotions() {
        if entry.match_kind.matches(raw, code) {
            emotion = entry.tag;
            emotion_explicit = entry.tag != Emotion::Neutral;
            break;
        }
    }

    // Command: first table entry matching the segment prefix wins.
    let mut command_type = CommandType::None;
    let mut command_code: Option<&str> = None;
    for (code, entry) in vocab.commands() {
        if entry.match_kind.matches(raw, code) {
            command_type = entry.tag;
            command_code = Some(code);
            break;
        }
    }

    // Arguments: everything after the command code, minus one leading
    // emotion code if present.
    let command_args = command_code.and_then(|code| {
        let start = raw.find(code)? + code.len();
        let mut rest = &raw[start..];
        for (emotion_code, _) in vocab.emotions() {
            if rest.starts_with(emotion_code) {
                rest = &rest[emotion_code.len()..];
                break;
            }
        }
        Some(rest.to_string())
    });

    let text = clean_text(vocab, raw);

    DecodedLine {
        line: DialogueLine {
            text,
            emotion,
            command_type,
            command_args,
            show_portrait: true,
            face_farmer: true,
            continued_on_next_screen: false,
        },
        emotion_explicit,
    }
}

/// Derive display text from a raw segment: strip at most one leading command
/// code, then at most one leading emotion code, then every special token and
/// special character occurrence, then trim.
fn clean_text(vocab: &Vocabulary, raw: &str) -> String {
    let mut text = raw.to_string();

    for (code, _) in vocab.commands() {
        if text.starts_with(code) {
            text.replace_range(..code.len(), "");
            break;
        }
    }
    for (code, _) in vocab.emotions() {
        if text.starts_with(code) {
            text.replace_range(..code.len(), "");
            break;
        }
    }
    for (code, _) in vocab.special_tokens() {
        if text.contains(code) {
            text = text.replace(code, "");
        }
    }
    for (code, _) in vocab.special_characters() {
        if text.contains(code) {
            text = text.replace(code, "");
        }
    }

    text.trim().to_string()
}

/// Split a wire string on the segment delimiter and decode each non-empty
/// segment.
pub(super) fn decode_segments(vocab: &Vocabulary, raw: &str) -> Vec<DecodedLine> {
    tracing::debug!(len = raw.len(), "decoding dialogue string");
    raw.split(vocab.segment_delimiter())
        .filter(|segment| !segment.is_empty())
        .map(|segment| decode_line(vocab, segment))
        .collect()
}
