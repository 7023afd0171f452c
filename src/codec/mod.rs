//! Line codec for the dialogue mini-language
//!
//! Converts between structured [`DialogueLine`]s and the raw annotated
//! strings the game's dialogue engine consumes. One segment looks like
//! `EMOTION_CODE? COMMAND_CODE? ARGS? TEXT`; a full dialogue is segments
//! joined by the vocabulary's delimiter:
//!
//! ```
//! use pelicanspeak::codec::LineCodec;
//! use pelicanspeak::vocab::{CommandType, Emotion, Vocabulary};
//!
//! let vocab = Vocabulary::stardew();
//! let codec = LineCodec::new(&vocab);
//!
//! let decoded = codec.decode_line("$h Nice weather, huh?");
//! assert_eq!(decoded.line.emotion, Emotion::Happy);
//! assert_eq!(decoded.line.text, "Nice weather, huh?");
//! assert_eq!(decoded.line.command_type, CommandType::None);
//! ```

mod decode;
mod encode;

pub use decode::DecodedLine;

use crate::document::{DialogueDocument, DialogueLine};
use crate::vocab::Vocabulary;

/// Encoder/decoder for dialogue lines, driven entirely by an injected
/// [`Vocabulary`].
#[derive(Debug, Clone, Copy)]
pub struct LineCodec<'v> {
    vocab: &'v Vocabulary,
}

impl<'v> LineCodec<'v> {
    /// Create a codec over the given vocabulary.
    #[must_use]
    pub const fn new(vocab: &'v Vocabulary) -> Self {
        Self { vocab }
    }

    /// Encode one line as a raw annotated segment.
    #[must_use]
    pub fn encode_line(&self, line: &DialogueLine) -> String {
        encode::encode_line(self.vocab, line)
    }

    /// Encode a whole document as a delimiter-joined wire string.
    #[must_use]
    pub fn encode_document(&self, doc: &DialogueDocument) -> String {
        encode::encode_document(self.vocab, doc)
    }

    /// Decode one raw segment. Total: never fails, unknown codes pass
    /// through into the text.
    #[must_use]
    pub fn decode_line(&self, raw: &str) -> DecodedLine {
        decode::decode_line(self.vocab, raw)
    }

    /// Decode a wire string into its segments, skipping empty ones.
    #[must_use]
    pub fn decode_segments(&self, raw: &str) -> Vec<DecodedLine> {
        decode::decode_segments(self.vocab, raw)
    }

    /// Decode a wire string into a fresh document. The wire format carries
    /// no identity, so the caller supplies id, speaker, and name.
    #[must_use]
    pub fn decode_document(
        &self,
        raw: &str,
        id: &str,
        speaker_id: &str,
        name: &str,
    ) -> DialogueDocument {
        let mut doc = DialogueDocument::new(id, speaker_id, name);
        for decoded in self.decode_segments(raw) {
            doc.lines.push(decoded.line);
        }
        doc
    }
}
