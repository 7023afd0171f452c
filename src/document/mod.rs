//! Dialogue documents
//!
//! A [`DialogueDocument`] is stable authored content: an ordered list of
//! [`DialogueLine`]s plus speaker metadata, player responses, and quick
//! responses. The per-session playback cursor lives in
//! [`PlaybackState`](crate::playback::PlaybackState), never on the document,
//! so any number of sessions can read one document at the same time.

mod types;
mod validation;

pub use types::{DialogueDocument, DialogueLine, PlayerResponseOption};
pub use validation::{ValidationReport, validate_document};

impl DialogueDocument {
    /// Validate the document's structure, accumulating every violation.
    #[must_use]
    pub fn validate(&self) -> ValidationReport {
        validation::validate_document(self)
    }
}
