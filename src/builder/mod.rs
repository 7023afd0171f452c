//! Fluent dialogue authoring
//!
//! [`DialogueBuilder`] assembles a [`DialogueDocument`] step by step,
//! including the composite line kinds (conditional, chance, event,
//! question). Builders never invent document ids; they request one from an
//! injected [`IdSource`] so id allocation stays with the caller.
//!
//! ```
//! use pelicanspeak::builder::{DialogueBuilder, UuidIdSource};
//! use pelicanspeak::vocab::Emotion;
//!
//! let mut ids = UuidIdSource;
//! let doc = DialogueBuilder::new(&mut ids, "abigail", "rainy-day")
//!     .add_line("Ugh, rain again.", Emotion::Sad)
//!     .add_chance_line("At least the crops like it.", 0.4, Emotion::Happy)
//!     .add_end()
//!     .build();
//! assert_eq!(doc.line_count(), 3);
//! ```

use uuid::Uuid;

use crate::codec::LineCodec;
use crate::document::{DialogueDocument, PlayerResponseOption};
use crate::vocab::{CommandType, Emotion, Vocabulary};

/// Source of unique document identifiers.
pub trait IdSource {
    /// Produce the next unique id.
    fn next_id(&mut self) -> String;
}

/// Default [`IdSource`] backed by random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdSource;

impl IdSource for UuidIdSource {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Fluent assembler for dialogue documents.
///
/// The builder owns a private document; [`build`](Self::build) hands out a
/// deep copy, so later builder calls never mutate an already-built result.
#[derive(Debug, Clone)]
pub struct DialogueBuilder {
    document: DialogueDocument,
}

impl DialogueBuilder {
    /// Start a new document, requesting its id from `ids`.
    #[must_use]
    pub fn new(ids: &mut dyn IdSource, speaker_id: &str, name: &str) -> Self {
        let id = ids.next_id();
        tracing::debug!(%id, speaker_id, name, "starting dialogue document");
        Self {
            document: DialogueDocument::new(&id, speaker_id, name),
        }
    }

    /// Set the authoring description.
    #[must_use]
    pub fn description(mut self, description: &str) -> Self {
        self.document.description = Some(description.to_string());
        self
    }

    /// Set the translation key.
    #[must_use]
    pub fn translation_key(mut self, key: &str) -> Self {
        self.document.translation_key = Some(key.to_string());
        self
    }

    /// Append a plain text line.
    #[must_use]
    pub fn add_line(mut self, text: &str, emotion: Emotion) -> Self {
        self.document
            .add_line(Some(text), emotion, CommandType::None, None);
        self
    }

    /// Append a conditional line: shows `true_text` or `false_text`
    /// depending on the world-state condition key.
    #[must_use]
    pub fn add_conditional_line(
        mut self,
        condition: &str,
        true_text: &str,
        false_text: &str,
        emotion: Emotion,
    ) -> Self {
        let args = format!("{condition} {true_text}|{false_text}");
        self.document
            .add_line(None, emotion, CommandType::Conditional, Some(&args));
        self
    }

    /// Append a line shown with the given probability. The probability is
    /// formatted with `.` as the decimal separator regardless of locale.
    #[must_use]
    pub fn add_chance_line(mut self, text: &str, probability: f64, emotion: Emotion) -> Self {
        let args = probability.to_string();
        self.document
            .add_line(Some(text), emotion, CommandType::Chance, Some(&args));
        self
    }

    /// Append a line that fires a game event.
    #[must_use]
    pub fn add_event_line(mut self, event_id: &str, emotion: Emotion) -> Self {
        self.document
            .add_line(None, emotion, CommandType::Event, Some(event_id));
        self
    }

    /// Append a question line and mark the document interactive.
    #[must_use]
    pub fn add_question_line(mut self, id: &str, text: &str, emotion: Emotion) -> Self {
        self.document
            .add_line(Some(text), emotion, CommandType::Question, Some(id));
        self.document.is_interactive = true;
        self
    }

    /// Append a player response option.
    #[must_use]
    pub fn add_player_response(mut self, response: PlayerResponseOption) -> Self {
        self.document.add_player_response(response);
        self
    }

    /// Append a quick response.
    #[must_use]
    pub fn add_quick_response(mut self, text: &str) -> Self {
        self.document.add_quick_response(text);
        self
    }

    /// Append a command-only screen break.
    #[must_use]
    pub fn add_break(mut self) -> Self {
        self.document
            .add_line(None, Emotion::Neutral, CommandType::Break, None);
        self
    }

    /// Append a command-only dialogue end.
    #[must_use]
    pub fn add_end(mut self) -> Self {
        self.document
            .add_line(None, Emotion::Neutral, CommandType::End, None);
        self
    }

    /// Set the authoring defaults stamped onto lines added from here on,
    /// plus the dismiss-on-move flag.
    #[must_use]
    pub fn set_properties(
        mut self,
        show_portrait: bool,
        face_farmer: bool,
        remove_on_next_move: bool,
    ) -> Self {
        self.document.show_portrait = show_portrait;
        self.document.face_farmer = face_farmer;
        self.document.remove_on_next_move = remove_on_next_move;
        self
    }

    /// Produce an independent copy of the assembled document.
    #[must_use]
    pub fn build(&self) -> DialogueDocument {
        self.document.clone()
    }

    /// Encode the assembled document straight to its wire string.
    #[must_use]
    pub fn build_raw(&self, vocab: &Vocabulary) -> String {
        LineCodec::new(vocab).encode_document(&self.document)
    }
}
