//! Playback state machine
//!
//! Simulates stepping through a dialogue exactly as the game engine does. A
//! [`PlaybackState`] is a per-session cursor over a read-only
//! [`DialogueDocument`]: it owns the index, the current emotion, the
//! continuation and facing flags, and a prepared copy of the current line's
//! text. Marker stripping happens on that copy, never on the shared
//! document, so any number of sessions can play one document concurrently.
//!
//! ```
//! use pelicanspeak::document::DialogueDocument;
//! use pelicanspeak::playback::PlaybackState;
//! use pelicanspeak::vocab::{CommandType, Emotion, Vocabulary};
//!
//! let vocab = Vocabulary::stardew();
//! let mut doc = DialogueDocument::new("d1", "abigail", "greeting");
//! doc.add_line(Some("Hey, you made it!"), Emotion::Happy, CommandType::None, None);
//! doc.add_line(Some("See you around."), Emotion::Neutral, CommandType::None, None);
//!
//! let mut session = PlaybackState::new(&doc, &vocab);
//! assert_eq!(session.current_text(), "Hey, you made it!");
//! session.advance();
//! assert_eq!(session.current_text(), "See you around.");
//! ```

use crate::document::DialogueDocument;
use crate::vocab::{Emotion, Vocabulary};

/// Text shown for a dialogue with no lines at all. Legacy sentinel; the
/// engine displays it regardless of cursor or finished flags.
const EMPTY_DIALOGUE_TEXT: &str = "...";

/// Per-session cursor over a dialogue document.
#[derive(Debug, Clone)]
pub struct PlaybackState<'a> {
    document: &'a DialogueDocument,
    vocab: &'a Vocabulary,
    current_index: usize,
    current_emotion: Emotion,
    emotion_explicit: bool,
    continued_on_next_screen: bool,
    dont_face_farmer: bool,
    finished: bool,
    /// Current line's text with session markers already stripped.
    prepared_text: String,
}

impl<'a> PlaybackState<'a> {
    /// Start a fresh session on line 0.
    #[must_use]
    pub fn new(document: &'a DialogueDocument, vocab: &'a Vocabulary) -> Self {
        let mut state = Self {
            document,
            vocab,
            current_index: 0,
            current_emotion: Emotion::Neutral,
            emotion_explicit: false,
            continued_on_next_screen: false,
            dont_face_farmer: false,
            finished: false,
            prepared_text: String::new(),
        };
        if !document.lines.is_empty() {
            state.prepare_current_line();
        }
        state
    }

    /// The document this session is playing.
    #[must_use]
    pub const fn document(&self) -> &'a DialogueDocument {
        self.document
    }

    /// Zero-based index of the current line.
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current_index
    }

    /// Emotion derived from the current line's embedded codes.
    #[must_use]
    pub const fn current_emotion(&self) -> Emotion {
        self.current_emotion
    }

    /// Whether the current emotion came from an explicit non-neutral code.
    #[must_use]
    pub const fn emotion_explicit(&self) -> bool {
        self.emotion_explicit
    }

    /// Whether the current line flows onto the next dialogue screen.
    #[must_use]
    pub const fn continued_on_next_screen(&self) -> bool {
        self.continued_on_next_screen
    }

    /// Whether the speaker keeps facing away from the player.
    #[must_use]
    pub const fn dont_face_farmer(&self) -> bool {
        self.dont_face_farmer
    }

    /// Whether the session has reached its end.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Portrait sprite index for the current emotion.
    #[must_use]
    pub const fn portrait_index(&self) -> usize {
        self.current_emotion.portrait_index()
    }

    /// Display text of the current line.
    ///
    /// A document with zero lines yields the `"..."` sentinel no matter what
    /// the other flags say; a finished or out-of-range cursor yields `""`.
    #[must_use]
    pub fn current_text(&self) -> String {
        if self.document.lines.is_empty() {
            return EMPTY_DIALOGUE_TEXT.to_string();
        }
        if self.finished || self.current_index >= self.document.lines.len() {
            return String::new();
        }
        self.prepared_text.clone()
    }

    /// True iff no line after the current one has non-empty (trimmed) text.
    /// Command-only lines don't count as dialogue still to show.
    #[must_use]
    pub fn is_on_final_dialogue(&self) -> bool {
        !self
            .document
            .lines
            .iter()
            .enumerate()
            .any(|(i, line)| i > self.current_index && !line.text.trim().is_empty())
    }

    /// True iff the dialogue is interactive and the cursor sits on the last
    /// line, where the player answer is collected.
    #[must_use]
    pub fn is_current_line_a_question(&self) -> bool {
        self.document.is_interactive
            && self.document.lines.len().checked_sub(1) == Some(self.current_index)
    }

    /// Step the session forward one line.
    ///
    /// Returns the text of the line being left when that line was marked as
    /// continued on the next screen; `None` tells the caller to wait for an
    /// explicit next step. Once finished, advancing is an idempotent no-op
    /// returning `None`.
    ///
    /// The finish flag is raised *before* the cursor moves when no further
    /// line has text; the cursor may still move afterward. The engine works
    /// this way and authored content depends on it.
    pub fn advance(&mut self) -> Option<String> {
        if self.finished {
            return None;
        }

        if self.is_on_final_dialogue() {
            self.finished = true;
        }
        let was_continued = self.continued_on_next_screen;
        let leaving_text = self.current_text();

        if self.current_index + 1 < self.document.lines.len() {
            self.current_index += 1;
            self.prepare_current_line();
        } else {
            self.finished = true;
        }

        if was_continued {
            Some(leaving_text)
        } else {
            None
        }
    }

    /// Recompute the session attributes for the line under the cursor:
    /// reset emotion and flags, strip one continuation marker, strip the
    /// no-turn token, then re-derive emotion from an embedded code.
    fn prepare_current_line(&mut self) {
        self.current_emotion = Emotion::Neutral;
        self.emotion_explicit = false;
        self.continued_on_next_screen = false;
        self.dont_face_farmer = false;

        let mut text = self
            .document
            .lines
            .get(self.current_index)
            .map(|line| line.text.clone())
            .unwrap_or_default();

        if let Some(marker) = self.vocab.continuation_marker()
            && let Some(pos) = text.find(marker)
        {
            text.remove(pos);
            self.continued_on_next_screen = true;
        }

        if let Some(token) = self.vocab.no_turn_token()
            && text.contains(token)
        {
            text = text.replacen(token, "", 1);
            self.dont_face_farmer = true;
        }

        for (code, entry) in self.vocab.emotions() {
            if let Some(pos) = text.find(code) {
                text.replace_range(pos..pos + code.len(), "");
                self.current_emotion = entry.tag;
                self.emotion_explicit = entry.tag != Emotion::Neutral;
                break;
            }
        }

        self.prepared_text = text;
    }
}
