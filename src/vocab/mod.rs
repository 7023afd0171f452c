//! Control-code vocabulary table
//!
//! The dialogue mini-language is driven by short literal codes (`$h`, `$b`,
//! `%spouse`, ...) that the game engine owns. This module keeps those
//! literals out of the codec: a [`Vocabulary`] is an ordered, injectable
//! lookup between code strings and semantic tags, and everything else in the
//! crate takes one by reference. [`Vocabulary::stardew`] ships the standard
//! Stardew Valley table.
//!
//! Entry order matters: detection walks each family in insertion order and
//! stops at the first hit, so insertion order is priority order.

mod stardew;
mod tags;

pub use tags::{CommandType, Emotion, SpecialCharacterType, SpecialTokenType};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// How a control code is detected inside a raw dialogue string.
///
/// The engine is asymmetric on purpose: emotion codes are found anywhere in
/// the string while command codes must sit at the front. The table records
/// the kind per entry so that asymmetry is data, not code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchKind {
    /// The code must appear at the start of the string.
    Prefix,
    /// The code may appear anywhere in the string.
    Substring,
}

impl MatchKind {
    /// Test `haystack` for `code` under this match kind.
    #[must_use]
    pub fn matches(self, haystack: &str, code: &str) -> bool {
        match self {
            MatchKind::Prefix => haystack.starts_with(code),
            MatchKind::Substring => haystack.contains(code),
        }
    }
}

/// A `(tag, match kind)` pair; the code string is the table key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeEntry<T> {
    /// What the code means.
    pub tag: T,
    /// How the code is detected.
    pub match_kind: MatchKind,
}

/// Ordered lookup between control-code strings and semantic tags.
///
/// Four code families plus the wire-format characters the host engine owns
/// (segment delimiter, continuation marker). Pure data; the codec and the
/// playback state machine interpret it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vocabulary {
    emotions: IndexMap<String, CodeEntry<Emotion>>,
    commands: IndexMap<String, CodeEntry<CommandType>>,
    special_characters: IndexMap<String, CodeEntry<SpecialCharacterType>>,
    special_tokens: IndexMap<String, CodeEntry<SpecialTokenType>>,
    segment_delimiter: char,
}

impl Vocabulary {
    /// Create an empty table with the given segment delimiter.
    #[must_use]
    pub fn new(segment_delimiter: char) -> Self {
        Self {
            emotions: IndexMap::new(),
            commands: IndexMap::new(),
            special_characters: IndexMap::new(),
            special_tokens: IndexMap::new(),
            segment_delimiter,
        }
    }

    /// The standard Stardew Valley table.
    #[must_use]
    pub fn stardew() -> Self {
        stardew::build()
    }

    /// Register an emotion code. Insertion order is detection priority.
    #[must_use]
    pub fn with_emotion(mut self, code: &str, tag: Emotion, match_kind: MatchKind) -> Self {
        self.emotions
            .insert(code.to_string(), CodeEntry { tag, match_kind });
        self
    }

    /// Register a command code. Insertion order is detection priority.
    #[must_use]
    pub fn with_command(mut self, code: &str, tag: CommandType, match_kind: MatchKind) -> Self {
        self.commands
            .insert(code.to_string(), CodeEntry { tag, match_kind });
        self
    }

    /// Register a special character code.
    #[must_use]
    pub fn with_special_character(
        mut self,
        code: &str,
        tag: SpecialCharacterType,
        match_kind: MatchKind,
    ) -> Self {
        self.special_characters
            .insert(code.to_string(), CodeEntry { tag, match_kind });
        self
    }

    /// Register a special token code.
    #[must_use]
    pub fn with_special_token(
        mut self,
        code: &str,
        tag: SpecialTokenType,
        match_kind: MatchKind,
    ) -> Self {
        self.special_tokens
            .insert(code.to_string(), CodeEntry { tag, match_kind });
        self
    }

    /// Emotion entries in priority order.
    pub fn emotions(&self) -> impl Iterator<Item = (&str, &CodeEntry<Emotion>)> {
        self.emotions.iter().map(|(code, e)| (code.as_str(), e))
    }

    /// Command entries in priority order.
    pub fn commands(&self) -> impl Iterator<Item = (&str, &CodeEntry<CommandType>)> {
        self.commands.iter().map(|(code, e)| (code.as_str(), e))
    }

    /// Special character entries in priority order.
    pub fn special_characters(
        &self,
    ) -> impl Iterator<Item = (&str, &CodeEntry<SpecialCharacterType>)> {
        self.special_characters
            .iter()
            .map(|(code, e)| (code.as_str(), e))
    }

    /// Special token entries in priority order.
    pub fn special_tokens(&self) -> impl Iterator<Item = (&str, &CodeEntry<SpecialTokenType>)> {
        self.special_tokens
            .iter()
            .map(|(code, e)| (code.as_str(), e))
    }

    /// The code string for an emotion, if the table has one.
    #[must_use]
    pub fn emotion_code(&self, emotion: Emotion) -> Option<&str> {
        self.emotions
            .iter()
            .find(|(_, e)| e.tag == emotion)
            .map(|(code, _)| code.as_str())
    }

    /// The code string for a command, if the table has one.
    #[must_use]
    pub fn command_code(&self, command: CommandType) -> Option<&str> {
        self.commands
            .iter()
            .find(|(_, e)| e.tag == command)
            .map(|(code, _)| code.as_str())
    }

    /// Character that separates line segments in the wire format.
    #[must_use]
    pub const fn segment_delimiter(&self) -> char {
        self.segment_delimiter
    }

    /// First character of the code tagged [`SpecialCharacterType::Continuation`].
    #[must_use]
    pub fn continuation_marker(&self) -> Option<char> {
        self.special_characters
            .iter()
            .find(|(_, e)| e.tag == SpecialCharacterType::Continuation)
            .and_then(|(code, _)| code.chars().next())
    }

    /// The code tagged [`SpecialTokenType::NoTurn`].
    #[must_use]
    pub fn no_turn_token(&self) -> Option<&str> {
        self.special_tokens
            .iter()
            .find(|(_, e)| e.tag == SpecialTokenType::NoTurn)
            .map(|(code, _)| code.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_order_is_priority_order() {
        let vocab = Vocabulary::new('#')
            .with_emotion("$h", Emotion::Happy, MatchKind::Substring)
            .with_emotion("$s", Emotion::Sad, MatchKind::Substring);

        let codes: Vec<&str> = vocab.emotions().map(|(code, _)| code).collect();
        assert_eq!(codes, vec!["$h", "$s"]);
    }

    #[test]
    fn reverse_lookup_finds_first_entry() {
        let vocab = Vocabulary::stardew();
        assert_eq!(vocab.emotion_code(Emotion::Happy), Some("$h"));
        assert_eq!(vocab.command_code(CommandType::GameStateQuery), Some("$query"));
        assert_eq!(vocab.command_code(CommandType::None), None);
    }

    #[test]
    fn match_kind_semantics() {
        assert!(MatchKind::Substring.matches("abc$habc", "$h"));
        assert!(!MatchKind::Prefix.matches("abc$habc", "$h"));
        assert!(MatchKind::Prefix.matches("$habc", "$h"));
    }

    #[test]
    fn stardew_markers_present() {
        let vocab = Vocabulary::stardew();
        assert_eq!(vocab.segment_delimiter(), '#');
        assert_eq!(vocab.continuation_marker(), Some('{'));
        assert_eq!(vocab.no_turn_token(), Some("%noturn"));
    }
}
