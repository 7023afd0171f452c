//! Semantic tags for dialogue control codes
//!
//! These enums classify what a control code *means*; the literal code
//! strings live in the [`Vocabulary`](super::Vocabulary) table so the codes
//! themselves stay injectable configuration.

use serde::{Deserialize, Serialize};

/// Portrait emotion attached to a dialogue line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Emotion {
    #[default]
    Neutral,
    Happy,
    Sad,
    Unique,
    Love,
    Angry,
}

impl Emotion {
    /// Portrait sprite index used by the game's dialogue box.
    #[must_use]
    pub const fn portrait_index(self) -> usize {
        match self {
            Emotion::Neutral => 0,
            Emotion::Happy => 1,
            Emotion::Sad => 2,
            Emotion::Unique => 3,
            Emotion::Love => 4,
            Emotion::Angry => 5,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Emotion::Neutral => "Neutral",
            Emotion::Happy => "Happy",
            Emotion::Sad => "Sad",
            Emotion::Unique => "Unique",
            Emotion::Love => "Love",
            Emotion::Angry => "Angry",
        }
    }

    /// Parse an emotion from its display name (case-insensitive).
    #[must_use]
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "neutral" => Some(Emotion::Neutral),
            "happy" => Some(Emotion::Happy),
            "sad" => Some(Emotion::Sad),
            "unique" => Some(Emotion::Unique),
            "love" => Some(Emotion::Love),
            "angry" => Some(Emotion::Angry),
            _ => None,
        }
    }

    /// All emotions, in portrait-index order.
    #[must_use]
    pub const fn all() -> [Emotion; 6] {
        [
            Emotion::Neutral,
            Emotion::Happy,
            Emotion::Sad,
            Emotion::Unique,
            Emotion::Love,
            Emotion::Angry,
        ]
    }
}

/// Command directive carried by a dialogue line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CommandType {
    #[default]
    None,
    Break,
    End,
    Kill,
    Chance,
    Conditional,
    Event,
    QuickResponse,
    Prerequisite,
    Single,
    GameStateQuery,
    GenderSwitch,
    RunAction,
    StartConversationTopic,
    Question,
    Response,
}

impl CommandType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CommandType::None => "None",
            CommandType::Break => "Break",
            CommandType::End => "End",
            CommandType::Kill => "Kill",
            CommandType::Chance => "Chance",
            CommandType::Conditional => "Conditional",
            CommandType::Event => "Event",
            CommandType::QuickResponse => "QuickResponse",
            CommandType::Prerequisite => "Prerequisite",
            CommandType::Single => "Single",
            CommandType::GameStateQuery => "GameStateQuery",
            CommandType::GenderSwitch => "GenderSwitch",
            CommandType::RunAction => "RunAction",
            CommandType::StartConversationTopic => "StartConversationTopic",
            CommandType::Question => "Question",
            CommandType::Response => "Response",
        }
    }
}

/// Inline marker characters the dialogue engine treats specially.
///
/// Classification only; this library never evaluates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialCharacterType {
    /// Splits a line into male/female variants.
    GenderSplit,
    /// Prefix that suppresses the speaker portrait.
    NoPortraitPrefix,
    /// Marks the line as continued on the next dialogue screen.
    Continuation,
}

/// Inline substitution tokens the game expands at display time.
///
/// Classification only; this library never evaluates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialTokenType {
    RandomAdjective,
    RandomNoun,
    RandomPlace,
    RandomName,
    FirstNameLetter,
    Time,
    Band,
    Book,
    Rival,
    Season,
    Spouse,
    Favorite,
    Kid1,
    Kid2,
    Pet,
    Farm,
    /// Keeps the speaker from turning to face the player.
    NoTurn,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portrait_index_mapping() {
        assert_eq!(Emotion::Neutral.portrait_index(), 0);
        assert_eq!(Emotion::Happy.portrait_index(), 1);
        assert_eq!(Emotion::Sad.portrait_index(), 2);
        assert_eq!(Emotion::Unique.portrait_index(), 3);
        assert_eq!(Emotion::Love.portrait_index(), 4);
        assert_eq!(Emotion::Angry.portrait_index(), 5);
    }

    #[test]
    fn emotion_from_name_roundtrip() {
        for emotion in Emotion::all() {
            assert_eq!(Emotion::from_name(emotion.as_str()), Some(emotion));
        }
        assert_eq!(Emotion::from_name("grumpy"), None);
    }
}
