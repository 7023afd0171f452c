//! The standard Stardew Valley control-code table
//!
//! Literal codes as the game's dialogue engine recognizes them. Command
//! detection is by prefix, emotion and marker detection by substring; the
//! entry order below is the engine's detection priority and must not be
//! reordered (`$query` has to win over `$q`).

use super::{CommandType, Emotion, MatchKind, SpecialCharacterType, SpecialTokenType, Vocabulary};

pub(super) fn build() -> Vocabulary {
    Vocabulary::new('#')
        // Emotions, scanned anywhere in the string.
        .with_emotion("$h", Emotion::Happy, MatchKind::Substring)
        .with_emotion("$s", Emotion::Sad, MatchKind::Substring)
        .with_emotion("$u", Emotion::Unique, MatchKind::Substring)
        .with_emotion("$l", Emotion::Love, MatchKind::Substring)
        .with_emotion("$a", Emotion::Angry, MatchKind::Substring)
        // Commands, matched against the segment prefix.
        .with_command("$b", CommandType::Break, MatchKind::Prefix)
        .with_command("$e", CommandType::End, MatchKind::Prefix)
        .with_command("$k", CommandType::Kill, MatchKind::Prefix)
        .with_command("$c", CommandType::Chance, MatchKind::Prefix)
        .with_command("$d", CommandType::Conditional, MatchKind::Prefix)
        .with_command("$v", CommandType::Event, MatchKind::Prefix)
        .with_command("$y", CommandType::QuickResponse, MatchKind::Prefix)
        .with_command("$p", CommandType::Prerequisite, MatchKind::Prefix)
        .with_command("$1", CommandType::Single, MatchKind::Prefix)
        .with_command("$query", CommandType::GameStateQuery, MatchKind::Prefix)
        .with_command("$g", CommandType::GenderSwitch, MatchKind::Prefix)
        .with_command("$action", CommandType::RunAction, MatchKind::Prefix)
        .with_command("$t", CommandType::StartConversationTopic, MatchKind::Prefix)
        .with_command("$q", CommandType::Question, MatchKind::Prefix)
        .with_command("$r", CommandType::Response, MatchKind::Prefix)
        // Special characters.
        .with_special_character("^", SpecialCharacterType::GenderSplit, MatchKind::Substring)
        .with_special_character("{", SpecialCharacterType::Continuation, MatchKind::Substring)
        .with_special_character("%", SpecialCharacterType::NoPortraitPrefix, MatchKind::Substring)
        // Substitution tokens. Longer codes before shorter ones that share a
        // prefix, so stripping `%noturn` never leaves a dangling tail.
        .with_special_token("%noturn", SpecialTokenType::NoTurn, MatchKind::Substring)
        .with_special_token("%firstnameletter", SpecialTokenType::FirstNameLetter, MatchKind::Substring)
        .with_special_token("%adj", SpecialTokenType::RandomAdjective, MatchKind::Substring)
        .with_special_token("%noun", SpecialTokenType::RandomNoun, MatchKind::Substring)
        .with_special_token("%place", SpecialTokenType::RandomPlace, MatchKind::Substring)
        .with_special_token("%name", SpecialTokenType::RandomName, MatchKind::Substring)
        .with_special_token("%time", SpecialTokenType::Time, MatchKind::Substring)
        .with_special_token("%band", SpecialTokenType::Band, MatchKind::Substring)
        .with_special_token("%book", SpecialTokenType::Book, MatchKind::Substring)
        .with_special_token("%rival", SpecialTokenType::Rival, MatchKind::Substring)
        .with_special_token("%season", SpecialTokenType::Season, MatchKind::Substring)
        .with_special_token("%spouse", SpecialTokenType::Spouse, MatchKind::Substring)
        .with_special_token("%favorite", SpecialTokenType::Favorite, MatchKind::Substring)
        .with_special_token("%kid1", SpecialTokenType::Kid1, MatchKind::Substring)
        .with_special_token("%kid2", SpecialTokenType::Kid2, MatchKind::Substring)
        .with_special_token("%pet", SpecialTokenType::Pet, MatchKind::Substring)
        .with_special_token("%farm", SpecialTokenType::Farm, MatchKind::Substring)
}
