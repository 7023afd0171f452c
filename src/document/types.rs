//! Dialogue document data types

use serde::{Deserialize, Serialize};

use crate::vocab::{CommandType, Emotion};

const fn default_true() -> bool {
    true
}

/// One line of dialogue: display text plus its decoded annotations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogueLine {
    /// Display text with control codes removed.
    pub text: String,
    /// Portrait emotion for this line.
    #[serde(default)]
    pub emotion: Emotion,
    /// Command directive, [`CommandType::None`] for plain text lines.
    #[serde(default)]
    pub command_type: CommandType,
    /// Raw argument payload following the command code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command_args: Option<String>,
    /// Whether the speaker portrait is shown for this line.
    #[serde(default = "default_true")]
    pub show_portrait: bool,
    /// Whether the speaker turns to face the player.
    #[serde(default = "default_true")]
    pub face_farmer: bool,
    /// Whether this line flows onto the next dialogue screen.
    #[serde(default)]
    pub continued_on_next_screen: bool,
}

impl DialogueLine {
    /// A plain text line with no command and default display flags.
    #[must_use]
    pub fn text_line(text: &str, emotion: Emotion) -> Self {
        Self {
            text: text.to_string(),
            emotion,
            command_type: CommandType::None,
            command_args: None,
            show_portrait: true,
            face_farmer: true,
            continued_on_next_screen: false,
        }
    }

    /// True when the line carries neither text nor a command.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.command_type == CommandType::None
    }
}

/// One player-selectable answer attached to an interactive dialogue.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlayerResponseOption {
    /// Display text of the answer.
    pub text: String,
    /// Friendship change applied when the answer is picked.
    #[serde(default)]
    pub friendship_delta: i32,
    /// Key of the follow-up dialogue this answer jumps to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_key: Option<String>,
    /// Extra argument forwarded to the follow-up.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_argument: Option<String>,
    /// Stable identifier of this answer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// An authored dialogue: ordered lines plus speaker metadata.
///
/// Documents are mutated only through the `add_*` methods while authoring;
/// once handed to a playback session they are treated as read-only. Cloning
/// is a full deep copy (every field is owned), so a clone never shares
/// mutable state with the original.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogueDocument {
    /// Unique document identifier.
    pub id: String,
    /// Identifier of the speaking character.
    pub speaker_id: String,
    /// Human-readable dialogue name.
    pub name: String,
    /// Optional authoring description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional translation key for localized packs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation_key: Option<String>,
    /// Ordered dialogue lines.
    pub lines: Vec<DialogueLine>,
    /// Player answers for interactive dialogues.
    #[serde(default)]
    pub player_responses: Vec<PlayerResponseOption>,
    /// Quick-response strings.
    #[serde(default)]
    pub quick_responses: Vec<String>,
    /// Whether the dialogue ends in a player question.
    #[serde(default)]
    pub is_interactive: bool,
    /// Whether the dialogue uses quick responses.
    #[serde(default)]
    pub is_quick_response: bool,
    /// Authoring default: show the portrait on lines added from now on.
    #[serde(default = "default_true")]
    pub show_portrait: bool,
    /// Authoring default: face the player on lines added from now on.
    #[serde(default = "default_true")]
    pub face_farmer: bool,
    /// Whether the dialogue is dismissed when the player moves.
    #[serde(default)]
    pub remove_on_next_move: bool,
}

impl DialogueDocument {
    /// Create an empty document with the given identity.
    #[must_use]
    pub fn new(id: &str, speaker_id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            speaker_id: speaker_id.to_string(),
            name: name.to_string(),
            description: None,
            translation_key: None,
            lines: Vec::new(),
            player_responses: Vec::new(),
            quick_responses: Vec::new(),
            is_interactive: false,
            is_quick_response: false,
            show_portrait: true,
            face_farmer: true,
            remove_on_next_move: false,
        }
    }

    /// Append a line. Missing text coerces to the empty string; this never
    /// rejects input, strictness is opt-in via [`validate`](Self::validate).
    ///
    /// The line picks up the document's current `show_portrait` and
    /// `face_farmer` authoring defaults.
    pub fn add_line(
        &mut self,
        text: Option<&str>,
        emotion: Emotion,
        command_type: CommandType,
        command_args: Option<&str>,
    ) {
        self.lines.push(DialogueLine {
            text: text.unwrap_or_default().to_string(),
            emotion,
            command_type,
            command_args: command_args.map(ToString::to_string),
            show_portrait: self.show_portrait,
            face_farmer: self.face_farmer,
            continued_on_next_screen: false,
        });
    }

    /// Append a player response option.
    pub fn add_player_response(&mut self, response: PlayerResponseOption) {
        self.player_responses.push(response);
    }

    /// Append a quick response and mark the document as quick-response.
    pub fn add_quick_response(&mut self, text: &str) {
        self.quick_responses.push(text.to_string());
        self.is_quick_response = true;
    }

    /// Number of lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_line_coerces_missing_text() {
        let mut doc = DialogueDocument::new("d1", "abigail", "greeting");
        doc.add_line(None, Emotion::Neutral, CommandType::Break, None);
        assert_eq!(doc.lines[0].text, "");
        assert_eq!(doc.lines[0].command_type, CommandType::Break);
    }

    #[test]
    fn add_quick_response_marks_document() {
        let mut doc = DialogueDocument::new("d1", "abigail", "greeting");
        assert!(!doc.is_quick_response);
        doc.add_quick_response("Sure!");
        assert!(doc.is_quick_response);
        assert_eq!(doc.quick_responses, vec!["Sure!".to_string()]);
    }

    #[test]
    fn clone_shares_no_mutable_state() {
        let mut doc = DialogueDocument::new("d1", "abigail", "greeting");
        doc.add_line(Some("Hi."), Emotion::Happy, CommandType::None, None);
        let copy = doc.clone();
        doc.add_line(Some("Bye."), Emotion::Neutral, CommandType::None, None);
        doc.lines[0].text.push('!');
        assert_eq!(copy.line_count(), 1);
        assert_eq!(copy.lines[0].text, "Hi.");
    }

    #[test]
    fn lines_pick_up_authoring_defaults() {
        let mut doc = DialogueDocument::new("d1", "abigail", "greeting");
        doc.add_line(Some("A"), Emotion::Neutral, CommandType::None, None);
        doc.show_portrait = false;
        doc.face_farmer = false;
        doc.add_line(Some("B"), Emotion::Neutral, CommandType::None, None);
        assert!(doc.lines[0].show_portrait);
        assert!(!doc.lines[1].show_portrait);
        assert!(!doc.lines[1].face_farmer);
    }
}
