//! Structured-text interchange format
//!
//! JSON serialization of [`DialogueDocument`](crate::document::DialogueDocument),
//! field for field and order-preserving, for exchanging authored dialogues
//! between tools. Round-tripping a document through this format loses
//! nothing: every line, every player response, original order.

mod reader;
mod writer;

pub use reader::{deserialize_document, read_document};
pub use writer::{serialize_document, write_document};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{DialogueDocument, PlayerResponseOption};
    use crate::vocab::{CommandType, Emotion};
    use pretty_assertions::assert_eq;

    fn full_document() -> DialogueDocument {
        let mut doc = DialogueDocument::new("d1", "abigail", "festival-talk");
        doc.description = Some("Festival chatter".to_string());
        doc.translation_key = Some("Characters/Dialogue/Abigail:fall_16".to_string());
        doc.add_line(Some("Are you going?"), Emotion::Happy, CommandType::None, None);
        doc.add_line(None, Emotion::Neutral, CommandType::Break, None);
        doc.add_line(
            Some("Maybe I'll see you there."),
            Emotion::Unique,
            CommandType::Chance,
            Some("0.6"),
        );
        doc.add_player_response(PlayerResponseOption {
            text: "Wouldn't miss it.".to_string(),
            friendship_delta: 25,
            response_key: Some("festival_yes".to_string()),
            extra_argument: Some("wave".to_string()),
            id: Some("r1".to_string()),
        });
        doc.add_player_response(PlayerResponseOption {
            text: "Too busy.".to_string(),
            friendship_delta: -10,
            response_key: Some("festival_no".to_string()),
            extra_argument: None,
            id: None,
        });
        doc.add_quick_response("See you!");
        doc.is_interactive = true;
        doc
    }

    #[test]
    fn round_trip_preserves_every_field() {
        let doc = full_document();
        let json = serialize_document(&doc).unwrap();
        let back = deserialize_document(&json).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn order_is_preserved() {
        let doc = full_document();
        let json = serialize_document(&doc).unwrap();
        let back = deserialize_document(&json).unwrap();
        assert_eq!(back.lines[0].text, "Are you going?");
        assert_eq!(back.lines[1].command_type, CommandType::Break);
        assert_eq!(back.lines[2].command_args.as_deref(), Some("0.6"));
        assert_eq!(back.player_responses[0].friendship_delta, 25);
        assert_eq!(back.player_responses[1].friendship_delta, -10);
    }

    #[test]
    fn missing_optional_fields_default() {
        let json = r#"{
            "id": "d2",
            "speaker_id": "sam",
            "name": "hey",
            "lines": [{ "text": "Yo." }]
        }"#;
        let doc = deserialize_document(json).unwrap();
        assert_eq!(doc.lines[0].emotion, Emotion::Neutral);
        assert_eq!(doc.lines[0].command_type, CommandType::None);
        assert!(doc.lines[0].show_portrait);
        assert!(!doc.is_interactive);
    }
}
