use pelicanspeak::prelude::*;
use pretty_assertions::assert_eq;

/// Deterministic id source so assertions don't depend on random UUIDs.
struct CountingIds(u32);

impl IdSource for CountingIds {
    fn next_id(&mut self) -> String {
        self.0 += 1;
        format!("dialogue-{}", self.0)
    }
}

#[test]
fn author_encode_decode_and_play() {
    let vocab = Vocabulary::stardew();
    let mut ids = CountingIds(0);

    let doc = DialogueBuilder::new(&mut ids, "abigail", "mines-chat")
        .add_line("You went into the mines?{", Emotion::Unique)
        .add_line("Take me with you next time!", Emotion::Happy)
        .add_break()
        .add_line("Anyway... see you.", Emotion::Neutral)
        .build();

    assert!(doc.validate().is_valid);

    // Over the wire and back: the neutral/no-command lines keep their text.
    let codec = LineCodec::new(&vocab);
    let raw = codec.encode_document(&doc);
    let decoded = codec.decode_document(&raw, &doc.id, &doc.speaker_id, &doc.name);
    assert_eq!(decoded.lines.last().unwrap().text, "Anyway... see you.");

    // Play the authored document the way the engine would.
    let mut session = PlaybackState::new(&doc, &vocab);
    assert!(session.continued_on_next_screen());
    assert_eq!(session.current_text(), "You went into the mines?");

    let carried = session.advance();
    assert_eq!(carried.as_deref(), Some("You went into the mines?"));
    assert_eq!(session.current_text(), "Take me with you next time!");
    assert_eq!(session.portrait_index(), 0); // structured emotion is not embedded

    session.advance(); // onto the break line
    session.advance(); // onto the last text line
    assert_eq!(session.current_text(), "Anyway... see you.");
    assert!(session.is_on_final_dialogue());

    assert_eq!(session.advance(), None);
    assert!(session.is_finished());
}

#[test]
fn interactive_document_through_interchange() {
    let vocab = Vocabulary::stardew();
    let mut ids = CountingIds(0);

    let doc = DialogueBuilder::new(&mut ids, "sam", "band-practice")
        .add_line("We're jamming later.", Emotion::Happy)
        .add_question_line("q-band", "Want to come listen?", Emotion::Neutral)
        .add_player_response(PlayerResponseOption {
            text: "Absolutely.".to_string(),
            friendship_delta: 30,
            response_key: Some("band_yes".to_string()),
            extra_argument: None,
            id: Some("r1".to_string()),
        })
        .add_player_response(PlayerResponseOption {
            text: "Maybe another time.".to_string(),
            friendship_delta: 0,
            response_key: Some("band_no".to_string()),
            extra_argument: None,
            id: Some("r2".to_string()),
        })
        .build();

    let json = serialize_document(&doc).unwrap();
    let back = deserialize_document(&json).unwrap();
    assert_eq!(back, doc);

    let mut session = PlaybackState::new(&back, &vocab);
    assert!(!session.is_current_line_a_question());
    session.advance();
    assert!(session.is_current_line_a_question());
}

#[test]
fn custom_vocabulary_is_injectable() {
    // A host with different literals: same semantics, different bytes.
    let vocab = Vocabulary::new('|')
        .with_emotion("<joy>", Emotion::Happy, MatchKind::Substring)
        .with_command("<stop>", CommandType::End, MatchKind::Prefix)
        .with_special_character("+", SpecialCharacterType::Continuation, MatchKind::Substring);

    let codec = LineCodec::new(&vocab);
    let lines = codec.decode_segments("<joy>Hello!|<stop>");
    assert_eq!(lines[0].line.emotion, Emotion::Happy);
    assert_eq!(lines[0].line.text, "Hello!");
    assert_eq!(lines[1].line.command_type, CommandType::End);

    let mut doc = DialogueDocument::new("d1", "npc", "custom");
    doc.add_line(Some("First+"), Emotion::Neutral, CommandType::None, None);
    doc.add_line(Some("Second"), Emotion::Neutral, CommandType::None, None);
    let mut session = PlaybackState::new(&doc, &vocab);
    assert!(session.continued_on_next_screen());
    assert_eq!(session.advance().as_deref(), Some("First"));
}

#[test]
fn host_cross_check_reports_cleanly() {
    struct AgreeingHost;

    impl HostEngineAdapter for AgreeingHost {
        fn snapshot(&self) -> Option<HostDialogueView> {
            Some(HostDialogueView::default())
        }
    }

    let vocab = Vocabulary::stardew();
    let mut doc = DialogueDocument::new("d1", "abigail", "check");
    doc.add_line(Some("Hi."), Emotion::Neutral, CommandType::None, None);
    let session = PlaybackState::new(&doc, &vocab);

    assert!(cross_check(&session, &AgreeingHost).is_clean());
}
