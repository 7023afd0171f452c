//! CLI command for stepping through a dialogue

use std::path::Path;

use anyhow::Context;
use console::style;

use crate::interchange::read_document;
use crate::playback::PlaybackState;
use crate::vocab::Vocabulary;

/// Simulate a playback session over the document, printing each screen the
/// way the game engine would step through it.
pub fn execute(source: &Path) -> anyhow::Result<()> {
    let doc = read_document(source).with_context(|| format!("reading {}", source.display()))?;
    let vocab = Vocabulary::stardew();

    println!(
        "{} {} ({} lines)",
        style(&doc.speaker_id).bold(),
        style(&doc.name).green(),
        doc.line_count()
    );

    let mut session = PlaybackState::new(&doc, &vocab);
    let mut screen = 1usize;
    loop {
        let mut flags = Vec::new();
        if session.emotion_explicit() {
            flags.push(format!("emotion={}", session.current_emotion().as_str()));
        }
        flags.push(format!("portrait={}", session.portrait_index()));
        if session.continued_on_next_screen() {
            flags.push("continued".to_string());
        }
        if session.dont_face_farmer() {
            flags.push("no-turn".to_string());
        }
        if session.is_current_line_a_question() {
            flags.push("question".to_string());
        }

        println!(
            "{:>3}  {}  {}",
            style(screen).dim(),
            session.current_text(),
            style(format!("[{}]", flags.join(", "))).cyan()
        );

        if let Some(carried) = session.advance() {
            println!("     {} {carried:?}", style("carried over:").dim());
        }
        if session.is_finished() {
            break;
        }
        screen += 1;
    }

    if session.is_current_line_a_question() {
        for response in &doc.player_responses {
            println!(
                "  {} {} ({:+})",
                style(">").yellow(),
                response.text,
                response.friendship_delta
            );
        }
    }

    println!("{}", style("dialogue finished").dim());
    Ok(())
}
