//! CLI command for decoding raw dialogue strings

use std::path::Path;

use anyhow::Context;
use console::style;

use crate::codec::LineCodec;
use crate::interchange::serialize_document;
use crate::vocab::{CommandType, Emotion, Vocabulary};

/// Decode a raw dialogue string and print its structured lines.
pub fn execute(text: Option<&str>, source: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let raw = match (text, source) {
        (Some(text), _) => text.to_string(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        (None, None) => anyhow::bail!("pass a dialogue string with --text or a file with --source"),
    };
    let raw = raw.trim_end_matches(['\r', '\n']);

    let vocab = Vocabulary::stardew();
    let codec = LineCodec::new(&vocab);

    if json {
        let name = source
            .and_then(|p| p.file_stem())
            .map_or_else(|| "decoded".to_string(), |s| s.to_string_lossy().to_string());
        let doc = codec.decode_document(raw, &name, "unknown", &name);
        println!("{}", serialize_document(&doc)?);
        return Ok(());
    }

    for (index, decoded) in codec.decode_segments(raw).iter().enumerate() {
        let line = &decoded.line;
        let mut annotations = Vec::new();
        if line.emotion != Emotion::Neutral {
            annotations.push(format!("emotion={}", line.emotion.as_str()));
        }
        if line.command_type != CommandType::None {
            annotations.push(format!("command={}", line.command_type.as_str()));
        }
        if let Some(args) = &line.command_args
            && !args.is_empty()
        {
            annotations.push(format!("args={args:?}"));
        }

        let annotation = if annotations.is_empty() {
            String::new()
        } else {
            format!("  [{}]", annotations.join(", "))
        };
        println!(
            "{:>3}  {}{}",
            style(index).dim(),
            line.text,
            style(annotation).cyan()
        );
    }

    Ok(())
}
