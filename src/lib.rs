//! # PelicanSpeak
//!
//! A pure-Rust library for Stardew Valley's dialogue string format.
//!
//! Dialogue in the game is a line-oriented mini-language: short control
//! codes for portrait emotions (`$h`, `$s`, ...), command directives (`$b`,
//! `$e`, `$c`, ...), and inline substitution tokens (`%adj`, `%spouse`,
//! ...), embedded in otherwise-plain text and joined by `#`. This crate
//! decodes and encodes that format, models authored dialogue documents,
//! and simulates stepping through a dialogue the way the game engine does.
//!
//! ## Decoding a raw dialogue string
//!
//! ```
//! use pelicanspeak::codec::LineCodec;
//! use pelicanspeak::vocab::{CommandType, Emotion, Vocabulary};
//!
//! let vocab = Vocabulary::stardew();
//! let codec = LineCodec::new(&vocab);
//!
//! let lines = codec.decode_segments("$hYou came!#$b#See you tomorrow.");
//! assert_eq!(lines.len(), 3);
//! assert_eq!(lines[0].line.emotion, Emotion::Happy);
//! assert_eq!(lines[0].line.text, "You came!");
//! assert_eq!(lines[1].line.command_type, CommandType::Break);
//! ```
//!
//! ## Authoring and previewing
//!
//! ```
//! use pelicanspeak::builder::{DialogueBuilder, UuidIdSource};
//! use pelicanspeak::playback::PlaybackState;
//! use pelicanspeak::vocab::{Emotion, Vocabulary};
//!
//! let vocab = Vocabulary::stardew();
//! let mut ids = UuidIdSource;
//! let doc = DialogueBuilder::new(&mut ids, "abigail", "mines-talk")
//!     .add_line("You went in the mines?", Emotion::Unique)
//!     .add_line("Take me next time!", Emotion::Happy)
//!     .build();
//!
//! let mut session = PlaybackState::new(&doc, &vocab);
//! assert_eq!(session.current_text(), "You went in the mines?");
//! session.advance();
//! assert_eq!(session.current_text(), "Take me next time!");
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `pelicanspeak` command-line binary

pub mod error;
pub mod vocab;
pub mod codec;
pub mod document;
pub mod playback;
pub mod builder;
pub mod interchange;
pub mod host;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::vocab::{
        CodeEntry, CommandType, Emotion, MatchKind, SpecialCharacterType, SpecialTokenType,
        Vocabulary,
    };
    pub use crate::codec::{DecodedLine, LineCodec};
    pub use crate::document::{
        DialogueDocument, DialogueLine, PlayerResponseOption, ValidationReport,
    };
    pub use crate::playback::PlaybackState;
    pub use crate::builder::{DialogueBuilder, IdSource, UuidIdSource};
    pub use crate::interchange::{
        deserialize_document, read_document, serialize_document, write_document,
    };
    pub use crate::host::{HostCheck, HostDialogueView, HostEngineAdapter, cross_check};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
