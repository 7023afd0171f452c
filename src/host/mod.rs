//! Host engine adapter
//!
//! Lets a caller cross-check this library's playback simulation against a
//! live host dialogue engine, without this crate knowing anything about the
//! host's internals. The adapter exposes exactly the fields the comparison
//! needs; when no host is attached, the result is a clean
//! [`HostCheck::Unavailable`], not a best-effort probe.

use crate::playback::PlaybackState;

/// Snapshot of the host engine's view of one dialogue.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HostDialogueView {
    /// Whether the host considers the dialogue interactive.
    pub is_interactive: bool,
    /// Whether the host considers the dialogue quick-response.
    pub is_quick_response: bool,
    /// Whether the host's playback has finished.
    pub is_finished: bool,
    /// Line indices the host renders without a portrait.
    pub portrait_less_indices: Vec<usize>,
}

/// Narrow window onto a host dialogue engine.
pub trait HostEngineAdapter {
    /// Current host state, or `None` when no host engine is attached.
    fn snapshot(&self) -> Option<HostDialogueView>;
}

/// Outcome of comparing a playback session against the host engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCheck {
    /// No host engine is attached; nothing was compared.
    Unavailable,
    /// Comparison ran; `mismatches` is empty when the views agree.
    Report {
        /// Human-readable description of each disagreement.
        mismatches: Vec<String>,
    },
}

impl HostCheck {
    /// True when the comparison ran and found no disagreement.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        matches!(self, HostCheck::Report { mismatches } if mismatches.is_empty())
    }
}

/// Compare a playback session's view of its document with the host's.
#[must_use]
pub fn cross_check(state: &PlaybackState<'_>, adapter: &dyn HostEngineAdapter) -> HostCheck {
    let Some(view) = adapter.snapshot() else {
        return HostCheck::Unavailable;
    };

    let doc = state.document();
    let mut mismatches = Vec::new();

    if view.is_interactive != doc.is_interactive {
        mismatches.push(format!(
            "interactive: host={}, document={}",
            view.is_interactive, doc.is_interactive
        ));
    }
    if view.is_quick_response != doc.is_quick_response {
        mismatches.push(format!(
            "quick-response: host={}, document={}",
            view.is_quick_response, doc.is_quick_response
        ));
    }
    if view.is_finished != state.is_finished() {
        mismatches.push(format!(
            "finished: host={}, session={}",
            view.is_finished,
            state.is_finished()
        ));
    }

    let portrait_less: Vec<usize> = doc
        .lines
        .iter()
        .enumerate()
        .filter(|(_, line)| !line.show_portrait)
        .map(|(i, _)| i)
        .collect();
    if view.portrait_less_indices != portrait_less {
        mismatches.push(format!(
            "portrait-less lines: host={:?}, document={portrait_less:?}",
            view.portrait_less_indices
        ));
    }

    HostCheck::Report { mismatches }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DialogueDocument;
    use crate::vocab::{CommandType, Emotion, Vocabulary};

    struct NoHost;

    impl HostEngineAdapter for NoHost {
        fn snapshot(&self) -> Option<HostDialogueView> {
            None
        }
    }

    struct FixedHost(HostDialogueView);

    impl HostEngineAdapter for FixedHost {
        fn snapshot(&self) -> Option<HostDialogueView> {
            Some(self.0.clone())
        }
    }

    fn sample_document() -> DialogueDocument {
        let mut doc = DialogueDocument::new("d1", "abigail", "check");
        doc.add_line(Some("Hi."), Emotion::Neutral, CommandType::None, None);
        doc
    }

    #[test]
    fn missing_host_is_unavailable_not_an_error() {
        let vocab = Vocabulary::stardew();
        let doc = sample_document();
        let state = PlaybackState::new(&doc, &vocab);
        assert_eq!(cross_check(&state, &NoHost), HostCheck::Unavailable);
    }

    #[test]
    fn agreeing_views_produce_a_clean_report() {
        let vocab = Vocabulary::stardew();
        let doc = sample_document();
        let state = PlaybackState::new(&doc, &vocab);
        let host = FixedHost(HostDialogueView::default());
        let check = cross_check(&state, &host);
        assert!(check.is_clean());
    }

    #[test]
    fn disagreements_are_listed() {
        let vocab = Vocabulary::stardew();
        let doc = sample_document();
        let state = PlaybackState::new(&doc, &vocab);
        let host = FixedHost(HostDialogueView {
            is_interactive: true,
            is_finished: true,
            ..HostDialogueView::default()
        });
        match cross_check(&state, &host) {
            HostCheck::Report { mismatches } => assert_eq!(mismatches.len(), 2),
            HostCheck::Unavailable => panic!("host was attached"),
        }
    }
}
