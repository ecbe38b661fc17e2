//! Rule-violation detectors
//!
//! Purely textual heuristics applied to every generated turn.

use super::{DISCLOSURE_PHRASE, OPEN_MARKER};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static EMPTY_TAGS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[OPEN\]\s*$").expect("static regex"));

/// Whether the model disclosed that it is an AI.
///
/// When the text contains an `[OPEN]` marker only the segment after the
/// first marker (up to any following marker) is inspected, so private
/// reasoning may mention the phrase without being flagged.
pub fn broke_character(text: &str) -> bool {
    match text.split(OPEN_MARKER).nth(1) {
        Some(spoken) => spoken.contains(DISCLOSURE_PHRASE),
        None => text.contains(DISCLOSURE_PHRASE),
    }
}

/// Whether the turn ends with an `[OPEN]` marker followed only by whitespace
pub fn output_empty_tags(text: &str) -> bool {
    EMPTY_TAGS.is_match(text)
}

/// Per-party tally of rule violations across a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationCounts {
    pub broke_character: u32,
    pub empty_tags: u32,
}

impl ViolationCounts {
    /// Run both detectors over a turn and tally any hits
    pub fn observe(&mut self, text: &str) {
        if broke_character(text) {
            self.broke_character += 1;
        }
        if output_empty_tags(text) {
            self.empty_tags += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broke_character_without_marker() {
        assert!(broke_character("As an AI language model, I cannot vote."));
        assert!(!broke_character("I'm a nurse from Ohio."));
    }

    #[test]
    fn test_broke_character_after_open_is_flagged() {
        let text = "Thinking about tone. [OPEN] As an AI language model, I think...";
        assert!(broke_character(text));
    }

    #[test]
    fn test_broke_character_before_open_is_not_flagged() {
        let text = "I must not sound like an AI language model. [OPEN] Hi there, this is Sam!";
        assert!(!broke_character(text));
    }

    #[test]
    fn test_broke_character_only_first_open_segment() {
        let text = "plan [OPEN] Hello! [OPEN] AI language model";
        assert!(!broke_character(text));
    }

    #[test]
    fn test_empty_tags() {
        assert!(output_empty_tags("My reasoning is private. [OPEN]"));
        assert!(output_empty_tags("My reasoning is private. [OPEN]  \n"));
        assert!(!output_empty_tags("reasoning [OPEN] Hello!"));
        assert!(!output_empty_tags("Hello!"));
    }

    #[test]
    fn test_observe_accumulates() {
        let mut counts = ViolationCounts::default();
        counts.observe("[OPEN] As an AI language model...");
        counts.observe("thinking [OPEN]");
        counts.observe("Hi!");
        assert_eq!(counts.broke_character, 1);
        assert_eq!(counts.empty_tags, 1);
    }
}
