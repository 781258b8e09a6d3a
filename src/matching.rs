//! Word matching inside free-form example text.
//!
//! Every known card contributes a word-boundary, case-insensitive pattern
//! built from its escaped English word. Matches keep the original casing of
//! the source text and carry a back-reference to the card, so a rendered
//! example can make each occurrence interactive.
//!
//! The scan is deliberately per-card rather than one big alternation: the
//! texts are short human-authored sentences, and per-card patterns keep the
//! duplicate-span and ordering semantics easy to reason about.

use crate::types::Card;
use regex::RegexBuilder;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;
use uuid::Uuid;

/// A located occurrence of a known word inside a text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordMatch {
    /// The matched substring as it appears in the source text.
    pub word: String,
    /// Byte offset of the match start.
    pub start: usize,
    /// Byte offset one past the match end.
    pub end: usize,
    /// The card whose English word matched.
    pub card_id: Uuid,
}

/// One piece of a text split around its word matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSegment {
    /// Literal text between matches.
    Plain(String),
    /// A matched word, renderable as an interactive segment.
    Match(WordMatch),
}

/// Find every occurrence of any card's English word in `text`.
///
/// Occurrences are exact (no stemming), case-insensitive, and delimited by
/// word boundaries. Exact-duplicate spans from different cards sharing a
/// word keep only the first card encountered; cards are scanned in the
/// given order, so with a store's card slice the earliest-created card
/// wins. The result is sorted by ascending start position (stable).
pub fn find_word_matches(text: &str, cards: &[Card]) -> Vec<WordMatch> {
    let mut matches = Vec::new();

    for card in cards {
        let pattern = format!(r"\b{}\b", regex::escape(&card.english_word));
        let regex = match RegexBuilder::new(&pattern).case_insensitive(true).build() {
            Ok(regex) => regex,
            Err(err) => {
                debug!(word = %card.english_word, error = %err, "skipping unmatchable word");
                continue;
            }
        };
        for found in regex.find_iter(text) {
            matches.push(WordMatch {
                word: found.as_str().to_string(),
                start: found.start(),
                end: found.end(),
                card_id: card.id,
            });
        }
    }

    let mut seen = HashSet::new();
    matches.retain(|m| seen.insert((m.start, m.end)));
    matches.sort_by_key(|m| m.start);
    matches
}

/// Split `text` into plain and matched segments, left to right.
pub fn highlight(text: &str, cards: &[Card]) -> Vec<TextSegment> {
    let matches = find_word_matches(text, cards);
    if matches.is_empty() {
        return vec![TextSegment::Plain(text.to_string())];
    }

    let mut segments = Vec::new();
    let mut last = 0;
    for m in matches {
        if m.start > last {
            segments.push(TextSegment::Plain(text[last..m.start].to_string()));
        }
        last = m.end;
        segments.push(TextSegment::Match(m));
    }
    if last < text.len() {
        segments.push(TextSegment::Plain(text[last..].to_string()));
    }
    segments
}
