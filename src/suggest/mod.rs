//! Translation suggestions: remote lookup, caching, and assembly.
//!
//! The remote transport sits behind [`TranslationProvider`]; everything a
//! lookup failure can produce is recovered locally as "zero suggestions".
//! Results are cached by normalized text and language pair, and the
//! assembled list is topped up from a static synonym table.

pub mod cache;
pub mod debounce;
pub mod service;
pub mod synonyms;

use serde::{Deserialize, Serialize};

/// Maximum number of suggestions returned for one input.
pub const MAX_SUGGESTIONS: usize = 5;

/// A language endpoint of a translation, as a two-letter tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Ru,
}

impl Language {
    /// The two-letter language code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
        }
    }
}

/// A candidate translation with its confidence (0.0-1.0).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub text: String,
    pub confidence: f64,
}

impl Suggestion {
    /// A suggestion returned directly by the remote lookup.
    pub fn primary(text: String) -> Self {
        Self {
            text,
            confidence: 1.0,
        }
    }

    /// A lower-confidence synonym-table suggestion.
    pub fn variant(text: String) -> Self {
        Self {
            text,
            confidence: 0.8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::En.code(), "en");
        assert_eq!(Language::Ru.code(), "ru");
        assert_eq!(serde_json::to_string(&Language::Ru).unwrap(), "\"ru\"");
    }
}
