//! Error types for vocab-core.

use crate::types::{
    MAX_CARDS_PER_CATALOG, MAX_CATALOG_NAME_LEN, MAX_EXAMPLES_PER_CARD, MAX_EXAMPLE_LEN,
    MAX_TRANSLATION_LEN, MAX_WORD_LEN, MIN_STUDY_CARDS,
};
use thiserror::Error;
use uuid::Uuid;

/// User-correctable input errors. The rejected operation has no effect.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("catalog name is required")]
    EmptyCatalogName,

    #[error("catalog name is too long ({len} chars, max {max})", max = MAX_CATALOG_NAME_LEN)]
    CatalogNameTooLong { len: usize },

    #[error("a catalog named \"{0}\" already exists")]
    DuplicateCatalogName(String),

    #[error("english word is required")]
    EmptyWord,

    #[error("english word is too long ({len} chars, max {max})", max = MAX_WORD_LEN)]
    WordTooLong { len: usize },

    #[error("russian translation is required")]
    EmptyTranslation,

    #[error("translation is too long ({len} chars, max {max})", max = MAX_TRANSLATION_LEN)]
    TranslationTooLong { len: usize },

    #[error("the word \"{0}\" already exists in this catalog")]
    DuplicateWord(String),

    #[error("example text is required")]
    EmptyExample,

    #[error("example is too long ({len} chars, max {max})", max = MAX_EXAMPLE_LEN)]
    ExampleTooLong { len: usize },

    #[error("example \"{example}\" must contain the word \"{word}\"")]
    ExampleMissingWord { example: String, word: String },

    #[error("a card can have at most {} examples", MAX_EXAMPLES_PER_CARD)]
    TooManyExamples,

    #[error("catalog already holds the maximum of {} cards", MAX_CARDS_PER_CATALOG)]
    CatalogFull,
}

/// Errors returned by [`crate::store::VocabularyStore`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("catalog not found: {0}")]
    CatalogNotFound(Uuid),

    #[error("card not found: {0}")]
    CardNotFound(Uuid),
}

/// Errors from the study session state machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("need at least {} cards to study, catalog has {have}", MIN_STUDY_CARDS)]
    NotEnoughCards { have: usize },

    #[error("the study session is already finished")]
    Finished,
}

/// Errors from the key-value persistence layer. Logged, never fatal.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Errors from the remote suggestion lookup. Recovered as zero suggestions.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("lookup failed with status {0}")]
    Status(u16),
}
