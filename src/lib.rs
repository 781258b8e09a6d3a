//! Core vocabulary study engine.
//!
//! Provides:
//! - Catalog and card store with validation and cascade deletes
//! - Randomized one-pass recall drills with score recording
//! - Word-boundary matching of known words inside example sentences
//! - Cached, debounced translation suggestions
//!
//! Persistence goes through a pluggable key-value store; the remote
//! translation lookup sits behind the [`TranslationProvider`] trait.

pub mod error;
pub mod matching;
pub mod session;
pub mod storage;
pub mod store;
pub mod suggest;
pub mod types;

pub use error::{LookupError, SessionError, StorageError, StoreError, ValidationError};
pub use matching::{find_word_matches, highlight, TextSegment, WordMatch};
pub use session::{SessionSummary, Step, StudySession, SubmitOutcome};
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore};
pub use store::VocabularyStore;
pub use suggest::cache::TranslationCache;
pub use suggest::debounce::{LookupDebouncer, LookupTicket, DEBOUNCE_DELAY};
pub use suggest::service::{
    HttpTranslationProvider, SuggestionService, TranslatedText, TranslationProvider,
    TranslationRequest,
};
pub use suggest::{Language, Suggestion};
pub use types::{Card, Catalog, CatalogStatistics, Direction, ExampleRef};
