//! The vocabulary store: single source of truth for catalogs and cards.
//!
//! All mutations validate first, then apply in memory, then persist both
//! collections through the attached [`KeyValueStore`]. A persistence failure
//! is logged and never rolls back or surfaces to the caller; the in-memory
//! state is authoritative within a session.
//!
//! Both collections keep insertion order. That order doubles as the
//! tie-break when text matching attributes a shared word to one of several
//! catalogs: the earliest-created card wins.

use crate::error::{StorageError, StoreError, ValidationError};
use crate::storage::{load_or_default, KeyValueStore, CARDS_KEY, CATALOGS_KEY};
use crate::types::{
    Card, Catalog, Direction, ExampleRef, MAX_CARDS_PER_CATALOG, MAX_CATALOG_NAME_LEN,
    MAX_EXAMPLES_PER_CARD, MAX_EXAMPLE_LEN, MAX_TRANSLATION_LEN, MAX_WORD_LEN, MIN_STUDY_CARDS,
};
use chrono::Utc;
use tracing::{debug, warn};
use uuid::Uuid;

/// Owns the catalog and card collections and enforces their invariants.
pub struct VocabularyStore {
    catalogs: Vec<Catalog>,
    cards: Vec<Card>,
    storage: Option<Box<dyn KeyValueStore>>,
}

impl VocabularyStore {
    /// Create an empty store with no persistence attached.
    pub fn new() -> Self {
        Self {
            catalogs: Vec::new(),
            cards: Vec::new(),
            storage: None,
        }
    }

    /// Create a store backed by `storage`, loading any persisted collections.
    ///
    /// A missing or unparsable namespace loads as empty rather than failing.
    pub fn with_storage(storage: Box<dyn KeyValueStore>) -> Self {
        let catalogs = load_or_default(storage.as_ref(), CATALOGS_KEY);
        let cards = load_or_default(storage.as_ref(), CARDS_KEY);
        Self {
            catalogs,
            cards,
            storage: Some(storage),
        }
    }

    // ---- catalog operations ----

    /// Create a catalog with zero statistics. Returns the new catalog's id.
    pub fn create_catalog(&mut self, name: &str) -> Result<Uuid, StoreError> {
        let name = self.validate_catalog_name(name, None)?;
        let catalog = Catalog::new(name);
        let id = catalog.id;
        self.catalogs.push(catalog);
        self.persist();
        Ok(id)
    }

    /// Rename a catalog. The catalog's own current name is excluded from the
    /// duplicate check, so renaming to the same name is a no-op success.
    pub fn rename_catalog(&mut self, id: Uuid, name: &str) -> Result<(), StoreError> {
        let name = self.validate_catalog_name(name, Some(id))?;
        let catalog = self
            .catalogs
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(StoreError::CatalogNotFound(id))?;
        catalog.name = name;
        self.persist();
        Ok(())
    }

    /// Delete a catalog and every card it owns.
    pub fn delete_catalog(&mut self, id: Uuid) -> Result<(), StoreError> {
        if !self.catalogs.iter().any(|c| c.id == id) {
            return Err(StoreError::CatalogNotFound(id));
        }
        self.catalogs.retain(|c| c.id != id);
        self.cards.retain(|card| card.catalog_id != id);
        self.persist();
        Ok(())
    }

    // ---- card operations ----

    /// Create a card in a catalog. Returns the new card's id.
    pub fn create_card(
        &mut self,
        catalog_id: Uuid,
        english_word: &str,
        russian_translation: &str,
        examples: Vec<String>,
    ) -> Result<Uuid, StoreError> {
        if !self.catalogs.iter().any(|c| c.id == catalog_id) {
            return Err(StoreError::CatalogNotFound(catalog_id));
        }
        if self.card_count(catalog_id) >= MAX_CARDS_PER_CATALOG {
            return Err(ValidationError::CatalogFull.into());
        }
        let (word, translation, examples) =
            validate_card_fields(english_word, russian_translation, examples)?;
        self.check_duplicate_word(catalog_id, &word, None)?;

        let card = Card::new(catalog_id, word, translation, examples);
        let id = card.id;
        self.cards.push(card);
        self.persist();
        Ok(id)
    }

    /// Replace a card's word, translation and examples. The card's own id is
    /// excluded from the duplicate-word check.
    pub fn update_card(
        &mut self,
        card_id: Uuid,
        english_word: &str,
        russian_translation: &str,
        examples: Vec<String>,
    ) -> Result<(), StoreError> {
        let catalog_id = self
            .cards
            .iter()
            .find(|c| c.id == card_id)
            .map(|c| c.catalog_id)
            .ok_or(StoreError::CardNotFound(card_id))?;
        let (word, translation, examples) =
            validate_card_fields(english_word, russian_translation, examples)?;
        self.check_duplicate_word(catalog_id, &word, Some(card_id))?;

        let card = self
            .cards
            .iter_mut()
            .find(|c| c.id == card_id)
            .ok_or(StoreError::CardNotFound(card_id))?;
        card.english_word = word;
        card.russian_translation = translation;
        card.examples = examples;
        self.persist();
        Ok(())
    }

    /// Delete a card.
    pub fn delete_card(&mut self, card_id: Uuid) -> Result<(), StoreError> {
        if !self.cards.iter().any(|c| c.id == card_id) {
            return Err(StoreError::CardNotFound(card_id));
        }
        self.cards.retain(|c| c.id != card_id);
        self.persist();
        Ok(())
    }

    /// Append one example sentence to a card.
    pub fn add_example(&mut self, card_id: Uuid, text: &str) -> Result<(), StoreError> {
        let card = self
            .cards
            .iter_mut()
            .find(|c| c.id == card_id)
            .ok_or(StoreError::CardNotFound(card_id))?;

        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyExample.into());
        }
        let len = text.chars().count();
        if len > MAX_EXAMPLE_LEN {
            return Err(ValidationError::ExampleTooLong { len }.into());
        }
        if card.examples.len() >= MAX_EXAMPLES_PER_CARD {
            return Err(ValidationError::TooManyExamples.into());
        }
        if !contains_ignore_case(text, &card.english_word) {
            return Err(ValidationError::ExampleMissingWord {
                example: text.to_string(),
                word: card.english_word.clone(),
            }
            .into());
        }
        card.examples.push(text.to_string());
        self.persist();
        Ok(())
    }

    // ---- session results ----

    /// Record a completed study session's score.
    ///
    /// Silently no-ops if the catalog was deleted mid-session; the session
    /// flow has already moved past it.
    pub fn record_session_result(
        &mut self,
        catalog_id: Uuid,
        direction: Direction,
        percentage: u8,
    ) {
        match self.catalogs.iter_mut().find(|c| c.id == catalog_id) {
            Some(catalog) => {
                catalog.statistics.set(direction, percentage);
                catalog.last_studied = Some(Utc::now());
                self.persist();
            }
            None => {
                debug!(%catalog_id, "session result for deleted catalog, dropping");
            }
        }
    }

    // ---- read accessors ----

    pub fn catalogs(&self) -> &[Catalog] {
        &self.catalogs
    }

    pub fn catalog(&self, id: Uuid) -> Option<&Catalog> {
        self.catalogs.iter().find(|c| c.id == id)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, id: Uuid) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn cards_in_catalog(&self, catalog_id: Uuid) -> Vec<&Card> {
        self.cards
            .iter()
            .filter(|c| c.catalog_id == catalog_id)
            .collect()
    }

    pub fn card_count(&self, catalog_id: Uuid) -> usize {
        self.cards
            .iter()
            .filter(|c| c.catalog_id == catalog_id)
            .count()
    }

    /// Whether the catalog has enough cards to start a drill.
    pub fn can_study(&self, catalog_id: Uuid) -> bool {
        self.card_count(catalog_id) >= MIN_STUDY_CARDS
    }

    /// Whether the catalog is at its card limit.
    pub fn is_full(&self, catalog_id: Uuid) -> bool {
        self.card_count(catalog_id) >= MAX_CARDS_PER_CATALOG
    }

    /// Every example sentence across all cards, in card insertion order.
    pub fn examples(&self) -> Vec<ExampleRef> {
        self.cards
            .iter()
            .flat_map(|card| {
                card.examples.iter().map(move |text| ExampleRef {
                    text: text.clone(),
                    card_id: card.id,
                    catalog_id: card.catalog_id,
                })
            })
            .collect()
    }

    /// Filter examples by a case-insensitive substring query against the
    /// example text, the card's word or translation, or the catalog name.
    pub fn search_examples(&self, query: &str) -> Vec<ExampleRef> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.examples();
        }
        let mut out = Vec::new();
        for card in &self.cards {
            let card_matches = card.english_word.to_lowercase().contains(&query)
                || card.russian_translation.to_lowercase().contains(&query)
                || self
                    .catalog(card.catalog_id)
                    .is_some_and(|c| c.name.to_lowercase().contains(&query));
            for text in &card.examples {
                if card_matches || text.to_lowercase().contains(&query) {
                    out.push(ExampleRef {
                        text: text.clone(),
                        card_id: card.id,
                        catalog_id: card.catalog_id,
                    });
                }
            }
        }
        out
    }

    // ---- validation & persistence ----

    fn validate_catalog_name(
        &self,
        name: &str,
        exclude: Option<Uuid>,
    ) -> Result<String, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyCatalogName);
        }
        let len = name.chars().count();
        if len > MAX_CATALOG_NAME_LEN {
            return Err(ValidationError::CatalogNameTooLong { len });
        }
        let lower = name.to_lowercase();
        let duplicate = self
            .catalogs
            .iter()
            .any(|c| c.name.to_lowercase() == lower && Some(c.id) != exclude);
        if duplicate {
            return Err(ValidationError::DuplicateCatalogName(name.to_string()));
        }
        Ok(name.to_string())
    }

    fn check_duplicate_word(
        &self,
        catalog_id: Uuid,
        word: &str,
        exclude: Option<Uuid>,
    ) -> Result<(), ValidationError> {
        let lower = word.to_lowercase();
        let duplicate = self.cards.iter().any(|c| {
            c.catalog_id == catalog_id
                && c.english_word.to_lowercase() == lower
                && Some(c.id) != exclude
        });
        if duplicate {
            return Err(ValidationError::DuplicateWord(word.to_string()));
        }
        Ok(())
    }

    fn persist(&mut self) {
        let Some(storage) = self.storage.as_mut() else {
            return;
        };
        if let Err(err) = save_collections(storage.as_mut(), &self.catalogs, &self.cards) {
            warn!(error = %err, "failed to persist vocabulary data");
        }
    }
}

impl Default for VocabularyStore {
    fn default() -> Self {
        Self::new()
    }
}

fn save_collections(
    storage: &mut dyn KeyValueStore,
    catalogs: &[Catalog],
    cards: &[Card],
) -> Result<(), StorageError> {
    let catalogs_json = serde_json::to_string(catalogs)?;
    storage.set(CATALOGS_KEY, &catalogs_json)?;
    let cards_json = serde_json::to_string(cards)?;
    storage.set(CARDS_KEY, &cards_json)?;
    Ok(())
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Trim and validate card fields, dropping blank examples.
fn validate_card_fields(
    english_word: &str,
    russian_translation: &str,
    examples: Vec<String>,
) -> Result<(String, String, Vec<String>), ValidationError> {
    let word = english_word.trim();
    if word.is_empty() {
        return Err(ValidationError::EmptyWord);
    }
    let word_len = word.chars().count();
    if word_len > MAX_WORD_LEN {
        return Err(ValidationError::WordTooLong { len: word_len });
    }

    let translation = russian_translation.trim();
    if translation.is_empty() {
        return Err(ValidationError::EmptyTranslation);
    }
    let translation_len = translation.chars().count();
    if translation_len > MAX_TRANSLATION_LEN {
        return Err(ValidationError::TranslationTooLong {
            len: translation_len,
        });
    }

    let filled: Vec<String> = examples
        .iter()
        .map(|e| e.trim())
        .filter(|e| !e.is_empty())
        .map(str::to_string)
        .collect();
    if filled.len() > MAX_EXAMPLES_PER_CARD {
        return Err(ValidationError::TooManyExamples);
    }
    for example in &filled {
        let len = example.chars().count();
        if len > MAX_EXAMPLE_LEN {
            return Err(ValidationError::ExampleTooLong { len });
        }
        if !contains_ignore_case(example, word) {
            return Err(ValidationError::ExampleMissingWord {
                example: example.clone(),
                word: word.to_string(),
            });
        }
    }

    Ok((word.to_string(), translation.to_string(), filled))
}
