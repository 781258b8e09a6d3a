//! Persistent cache of translation lookups.
//!
//! Keys are `lowercase(text)_from_to`, so lookups are case-insensitive on
//! the input text. Entries never expire and the cache never evicts; every
//! put rewrites the persisted copy in full under the `translation_cache`
//! key. Dataset size makes unbounded growth acceptable here.

use super::{Language, Suggestion};
use crate::storage::{load_or_default, KeyValueStore, TRANSLATION_CACHE_KEY};
use std::collections::HashMap;
use tracing::{debug, warn};

/// In-memory suggestion cache with optional key-value persistence.
pub struct TranslationCache {
    entries: HashMap<String, Vec<Suggestion>>,
    storage: Option<Box<dyn KeyValueStore>>,
}

/// Build the normalized cache key for a text and language pair.
pub fn cache_key(text: &str, from: Language, to: Language) -> String {
    format!("{}_{}_{}", text.to_lowercase(), from.code(), to.code())
}

impl TranslationCache {
    /// Create an empty cache with no persistence.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            storage: None,
        }
    }

    /// Create a cache backed by `storage`, loading any persisted entries.
    pub fn with_storage(storage: Box<dyn KeyValueStore>) -> Self {
        let entries = load_or_default(storage.as_ref(), TRANSLATION_CACHE_KEY);
        Self {
            entries,
            storage: Some(storage),
        }
    }

    /// Look up cached suggestions for a text and language pair.
    pub fn get(&self, text: &str, from: Language, to: Language) -> Option<&[Suggestion]> {
        let key = cache_key(text, from, to);
        let hit = self.entries.get(&key).map(Vec::as_slice);
        debug!(key = %key, hit = hit.is_some(), "translation cache lookup");
        hit
    }

    /// Store suggestions, overwriting any existing entry for the key.
    pub fn put(&mut self, text: &str, from: Language, to: Language, suggestions: Vec<Suggestion>) {
        self.entries.insert(cache_key(text, from, to), suggestions);
        self.persist();
    }

    /// Drop all entries, in memory and persisted.
    pub fn clear(&mut self) {
        self.entries.clear();
        if let Some(storage) = self.storage.as_mut() {
            if let Err(err) = storage.remove(TRANSLATION_CACHE_KEY) {
                warn!(error = %err, "failed to remove persisted translation cache");
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn persist(&mut self) {
        let Some(storage) = self.storage.as_mut() else {
            return;
        };
        let result = serde_json::to_string(&self.entries)
            .map_err(Into::into)
            .and_then(|json| storage.set(TRANSLATION_CACHE_KEY, &json));
        if let Err(err) = result {
            warn!(error = %err, "failed to persist translation cache");
        }
    }
}

impl Default for TranslationCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_get_is_case_insensitive_on_text() {
        let mut cache = TranslationCache::new();
        cache.put(
            "Hello",
            Language::En,
            Language::Ru,
            vec![Suggestion::primary("привет".to_string())],
        );

        let hit = cache.get("hello", Language::En, Language::Ru).unwrap();
        assert_eq!(hit.len(), 1);
        assert_eq!(hit[0].text, "привет");
    }

    #[test]
    fn test_language_pair_is_part_of_the_key() {
        let mut cache = TranslationCache::new();
        cache.put(
            "hello",
            Language::En,
            Language::Ru,
            vec![Suggestion::primary("привет".to_string())],
        );
        assert!(cache.get("hello", Language::Ru, Language::En).is_none());
    }

    #[test]
    fn test_put_overwrites_existing_entry() {
        let mut cache = TranslationCache::new();
        cache.put(
            "hello",
            Language::En,
            Language::Ru,
            vec![Suggestion::primary("привет".to_string())],
        );
        cache.put(
            "hello",
            Language::En,
            Language::Ru,
            vec![Suggestion::primary("здравствуйте".to_string())],
        );
        let hit = cache.get("hello", Language::En, Language::Ru).unwrap();
        assert_eq!(hit[0].text, "здравствуйте");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_persists_and_reloads() {
        let mut backing = MemoryStore::new();
        {
            let mut seed = TranslationCache::new();
            seed.put(
                "hello",
                Language::En,
                Language::Ru,
                vec![Suggestion::primary("привет".to_string())],
            );
            let json = serde_json::to_string(&seed.entries).unwrap();
            backing.set(TRANSLATION_CACHE_KEY, &json).unwrap();
        }
        let cache = TranslationCache::with_storage(Box::new(backing));
        assert_eq!(cache.len(), 1);
        assert!(cache.get("HELLO", Language::En, Language::Ru).is_some());
    }

    #[test]
    fn test_clear_empties_memory_and_storage() {
        let mut cache = TranslationCache::with_storage(Box::new(MemoryStore::new()));
        cache.put(
            "hello",
            Language::En,
            Language::Ru,
            vec![Suggestion::primary("привет".to_string())],
        );
        cache.clear();
        assert!(cache.is_empty());
        assert!(cache.get("hello", Language::En, Language::Ru).is_none());
    }
}
