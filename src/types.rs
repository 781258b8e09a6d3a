//! Core types for the vocabulary engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum length of a catalog name, in characters.
pub const MAX_CATALOG_NAME_LEN: usize = 50;
/// Maximum length of an English word, in characters.
pub const MAX_WORD_LEN: usize = 50;
/// Maximum length of a Russian translation, in characters.
pub const MAX_TRANSLATION_LEN: usize = 100;
/// Maximum length of a single example sentence, in characters.
pub const MAX_EXAMPLE_LEN: usize = 200;
/// Maximum number of example sentences per card.
pub const MAX_EXAMPLES_PER_CARD: usize = 5;
/// Maximum number of cards a catalog may hold.
pub const MAX_CARDS_PER_CATALOG: usize = 50;
/// Minimum number of cards required to start a study session.
pub const MIN_STUDY_CARDS: usize = 5;

/// Recall drill mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    EnglishToRussian,
    RussianToEnglish,
}

impl Direction {
    /// Get the direction name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EnglishToRussian => "englishToRussian",
            Self::RussianToEnglish => "russianToEnglish",
        }
    }
}

/// Last recorded score (0-100) per drill direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStatistics {
    pub english_to_russian: u8,
    pub russian_to_english: u8,
}

impl CatalogStatistics {
    pub fn get(&self, direction: Direction) -> u8 {
        match direction {
            Direction::EnglishToRussian => self.english_to_russian,
            Direction::RussianToEnglish => self.russian_to_english,
        }
    }

    pub fn set(&mut self, direction: Direction, percentage: u8) {
        match direction {
            Direction::EnglishToRussian => self.english_to_russian = percentage,
            Direction::RussianToEnglish => self.russian_to_english = percentage,
        }
    }
}

/// A named collection of vocabulary cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_studied: Option<DateTime<Utc>>,
    #[serde(default)]
    pub statistics: CatalogStatistics,
}

impl Catalog {
    /// Create a catalog with zero statistics. The name must already be validated.
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            created_at: Utc::now(),
            last_studied: None,
            statistics: CatalogStatistics::default(),
        }
    }
}

/// One vocabulary entry owned by a catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: Uuid,
    pub english_word: String,
    pub russian_translation: String,
    #[serde(default)]
    pub examples: Vec<String>,
    pub catalog_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Card {
    /// Create a card. Fields must already be validated and trimmed.
    pub fn new(
        catalog_id: Uuid,
        english_word: String,
        russian_translation: String,
        examples: Vec<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            english_word,
            russian_translation,
            examples,
            catalog_id,
            created_at: Utc::now(),
        }
    }
}

/// One example sentence with back-references to its card and catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleRef {
    pub text: String,
    pub card_id: Uuid,
    pub catalog_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_serializes_camel_case() {
        let json = serde_json::to_string(&Direction::EnglishToRussian).unwrap();
        assert_eq!(json, "\"englishToRussian\"");
        let json = serde_json::to_string(&Direction::RussianToEnglish).unwrap();
        assert_eq!(json, "\"russianToEnglish\"");
    }

    #[test]
    fn test_statistics_get_set_by_direction() {
        let mut stats = CatalogStatistics::default();
        assert_eq!(stats.get(Direction::EnglishToRussian), 0);

        stats.set(Direction::EnglishToRussian, 80);
        stats.set(Direction::RussianToEnglish, 40);
        assert_eq!(stats.english_to_russian, 80);
        assert_eq!(stats.russian_to_english, 40);
    }

    #[test]
    fn test_catalog_json_field_names() {
        let catalog = Catalog::new("Animals".to_string());
        let value = serde_json::to_value(&catalog).unwrap();
        assert!(value.get("createdAt").is_some());
        assert!(value.get("statistics").is_some());
        // lastStudied is omitted until a session completes
        assert!(value.get("lastStudied").is_none());
    }

    #[test]
    fn test_card_round_trips_through_json() {
        let card = Card::new(
            Uuid::new_v4(),
            "cat".to_string(),
            "кот".to_string(),
            vec!["The cat sleeps".to_string()],
        );
        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, card.id);
        assert_eq!(back.english_word, "cat");
        assert_eq!(back.examples, card.examples);
    }
}
