//! Study session state machine for recall drills.
//!
//! A session snapshots a catalog's cards at start, shuffles them with an
//! unbiased Fisher-Yates shuffle, and walks the permutation exactly once.
//! Submitting an answer records its outcome for the current card; advancing
//! either moves to the next card or finishes the session, recording the
//! final percentage on the owning catalog.

use crate::error::SessionError;
use crate::store::VocabularyStore;
use crate::types::{Card, Direction, MIN_STUDY_CARDS};
use rand::seq::SliceRandom;
use uuid::Uuid;

/// Result of submitting an answer for the current card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub is_correct: bool,
    /// The expected answer, for display when the submission was wrong.
    pub expected: String,
}

/// Summary of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub total_cards: usize,
    pub correct_answers: usize,
    pub percentage: u8,
}

/// Outcome of an [`StudySession::advance`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Moved to the next card.
    Next,
    /// The drill is over; the summary has been recorded on the catalog.
    Finished(SessionSummary),
}

/// An in-progress recall drill over one catalog. Never persisted.
pub struct StudySession {
    catalog_id: Uuid,
    cards: Vec<Card>,
    direction: Direction,
    index: usize,
    correct: usize,
    answered: Option<SubmitOutcome>,
    finished: bool,
}

impl StudySession {
    /// Start a drill over a snapshot of `cards`, shuffled uniformly.
    ///
    /// Requires at least [`MIN_STUDY_CARDS`] cards.
    pub fn start(
        catalog_id: Uuid,
        mut cards: Vec<Card>,
        direction: Direction,
    ) -> Result<Self, SessionError> {
        if cards.len() < MIN_STUDY_CARDS {
            return Err(SessionError::NotEnoughCards { have: cards.len() });
        }
        cards.shuffle(&mut rand::rng());
        Ok(Self {
            catalog_id,
            cards,
            direction,
            index: 0,
            correct: 0,
            answered: None,
            finished: false,
        })
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn catalog_id(&self) -> Uuid {
        self.catalog_id
    }

    /// The card currently shown.
    pub fn current_card(&self) -> &Card {
        &self.cards[self.index]
    }

    /// The text asked of the user for the current card.
    pub fn prompt(&self) -> &str {
        match self.direction {
            Direction::EnglishToRussian => &self.current_card().english_word,
            Direction::RussianToEnglish => &self.current_card().russian_translation,
        }
    }

    /// The answer expected for the current card.
    pub fn expected_answer(&self) -> &str {
        match self.direction {
            Direction::EnglishToRussian => &self.current_card().russian_translation,
            Direction::RussianToEnglish => &self.current_card().english_word,
        }
    }

    /// 1-based position and total, for progress display.
    pub fn progress(&self) -> (usize, usize) {
        (self.index + 1, self.cards.len())
    }

    /// The recorded outcome for the current card, if one was submitted.
    pub fn last_outcome(&self) -> Option<&SubmitOutcome> {
        self.answered.as_ref()
    }

    /// Check an answer against the current card.
    ///
    /// Comparison trims leading/trailing whitespace and case-folds; no
    /// partial credit. A correct answer counts once: submitting again before
    /// advancing returns the already-recorded outcome.
    pub fn submit(&mut self, answer: &str) -> Result<SubmitOutcome, SessionError> {
        if self.finished {
            return Err(SessionError::Finished);
        }
        if let Some(outcome) = &self.answered {
            return Ok(outcome.clone());
        }
        let expected = self.expected_answer().to_string();
        let is_correct = answer.trim().to_lowercase() == expected.trim().to_lowercase();
        if is_correct {
            self.correct += 1;
        }
        let outcome = SubmitOutcome {
            is_correct,
            expected,
        };
        self.answered = Some(outcome.clone());
        Ok(outcome)
    }

    /// Move to the next card, or finish the drill.
    ///
    /// On the last card this computes the half-up-rounded percentage,
    /// records it through the store (a no-op if the catalog was deleted
    /// mid-session), and returns the summary.
    pub fn advance(&mut self, store: &mut VocabularyStore) -> Result<Step, SessionError> {
        if self.finished {
            return Err(SessionError::Finished);
        }
        self.answered = None;
        if self.index + 1 < self.cards.len() {
            self.index += 1;
            return Ok(Step::Next);
        }

        self.finished = true;
        let total = self.cards.len();
        let percentage = (self.correct as f64 / total as f64 * 100.0).round() as u8;
        store.record_session_result(self.catalog_id, self.direction, percentage);
        Ok(Step::Finished(SessionSummary {
            total_cards: total,
            correct_answers: self.correct,
            percentage,
        }))
    }

    /// Discard the session without recording a result.
    pub fn abandon(self) {}
}

impl VocabularyStore {
    /// Start a study session over a catalog's current cards.
    pub fn start_session(
        &self,
        catalog_id: Uuid,
        direction: Direction,
    ) -> Result<StudySession, SessionError> {
        let cards: Vec<Card> = self
            .cards_in_catalog(catalog_id)
            .into_iter()
            .cloned()
            .collect();
        StudySession::start(catalog_id, cards, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn sample_cards(n: usize) -> Vec<Card> {
        let catalog_id = Uuid::new_v4();
        (0..n)
            .map(|i| {
                Card::new(
                    catalog_id,
                    format!("word{i}"),
                    format!("слово{i}"),
                    vec![],
                )
            })
            .collect()
    }

    #[test]
    fn test_start_requires_five_cards() {
        let cards = sample_cards(4);
        let err = StudySession::start(cards[0].catalog_id, cards, Direction::EnglishToRussian);
        assert!(matches!(
            err,
            Err(SessionError::NotEnoughCards { have: 4 })
        ));
    }

    #[test]
    fn test_start_produces_a_permutation() {
        let cards = sample_cards(5);
        let ids: HashSet<Uuid> = cards.iter().map(|c| c.id).collect();
        let session =
            StudySession::start(cards[0].catalog_id, cards, Direction::EnglishToRussian).unwrap();
        let shuffled: HashSet<Uuid> = session.cards.iter().map(|c| c.id).collect();
        assert_eq!(shuffled, ids);
        assert_eq!(session.progress(), (1, 5));
    }

    #[test]
    fn test_submit_trims_and_case_folds() {
        let cards = sample_cards(5);
        let mut session =
            StudySession::start(cards[0].catalog_id, cards, Direction::EnglishToRussian).unwrap();
        let expected = session.expected_answer().to_string();

        let outcome = session.submit(&format!("  {}  ", expected.to_uppercase())).unwrap();
        assert!(outcome.is_correct);
        assert_eq!(outcome.expected, expected);
    }

    #[test]
    fn test_submit_twice_counts_once() {
        let cards = sample_cards(5);
        let mut session =
            StudySession::start(cards[0].catalog_id, cards, Direction::RussianToEnglish).unwrap();
        let answer = session.expected_answer().to_string();

        session.submit(&answer).unwrap();
        let again = session.submit(&answer).unwrap();
        assert!(again.is_correct);
        assert_eq!(session.correct, 1);
    }

    #[test]
    fn test_direction_selects_prompt_and_answer() {
        let cards = sample_cards(5);
        let session =
            StudySession::start(cards[0].catalog_id, cards, Direction::EnglishToRussian).unwrap();
        assert_eq!(session.prompt(), session.current_card().english_word);
        assert_eq!(
            session.expected_answer(),
            session.current_card().russian_translation
        );
    }

    #[test]
    fn test_three_of_five_scores_sixty_percent() {
        let mut store = VocabularyStore::new();
        let catalog_id = store.create_catalog("Drill").unwrap();
        for i in 0..5 {
            store
                .create_card(catalog_id, &format!("word{i}"), &format!("слово{i}"), vec![])
                .unwrap();
        }
        let mut session = store
            .start_session(catalog_id, Direction::EnglishToRussian)
            .unwrap();

        for round in 0..5 {
            if round < 3 {
                let answer = session.expected_answer().to_string();
                assert!(session.submit(&answer).unwrap().is_correct);
            } else {
                assert!(!session.submit("wrong").unwrap().is_correct);
            }
            let step = session.advance(&mut store).unwrap();
            if round < 4 {
                assert_eq!(step, Step::Next);
            } else {
                assert_eq!(
                    step,
                    Step::Finished(SessionSummary {
                        total_cards: 5,
                        correct_answers: 3,
                        percentage: 60,
                    })
                );
            }
        }

        let catalog = store.catalog(catalog_id).unwrap();
        assert_eq!(catalog.statistics.english_to_russian, 60);
        assert!(catalog.last_studied.is_some());

        assert_eq!(session.submit("anything"), Err(SessionError::Finished));
        assert_eq!(session.advance(&mut store), Err(SessionError::Finished));
    }

    #[test]
    fn test_advance_clears_last_outcome() {
        let cards = sample_cards(5);
        let catalog_id = cards[0].catalog_id;
        let mut store = VocabularyStore::new();
        let mut session =
            StudySession::start(catalog_id, cards, Direction::EnglishToRussian).unwrap();

        session.submit("wrong").unwrap();
        assert!(session.last_outcome().is_some());
        session.advance(&mut store).unwrap();
        assert!(session.last_outcome().is_none());
        assert_eq!(session.progress(), (2, 5));
    }

    #[test]
    fn test_rounding_is_half_up() {
        // 1 of 8 = 12.5 -> 13
        let mut store = VocabularyStore::new();
        let catalog_id = store.create_catalog("Rounding").unwrap();
        for i in 0..8 {
            store
                .create_card(catalog_id, &format!("word{i}"), "слово", vec![])
                .unwrap();
        }
        let mut session = store
            .start_session(catalog_id, Direction::EnglishToRussian)
            .unwrap();
        let answer = session.expected_answer().to_string();
        session.submit(&answer).unwrap();
        let mut last = session.advance(&mut store).unwrap();
        while last == Step::Next {
            last = session.advance(&mut store).unwrap();
        }
        assert_eq!(
            last,
            Step::Finished(SessionSummary {
                total_cards: 8,
                correct_answers: 1,
                percentage: 13,
            })
        );
    }

    #[test]
    fn test_abandon_records_nothing() {
        let mut store = VocabularyStore::new();
        let catalog_id = store.create_catalog("Drill").unwrap();
        for i in 0..5 {
            store
                .create_card(catalog_id, &format!("word{i}"), "слово", vec![])
                .unwrap();
        }
        let mut session = store
            .start_session(catalog_id, Direction::EnglishToRussian)
            .unwrap();
        let answer = session.expected_answer().to_string();
        session.submit(&answer).unwrap();
        session.abandon();

        let catalog = store.catalog(catalog_id).unwrap();
        assert_eq!(catalog.statistics.english_to_russian, 0);
        assert!(catalog.last_studied.is_none());
    }
}
