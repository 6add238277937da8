//! Flashcard deck use-case service.
//!
//! # Responsibility
//! - Generate flashcards from extracted study text and append them to the deck.
//! - Apply difficulty ratings and schedule the next review.
//!
//! # Invariants
//! - New card ids continue after the highest id already in the deck.
//! - Generation picks sentences in source order, so it is deterministic.

use crate::model::flashcard::{Difficulty, Flashcard, FlashcardId};
use crate::repo::StudyRepository;
use crate::service::error::{ServiceError, ServiceResult};
use log::info;

const SENTENCE_SEPARATOR: &str = ". ";

pub struct FlashcardService<R: StudyRepository> {
    repo: R,
}

impl<R: StudyRepository> FlashcardService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn list(&self) -> ServiceResult<Vec<Flashcard>> {
        Ok(self.repo.load_flashcards()?)
    }

    /// Cards due on `today_epoch_day`, including never-rated ones.
    pub fn due(&self, today_epoch_day: i64) -> ServiceResult<Vec<Flashcard>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|card| card.is_due(today_epoch_day))
            .collect())
    }

    /// Creates up to `count` cards from `text` and returns only the new ones.
    pub fn generate(&mut self, text: &str, count: usize) -> ServiceResult<Vec<Flashcard>> {
        let sentences = split_sentences(text);
        if sentences.is_empty() || count == 0 {
            return Ok(Vec::new());
        }

        let mut deck = self.repo.load_flashcards()?;
        let next_id = deck.iter().map(|card| card.id).max().unwrap_or(0);
        let created = sentences
            .into_iter()
            .take(count)
            .zip(1..)
            .map(|(sentence, offset): (&str, FlashcardId)| {
                Flashcard::new(next_id.saturating_add(offset), sentence)
            })
            .collect::<Vec<_>>();

        deck.extend(created.iter().cloned());
        self.repo.save_flashcards(&deck)?;
        info!(
            "event=flashcard_generate module=flashcards status=ok created={} deck={}",
            created.len(),
            deck.len()
        );
        Ok(created)
    }

    /// Rates card `id` and returns its next review epoch day.
    pub fn rate(
        &mut self,
        id: FlashcardId,
        difficulty: Difficulty,
        today_epoch_day: i64,
    ) -> ServiceResult<i64> {
        let mut deck = self.repo.load_flashcards()?;
        let card = deck
            .iter_mut()
            .find(|card| card.id == id)
            .ok_or(ServiceError::FlashcardNotFound(id))?;
        let next_review = card.rate(difficulty, today_epoch_day);
        self.repo.save_flashcards(&deck)?;
        info!(
            "event=flashcard_rate module=flashcards status=ok difficulty={:?} next_review={}",
            difficulty, next_review
        );
        Ok(next_review)
    }
}

fn split_sentences(text: &str) -> Vec<&str> {
    text.split(SENTENCE_SEPARATOR)
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .collect()
}
