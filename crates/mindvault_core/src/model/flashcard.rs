//! Flashcard record and spaced-review scheduling rules.
//!
//! # Invariants
//! - `id` is unique within one deck and never reused.
//! - `next_review` is an epoch day (days since 1970-01-01), `None` until rated.

use serde::{Deserialize, Serialize};

pub type FlashcardId = u32;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// How hard the learner found a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }
}

/// One flashcard generated from study material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub id: FlashcardId,
    pub content: String,
    #[serde(default)]
    pub next_review: Option<i64>,
    #[serde(default)]
    pub easiness_streak: u32,
}

impl Flashcard {
    pub fn new(id: FlashcardId, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
            next_review: None,
            easiness_streak: 0,
        }
    }

    /// Applies one rating and returns the next review epoch day.
    ///
    /// Rules:
    /// - `Easy`: streak +1; 30 days once the streak reaches 2, else 7 days.
    /// - `Medium`: 5 days.
    /// - `Hard`: 2 days. The streak is left untouched.
    pub fn rate(&mut self, difficulty: Difficulty, today_epoch_day: i64) -> i64 {
        let interval_days = match difficulty {
            Difficulty::Easy => {
                self.easiness_streak = self.easiness_streak.saturating_add(1);
                if self.easiness_streak >= 2 {
                    30
                } else {
                    7
                }
            }
            Difficulty::Medium => 5,
            Difficulty::Hard => 2,
        };
        let next = today_epoch_day + interval_days;
        self.next_review = Some(next);
        next
    }

    /// Whether the card should be shown on `today_epoch_day`.
    pub fn is_due(&self, today_epoch_day: i64) -> bool {
        self.next_review.map_or(true, |day| day <= today_epoch_day)
    }
}

/// Converts Unix epoch milliseconds to an epoch day.
pub fn epoch_day_from_millis(epoch_ms: i64) -> i64 {
    epoch_ms.div_euclid(MILLIS_PER_DAY)
}
