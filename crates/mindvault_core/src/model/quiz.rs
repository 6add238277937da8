//! Multiple-choice quiz question.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    /// Option lines as written, e.g. `A) Backpropagation`.
    pub options: Vec<String>,
    /// Correct option letter.
    pub answer: String,
}
