//! Quiz parsing and storage.
//!
//! # Responsibility
//! - Parse generated multiple-choice text into structured questions.
//! - Keep the latest parsed quiz in the store.
//!
//! # Invariants
//! - Blocks without both `Q:` and `Answer:` markers are ignored.
//! - Storing a quiz replaces the previous one.

use crate::model::quiz::QuizQuestion;
use crate::repo::StudyRepository;
use crate::service::error::ServiceResult;
use log::info;

const QUESTION_MARKER: &str = "Q:";
const ANSWER_MARKER: &str = "Answer:";
const MAX_OPTIONS: usize = 4;

pub struct QuizService<R: StudyRepository> {
    repo: R,
}

impl<R: StudyRepository> QuizService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Parses `raw` and replaces the stored quiz with the result.
    pub fn store(&mut self, raw: &str) -> ServiceResult<Vec<QuizQuestion>> {
        let questions = parse_mcqs(raw);
        self.repo.save_quiz(&questions)?;
        info!(
            "event=quiz_store module=quiz status=ok questions={}",
            questions.len()
        );
        Ok(questions)
    }

    pub fn list(&self) -> ServiceResult<Vec<QuizQuestion>> {
        Ok(self.repo.load_quiz()?)
    }
}

/// Parses blank-line separated question blocks.
///
/// Expected block shape:
///
/// ```text
/// Q: <question>
/// A) <option 1>
/// B) <option 2>
/// C) <option 3>
/// D) <option 4>
/// Answer: <letter>
/// ```
pub fn parse_mcqs(raw: &str) -> Vec<QuizQuestion> {
    let normalized = raw.replace("\r\n", "\n");
    normalized
        .trim()
        .split("\n\n")
        .filter(|block| block.contains(QUESTION_MARKER) && block.contains(ANSWER_MARKER))
        .filter_map(parse_block)
        .collect()
}

fn parse_block(block: &str) -> Option<QuizQuestion> {
    let lines = block.lines().collect::<Vec<_>>();
    let (first, rest) = lines.split_first()?;
    let last = rest.last()?;
    let option_end = rest.len().min(MAX_OPTIONS);

    Some(QuizQuestion {
        question: first.replacen("Q: ", "", 1).trim().to_string(),
        options: rest[..option_end]
            .iter()
            .map(|line| line.trim().to_string())
            .collect(),
        answer: last.replacen("Answer: ", "", 1).trim().to_string(),
    })
}
