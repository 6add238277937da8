//! Repository layer over the key-value store.
//!
//! # Responsibility
//! - Define the collection-level data access contract (`StudyRepository`).
//! - Own JSON encoding and lenient decoding of persisted collections.
//!
//! # Invariants
//! - Malformed persisted data reads as empty; it is logged, never raised.
//! - Writes replace the whole collection under its key.
//! - Transport failures from the store are surfaced as `RepoError::Store`.

use crate::model::flashcard::Flashcard;
use crate::model::link_entry::LinkEntry;
use crate::model::note_file::NoteFile;
use crate::model::quiz::QuizQuestion;
use crate::store::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod kv_repo;

pub use kv_repo::KvStudyRepository;

pub type RepoResult<T> = Result<T, RepoError>;

#[derive(Debug)]
pub enum RepoError {
    Store(StoreError),
    Encode(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode collection: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Collection-level access to persisted study data.
pub trait StudyRepository {
    /// Loads uploaded files without writing. Records persisted without an id
    /// get a deterministic one, so ids match across loads of the same data.
    fn load_files(&self) -> RepoResult<Vec<NoteFile>>;
    fn save_files(&mut self, files: &[NoteFile]) -> RepoResult<()>;
    fn load_links(&self) -> RepoResult<Vec<LinkEntry>>;
    fn save_links(&mut self, links: &[LinkEntry]) -> RepoResult<()>;
    /// Loads persisted subject names as stored, without defaults.
    fn load_subjects(&self) -> RepoResult<Vec<String>>;
    fn save_subjects(&mut self, subjects: &[String]) -> RepoResult<()>;
    fn load_username(&self) -> RepoResult<Option<String>>;
    fn save_username(&mut self, username: &str) -> RepoResult<()>;
    fn load_flashcards(&self) -> RepoResult<Vec<Flashcard>>;
    fn save_flashcards(&mut self, cards: &[Flashcard]) -> RepoResult<()>;
    fn load_quiz(&self) -> RepoResult<Vec<QuizQuestion>>;
    fn save_quiz(&mut self, questions: &[QuizQuestion]) -> RepoResult<()>;
}

impl<R: StudyRepository + ?Sized> StudyRepository for &mut R {
    fn load_files(&self) -> RepoResult<Vec<NoteFile>> {
        (**self).load_files()
    }

    fn save_files(&mut self, files: &[NoteFile]) -> RepoResult<()> {
        (**self).save_files(files)
    }

    fn load_links(&self) -> RepoResult<Vec<LinkEntry>> {
        (**self).load_links()
    }

    fn save_links(&mut self, links: &[LinkEntry]) -> RepoResult<()> {
        (**self).save_links(links)
    }

    fn load_subjects(&self) -> RepoResult<Vec<String>> {
        (**self).load_subjects()
    }

    fn save_subjects(&mut self, subjects: &[String]) -> RepoResult<()> {
        (**self).save_subjects(subjects)
    }

    fn load_username(&self) -> RepoResult<Option<String>> {
        (**self).load_username()
    }

    fn save_username(&mut self, username: &str) -> RepoResult<()> {
        (**self).save_username(username)
    }

    fn load_flashcards(&self) -> RepoResult<Vec<Flashcard>> {
        (**self).load_flashcards()
    }

    fn save_flashcards(&mut self, cards: &[Flashcard]) -> RepoResult<()> {
        (**self).save_flashcards(cards)
    }

    fn load_quiz(&self) -> RepoResult<Vec<QuizQuestion>> {
        (**self).load_quiz()
    }

    fn save_quiz(&mut self, questions: &[QuizQuestion]) -> RepoResult<()> {
        (**self).save_quiz(questions)
    }
}
