//! Key-value storage substrate shared by every study component.
//!
//! # Responsibility
//! - Define the synchronous string-keyed store contract (`KeyValueStore`).
//! - Provide in-memory and SQLite-backed implementations.
//!
//! # Invariants
//! - Values are opaque text; JSON encoding is owned by the repository layer.
//! - Writes replace the whole value stored under a key.
//! - Access is single-threaded; implementations do no locking.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
pub mod migrations;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::{open_store, open_store_in_memory, SqliteStore};

/// Key holding the logged-in user's display name.
pub const KEY_USERNAME: &str = "username";
/// Key holding the uploaded note file collection.
pub const KEY_UPLOADED_FILES: &str = "uploadedFiles";
/// Key holding the uploaded link collection.
pub const KEY_UPLOADED_LINKS: &str = "uploadedLinks";
/// Key holding the persisted subject list.
pub const KEY_SUBJECTS: &str = "subjects";
/// Key holding the flashcard deck.
pub const KEY_FLASHCARDS: &str = "flashcards";
/// Key holding the most recently parsed quiz.
pub const KEY_QUIZ_QUESTIONS: &str = "quizQuestions";

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "store schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Synchronous string-keyed store, modelled on browser local storage.
pub trait KeyValueStore {
    /// Returns the raw text stored under `key`, if any.
    fn get_item(&self, key: &str) -> StoreResult<Option<String>>;
    /// Replaces the value stored under `key`.
    fn set_item(&mut self, key: &str, value: &str) -> StoreResult<()>;
    /// Removes `key`. Removing an absent key is not an error.
    fn remove_item(&mut self, key: &str) -> StoreResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> StoreResult<()> {
        (**self).remove_item(key)
    }
}
