//! `StudyRepository` implementation over any `KeyValueStore`.
//!
//! # Responsibility
//! - Map each collection to its fixed store key as JSON text.
//! - Decode leniently: absent, non-JSON or non-array values read as empty,
//!   entries of the wrong shape are skipped.
//!
//! # Invariants
//! - Loads never write. Legacy files without an id get one derived from their
//!   stored position and content, which stays stable until the collection is
//!   next saved; saving persists it.

use crate::model::flashcard::Flashcard;
use crate::model::link_entry::LinkEntry;
use crate::model::note_file::{NoteFile, ReviewStatus};
use crate::model::quiz::QuizQuestion;
use crate::model::subject::subject_name_from_value;
use crate::repo::{RepoResult, StudyRepository};
use crate::store::{
    KeyValueStore, KEY_FLASHCARDS, KEY_QUIZ_QUESTIONS, KEY_SUBJECTS, KEY_UPLOADED_FILES,
    KEY_UPLOADED_LINKS, KEY_USERNAME,
};
use log::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Persisted file shape. Older writers stored neither `id` nor `status`.
#[derive(Debug, Deserialize)]
struct StoredNoteFile {
    #[serde(default)]
    id: Option<Value>,
    name: String,
    #[serde(default)]
    tag: String,
    #[serde(default)]
    status: Option<Value>,
}

/// Repository over a borrowed or owned key-value store.
pub struct KvStudyRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> KvStudyRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn read_array(&self, key: &'static str) -> RepoResult<Vec<Value>> {
        let Some(raw) = self.store.get_item(key)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(items)) => Ok(items),
            Ok(Value::Null) => Ok(Vec::new()),
            Ok(_) => {
                warn!("event=collection_read module=repo status=skip key={key} reason=not_an_array");
                Ok(Vec::new())
            }
            Err(_) => {
                warn!("event=collection_read module=repo status=skip key={key} reason=invalid_json");
                Ok(Vec::new())
            }
        }
    }

    fn read_records<T: DeserializeOwned>(&self, key: &'static str) -> RepoResult<Vec<T>> {
        let items = self.read_array(key)?;
        let total = items.len();
        let records = items
            .into_iter()
            .filter_map(|item| serde_json::from_value::<T>(item).ok())
            .collect::<Vec<_>>();
        warn_on_skipped(key, total, records.len());
        Ok(records)
    }

    fn write_records<T: Serialize>(&mut self, key: &'static str, records: &[T]) -> RepoResult<()> {
        let text = serde_json::to_string(records)?;
        self.store.set_item(key, &text)?;
        Ok(())
    }
}

impl<S: KeyValueStore> StudyRepository for KvStudyRepository<S> {
    fn load_files(&self) -> RepoResult<Vec<NoteFile>> {
        let items = self.read_array(KEY_UPLOADED_FILES)?;
        let total = items.len();
        let files = items
            .into_iter()
            .enumerate()
            .filter_map(|(position, item)| {
                let record = serde_json::from_value::<StoredNoteFile>(item).ok()?;
                let id = record
                    .id
                    .as_ref()
                    .and_then(parse_file_id)
                    .unwrap_or_else(|| legacy_file_id(position, &record.name, &record.tag));
                Some(NoteFile {
                    id,
                    name: record.name,
                    tag: record.tag,
                    status: record
                        .status
                        .as_ref()
                        .and_then(Value::as_str)
                        .and_then(ReviewStatus::parse),
                })
            })
            .collect::<Vec<_>>();
        warn_on_skipped(KEY_UPLOADED_FILES, total, files.len());
        Ok(files)
    }

    fn save_files(&mut self, files: &[NoteFile]) -> RepoResult<()> {
        self.write_records(KEY_UPLOADED_FILES, files)
    }

    fn load_links(&self) -> RepoResult<Vec<LinkEntry>> {
        self.read_records(KEY_UPLOADED_LINKS)
    }

    fn save_links(&mut self, links: &[LinkEntry]) -> RepoResult<()> {
        self.write_records(KEY_UPLOADED_LINKS, links)
    }

    fn load_subjects(&self) -> RepoResult<Vec<String>> {
        let items = self.read_array(KEY_SUBJECTS)?;
        let total = items.len();
        let names = items
            .iter()
            .filter_map(subject_name_from_value)
            .collect::<Vec<_>>();
        warn_on_skipped(KEY_SUBJECTS, total, names.len());
        Ok(names)
    }

    fn save_subjects(&mut self, subjects: &[String]) -> RepoResult<()> {
        self.write_records(KEY_SUBJECTS, subjects)
    }

    fn load_username(&self) -> RepoResult<Option<String>> {
        let Some(raw) = self.store.get_item(KEY_USERNAME)? else {
            return Ok(None);
        };
        // Login writers may store either JSON text or the bare name.
        let name = match serde_json::from_str::<Value>(&raw) {
            Ok(Value::String(name)) => name,
            _ => raw,
        };
        let trimmed = name.trim();
        if trimmed.is_empty() {
            Ok(None)
        } else {
            Ok(Some(trimmed.to_string()))
        }
    }

    fn save_username(&mut self, username: &str) -> RepoResult<()> {
        let text = serde_json::to_string(username)?;
        self.store.set_item(KEY_USERNAME, &text)?;
        Ok(())
    }

    fn load_flashcards(&self) -> RepoResult<Vec<Flashcard>> {
        self.read_records(KEY_FLASHCARDS)
    }

    fn save_flashcards(&mut self, cards: &[Flashcard]) -> RepoResult<()> {
        self.write_records(KEY_FLASHCARDS, cards)
    }

    fn load_quiz(&self) -> RepoResult<Vec<QuizQuestion>> {
        self.read_records(KEY_QUIZ_QUESTIONS)
    }

    fn save_quiz(&mut self, questions: &[QuizQuestion]) -> RepoResult<()> {
        self.write_records(KEY_QUIZ_QUESTIONS, questions)
    }
}

fn parse_file_id(value: &Value) -> Option<Uuid> {
    value.as_str().and_then(|text| Uuid::parse_str(text).ok())
}

fn legacy_file_id(position: usize, name: &str, tag: &str) -> Uuid {
    let seed = format!("{KEY_UPLOADED_FILES}/{position}/{name}/{tag}");
    Uuid::new_v5(&Uuid::NAMESPACE_OID, seed.as_bytes())
}

fn warn_on_skipped(key: &'static str, total: usize, kept: usize) {
    if kept < total {
        warn!(
            "event=collection_read module=repo status=partial key={} skipped={} kept={}",
            key,
            total - kept,
            kept
        );
    }
}
