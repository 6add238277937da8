//! Subject registry use-case service.
//!
//! # Responsibility
//! - Derive the working subject list (defaults plus persisted names).
//! - Grow the persisted list when a new subject is introduced.
//!
//! # Invariants
//! - `load` never writes to storage.
//! - `add` rewrites the full merged list, never a partial patch.
//! - Subjects are never removed.

use crate::config::ValidationMode;
use crate::model::subject::merge_with_defaults;
use crate::repo::StudyRepository;
use crate::service::error::{reject, ServiceResult, ValidationError};
use log::info;

pub struct SubjectRegistry<R: StudyRepository> {
    repo: R,
    validation: ValidationMode,
}

impl<R: StudyRepository> SubjectRegistry<R> {
    pub fn new(repo: R) -> Self {
        Self::with_validation(repo, ValidationMode::default())
    }

    pub fn with_validation(repo: R, validation: ValidationMode) -> Self {
        Self { repo, validation }
    }

    /// Returns defaults followed by persisted subjects, deduplicated.
    pub fn load(&self) -> ServiceResult<Vec<String>> {
        let persisted = self.repo.load_subjects()?;
        Ok(merge_with_defaults(&persisted))
    }

    /// Case-sensitive membership check against the merged list.
    pub fn contains(&self, name: &str) -> ServiceResult<bool> {
        Ok(self.load()?.iter().any(|subject| subject == name))
    }

    /// Appends `name` when it is new and persists the merged list.
    ///
    /// Empty names and already-known names leave storage untouched and return
    /// the current list.
    pub fn add(&mut self, name: &str) -> ServiceResult<Vec<String>> {
        let mut subjects = self.load()?;
        if name.trim().is_empty() {
            return reject(
                self.validation,
                "subject_add",
                ValidationError::EmptySubjectName,
                subjects,
            );
        }
        if subjects.iter().any(|subject| subject == name) {
            return Ok(subjects);
        }

        subjects.push(name.to_string());
        self.repo.save_subjects(&subjects)?;
        info!(
            "event=subject_add module=subjects status=ok total={}",
            subjects.len()
        );
        Ok(subjects)
    }
}
