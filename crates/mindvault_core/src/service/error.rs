//! Service-level error taxonomy.
//!
//! # Invariants
//! - `Validation` only escapes a service in `ValidationMode::Strict`.
//! - Addressing errors (`IndexOutOfRange`, `FileNotFound`) always escape.

use crate::config::ValidationMode;
use crate::model::flashcard::FlashcardId;
use crate::model::note_file::NoteFileId;
use crate::repo::RepoError;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Empty or missing required input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingFile,
    EmptyTag,
    EmptyUrl,
    EmptySubjectName,
}

impl ValidationError {
    /// Stable machine-readable code, also used in log lines.
    pub fn code(self) -> &'static str {
        match self {
            Self::MissingFile => "missing_file",
            Self::EmptyTag => "empty_tag",
            Self::EmptyUrl => "empty_url",
            Self::EmptySubjectName => "empty_subject_name",
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFile => write!(f, "no file selected"),
            Self::EmptyTag => write!(f, "subject tag cannot be empty"),
            Self::EmptyUrl => write!(f, "link cannot be empty"),
            Self::EmptySubjectName => write!(f, "subject name cannot be empty"),
        }
    }
}

impl Error for ValidationError {}

#[derive(Debug)]
pub enum ServiceError {
    Validation(ValidationError),
    IndexOutOfRange { index: usize, len: usize },
    FileNotFound(NoteFileId),
    FlashcardNotFound(FlashcardId),
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "invalid input: {err}"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "file index {index} out of range for {len} file(s)")
            }
            Self::FileNotFound(id) => write!(f, "file not found: {id}"),
            Self::FlashcardNotFound(id) => write!(f, "flashcard not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Resolves a rejected input according to `mode`.
///
/// Silent mode turns the rejection into `Ok(fallback)`; strict mode surfaces it.
pub(crate) fn reject<T>(
    mode: ValidationMode,
    operation: &'static str,
    err: ValidationError,
    fallback: T,
) -> ServiceResult<T> {
    debug!(
        "event={} module=service status=skip reason={}",
        operation,
        err.code()
    );
    match mode {
        ValidationMode::Silent => Ok(fallback),
        ValidationMode::Strict => Err(ServiceError::Validation(err)),
    }
}
