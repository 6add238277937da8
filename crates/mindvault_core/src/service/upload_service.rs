//! Upload use-case service for note files and lecture links.
//!
//! # Responsibility
//! - Append file/link records to their persisted collections.
//! - Register the record's subject tag when it is new.
//!
//! # Invariants
//! - Each upload is a full-collection read-modify-write (O(n) per call).
//! - Rejected input creates no record and writes nothing.
//! - Tag and link text are stored exactly as given.

use crate::config::ValidationMode;
use crate::model::link_entry::LinkEntry;
use crate::model::note_file::NoteFile;
use crate::repo::StudyRepository;
use crate::service::error::{reject, ServiceResult, ValidationError};
use crate::service::subject_registry::SubjectRegistry;
use log::info;

/// A file picked by the user. Only its name is recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

pub struct UploadService<R: StudyRepository> {
    repo: R,
    validation: ValidationMode,
}

impl<R: StudyRepository> UploadService<R> {
    pub fn new(repo: R) -> Self {
        Self::with_validation(repo, ValidationMode::default())
    }

    pub fn with_validation(repo: R, validation: ValidationMode) -> Self {
        Self { repo, validation }
    }

    /// Records an uploaded file under `tag`.
    ///
    /// Returns `Ok(None)` in silent mode when no file is selected or the tag
    /// is blank.
    pub fn upload_file(
        &mut self,
        file: Option<&SelectedFile>,
        tag: &str,
    ) -> ServiceResult<Option<NoteFile>> {
        let Some(file) = file.filter(|file| !file.name.is_empty()) else {
            return reject(self.validation, "file_upload", ValidationError::MissingFile, None);
        };
        if tag.trim().is_empty() {
            return reject(self.validation, "file_upload", ValidationError::EmptyTag, None);
        }

        let record = NoteFile::new(file.name.as_str(), tag);
        let mut files = self.repo.load_files()?;
        files.push(record.clone());
        self.repo.save_files(&files)?;
        self.register_subject(tag)?;

        info!(
            "event=file_upload module=upload status=ok files={}",
            files.len()
        );
        Ok(Some(record))
    }

    /// Records a lecture link under `tag`.
    ///
    /// Returns `Ok(None)` in silent mode when the link or tag is blank.
    pub fn upload_link(&mut self, url: &str, tag: &str) -> ServiceResult<Option<LinkEntry>> {
        if url.trim().is_empty() {
            return reject(self.validation, "link_upload", ValidationError::EmptyUrl, None);
        }
        if tag.trim().is_empty() {
            return reject(self.validation, "link_upload", ValidationError::EmptyTag, None);
        }

        let record = LinkEntry::new(url, tag);
        let mut links = self.repo.load_links()?;
        links.push(record.clone());
        self.repo.save_links(&links)?;
        self.register_subject(tag)?;

        info!(
            "event=link_upload module=upload status=ok links={}",
            links.len()
        );
        Ok(Some(record))
    }

    fn register_subject(&mut self, tag: &str) -> ServiceResult<()> {
        SubjectRegistry::with_validation(&mut self.repo, self.validation).add(tag)?;
        Ok(())
    }
}
