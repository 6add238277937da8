//! Review tracking use-case service.
//!
//! # Responsibility
//! - Set review status on uploaded files and delete them.
//! - Offer positional addressing (as the list is displayed) and stable-id
//!   addressing.
//!
//! # Invariants
//! - Every mutation rewrites the full file collection.
//! - Positional indices are invalidated by any delete; callers re-fetch.
//! - Status writes overwrite; no history is kept.

use crate::model::note_file::{NoteFile, NoteFileId, ReviewStatus};
use crate::repo::StudyRepository;
use crate::service::error::{ServiceError, ServiceResult};
use log::info;

pub struct ReviewService<R: StudyRepository> {
    repo: R,
}

impl<R: StudyRepository> ReviewService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns files in display (insertion) order.
    pub fn list(&mut self) -> ServiceResult<Vec<NoteFile>> {
        Ok(self.repo.load_files()?)
    }

    /// Sets the status of the file at `index` and returns the updated list.
    pub fn set_status(
        &mut self,
        index: usize,
        status: ReviewStatus,
    ) -> ServiceResult<Vec<NoteFile>> {
        let mut files = self.repo.load_files()?;
        let len = files.len();
        let file = files
            .get_mut(index)
            .ok_or(ServiceError::IndexOutOfRange { index, len })?;
        file.status = Some(status);
        self.persist("file_status", files)
    }

    /// Removes the file at `index`; later files shift down by one.
    pub fn delete_file(&mut self, index: usize) -> ServiceResult<Vec<NoteFile>> {
        let mut files = self.repo.load_files()?;
        if index >= files.len() {
            return Err(ServiceError::IndexOutOfRange {
                index,
                len: files.len(),
            });
        }
        files.remove(index);
        self.persist("file_delete", files)
    }

    /// Sets the status of the file with stable `id`.
    pub fn set_status_by_id(
        &mut self,
        id: NoteFileId,
        status: ReviewStatus,
    ) -> ServiceResult<Vec<NoteFile>> {
        let mut files = self.repo.load_files()?;
        let file = files
            .iter_mut()
            .find(|file| file.id == id)
            .ok_or(ServiceError::FileNotFound(id))?;
        file.status = Some(status);
        self.persist("file_status", files)
    }

    /// Removes the file with stable `id`.
    pub fn delete_file_by_id(&mut self, id: NoteFileId) -> ServiceResult<Vec<NoteFile>> {
        let mut files = self.repo.load_files()?;
        let position = files
            .iter()
            .position(|file| file.id == id)
            .ok_or(ServiceError::FileNotFound(id))?;
        files.remove(position);
        self.persist("file_delete", files)
    }

    fn persist(&mut self, event: &'static str, files: Vec<NoteFile>) -> ServiceResult<Vec<NoteFile>> {
        self.repo.save_files(&files)?;
        info!(
            "event={} module=review status=ok files={}",
            event,
            files.len()
        );
        Ok(files)
    }
}
