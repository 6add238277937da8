//! Dashboard read path.
//!
//! # Responsibility
//! - Provide the snapshot the dashboard renders on mount.
//! - Filter files and links by a selected subject.
//!
//! # Invariants
//! - Filtering is exact, case-sensitive tag equality.
//! - Filtered sequences keep insertion order.
//! - Reads only; the store is never written from here.
//! - No selection yields no section; a selection with no matches yields an
//!   empty section carrying the placeholder text.

use crate::model::link_entry::LinkEntry;
use crate::model::note_file::NoteFile;
use crate::model::subject::merge_with_defaults;
use crate::repo::StudyRepository;
use crate::service::error::ServiceResult;

/// Text shown for a selected subject with nothing uploaded.
pub const EMPTY_SUBJECT_PLACEHOLDER: &str = "No notes or links uploaded for this subject yet.";

/// Everything the dashboard shows before any selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSnapshot {
    pub username: Option<String>,
    pub subjects: Vec<String>,
    pub files: Vec<NoteFile>,
    pub links: Vec<LinkEntry>,
}

/// Files and links whose tag equals one subject.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubjectFilter {
    pub files: Vec<NoteFile>,
    pub links: Vec<LinkEntry>,
}

impl SubjectFilter {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.links.is_empty()
    }
}

/// Section rendered for a selected subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectSection {
    pub subject: String,
    pub matches: SubjectFilter,
}

impl SubjectSection {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Placeholder to render instead of items, when there are none.
    pub fn placeholder(&self) -> Option<&'static str> {
        self.is_empty().then_some(EMPTY_SUBJECT_PLACEHOLDER)
    }
}

pub struct DashboardService<R: StudyRepository> {
    repo: R,
}

impl<R: StudyRepository> DashboardService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn snapshot(&self) -> ServiceResult<DashboardSnapshot> {
        let persisted = self.repo.load_subjects()?;
        Ok(DashboardSnapshot {
            username: self.repo.load_username()?,
            subjects: merge_with_defaults(&persisted),
            files: self.repo.load_files()?,
            links: self.repo.load_links()?,
        })
    }

    pub fn filter_by_subject(&self, subject: &str) -> ServiceResult<SubjectFilter> {
        let files = self.repo.load_files()?;
        let links = self.repo.load_links()?;
        Ok(filter_collections(files, links, subject))
    }

    /// Returns `None` when nothing is selected.
    pub fn section(&self, selected: Option<&str>) -> ServiceResult<Option<SubjectSection>> {
        let Some(subject) = selected.filter(|value| !value.is_empty()) else {
            return Ok(None);
        };
        let matches = self.filter_by_subject(subject)?;
        Ok(Some(SubjectSection {
            subject: subject.to_string(),
            matches,
        }))
    }
}

/// Keeps records tagged exactly `subject`, preserving order.
pub fn filter_collections(
    files: Vec<NoteFile>,
    links: Vec<LinkEntry>,
    subject: &str,
) -> SubjectFilter {
    SubjectFilter {
        files: files.into_iter().filter(|file| file.tag == subject).collect(),
        links: links.into_iter().filter(|link| link.tag == subject).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::filter_collections;
    use crate::model::link_entry::LinkEntry;
    use crate::model::note_file::NoteFile;

    #[test]
    fn filter_keeps_exact_matches_in_order() {
        let files = vec![
            NoteFile::new("a", "X"),
            NoteFile::new("b", "Y"),
            NoteFile::new("c", "X"),
            NoteFile::new("d", "x"),
        ];
        let links = vec![LinkEntry::new("https://y", "Y"), LinkEntry::new("https://x", "X")];

        let filtered = filter_collections(files, links, "X");
        let names = filtered
            .files
            .iter()
            .map(|file| file.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["a", "c"]);
        assert_eq!(filtered.links, vec![LinkEntry::new("https://x", "X")]);
    }
}
