//! Core study-state logic for MindVault.
//! This crate is the single source of truth for subject, upload and review rules.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use config::{CoreConfig, ValidationMode};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::flashcard::{epoch_day_from_millis, Difficulty, Flashcard, FlashcardId};
pub use model::link_entry::LinkEntry;
pub use model::note_file::{NoteFile, NoteFileId, ReviewStatus};
pub use model::quiz::QuizQuestion;
pub use model::subject::DEFAULT_SUBJECTS;
pub use repo::{KvStudyRepository, RepoError, RepoResult, StudyRepository};
pub use service::dashboard_service::{
    DashboardService, DashboardSnapshot, SubjectFilter, SubjectSection, EMPTY_SUBJECT_PLACEHOLDER,
};
pub use service::error::{ServiceError, ServiceResult, ValidationError};
pub use service::flashcard_service::FlashcardService;
pub use service::quiz_service::{parse_mcqs, QuizService};
pub use service::review_service::ReviewService;
pub use service::subject_registry::SubjectRegistry;
pub use service::upload_service::{SelectedFile, UploadService};
pub use store::{
    open_store, open_store_in_memory, KeyValueStore, MemoryStore, SqliteStore, StoreError,
    StoreResult,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
