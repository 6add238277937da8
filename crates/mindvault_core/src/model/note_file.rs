//! Uploaded note file record.
//!
//! # Responsibility
//! - Define the canonical note file record and its review status.
//!
//! # Invariants
//! - `id` is stable and never reused for another file.
//! - An unset `status` means the file still needs review.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for an uploaded note file.
pub type NoteFileId = Uuid;

/// Review lifecycle for an uploaded note file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReviewStatus {
    #[serde(rename = "Reviewed")]
    Reviewed,
    #[serde(rename = "To Review")]
    ToReview,
}

impl ReviewStatus {
    /// Persisted label, shared with the view layer.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Reviewed => "Reviewed",
            Self::ToReview => "To Review",
        }
    }

    /// Parses a persisted label. Unknown labels yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Reviewed" => Some(Self::Reviewed),
            "To Review" => Some(Self::ToReview),
            _ => None,
        }
    }
}

/// One uploaded note file tagged with a subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteFile {
    pub id: NoteFileId,
    /// File name as selected by the user.
    pub name: String,
    /// Subject tag. Expected to name a registered subject, not enforced.
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ReviewStatus>,
}

impl NoteFile {
    /// Creates a file record with a generated stable ID and no status.
    pub fn new(name: impl Into<String>, tag: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name, tag)
    }

    /// Creates a file record with a caller-provided ID.
    pub fn with_id(id: NoteFileId, name: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            tag: tag.into(),
            status: None,
        }
    }

    /// Status as displayed: unset reads as `ToReview`.
    pub fn effective_status(&self) -> ReviewStatus {
        self.status.unwrap_or(ReviewStatus::ToReview)
    }

    pub fn is_reviewed(&self) -> bool {
        self.effective_status() == ReviewStatus::Reviewed
    }
}
