//! Domain model for uploaded study material and review aids.
//!
//! # Responsibility
//! - Define the records persisted under the store keys.
//! - Keep subject normalization and merge rules in one place.
//!
//! # Invariants
//! - Every `NoteFile` carries a stable `NoteFileId` once loaded or created.
//! - Default subjects are always present and ordered first.

pub mod flashcard;
pub mod link_entry;
pub mod note_file;
pub mod quiz;
pub mod subject;
