//! Study use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into the operations views invoke.
//! - Keep views decoupled from storage keys and JSON shapes.

pub mod dashboard_service;
pub mod error;
pub mod flashcard_service;
pub mod quiz_service;
pub mod review_service;
pub mod subject_registry;
pub mod upload_service;
