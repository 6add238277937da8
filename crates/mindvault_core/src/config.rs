//! Core runtime configuration.
//!
//! # Responsibility
//! - Carry knobs shared by services and embedders (FFI, CLI).
//!
//! # Invariants
//! - `CoreConfig::default()` ignores invalid input silently; `Strict` surfaces it as errors.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How services react to empty required input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Rejected input is a no-op; the caller sees no error.
    #[default]
    Silent,
    /// Rejected input is returned as `ServiceError::Validation`.
    Strict,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    pub validation: ValidationMode,
    /// SQLite store location. Embedders pick a default when unset.
    pub store_path: Option<PathBuf>,
}

impl CoreConfig {
    /// Parses a JSON config document; missing fields take defaults.
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
