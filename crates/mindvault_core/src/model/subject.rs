//! Subject names and merge rules.
//!
//! # Invariants
//! - `DEFAULT_SUBJECTS` are always present, first, in declaration order.
//! - Merged lists never contain duplicates (case-sensitive exact match).

use serde_json::Value;
use std::collections::HashSet;

/// Subjects shown even when nothing has been persisted.
pub const DEFAULT_SUBJECTS: [&str; 3] = ["Machine Learning", "Neural Networks", "Deep Learning"];

/// Extracts a subject name from one persisted entry.
///
/// Accepts plain strings and legacy `{ "name": "..." }` objects. Any other
/// shape, or a legacy object with an empty name, yields `None`.
pub fn subject_name_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(name) => Some(name.clone()),
        Value::Object(fields) => match fields.get("name") {
            Some(Value::String(name)) if !name.is_empty() => Some(name.clone()),
            _ => None,
        },
        _ => None,
    }
}

/// Unions defaults with persisted names, keeping the first occurrence.
pub fn merge_with_defaults<S: AsRef<str>>(persisted: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut merged = Vec::with_capacity(DEFAULT_SUBJECTS.len() + persisted.len());
    let candidates = DEFAULT_SUBJECTS
        .iter()
        .copied()
        .chain(persisted.iter().map(AsRef::as_ref));
    for name in candidates {
        if seen.insert(name) {
            merged.push(name.to_string());
        }
    }
    merged
}
