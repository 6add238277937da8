//! Uploaded lecture link record.

use serde::{Deserialize, Serialize};

/// A lecture link tagged with a subject. The URL text is not validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEntry {
    pub link: String,
    #[serde(default)]
    pub tag: String,
}

impl LinkEntry {
    pub fn new(link: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            link: link.into(),
            tag: tag.into(),
        }
    }
}
