//! Source locators for traceability

use serde::{Deserialize, Serialize};
use std::fmt;

/// Citation pointer to the evidence behind a record
///
/// Free text of the form `document page/section`, e.g. `"DocA p.3"` or
/// `"ESCO-2024.pdf §4.2"`. Only emptiness is checked; the reporting side
/// renders the text verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceLocator(String);

impl SourceLocator {
    /// Create a new source locator
    ///
    /// Returns `None` if the text is empty or whitespace.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return None;
        }
        Some(Self(value.trim().to_string()))
    }

    /// Get the locator as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the locator is empty (possible only through deserialization)
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Document part: everything before the first whitespace
    pub fn document(&self) -> &str {
        self.0.split_whitespace().next().unwrap_or("")
    }
}

impl fmt::Display for SourceLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
