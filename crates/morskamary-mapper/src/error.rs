//! Mapper error types

use morskamary_domain::ValidationError;
use thiserror::Error;

/// Which registry an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// Competence registry
    Competence,
    /// Micro-credential registry
    Credential,
}

impl RecordKind {
    /// Get the kind as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Competence => "competence",
            RecordKind::Credential => "credential",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur during mapper operations
///
/// Every failed `add_*` leaves the registries unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MapperError {
    /// Malformed or incomplete record
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Identifier already registered
    #[error("Duplicate {kind} identifier: {id}")]
    DuplicateIdentifier {
        /// Registry the collision happened in
        kind: RecordKind,
        /// Colliding identifier
        id: String,
    },

    /// Credential references a competence that is not registered
    #[error("Unknown competence: {0}")]
    UnknownCompetence(String),

    /// Stackability reference does not resolve
    #[error("Unknown credential: {0}")]
    UnknownCredential(String),

    /// Lookup miss
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Registry that was searched
        kind: RecordKind,
        /// Requested identifier
        id: String,
    },

    /// Competence cannot be retired while credentials bundle it
    #[error("Competence '{id}' is referenced by credentials: {}", .credentials.join(", "))]
    CompetenceInUse {
        /// Competence identifier
        id: String,
        /// Credentials that reference it
        credentials: Vec<String>,
    },

    /// Catalog input could not be parsed
    #[error("Catalog error: {0}")]
    Catalog(String),
}

impl From<serde_json::Error> for MapperError {
    fn from(e: serde_json::Error) -> Self {
        MapperError::Catalog(e.to_string())
    }
}

impl From<csv::Error> for MapperError {
    fn from(e: csv::Error) -> Self {
        MapperError::Catalog(e.to_string())
    }
}
