//! Construction-time validation errors

use thiserror::Error;

/// A record is malformed or incomplete
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Identifier is empty or whitespace
    #[error("{kind} identifier cannot be empty")]
    EmptyIdentifier {
        /// Record kind ("competence" or "credential")
        kind: &'static str,
    },

    /// A required field was not supplied
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Competence has no TMBD axis
    #[error("Competence '{0}' has no TMBD axis")]
    MissingAxis(String),

    /// Axis string outside the vocabulary
    #[error("Unknown axis: {0}")]
    UnknownAxis(String),

    /// Level string outside the vocabulary
    #[error("Unknown proficiency level: {0}")]
    UnknownLevel(String),

    /// Source locator is empty
    #[error("Competence '{0}' has no source locator")]
    MissingSourceLocator(String),

    /// Workload is zero, negative or not finite
    #[error("Workload must be positive, got {0}")]
    InvalidWorkload(f64),

    /// EQF level outside 1..=8
    #[error("EQF level must be between 1 and 8, got {0}")]
    InvalidEqfLevel(i64),

    /// Credential lists itself as stackable
    #[error("Credential '{0}' cannot stack with itself")]
    SelfReference(String),

    /// Credential lists the same competence or stack reference twice
    #[error("'{0}' is listed more than once")]
    DuplicateReference(String),

    /// Credential references a retired competence
    #[error("Competence '{0}' is retired")]
    RetiredCompetence(String),

    /// Configured policy rule violated
    #[error("Policy violation: {0}")]
    Policy(String),
}
