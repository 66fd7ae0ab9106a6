//! Morskamary Domain Layer
//!
//! The classification model for mapping ocean-related skills onto the
//! Tripartite Model of Blue Dynamics (TMBD) and packaging them into
//! micro-credentials.
//!
//! ## Key Concepts
//!
//! - **Axis**: One of Marine, Maritime or Oceanic. Every competence carries exactly one.
//! - **Proficiency level**: Ordered depth of a competence (foundational → expert)
//! - **Competence**: An atomic skill tied to one axis and a source locator
//! - **Micro-credential**: A bundle of competences with workload, EQF level,
//!   learning outcomes and stackability rules
//! - **Source locator**: Citation pointer (document + page/section) for traceability
//!
//! ## Architecture
//!
//! This crate holds value objects and construction-time validation only.
//! Registries, lookups and referential checks live in `morskamary-mapper`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod axis;
pub mod competence;
pub mod credential;
pub mod error;
pub mod level;
pub mod source;
pub mod traits;

// Re-exports for convenience
pub use axis::Axis;
pub use competence::{Competence, CompetenceDraft, CompetenceId};
pub use credential::{
    normalize_sector, CredentialId, MicroCredential, MicroCredentialDraft, EQF_LEVELS,
};
pub use error::ValidationError;
pub use level::ProficiencyLevel;
pub use source::SourceLocator;
