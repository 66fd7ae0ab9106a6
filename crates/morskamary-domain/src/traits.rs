//! Trait definitions for registries
//!
//! The registry implementation lives in `morskamary-mapper`. Collaborators
//! (reporting, prompt building) depend only on this trait.

use crate::{Axis, Competence, CompetenceId, CredentialId, MicroCredential};

/// The only legal way to create, look up and enumerate records
///
/// Read operations return owned snapshots; mutating a returned value never
/// affects the registry.
pub trait CompetenceRegistry {
    /// Error type for registry operations
    type Error;

    /// Register a competence, returning its identifier
    fn add_competence(&mut self, competence: Competence) -> Result<CompetenceId, Self::Error>;

    /// Register a micro-credential, returning its identifier
    fn add_credential(&mut self, credential: MicroCredential) -> Result<CredentialId, Self::Error>;

    /// Get a competence by identifier
    fn get_competence(&self, id: &str) -> Result<Competence, Self::Error>;

    /// Get a micro-credential by identifier
    fn get_credential(&self, id: &str) -> Result<MicroCredential, Self::Error>;

    /// Active competences on one axis, in insertion order
    fn competences_by_axis(&self, axis: Axis) -> Vec<Competence>;

    /// All competences, in insertion order
    fn list_competences(&self) -> Vec<Competence>;

    /// All micro-credentials, in insertion order
    fn list_credentials(&self) -> Vec<MicroCredential>;
}
