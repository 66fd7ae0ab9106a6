//! In-memory competence and credential registries

use crate::{MapperError, RecordKind, ValidationConfig, Validator};
use morskamary_domain::traits::CompetenceRegistry;
use morskamary_domain::{
    Axis, Competence, CompetenceId, CredentialId, MicroCredential, ProficiencyLevel,
    ValidationError,
};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, warn};

/// Registry of competences and micro-credentials
///
/// Each registry is an insertion-ordered `Vec` with a `HashMap` index from
/// identifier to position. Records are never physically removed, so positions
/// stay valid for the lifetime of the mapper.
///
/// # Examples
///
/// ```
/// use morskamary_domain::traits::CompetenceRegistry;
/// use morskamary_domain::{Axis, Competence, MicroCredential};
/// use morskamary_mapper::CompetenceMapper;
///
/// let mut mapper = CompetenceMapper::new();
/// mapper.add_competence(Competence::new("C1", "Port logistics", Axis::Maritime, "DocA p.3").unwrap()).unwrap();
/// mapper.add_competence(Competence::new("C2", "Reef ecology", Axis::Marine, "DocB p.7").unwrap()).unwrap();
///
/// let mc = MicroCredential::new("MC1", "Coastal Operations", 5.0, 6)
///     .unwrap()
///     .with_competences(["C1", "C2"])
///     .unwrap();
/// mapper.add_credential(mc).unwrap();
///
/// let marine = mapper.competences_by_axis(Axis::Marine);
/// assert_eq!(marine.len(), 1);
/// assert_eq!(marine[0].id.as_str(), "C2");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CompetenceMapper {
    competences: Vec<Competence>,
    competence_index: HashMap<CompetenceId, usize>,
    credentials: Vec<MicroCredential>,
    credential_index: HashMap<CredentialId, usize>,
    validator: Validator,
}

impl CompetenceMapper {
    /// Create an empty mapper with the default validation policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty mapper with the given validation policy
    pub fn with_config(config: ValidationConfig) -> Self {
        Self {
            validator: Validator::new(config),
            ..Self::default()
        }
    }

    /// Active validation policy
    pub fn config(&self) -> &ValidationConfig {
        self.validator.config()
    }

    /// Number of registered competences (retired included)
    pub fn competence_count(&self) -> usize {
        self.competences.len()
    }

    /// Number of registered micro-credentials
    pub fn credential_count(&self) -> usize {
        self.credentials.len()
    }

    /// Whether both registries are empty
    pub fn is_empty(&self) -> bool {
        self.competences.is_empty() && self.credentials.is_empty()
    }

    /// Borrow a competence by identifier
    pub fn competence(&self, id: &str) -> Option<&Competence> {
        self.competence_index.get(id).map(|&i| &self.competences[i])
    }

    /// Borrow a micro-credential by identifier
    pub fn credential(&self, id: &str) -> Option<&MicroCredential> {
        self.credential_index.get(id).map(|&i| &self.credentials[i])
    }

    /// Iterate competences in insertion order
    pub fn competences(&self) -> impl Iterator<Item = &Competence> {
        self.competences.iter()
    }

    /// Iterate micro-credentials in insertion order
    pub fn credentials(&self) -> impl Iterator<Item = &MicroCredential> {
        self.credentials.iter()
    }

    /// Active competences at one proficiency level, in insertion order
    pub fn competences_by_level(&self, level: ProficiencyLevel) -> Vec<Competence> {
        self.competences
            .iter()
            .filter(|c| !c.retired && c.level == Some(level))
            .cloned()
            .collect()
    }

    /// Credentials in a sector (case-insensitive), in insertion order
    pub fn credentials_for_sector(&self, sector: &str) -> Vec<MicroCredential> {
        self.credentials
            .iter()
            .filter(|c| c.in_sector(sector))
            .cloned()
            .collect()
    }

    /// Competence identifiers required by a sector's credentials
    ///
    /// Deduplicated, in first-seen order across the sector's credentials.
    pub fn sector_competences(&self, sector: &str) -> Vec<CompetenceId> {
        let mut seen = HashSet::new();
        self.credentials
            .iter()
            .filter(|c| c.in_sector(sector))
            .flat_map(|c| c.competence_ids.iter())
            .filter(|id| seen.insert(*id))
            .cloned()
            .collect()
    }

    /// Credentials that bundle the given competence
    pub fn credentials_referencing(&self, competence_id: &str) -> Vec<CredentialId> {
        self.credentials
            .iter()
            .filter(|c| c.competence_ids.iter().any(|id| id.as_str() == competence_id))
            .map(|c| c.id.clone())
            .collect()
    }

    /// Replace a stored competence with a revised record
    ///
    /// The identifier selects the record and cannot change. All validation
    /// is re-run; the stored retirement flag is kept. Credentials reference
    /// competences by identifier, so they stay consistent.
    pub fn update_competence(&mut self, mut competence: Competence) -> Result<(), MapperError> {
        if let Err(e) = self.validator.validate_competence(&competence) {
            warn!(competence = %competence.id, error = %e, "Rejected competence update");
            return Err(e.into());
        }

        let index = *self
            .competence_index
            .get(competence.id.as_str())
            .ok_or_else(|| MapperError::NotFound {
                kind: RecordKind::Competence,
                id: competence.id.to_string(),
            })?;

        competence.retired = self.competences[index].retired;
        debug!(competence = %competence.id, axis = %competence.axis, "Updated competence");
        self.competences[index] = competence;
        Ok(())
    }

    /// Soft-retire a competence
    ///
    /// Rejected with [`MapperError::CompetenceInUse`] while any credential
    /// bundles it. Retired competences remain listed and retrievable but are
    /// excluded from axis/level queries and cannot join new credentials.
    /// Retiring twice is a no-op.
    pub fn retire_competence(&mut self, id: &str) -> Result<(), MapperError> {
        let index = *self
            .competence_index
            .get(id)
            .ok_or_else(|| MapperError::NotFound {
                kind: RecordKind::Competence,
                id: id.to_string(),
            })?;

        let referencing = self.credentials_referencing(id);
        if !referencing.is_empty() {
            let err = MapperError::CompetenceInUse {
                id: id.to_string(),
                credentials: referencing.into_iter().map(String::from).collect(),
            };
            warn!(competence = id, error = %err, "Rejected retirement");
            return Err(err);
        }

        self.competences[index].retired = true;
        info!(competence = id, "Retired competence");
        Ok(())
    }

    fn check_competence(&self, competence: &Competence) -> Result<(), MapperError> {
        self.validator.validate_competence(competence)?;

        // retirement goes through retire_competence only
        if competence.retired {
            return Err(ValidationError::RetiredCompetence(competence.id.to_string()).into());
        }

        if self.competence_index.contains_key(competence.id.as_str()) {
            return Err(MapperError::DuplicateIdentifier {
                kind: RecordKind::Competence,
                id: competence.id.to_string(),
            });
        }

        Ok(())
    }

    fn check_credential(&self, credential: &MicroCredential) -> Result<(), MapperError> {
        self.validator.validate_credential(credential)?;

        if self.credential_index.contains_key(credential.id.as_str()) {
            return Err(MapperError::DuplicateIdentifier {
                kind: RecordKind::Credential,
                id: credential.id.to_string(),
            });
        }

        for id in &credential.competence_ids {
            match self.competence(id.as_str()) {
                None => return Err(MapperError::UnknownCompetence(id.to_string())),
                Some(c) if c.retired => {
                    return Err(ValidationError::RetiredCompetence(id.to_string()).into())
                }
                Some(_) => {}
            }
        }

        for id in &credential.stackable_with {
            if !self.credential_index.contains_key(id.as_str()) {
                return Err(MapperError::UnknownCredential(id.to_string()));
            }
        }

        Ok(())
    }
}

impl CompetenceRegistry for CompetenceMapper {
    type Error = MapperError;

    fn add_competence(&mut self, competence: Competence) -> Result<CompetenceId, Self::Error> {
        if let Err(e) = self.check_competence(&competence) {
            warn!(competence = %competence.id, error = %e, "Rejected competence");
            return Err(e);
        }

        let id = competence.id.clone();
        debug!(competence = %id, axis = %competence.axis, "Registered competence");
        self.competence_index.insert(id.clone(), self.competences.len());
        self.competences.push(competence);
        Ok(id)
    }

    fn add_credential(&mut self, credential: MicroCredential) -> Result<CredentialId, Self::Error> {
        if let Err(e) = self.check_credential(&credential) {
            warn!(credential = %credential.id, error = %e, "Rejected credential");
            return Err(e);
        }

        let id = credential.id.clone();
        debug!(
            credential = %id,
            competences = credential.competence_ids.len(),
            "Registered credential"
        );
        self.credential_index.insert(id.clone(), self.credentials.len());
        self.credentials.push(credential);
        Ok(id)
    }

    fn get_competence(&self, id: &str) -> Result<Competence, Self::Error> {
        self.competence(id).cloned().ok_or_else(|| MapperError::NotFound {
            kind: RecordKind::Competence,
            id: id.to_string(),
        })
    }

    fn get_credential(&self, id: &str) -> Result<MicroCredential, Self::Error> {
        self.credential(id).cloned().ok_or_else(|| MapperError::NotFound {
            kind: RecordKind::Credential,
            id: id.to_string(),
        })
    }

    fn competences_by_axis(&self, axis: Axis) -> Vec<Competence> {
        self.competences
            .iter()
            .filter(|c| !c.retired && c.axis == axis)
            .cloned()
            .collect()
    }

    fn list_competences(&self) -> Vec<Competence> {
        self.competences.clone()
    }

    fn list_credentials(&self) -> Vec<MicroCredential> {
        self.credentials.clone()
    }
}
