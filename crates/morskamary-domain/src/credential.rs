//! Micro-credential module - stackable bundles of competences

use crate::{CompetenceId, ValidationError};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;
use std::ops::RangeInclusive;

/// Valid European Qualifications Framework levels
pub const EQF_LEVELS: RangeInclusive<i64> = 1..=8;

/// Unique identifier for a micro-credential (e.g. `cred_offshore_001`)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CredentialId(String);

impl CredentialId {
    /// Create a new identifier
    ///
    /// # Errors
    /// Returns `ValidationError::EmptyIdentifier` for empty or whitespace input
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::EmptyIdentifier { kind: "credential" });
        }
        Ok(Self(value))
    }

    /// Get the identifier as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for CredentialId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CredentialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CredentialId> for String {
    fn from(id: CredentialId) -> Self {
        id.0
    }
}

/// A micro-credential bundling competences with learning-outcome metadata
///
/// Constituent competences and stackability references are checked against
/// the mapper's registries at insertion time, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MicroCredential {
    /// Unique identifier
    pub id: CredentialId,

    /// Credential title
    pub title: String,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Intended learners
    #[serde(default)]
    pub learner_profile: String,

    /// Workload in ECTS credits
    pub workload: f64,

    /// EQF level (1-8)
    pub eqf_level: u8,

    /// Learning outcomes, in presentation order
    #[serde(default)]
    pub learning_outcomes: Vec<String>,

    /// How learning outcomes are assessed
    #[serde(default)]
    pub assessment: String,

    /// Credentials this one combines with or supersedes
    #[serde(default)]
    pub stackable_with: Vec<CredentialId>,

    /// Constituent competences, in presentation order
    #[serde(default)]
    pub competence_ids: Vec<CompetenceId>,

    /// Blue-economy sector (e.g. "offshore-energy", "ports", "tourism")
    #[serde(default)]
    pub sector: Option<String>,
}

impl MicroCredential {
    /// Create a new micro-credential
    ///
    /// # Errors
    /// Returns error if the identifier is empty, the workload is not positive,
    /// or the EQF level is outside 1-8
    ///
    /// # Examples
    ///
    /// ```
    /// use morskamary_domain::MicroCredential;
    ///
    /// let mc = MicroCredential::new("MC1", "Offshore Operations", 5.0, 6)
    ///     .unwrap()
    ///     .with_competences(["C1", "C2"])
    ///     .unwrap();
    /// assert_eq!(mc.competence_ids.len(), 2);
    /// assert!(MicroCredential::new("MC2", "Broken", 0.0, 6).is_err());
    /// ```
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        workload: f64,
        eqf_level: u8,
    ) -> Result<Self, ValidationError> {
        let credential = Self {
            id: CredentialId::new(id)?,
            title: title.into(),
            description: String::new(),
            learner_profile: String::new(),
            workload,
            eqf_level,
            learning_outcomes: Vec::new(),
            assessment: String::new(),
            stackable_with: Vec::new(),
            competence_ids: Vec::new(),
            sector: None,
        };
        credential.validate()?;
        Ok(credential)
    }

    /// Set the constituent competences
    pub fn with_competences<I, S>(mut self, ids: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.competence_ids = ids
            .into_iter()
            .map(CompetenceId::new)
            .collect::<Result<_, _>>()?;
        Ok(self)
    }

    /// Set the stackability references
    pub fn with_stackable<I, S>(mut self, ids: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stackable_with = ids
            .into_iter()
            .map(CredentialId::new)
            .collect::<Result<_, _>>()?;
        Ok(self)
    }

    /// Set the learning outcomes
    pub fn with_learning_outcomes<I, S>(mut self, outcomes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.learning_outcomes = outcomes.into_iter().map(Into::into).collect();
        self
    }

    /// Set the assessment method
    pub fn with_assessment(mut self, assessment: impl Into<String>) -> Self {
        self.assessment = assessment.into();
        self
    }

    /// Set the learner profile
    pub fn with_learner_profile(mut self, profile: impl Into<String>) -> Self {
        self.learner_profile = profile.into();
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the sector
    pub fn with_sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = Some(sector.into());
        self
    }

    /// Whether this credential belongs to the given sector
    ///
    /// Both sides are compared after [`normalize_sector`].
    pub fn in_sector(&self, sector: &str) -> bool {
        let wanted = normalize_sector(sector);
        self.sector
            .as_deref()
            .is_some_and(|s| normalize_sector(s) == wanted)
    }

    /// Check the model invariants
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.as_str().trim().is_empty() {
            return Err(ValidationError::EmptyIdentifier { kind: "credential" });
        }
        if !self.workload.is_finite() || self.workload <= 0.0 {
            return Err(ValidationError::InvalidWorkload(self.workload));
        }
        if !EQF_LEVELS.contains(&i64::from(self.eqf_level)) {
            return Err(ValidationError::InvalidEqfLevel(i64::from(self.eqf_level)));
        }
        let mut seen = HashSet::new();
        for id in &self.competence_ids {
            if id.as_str().trim().is_empty() {
                return Err(ValidationError::EmptyIdentifier { kind: "competence" });
            }
            if !seen.insert(id.as_str()) {
                return Err(ValidationError::DuplicateReference(id.to_string()));
            }
        }
        let mut seen = HashSet::new();
        for stacked in &self.stackable_with {
            if stacked.as_str().trim().is_empty() {
                return Err(ValidationError::EmptyIdentifier { kind: "credential" });
            }
            if stacked == &self.id {
                return Err(ValidationError::SelfReference(self.id.to_string()));
            }
            if !seen.insert(stacked.as_str()) {
                return Err(ValidationError::DuplicateReference(stacked.to_string()));
            }
        }
        Ok(())
    }
}

/// Canonical form of a sector name: trimmed and lowercased (Unicode-aware)
///
/// ```
/// use morskamary_domain::normalize_sector;
///
/// assert_eq!(normalize_sector("  Żegluga "), "żegluga");
/// ```
pub fn normalize_sector(sector: &str) -> String {
    sector.trim().to_lowercase()
}

/// Unvalidated micro-credential input, e.g. a catalog entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MicroCredentialDraft {
    /// Identifier
    pub id: Option<String>,
    /// Title
    pub title: Option<String>,
    /// Description
    pub description: Option<String>,
    /// Learner profile
    pub learner_profile: Option<String>,
    /// Workload in ECTS
    pub workload: Option<f64>,
    /// EQF level (signed so that bad input is reported, not truncated)
    pub eqf_level: Option<i64>,
    /// Learning outcomes
    #[serde(default)]
    pub learning_outcomes: Vec<String>,
    /// Assessment method
    pub assessment: Option<String>,
    /// Stackability references
    #[serde(default)]
    pub stackable_with: Vec<String>,
    /// Constituent competence identifiers
    #[serde(default)]
    pub competence_ids: Vec<String>,
    /// Sector
    pub sector: Option<String>,
}

impl TryFrom<MicroCredentialDraft> for MicroCredential {
    type Error = ValidationError;

    fn try_from(draft: MicroCredentialDraft) -> Result<Self, Self::Error> {
        let workload = draft.workload.ok_or(ValidationError::MissingField("workload"))?;
        let eqf = draft.eqf_level.ok_or(ValidationError::MissingField("eqf_level"))?;
        if !EQF_LEVELS.contains(&eqf) {
            return Err(ValidationError::InvalidEqfLevel(eqf));
        }
        let eqf = u8::try_from(eqf).map_err(|_| ValidationError::InvalidEqfLevel(eqf))?;

        let mut credential = MicroCredential::new(
            draft.id.unwrap_or_default(),
            draft.title.unwrap_or_default(),
            workload,
            eqf,
        )?
        .with_competences(draft.competence_ids)?
        .with_stackable(draft.stackable_with)?
        .with_learning_outcomes(draft.learning_outcomes)
        .with_assessment(draft.assessment.unwrap_or_default())
        .with_learner_profile(draft.learner_profile.unwrap_or_default())
        .with_description(draft.description.unwrap_or_default());
        credential.sector = draft.sector.filter(|s| !s.trim().is_empty());

        credential.validate()?;
        Ok(credential)
    }
}
