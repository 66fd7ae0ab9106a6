//! Competence module - the atomic unit of the classification model

use crate::{Axis, ProficiencyLevel, SourceLocator, ValidationError};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Unique identifier for a competence (e.g. `comp_marine_001`)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompetenceId(String);

impl CompetenceId {
    /// Create a new identifier
    ///
    /// # Errors
    /// Returns `ValidationError::EmptyIdentifier` for empty or whitespace input
    ///
    /// # Examples
    ///
    /// ```
    /// use morskamary_domain::CompetenceId;
    ///
    /// let id = CompetenceId::new("comp_marine_001").unwrap();
    /// assert_eq!(id.as_str(), "comp_marine_001");
    /// assert!(CompetenceId::new("  ").is_err());
    /// ```
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::EmptyIdentifier { kind: "competence" });
        }
        Ok(Self(value))
    }

    /// Get the identifier as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for CompetenceId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompetenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A competence - an atomic skill classified on one TMBD axis
///
/// Competences are value objects: once stored by the mapper they change only
/// through an explicit update that re-runs [`Competence::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competence {
    /// Unique identifier
    pub id: CompetenceId,

    /// Short name
    pub name: String,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// TMBD axis (mandatory)
    pub axis: Axis,

    /// Proficiency level, if assessed
    #[serde(default)]
    pub level: Option<ProficiencyLevel>,

    /// Where the evidence for this competence comes from
    pub source: SourceLocator,

    /// Discovery keywords
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Soft-retirement flag; retired competences stay listed but cannot be bundled
    #[serde(default)]
    pub retired: bool,
}

impl Competence {
    /// Create a new competence
    ///
    /// # Errors
    /// Returns error if the identifier is empty or the source locator is empty
    ///
    /// # Examples
    ///
    /// ```
    /// use morskamary_domain::{Axis, Competence};
    ///
    /// let c = Competence::new("C1", "Port logistics", Axis::Maritime, "DocA p.3").unwrap();
    /// assert_eq!(c.axis, Axis::Maritime);
    /// assert_eq!(c.source.as_str(), "DocA p.3");
    /// ```
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        axis: Axis,
        source: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let id = CompetenceId::new(id)?;
        let source = SourceLocator::new(source)
            .ok_or_else(|| ValidationError::MissingSourceLocator(id.to_string()))?;

        Ok(Self {
            id,
            name: name.into(),
            description: String::new(),
            axis,
            level: None,
            source,
            keywords: Vec::new(),
            retired: false,
        })
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the proficiency level
    pub fn with_level(mut self, level: ProficiencyLevel) -> Self {
        self.level = Some(level);
        self
    }

    /// Set the discovery keywords
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Check the model invariants
    ///
    /// Fields are public, so a record may have been altered after
    /// construction. The mapper calls this before every insert or update.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.as_str().trim().is_empty() {
            return Err(ValidationError::EmptyIdentifier { kind: "competence" });
        }
        if self.source.is_empty() {
            return Err(ValidationError::MissingSourceLocator(self.id.to_string()));
        }
        Ok(())
    }
}

/// Unvalidated competence input, e.g. a catalog row
///
/// Every field is optional so that incomplete input deserializes and the
/// failure is reported as a [`ValidationError`] instead of a parse error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompetenceDraft {
    /// Identifier
    pub id: Option<String>,
    /// Name
    pub name: Option<String>,
    /// Description
    pub description: Option<String>,
    /// Axis name or TMBD code
    pub axis: Option<String>,
    /// Level name or rank
    pub level: Option<String>,
    /// Source locator
    pub source: Option<String>,
    /// Keywords
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl TryFrom<CompetenceDraft> for Competence {
    type Error = ValidationError;

    fn try_from(draft: CompetenceDraft) -> Result<Self, Self::Error> {
        let id = CompetenceId::new(draft.id.unwrap_or_default())?;

        let axis = match draft.axis.as_deref().map(str::trim) {
            None | Some("") => return Err(ValidationError::MissingAxis(id.to_string())),
            Some(raw) => Axis::parse(raw).ok_or_else(|| ValidationError::UnknownAxis(raw.to_string()))?,
        };

        let level = match draft.level.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                ProficiencyLevel::parse(raw)
                    .ok_or_else(|| ValidationError::UnknownLevel(raw.to_string()))?,
            ),
        };

        let mut competence = Competence::new(
            id,
            draft.name.unwrap_or_default(),
            axis,
            draft.source.unwrap_or_default(),
        )?
        .with_description(draft.description.unwrap_or_default())
        .with_keywords(draft.keywords);
        competence.level = level;

        Ok(competence)
    }
}

impl From<CompetenceId> for String {
    fn from(id: CompetenceId) -> Self {
        id.0
    }
}
