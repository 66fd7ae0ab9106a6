//! Catalog input: batches of competences and credentials
//!
//! A catalog is the JSON shape collaborators hand to the mapper:
//!
//! ```json
//! {
//!   "competences": [
//!     { "id": "C1", "name": "Port logistics", "axis": "maritime", "source": "DocA p.3" }
//!   ],
//!   "credentials": [
//!     { "id": "MC1", "title": "Ports", "workload": 5, "eqf_level": 6, "competence_ids": ["C1"] }
//!   ]
//! }
//! ```
//!
//! Competence matrices kept as spreadsheets can be imported from CSV with
//! [`Catalog::from_csv_competences`].

use crate::{CompetenceMapper, MapperError};
use morskamary_domain::traits::CompetenceRegistry;
use morskamary_domain::{Competence, CompetenceDraft, MicroCredential, MicroCredentialDraft};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Unvalidated batch of records
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// Competence rows
    #[serde(default)]
    pub competences: Vec<CompetenceDraft>,

    /// Credential entries, applied in order (stack references must point backwards)
    #[serde(default)]
    pub credentials: Vec<MicroCredentialDraft>,
}

/// One row of a CSV competence matrix
#[derive(Debug, Deserialize)]
struct CompetenceRow {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    axis: Option<String>,
    #[serde(default)]
    level: Option<String>,
    #[serde(default)]
    keywords: Option<String>,
    #[serde(default)]
    source: Option<String>,
}

impl CompetenceRow {
    fn into_draft(self, origin: &str, row: usize) -> CompetenceDraft {
        let cell = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
        CompetenceDraft {
            id: cell(self.id),
            name: cell(self.name),
            description: cell(self.description),
            axis: cell(self.axis),
            level: cell(self.level),
            source: cell(self.source).or_else(|| Some(format!("{} row {}", origin, row))),
            keywords: self
                .keywords
                .unwrap_or_default()
                .split(';')
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

/// Outcome of applying a catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CatalogReport {
    /// Competences added
    pub competences: usize,
    /// Credentials added
    pub credentials: usize,
}

impl Catalog {
    /// Parse a catalog from JSON
    pub fn from_json(json: &str) -> Result<Self, MapperError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a competence matrix from CSV
    ///
    /// The header row names the columns `id`, `name`, `description`, `axis`,
    /// `level`, `keywords` and, optionally, `source`. Keywords are separated by
    /// `;`. Rows without a `source` cell are cited as `<origin> row <n>`, with
    /// `n` counting data rows from 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use morskamary_mapper::Catalog;
    ///
    /// let csv = "id,name,axis,level,keywords\nC1,Reef survey,MARINE,ADVANCED,reefs;diving\n";
    /// let catalog = Catalog::from_csv_competences(csv, "matrix.csv").unwrap();
    /// assert_eq!(catalog.competences[0].keywords, ["reefs", "diving"]);
    /// assert_eq!(catalog.competences[0].source.as_deref(), Some("matrix.csv row 1"));
    /// ```
    pub fn from_csv_competences(text: &str, origin: &str) -> Result<Self, MapperError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(text.as_bytes());

        let mut competences = Vec::new();
        for (index, row) in reader.deserialize::<CompetenceRow>().enumerate() {
            competences.push(row?.into_draft(origin, index + 1));
        }

        Ok(Self {
            competences,
            credentials: Vec::new(),
        })
    }

    /// Apply the catalog to a mapper, all or nothing
    ///
    /// Records are applied to a scratch copy of the registries; the target
    /// is replaced only when every record was accepted.
    pub fn apply(&self, mapper: &mut CompetenceMapper) -> Result<CatalogReport, MapperError> {
        let mut staged = mapper.clone();
        let mut report = CatalogReport::default();

        for draft in &self.competences {
            let competence = Competence::try_from(draft.clone())?;
            staged.add_competence(competence)?;
            report.competences += 1;
        }

        for draft in &self.credentials {
            let credential = MicroCredential::try_from(draft.clone())?;
            staged.add_credential(credential)?;
            report.credentials += 1;
        }

        *mapper = staged;
        info!(
            competences = report.competences,
            credentials = report.credentials,
            "Applied catalog"
        );
        Ok(report)
    }

    /// The demonstration data set: three competences, one per axis, and two credentials
    pub fn sample() -> Self {
        fn competence(
            id: &str,
            name: &str,
            description: &str,
            axis: &str,
            level: &str,
            keywords: &[&str],
        ) -> CompetenceDraft {
            CompetenceDraft {
                id: Some(id.to_string()),
                name: Some(name.to_string()),
                description: Some(description.to_string()),
                axis: Some(axis.to_string()),
                level: Some(level.to_string()),
                source: Some("morskamary sample catalog".to_string()),
                keywords: keywords.iter().map(|k| k.to_string()).collect(),
            }
        }

        Self {
            competences: vec![
                competence(
                    "comp_marine_001",
                    "Marine Ecosystem Understanding",
                    "Comprehensive understanding of marine biophysical systems, species interactions, and ecosystem dynamics",
                    "marine",
                    "intermediate",
                    &["marine biology", "ecology", "biodiversity", "fisheries"],
                ),
                competence(
                    "comp_maritime_001",
                    "Maritime Infrastructure Management",
                    "Management of ports, fleets, grids, and maritime spatial planning (MSP) infrastructure",
                    "maritime",
                    "advanced",
                    &["ports", "maritime spatial planning", "infrastructure", "fleet management"],
                ),
                competence(
                    "comp_oceanic_001",
                    "Ocean Governance and Cooperation",
                    "Cross-border ocean governance integration, hydrosocial literacy, and transcorporeal responsibility",
                    "oceanic",
                    "advanced",
                    &["governance", "international cooperation", "policy", "sustainability"],
                ),
            ],
            credentials: vec![
                MicroCredentialDraft {
                    id: Some("cred_offshore_001".to_string()),
                    title: Some("Offshore Energy Operations Specialist".to_string()),
                    description: Some(
                        "Micro-credential for professionals in offshore renewable energy".to_string(),
                    ),
                    workload: Some(6.0),
                    eqf_level: Some(6),
                    competence_ids: vec![
                        "comp_marine_001".to_string(),
                        "comp_maritime_001".to_string(),
                    ],
                    sector: Some("offshore-energy".to_string()),
                    ..Default::default()
                },
                MicroCredentialDraft {
                    id: Some("cred_ocean_gov_001".to_string()),
                    title: Some("Ocean Governance Practitioner".to_string()),
                    description: Some(
                        "Micro-credential for ocean governance and policy professionals".to_string(),
                    ),
                    workload: Some(4.0),
                    eqf_level: Some(7),
                    competence_ids: vec!["comp_oceanic_001".to_string()],
                    sector: Some("governance".to_string()),
                    ..Default::default()
                },
            ],
        }
    }
}
