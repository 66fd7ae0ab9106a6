//! Morskamary Competence Mapper
//!
//! In-memory registry for competences and micro-credentials that enforces
//! the classification and traceability invariants.
//!
//! The mapper provides:
//! - Registration with validation (model invariants plus configurable policy)
//! - Referential integrity for credential bundles and stackability rules
//! - Lookups by identifier, axis, level and sector
//! - Analyses: summary counts, sector gap analysis, credential pathways
//! - Catalog loading and a built-in sample data set
//! - Classification prompt building for an external LLM
//!
//! # Examples
//!
//! ```
//! use morskamary_domain::traits::CompetenceRegistry;
//! use morskamary_domain::Axis;
//! use morskamary_mapper::{Catalog, CompetenceMapper};
//!
//! let mut mapper = CompetenceMapper::new();
//! Catalog::sample().apply(&mut mapper).unwrap();
//!
//! let marine = mapper.competences_by_axis(Axis::Marine);
//! assert_eq!(marine[0].name, "Marine Ecosystem Understanding");
//!
//! let gaps = mapper.analyze_gaps(&["comp_marine_001"], "offshore-energy");
//! assert_eq!(gaps.missing[0].as_str(), "comp_maritime_001");
//! ```
//!
//! # Concurrency
//!
//! [`CompetenceMapper`] is single-threaded. Hosts that share one registry
//! across threads wrap it in [`SharedMapper`], which serializes every call
//! behind one mutex.

#![warn(missing_docs)]

mod analysis;
mod catalog;
mod config;
mod error;
mod mapper;
mod prompt;
mod shared;
mod validator;

pub use analysis::{GapAnalysis, MappingSummary};
pub use catalog::{Catalog, CatalogReport};
pub use config::ValidationConfig;
pub use error::{MapperError, RecordKind};
pub use mapper::CompetenceMapper;
pub use prompt::{parse_axis_reply, ClassificationPrompt};
pub use shared::SharedMapper;
pub use validator::Validator;
