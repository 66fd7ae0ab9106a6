//! Validation policy configuration

use serde::{Deserialize, Serialize};

/// Policy rules applied on top of the model invariants
///
/// The model invariants (axis present, identifiers non-empty, workload
/// positive, EQF 1-8, locator present) always hold regardless of this
/// configuration. These switches only add stricter checks; the default adds
/// none.
///
/// # Examples
///
/// ```
/// use morskamary_mapper::ValidationConfig;
///
/// let config: ValidationConfig = toml::from_str("require_level = true").unwrap();
/// assert!(config.require_level);
/// assert!(config.allow_empty_credentials);
/// assert!(config.max_workload.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Every competence must carry a proficiency level
    pub require_level: bool,

    /// Every competence must carry a non-empty description
    pub require_description: bool,

    /// Every credential must list at least one learning outcome
    pub require_learning_outcomes: bool,

    /// Credentials may bundle zero competences
    pub allow_empty_credentials: bool,

    /// Upper bound on credential workload (ECTS), unbounded when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_workload: Option<f64>,

    /// Upper bound on stackability references per credential, unbounded when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_stack_references: Option<usize>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            require_level: false,
            require_description: false,
            require_learning_outcomes: false,
            allow_empty_credentials: true,
            max_workload: None,
            max_stack_references: None,
        }
    }
}

impl ValidationConfig {
    /// Create a permissive configuration (model invariants only, same as default)
    pub fn permissive() -> Self {
        Self::default()
    }

    /// Create a strict configuration (all policy checks enabled)
    pub fn strict() -> Self {
        Self {
            require_level: true,
            require_description: true,
            require_learning_outcomes: true,
            allow_empty_credentials: false,
            max_workload: Some(30.0),
            max_stack_references: Some(8),
        }
    }
}
