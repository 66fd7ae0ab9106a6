//! Record validation: model invariants plus configured policy

use crate::ValidationConfig;
use morskamary_domain::{Competence, MicroCredential, ValidationError};

/// Validates records before they enter the registries
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    /// Create a new validator with the given configuration
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate a competence
    ///
    /// Model invariants are checked first, then the policy rules in
    /// declaration order. The first violation is returned.
    pub fn validate_competence(&self, competence: &Competence) -> Result<(), ValidationError> {
        competence.validate()?;

        if self.config.require_level && competence.level.is_none() {
            return Err(ValidationError::Policy(format!(
                "competence '{}' has no proficiency level",
                competence.id
            )));
        }

        if self.config.require_description && competence.description.trim().is_empty() {
            return Err(ValidationError::Policy(format!(
                "competence '{}' has no description",
                competence.id
            )));
        }

        Ok(())
    }

    /// Validate a micro-credential (structure only; references are resolved by the mapper)
    pub fn validate_credential(&self, credential: &MicroCredential) -> Result<(), ValidationError> {
        credential.validate()?;

        if !self.config.allow_empty_credentials && credential.competence_ids.is_empty() {
            return Err(ValidationError::Policy(format!(
                "credential '{}' bundles no competences",
                credential.id
            )));
        }

        if let Some(max) = self.config.max_workload {
            if credential.workload > max {
                return Err(ValidationError::Policy(format!(
                    "credential '{}' workload {} exceeds maximum {}",
                    credential.id, credential.workload, max
                )));
            }
        }

        if let Some(max) = self.config.max_stack_references {
            if credential.stackable_with.len() > max {
                return Err(ValidationError::Policy(format!(
                    "credential '{}' has {} stackability references (maximum {})",
                    credential.id,
                    credential.stackable_with.len(),
                    max
                )));
            }
        }

        if self.config.require_learning_outcomes
            && credential.learning_outcomes.iter().all(|o| o.trim().is_empty())
        {
            return Err(ValidationError::Policy(format!(
                "credential '{}' has no learning outcomes",
                credential.id
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use morskamary_domain::{Axis, ProficiencyLevel};

    fn competence() -> Competence {
        Competence::new("C1", "Port logistics", Axis::Maritime, "DocA p.3").unwrap()
    }

    fn credential() -> MicroCredential {
        MicroCredential::new("MC1", "Ports", 5.0, 6)
            .unwrap()
            .with_competences(["C1"])
            .unwrap()
    }

    #[test]
    fn test_default_accepts_minimal_records() {
        let validator = Validator::default();
        assert!(validator.validate_competence(&competence()).is_ok());
        assert!(validator.validate_credential(&credential()).is_ok());
    }

    #[test]
    fn test_strict_requires_level() {
        let validator = Validator::new(ValidationConfig::strict());
        let err = validator.validate_competence(&competence()).unwrap_err();
        assert!(matches!(err, ValidationError::Policy(msg) if msg.contains("proficiency level")));
    }

    #[test]
    fn test_strict_requires_description() {
        let validator = Validator::new(ValidationConfig::strict());
        let c = competence().with_level(ProficiencyLevel::Advanced);
        let err = validator.validate_competence(&c).unwrap_err();
        assert!(matches!(err, ValidationError::Policy(msg) if msg.contains("description")));

        let c = c.with_description("Handles berth planning");
        assert!(validator.validate_competence(&c).is_ok());
    }

    #[test]
    fn test_default_has_no_workload_cap() {
        let mut mc = credential();
        mc.workload = 90.0;
        assert!(Validator::default().validate_credential(&mc).is_ok());
    }

    #[test]
    fn test_workload_cap() {
        let validator = Validator::new(ValidationConfig::strict());
        let mut mc = credential().with_learning_outcomes(["Plan a berth schedule"]);
        mc.workload = 31.0;
        assert!(matches!(
            validator.validate_credential(&mc),
            Err(ValidationError::Policy(msg)) if msg.contains("workload")
        ));
    }

    #[test]
    fn test_stack_reference_cap() {
        let mut config = ValidationConfig::default();
        config.max_stack_references = Some(2);
        let validator = Validator::new(config);

        let mc = credential().with_stackable(["MC2", "MC3"]).unwrap();
        assert!(validator.validate_credential(&mc).is_ok());

        let mc = credential().with_stackable(["MC2", "MC3", "MC4"]).unwrap();
        assert!(matches!(
            validator.validate_credential(&mc),
            Err(ValidationError::Policy(msg)) if msg.contains("3 stackability references")
        ));
    }

    #[test]
    fn test_empty_credential_policy() {
        let mc = MicroCredential::new("MC1", "Empty", 5.0, 6).unwrap();
        assert!(Validator::default().validate_credential(&mc).is_ok());

        let strict = Validator::new(ValidationConfig::strict());
        assert!(strict.validate_credential(&mc).is_err());
    }

    #[test]
    fn test_learning_outcomes_policy() {
        let strict = Validator::new(ValidationConfig::strict());
        let mc = credential().with_learning_outcomes(["  "]);
        assert!(strict.validate_credential(&mc).is_err());

        let mc = credential().with_learning_outcomes(["Plan a berth schedule"]);
        assert!(strict.validate_credential(&mc).is_ok());
    }

    #[test]
    fn test_model_invariant_checked_before_policy() {
        let validator = Validator::new(ValidationConfig::permissive());
        let mut mc = credential();
        mc.eqf_level = 0;
        assert_eq!(
            validator.validate_credential(&mc).unwrap_err(),
            ValidationError::InvalidEqfLevel(0)
        );
    }
}
