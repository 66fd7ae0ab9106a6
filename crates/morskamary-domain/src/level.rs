//! Proficiency levels for competences

use serde::{Deserialize, Serialize};
use std::fmt;

/// Depth of a learner's mastery of a competence
///
/// Levels are totally ordered: Foundational < Intermediate < Advanced < Expert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProficiencyLevel {
    /// Basic awareness and guided application
    Foundational,

    /// Independent application in familiar contexts
    Intermediate,

    /// Application in complex or unfamiliar contexts
    Advanced,

    /// Leads, teaches and extends practice
    Expert,
}

impl ProficiencyLevel {
    /// All levels in ascending order
    pub const ALL: [ProficiencyLevel; 4] = [
        ProficiencyLevel::Foundational,
        ProficiencyLevel::Intermediate,
        ProficiencyLevel::Advanced,
        ProficiencyLevel::Expert,
    ];

    /// Numeric rank (1 = foundational, 4 = expert)
    pub fn rank(&self) -> u8 {
        match self {
            ProficiencyLevel::Foundational => 1,
            ProficiencyLevel::Intermediate => 2,
            ProficiencyLevel::Advanced => 3,
            ProficiencyLevel::Expert => 4,
        }
    }

    /// Get the level name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ProficiencyLevel::Foundational => "FOUNDATIONAL",
            ProficiencyLevel::Intermediate => "INTERMEDIATE",
            ProficiencyLevel::Advanced => "ADVANCED",
            ProficiencyLevel::Expert => "EXPERT",
        }
    }

    /// Parse a level from its name or rank (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "foundational" | "1" => Some(ProficiencyLevel::Foundational),
            "intermediate" | "2" => Some(ProficiencyLevel::Intermediate),
            "advanced" | "3" => Some(ProficiencyLevel::Advanced),
            "expert" | "4" => Some(ProficiencyLevel::Expert),
            _ => None,
        }
    }

    /// Get the next level up (for progression)
    pub fn next(&self) -> Option<Self> {
        match self {
            ProficiencyLevel::Foundational => Some(ProficiencyLevel::Intermediate),
            ProficiencyLevel::Intermediate => Some(ProficiencyLevel::Advanced),
            ProficiencyLevel::Advanced => Some(ProficiencyLevel::Expert),
            ProficiencyLevel::Expert => None,
        }
    }

    /// Get the previous level down
    pub fn previous(&self) -> Option<Self> {
        match self {
            ProficiencyLevel::Foundational => None,
            ProficiencyLevel::Intermediate => Some(ProficiencyLevel::Foundational),
            ProficiencyLevel::Advanced => Some(ProficiencyLevel::Intermediate),
            ProficiencyLevel::Expert => Some(ProficiencyLevel::Advanced),
        }
    }
}

impl fmt::Display for ProficiencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProficiencyLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid proficiency level: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_progression() {
        assert_eq!(ProficiencyLevel::Foundational.next(), Some(ProficiencyLevel::Intermediate));
        assert_eq!(ProficiencyLevel::Intermediate.next(), Some(ProficiencyLevel::Advanced));
        assert_eq!(ProficiencyLevel::Advanced.next(), Some(ProficiencyLevel::Expert));
        assert_eq!(ProficiencyLevel::Expert.next(), None);
    }

    #[test]
    fn test_level_regression() {
        assert_eq!(ProficiencyLevel::Expert.previous(), Some(ProficiencyLevel::Advanced));
        assert_eq!(ProficiencyLevel::Foundational.previous(), None);
    }

    #[test]
    fn test_level_parse() {
        assert_eq!(ProficiencyLevel::parse("advanced"), Some(ProficiencyLevel::Advanced));
        assert_eq!(ProficiencyLevel::parse("EXPERT"), Some(ProficiencyLevel::Expert));
        assert_eq!(ProficiencyLevel::parse("2"), Some(ProficiencyLevel::Intermediate));
        assert_eq!(ProficiencyLevel::parse("guru"), None);
    }

    #[test]
    fn test_level_serde_uppercase() {
        let json = serde_json::to_string(&ProficiencyLevel::Advanced).unwrap();
        assert_eq!(json, "\"ADVANCED\"");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_level() -> impl Strategy<Value = ProficiencyLevel> {
        prop::sample::select(ProficiencyLevel::ALL.to_vec())
    }

    proptest! {
        /// Property: Level ordering matches rank ordering
        #[test]
        fn test_ordering_matches_rank(a in any_level(), b in any_level()) {
            prop_assert_eq!(a < b, a.rank() < b.rank());
            prop_assert_eq!(a == b, a.rank() == b.rank());
        }

        /// Property: next and previous are inverse where defined
        #[test]
        fn test_next_previous_inverse(level in any_level()) {
            if let Some(up) = level.next() {
                prop_assert!(up > level);
                prop_assert_eq!(up.previous(), Some(level));
            }
        }
    }
}
