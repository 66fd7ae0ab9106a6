//! Axis module - the three TMBD classification axes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Axis of the Tripartite Model of Blue Dynamics (TMBD)
///
/// Every competence is classified on exactly one axis:
/// - Marine: biophysical agency of the sea itself
/// - Maritime: techno-economic and institutional mediation (ports, fleets, grids)
/// - Oceanic: planetary governance and hydrosocial subjectivity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Biophysical agency (code `M`)
    Marine,

    /// Techno-economic and institutional mediation (code `T`)
    Maritime,

    /// Planetary governance and hydrosocial subjectivity (code `O`)
    Oceanic,
}

impl Axis {
    /// All axes in canonical order
    pub const ALL: [Axis; 3] = [Axis::Marine, Axis::Maritime, Axis::Oceanic];

    /// Get the axis name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Marine => "marine",
            Axis::Maritime => "maritime",
            Axis::Oceanic => "oceanic",
        }
    }

    /// Single-letter TMBD code
    pub fn code(&self) -> char {
        match self {
            Axis::Marine => 'M',
            Axis::Maritime => 'T',
            Axis::Oceanic => 'O',
        }
    }

    /// Parse an axis from its name or TMBD code (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "marine" | "m" => Some(Axis::Marine),
            "maritime" | "t" => Some(Axis::Maritime),
            "oceanic" | "o" => Some(Axis::Oceanic),
            _ => None,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Axis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid axis: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_codes() {
        assert_eq!(Axis::Marine.code(), 'M');
        assert_eq!(Axis::Maritime.code(), 'T');
        assert_eq!(Axis::Oceanic.code(), 'O');
    }

    #[test]
    fn test_axis_parse_by_name_and_code() {
        assert_eq!(Axis::parse("Marine"), Some(Axis::Marine));
        assert_eq!(Axis::parse("MARITIME"), Some(Axis::Maritime));
        assert_eq!(Axis::parse("t"), Some(Axis::Maritime));
        assert_eq!(Axis::parse(" o "), Some(Axis::Oceanic));
        assert_eq!(Axis::parse("coastal"), None);
        assert_eq!(Axis::parse(""), None);
    }

    #[test]
    fn test_axis_serde_lowercase() {
        let json = serde_json::to_string(&Axis::Oceanic).unwrap();
        assert_eq!(json, "\"oceanic\"");
        let parsed: Axis = serde_json::from_str("\"maritime\"").unwrap();
        assert_eq!(parsed, Axis::Maritime);
    }
}
