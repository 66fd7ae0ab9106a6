//! LLM prompt building for axis classification
//!
//! Builds the text of a classification request; sending it to a model is
//! the caller's business.

use morskamary_domain::traits::CompetenceRegistry;
use morskamary_domain::{Axis, Competence};

/// Maximum existing competences listed per axis as examples
const EXAMPLES_PER_AXIS: usize = 5;

/// Builds prompts asking an LLM to place a skill on one TMBD axis
pub struct ClassificationPrompt {
    skill: String,
    source: Option<String>,
    examples: Vec<Competence>,
}

impl ClassificationPrompt {
    /// Create a new prompt for a skill description
    pub fn new(skill: impl Into<String>) -> Self {
        Self {
            skill: skill.into(),
            source: None,
            examples: Vec::new(),
        }
    }

    /// Attach the source locator the skill was taken from
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Use a registry's active competences as classified examples
    pub fn with_examples_from<R: CompetenceRegistry>(mut self, registry: &R) -> Self {
        self.examples = Axis::ALL
            .iter()
            .flat_map(|axis| {
                registry
                    .competences_by_axis(*axis)
                    .into_iter()
                    .take(EXAMPLES_PER_AXIS)
            })
            .collect();
        self
    }

    /// Build the complete prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        prompt.push_str(CLASSIFICATION_INSTRUCTIONS);
        prompt.push_str("\n\n");

        if !self.examples.is_empty() {
            prompt.push_str("Already classified competences:\n");
            for c in &self.examples {
                prompt.push_str(&format!("- [{}] {} ({})\n", c.axis.code(), c.name, c.source));
            }
            prompt.push('\n');
        }

        prompt.push_str("Skill to classify:\n---\n");
        prompt.push_str(&self.skill);
        prompt.push_str("\n---\n");
        if let Some(source) = &self.source {
            prompt.push_str(&format!("Source: {}\n", source));
        }
        prompt.push('\n');

        prompt.push_str(OUTPUT_FORMAT_REMINDER);
        prompt
    }
}

/// Extract the axis from a model reply
///
/// Accepts a bare axis name or code, optionally wrapped in punctuation or
/// prefixed with `axis:`. Returns `None` when the reply names zero or
/// several distinct axes.
pub fn parse_axis_reply(reply: &str) -> Option<Axis> {
    let mut found: Option<Axis> = None;
    for token in reply.split(|c: char| !c.is_alphanumeric()) {
        if token.len() == 1 && !reply.trim().eq_ignore_ascii_case(token) {
            // single letters only count when they are the whole reply
            continue;
        }
        if let Some(axis) = Axis::parse(token) {
            match found {
                Some(existing) if existing != axis => return None,
                _ => found = Some(axis),
            }
        }
    }
    found
}

const CLASSIFICATION_INSTRUCTIONS: &str = r#"Classify the skill below on the Tripartite Model of Blue Dynamics (TMBD).
Choose exactly one axis:

- MARINE (M): biophysical agency of the sea - ecosystems, species, ocean physics
- MARITIME (T): techno-economic and institutional mediation - ports, fleets, grids, spatial planning
- OCEANIC (O): planetary governance and hydrosocial subjectivity - policy, cooperation, ocean literacy

Rules:
- Pick the axis the skill primarily operates on, not every axis it touches
- Do not invent evidence; classify only what the text states"#;

const OUTPUT_FORMAT_REMINDER: &str =
    "Answer with a single word: MARINE, MARITIME or OCEANIC. No explanation.";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Catalog, CompetenceMapper};

    #[test]
    fn test_prompt_includes_skill_and_source() {
        let prompt = ClassificationPrompt::new("Operate a dredging vessel")
            .with_source("Port manual §3")
            .build();
        assert!(prompt.contains("Operate a dredging vessel"));
        assert!(prompt.contains("Source: Port manual §3"));
        assert!(prompt.contains("MARITIME (T)"));
        assert!(!prompt.contains("Already classified"));
    }

    #[test]
    fn test_prompt_includes_examples() {
        let mut mapper = CompetenceMapper::new();
        Catalog::sample().apply(&mut mapper).unwrap();

        let prompt = ClassificationPrompt::new("Assess fish stocks")
            .with_examples_from(&mapper)
            .build();
        assert!(prompt.contains("Already classified competences"));
        assert!(prompt.contains("- [M] Marine Ecosystem Understanding"));
        assert!(prompt.contains("- [O] Ocean Governance and Cooperation"));
    }

    #[test]
    fn test_parse_axis_reply() {
        assert_eq!(parse_axis_reply("MARINE"), Some(Axis::Marine));
        assert_eq!(parse_axis_reply("  Maritime.\n"), Some(Axis::Maritime));
        assert_eq!(parse_axis_reply("axis: oceanic"), Some(Axis::Oceanic));
        assert_eq!(parse_axis_reply("T"), Some(Axis::Maritime));
    }

    #[test]
    fn test_parse_axis_reply_ambiguous_or_empty() {
        assert_eq!(parse_axis_reply("marine or oceanic"), None);
        assert_eq!(parse_axis_reply("I am not sure"), None);
        assert_eq!(parse_axis_reply(""), None);
    }
}
