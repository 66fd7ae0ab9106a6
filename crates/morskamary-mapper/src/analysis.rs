//! Read-only analyses over the registries: summary, gaps, pathways, stacks

use crate::{CompetenceMapper, MapperError, RecordKind};
use morskamary_domain::{
    normalize_sector, Axis, CompetenceId, CredentialId, MicroCredential, ProficiencyLevel,
};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashSet, VecDeque};

/// Counts over the current registries
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MappingSummary {
    /// All registered competences (retired included)
    pub total_competences: usize,

    /// Retired competences
    pub retired_competences: usize,

    /// All registered micro-credentials
    pub total_credentials: usize,

    /// Active competences per axis (every axis present, possibly 0)
    pub competences_by_axis: BTreeMap<Axis, usize>,

    /// Active competences per level (every level present, possibly 0)
    pub competences_by_level: BTreeMap<ProficiencyLevel, usize>,

    /// Active competences without a level
    pub unleveled_competences: usize,

    /// Distinct sectors across credentials, sorted
    pub sectors: Vec<String>,
}

impl MappingSummary {
    /// Render as plain text lines
    pub fn summary(&self) -> String {
        let mut out = format!(
            "Total competences: {} ({} retired)\nTotal credentials: {}\n",
            self.total_competences, self.retired_competences, self.total_credentials
        );
        out.push_str("Competences by TMBD axis:\n");
        for (axis, count) in &self.competences_by_axis {
            out.push_str(&format!("  - {} ({}): {}\n", axis, axis.code(), count));
        }
        out.push_str("Competences by level:\n");
        for (level, count) in &self.competences_by_level {
            out.push_str(&format!("  - {}: {}\n", level, count));
        }
        out.push_str(&format!("  - unleveled: {}\n", self.unleveled_competences));
        if !self.sectors.is_empty() {
            out.push_str(&format!("Sectors: {}\n", self.sectors.join(", ")));
        }
        out
    }
}

/// Gap between what a learner holds and what a sector requires
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct GapAnalysis {
    /// Sector analyzed
    pub sector: String,

    /// Required competences the learner already holds, in requirement order
    pub available: Vec<CompetenceId>,

    /// Required competences the learner lacks, in requirement order
    pub missing: Vec<CompetenceId>,

    /// Missing competences grouped by level (levels with no gaps omitted)
    pub missing_by_level: BTreeMap<ProficiencyLevel, Vec<CompetenceId>>,
}

impl GapAnalysis {
    /// Whether the learner covers every requirement
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

impl CompetenceMapper {
    /// Summarize the registries
    pub fn summary(&self) -> MappingSummary {
        let mut by_axis: BTreeMap<Axis, usize> = Axis::ALL.iter().map(|a| (*a, 0)).collect();
        let mut by_level: BTreeMap<ProficiencyLevel, usize> =
            ProficiencyLevel::ALL.iter().map(|l| (*l, 0)).collect();
        let mut unleveled = 0;
        let mut retired = 0;

        for competence in self.competences() {
            if competence.retired {
                retired += 1;
                continue;
            }
            *by_axis.entry(competence.axis).or_default() += 1;
            match competence.level {
                Some(level) => *by_level.entry(level).or_default() += 1,
                None => unleveled += 1,
            }
        }

        let sectors: BTreeSet<String> = self
            .credentials()
            .filter_map(|c| c.sector.as_deref())
            .map(normalize_sector)
            .filter(|s| !s.is_empty())
            .collect();

        MappingSummary {
            total_competences: self.competence_count(),
            retired_competences: retired,
            total_credentials: self.credential_count(),
            competences_by_axis: by_axis,
            competences_by_level: by_level,
            unleveled_competences: unleveled,
            sectors: sectors.into_iter().collect(),
        }
    }

    /// Compare a learner's competences against a sector's requirements
    ///
    /// Requirements are the competences bundled by the sector's credentials.
    /// Identifiers the learner holds that the sector does not need are ignored.
    pub fn analyze_gaps<S: AsRef<str>>(&self, available: &[S], sector: &str) -> GapAnalysis {
        let held: HashSet<&str> = available.iter().map(|s| s.as_ref()).collect();
        let (have, missing): (Vec<CompetenceId>, Vec<CompetenceId>) = self
            .sector_competences(sector)
            .into_iter()
            .partition(|id| held.contains(id.as_str()));

        let mut missing_by_level: BTreeMap<ProficiencyLevel, Vec<CompetenceId>> = BTreeMap::new();
        for id in &missing {
            if let Some(level) = self.competence(id.as_str()).and_then(|c| c.level) {
                missing_by_level.entry(level).or_default().push(id.clone());
            }
        }

        GapAnalysis {
            sector: sector.to_string(),
            available: have,
            missing,
            missing_by_level,
        }
    }

    /// Credentials ordered as a learning progression
    ///
    /// Ordered by the mean rank of each credential's leveled competences,
    /// ascending. Competences without a level do not count toward the mean; a
    /// credential with none ranks as 0. Ties keep insertion order.
    pub fn suggest_pathway(&self) -> Vec<MicroCredential> {
        let mut ranked: Vec<(f64, &MicroCredential)> = self
            .credentials()
            .map(|c| (self.mean_level(c), c))
            .collect();
        ranked.sort_by(|a, b| a.0.total_cmp(&b.0));
        ranked.into_iter().map(|(_, c)| c.clone()).collect()
    }

    /// A credential plus everything reachable through stackability references
    ///
    /// Breadth-first from `id`, each credential listed once.
    pub fn credential_stack(&self, id: &str) -> Result<Vec<CredentialId>, MapperError> {
        let root = self.credential(id).ok_or_else(|| MapperError::NotFound {
            kind: RecordKind::Credential,
            id: id.to_string(),
        })?;

        let mut order = vec![root.id.clone()];
        let mut seen: HashSet<&str> = HashSet::from([root.id.as_str()]);
        let mut queue = VecDeque::from([root]);

        while let Some(current) = queue.pop_front() {
            for next in &current.stackable_with {
                if !seen.insert(next.as_str()) {
                    continue;
                }
                if let Some(credential) = self.credential(next.as_str()) {
                    order.push(credential.id.clone());
                    queue.push_back(credential);
                }
            }
        }

        Ok(order)
    }

    fn mean_level(&self, credential: &MicroCredential) -> f64 {
        let ranks: Vec<u8> = credential
            .competence_ids
            .iter()
            .filter_map(|id| self.competence(id.as_str()).and_then(|c| c.level))
            .map(|l| l.rank())
            .collect();
        if ranks.is_empty() {
            return 0.0;
        }
        ranks.iter().map(|&r| f64::from(r)).sum::<f64>() / ranks.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use morskamary_domain::traits::CompetenceRegistry;
    use morskamary_domain::Competence;

    fn comp(id: &str, axis: Axis, level: Option<ProficiencyLevel>) -> Competence {
        let mut c = Competence::new(id, id, axis, "DocA p.1").unwrap();
        c.level = level;
        c
    }

    fn cred(id: &str, competences: &[&str], sector: &str) -> MicroCredential {
        MicroCredential::new(id, id, 5.0, 6)
            .unwrap()
            .with_competences(competences.iter().copied())
            .unwrap()
            .with_sector(sector)
    }

    fn populated() -> CompetenceMapper {
        let mut mapper = CompetenceMapper::new();
        mapper
            .add_competence(comp("marine", Axis::Marine, Some(ProficiencyLevel::Intermediate)))
            .unwrap();
        mapper
            .add_competence(comp("maritime", Axis::Maritime, Some(ProficiencyLevel::Advanced)))
            .unwrap();
        mapper
            .add_competence(comp("oceanic", Axis::Oceanic, Some(ProficiencyLevel::Advanced)))
            .unwrap();
        mapper
            .add_credential(cred("offshore", &["marine", "maritime"], "offshore-energy"))
            .unwrap();
        mapper
            .add_credential(cred("governance", &["oceanic"], "governance"))
            .unwrap();
        mapper
    }

    #[test]
    fn test_summary_counts() {
        let summary = populated().summary();
        assert_eq!(summary.total_competences, 3);
        assert_eq!(summary.total_credentials, 2);
        assert_eq!(summary.competences_by_axis[&Axis::Marine], 1);
        assert_eq!(summary.competences_by_axis[&Axis::Maritime], 1);
        assert_eq!(summary.competences_by_axis[&Axis::Oceanic], 1);
        assert_eq!(summary.competences_by_level[&ProficiencyLevel::Advanced], 2);
        assert_eq!(summary.competences_by_level[&ProficiencyLevel::Expert], 0);
        assert_eq!(summary.sectors, ["governance", "offshore-energy"]);
    }

    #[test]
    fn test_sector_spellings_agree_between_summary_and_queries() {
        let mut mapper = populated();
        mapper
            .add_credential(cred("fleet", &["maritime"], "Żegluga"))
            .unwrap();
        mapper
            .add_credential(cred("routes", &["marine"], " żegluga "))
            .unwrap();

        let summary = mapper.summary();
        assert_eq!(summary.sectors, ["governance", "offshore-energy", "żegluga"]);
        for sector in &summary.sectors {
            assert!(!mapper.credentials_for_sector(sector).is_empty());
        }
        assert_eq!(mapper.credentials_for_sector("żegluga").len(), 2);
        assert_eq!(mapper.sector_competences("ŻEGLUGA").len(), 2);
    }

    #[test]
    fn test_summary_text() {
        let text = populated().summary().summary();
        assert!(text.contains("Total competences: 3"));
        assert!(text.contains("maritime (T): 1"));
    }

    #[test]
    fn test_summary_of_empty_mapper() {
        let summary = CompetenceMapper::new().summary();
        assert_eq!(summary.total_competences, 0);
        assert_eq!(summary.competences_by_axis.len(), 3);
        assert!(summary.sectors.is_empty());
    }

    #[test]
    fn test_gap_analysis() {
        let mapper = populated();
        let gaps = mapper.analyze_gaps(&["marine", "unrelated"], "Offshore-Energy");

        assert_eq!(gaps.available.len(), 1);
        assert_eq!(gaps.available[0].as_str(), "marine");
        assert_eq!(gaps.missing.len(), 1);
        assert_eq!(gaps.missing[0].as_str(), "maritime");
        assert_eq!(gaps.missing_by_level[&ProficiencyLevel::Advanced].len(), 1);
        assert!(!gaps.is_complete());
    }

    #[test]
    fn test_gap_analysis_unknown_sector() {
        let gaps = populated().analyze_gaps::<&str>(&[], "aquaculture");
        assert!(gaps.is_complete());
        assert!(gaps.available.is_empty());
    }

    #[test]
    fn test_pathway_orders_by_mean_level() {
        let mut mapper = populated();
        mapper
            .add_competence(comp("intro", Axis::Marine, Some(ProficiencyLevel::Foundational)))
            .unwrap();
        mapper
            .add_credential(cred("starter", &["intro"], "tourism"))
            .unwrap();

        let order: Vec<String> = mapper
            .suggest_pathway()
            .into_iter()
            .map(|c| c.id.to_string())
            .collect();
        // starter = 1.0, offshore = 2.5, governance = 3.0
        assert_eq!(order, ["starter", "offshore", "governance"]);
    }

    #[test]
    fn test_pathway_unleveled_ranks_first() {
        let mut mapper = populated();
        mapper.add_competence(comp("free", Axis::Oceanic, None)).unwrap();
        mapper.add_credential(cred("open", &["free"], "tourism")).unwrap();

        let first = mapper.suggest_pathway().remove(0);
        assert_eq!(first.id.as_str(), "open");
    }

    #[test]
    fn test_credential_stack_breadth_first() {
        let mut mapper = populated();
        let mid = cred("mid", &["marine"], "ports").with_stackable(["offshore"]).unwrap();
        mapper.add_credential(mid).unwrap();
        let top = cred("top", &["oceanic"], "ports")
            .with_stackable(["mid", "governance", "offshore"])
            .unwrap();
        mapper.add_credential(top).unwrap();

        let stack: Vec<String> = mapper
            .credential_stack("top")
            .unwrap()
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(stack, ["top", "mid", "governance", "offshore"]);
    }

    #[test]
    fn test_credential_stack_unknown() {
        assert!(matches!(
            populated().credential_stack("nope"),
            Err(MapperError::NotFound { .. })
        ));
    }
}
