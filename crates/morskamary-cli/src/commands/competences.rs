//! Competences command implementation.

use crate::cli::CompetencesArgs;
use crate::error::Result;
use crate::output::Formatter;
use morskamary_domain::traits::CompetenceRegistry;
use morskamary_domain::{Axis, Competence, ProficiencyLevel};
use morskamary_mapper::CompetenceMapper;

/// Execute the competences command.
pub fn execute_competences(
    args: CompetencesArgs,
    mapper: &CompetenceMapper,
    formatter: &Formatter,
) -> Result<()> {
    let competences = select(
        mapper,
        args.axis.map(Into::into),
        args.level.map(Into::into),
    );
    println!("{}", formatter.format_competences(&competences)?);
    Ok(())
}

/// Without filters every competence is listed, retired ones included.
fn select(
    mapper: &CompetenceMapper,
    axis: Option<Axis>,
    level: Option<ProficiencyLevel>,
) -> Vec<Competence> {
    match (axis, level) {
        (None, None) => mapper.list_competences(),
        (Some(axis), None) => mapper.competences_by_axis(axis),
        (None, Some(level)) => mapper.competences_by_level(level),
        (Some(axis), Some(level)) => mapper
            .competences_by_axis(axis)
            .into_iter()
            .filter(|c| c.level == Some(level))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use morskamary_mapper::Catalog;

    fn sample() -> CompetenceMapper {
        let mut mapper = CompetenceMapper::new();
        Catalog::sample().apply(&mut mapper).unwrap();
        mapper
    }

    #[test]
    fn test_select_filters() {
        let mapper = sample();
        assert_eq!(select(&mapper, None, None).len(), 3);
        assert_eq!(select(&mapper, Some(Axis::Maritime), None).len(), 1);
        assert_eq!(
            select(&mapper, None, Some(ProficiencyLevel::Advanced)).len(),
            2
        );
        let both = select(
            &mapper,
            Some(Axis::Oceanic),
            Some(ProficiencyLevel::Advanced),
        );
        assert_eq!(both.len(), 1);
        assert_eq!(both[0].id.as_str(), "comp_oceanic_001");
        assert!(select(&mapper, Some(Axis::Marine), Some(ProficiencyLevel::Expert)).is_empty());
    }

    #[test]
    fn test_retired_listed_only_without_filters() {
        let mut mapper = CompetenceMapper::new();
        let c = Competence::new("C9", "Dredging", Axis::Maritime, "DocA").unwrap();
        mapper.add_competence(c).unwrap();
        mapper.retire_competence("C9").unwrap();
        assert_eq!(select(&mapper, None, None).len(), 1);
        assert!(select(&mapper, Some(Axis::Maritime), None).is_empty());
    }
}
