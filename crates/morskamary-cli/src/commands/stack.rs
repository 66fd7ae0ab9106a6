//! Stack command implementation.

use crate::cli::StackArgs;
use crate::error::Result;
use crate::output::Formatter;
use morskamary_domain::MicroCredential;
use morskamary_mapper::CompetenceMapper;

/// Execute the stack command.
pub fn execute_stack(args: StackArgs, mapper: &CompetenceMapper, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_credentials(&resolve(&args.id, mapper)?)?);
    Ok(())
}

fn resolve(id: &str, mapper: &CompetenceMapper) -> Result<Vec<MicroCredential>> {
    let ids = mapper.credential_stack(id)?;
    Ok(ids
        .iter()
        .filter_map(|id| mapper.credential(id.as_str()).cloned())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use morskamary_domain::traits::CompetenceRegistry;
    use morskamary_domain::{Axis, Competence};
    use morskamary_mapper::MapperError;

    #[test]
    fn test_resolve_stack() {
        let mut mapper = CompetenceMapper::new();
        mapper
            .add_competence(Competence::new("C1", "Survey", Axis::Marine, "DocA").unwrap())
            .unwrap();
        let base = MicroCredential::new("MC1", "Base", 3.0, 5)
            .unwrap()
            .with_competences(["C1"])
            .unwrap();
        mapper.add_credential(base).unwrap();
        let top = MicroCredential::new("MC2", "Top", 3.0, 6)
            .unwrap()
            .with_stackable(["MC1"])
            .unwrap();
        mapper.add_credential(top).unwrap();

        let stack = resolve("MC2", &mapper).unwrap();
        let ids: Vec<_> = stack.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["MC2", "MC1"]);

        assert!(matches!(
            resolve("MC9", &mapper),
            Err(CliError::Mapper(MapperError::NotFound { .. }))
        ));
    }
}
