//! Gaps command implementation.

use crate::cli::GapsArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use morskamary_mapper::CompetenceMapper;
use tracing::warn;

/// Execute the gaps command.
pub fn execute_gaps(args: GapsArgs, mapper: &CompetenceMapper, formatter: &Formatter) -> Result<()> {
    if args.sector.trim().is_empty() {
        return Err(CliError::InvalidInput("Sector must not be empty".to_string()));
    }

    for id in &args.have {
        if mapper.competence(id).is_none() {
            warn!(competence = %id, "Held competence is not in the catalog");
        }
    }

    let gaps = mapper.analyze_gaps(&args.have, &args.sector);
    if gaps.available.is_empty() && gaps.missing.is_empty() {
        println!(
            "{}",
            formatter.info(&format!("No credential is offered for sector '{}'", args.sector))
        );
        return Ok(());
    }

    println!("{}", formatter.format_gaps(&gaps)?);
    Ok(())
}
