//! Pathway command implementation.

use crate::error::Result;
use crate::output::Formatter;
use morskamary_mapper::CompetenceMapper;

/// Execute the pathway command.
pub fn execute_pathway(mapper: &CompetenceMapper, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_credentials(&mapper.suggest_pathway())?);
    Ok(())
}
