//! Summary command implementation.

use crate::error::Result;
use crate::output::Formatter;
use morskamary_mapper::CompetenceMapper;

/// Execute the summary command.
pub fn execute_summary(mapper: &CompetenceMapper, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_summary(&mapper.summary())?);
    Ok(())
}
