//! Credentials command implementation.

use crate::cli::CredentialsArgs;
use crate::error::Result;
use crate::output::Formatter;
use morskamary_domain::traits::CompetenceRegistry;
use morskamary_mapper::CompetenceMapper;

/// Execute the credentials command.
pub fn execute_credentials(
    args: CredentialsArgs,
    mapper: &CompetenceMapper,
    formatter: &Formatter,
) -> Result<()> {
    let credentials = match args.sector {
        Some(sector) => mapper.credentials_for_sector(&sector),
        None => mapper.list_credentials(),
    };
    println!("{}", formatter.format_credentials(&credentials)?);
    Ok(())
}
