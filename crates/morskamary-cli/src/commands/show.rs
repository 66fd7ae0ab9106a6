//! Show command implementation.

use crate::cli::ShowArgs;
use crate::error::Result;
use crate::output::Formatter;
use morskamary_mapper::{CompetenceMapper, MapperError, RecordKind};

/// Execute the show command.
pub fn execute_show(args: ShowArgs, mapper: &CompetenceMapper, formatter: &Formatter) -> Result<()> {
    println!("{}", render(&args.id, mapper, formatter)?);
    Ok(())
}

/// Competence identifiers are looked up before credential identifiers; a
/// miss in both registries reports the credential lookup.
fn render(id: &str, mapper: &CompetenceMapper, formatter: &Formatter) -> Result<String> {
    if let Some(competence) = mapper.competence(id) {
        return formatter.format_competence_detail(competence);
    }
    match mapper.credential(id) {
        Some(credential) => formatter.format_credential_detail(credential),
        None => Err(MapperError::NotFound {
            kind: RecordKind::Credential,
            id: id.to_string(),
        }
        .into()),
    }
}
