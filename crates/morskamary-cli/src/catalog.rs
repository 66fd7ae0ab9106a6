//! Catalog loading for CLI commands.

use crate::config::Config;
use crate::error::{CliError, Result};
use morskamary_mapper::{Catalog, CompetenceMapper};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Build a mapper from a catalog file, the configured catalog, or the built-in sample.
///
/// `.csv` files are read as competence matrices; anything else as a JSON
/// catalog. The configuration's validation policy is applied while loading.
pub fn load_mapper(catalog: Option<&str>, config: &Config) -> Result<CompetenceMapper> {
    let path = catalog.or(config.catalog.as_deref());

    let catalog = match path {
        Some(path) => {
            let contents = fs::read_to_string(path).map_err(|e| {
                CliError::InvalidInput(format!("Cannot read catalog '{}': {}", path, e))
            })?;
            parse_catalog(path, &contents)?
        }
        None => Catalog::sample(),
    };

    let mut mapper = CompetenceMapper::with_config(config.validation.clone());
    let report = catalog.apply(&mut mapper)?;
    debug!(
        catalog = path.unwrap_or("<sample>"),
        competences = report.competences,
        credentials = report.credentials,
        "Loaded catalog"
    );
    Ok(mapper)
}

fn parse_catalog(path: &str, contents: &str) -> Result<Catalog> {
    let is_csv = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    if is_csv {
        let origin = Path::new(path)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(path);
        Ok(Catalog::from_csv_competences(contents, origin)?)
    } else {
        Ok(Catalog::from_json(contents)?)
    }
}
