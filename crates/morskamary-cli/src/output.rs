//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use morskamary_domain::{Competence, MicroCredential};
use morskamary_mapper::{GapAnalysis, MappingSummary};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format competences output.
    pub fn format_competences(&self, competences: &[Competence]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(competences)?),
            OutputFormat::Table => Ok(self.format_competences_table(competences)),
            OutputFormat::Quiet => Ok(join_ids(competences.iter().map(|c| c.id.as_str()))),
        }
    }

    /// Format micro-credentials output.
    pub fn format_credentials(&self, credentials: &[MicroCredential]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(credentials)?),
            OutputFormat::Table => Ok(self.format_credentials_table(credentials)),
            OutputFormat::Quiet => Ok(join_ids(credentials.iter().map(|c| c.id.as_str()))),
        }
    }

    /// Format a single competence with every field.
    pub fn format_competence_detail(&self, c: &Competence) -> Result<String> {
        if self.format != OutputFormat::Table {
            return self.format_competences(std::slice::from_ref(c));
        }

        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        builder.push_record(["ID", c.id.as_str()]);
        builder.push_record(["Name", &c.name]);
        builder.push_record(["Description", &c.description]);
        builder.push_record(["Axis", &format!("{} ({})", c.axis, c.axis.code())]);
        builder.push_record(["Level", &c.level.map(|l| l.to_string()).unwrap_or_else(|| "-".into())]);
        builder.push_record(["Source", c.source.as_str()]);
        builder.push_record(["Keywords", &c.keywords.join(", ")]);
        builder.push_record(["Retired", if c.retired { "yes" } else { "no" }]);
        Ok(self.render(builder))
    }

    /// Format a single micro-credential with every field.
    pub fn format_credential_detail(&self, c: &MicroCredential) -> Result<String> {
        if self.format != OutputFormat::Table {
            return self.format_credentials(std::slice::from_ref(c));
        }

        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        builder.push_record(["ID", c.id.as_str()]);
        builder.push_record(["Title", &c.title]);
        builder.push_record(["Description", &c.description]);
        builder.push_record(["Learner profile", &c.learner_profile]);
        builder.push_record(["Workload (ECTS)", &format!("{}", c.workload)]);
        builder.push_record(["EQF level", &c.eqf_level.to_string()]);
        builder.push_record(["Learning outcomes", &c.learning_outcomes.join("\n")]);
        builder.push_record(["Assessment", &c.assessment]);
        builder.push_record(["Competences", &join_ids(c.competence_ids.iter().map(|i| i.as_str()))]);
        builder.push_record(["Stacks with", &join_ids(c.stackable_with.iter().map(|i| i.as_str()))]);
        builder.push_record(["Sector", c.sector.as_deref().unwrap_or("-")]);
        Ok(self.render(builder))
    }

    /// Format the mapping summary.
    pub fn format_summary(&self, summary: &MappingSummary) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(summary)?),
            OutputFormat::Table => Ok(summary.summary()),
            OutputFormat::Quiet => Ok(format!(
                "{} {}",
                summary.total_competences, summary.total_credentials
            )),
        }
    }

    /// Format a gap analysis.
    pub fn format_gaps(&self, gaps: &GapAnalysis) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(gaps)?),
            OutputFormat::Quiet => Ok(join_ids(gaps.missing.iter().map(|i| i.as_str()))),
            OutputFormat::Table => {
                if gaps.is_complete() {
                    return Ok(self.success(&format!(
                        "All competences required by '{}' are held",
                        gaps.sector
                    )));
                }
                let mut out = self.info(&format!(
                    "Sector '{}': {} held, {} missing",
                    gaps.sector,
                    gaps.available.len(),
                    gaps.missing.len()
                ));
                out.push('\n');
                for id in &gaps.missing {
                    out.push_str(&format!("  - {}\n", id));
                }
                for (level, ids) in &gaps.missing_by_level {
                    out.push_str(&format!("  {}: {}\n", level, join_ids(ids.iter().map(|i| i.as_str()))));
                }
                Ok(out)
            }
        }
    }

    /// Format competences as a table.
    fn format_competences_table(&self, competences: &[Competence]) -> String {
        if competences.is_empty() {
            return self.colorize("No competences found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Name", "Axis", "Level", "Source"]);

        for c in competences {
            let axis = format!("{} ({})", c.axis, c.axis.code());
            let level = c.level.map(|l| l.to_string()).unwrap_or_else(|| "-".into());
            let name = if c.retired {
                format!("{} [retired]", c.name)
            } else {
                c.name.clone()
            };
            builder.push_record([c.id.as_str(), &name, &axis, &level, c.source.as_str()]);
        }

        self.render(builder)
    }

    /// Format credentials as a table.
    fn format_credentials_table(&self, credentials: &[MicroCredential]) -> String {
        if credentials.is_empty() {
            return self.colorize("No credentials found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Title", "ECTS", "EQF", "Competences", "Sector"]);

        for c in credentials {
            builder.push_record([
                c.id.as_str(),
                &c.title,
                &format!("{}", c.workload),
                &c.eqf_level.to_string(),
                &join_ids(c.competence_ids.iter().map(|i| i.as_str())),
                c.sector.as_deref().unwrap_or("-"),
            ]);
        }

        self.render(builder)
    }

    fn render(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn join_ids<'a>(ids: impl Iterator<Item = &'a str>) -> String {
    ids.collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use morskamary_domain::traits::CompetenceRegistry;
    use morskamary_mapper::{Catalog, CompetenceMapper};

    fn sample() -> CompetenceMapper {
        let mut mapper = CompetenceMapper::new();
        Catalog::sample().apply(&mut mapper).unwrap();
        mapper
    }

    #[test]
    fn test_table_includes_source_column() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter
            .format_competences(&sample().list_competences())
            .unwrap();
        assert!(output.contains("Source"));
        assert!(output.contains("morskamary sample catalog"));
        assert!(output.contains("marine (M)"));
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter
            .format_credentials(&sample().list_credentials())
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["id"], "cred_offshore_001");
        assert_eq!(parsed[0]["eqf_level"], 6);
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter
            .format_competences(&sample().list_competences())
            .unwrap();
        assert_eq!(output, "comp_marine_001, comp_maritime_001, comp_oceanic_001");
    }

    #[test]
    fn test_empty_competences() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_competences(&[]).unwrap();
        assert!(output.contains("No competences found"));
    }

    #[test]
    fn test_detail_view() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let mapper = sample();
        let output = formatter
            .format_credential_detail(&mapper.get_credential("cred_ocean_gov_001").unwrap())
            .unwrap();
        assert!(output.contains("Ocean Governance Practitioner"));
        assert!(output.contains("comp_oceanic_001"));
    }

    #[test]
    fn test_gaps_output() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let gaps = sample().analyze_gaps(&["comp_marine_001"], "offshore-energy");
        let output = formatter.format_gaps(&gaps).unwrap();
        assert!(output.contains("1 held, 1 missing"));
        assert!(output.contains("comp_maritime_001"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.info("note"), "ℹ note");
    }
}
