//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use morskamary_domain::{Axis, ProficiencyLevel};

/// Morskamary - map ocean skills onto the TMBD axes and package micro-credentials.
#[derive(Debug, Parser)]
#[command(name = "morskamary")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Catalog file (JSON); the built-in sample is used when omitted
    #[arg(long, global = true, env = "MORSKAMARY_CATALOG")]
    pub catalog: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (IDs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show counts by axis, level and sector
    Summary,

    /// List competences
    Competences(CompetencesArgs),

    /// List micro-credentials
    Credentials(CredentialsArgs),

    /// Show one competence or micro-credential
    Show(ShowArgs),

    /// Compare held competences against a sector's requirements
    Gaps(GapsArgs),

    /// Suggest a micro-credential progression
    Pathway,

    /// List a credential and everything it stacks with
    Stack(StackArgs),

    /// Print an axis classification prompt for a skill
    Prompt(PromptArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

/// Arguments for the competences command.
#[derive(Debug, Parser)]
pub struct CompetencesArgs {
    /// Filter by TMBD axis
    #[arg(short, long, value_enum)]
    pub axis: Option<AxisArg>,

    /// Filter by proficiency level
    #[arg(short, long, value_enum)]
    pub level: Option<LevelArg>,
}

/// Arguments for the credentials command.
#[derive(Debug, Parser)]
pub struct CredentialsArgs {
    /// Filter by sector (case-insensitive)
    #[arg(short, long)]
    pub sector: Option<String>,
}

/// Arguments for the show command.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Competence or credential identifier
    pub id: String,
}

/// Arguments for the gaps command.
#[derive(Debug, Parser)]
pub struct GapsArgs {
    /// Target sector
    #[arg(short, long)]
    pub sector: String,

    /// Competence identifiers already held (repeatable or comma-separated)
    #[arg(long = "have", value_delimiter = ',')]
    pub have: Vec<String>,
}

/// Arguments for the stack command.
#[derive(Debug, Parser)]
pub struct StackArgs {
    /// Credential identifier
    pub id: String,
}

/// Arguments for the prompt command.
#[derive(Debug, Parser)]
pub struct PromptArgs {
    /// Skill description to classify
    pub skill: String,

    /// Source locator of the skill description
    #[arg(short, long)]
    pub source: Option<String>,

    /// Omit already classified competences from the prompt
    #[arg(long)]
    pub no_examples: bool,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Axis argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum AxisArg {
    /// Marine (biophysical)
    Marine,
    /// Maritime (techno-economic, institutional)
    Maritime,
    /// Oceanic (governance, hydrosocial)
    Oceanic,
}

/// Proficiency level argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LevelArg {
    /// Foundational
    Foundational,
    /// Intermediate
    Intermediate,
    /// Advanced
    Advanced,
    /// Expert
    Expert,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<AxisArg> for Axis {
    fn from(axis: AxisArg) -> Self {
        match axis {
            AxisArg::Marine => Axis::Marine,
            AxisArg::Maritime => Axis::Maritime,
            AxisArg::Oceanic => Axis::Oceanic,
        }
    }
}

impl From<LevelArg> for ProficiencyLevel {
    fn from(level: LevelArg) -> Self {
        match level {
            LevelArg::Foundational => ProficiencyLevel::Foundational,
            LevelArg::Intermediate => ProficiencyLevel::Intermediate,
            LevelArg::Advanced => ProficiencyLevel::Advanced,
            LevelArg::Expert => ProficiencyLevel::Expert,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_competences_command() {
        let cli = Cli::parse_from(["morskamary", "competences", "--axis", "marine"]);
        match cli.command {
            Command::Competences(args) => {
                assert!(matches!(args.axis, Some(AxisArg::Marine)));
                assert!(args.level.is_none());
            }
            _ => panic!("Expected Competences command"),
        }
    }

    #[test]
    fn test_gaps_have_list() {
        let cli = Cli::parse_from([
            "morskamary",
            "gaps",
            "--sector",
            "ports",
            "--have",
            "C1,C2",
            "--have",
            "C3",
        ]);
        match cli.command {
            Command::Gaps(args) => {
                assert_eq!(args.sector, "ports");
                assert_eq!(args.have, ["C1", "C2", "C3"]);
            }
            _ => panic!("Expected Gaps command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["morskamary", "summary", "--format", "json", "--catalog", "x.json"]);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert_eq!(cli.catalog.as_deref(), Some("x.json"));
    }

    #[test]
    fn test_config_init_force() {
        let cli = Cli::parse_from(["morskamary", "config", "init", "--force"]);
        match cli.command {
            Command::Config(ConfigArgs {
                action: ConfigAction::Init { force },
            }) => assert!(force),
            _ => panic!("Expected Config Init command"),
        }
    }

    #[test]
    fn test_missing_subcommand_is_error() {
        assert!(Cli::try_parse_from(["morskamary"]).is_err());
    }

    #[test]
    fn test_axis_conversion() {
        let axis: Axis = AxisArg::Oceanic.into();
        assert_eq!(axis, Axis::Oceanic);
        let level: ProficiencyLevel = LevelArg::Advanced.into();
        assert_eq!(level, ProficiencyLevel::Advanced);
    }
}
