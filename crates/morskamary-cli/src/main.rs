//! Morskamary CLI - inspect and analyze competence catalogs.

use clap::Parser;
use morskamary_cli::catalog::load_mapper;
use morskamary_cli::commands;
use morskamary_cli::{Cli, Command, Config, Formatter};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> morskamary_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    // Load config (defaults when the file is absent)
    let config_path = match &cli.config {
        Some(path) => PathBuf::from(path),
        None => Config::path()?,
    };
    let config = Config::load_from(&config_path)?;

    // Determine output format and color
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    let catalog = cli.catalog.as_deref();
    match cli.command {
        Command::Config(args) => {
            commands::execute_config(args, &config, &config_path, &formatter)?
        }
        Command::Summary => {
            commands::execute_summary(&load_mapper(catalog, &config)?, &formatter)?
        }
        Command::Competences(args) => {
            commands::execute_competences(args, &load_mapper(catalog, &config)?, &formatter)?
        }
        Command::Credentials(args) => {
            commands::execute_credentials(args, &load_mapper(catalog, &config)?, &formatter)?
        }
        Command::Show(args) => {
            commands::execute_show(args, &load_mapper(catalog, &config)?, &formatter)?
        }
        Command::Gaps(args) => {
            commands::execute_gaps(args, &load_mapper(catalog, &config)?, &formatter)?
        }
        Command::Pathway => {
            commands::execute_pathway(&load_mapper(catalog, &config)?, &formatter)?
        }
        Command::Stack(args) => {
            commands::execute_stack(args, &load_mapper(catalog, &config)?, &formatter)?
        }
        Command::Prompt(args) => commands::execute_prompt(args, &load_mapper(catalog, &config)?)?,
    }

    Ok(())
}
