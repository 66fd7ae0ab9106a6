//! Morskamary CLI library.
//!
//! This library provides the core functionality for the `morskamary` command-line
//! interface, including configuration management, catalog loading, command
//! execution, and output formatting.

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
