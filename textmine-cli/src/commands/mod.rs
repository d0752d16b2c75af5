//! CLI command implementations

use crate::config::CliConfig;
use crate::output::{OutputFormat, OutputFormatter};
use anyhow::Result;
use clap::Subcommand;
use std::process::ExitCode;

pub mod distance;
pub mod list;
pub mod parse;
pub mod tokenize;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Parse numerals written out in words
    Parse(parse::ParseArgs),

    /// Compare two strings with a metric
    Distance(distance::DistanceArgs),

    /// Split text into position-ordered tokens
    Tokenize(tokenize::TokenizeArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: list::ListCommands,
    },

    /// Validate a numeral vocabulary file
    Validate(validate::ValidateArgs),
}

impl Commands {
    /// Execute the command
    pub fn execute(&self, config: &CliConfig) -> Result<ExitCode> {
        log::debug!("Command: {self:?}");

        match self {
            Commands::Parse(args) => args.execute(config),
            Commands::Distance(args) => args.execute().map(|()| ExitCode::SUCCESS),
            Commands::Tokenize(args) => args.execute(config).map(|()| ExitCode::SUCCESS),
            Commands::List { subcommand } => subcommand.execute(config).map(|()| ExitCode::SUCCESS),
            Commands::Validate(args) => args.execute().map(|()| ExitCode::SUCCESS),
        }
    }
}

/// Initialize logging based on verbosity level
pub fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .init();
    }
}

/// The formatter for the requested format, or the configured default
pub(crate) fn formatter(
    format: Option<OutputFormat>,
    config: &CliConfig,
) -> Result<Box<dyn OutputFormatter>> {
    let format = match format {
        Some(format) => format,
        None => OutputFormat::from_name(&config.output.default_format).ok_or_else(|| {
            crate::CliError::ConfigError(format!(
                "unknown output format: {}",
                config.output.default_format
            ))
        })?,
    };
    Ok(format.stdout_formatter(config.output.pretty_json))
}
