//! textmine command-line interface

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use textmine_cli::commands::{self, Commands};
use textmine_cli::config::CliConfig;

#[derive(Debug, Parser)]
#[command(name = "textmine")]
#[command(about = "Parse numerals, compare strings and tokenize text", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file
    #[arg(long, global = true, value_name = "FILE", env = "TEXTMINE_CONFIG")]
    config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Increase verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    commands::init_logging(cli.verbose, cli.quiet);

    let outcome = CliConfig::load_or_default(cli.config.as_deref())
        .and_then(|config| cli.command.execute(&config));

    match outcome {
        Ok(code) => code,
        Err(e) => {
            log::debug!("command failed: {e:?}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
