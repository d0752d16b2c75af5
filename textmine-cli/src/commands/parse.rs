//! Parse command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use std::process::ExitCode;
use textmine_core::numbers::{NumberParser, NumberParserRegistry, ParserConfig};
use textmine_core::TextParser;

/// Arguments for the parse command
#[derive(Debug, Args)]
pub struct ParseArgs {
    /// Phrases to parse, one number each
    #[arg(value_name = "PHRASE", required_unless_present = "input")]
    pub phrases: Vec<String>,

    /// Input files or patterns (supports glob), one phrase per line
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Numeral locale (default: from config, else "en")
    #[arg(short, long)]
    pub locale: Option<String>,

    /// Accept words within this Levenshtein dissimilarity of a vocabulary word
    #[arg(long, value_name = "THRESHOLD")]
    pub fuzzy: Option<f64>,

    /// Match vocabulary words case-sensitively
    #[arg(long)]
    pub case_sensitive: bool,

    /// Additional vocabulary file
    #[arg(long, value_name = "FILE")]
    pub vocabulary: Vec<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl ParseArgs {
    /// Execute the parse command
    ///
    /// Fails only on setup errors; malformed phrases are reported in the
    /// output and turn the exit code into a failure.
    pub fn execute(&self, config: &CliConfig) -> Result<ExitCode> {
        let parser = self.parser(config)?;
        let phrases = self.phrases()?;
        log::info!(
            "Parsing {} phrase(s) with locale {}",
            phrases.len(),
            parser.config().locale()
        );

        let mut formatter = super::formatter(self.format, config)?;
        let mut malformed = 0;

        for phrase in &phrases {
            let outcome = parser.parse(phrase);
            if let Err(e) = &outcome {
                log::debug!("{phrase:?}: {e}");
                malformed += 1;
            }
            formatter.format_parsed(phrase, &outcome)?;
        }
        formatter.finish()?;

        if malformed > 0 {
            log::warn!("{malformed} of {} phrase(s) could not be parsed", phrases.len());
            Ok(ExitCode::FAILURE)
        } else {
            Ok(ExitCode::SUCCESS)
        }
    }

    fn parser(&self, config: &CliConfig) -> Result<NumberParser> {
        let parser_config = ParserConfig::builder()
            .locale(
                self.locale
                    .clone()
                    .unwrap_or_else(|| config.parsing.default_locale.clone()),
            )
            .case_sensitive(self.case_sensitive || config.parsing.case_sensitive)
            .fuzzy_threshold(self.fuzzy.or(config.parsing.fuzzy_threshold))
            .build()?;

        let registry = registry(config, &self.vocabulary)?;
        Ok(registry.build_parser(&parser_config)?)
    }

    fn phrases(&self) -> Result<Vec<String>> {
        let mut phrases = self.phrases.clone();

        if !self.input.is_empty() {
            for path in resolve_patterns(&self.input)? {
                log::debug!("Reading {}", path.display());
                phrases.extend(FileReader::read_lines(&path)?);
            }
        }

        if phrases.is_empty() {
            return Err(CliError::NoInput.into());
        }
        Ok(phrases)
    }
}

/// The embedded vocabularies plus those named in the configuration and on the command line
pub(crate) fn registry(config: &CliConfig, extra: &[PathBuf]) -> Result<NumberParserRegistry> {
    let mut registry = NumberParserRegistry::embedded()?;

    for path in config.parsing.vocabularies.iter().chain(extra) {
        registry
            .register_file(path)
            .with_context(|| format!("Failed to load vocabulary {}", path.display()))?;
        log::info!("Registered vocabulary {}", path.display());
    }

    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(phrases: &[&str]) -> ParseArgs {
        ParseArgs {
            phrases: phrases.iter().map(|p| p.to_string()).collect(),
            input: Vec::new(),
            locale: None,
            fuzzy: None,
            case_sensitive: false,
            vocabulary: Vec::new(),
            format: None,
        }
    }

    #[test]
    fn test_parser_uses_config_defaults() {
        let mut config = CliConfig::default();
        config.parsing.fuzzy_threshold = Some(0.2);

        let parser = args(&[]).parser(&config).unwrap();
        assert_eq!(parser.config().fuzzy_threshold(), Some(0.2));
        assert_eq!(parser.parse("sevnteen").unwrap(), 17);
    }

    #[test]
    fn test_unknown_locale() {
        let mut parse_args = args(&["eins"]);
        parse_args.locale = Some("de".to_string());
        assert!(parse_args.parser(&CliConfig::default()).is_err());
    }

    #[test]
    fn test_extra_vocabulary() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("de.toml");
        fs::write(
            &path,
            "[metadata]\ncode = \"de\"\nname = \"Deutsch\"\n\n[[entries]]\nword = \"eins\"\nvalue = 1\n",
        )
        .unwrap();

        let mut parse_args = args(&["eins"]);
        parse_args.locale = Some("de".to_string());
        parse_args.vocabulary = vec![path];
        assert_eq!(parse_args.parser(&CliConfig::default()).unwrap().parse("Eins").unwrap(), 1);
    }

    #[test]
    fn test_phrases_from_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.txt"), "one\n\ntwo\n").unwrap();
        fs::write(temp_dir.path().join("b.txt"), "three\n").unwrap();

        let mut parse_args = args(&["zero"]);
        parse_args.input = vec![format!("{}/*.txt", temp_dir.path().display())];
        assert_eq!(parse_args.phrases().unwrap(), vec!["zero", "one", "two", "three"]);
    }

    #[test]
    fn test_no_phrases() {
        let error = args(&[]).phrases().unwrap_err();
        assert!(matches!(error.downcast_ref::<CliError>(), Some(CliError::NoInput)));
    }
}
