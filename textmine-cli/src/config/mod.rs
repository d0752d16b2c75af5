//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Numeral parsing configuration
    #[serde(default)]
    pub parsing: ParsingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Numeral parsing configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ParsingConfig {
    /// Locale used when none is given on the command line
    pub default_locale: String,

    /// Match vocabulary words case-sensitively
    pub case_sensitive: bool,

    /// Accept words within this Levenshtein dissimilarity of a vocabulary word
    pub fuzzy_threshold: Option<f64>,

    /// Additional vocabulary files registered next to the embedded ones
    pub vocabularies: Vec<PathBuf>,
}

impl Default for ParsingConfig {
    fn default() -> Self {
        Self {
            default_locale: textmine_core::numbers::defaults::LOCALE.to_string(),
            case_sensitive: false,
            fuzzy_threshold: None,
            vocabularies: Vec::new(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load the given file, or fall back to the defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.parsing.default_locale, "en");
        assert_eq!(config.parsing.fuzzy_threshold, None);
        assert_eq!(config.output.default_format, "text");
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_load_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("textmine.toml");
        fs::write(
            &path,
            "[parsing]\nfuzzy_threshold = 0.25\n\n[output]\ndefault_format = \"json\"\n",
        )
        .unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.parsing.default_locale, "en");
        assert_eq!(config.parsing.fuzzy_threshold, Some(0.25));
        assert_eq!(config.output.default_format, "json");
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_load_errors() {
        let temp_dir = TempDir::new().unwrap();
        assert!(CliConfig::load(&temp_dir.path().join("missing.toml")).is_err());

        let path = temp_dir.path().join("broken.toml");
        fs::write(&path, "[parsing\n").unwrap();
        let error = CliConfig::load(&path).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<CliError>(),
            Some(CliError::ConfigError(_))
        ));
    }

    #[test]
    fn test_load_or_default() {
        assert_eq!(CliConfig::load_or_default(None).unwrap(), CliConfig::default());
    }
}
