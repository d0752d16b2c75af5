//! Numeral parser configuration

use crate::{Error, Result};

/// Default configuration constants
pub mod defaults {
    /// Locale used when none is configured
    pub const LOCALE: &str = "en";
}

/// How a [`NumberParser`](super::NumberParser) matches words against its vocabulary
#[derive(Debug, Clone, PartialEq)]
pub struct ParserConfig {
    pub(crate) locale: String,
    pub(crate) case_sensitive: bool,
    pub(crate) fuzzy_threshold: Option<f64>, // Levenshtein dissimilarity, None = exact
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            locale: defaults::LOCALE.to_string(),
            case_sensitive: false,
            fuzzy_threshold: None,
        }
    }
}

impl ParserConfig {
    /// Create a configuration builder
    pub fn builder() -> ParserConfigBuilder {
        ParserConfigBuilder::default()
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn fuzzy_threshold(&self) -> Option<f64> {
        self.fuzzy_threshold
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<()> {
        if self.locale.trim().is_empty() {
            return Err(Error::Configuration("locale may not be empty".into()));
        }

        if let Some(threshold) = self.fuzzy_threshold {
            if !(0.0..=1.0).contains(&threshold) {
                return Err(Error::Configuration(format!(
                    "fuzzy_threshold must lie in [0, 1], got {threshold}"
                )));
            }
        }

        Ok(())
    }
}

/// Fluent builder for [`ParserConfig`]
#[derive(Debug, Default)]
pub struct ParserConfigBuilder {
    locale: Option<String>,
    case_sensitive: Option<bool>,
    fuzzy_threshold: Option<f64>,
}

impl ParserConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the locale by code
    pub fn locale(mut self, code: impl Into<String>) -> Self {
        self.locale = Some(code.into());
        self
    }

    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = Some(case_sensitive);
        self
    }

    /// Accept words whose Levenshtein dissimilarity to a vocabulary word is at most `threshold`
    pub fn fuzzy_threshold(mut self, threshold: Option<f64>) -> Self {
        self.fuzzy_threshold = threshold;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ParserConfig> {
        let mut config = ParserConfig::default();

        if let Some(locale) = self.locale {
            config.locale = locale;
        }

        if let Some(case_sensitive) = self.case_sensitive {
            config.case_sensitive = case_sensitive;
        }

        if self.fuzzy_threshold.is_some() {
            config.fuzzy_threshold = self.fuzzy_threshold;
        }

        config.validate()?;
        Ok(config)
    }
}
