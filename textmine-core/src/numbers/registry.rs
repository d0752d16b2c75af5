//! Locale registry of numeral parsers
//!
//! Vocabularies shipped with the crate are embedded at compile time and
//! parsed on first access to the global registry.

use super::config::ParserConfig;
use super::parser::NumberParser;
use super::vocabulary::VocabularyConfig;
use crate::{Error, Result};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, OnceLock};
use tracing::debug;

/// Embedded vocabularies as (name, TOML source)
const EMBEDDED: &[(&str, &str)] = &[(
    "english",
    include_str!("../../configs/numerals/english.toml"),
)];

static GLOBAL: OnceLock<std::result::Result<NumberParserRegistry, String>> = OnceLock::new();

#[derive(Debug)]
struct Registered {
    vocabulary: Arc<VocabularyConfig>,
    parser: Arc<NumberParser>,
}

/// Maps locale codes and their aliases to number parsers
///
/// Lookups ignore case.
#[derive(Debug, Default)]
pub struct NumberParserRegistry {
    locales: Vec<Arc<Registered>>,
    index: HashMap<String, Arc<Registered>>,
}

impl NumberParserRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry holding every embedded vocabulary
    pub fn global() -> Result<&'static Self> {
        GLOBAL
            .get_or_init(|| Self::embedded().map_err(|e| e.to_string()))
            .as_ref()
            .map_err(|e| Error::Configuration(e.clone()))
    }

    /// A new registry holding every embedded vocabulary, open to further registrations
    pub fn embedded() -> Result<Self> {
        let mut registry = Self::new();
        for (name, source) in EMBEDDED {
            let config = VocabularyConfig::from_toml(source).map_err(|e| {
                Error::Configuration(format!("Failed to load embedded {name} vocabulary: {e}"))
            })?;
            registry.register(config)?;
        }
        Ok(registry)
    }

    /// Register a vocabulary under its code and aliases
    ///
    /// A later registration replaces earlier ones for the names it shares
    /// with them.
    pub fn register(&mut self, config: VocabularyConfig) -> Result<Arc<NumberParser>> {
        let parser = Arc::new(NumberParser::new(&config)?);
        let registered = Arc::new(Registered {
            vocabulary: Arc::new(config),
            parser: Arc::clone(&parser),
        });

        let metadata = &registered.vocabulary.metadata;
        let names: Vec<String> = std::iter::once(&metadata.code)
            .chain(&metadata.aliases)
            .map(|name| name.to_lowercase())
            .collect();
        debug!("registered numerals for {} as {names:?}", metadata.code);

        for name in names {
            self.index.insert(name, Arc::clone(&registered));
        }
        self.locales
            .retain(|r| !r.vocabulary.metadata.code.eq_ignore_ascii_case(&metadata.code));
        self.locales.push(registered);

        Ok(parser)
    }

    /// Load a vocabulary file and register it
    pub fn register_file(&mut self, path: impl AsRef<Path>) -> Result<Arc<NumberParser>> {
        self.register(VocabularyConfig::from_file(path)?)
    }

    fn lookup(&self, locale: &str) -> Result<&Arc<Registered>> {
        self.index
            .get(&locale.to_lowercase())
            .ok_or_else(|| Error::UnsupportedLocale {
                locale: locale.to_string(),
            })
    }

    /// The parser registered for `locale`
    pub fn get(&self, locale: &str) -> Result<Arc<NumberParser>> {
        Ok(Arc::clone(&self.lookup(locale)?.parser))
    }

    /// The vocabulary registered for `locale`
    pub fn vocabulary(&self, locale: &str) -> Result<Arc<VocabularyConfig>> {
        Ok(Arc::clone(&self.lookup(locale)?.vocabulary))
    }

    /// A fresh parser for the configured locale, built with the configured settings
    pub fn build_parser(&self, config: &ParserConfig) -> Result<NumberParser> {
        let vocabulary = self.vocabulary(config.locale())?;
        NumberParser::builder(&vocabulary)
            .config(config.clone())
            .build()
    }

    pub fn contains(&self, locale: &str) -> bool {
        self.index.contains_key(&locale.to_lowercase())
    }

    /// Registered locale codes, sorted
    pub fn available_locales(&self) -> Vec<String> {
        let mut codes: Vec<String> = self
            .locales
            .iter()
            .map(|r| r.vocabulary.metadata.code.clone())
            .collect();
        codes.sort();
        codes
    }
}
