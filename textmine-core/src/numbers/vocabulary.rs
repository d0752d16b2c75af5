//! Numeral vocabularies loaded from TOML

use super::value::{NumericValue, Operand, Operation};
use crate::dictionary::{Dictionary, Entry};
use crate::token::AssociationType;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularyConfig {
    pub metadata: MetadataConfig,
    #[serde(default)]
    pub tokenizer: TokenizerConfig,
    pub entries: Vec<EntryConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataConfig {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenizerConfig {
    /// Regular expression matching the text between words
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    #[default]
    Number,
    Modifier,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryConfig {
    pub word: String,
    pub value: i64,
    #[serde(default)]
    pub kind: EntryKind,
    #[serde(default)]
    pub association: Option<AssociationType>,
    #[serde(default)]
    pub left: Option<OperandConfig>,
    #[serde(default)]
    pub right: Option<OperandConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperandConfig {
    pub operation: Operation,
    pub min: i64,
    pub max: i64,
}

fn default_delimiter() -> String {
    r"[^\p{L}]+".to_string()
}

impl OperandConfig {
    pub fn operand(&self) -> Operand {
        Operand::new(self.operation, self.min..=self.max)
    }
}

impl EntryConfig {
    pub fn numeric_value(&self) -> NumericValue {
        let left = self.left.as_ref().map(OperandConfig::operand);
        let right = self.right.as_ref().map(OperandConfig::operand);
        match self.kind {
            EntryKind::Number => NumericValue::Number {
                value: self.value,
                left,
                right,
            },
            EntryKind::Modifier => NumericValue::Modifier {
                value: self.value,
                left,
                right,
            },
        }
    }

    fn validate(&self) -> Result<()> {
        let invalid = |reason: String| Error::Configuration(format!("entry {:?}: {reason}", self.word));

        if self.word.trim().is_empty() {
            return Err(Error::Configuration("entry with an empty word".into()));
        }

        for (side, operand) in [("left", &self.left), ("right", &self.right)] {
            if let Some(operand) = operand {
                if operand.min > operand.max {
                    return Err(invalid(format!(
                        "{side} operand range {}..={} is empty",
                        operand.min, operand.max
                    )));
                }
            }
        }

        if self.kind == EntryKind::Modifier && self.left.is_some() == self.right.is_some() {
            return Err(invalid("a modifier needs exactly one operand".into()));
        }

        let names_missing_side = match self.association {
            Some(AssociationType::Left) => self.left.is_none(),
            Some(AssociationType::Right) => self.right.is_none(),
            Some(AssociationType::Bidirectional) => self.left.is_none() || self.right.is_none(),
            None => false,
        };
        if names_missing_side {
            return Err(invalid(format!(
                "association {:?} names a side without an operand",
                self.association
            )));
        }

        Ok(())
    }
}

impl VocabularyConfig {
    /// Parse and validate a vocabulary
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| Error::Configuration(format!("Failed to parse vocabulary: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Configuration(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.metadata.code.trim().is_empty() {
            return Err(Error::Configuration("locale code may not be empty".into()));
        }
        if self.entries.is_empty() {
            return Err(Error::Configuration(format!(
                "vocabulary {} has no entries",
                self.metadata.code
            )));
        }
        regex::Regex::new(&self.tokenizer.delimiter).map_err(|e| {
            Error::Configuration(format!("invalid tokenizer delimiter: {e}"))
        })?;

        let mut seen = HashSet::new();
        for entry in &self.entries {
            entry.validate()?;
            if !seen.insert(entry.word.to_lowercase()) {
                return Err(Error::Configuration(format!(
                    "duplicate word {:?}",
                    entry.word
                )));
            }
        }

        Ok(())
    }

    /// The dictionary of word to numeric value this vocabulary describes
    pub fn dictionary(&self) -> Dictionary<String, NumericValue> {
        self.build_dictionary(|word| word.to_string())
    }

    /// Like [`dictionary`](Self::dictionary), with every word lowercased
    pub fn folded_dictionary(&self) -> Dictionary<String, NumericValue> {
        self.build_dictionary(str::to_lowercase)
    }

    fn build_dictionary(&self, key: impl Fn(&str) -> String) -> Dictionary<String, NumericValue> {
        self.entries
            .iter()
            .map(|entry| {
                let word = key(&entry.word);
                let value = entry.numeric_value();
                match entry.association {
                    Some(association) => Entry::with_association(word, value, association),
                    None => Entry::new(word, value),
                }
            })
            .collect()
    }
}
