//! Numerals written out in words
//!
//! A vocabulary assigns every numeral word a [`NumericValue`]: a number and
//! the operands through which it combines with its neighbours. Parsing
//! translates each word of a phrase and then reduces the translated words
//! into one number, e.g. `two hundred fifty` is `(2 × 100) + 50`.

mod config;
mod parser;
mod reduce;
mod registry;
mod value;
mod vocabulary;

pub use config::{defaults, ParserConfig, ParserConfigBuilder};
pub use parser::{NumberParser, NumberParserBuilder, REVISION_TRANSLATE};
pub use reduce::{Extractor, Reducer, REVISION_NORMALIZE, REVISION_REDUCE};
pub use registry::NumberParserRegistry;
pub use value::{NumericValue, Operand, Operation};
pub use vocabulary::{
    EntryConfig, EntryKind, MetadataConfig, OperandConfig, TokenizerConfig, VocabularyConfig,
};

use crate::parser::TextParser;
use crate::Result;

/// Parse an English numeral phrase with the global registry
pub fn parse(text: &str) -> Result<i64> {
    parse_localized(text, defaults::LOCALE)
}

/// Parse a numeral phrase in the given locale with the global registry
pub fn parse_localized(text: &str, locale: &str) -> Result<i64> {
    NumberParserRegistry::global()?.get(locale)?.parse(text)
}
