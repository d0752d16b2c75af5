//! Building blocks for mining structured values out of free text
//!
//! Text is split by a [`Tokenizer`](tokenizer::Tokenizer) into tokens that
//! remember every position they occur at, ordered into a
//! [`TokenSequence`](sequence::TokenSequence), and transformed by a chain of
//! [`Processor`](processing::Processor) stages. Sequences are edited through
//! a fail-fast [`SequenceCursor`](sequence::SequenceCursor) that detects
//! structural changes made behind its back.
//!
//! # Architecture
//!
//! - **Tokens and sequences**: [`token`], [`sequence`]
//! - **Lookup**: [`dictionary`] with textual and metric [`Matcher`]s over [`metrics`]
//! - **Pipelines**: [`tokenizer`], [`processing`], [`parser`]
//! - **Numerals**: [`numbers`], a parser for numbers written out in words
//!
//! # Example
//!
//! ```rust
//! use textmine_core::numbers::NumberParserRegistry;
//! use textmine_core::parser::TextParser;
//!
//! let registry = NumberParserRegistry::global().unwrap();
//! let parser = registry.get("en").unwrap();
//!
//! assert_eq!(parser.parse("two hundred fifty thousand").unwrap(), 250_000);
//! assert_eq!(parser.parse("twenty-one").unwrap(), 21);
//! assert!(parser.parse("twenty thirty").is_err());
//! ```

pub mod dictionary;
mod error;
pub mod metrics;
pub mod numbers;
pub mod parser;
pub mod processing;
pub mod sequence;
pub mod token;
pub mod tokenizer;

pub use dictionary::{Dictionary, Entry, Matcher};
pub use error::{CursorError, Error, Result};
pub use numbers::{NumberParser, NumberParserRegistry, NumericValue};
pub use parser::{LocalizedTextParser, TextParser};
pub use processing::{Processor, ProcessorChain};
pub use sequence::{SequenceCursor, TokenSequence};
pub use token::{AssociationType, Token};
