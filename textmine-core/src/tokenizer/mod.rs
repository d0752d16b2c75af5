//! Tokenizers splitting text into position-tagged fragments
//!
//! All tokenizers return an unordered collection in which identical
//! fragments are represented by a single token carrying every position it
//! occurs at. Use [`TokenSequence::create_sorted`](crate::sequence::TokenSequence::create_sorted)
//! to turn the collection into a linear stream.

mod dictionary;
mod fixed_length;
mod ngram;
mod regex;
mod substring;

pub use self::dictionary::DictionaryTokenizer;
pub use self::fixed_length::FixedLengthTokenizer;
pub use self::ngram::NGramTokenizer;
pub use self::regex::RegexTokenizer;
pub use self::substring::SubstringTokenizer;

use crate::token::Token;
use crate::{Error, Result};
use std::collections::HashMap;

/// Splits a text into tokens
pub trait Tokenizer: Send + Sync {
    type Token: Token;

    fn tokenize(&self, text: &str) -> Result<Vec<Self::Token>>;
}

/// Gathers fragments, merging repeated texts into one token
pub(crate) struct TokenCollector<T> {
    tokens: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T: Token> TokenCollector<T> {
    pub(crate) fn new() -> Self {
        Self {
            tokens: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub(crate) fn add<F>(&mut self, text: String, position: usize, factory: F) -> Result<()>
    where
        F: FnOnce(String, usize) -> Result<T>,
    {
        if let Some(&i) = self.index.get(&text) {
            self.tokens[i].add_position(position);
        } else {
            self.index.insert(text.clone(), self.tokens.len());
            self.tokens.push(factory(text, position)?);
        }
        Ok(())
    }

    pub(crate) fn finish(self) -> Vec<T> {
        self.tokens
    }
}

/// Validate a `min..=max` length pair
pub(crate) fn ensure_length_range(min_length: usize, max_length: usize) -> Result<()> {
    if min_length == 0 {
        return Err(Error::InvalidArgument(
            "the minimum length must be at least 1".into(),
        ));
    }
    if max_length < min_length {
        return Err(Error::InvalidArgument(format!(
            "the maximum length must be at least the minimum length {min_length}"
        )));
    }
    Ok(())
}
