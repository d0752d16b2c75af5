use super::{TokenCollector, Tokenizer};
use crate::token::Substring;
use crate::{Error, Result};
use regex::Regex;

/// Splits text at every match of a delimiter pattern
///
/// Empty fragments, e.g. between two adjacent delimiters, are skipped.
#[derive(Debug, Clone)]
pub struct RegexTokenizer {
    pattern: Regex,
}

impl RegexTokenizer {
    pub fn new(pattern: &str) -> Result<Self> {
        if pattern.is_empty() {
            return Err(Error::InvalidArgument(
                "the delimiter pattern may not be empty".into(),
            ));
        }
        let pattern = Regex::new(pattern)
            .map_err(|e| Error::InvalidArgument(format!("invalid delimiter pattern: {e}")))?;
        Ok(Self { pattern })
    }

    /// A tokenizer splitting at runs of whitespace
    pub fn split_by_whitespace() -> Result<Self> {
        Self::new(r"\s+")
    }

    /// A tokenizer splitting at any of the given delimiters, each a regular expression
    pub fn split_by_delimiters<I, S>(delimiters: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut alternatives = Vec::new();
        for delimiter in delimiters {
            let delimiter = delimiter.as_ref();
            if delimiter.is_empty() {
                return Err(Error::InvalidArgument("delimiters may not be empty".into()));
            }
            alternatives.push(format!("(?:{delimiter})"));
        }
        if alternatives.is_empty() {
            return Err(Error::InvalidArgument(
                "at least one delimiter must be given".into(),
            ));
        }
        Self::new(&alternatives.join("|"))
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Tokenizer for RegexTokenizer {
    type Token = Substring;

    fn tokenize(&self, text: &str) -> Result<Vec<Substring>> {
        let mut collector = TokenCollector::new();
        let mut start = 0;
        let mut position = 0;

        let mut add = |fragment: &str, position: usize| {
            if fragment.is_empty() {
                return Ok(());
            }
            collector.add(fragment.to_string(), position, Substring::new)
        };

        for delimiter in self.pattern.find_iter(text) {
            let fragment = &text[start..delimiter.start()];
            add(fragment, position)?;
            position += fragment.chars().count() + delimiter.as_str().chars().count();
            start = delimiter.end();
        }
        add(&text[start..], position)?;

        Ok(collector.finish())
    }
}
