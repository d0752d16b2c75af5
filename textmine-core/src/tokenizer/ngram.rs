use super::{ensure_length_range, TokenCollector, Tokenizer};
use crate::token::NGram;
use crate::Result;

/// Produces the n-grams of a text
///
/// Grams of every degree from `min_length` up to one less than the text's
/// length are taken at the start of the text; every later position then
/// contributes one gram of degree `min(max_length, remaining length)`.
#[derive(Debug, Clone, Copy)]
pub struct NGramTokenizer {
    min_length: usize,
    max_length: usize,
}

impl NGramTokenizer {
    pub fn new(min_length: usize, max_length: usize) -> Result<Self> {
        ensure_length_range(min_length, max_length)?;
        Ok(Self {
            min_length,
            max_length,
        })
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }
}

impl Default for NGramTokenizer {
    fn default() -> Self {
        Self {
            min_length: 1,
            max_length: usize::MAX,
        }
    }
}

impl Tokenizer for NGramTokenizer {
    type Token = NGram;

    fn tokenize(&self, text: &str) -> Result<Vec<NGram>> {
        let chars: Vec<char> = text.chars().collect();
        let length = chars.len();
        let mut collector = TokenCollector::new();

        for n in self.min_length..=self.max_length.min(length.saturating_sub(1)) {
            collector.add(chars[..n].iter().collect(), 0, |t, p| NGram::new(n, t, p))?;
        }

        for i in 1..=length.saturating_sub(self.min_length) {
            let n = self.max_length.min(length - i);
            collector.add(chars[i..i + n].iter().collect(), i, |t, p| NGram::new(n, t, p))?;
        }

        Ok(collector.finish())
    }
}
