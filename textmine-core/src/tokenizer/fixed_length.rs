use super::{TokenCollector, Tokenizer};
use crate::token::Substring;
use crate::{Error, Result};

/// Splits text into consecutive fragments of equal length
#[derive(Debug, Clone, Copy)]
pub struct FixedLengthTokenizer {
    length: usize,
}

impl FixedLengthTokenizer {
    pub fn new(length: usize) -> Result<Self> {
        if length == 0 {
            return Err(Error::InvalidArgument("the length must be at least 1".into()));
        }
        Ok(Self { length })
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Tokenizer for FixedLengthTokenizer {
    type Token = Substring;

    /// Fails if the text's length is not a multiple of the fragment length
    fn tokenize(&self, text: &str) -> Result<Vec<Substring>> {
        let chars: Vec<char> = text.chars().collect();
        if chars.len() % self.length != 0 {
            return Err(Error::InvalidArgument(format!(
                "the length of the text must be divisible by {}",
                self.length
            )));
        }

        let mut collector = TokenCollector::new();
        for (i, chunk) in chars.chunks(self.length).enumerate() {
            collector.add(chunk.iter().collect(), i * self.length, Substring::new)?;
        }
        Ok(collector.finish())
    }
}
