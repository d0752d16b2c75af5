use super::{ensure_length_range, TokenCollector, Tokenizer};
use crate::token::Substring;
use crate::Result;

/// Produces every proper substring within a length range
#[derive(Debug, Clone, Copy)]
pub struct SubstringTokenizer {
    min_length: usize,
    max_length: usize,
}

impl SubstringTokenizer {
    pub fn new(min_length: usize, max_length: usize) -> Result<Self> {
        ensure_length_range(min_length, max_length)?;
        Ok(Self {
            min_length,
            max_length,
        })
    }
}

impl Default for SubstringTokenizer {
    fn default() -> Self {
        Self {
            min_length: 1,
            max_length: usize::MAX,
        }
    }
}

impl Tokenizer for SubstringTokenizer {
    type Token = Substring;

    fn tokenize(&self, text: &str) -> Result<Vec<Substring>> {
        let chars: Vec<char> = text.chars().collect();
        let length = chars.len();
        let mut collector = TokenCollector::new();

        for n in self.min_length..=self.max_length.min(length.saturating_sub(1)) {
            for i in 0..=length - n {
                collector.add(chars[i..i + n].iter().collect(), i, Substring::new)?;
            }
        }

        Ok(collector.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_util::fragments;
    use super::*;

    #[test]
    fn test_all_proper_substrings() {
        let tokens = SubstringTokenizer::default().tokenize("aba").unwrap();
        assert_eq!(
            fragments(&tokens),
            vec![
                ("a".to_string(), vec![0, 2]),
                ("ab".to_string(), vec![0]),
                ("b".to_string(), vec![1]),
                ("ba".to_string(), vec![1]),
            ]
        );
    }

    #[test]
    fn test_length_range() {
        let tokens = SubstringTokenizer::new(2, 2).unwrap().tokenize("abcd").unwrap();
        assert_eq!(tokens.len(), 3);
    }
}
