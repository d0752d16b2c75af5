use super::TextMetric;
use crate::token::Token;
use crate::tokenizer::{NGramTokenizer, Tokenizer};
use crate::Result;
use std::collections::HashSet;

/// Dice's coefficient over the n-grams of both texts
#[derive(Debug, Clone, Copy, Default)]
pub struct DiceCoefficient {
    tokenizer: NGramTokenizer,
}

impl DiceCoefficient {
    /// Compare n-grams of degree `min_length` to `max_length`
    pub fn new(min_length: usize, max_length: usize) -> Result<Self> {
        Ok(Self {
            tokenizer: NGramTokenizer::new(min_length, max_length)?,
        })
    }

    fn ngrams(&self, text: &str) -> Result<HashSet<String>> {
        Ok(self
            .tokenizer
            .tokenize(text)?
            .iter()
            .map(|gram| gram.text().into_owned())
            .collect())
    }
}

impl TextMetric for DiceCoefficient {
    fn evaluate(&self, first: &str, second: &str) -> Result<f64> {
        let grams1 = self.ngrams(first)?;
        let grams2 = self.ngrams(second)?;
        let total = grams1.len() + grams2.len();

        // Texts too short to have any n-gram
        if total == 0 {
            return Ok(if first == second { 1.0 } else { 0.0 });
        }

        let shared = grams1.intersection(&grams2).count();
        Ok((2 * shared) as f64 / total as f64)
    }

    fn min_value(&self) -> f64 {
        0.0
    }

    fn max_value(&self) -> f64 {
        1.0
    }

    fn is_gain_metric(&self) -> bool {
        true
    }
}
