use super::{normalize, TextMetric};
use crate::Result;

/// Minimum number of single-character insertions, deletions and substitutions
#[derive(Debug, Clone, Copy, Default)]
pub struct LevenshteinDistance;

impl LevenshteinDistance {
    pub(crate) fn distance(first: &[char], second: &[char]) -> usize {
        if first.is_empty() {
            return second.len();
        }
        if second.is_empty() {
            return first.len();
        }

        // Two rows of the DP matrix
        let mut previous: Vec<usize> = (0..=second.len()).collect();
        let mut current = vec![0; second.len() + 1];

        for (i, a) in first.iter().enumerate() {
            current[0] = i + 1;
            for (j, b) in second.iter().enumerate() {
                let substitution = previous[j] + usize::from(a != b);
                current[j + 1] = (current[j] + 1).min(previous[j + 1] + 1).min(substitution);
            }
            std::mem::swap(&mut previous, &mut current);
        }

        previous[second.len()]
    }
}

impl TextMetric for LevenshteinDistance {
    fn evaluate(&self, first: &str, second: &str) -> Result<f64> {
        let first: Vec<char> = first.chars().collect();
        let second: Vec<char> = second.chars().collect();
        Ok(Self::distance(&first, &second) as f64)
    }

    fn min_value(&self) -> f64 {
        0.0
    }

    fn max_value(&self) -> f64 {
        f64::MAX
    }

    fn is_gain_metric(&self) -> bool {
        false
    }
}

/// Levenshtein distance divided by the length of the longer text
#[derive(Debug, Clone, Copy, Default)]
pub struct LevenshteinDissimilarity;

impl TextMetric for LevenshteinDissimilarity {
    fn evaluate(&self, first: &str, second: &str) -> Result<f64> {
        let first: Vec<char> = first.chars().collect();
        let second: Vec<char> = second.chars().collect();
        let distance = LevenshteinDistance::distance(&first, &second) as f64;
        Ok(normalize(distance, &first, &second))
    }

    fn min_value(&self) -> f64 {
        0.0
    }

    fn max_value(&self) -> f64 {
        1.0
    }

    fn is_gain_metric(&self) -> bool {
        false
    }
}

/// One minus the Levenshtein dissimilarity
#[derive(Debug, Clone, Copy, Default)]
pub struct LevenshteinSimilarity;

impl TextMetric for LevenshteinSimilarity {
    fn evaluate(&self, first: &str, second: &str) -> Result<f64> {
        Ok(1.0 - LevenshteinDissimilarity.evaluate(first, second)?)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        let metric = LevenshteinDistance;
        assert_eq!(metric.evaluate("kitten", "sitting").unwrap(), 3.0);
        assert_eq!(metric.evaluate("", "abc").unwrap(), 3.0);
        assert_eq!(metric.evaluate("abc", "").unwrap(), 3.0);
        assert_eq!(metric.evaluate("same", "same").unwrap(), 0.0);
        // transposition costs two edits
        assert_eq!(metric.evaluate("ab", "ba").unwrap(), 2.0);
    }

    #[test]
    fn test_levenshtein_counts_characters_not_bytes() {
        assert_eq!(LevenshteinDistance.evaluate("über", "uber").unwrap(), 1.0);
    }

    #[test]
    fn test_dissimilarity_and_similarity() {
        assert_eq!(LevenshteinDissimilarity.evaluate("abcd", "abce").unwrap(), 0.25);
        assert_eq!(LevenshteinDissimilarity.evaluate("", "").unwrap(), 0.0);
        assert_eq!(LevenshteinSimilarity.evaluate("abcd", "abce").unwrap(), 0.75);
        assert!(LevenshteinSimilarity.is_gain_metric());
    }
}
