use super::{normalize, TextMetric};
use crate::Result;
use std::collections::HashMap;

/// Edit distance that also counts a swap of adjacent characters as one edit,
/// editing no substring more than once
#[derive(Debug, Clone, Copy, Default)]
pub struct OptimalStringAlignmentDistance;

impl TextMetric for OptimalStringAlignmentDistance {
    fn evaluate(&self, first: &str, second: &str) -> Result<f64> {
        let a: Vec<char> = first.chars().collect();
        let b: Vec<char> = second.chars().collect();
        let (m, n) = (a.len(), b.len());
        if m == 0 || n == 0 {
            return Ok(m.max(n) as f64);
        }

        let mut d = vec![vec![0usize; n + 1]; m + 1];
        for (i, row) in d.iter_mut().enumerate() {
            row[0] = i;
        }
        for j in 0..=n {
            d[0][j] = j;
        }

        for i in 1..=m {
            for j in 1..=n {
                let cost = usize::from(a[i - 1] != b[j - 1]);
                let mut distance = (d[i][j - 1] + 1)
                    .min(d[i - 1][j] + 1)
                    .min(d[i - 1][j - 1] + cost);
                if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                    distance = distance.min(d[i - 2][j - 2] + cost);
                }
                d[i][j] = distance;
            }
        }

        Ok(d[m][n] as f64)
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

/// Unrestricted Damerau-Levenshtein distance
#[derive(Debug, Clone, Copy, Default)]
pub struct DamerauLevenshteinDistance;

impl DamerauLevenshteinDistance {
    fn distance(a: &[char], b: &[char]) -> usize {
        let (m, n) = (a.len(), b.len());
        if m == 0 || n == 0 {
            return m.max(n);
        }

        let mut d = vec![vec![0usize; n + 1]; m + 1];
        for (i, row) in d.iter_mut().enumerate() {
            row[0] = i;
        }
        for j in 0..=n {
            d[0][j] = j;
        }

        // Last row in which each character of `a` was seen
        let mut last_row: HashMap<char, usize> = HashMap::new();

        for i in 1..=m {
            let mut last_match_column = 0;
            for j in 1..=n {
                let i1 = last_row.get(&b[j - 1]).copied().unwrap_or(0);
                let j1 = last_match_column;
                let cost = if a[i - 1] == b[j - 1] {
                    last_match_column = j;
                    0
                } else {
                    1
                };

                let mut distance = (d[i][j - 1] + 1)
                    .min(d[i - 1][j] + 1)
                    .min(d[i - 1][j - 1] + cost);
                if i1 > 0 && j1 > 0 {
                    distance = distance.min(d[i1 - 1][j1 - 1] + (i - i1 - 1) + (j - j1 - 1) + 1);
                }
                d[i][j] = distance;
            }
            last_row.insert(a[i - 1], i);
        }

        d[m][n]
    }
}

impl TextMetric for DamerauLevenshteinDistance {
    fn evaluate(&self, first: &str, second: &str) -> Result<f64> {
        let a: Vec<char> = first.chars().collect();
        let b: Vec<char> = second.chars().collect();
        Ok(Self::distance(&a, &b) as f64)
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

/// Damerau-Levenshtein distance divided by the length of the longer text
#[derive(Debug, Clone, Copy, Default)]
pub struct DamerauLevenshteinDissimilarity;

impl TextMetric for DamerauLevenshteinDissimilarity {
    fn evaluate(&self, first: &str, second: &str) -> Result<f64> {
        let a: Vec<char> = first.chars().collect();
        let b: Vec<char> = second.chars().collect();
        let distance = DamerauLevenshteinDistance::distance(&a, &b) as f64;
        Ok(normalize(distance, &a, &b))
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

#[derive(Debug, Clone, Copy, Default)]
pub struct DamerauLevenshteinSimilarity;

impl TextMetric for DamerauLevenshteinSimilarity {
    fn evaluate(&self, first: &str, second: &str) -> Result<f64> {
        Ok(1.0 - DamerauLevenshteinDissimilarity.evaluate(first, second)?)
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
