use super::TextMetric;
use crate::{Error, Result};

/// Number of positions at which two equally long texts differ
#[derive(Debug, Clone, Copy, Default)]
pub struct HammingDistance;

impl HammingDistance {
    fn distance(first: &str, second: &str) -> Result<(usize, usize)> {
        let a: Vec<char> = first.chars().collect();
        let b: Vec<char> = second.chars().collect();
        if a.len() != b.len() {
            return Err(Error::InvalidArgument(format!(
                "the texts must have the same length, got {} and {}",
                a.len(),
                b.len()
            )));
        }
        let distance = a.iter().zip(&b).filter(|(x, y)| x != y).count();
        Ok((distance, a.len()))
    }
}

impl TextMetric for HammingDistance {
    fn evaluate(&self, first: &str, second: &str) -> Result<f64> {
        Ok(Self::distance(first, second)?.0 as f64)
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

/// Hamming distance divided by the texts' length
#[derive(Debug, Clone, Copy, Default)]
pub struct HammingLoss;

impl TextMetric for HammingLoss {
    fn evaluate(&self, first: &str, second: &str) -> Result<f64> {
        let (distance, length) = HammingDistance::distance(first, second)?;
        Ok(if length == 0 {
            0.0
        } else {
            distance as f64 / length as f64
        })
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

/// One minus the Hamming loss
#[derive(Debug, Clone, Copy, Default)]
pub struct HammingAccuracy;

impl TextMetric for HammingAccuracy {
    fn evaluate(&self, first: &str, second: &str) -> Result<f64> {
        Ok(1.0 - HammingLoss.evaluate(first, second)?)
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
    fn test_hamming_family() {
        assert_eq!(HammingDistance.evaluate("karolin", "kathrin").unwrap(), 3.0);
        assert_eq!(HammingLoss.evaluate("abcd", "abcc").unwrap(), 0.25);
        assert_eq!(HammingAccuracy.evaluate("abcd", "abcc").unwrap(), 0.75);
        assert_eq!(HammingLoss.evaluate("", "").unwrap(), 0.0);
    }

    #[test]
    fn test_unequal_lengths_rejected() {
        assert!(matches!(
            HammingDistance.evaluate("abc", "ab"),
            Err(Error::InvalidArgument(_))
        ));
        assert!(HammingAccuracy.evaluate("a", "").is_err());
    }
}
