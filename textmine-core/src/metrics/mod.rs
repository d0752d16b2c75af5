//! String metrics
//!
//! Every metric compares two texts character by character and reports
//! whether larger values mean more similar texts ([`TextMetric::is_gain_metric`])
//! or less similar ones.

mod damerau;
mod dice;
mod hamming;
mod levenshtein;

pub use damerau::{
    DamerauLevenshteinDissimilarity, DamerauLevenshteinDistance, DamerauLevenshteinSimilarity,
    OptimalStringAlignmentDistance,
};
pub use dice::DiceCoefficient;
pub use hamming::{HammingAccuracy, HammingDistance, HammingLoss};
pub use levenshtein::{LevenshteinDissimilarity, LevenshteinDistance, LevenshteinSimilarity};

use crate::Result;
use std::fmt::Debug;
use std::sync::Arc;

/// A measure of how similar or dissimilar two texts are
pub trait TextMetric: Debug + Send + Sync {
    fn evaluate(&self, first: &str, second: &str) -> Result<f64>;

    fn min_value(&self) -> f64;

    fn max_value(&self) -> f64;

    /// Whether greater values indicate greater similarity
    fn is_gain_metric(&self) -> bool;

    fn is_loss_metric(&self) -> bool {
        !self.is_gain_metric()
    }
}

/// Names accepted by [`metric_by_name`]
pub const METRIC_NAMES: &[&str] = &[
    "levenshtein",
    "levenshtein-dissimilarity",
    "levenshtein-similarity",
    "osa",
    "damerau-levenshtein",
    "damerau-levenshtein-dissimilarity",
    "damerau-levenshtein-similarity",
    "hamming",
    "hamming-loss",
    "hamming-accuracy",
    "dice",
];

/// Look up a metric with default settings by name
pub fn metric_by_name(name: &str) -> Option<Arc<dyn TextMetric>> {
    let metric: Arc<dyn TextMetric> = match name.to_ascii_lowercase().as_str() {
        "levenshtein" => Arc::new(LevenshteinDistance),
        "levenshtein-dissimilarity" => Arc::new(LevenshteinDissimilarity),
        "levenshtein-similarity" => Arc::new(LevenshteinSimilarity),
        "osa" => Arc::new(OptimalStringAlignmentDistance),
        "damerau-levenshtein" => Arc::new(DamerauLevenshteinDistance),
        "damerau-levenshtein-dissimilarity" => Arc::new(DamerauLevenshteinDissimilarity),
        "damerau-levenshtein-similarity" => Arc::new(DamerauLevenshteinSimilarity),
        "hamming" => Arc::new(HammingDistance),
        "hamming-loss" => Arc::new(HammingLoss),
        "hamming-accuracy" => Arc::new(HammingAccuracy),
        "dice" => Arc::new(DiceCoefficient::default()),
        _ => return None,
    };
    Some(metric)
}

/// Divide a distance by the longer text's length, treating two empty texts as identical
pub(crate) fn normalize(distance: f64, first: &[char], second: &[char]) -> f64 {
    let length = first.len().max(second.len());
    if length == 0 {
        0.0
    } else {
        distance / length as f64
    }
}
