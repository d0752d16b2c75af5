use crate::metrics::TextMetric;
use crate::{Error, Result};
use regex::Regex;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// A test deciding whether a candidate text matches a dictionary key
///
/// Textual matchers score every match 1.0. A metric matcher scores a match
/// with the metric's value.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// The candidate equals the key
    Equals { ignore_case: bool },
    /// The candidate starts with the key
    StartsWith { ignore_case: bool },
    /// The candidate ends with the key
    EndsWith { ignore_case: bool },
    /// The candidate contains the key
    Contains { ignore_case: bool },
    /// The key is a regular expression the whole candidate must match
    Pattern(PatternCache),
    /// The metric's value for candidate and key is at least (gain metrics)
    /// or at most (loss metrics) the threshold
    Metric {
        metric: Arc<dyn TextMetric>,
        threshold: f64,
    },
}

impl Matcher {
    pub fn equals(ignore_case: bool) -> Self {
        Self::Equals { ignore_case }
    }

    pub fn starts_with(ignore_case: bool) -> Self {
        Self::StartsWith { ignore_case }
    }

    pub fn ends_with(ignore_case: bool) -> Self {
        Self::EndsWith { ignore_case }
    }

    pub fn contains(ignore_case: bool) -> Self {
        Self::Contains { ignore_case }
    }

    pub fn pattern() -> Self {
        Self::Pattern(PatternCache::default())
    }

    /// A metric matcher; the threshold must lie within the metric's range
    pub fn metric(metric: Arc<dyn TextMetric>, threshold: f64) -> Result<Self> {
        if !(metric.min_value()..=metric.max_value()).contains(&threshold) {
            return Err(Error::InvalidArgument(format!(
                "threshold {threshold} outside [{}, {}]",
                metric.min_value(),
                metric.max_value()
            )));
        }
        Ok(Self::Metric { metric, threshold })
    }

    /// Score of the match between `candidate` and `key`, or `None` if they do not match
    pub fn score(&self, candidate: &str, key: &str) -> Result<Option<f64>> {
        let matched = match self {
            Self::Equals { ignore_case } => compare(candidate, key, *ignore_case, |c, k| c == k),
            Self::StartsWith { ignore_case } => {
                compare(candidate, key, *ignore_case, |c, k| c.starts_with(k))
            }
            Self::EndsWith { ignore_case } => {
                compare(candidate, key, *ignore_case, |c, k| c.ends_with(k))
            }
            Self::Contains { ignore_case } => {
                compare(candidate, key, *ignore_case, |c, k| c.contains(k))
            }
            Self::Pattern(cache) => cache.get(key)?.is_match(candidate),
            Self::Metric { metric, threshold } => {
                let value = metric.evaluate(candidate, key)?;
                let matched = if metric.is_gain_metric() {
                    value >= *threshold
                } else {
                    value <= *threshold
                };
                return Ok(matched.then_some(value));
            }
        };

        Ok(matched.then_some(1.0))
    }

    pub fn matches(&self, candidate: &str, key: &str) -> Result<bool> {
        Ok(self.score(candidate, key)?.is_some())
    }

    /// Whether a greater score means a better match
    pub fn is_gain_metric(&self) -> bool {
        match self {
            Self::Metric { metric, .. } => metric.is_gain_metric(),
            _ => true,
        }
    }
}

/// Key patterns compiled once and shared between clones of a matcher
#[derive(Debug, Clone, Default)]
pub struct PatternCache {
    compiled: Arc<RwLock<HashMap<String, Regex>>>,
}

impl PatternCache {
    fn get(&self, key: &str) -> Result<Regex> {
        if let Some(pattern) = self
            .compiled
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
        {
            return Ok(pattern.clone());
        }

        let pattern = Regex::new(&format!("^(?:{key})$"))
            .map_err(|e| Error::InvalidArgument(format!("invalid key pattern {key:?}: {e}")))?;
        self.compiled
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), pattern.clone());
        Ok(pattern)
    }

    /// Number of distinct keys compiled so far
    pub fn len(&self) -> usize {
        self.compiled
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn compare(candidate: &str, key: &str, ignore_case: bool, test: impl Fn(&str, &str) -> bool) -> bool {
    if ignore_case {
        test(&candidate.to_lowercase(), &key.to_lowercase())
    } else {
        test(candidate, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{LevenshteinDissimilarity, LevenshteinDistance, LevenshteinSimilarity};

    #[test]
    fn test_textual_matchers() {
        assert_eq!(Matcher::equals(false).score("foo", "foo").unwrap(), Some(1.0));
        assert!(!Matcher::equals(false).matches("Foo", "foo").unwrap());
        assert!(Matcher::equals(true).matches("Foo", "foo").unwrap());
        assert!(Matcher::starts_with(false).matches("foobar", "foo").unwrap());
        assert!(!Matcher::starts_with(false).matches("foo", "foobar").unwrap());
        assert!(Matcher::ends_with(true).matches("fooBAR", "bar").unwrap());
        assert!(Matcher::contains(false).matches("xfoox", "foo").unwrap());
        assert!(!Matcher::contains(false).matches("xfox", "foo").unwrap());
    }

    #[test]
    fn test_pattern_matcher_requires_full_match() {
        let matcher = Matcher::pattern();
        assert!(matcher.matches("2024", r"\d+").unwrap());
        assert!(!matcher.matches("2024a", r"\d+").unwrap());
        assert!(matcher.score("x", "(").is_err());
    }

    #[test]
    fn test_pattern_matcher_compiles_each_key_once() {
        let matcher = Matcher::pattern();
        let Matcher::Pattern(cache) = &matcher else {
            panic!("expected a pattern matcher");
        };

        for candidate in ["1", "22", "x", "333"] {
            matcher.matches(candidate, r"\d+").unwrap();
            matcher.matches(candidate, "[a-z]").unwrap();
        }
        assert_eq!(cache.len(), 2);

        // clones share the compiled patterns
        let clone = matcher.clone();
        assert!(clone.matches("42", r"\d+").unwrap());
        assert_eq!(cache.len(), 2);

        // invalid keys are not cached
        assert!(matcher.score("x", "(").is_err());
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_metric_matcher_respects_direction() {
        let loss = Matcher::metric(Arc::new(LevenshteinDistance), 1.0).unwrap();
        assert_eq!(loss.score("twenty", "twenty").unwrap(), Some(0.0));
        assert_eq!(loss.score("twnety", "twenty").unwrap(), None);
        assert_eq!(loss.score("twenti", "twenty").unwrap(), Some(1.0));
        assert!(!loss.is_gain_metric());

        let gain = Matcher::metric(Arc::new(LevenshteinSimilarity), 0.8).unwrap();
        assert!(gain.matches("hundret", "hundred").unwrap());
        assert!(!gain.matches("hunter", "hundred").unwrap());
        assert!(gain.is_gain_metric());
    }

    #[test]
    fn test_metric_threshold_bounds() {
        assert!(Matcher::metric(Arc::new(LevenshteinDissimilarity), 1.5).is_err());
        assert!(Matcher::metric(Arc::new(LevenshteinDissimilarity), -0.1).is_err());
        assert!(Matcher::metric(Arc::new(LevenshteinDissimilarity), 1.0).is_ok());
    }
}
