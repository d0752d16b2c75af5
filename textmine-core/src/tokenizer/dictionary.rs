use super::{SubstringTokenizer, TokenCollector, Tokenizer};
use crate::dictionary::Dictionary;
use crate::metrics::TextMetric;
use crate::token::{Substring, Token};
use crate::{Error, Result};
use std::hash::Hash;
use std::sync::Arc;

/// Splits text around occurrences of dictionary keys
///
/// At each step the key occurrence closest to the current offset becomes a
/// token of its own, and the text before it another one. With a metric,
/// occurrences are the substrings best matching a key within the threshold
/// instead of exact occurrences.
#[derive(Debug, Clone)]
pub struct DictionaryTokenizer {
    keys: Vec<Vec<char>>,
    metric: Option<(Arc<dyn TextMetric>, f64)>,
}

#[derive(Debug)]
struct KeyMatch {
    start: usize,
    end: usize,
    score: f64,
}

impl DictionaryTokenizer {
    /// Tokenize around exact occurrences of the dictionary's keys
    pub fn new<K, V>(dictionary: &Dictionary<K, V>) -> Self
    where
        K: Eq + Hash + Clone + AsRef<str>,
    {
        Self {
            keys: dictionary
                .iter()
                .map(|entry| entry.key().as_ref().chars().collect::<Vec<_>>())
                .filter(|key| !key.is_empty())
                .collect(),
            metric: None,
        }
    }

    /// Tokenize around substrings whose metric value against a key satisfies `threshold`
    pub fn with_metric<K, V>(
        dictionary: &Dictionary<K, V>,
        metric: Arc<dyn TextMetric>,
        threshold: f64,
    ) -> Result<Self>
    where
        K: Eq + Hash + Clone + AsRef<str>,
    {
        if !(metric.min_value()..=metric.max_value()).contains(&threshold) {
            return Err(Error::InvalidArgument(format!(
                "threshold {threshold} outside [{}, {}]",
                metric.min_value(),
                metric.max_value()
            )));
        }
        let mut tokenizer = Self::new(dictionary);
        tokenizer.metric = Some((metric, threshold));
        Ok(tokenizer)
    }

    fn find_exact(key: &[char], text: &[char], from: usize) -> Option<KeyMatch> {
        if key.len() > text.len() {
            return None;
        }
        (from..=text.len() - key.len())
            .find(|&i| text[i..i + key.len()] == *key)
            .map(|start| KeyMatch {
                start,
                end: start + key.len(),
                score: 1.0,
            })
    }

    fn find_inexact(
        key: &str,
        text: &[char],
        from: usize,
        metric: &dyn TextMetric,
        threshold: f64,
    ) -> Result<Option<KeyMatch>> {
        let rest: String = text[from..].iter().collect();
        let mut best: Option<KeyMatch> = None;

        for candidate in SubstringTokenizer::default().tokenize(&rest)? {
            let score = metric.evaluate(key, candidate.as_str())?;
            let acceptable = if metric.is_gain_metric() {
                score >= threshold
            } else {
                score <= threshold
            };
            let better = best.as_ref().map_or(true, |b| {
                if metric.is_gain_metric() {
                    score > b.score
                } else {
                    score < b.score
                }
            });
            if acceptable && better {
                let start = from + candidate.positions().first().copied().unwrap_or(0);
                best = Some(KeyMatch {
                    start,
                    end: start + candidate.len(),
                    score,
                });
            }
        }

        Ok(best)
    }

    fn find(&self, key: &[char], text: &[char], from: usize) -> Result<Option<KeyMatch>> {
        match &self.metric {
            Some((metric, threshold)) => {
                let key_text: String = key.iter().collect();
                let inexact =
                    Self::find_inexact(&key_text, text, from, metric.as_ref(), *threshold)?;
                Ok(inexact.or_else(|| Self::find_exact(key, text, from)))
            }
            None => Ok(Self::find_exact(key, text, from)),
        }
    }
}

impl Tokenizer for DictionaryTokenizer {
    type Token = Substring;

    fn tokenize(&self, text: &str) -> Result<Vec<Substring>> {
        let chars: Vec<char> = text.chars().collect();
        let mut collector = TokenCollector::new();
        let mut current = 0;

        while current < chars.len() {
            let mut closest: Option<KeyMatch> = None;
            for key in &self.keys {
                if let Some(found) = self.find(key, &chars, current)? {
                    if closest.as_ref().map_or(true, |c| found.start < c.start) {
                        closest = Some(found);
                    }
                }
            }

            match closest {
                Some(found) => {
                    if found.start > current {
                        let before = chars[current..found.start].iter().collect();
                        collector.add(before, current, Substring::new)?;
                    }
                    let matched = chars[found.start..found.end].iter().collect();
                    collector.add(matched, found.start, Substring::new)?;
                    current = found.end;
                }
                None => {
                    let rest = chars[current..].iter().collect();
                    collector.add(rest, current, Substring::new)?;
                    current = chars.len();
                }
            }
        }

        Ok(collector.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_util::fragments;
    use super::*;
    use crate::dictionary::Entry;
    use crate::metrics::LevenshteinDistance;

    fn dictionary() -> Dictionary<String, ()> {
        ["twenty", "one"]
            .into_iter()
            .map(|k| Entry::new(k.to_string(), ()))
            .collect()
    }

    #[test]
    fn test_exact_occurrences() {
        let tokenizer = DictionaryTokenizer::new(&dictionary());
        let tokens = tokenizer.tokenize("twentyoneandone").unwrap();
        assert_eq!(
            fragments(&tokens),
            vec![
                ("and".to_string(), vec![9]),
                ("one".to_string(), vec![6, 12]),
                ("twenty".to_string(), vec![0]),
            ]
        );
    }

    #[test]
    fn test_text_without_keys() {
        let tokenizer = DictionaryTokenizer::new(&dictionary());
        let tokens = tokenizer.tokenize("xyz").unwrap();
        assert_eq!(fragments(&tokens), vec![("xyz".to_string(), vec![0])]);
    }

    #[test]
    fn test_inexact_occurrences() {
        let tokenizer =
            DictionaryTokenizer::with_metric(&dictionary(), Arc::new(LevenshteinDistance), 0.0)
                .unwrap();
        let tokens = tokenizer.tokenize("xoney").unwrap();
        assert_eq!(
            fragments(&tokens),
            vec![
                ("one".to_string(), vec![1]),
                ("x".to_string(), vec![0]),
                ("y".to_string(), vec![4]),
            ]
        );
    }
}
