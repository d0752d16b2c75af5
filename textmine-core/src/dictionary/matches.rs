use super::Entry;

/// A dictionary entry matched by a candidate text
#[derive(Debug, Clone, PartialEq)]
pub struct Match<'a, K, V> {
    entry: &'a Entry<K, V>,
    candidate: String,
    score: f64,
}

impl<'a, K, V> Match<'a, K, V> {
    pub fn new(entry: &'a Entry<K, V>, candidate: impl Into<String>, score: f64) -> Self {
        Self {
            entry,
            candidate: candidate.into(),
            score,
        }
    }

    pub fn entry(&self) -> &'a Entry<K, V> {
        self.entry
    }

    pub fn candidate(&self) -> &str {
        &self.candidate
    }

    /// The matcher's heuristic score
    pub fn score(&self) -> f64 {
        self.score
    }
}

/// All matches of one lookup
#[derive(Debug, Clone)]
pub struct Matches<'a, K, V> {
    matches: Vec<Match<'a, K, V>>,
    gain: bool,
}

impl<'a, K, V> Matches<'a, K, V> {
    pub fn new(matches: Vec<Match<'a, K, V>>, gain: bool) -> Self {
        Self { matches, gain }
    }

    /// Whether greater scores are better
    pub fn is_gain_metric(&self) -> bool {
        self.gain
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Match<'a, K, V>> {
        self.matches.iter()
    }

    /// The match with the best score, keeping the first seen on ties
    pub fn best_match(&self) -> Option<&Match<'a, K, V>> {
        self.best_match_by(|_, _| false)
    }

    /// The match with the best score
    ///
    /// When two matches score equally, `prefer_second(current, challenger)`
    /// decides whether the challenger replaces the current best.
    pub fn best_match_by<F>(&self, mut prefer_second: F) -> Option<&Match<'a, K, V>>
    where
        F: FnMut(&Match<'a, K, V>, &Match<'a, K, V>) -> bool,
    {
        let mut iter = self.matches.iter();
        let mut best = iter.next()?;

        for challenger in iter {
            let better = if challenger.score == best.score {
                prefer_second(best, challenger)
            } else if self.gain {
                challenger.score > best.score
            } else {
                challenger.score < best.score
            };
            if better {
                best = challenger;
            }
        }

        Some(best)
    }
}

impl<'m, 'a, K, V> IntoIterator for &'m Matches<'a, K, V> {
    type Item = &'m Match<'a, K, V>;
    type IntoIter = std::slice::Iter<'m, Match<'a, K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}
