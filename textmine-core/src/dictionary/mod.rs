//! Dictionaries mapping key fragments to values
//!
//! Keys are unique; adding an entry under an existing key replaces it in
//! place, so iteration follows the order in which keys were first added.

mod matcher;
mod matches;

pub use matcher::{Matcher, PatternCache};
pub use matches::{Match, Matches};

use crate::token::AssociationType;
use crate::Result;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use tracing::trace;

/// A dictionary entry
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<K, V> {
    key: K,
    value: V,
    association: Option<AssociationType>,
}

impl<K, V> Entry<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            association: None,
        }
    }

    /// An entry whose value must combine with the neighbour(s) named by `association`
    pub fn with_association(key: K, value: V, association: AssociationType) -> Self {
        Self {
            key,
            value,
            association: Some(association),
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn association(&self) -> Option<AssociationType> {
        self.association
    }
}

/// A mapping from unique keys to entries
#[derive(Debug, Clone)]
pub struct Dictionary<K, V> {
    entries: Vec<Entry<K, V>>,
    index: HashMap<K, usize>,
}

impl<K, V> Default for Dictionary<K, V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone, V> Dictionary<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, returning the entry it replaced, if any
    pub fn add_entry(&mut self, entry: Entry<K, V>) -> Option<Entry<K, V>> {
        match self.index.get(&entry.key) {
            Some(&i) => Some(std::mem::replace(&mut self.entries[i], entry)),
            None => {
                self.index.insert(entry.key.clone(), self.entries.len());
                self.entries.push(entry);
                None
            }
        }
    }

    /// Exact lookup by key
    pub fn lookup<Q>(&self, key: &Q) -> Option<&Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).map(|&i| &self.entries[i])
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry<K, V>> {
        self.entries.iter()
    }
}

impl<K: Eq + Hash + Clone + AsRef<str>, V> Dictionary<K, V> {
    /// Evaluate `matcher` against every key, collecting the entries that match `value`
    pub fn lookup_matching(&self, value: &str, matcher: &Matcher) -> Result<Matches<'_, K, V>> {
        let mut matches = Vec::new();

        for entry in &self.entries {
            if let Some(score) = matcher.score(value, entry.key.as_ref())? {
                trace!("{value:?} matches key {:?} with score {score}", entry.key.as_ref());
                matches.push(Match::new(entry, value, score));
            }
        }

        Ok(Matches::new(matches, matcher.is_gain_metric()))
    }
}

impl<K: Eq + Hash + Clone, V> FromIterator<Entry<K, V>> for Dictionary<K, V> {
    fn from_iter<I: IntoIterator<Item = Entry<K, V>>>(iter: I) -> Self {
        let mut dictionary = Self::new();
        dictionary.extend(iter);
        dictionary
    }
}

impl<K: Eq + Hash + Clone, V> Extend<Entry<K, V>> for Dictionary<K, V> {
    fn extend<I: IntoIterator<Item = Entry<K, V>>>(&mut self, iter: I) {
        for entry in iter {
            self.add_entry(entry);
        }
    }
}

impl<'a, K, V> IntoIterator for &'a Dictionary<K, V> {
    type Item = &'a Entry<K, V>;
    type IntoIter = std::slice::Iter<'a, Entry<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
