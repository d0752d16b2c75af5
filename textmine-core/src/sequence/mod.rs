//! Ordered, position-aware token sequences
//!
//! A [`TokenSequence`] is itself a [`Token`]: its text is the delimiter-joined
//! text of its children, so sequences nest. Structural edits go through a
//! [`SequenceCursor`], which fails fast once another cursor has changed the
//! sequence's structure.

mod cursor;

pub use cursor::SequenceCursor;

use crate::error::CursorError;
use crate::token::Token;
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SEQUENCE_ID: AtomicU64 = AtomicU64::new(0);

fn next_sequence_id() -> u64 {
    NEXT_SEQUENCE_ID.fetch_add(1, Ordering::Relaxed)
}

/// An ordered, mutable collection of tokens
#[derive(Debug)]
pub struct TokenSequence<T> {
    tokens: Vec<T>,
    positions: BTreeSet<usize>,
    delimiter: String,
    mod_count: u64,
    id: u64,
}

impl<T> TokenSequence<T> {
    /// Create a sequence from an explicitly ordered list
    pub fn new(tokens: Vec<T>) -> Self {
        Self::with_delimiter(tokens, "")
    }

    /// Create a sequence whose text joins the tokens with `delimiter`
    pub fn with_delimiter(tokens: Vec<T>, delimiter: impl Into<String>) -> Self {
        Self {
            tokens,
            positions: BTreeSet::new(),
            delimiter: delimiter.into(),
            mod_count: 0,
            id: next_sequence_id(),
        }
    }

    /// Create a sequence with its own positions, for nesting it inside another sequence
    pub fn with_positions(
        tokens: Vec<T>,
        delimiter: impl Into<String>,
        positions: impl IntoIterator<Item = usize>,
    ) -> Self {
        let mut sequence = Self::with_delimiter(tokens, delimiter);
        sequence.positions = positions.into_iter().collect();
        sequence
    }

    /// Create a sequence from an unordered token collection, ordered by position
    ///
    /// A token with several positions appears once per position. When two
    /// tokens claim the same position the later one wins.
    pub fn create_sorted(tokens: impl IntoIterator<Item = T>) -> Self
    where
        T: Token + Clone,
    {
        let mut by_position = BTreeMap::new();

        for token in tokens {
            for &position in token.positions() {
                by_position.insert(position, token.clone());
            }
        }

        Self::new(by_position.into_values().collect())
    }

    /// Create a sequence with the same delimiter and positions whose tokens are mapped
    pub fn create_mapped<O>(sequence: TokenSequence<T>, mapper: impl FnMut(T) -> O) -> TokenSequence<O> {
        TokenSequence {
            tokens: sequence.tokens.into_iter().map(mapper).collect(),
            positions: sequence.positions,
            delimiter: sequence.delimiter,
            mod_count: 0,
            id: next_sequence_id(),
        }
    }

    /// Like [`create_mapped`](Self::create_mapped), for mappers that may fail
    pub fn try_create_mapped<O, E>(
        sequence: TokenSequence<T>,
        mapper: impl FnMut(T) -> Result<O, E>,
    ) -> Result<TokenSequence<O>, E> {
        Ok(TokenSequence {
            tokens: sequence
                .tokens
                .into_iter()
                .map(mapper)
                .collect::<Result<Vec<_>, E>>()?,
            positions: sequence.positions,
            delimiter: sequence.delimiter,
            mod_count: 0,
            id: next_sequence_id(),
        })
    }

    /// Create a cursor whose first call to `next` returns the token at `index`
    pub fn cursor(&self, index: usize) -> Result<SequenceCursor, CursorError> {
        SequenceCursor::new(self, index)
    }

    /// Number of tokens in the sequence
    pub fn size(&self) -> usize {
        self.tokens.len()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.tokens.get(index)
    }

    pub fn first(&self) -> Option<&T> {
        self.tokens.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.tokens.iter()
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    pub fn set_delimiter(&mut self, delimiter: impl Into<String>) {
        self.delimiter = delimiter.into();
    }

    /// Number of structural modifications made through cursors so far
    pub fn mod_count(&self) -> u64 {
        self.mod_count
    }

    pub fn into_tokens(self) -> Vec<T> {
        self.tokens
    }

    pub(crate) fn id(&self) -> u64 {
        self.id
    }

    pub(crate) fn tokens_mut(&mut self) -> &mut Vec<T> {
        &mut self.tokens
    }

    /// Record a structural modification, returning the new count
    pub(crate) fn bump_mod_count(&mut self) -> u64 {
        self.mod_count += 1;
        self.mod_count
    }
}

impl<T> Default for TokenSequence<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

// A clone is a distinct sequence; cursors of the original do not apply to it.
impl<T: Clone> Clone for TokenSequence<T> {
    fn clone(&self) -> Self {
        Self {
            tokens: self.tokens.clone(),
            positions: self.positions.clone(),
            delimiter: self.delimiter.clone(),
            mod_count: self.mod_count,
            id: next_sequence_id(),
        }
    }
}

impl<T: PartialEq> PartialEq for TokenSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.tokens == other.tokens
            && self.positions == other.positions
            && self.delimiter == other.delimiter
    }
}

impl<T: Token> Token for TokenSequence<T> {
    fn text(&self) -> Cow<'_, str> {
        let mut text = String::new();

        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                text.push_str(&self.delimiter);
            }
            text.push_str(&token.text());
        }

        Cow::Owned(text)
    }

    fn positions(&self) -> &BTreeSet<usize> {
        &self.positions
    }

    fn add_position(&mut self, position: usize) {
        self.positions.insert(position);
    }

    /// Sum of the children's lengths, delimiters excluded
    fn len(&self) -> usize {
        self.tokens.iter().map(Token::len).sum()
    }

    fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl<T: Token> fmt::Display for TokenSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

impl<'a, T> IntoIterator for &'a TokenSequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl<T> IntoIterator for TokenSequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<T> FromIterator<T> for TokenSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
