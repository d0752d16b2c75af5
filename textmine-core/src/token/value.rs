use super::{ensure_not_empty, AssociationType, Token};
use crate::Result;
use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fmt;

/// A token that may carry a value assigned to its text
///
/// Tokenizers produce value tokens without a value; a translation stage
/// later looks the text up in a dictionary and attaches the entry's value
/// and association.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueToken<V> {
    text: String,
    value: Option<V>,
    association: Option<AssociationType>,
    positions: BTreeSet<usize>,
}

impl<V> ValueToken<V> {
    /// Create a token holding raw text only
    pub fn raw(text: impl Into<String>, positions: BTreeSet<usize>) -> Result<Self> {
        let text = text.into();
        ensure_not_empty(&text)?;
        Ok(Self {
            text,
            value: None,
            association: None,
            positions,
        })
    }

    /// Create a token holding a value
    pub fn with_value(
        text: impl Into<String>,
        value: V,
        association: Option<AssociationType>,
        positions: BTreeSet<usize>,
    ) -> Result<Self> {
        let mut token = Self::raw(text, positions)?;
        token.value = Some(value);
        token.association = association;
        Ok(token)
    }

    /// Build a token from another token's text and positions
    pub fn from_token<T: Token>(token: &T) -> Result<Self> {
        Self::raw(token.text().into_owned(), token.positions().clone())
    }

    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    pub fn association(&self) -> Option<AssociationType> {
        self.association
    }

    /// Whether a value has been assigned
    pub fn is_resolved(&self) -> bool {
        self.value.is_some()
    }

    /// A copy of this token carrying the given value and association
    pub fn resolve(&self, value: V, association: Option<AssociationType>) -> Self {
        Self {
            text: self.text.clone(),
            value: Some(value),
            association,
            positions: self.positions.clone(),
        }
    }
}

impl<V> Token for ValueToken<V> {
    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.text)
    }

    fn positions(&self) -> &BTreeSet<usize> {
        &self.positions
    }

    fn add_position(&mut self, position: usize) {
        self.positions.insert(position);
    }
}

impl<V> fmt::Display for ValueToken<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
