use super::{ensure_not_empty, Token};
use crate::{Error, Result};
use serde::Serialize;
use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fmt;

/// A fragment produced by n-gram tokenization, tagged with its degree
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NGram {
    n: usize,
    text: String,
    positions: BTreeSet<usize>,
}

impl NGram {
    pub fn new(n: usize, text: impl Into<String>, position: usize) -> Result<Self> {
        if n == 0 {
            return Err(Error::InvalidArgument(
                "the degree of an n-gram must be at least 1".into(),
            ));
        }
        let text = text.into();
        ensure_not_empty(&text)?;
        Ok(Self {
            n,
            text,
            positions: BTreeSet::from([position]),
        })
    }

    /// The degree of the n-gram
    pub fn n(&self) -> usize {
        self.n
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Token for NGram {
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

impl fmt::Display for NGram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
