//! Tokens: text fragments annotated with the offsets at which they occur
//!
//! Positions are character offsets into the text a token was taken from. A
//! token carrying several positions stands for several identical occurrences.

mod mutable;
mod ngram;
mod substring;
mod value;

pub use mutable::MutableToken;
pub use ngram::NGram;
pub use substring::Substring;
pub use value::ValueToken;

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeSet;

/// A fragment of text together with the positions it was found at
pub trait Token {
    /// The token's text
    fn text(&self) -> Cow<'_, str>;

    /// The ordered set of offsets at which the token occurs
    fn positions(&self) -> &BTreeSet<usize>;

    /// Record an additional occurrence
    fn add_position(&mut self, position: usize);

    /// Length of the token in characters
    fn len(&self) -> usize {
        self.text().chars().count()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Which neighbour(s) a pending token must combine with during reduction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssociationType {
    /// Combine with the previous token
    Left,
    /// Combine with the next token
    Right,
    /// Combine in whichever direction the value's operands allow
    Bidirectional,
}

impl AssociationType {
    /// Whether a token with this association may combine with its left neighbour
    pub fn allows_left(self) -> bool {
        matches!(self, Self::Left | Self::Bidirectional)
    }

    /// Whether a token with this association may combine with its right neighbour
    pub fn allows_right(self) -> bool {
        matches!(self, Self::Right | Self::Bidirectional)
    }
}

/// Reject empty token text
pub(crate) fn ensure_not_empty(text: &str) -> crate::Result<()> {
    if text.is_empty() {
        return Err(crate::Error::InvalidArgument(
            "token text may not be empty".into(),
        ));
    }
    Ok(())
}
