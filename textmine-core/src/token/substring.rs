use super::{ensure_not_empty, Token};
use crate::Result;
use serde::Serialize;
use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fmt;

/// A plain fragment of a larger text
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Substring {
    text: String,
    positions: BTreeSet<usize>,
}

impl Substring {
    /// Create a substring occurring at a single position
    pub fn new(text: impl Into<String>, position: usize) -> Result<Self> {
        Self::with_positions(text, [position])
    }

    /// Create a substring occurring at every given position
    pub fn with_positions(
        text: impl Into<String>,
        positions: impl IntoIterator<Item = usize>,
    ) -> Result<Self> {
        let text = text.into();
        ensure_not_empty(&text)?;
        Ok(Self {
            text,
            positions: positions.into_iter().collect(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl Token for Substring {
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

impl fmt::Display for Substring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_rejected() {
        assert!(Substring::new("", 0).is_err());
    }

    #[test]
    fn test_positions_are_ordered_and_unique() {
        let mut token = Substring::with_positions("foo", [4, 0, 4]).unwrap();
        token.add_position(2);
        assert_eq!(token.positions().iter().copied().collect::<Vec<_>>(), vec![0, 2, 4]);
        assert_eq!(token.to_string(), "foo");
    }
}
