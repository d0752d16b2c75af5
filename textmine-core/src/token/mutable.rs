use super::Token;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::fmt;

/// A holder whose token may be replaced while earlier versions stay inspectable
///
/// Every replacement is tagged with a caller-supplied revision number; the
/// token that was current before the replacement is stored under it.
#[derive(Debug, Clone, PartialEq)]
pub struct MutableToken<T> {
    current: T,
    revisions: BTreeMap<u32, T>,
}

impl<T> MutableToken<T> {
    pub fn new(token: T) -> Self {
        Self {
            current: token,
            revisions: BTreeMap::new(),
        }
    }

    pub fn get(&self) -> &T {
        &self.current
    }

    /// Replace the current token, storing the superseded one under `revision`
    ///
    /// If a token was already stored under `revision` it is overwritten.
    pub fn set(&mut self, revision: u32, token: T) {
        let previous = std::mem::replace(&mut self.current, token);
        self.revisions.insert(revision, previous);
    }

    /// The token that was current before the replacement tagged `revision`
    pub fn revision(&self, revision: u32) -> Option<&T> {
        self.revisions.get(&revision)
    }

    /// Revision numbers recorded so far, ascending
    pub fn revisions(&self) -> impl Iterator<Item = u32> + '_ {
        self.revisions.keys().copied()
    }

    pub fn into_inner(self) -> T {
        self.current
    }
}

impl<T: Token> Token for MutableToken<T> {
    fn text(&self) -> Cow<'_, str> {
        self.current.text()
    }

    fn positions(&self) -> &BTreeSet<usize> {
        self.current.positions()
    }

    fn add_position(&mut self, position: usize) {
        self.current.add_position(position);
    }

    fn len(&self) -> usize {
        self.current.len()
    }
}

impl<T: fmt::Display> fmt::Display for MutableToken<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.current.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Substring;

    #[test]
    fn test_set_keeps_previous_revision() {
        let mut token = MutableToken::new(Substring::new("one", 0).unwrap());
        token.set(0, Substring::new("two", 0).unwrap());
        token.set(1, Substring::new("three", 0).unwrap());

        assert_eq!(token.get().as_str(), "three");
        assert_eq!(token.revision(0).unwrap().as_str(), "one");
        assert_eq!(token.revision(1).unwrap().as_str(), "two");
        assert!(token.revision(2).is_none());
        assert_eq!(token.revisions().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn test_same_revision_overwrites() {
        let mut token = MutableToken::new(Substring::new("a", 0).unwrap());
        token.set(7, Substring::new("b", 0).unwrap());
        token.set(7, Substring::new("c", 0).unwrap());
        assert_eq!(token.revision(7).unwrap().as_str(), "b");
        assert_eq!(token.text(), "c");
    }
}
