use super::TokenSequence;
use crate::error::CursorError;

type CursorResult<T> = Result<T, CursorError>;

/// A bidirectional, mutation-capable position within a [`TokenSequence`]
///
/// The cursor holds indices only; the sequence is passed to every call. On
/// creation it captures the sequence's modification count, and every
/// structural edit it performs updates both. A cursor whose captured count no
/// longer matches, because another cursor edited the sequence, fails with
/// [`CursorError::ConcurrentModification`] on its next operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceCursor {
    sequence_id: u64,
    expected_mod_count: u64,
    next_index: usize,
    last_index: Option<usize>,
}

impl SequenceCursor {
    pub(super) fn new<T>(sequence: &TokenSequence<T>, index: usize) -> CursorResult<Self> {
        if index > sequence.size() {
            return Err(CursorError::IndexOutOfBounds {
                index,
                size: sequence.size(),
            });
        }

        Ok(Self {
            sequence_id: sequence.id(),
            expected_mod_count: sequence.mod_count(),
            next_index: index,
            last_index: None,
        })
    }

    fn check<T>(&self, sequence: &TokenSequence<T>) -> CursorResult<()> {
        if sequence.id() != self.sequence_id {
            return Err(CursorError::ForeignSequence);
        }
        if sequence.mod_count() != self.expected_mod_count {
            return Err(CursorError::ConcurrentModification {
                expected: self.expected_mod_count,
                actual: sequence.mod_count(),
            });
        }
        Ok(())
    }

    fn last_visited(&self) -> CursorResult<usize> {
        self.last_index
            .ok_or(CursorError::IllegalState("next() or previous() not called"))
    }

    fn modified<T>(&mut self, sequence: &mut TokenSequence<T>) {
        self.expected_mod_count = sequence.bump_mod_count();
    }

    pub fn has_next<T>(&self, sequence: &TokenSequence<T>) -> CursorResult<bool> {
        self.check(sequence)?;
        Ok(self.next_index < sequence.size())
    }

    pub fn has_previous<T>(&self, sequence: &TokenSequence<T>) -> CursorResult<bool> {
        self.check(sequence)?;
        Ok(self.next_index > 0)
    }

    /// Index of the token a call to `next` would return, if any
    pub fn next_index<T>(&self, sequence: &TokenSequence<T>) -> CursorResult<Option<usize>> {
        Ok(self.has_next(sequence)?.then_some(self.next_index))
    }

    /// Index of the token a call to `previous` would return, if any
    pub fn previous_index<T>(&self, sequence: &TokenSequence<T>) -> CursorResult<Option<usize>> {
        Ok(self.has_previous(sequence)?.then(|| self.next_index - 1))
    }

    /// Index of the token returned by the last `next` or `previous` call
    pub fn last_index(&self) -> Option<usize> {
        self.last_index
    }

    pub fn next<'a, T>(&mut self, sequence: &'a TokenSequence<T>) -> CursorResult<&'a T> {
        if !self.has_next(sequence)? {
            return Err(CursorError::NoSuchElement);
        }
        let index = self.next_index;
        self.last_index = Some(index);
        self.next_index += 1;
        sequence.get(index).ok_or(CursorError::NoSuchElement)
    }

    pub fn previous<'a, T>(&mut self, sequence: &'a TokenSequence<T>) -> CursorResult<&'a T> {
        if !self.has_previous(sequence)? {
            return Err(CursorError::NoSuchElement);
        }
        self.next_index -= 1;
        self.last_index = Some(self.next_index);
        sequence
            .get(self.next_index)
            .ok_or(CursorError::NoSuchElement)
    }

    /// The token returned by the last `next` or `previous` call
    pub fn current<'a, T>(&self, sequence: &'a TokenSequence<T>) -> CursorResult<&'a T> {
        self.check(sequence)?;
        let index = self.last_visited()?;
        sequence.get(index).ok_or(CursorError::NoSuchElement)
    }

    /// Mutable access to the last visited token
    ///
    /// Editing a token's content is not a structural modification, so other
    /// cursors stay valid.
    pub fn current_mut<'a, T>(&self, sequence: &'a mut TokenSequence<T>) -> CursorResult<&'a mut T> {
        self.check(sequence)?;
        let index = self.last_visited()?;
        sequence
            .tokens_mut()
            .get_mut(index)
            .ok_or(CursorError::NoSuchElement)
    }

    /// Insert a token before the last visited one
    ///
    /// The last visited token shifts one slot towards the end; the index of
    /// the token returned by the next `next` call is unchanged.
    pub fn add<T>(&mut self, sequence: &mut TokenSequence<T>, token: T) -> CursorResult<()> {
        self.check(sequence)?;
        let last = self.last_visited()?;
        sequence.tokens_mut().insert(last, token);
        self.last_index = Some(last + 1);
        self.modified(sequence);
        Ok(())
    }

    /// Remove the last visited token and return it
    pub fn remove<T>(&mut self, sequence: &mut TokenSequence<T>) -> CursorResult<T> {
        self.check(sequence)?;
        let last = self.last_visited()?;
        let removed = sequence.tokens_mut().remove(last);
        if last < self.next_index {
            self.next_index -= 1;
        }
        self.last_index = None;
        self.modified(sequence);
        Ok(removed)
    }

    /// Replace the last visited token, returning the replaced one
    pub fn set<T>(&mut self, sequence: &mut TokenSequence<T>, token: T) -> CursorResult<T> {
        self.check(sequence)?;
        let last = self.last_visited()?;
        let replaced = std::mem::replace(&mut sequence.tokens_mut()[last], token);
        self.modified(sequence);
        Ok(replaced)
    }

    /// Combine the last visited token with the token at `other_index`
    ///
    /// `merge_fn` receives the last visited token first and the other token
    /// second. Its result takes the slot closer to the start of the sequence
    /// and the other slot is removed. Afterwards the merged token is the last
    /// visited one.
    pub fn merge<T, F>(
        &mut self,
        sequence: &mut TokenSequence<T>,
        other_index: usize,
        merge_fn: F,
    ) -> CursorResult<()>
    where
        F: FnOnce(T, T) -> T,
    {
        self.check(sequence)?;
        let last = self.last_visited()?;
        let size = sequence.size();

        if other_index >= size {
            return Err(CursorError::IndexOutOfBounds {
                index: other_index,
                size,
            });
        }
        if other_index == last {
            return Err(CursorError::IllegalArgument(format!(
                "cannot merge token {last} with itself"
            )));
        }

        let low = last.min(other_index);
        let high = last.max(other_index);
        let tokens = sequence.tokens_mut();
        let high_token = tokens.remove(high);
        let low_token = tokens.remove(low);
        let (retained, other) = if last == low {
            (low_token, high_token)
        } else {
            (high_token, low_token)
        };
        tokens.insert(low, merge_fn(retained, other));

        // the merged token took a slot in front of the cursor
        if other_index < self.next_index {
            self.next_index -= 1;
        }
        self.last_index = Some(low);
        self.modified(sequence);
        Ok(())
    }

    /// Divide the last visited token in two
    ///
    /// The first token returned by `divide_fn` replaces the visited one, the
    /// second is inserted right after it.
    pub fn split<T, F>(&mut self, sequence: &mut TokenSequence<T>, divide_fn: F) -> CursorResult<()>
    where
        F: FnOnce(&T) -> (T, T),
    {
        self.check(sequence)?;
        let last = self.last_visited()?;
        let tokens = sequence.tokens_mut();
        let (kept, new) = divide_fn(&tokens[last]);
        tokens[last] = kept;
        tokens.insert(last + 1, new);
        self.modified(sequence);
        Ok(())
    }

    /// Advance until `predicate` holds, taking at most `max_steps` steps
    ///
    /// On a hit the cursor steps back once so that the next call to `next`
    /// returns the matching token. Otherwise the cursor stays where the scan
    /// stopped.
    pub fn find_next<T, P>(
        &mut self,
        sequence: &TokenSequence<T>,
        mut predicate: P,
        max_steps: Option<usize>,
    ) -> CursorResult<bool>
    where
        P: FnMut(&T) -> bool,
    {
        let mut steps = 0;

        while max_steps.map_or(true, |max| steps < max) && self.has_next(sequence)? {
            steps += 1;
            if predicate(self.next(sequence)?) {
                self.previous(sequence)?;
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Mirror image of [`find_next`](Self::find_next)
    ///
    /// On a hit the next call to `previous` returns the matching token.
    pub fn find_previous<T, P>(
        &mut self,
        sequence: &TokenSequence<T>,
        mut predicate: P,
        max_steps: Option<usize>,
    ) -> CursorResult<bool>
    where
        P: FnMut(&T) -> bool,
    {
        let mut steps = 0;

        while max_steps.map_or(true, |max| steps < max) && self.has_previous(sequence)? {
            steps += 1;
            if predicate(self.previous(sequence)?) {
                self.next(sequence)?;
                return Ok(true);
            }
        }

        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{Substring, Token};

    fn sequence(texts: &[&str]) -> TokenSequence<Substring> {
        TokenSequence::new(
            texts
                .iter()
                .enumerate()
                .map(|(i, t)| Substring::new(*t, i).unwrap())
                .collect(),
        )
    }

    fn texts(sequence: &TokenSequence<Substring>) -> Vec<&str> {
        sequence.iter().map(Substring::as_str).collect()
    }

    fn concat(first: Substring, second: Substring) -> Substring {
        Substring::new(format!("{}{}", first.as_str(), second.as_str()), 0).unwrap()
    }

    #[test]
    fn test_cursor_index_bounds() {
        let seq = sequence(&["a", "b"]);
        assert!(seq.cursor(2).is_ok());
        assert_eq!(
            seq.cursor(3).unwrap_err(),
            CursorError::IndexOutOfBounds { index: 3, size: 2 }
        );
    }

    #[test]
    fn test_bidirectional_traversal() {
        let seq = sequence(&["foo", "bar", "baz"]);
        let mut cursor = seq.cursor(0).unwrap();

        assert_eq!(cursor.previous_index(&seq).unwrap(), None);
        assert_eq!(cursor.next(&seq).unwrap().as_str(), "foo");
        assert_eq!(cursor.next(&seq).unwrap().as_str(), "bar");
        assert_eq!(cursor.next(&seq).unwrap().as_str(), "baz");
        assert_eq!(cursor.next_index(&seq).unwrap(), None);
        assert_eq!(cursor.next(&seq).unwrap_err(), CursorError::NoSuchElement);

        assert_eq!(cursor.previous(&seq).unwrap().as_str(), "baz");
        assert_eq!(cursor.previous_index(&seq).unwrap(), Some(1));
        assert_eq!(cursor.last_index(), Some(2));
    }

    #[test]
    fn test_mutation_requires_prior_step() {
        let mut seq = sequence(&["a", "b"]);
        let mut cursor = seq.cursor(0).unwrap();
        let token = Substring::new("x", 0).unwrap();

        assert!(matches!(
            cursor.set(&mut seq, token.clone()),
            Err(CursorError::IllegalState(_))
        ));
        assert!(matches!(
            cursor.add(&mut seq, token),
            Err(CursorError::IllegalState(_))
        ));
        assert!(matches!(
            cursor.remove(&mut seq),
            Err(CursorError::IllegalState(_))
        ));
        assert!(matches!(
            cursor.merge(&mut seq, 1, concat),
            Err(CursorError::IllegalState(_))
        ));
    }

    #[test]
    fn test_add_keeps_next_index() {
        let mut seq = sequence(&["foo", "bar", "baz"]);
        let mut cursor = seq.cursor(0).unwrap();
        cursor.next(&seq).unwrap();
        assert_eq!(cursor.next(&seq).unwrap().as_str(), "bar");

        cursor
            .add(&mut seq, Substring::new("added", 1).unwrap())
            .unwrap();

        assert_eq!(texts(&seq), vec!["foo", "added", "bar", "baz"]);
        assert_eq!(cursor.next_index(&seq).unwrap(), Some(2));
        assert_eq!(cursor.next(&seq).unwrap().as_str(), "bar");
    }

    #[test]
    fn test_remove_clears_last_visited() {
        let mut seq = sequence(&["foo", "bar", "baz"]);
        let mut cursor = seq.cursor(0).unwrap();
        cursor.next(&seq).unwrap();
        cursor.next(&seq).unwrap();

        let removed = cursor.remove(&mut seq).unwrap();
        assert_eq!(removed.as_str(), "bar");
        assert_eq!(texts(&seq), vec!["foo", "baz"]);
        assert_eq!(cursor.next_index(&seq).unwrap(), Some(1));
        assert!(matches!(
            cursor.remove(&mut seq),
            Err(CursorError::IllegalState(_))
        ));
        assert_eq!(cursor.next(&seq).unwrap().as_str(), "baz");
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut seq = sequence(&["foo", "bar"]);
        let mut cursor = seq.cursor(1).unwrap();
        cursor.next(&seq).unwrap();
        let old = cursor.set(&mut seq, Substring::new("qux", 1).unwrap()).unwrap();
        assert_eq!(old.as_str(), "bar");
        assert_eq!(texts(&seq), vec!["foo", "qux"]);
        assert_eq!(cursor.current(&seq).unwrap().as_str(), "qux");
    }

    #[test]
    fn test_merge_with_following_token() {
        let mut seq = sequence(&["a", "b", "c", "d"]);
        let mut cursor = seq.cursor(1).unwrap();
        cursor.next(&seq).unwrap();

        cursor.merge(&mut seq, 2, concat).unwrap();

        assert_eq!(texts(&seq), vec!["a", "bc", "d"]);
        assert_eq!(cursor.last_index(), Some(1));
        assert_eq!(cursor.next(&seq).unwrap().as_str(), "d");
    }

    #[test]
    fn test_merge_with_preceding_token() {
        let mut seq = sequence(&["a", "b", "c", "d"]);
        let mut cursor = seq.cursor(2).unwrap();
        cursor.next(&seq).unwrap();

        // retained token comes first in the merge function
        cursor.merge(&mut seq, 1, concat).unwrap();

        assert_eq!(texts(&seq), vec!["a", "cb", "d"]);
        assert_eq!(cursor.last_index(), Some(1));
        assert_eq!(cursor.next_index(&seq).unwrap(), Some(2));
        assert_eq!(cursor.next(&seq).unwrap().as_str(), "d");
    }

    #[test]
    fn test_merge_with_preceding_token_after_previous() {
        let mut seq = sequence(&["a", "b", "c", "d"]);
        let mut cursor = seq.cursor(3).unwrap();
        assert_eq!(cursor.previous(&seq).unwrap().as_str(), "c");

        cursor.merge(&mut seq, 1, concat).unwrap();

        assert_eq!(texts(&seq), vec!["a", "cb", "d"]);
        assert_eq!(cursor.last_index(), Some(1));
        assert_eq!(cursor.next_index(&seq).unwrap(), Some(1));
        assert_eq!(cursor.next(&seq).unwrap().as_str(), "cb");
        assert_eq!(cursor.next(&seq).unwrap().as_str(), "d");
    }

    #[test]
    fn test_merge_with_following_token_after_previous() {
        let mut seq = sequence(&["a", "b", "c", "d"]);
        let mut cursor = seq.cursor(2).unwrap();
        assert_eq!(cursor.previous(&seq).unwrap().as_str(), "b");

        cursor.merge(&mut seq, 2, concat).unwrap();

        assert_eq!(texts(&seq), vec!["a", "bc", "d"]);
        assert_eq!(cursor.next_index(&seq).unwrap(), Some(1));
        assert_eq!(cursor.previous(&seq).unwrap().as_str(), "a");
    }

    #[test]
    fn test_merge_rejects_invalid_index() {
        let mut seq = sequence(&["a", "b"]);
        let mut cursor = seq.cursor(0).unwrap();
        cursor.next(&seq).unwrap();

        assert!(matches!(
            cursor.merge(&mut seq, 0, concat),
            Err(CursorError::IllegalArgument(_))
        ));
        assert_eq!(
            cursor.merge(&mut seq, 5, concat).unwrap_err(),
            CursorError::IndexOutOfBounds { index: 5, size: 2 }
        );
    }

    #[test]
    fn test_split_inserts_after_current() {
        let mut seq = sequence(&["foobar", "baz"]);
        let mut cursor = seq.cursor(0).unwrap();
        cursor.next(&seq).unwrap();

        cursor
            .split(&mut seq, |token| {
                let (head, tail) = token.as_str().split_at(3);
                (
                    Substring::new(head, 0).unwrap(),
                    Substring::new(tail, 3).unwrap(),
                )
            })
            .unwrap();

        assert_eq!(texts(&seq), vec!["foo", "bar", "baz"]);
        assert_eq!(cursor.next(&seq).unwrap().as_str(), "bar");
    }

    #[test]
    fn test_find_next_rewinds_on_hit() {
        let seq = sequence(&["foo", "bar", "baz"]);
        let mut cursor = seq.cursor(0).unwrap();

        assert!(cursor.find_next(&seq, |t| t.as_str() == "baz", None).unwrap());
        assert_eq!(cursor.next_index(&seq).unwrap(), Some(2));
        assert_eq!(cursor.next(&seq).unwrap().as_str(), "baz");
    }

    #[test]
    fn test_find_next_respects_max_steps() {
        let seq = sequence(&["foo", "bar", "baz"]);
        let mut cursor = seq.cursor(0).unwrap();

        assert!(!cursor.find_next(&seq, |t| t.as_str() == "baz", Some(1)).unwrap());
        assert_eq!(cursor.next_index(&seq).unwrap(), Some(1));

        assert!(!cursor.find_next(&seq, |t| t.as_str() == "qux", None).unwrap());
        assert_eq!(cursor.next_index(&seq).unwrap(), None);
    }

    #[test]
    fn test_find_previous_rewinds_on_hit() {
        let seq = sequence(&["foo", "bar", "baz"]);
        let mut cursor = seq.cursor(3).unwrap();

        assert!(cursor.find_previous(&seq, |t| t.as_str() == "foo", None).unwrap());
        assert_eq!(cursor.previous_index(&seq).unwrap(), Some(0));
        assert_eq!(cursor.previous(&seq).unwrap().as_str(), "foo");
    }

    #[test]
    fn test_structural_change_invalidates_other_cursors() {
        let mut seq = sequence(&["foo", "bar"]);
        let mut writer = seq.cursor(0).unwrap();
        let reader = seq.cursor(0).unwrap();

        writer.next(&seq).unwrap();
        writer.set(&mut seq, Substring::new("qux", 0).unwrap()).unwrap();

        assert_eq!(
            reader.has_next(&seq).unwrap_err(),
            CursorError::ConcurrentModification {
                expected: 0,
                actual: 1
            }
        );
        assert!(writer.has_next(&seq).unwrap());
    }

    #[test]
    fn test_content_edit_keeps_other_cursors_valid() {
        let mut seq = sequence(&["foo", "bar"]);
        let mut writer = seq.cursor(0).unwrap();
        let reader = seq.cursor(0).unwrap();

        writer.next(&seq).unwrap();
        writer.current_mut(&mut seq).unwrap().add_position(9);

        assert!(reader.has_next(&seq).unwrap());
        assert!(seq.first().unwrap().positions().contains(&9));
    }

    #[test]
    fn test_cursor_rejects_foreign_sequence() {
        let seq = sequence(&["foo"]);
        let other = sequence(&["foo"]);
        let cursor = seq.cursor(0).unwrap();
        assert_eq!(
            cursor.has_next(&other).unwrap_err(),
            CursorError::ForeignSequence
        );
    }
}
