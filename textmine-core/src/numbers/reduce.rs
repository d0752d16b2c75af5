//! Fixed-point reduction of numeral tokens into a single number
//!
//! Each token holds a [`NumericValue`] whose operand slots say how it
//! combines with its neighbours. Reduction first masks the slots by the
//! token's association and drops slots facing an end of the sequence, then
//! repeatedly merges one adjacent pair until no pair can merge:
//!
//! - a token with a pending right operand consumes its right neighbour if
//!   that neighbour has no pending left operand, and vice versa;
//! - when two pending operands face each other, a modifier wins over a
//!   number, otherwise the right token's left operand wins and the left
//!   token's right operand is discarded;
//! - modifiers are never consumed.
//!
//! Among all mergeable pairs the one whose consuming token has the smallest
//! absolute value goes first, a left operand before a right operand, then
//! the leftmost pair. The merged number keeps the left slot of the left
//! token and the right slot of the right token.

use super::value::{NumericValue, Operand};
use crate::processing::stages::ValueSequence;
use crate::processing::Processor;
use crate::token::{AssociationType, Token, ValueToken};
use crate::{Error, Result};
use std::collections::BTreeSet;
use tracing::trace;

/// Revision under which a token's translated state is kept when its slots are masked
pub const REVISION_NORMALIZE: u32 = 1;

/// Revision under which a token's state is kept when it consumes a neighbour
pub const REVISION_REDUCE: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Side {
    Left,
    Right,
}

/// A pair of adjacent tokens that can merge
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Candidate {
    owner_value: u64,
    side: Side,
    left_index: usize,
}

impl Candidate {
    fn owner(&self) -> usize {
        match self.side {
            Side::Left => self.left_index + 1,
            Side::Right => self.left_index,
        }
    }

    fn consumed(&self) -> usize {
        match self.side {
            Side::Left => self.left_index,
            Side::Right => self.left_index + 1,
        }
    }
}

/// Reduces a translated numeral sequence until no operand can be satisfied
#[derive(Debug, Clone, Copy, Default)]
pub struct Reducer;

impl Reducer {
    pub fn new() -> Self {
        Self
    }

    /// Run the reduction loop
    ///
    /// Fails with malformed text if a token holds no value, if a modifier
    /// has no neighbour to act on, if an operand rejects its neighbour, or if
    /// no fixed point is reached within `3n + 1` merges.
    pub fn reduce(
        &self,
        mut sequence: ValueSequence<NumericValue>,
    ) -> Result<ValueSequence<NumericValue>> {
        Self::normalize(&mut sequence)?;

        let max_iterations = 3 * sequence.size() + 1;
        for _ in 0..max_iterations {
            let Some(candidate) = Self::next_candidate(&sequence)? else {
                return Ok(sequence);
            };
            Self::merge(&mut sequence, candidate)?;
        }

        Err(Error::malformed(
            sequence.text().into_owned(),
            "reduction did not reach a fixed point",
        ))
    }

    /// The single resolved number a fully reduced sequence holds
    pub fn extract(&self, sequence: &ValueSequence<NumericValue>) -> Result<i64> {
        let malformed = |reason: &str| Error::malformed(sequence.text().into_owned(), reason);

        match sequence.size() {
            0 => return Err(malformed("no numeral found")),
            1 => {}
            n => {
                return Err(malformed(&format!(
                    "{n} numbers remain that cannot be combined"
                )))
            }
        }

        let token = sequence
            .first()
            .ok_or_else(|| malformed("no numeral found"))?;
        match token.get().value() {
            Some(value) if value.is_resolved() => Ok(value.value()),
            Some(value) if value.is_modifier() => Err(malformed("modifier without a number")),
            Some(_) => Err(malformed("operand left pending")),
            None => Err(malformed("untranslated word")),
        }
    }

    fn value_at(sequence: &ValueSequence<NumericValue>, index: usize) -> Result<&NumericValue> {
        sequence
            .get(index)
            .and_then(|token| token.get().value())
            .ok_or_else(|| Error::malformed(sequence.text().into_owned(), "untranslated word"))
    }

    /// Mask slots by association and drop slots facing an end of the sequence
    fn normalize(sequence: &mut ValueSequence<NumericValue>) -> Result<()> {
        let size = sequence.size();
        let mut cursor = sequence.cursor(0)?;

        while cursor.has_next(sequence)? {
            cursor.next(sequence)?;
            let index = cursor.last_index().unwrap_or_default();
            let token = cursor.current_mut(sequence)?;
            let current = token.get();
            let value = current.value().ok_or_else(|| {
                Error::malformed(current.text().into_owned(), "untranslated word")
            })?;

            let association = current
                .association()
                .unwrap_or(AssociationType::Bidirectional);
            let mut left = value.left().filter(|_| association.allows_left()).cloned();
            let mut right = value.right().filter(|_| association.allows_right()).cloned();

            if value.is_modifier() {
                if (left.is_some() && index == 0) || (right.is_some() && index + 1 == size) {
                    return Err(Error::malformed(
                        current.text().into_owned(),
                        "modifier without a number to act on",
                    ));
                }
                if left.is_none() && right.is_none() {
                    return Err(Error::malformed(
                        current.text().into_owned(),
                        "modifier without an operand",
                    ));
                }
            } else {
                if index == 0 {
                    left = None;
                }
                if index + 1 == size {
                    right = None;
                }
            }

            if left.as_ref() != value.left() || right.as_ref() != value.right() {
                let masked = value.with_operands(left, right);
                let association = masked.implied_association();
                let normalized = current.resolve(masked, association);
                token.set(REVISION_NORMALIZE, normalized);
            }
        }

        Ok(())
    }

    fn next_candidate(sequence: &ValueSequence<NumericValue>) -> Result<Option<Candidate>> {
        let mut best: Option<Candidate> = None;

        for left_index in 0..sequence.size().saturating_sub(1) {
            let a = Self::value_at(sequence, left_index)?;
            let b = Self::value_at(sequence, left_index + 1)?;

            let side = match (a.right(), b.left()) {
                (Some(_), None) if !b.is_modifier() => Side::Right,
                (None, Some(_)) if !a.is_modifier() => Side::Left,
                (Some(_), Some(_)) => match (a.is_modifier(), b.is_modifier()) {
                    (true, false) => Side::Right,
                    (false, _) => Side::Left,
                    (true, true) => continue,
                },
                _ => continue,
            };

            let owner = if side == Side::Left { b } else { a };
            let candidate = Candidate {
                owner_value: owner.value().unsigned_abs(),
                side,
                left_index,
            };
            if best.map_or(true, |current| candidate < current) {
                best = Some(candidate);
            }
        }

        Ok(best)
    }

    fn merge(sequence: &mut ValueSequence<NumericValue>, candidate: Candidate) -> Result<()> {
        let left = sequence
            .get(candidate.left_index)
            .ok_or_else(|| Error::malformed(sequence.text().into_owned(), "missing token"))?;
        let right = sequence
            .get(candidate.left_index + 1)
            .ok_or_else(|| Error::malformed(sequence.text().into_owned(), "missing token"))?;
        let left_value = Self::value_at(sequence, candidate.left_index)?;
        let right_value = Self::value_at(sequence, candidate.left_index + 1)?;

        let (owner, consumed, operand): (&NumericValue, &NumericValue, Option<&Operand>) =
            match candidate.side {
                Side::Left => (right_value, left_value, right_value.left()),
                Side::Right => (left_value, right_value, left_value.right()),
            };
        let operand = operand.ok_or_else(|| {
            Error::malformed(sequence.text().into_owned(), "operand vanished during reduction")
        })?;
        let combined = operand.apply(owner.value(), consumed.value())?;

        let merged_value = NumericValue::Number {
            value: combined,
            left: left_value.left().cloned(),
            right: right_value.right().cloned(),
        };
        let text = format!("{} {}", left.text(), right.text());
        let positions: BTreeSet<usize> = left
            .positions()
            .union(right.positions())
            .copied()
            .collect();
        let association = merged_value.implied_association();
        trace!(
            "merged {:?} and {:?} into {combined}",
            left.text(),
            right.text()
        );
        let merged = ValueToken::with_value(text, merged_value, association, positions)?;

        let mut cursor = sequence.cursor(candidate.owner())?;
        cursor.next(sequence)?;
        cursor.merge(sequence, candidate.consumed(), |mut retained, _| {
            retained.set(REVISION_REDUCE, merged);
            retained
        })?;

        Ok(())
    }
}

impl Processor<ValueSequence<NumericValue>, ValueSequence<NumericValue>> for Reducer {
    fn process(&self, input: ValueSequence<NumericValue>) -> Result<ValueSequence<NumericValue>> {
        self.reduce(input)
    }
}

/// Final stage turning a reduced sequence into its number
#[derive(Debug, Clone, Copy, Default)]
pub struct Extractor;

impl Processor<ValueSequence<NumericValue>, i64> for Extractor {
    fn process(&self, input: ValueSequence<NumericValue>) -> Result<i64> {
        Reducer.extract(&input)
    }
}
