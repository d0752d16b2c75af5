use crate::token::AssociationType;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// The arithmetic an [`Operand`] performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Multiply,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => f.write_str("add"),
            Self::Multiply => f.write_str("multiply"),
        }
    }
}

/// A pending combination with a neighbouring number
///
/// The neighbour's value must lie in `range`; e.g. "hundred" only
/// multiplies by 1 to 9.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Operand {
    operation: Operation,
    range: RangeInclusive<i64>,
}

impl Operand {
    pub fn new(operation: Operation, range: RangeInclusive<i64>) -> Self {
        Self { operation, range }
    }

    pub fn summand(range: RangeInclusive<i64>) -> Self {
        Self::new(Operation::Add, range)
    }

    pub fn multiplier(range: RangeInclusive<i64>) -> Self {
        Self::new(Operation::Multiply, range)
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn range(&self) -> &RangeInclusive<i64> {
        &self.range
    }

    /// Combine the owning value `first` with the neighbour's value `second`
    pub fn apply(&self, first: i64, second: i64) -> Result<i64> {
        if !self.range.contains(&second) {
            return Err(Error::malformed(
                second.to_string(),
                format!(
                    "{first} cannot {} {second}, expected a value in {}..={}",
                    self.operation,
                    self.range.start(),
                    self.range.end()
                ),
            ));
        }

        let result = match self.operation {
            Operation::Add => first.checked_add(second),
            Operation::Multiply => first.checked_mul(second),
        };
        result.ok_or_else(|| {
            Error::malformed(
                second.to_string(),
                format!("{first} {} {second} overflows", self.operation),
            )
        })
    }
}

/// The value a token carries during numeral reduction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumericValue {
    /// A number, possibly waiting to combine with its neighbours
    Number {
        value: i64,
        left: Option<Operand>,
        right: Option<Operand>,
    },
    /// A transformation of a neighbouring number that is not a number by itself
    Modifier {
        value: i64,
        left: Option<Operand>,
        right: Option<Operand>,
    },
}

impl NumericValue {
    /// A resolved number without pending operands
    pub fn number(value: i64) -> Self {
        Self::Number {
            value,
            left: None,
            right: None,
        }
    }

    pub fn value(&self) -> i64 {
        match self {
            Self::Number { value, .. } | Self::Modifier { value, .. } => *value,
        }
    }

    pub fn left(&self) -> Option<&Operand> {
        match self {
            Self::Number { left, .. } | Self::Modifier { left, .. } => left.as_ref(),
        }
    }

    pub fn right(&self) -> Option<&Operand> {
        match self {
            Self::Number { right, .. } | Self::Modifier { right, .. } => right.as_ref(),
        }
    }

    pub fn is_modifier(&self) -> bool {
        matches!(self, Self::Modifier { .. })
    }

    /// Whether the value is a number with no pending operand
    pub fn is_resolved(&self) -> bool {
        matches!(
            self,
            Self::Number {
                left: None,
                right: None,
                ..
            }
        )
    }

    /// A copy with the given operand slots, keeping the kind and value
    pub fn with_operands(&self, left: Option<Operand>, right: Option<Operand>) -> Self {
        match self {
            Self::Number { value, .. } => Self::Number {
                value: *value,
                left,
                right,
            },
            Self::Modifier { value, .. } => Self::Modifier {
                value: *value,
                left,
                right,
            },
        }
    }

    /// The association implied by the pending operand slots
    pub fn implied_association(&self) -> Option<AssociationType> {
        match (self.left(), self.right()) {
            (Some(_), Some(_)) => Some(AssociationType::Bidirectional),
            (Some(_), None) => Some(AssociationType::Left),
            (None, Some(_)) => Some(AssociationType::Right),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summand_apply() {
        let operand = Operand::summand(1..=9);
        assert_eq!(operand.apply(20, 1).unwrap(), 21);
        assert!(operand.apply(20, 30).unwrap_err().is_malformed());
    }

    #[test]
    fn test_multiplier_range() {
        let operand = Operand::multiplier(1..=9);
        assert_eq!(operand.apply(100, 3).unwrap(), 300);
        assert!(operand.apply(100, 1000).is_err());
        assert!(operand.apply(100, 0).is_err());
    }

    #[test]
    fn test_overflow_is_malformed() {
        let operand = Operand::multiplier(1..=i64::MAX);
        assert!(operand.apply(i64::MAX, 2).unwrap_err().is_malformed());
    }

    #[test]
    fn test_numeric_value_accessors() {
        let hundred = NumericValue::Number {
            value: 100,
            left: Some(Operand::multiplier(1..=9)),
            right: Some(Operand::summand(1..=99)),
        };
        assert_eq!(hundred.value(), 100);
        assert!(!hundred.is_resolved());
        assert_eq!(
            hundred.implied_association(),
            Some(AssociationType::Bidirectional)
        );

        let stripped = hundred.with_operands(None, None);
        assert!(stripped.is_resolved());
        assert_eq!(stripped, NumericValue::number(100));

        let teen = NumericValue::Modifier {
            value: 10,
            left: Some(Operand::summand(3..=9)),
            right: None,
        };
        assert!(teen.is_modifier());
        assert!(!teen.with_operands(None, None).is_resolved());
        assert_eq!(teen.implied_association(), Some(AssociationType::Left));
    }
}
