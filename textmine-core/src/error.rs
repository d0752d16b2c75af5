//! Error types for the toolkit

use thiserror::Error;

/// Error type for toolkit operations
#[derive(Debug, Error)]
pub enum Error {
    /// The text could not be turned into a value by one of the pipeline stages
    #[error("Malformed text \"{text}\": {reason}")]
    MalformedText {
        /// The text that was handed to the parser
        text: String,
        /// Which stage rejected the text, and why
        reason: String,
    },

    /// No parser is registered for the requested locale
    #[error("Unsupported locale: {locale}")]
    UnsupportedLocale {
        /// The requested locale
        locale: String,
    },

    /// A constructor or operation received an argument outside its domain
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A vocabulary or parser configuration is invalid
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A sequence cursor was misused
    #[error("Cursor error: {0}")]
    Cursor(#[from] CursorError),
}

impl Error {
    /// Create a malformed text error
    pub fn malformed(text: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedText {
            text: text.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error signals malformed input text
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedText { .. })
    }

    /// Replace the text carried by a malformed text error, leaving other kinds untouched
    pub(crate) fn with_text(self, original: &str) -> Self {
        match self {
            Self::MalformedText { reason, .. } => Self::MalformedText {
                text: original.to_string(),
                reason,
            },
            other => other,
        }
    }
}

/// Misuse of a [`SequenceCursor`](crate::sequence::SequenceCursor)
///
/// These indicate a programming error in the caller rather than malformed data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CursorError {
    /// An index lies outside the sequence
    #[error("Index {index} out of bounds for sequence of size {size}")]
    IndexOutOfBounds { index: usize, size: usize },

    /// The cursor has no further element in the requested direction
    #[error("No such element")]
    NoSuchElement,

    /// The operation requires a state the cursor is not in
    #[error("Illegal state: {0}")]
    IllegalState(&'static str),

    /// The operation received an argument it cannot handle
    #[error("Illegal argument: {0}")]
    IllegalArgument(String),

    /// The sequence was structurally modified by another cursor
    #[error("Concurrent modification: expected modification count {expected}, found {actual}")]
    ConcurrentModification { expected: u64, actual: u64 },

    /// The cursor was created for a different sequence
    #[error("Cursor used with a sequence it was not created for")]
    ForeignSequence,
}

/// Result type for toolkit operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_display() {
        let error = Error::malformed("teen", "no value to the left");
        assert_eq!(
            error.to_string(),
            "Malformed text \"teen\": no value to the left"
        );
        assert!(error.is_malformed());
    }

    #[test]
    fn test_with_text_rewrites_only_malformed() {
        let error = Error::malformed("twenty", "out of range").with_text("twenty thirty");
        match error {
            Error::MalformedText { text, reason } => {
                assert_eq!(text, "twenty thirty");
                assert_eq!(reason, "out of range");
            }
            _ => panic!("Expected MalformedText error"),
        }

        let error = Error::UnsupportedLocale {
            locale: "xx".into(),
        }
        .with_text("ignored");
        assert!(matches!(error, Error::UnsupportedLocale { locale } if locale == "xx"));
    }

    #[test]
    fn test_cursor_error_conversion() {
        let error: Error = CursorError::NoSuchElement.into();
        assert!(matches!(error, Error::Cursor(CursorError::NoSuchElement)));
        assert!(!error.is_malformed());
    }
}
