//! Rejection reasons for out-of-range indices.
//!
//! None of the operations in [`ops`](crate::ops) return these errors;
//! they degrade to `None` or a no-op instead. The error is the reason
//! attached to the trace event emitted for a rejected call, and is
//! returned directly by the lower-level checks in [`index`](crate::index).

use std::error::Error;
use std::fmt;

/// Why an index was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexError {
    /// The index was a negative signed integer.
    Negative {
        /// The rejected index.
        index: i128,
    },
    /// The index is not below the sequence length (or, for insertion,
    /// exceeds it).
    OutOfRange {
        /// The rejected index, saturated to `usize::MAX` if it did not
        /// fit.
        index: usize,
        /// Length of the sequence at the time of the call.
        len: usize,
    },
}

impl IndexError {
    /// The rejected index as a signed value.
    pub fn index(&self) -> i128 {
        match *self {
            Self::Negative { index } => index,
            Self::OutOfRange { index, .. } => i128::try_from(index).unwrap_or(i128::MAX),
        }
    }
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negative { index } => write!(f, "negative index {index}"),
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
        }
    }
}

impl Error for IndexError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_negative() {
        let err = IndexError::Negative { index: -3 };
        assert_eq!(err.to_string(), "negative index -3");
    }

    #[test]
    fn display_out_of_range() {
        let err = IndexError::OutOfRange { index: 7, len: 3 };
        assert_eq!(err.to_string(), "index 7 out of range for length 3");
    }

    #[test]
    fn index_of_either_variant() {
        assert_eq!(IndexError::Negative { index: -2 }.index(), -2);
        assert_eq!(IndexError::OutOfRange { index: 9, len: 3 }.index(), 9);
    }

    #[test]
    fn is_std_error() {
        let err: Box<dyn Error> = Box::new(IndexError::Negative { index: -1 });
        assert!(err.source().is_none());
    }
}
