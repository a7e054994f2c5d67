//! Index adapter shared by every operation.
//!
//! Signed and unsigned integers are both accepted as indices. A signed
//! index is only ever rejected for being negative; once it is known to be
//! non-negative it goes through the same `usize` bounds checks as an
//! unsigned one, so the operations have a single implementation.

use crate::error::IndexError;

/// An integer that can address an element of a sequence.
///
/// Implemented for all primitive integer types. Values too large for
/// `usize` saturate to `usize::MAX`, which is out of bounds for every
/// sequence, so saturation never turns an invalid index into a valid one.
pub trait SafeIndex: Copy {
    /// Convert to a non-negative position.
    ///
    /// Returns [`IndexError::Negative`] for negative signed values. No
    /// upper bound is checked here; see [`checked`] and [`checked_insert`].
    fn to_index(self) -> Result<usize, IndexError>;

    /// Convert to an element count, clamping negative values to zero.
    fn to_count(self) -> usize {
        self.to_index().unwrap_or(0)
    }
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {$(
        impl SafeIndex for $t {
            #[inline]
            fn to_index(self) -> Result<usize, IndexError> {
                Ok(usize::try_from(self).unwrap_or(usize::MAX))
            }
        }
    )*};
}

macro_rules! impl_signed {
    ($($t:ty),*) => {$(
        impl SafeIndex for $t {
            #[inline]
            fn to_index(self) -> Result<usize, IndexError> {
                if self < 0 {
                    return Err(IndexError::Negative { index: self as i128 });
                }
                Ok(usize::try_from(self).unwrap_or(usize::MAX))
            }
        }
    )*};
}

impl_unsigned!(u8, u16, u32, u64, u128, usize);
impl_signed!(i8, i16, i32, i64, i128, isize);

/// Check that `index` addresses an existing element: `0 <= index < len`.
pub fn checked<I: SafeIndex>(index: I, len: usize) -> Result<usize, IndexError> {
    let index = index.to_index()?;
    if index < len {
        Ok(index)
    } else {
        Err(IndexError::OutOfRange { index, len })
    }
}

/// Check that `index` is a valid insertion point: `0 <= index <= len`.
///
/// Inserting at exactly `len` appends.
pub fn checked_insert<I: SafeIndex>(index: I, len: usize) -> Result<usize, IndexError> {
    let index = index.to_index()?;
    if index <= len {
        Ok(index)
    } else {
        Err(IndexError::OutOfRange { index, len })
    }
}
