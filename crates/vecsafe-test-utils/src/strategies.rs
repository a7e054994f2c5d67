//! Proptest strategies for sequences, indices and drop counts.

use proptest::prelude::*;

/// Upper bound on generated sequence length.
pub const MAX_LEN: usize = 48;

/// Arbitrary `Vec<i32>` of length `0..=MAX_LEN`.
pub fn arb_sequence() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(any::<i32>(), 0..=MAX_LEN)
}

/// Arbitrary non-empty `Vec<i32>`.
pub fn arb_non_empty_sequence() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(any::<i32>(), 1..=MAX_LEN)
}

/// Signed index biased toward the interesting region around
/// `0..MAX_LEN`, with occasional extreme values.
pub fn arb_signed_index() -> impl Strategy<Value = i64> {
    prop_oneof![
        8 => -4i64..(MAX_LEN as i64 + 4),
        1 => Just(i64::MIN),
        1 => Just(i64::MAX),
    ]
}

/// Unsigned index covering in-range, just-past-end and extreme values.
pub fn arb_unsigned_index() -> impl Strategy<Value = usize> {
    prop_oneof![
        8 => 0usize..(MAX_LEN + 4),
        1 => Just(usize::MAX),
    ]
}

/// A sequence paired with an index that is valid for it.
pub fn arb_sequence_with_valid_index() -> impl Strategy<Value = (Vec<i32>, usize)> {
    arb_non_empty_sequence().prop_flat_map(|s| {
        let len = s.len();
        (Just(s), 0..len)
    })
}
