//! Benchmark profiles for vecsafe.
//!
//! Provides sequence builders sized for the criterion benches:
//!
//! - [`SMALL`], [`LARGE`]: standard sequence lengths.
//! - [`filled_sequence`]: a deterministic `Vec<u64>` of a given length.
//! - [`sample_indices`]: a fixed mix of valid and invalid indices.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Length of the small benchmark sequence.
pub const SMALL: usize = 64;

/// Length of the large benchmark sequence.
pub const LARGE: usize = 10_000;

/// Build a sequence of `len` distinct values.
pub fn filled_sequence(len: usize) -> Vec<u64> {
    (0..len as u64)
        .map(|i| i.wrapping_mul(0x9E37_79B9_7F4A_7C15))
        .collect()
}

/// Signed indices for a sequence of length `len`: front, middle, back,
/// one past the end, and negative.
pub fn sample_indices(len: usize) -> [i64; 5] {
    let len = i64::try_from(len).unwrap_or(i64::MAX);
    [0, len / 2, len - 1, len, -1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use vecsafe_core::SafeVec;

    #[test]
    fn filled_sequence_has_requested_len() {
        assert_eq!(filled_sequence(SMALL).len(), SMALL);
        assert!(filled_sequence(0).is_empty());
    }

    #[test]
    fn samples_cover_valid_and_invalid() {
        let s = filled_sequence(SMALL);
        let hits = sample_indices(SMALL)
            .iter()
            .filter(|&&i| s.safe_get(i).is_some())
            .count();
        assert_eq!(hits, 3);
    }

    #[test]
    fn sample_indices_saturate_for_huge_len() {
        assert_eq!(sample_indices(usize::MAX)[3], i64::MAX);
    }
}
