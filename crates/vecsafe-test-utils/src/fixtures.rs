//! Fixed sequences shared by scenario tests and benchmarks.

/// The three-element sequence `[10, 20, 30]` the walkthrough scenario
/// starts from.
pub fn scenario_sequence() -> Vec<i32> {
    vec![10, 20, 30]
}

/// An empty sequence of `i32`.
pub fn empty_sequence() -> Vec<i32> {
    Vec::new()
}

/// `0..len` as a sequence, so every element equals its original index.
///
/// Handy for checking shifts: after a removal at `i`, element `j >= i`
/// should hold `j + 1`.
pub fn indexed_sequence(len: usize) -> Vec<usize> {
    (0..len).collect()
}
