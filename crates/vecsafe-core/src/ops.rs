//! Bounds-checked operations on a `Vec<T>` or slice.
//!
//! Every function here is total. An invalid index produces `None` where a
//! value was requested and leaves the sequence untouched where a mutation
//! was requested. Callers detect a rejected call by inspecting the return
//! value; there is no error channel.
//!
//! | Outcome | Meaning |
//! |---------|---------|
//! | `Some(_)` / mutation applied | the index was valid |
//! | `None` | the index was invalid, nothing to return |
//! | no-op | the index was invalid, sequence unchanged |

use crate::error::IndexError;
use crate::index::{self, SafeIndex};

/// Number of elements [`drop_first_one`] removes from the front.
pub const DEFAULT_DROP_COUNT: usize = 1;

fn rejected(op: &'static str, len: usize, err: IndexError) {
    tracing::trace!(op, index = err.index(), len, error = %err, "index rejected");
}

/// Element at `index`, or `None` if `index` is negative or `>= seq.len()`.
pub fn get<T, I: SafeIndex>(seq: &[T], index: I) -> Option<&T> {
    match index::checked(index, seq.len()) {
        Ok(i) => seq.get(i),
        Err(err) => {
            rejected("get", seq.len(), err);
            None
        }
    }
}

/// Assign-or-clear the slot at `index`.
///
/// - `Some(value)` with an in-bounds index overwrites the element in place.
/// - `Some(value)` with an out-of-bounds or negative index is ignored; it
///   never appends.
/// - `None` removes the slot entirely, exactly like [`remove`]: every
///   later element shifts down by one. Setting "nothing" does not leave a
///   hole.
pub fn set<T, I: SafeIndex>(seq: &mut Vec<T>, index: I, value: Option<T>) {
    match (index::checked(index, seq.len()), value) {
        (Ok(i), Some(value)) => seq[i] = value,
        (Ok(i), None) => {
            seq.remove(i);
        }
        (Err(err), _) => rejected("set", seq.len(), err),
    }
}

/// Insert `element` so that it ends up at `index`.
///
/// Valid for `0 <= index <= seq.len()`; inserting at `seq.len()` appends.
/// Elements previously at `index..` shift up by one. Any other index
/// leaves the sequence unchanged.
pub fn insert<T, I: SafeIndex>(seq: &mut Vec<T>, element: T, index: I) {
    match index::checked_insert(index, seq.len()) {
        Ok(i) => seq.insert(i, element),
        Err(err) => rejected("insert", seq.len(), err),
    }
}

/// Remove and return the element at `index`, shifting later elements down.
///
/// Returns `None` and leaves the sequence unchanged if `index` is
/// negative or `>= seq.len()`. Cost is proportional to the number of
/// elements after `index`.
pub fn remove<T, I: SafeIndex>(seq: &mut Vec<T>, index: I) -> Option<T> {
    match index::checked(index, seq.len()) {
        Ok(i) => Some(seq.remove(i)),
        Err(err) => {
            rejected("remove", seq.len(), err);
            None
        }
    }
}

/// Same contract as [`remove`], implemented by rebuilding the sequence.
///
/// The sequence is drained and every element except the one at `index`
/// is collected into a new vector in the original order. The element
/// filtered out is the one returned, so the result always agrees with
/// [`remove`].
pub fn remove_slowly<T, I: SafeIndex>(seq: &mut Vec<T>, index: I) -> Option<T> {
    let target = match index::checked(index, seq.len()) {
        Ok(i) => i,
        Err(err) => {
            rejected("remove_slowly", seq.len(), err);
            return None;
        }
    };

    let mut removed = None;
    let rebuilt: Vec<T> = std::mem::take(seq)
        .into_iter()
        .enumerate()
        .filter_map(|(offset, element)| {
            if offset == target {
                removed = Some(element);
                None
            } else {
                Some(element)
            }
        })
        .collect();
    *seq = rebuilt;
    removed
}

/// View of `seq` without its last `k` elements.
///
/// Negative `k` drops nothing. `k >= seq.len()` yields an empty view.
///
/// The view borrows `seq`; the sequence cannot be structurally mutated
/// while the view is alive, and a view must be re-taken after any such
/// mutation.
pub fn drop_last<T, K: SafeIndex>(seq: &[T], k: K) -> &[T] {
    let keep = seq.len().saturating_sub(k.to_count());
    &seq[..keep]
}

/// View of `seq` without its first `k` elements.
///
/// Negative `k` drops nothing. `k >= seq.len()` yields an empty view.
/// The same borrowing rules as [`drop_last`] apply.
pub fn drop_first<T, K: SafeIndex>(seq: &[T], k: K) -> &[T] {
    let skip = k.to_count().min(seq.len());
    &seq[skip..]
}

/// [`drop_first`] with `k = DEFAULT_DROP_COUNT`.
pub fn drop_first_one<T>(seq: &[T]) -> &[T] {
    drop_first(seq, DEFAULT_DROP_COUNT)
}
