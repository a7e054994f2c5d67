//! vecsafe: bounds-checked operations for `Vec<T>`.
//!
//! Indexing, insertion and removal on a `Vec` panic when the index is out
//! of range. The operations in this crate never do: an invalid index
//! yields `None` where a value was asked for, and leaves the vector
//! untouched where a mutation was asked for.
//!
//! This is the facade crate that re-exports the public API from
//! `vecsafe-core`.
//!
//! # Quick start
//!
//! ```rust
//! use vecsafe::prelude::*;
//!
//! let mut s = vec![10, 20, 30];
//!
//! assert_eq!(s.safe_get(5), None);
//!
//! s.safe_set(1, Some(99));
//! assert_eq!(s, [10, 99, 30]);
//!
//! // Writing past the end is ignored rather than appended.
//! s.safe_set(9, Some(7));
//! assert_eq!(s, [10, 99, 30]);
//!
//! s.safe_insert(55, 1);
//! assert_eq!(s, [10, 55, 99, 30]);
//!
//! assert_eq!(s.safe_remove(0), Some(10));
//! assert_eq!(s, [55, 99, 30]);
//!
//! assert_eq!(s.safe_drop_last(1), [55, 99]);
//! assert_eq!(s.safe_drop_first_one(), [99, 30]);
//! ```
//!
//! # Setting `None` removes
//!
//! [`SafeVec::safe_set`] with `None` removes the slot, shifting every later
//! element down by one, instead of leaving a hole:
//!
//! ```rust
//! use vecsafe::prelude::*;
//!
//! let mut s = vec!['a', 'b', 'c'];
//! s.safe_set(0, None);
//! assert_eq!(s, ['b', 'c']);
//! ```
//!
//! # Views
//!
//! The drop operations return a borrowed slice of the original vector.
//! The borrow checker rejects any mutation of the vector while the view is
//! alive; take a fresh view after mutating.
//!
//! # Modules
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`ops`] | Free-function form of every operation |
//! | [`index`] | The [`SafeIndex`] adapter and raw bounds checks |
//! | [`error`] | [`IndexError`], the reason attached to rejected calls |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub use vecsafe_core::{error, index, ops};
pub use vecsafe_core::{IndexError, SafeIndex, SafeVec, DEFAULT_DROP_COUNT};

/// Common imports for typical vecsafe usage.
///
/// ```rust
/// use vecsafe::prelude::*;
/// ```
pub mod prelude {
    pub use vecsafe_core::{SafeIndex, SafeVec};
}
