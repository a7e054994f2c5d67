//! Core bounds-checked operations for `Vec<T>`.
//!
//! This is the leaf crate with zero internal dependencies. Every
//! operation here is total: an index or count that would make the
//! standard library panic degrades to an absent result (`None`) or to a
//! silent no-op instead.
//!
//! The operations come in two forms:
//!
//! - Free functions in [`ops`] that take the sequence explicitly.
//! - The [`SafeVec`] extension trait, which exposes the same operations
//!   as `safe_*` methods on `Vec<T>`.
//!
//! Both signed and unsigned integers are accepted as indices through the
//! [`SafeIndex`] adapter. Negative values are rejected before any bounds
//! arithmetic happens.
//!
//! Rejected calls are reported as `tracing` events at `TRACE` level. The
//! crate never installs a subscriber.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod ext;
pub mod index;
pub mod ops;

pub use error::IndexError;
pub use ext::SafeVec;
pub use index::SafeIndex;
pub use ops::DEFAULT_DROP_COUNT;
