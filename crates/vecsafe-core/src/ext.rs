//! Method-call form of the operations in [`ops`](crate::ops).

use crate::index::SafeIndex;
use crate::ops;

/// Bounds-checked methods on `Vec<T>`.
///
/// Each method delegates to the free function of the same name in
/// [`ops`](crate::ops) and has the same contract.
///
/// ```
/// use vecsafe_core::SafeVec;
///
/// let mut v = vec![10, 20, 30];
/// assert_eq!(v.safe_get(5), None);
/// v.safe_set(1, Some(99));
/// v.safe_insert(55, 1);
/// assert_eq!(v.safe_remove(0), Some(10));
/// assert_eq!(v, [55, 99, 30]);
/// ```
pub trait SafeVec<T> {
    /// See [`ops::get`].
    fn safe_get<I: SafeIndex>(&self, index: I) -> Option<&T>;

    /// See [`ops::set`]. Setting `None` removes the slot.
    fn safe_set<I: SafeIndex>(&mut self, index: I, value: Option<T>);

    /// See [`ops::insert`].
    fn safe_insert<I: SafeIndex>(&mut self, element: T, index: I);

    /// See [`ops::remove`].
    fn safe_remove<I: SafeIndex>(&mut self, index: I) -> Option<T>;

    /// See [`ops::remove_slowly`].
    fn safe_remove_slowly<I: SafeIndex>(&mut self, index: I) -> Option<T>;

    /// See [`ops::drop_last`].
    fn safe_drop_last<K: SafeIndex>(&self, k: K) -> &[T];

    /// See [`ops::drop_first`].
    fn safe_drop_first<K: SafeIndex>(&self, k: K) -> &[T];

    /// See [`ops::drop_first_one`].
    fn safe_drop_first_one(&self) -> &[T];
}

impl<T> SafeVec<T> for Vec<T> {
    #[inline]
    fn safe_get<I: SafeIndex>(&self, index: I) -> Option<&T> {
        ops::get(self, index)
    }

    #[inline]
    fn safe_set<I: SafeIndex>(&mut self, index: I, value: Option<T>) {
        ops::set(self, index, value)
    }

    #[inline]
    fn safe_insert<I: SafeIndex>(&mut self, element: T, index: I) {
        ops::insert(self, element, index)
    }

    #[inline]
    fn safe_remove<I: SafeIndex>(&mut self, index: I) -> Option<T> {
        ops::remove(self, index)
    }

    #[inline]
    fn safe_remove_slowly<I: SafeIndex>(&mut self, index: I) -> Option<T> {
        ops::remove_slowly(self, index)
    }

    #[inline]
    fn safe_drop_last<K: SafeIndex>(&self, k: K) -> &[T] {
        ops::drop_last(self, k)
    }

    #[inline]
    fn safe_drop_first<K: SafeIndex>(&self, k: K) -> &[T] {
        ops::drop_first(self, k)
    }

    #[inline]
    fn safe_drop_first_one(&self) -> &[T] {
        ops::drop_first_one(self)
    }
}
