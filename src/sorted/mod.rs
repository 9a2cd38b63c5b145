//! Set operations over sorted sequences.
//!
//! This module combines two sequences that are already sorted into a third
//! sorted sequence, without collecting either input:
//!
//! - [`merge`]: every element of both inputs (bag union)
//! - [`union`]: every distinct value of either input
//! - [`intersect`]: distinct values present in both inputs
//! - [`subtract`]: distinct values of the first input absent from the second
//!
//! Each operation has a `_by` form taking a comparator, for inputs sorted by
//! something other than [`Ord`].
//!
//! # Laziness and Release
//!
//! The operations return iterators and do no work until they are consumed.
//! The first input is walked element by element. The second is read through a
//! [`Cursor`](crate::sequence::Cursor) that is opened on the first call to
//! `next` and released when the output is exhausted or dropped, so stopping
//! early (with `take`, `break`, or a `drive` sink returning `false`) frees the
//! second input before control returns.
//!
//! # Preconditions
//!
//! Both inputs must be sorted (non-decreasing) under the comparator in use.
//! This is not checked. Unsorted input gives meaningless output but never
//! panics.
//!
//! # Examples
//!
//! ```rust
//! use lambars_sorted::sorted::{intersect, merge, subtract, union};
//!
//! let first = vec![0, 1, 1];
//! let second = vec![1];
//!
//! assert_eq!(merge(first.clone(), second.clone()).collect::<Vec<_>>(), vec![0, 1, 1, 1]);
//! assert_eq!(union(first.clone(), second.clone()).collect::<Vec<_>>(), vec![0, 1]);
//! assert_eq!(intersect(first.clone(), second.clone()).collect::<Vec<_>>(), vec![1]);
//! assert_eq!(subtract(first, second).collect::<Vec<_>>(), vec![0]);
//! ```

mod dedup;
#[cfg(feature = "ext")]
mod ext;
mod intersect;
mod lookahead;
mod merge;
mod subtract;
mod union;

use std::cmp::Ordering;

#[cfg(feature = "ext")]
pub use ext::SortedSequence;
pub use intersect::Intersect;
pub use merge::Merge;
pub use subtract::Subtract;
pub use union::Union;

use dedup::Dedup;

/// The comparator used by the natural-order operations.
pub type Natural<T> = fn(&T, &T) -> Ordering;

/// Merges two sequences sorted by [`Ord`], keeping every element.
///
/// A value occurring `m` times in `first` and `n` times in `second` occurs
/// `m + n` times in the output. Equal elements from `first` come before those
/// from `second`.
///
/// # Examples
///
/// ```rust
/// use lambars_sorted::sorted::merge;
///
/// let merged: Vec<i32> = merge(vec![1, 4, 4], vec![2, 4, 9]).collect();
/// assert_eq!(merged, vec![1, 2, 4, 4, 4, 9]);
/// ```
pub fn merge<T, A, B>(first: A, second: B) -> Merge<A::IntoIter, B, Natural<T>>
where
    T: Ord,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    merge_by(first, second, T::cmp as Natural<T>)
}

/// Merges two sequences sorted by `compare`, keeping every element.
///
/// # Examples
///
/// ```rust
/// use lambars_sorted::sorted::merge_by;
///
/// let merged: Vec<i32> = merge_by(vec![5, 3], vec![4, 1], |a: &i32, b: &i32| b.cmp(a)).collect();
/// assert_eq!(merged, vec![5, 4, 3, 1]);
/// ```
pub fn merge_by<T, A, B, C>(first: A, second: B, compare: C) -> Merge<A::IntoIter, B, C>
where
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
    C: FnMut(&T, &T) -> Ordering,
{
    Merge::new(first.into_iter(), second, compare)
}

/// Yields every distinct value of two sequences sorted by [`Ord`].
///
/// # Examples
///
/// ```rust
/// use lambars_sorted::sorted::union;
///
/// let united: Vec<i32> = union(vec![1, 3, 3], vec![2, 3]).collect();
/// assert_eq!(united, vec![1, 2, 3]);
/// ```
pub fn union<T, A, B>(first: A, second: B) -> Union<A::IntoIter, B, Natural<T>>
where
    T: Ord + Clone,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    union_by(first, second, T::cmp as Natural<T>)
}

/// Yields every distinct value of two sequences sorted by `compare`.
pub fn union_by<T, A, B, C>(first: A, second: B, compare: C) -> Union<A::IntoIter, B, C>
where
    T: Clone,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
    C: FnMut(&T, &T) -> Ordering,
{
    Union::new(first.into_iter(), second, compare)
}

/// Yields the distinct values present in both sequences sorted by [`Ord`].
///
/// # Examples
///
/// ```rust
/// use lambars_sorted::sorted::intersect;
///
/// let common: Vec<i32> = intersect(vec![1, 2, 2, 5], vec![2, 2, 5, 8]).collect();
/// assert_eq!(common, vec![2, 5]);
/// ```
pub fn intersect<T, A, B>(first: A, second: B) -> Intersect<A::IntoIter, B, Natural<T>>
where
    T: Ord + Clone,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    intersect_by(first, second, T::cmp as Natural<T>)
}

/// Yields the distinct values present in both sequences sorted by `compare`.
pub fn intersect_by<T, A, B, C>(first: A, second: B, compare: C) -> Intersect<A::IntoIter, B, C>
where
    T: Clone,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
    C: FnMut(&T, &T) -> Ordering,
{
    Intersect::new(first.into_iter(), second, compare)
}

/// Yields the distinct values of `first` that do not occur in `second`, both
/// sorted by [`Ord`].
///
/// # Examples
///
/// ```rust
/// use lambars_sorted::sorted::subtract;
///
/// let difference: Vec<i32> = subtract(vec![1, 1, 2, 3, 4], vec![2, 4]).collect();
/// assert_eq!(difference, vec![1, 3]);
/// ```
pub fn subtract<T, A, B>(first: A, second: B) -> Subtract<A::IntoIter, B, Natural<T>>
where
    T: Ord + Clone,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    subtract_by(first, second, T::cmp as Natural<T>)
}

/// Yields the distinct values of `first` that do not occur in `second`, both
/// sorted by `compare`.
pub fn subtract_by<T, A, B, C>(first: A, second: B, compare: C) -> Subtract<A::IntoIter, B, C>
where
    T: Clone,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
    C: FnMut(&T, &T) -> Ordering,
{
    Subtract::new(first.into_iter(), second, compare)
}

/// Wraps a push-style sink so that consecutive values equal under `compare`
/// reach it only once.
///
/// Absorbed values still report "accepted", so a producer driving the
/// returned sink keeps going. Use it with [`Sequence::drive`] on sorted input.
///
/// [`Sequence::drive`]: crate::sequence::Sequence::drive
///
/// # Examples
///
/// ```rust
/// use lambars_sorted::sequence::Sequence;
/// use lambars_sorted::sorted::dedup_sink;
///
/// let mut distinct = Vec::new();
/// vec![1, 1, 2, 2, 2, 3].drive(dedup_sink(
///     |value| {
///         distinct.push(value);
///         true
///     },
///     i32::cmp,
/// ));
/// assert_eq!(distinct, vec![1, 2, 3]);
/// ```
pub fn dedup_sink<T, S, C>(sink: S, compare: C) -> impl FnMut(T) -> bool
where
    T: Clone,
    S: FnMut(T) -> bool,
    C: FnMut(&T, &T) -> Ordering,
{
    Dedup::sink(sink, compare)
}

static_assertions::assert_impl_all!(
    Merge<std::vec::IntoIter<u32>, Vec<u32>, Natural<u32>>: Send, Iterator
);
static_assertions::assert_impl_all!(
    Union<std::vec::IntoIter<u32>, Vec<u32>, Natural<u32>>: Send, Iterator
);
static_assertions::assert_impl_all!(
    Intersect<std::vec::IntoIter<u32>, Vec<u32>, Natural<u32>>: Send, Iterator
);
static_assertions::assert_impl_all!(
    Subtract<std::vec::IntoIter<u32>, Vec<u32>, Natural<u32>>: Send, Iterator
);
