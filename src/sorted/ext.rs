//! Method syntax for the sorted set operations.

use std::cmp::Ordering;

use super::{Intersect, Merge, Natural, Subtract, Union};

/// Extension methods that combine a sorted sequence with another one.
///
/// Implemented for every [`IntoIterator`]. Each method forwards to the free
/// function of the same operation in [`crate::sorted`], with `self` as the
/// first input.
///
/// # Examples
///
/// ```rust
/// use lambars_sorted::sorted::SortedSequence;
///
/// let evens = (0..10).step_by(2);
/// let threes = (0..10).step_by(3);
///
/// let both: Vec<i32> = evens.intersect_sorted(threes).collect();
/// assert_eq!(both, vec![0, 6]);
/// ```
pub trait SortedSequence: IntoIterator + Sized {
    /// See [`merge`](super::merge).
    fn merge_sorted<B>(self, other: B) -> Merge<Self::IntoIter, B, Natural<Self::Item>>
    where
        Self::Item: Ord,
        B: IntoIterator<Item = Self::Item>,
    {
        super::merge(self, other)
    }

    /// See [`merge_by`](super::merge_by).
    fn merge_sorted_by<B, C>(self, other: B, compare: C) -> Merge<Self::IntoIter, B, C>
    where
        B: IntoIterator<Item = Self::Item>,
        C: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        super::merge_by(self, other, compare)
    }

    /// See [`union`](super::union).
    fn union_sorted<B>(self, other: B) -> Union<Self::IntoIter, B, Natural<Self::Item>>
    where
        Self::Item: Ord + Clone,
        B: IntoIterator<Item = Self::Item>,
    {
        super::union(self, other)
    }

    /// See [`union_by`](super::union_by).
    fn union_sorted_by<B, C>(self, other: B, compare: C) -> Union<Self::IntoIter, B, C>
    where
        Self::Item: Clone,
        B: IntoIterator<Item = Self::Item>,
        C: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        super::union_by(self, other, compare)
    }

    /// See [`intersect`](super::intersect).
    fn intersect_sorted<B>(self, other: B) -> Intersect<Self::IntoIter, B, Natural<Self::Item>>
    where
        Self::Item: Ord + Clone,
        B: IntoIterator<Item = Self::Item>,
    {
        super::intersect(self, other)
    }

    /// See [`intersect_by`](super::intersect_by).
    fn intersect_sorted_by<B, C>(self, other: B, compare: C) -> Intersect<Self::IntoIter, B, C>
    where
        Self::Item: Clone,
        B: IntoIterator<Item = Self::Item>,
        C: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        super::intersect_by(self, other, compare)
    }

    /// See [`subtract`](super::subtract).
    fn subtract_sorted<B>(self, other: B) -> Subtract<Self::IntoIter, B, Natural<Self::Item>>
    where
        Self::Item: Ord + Clone,
        B: IntoIterator<Item = Self::Item>,
    {
        super::subtract(self, other)
    }

    /// See [`subtract_by`](super::subtract_by).
    fn subtract_sorted_by<B, C>(self, other: B, compare: C) -> Subtract<Self::IntoIter, B, C>
    where
        Self::Item: Clone,
        B: IntoIterator<Item = Self::Item>,
        C: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        super::subtract_by(self, other, compare)
    }
}

impl<S: IntoIterator> SortedSequence for S {}
