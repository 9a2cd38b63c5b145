//! Set union of two sorted sequences.

use std::cmp::Ordering;
use std::iter::FusedIterator;

use super::dedup::Dedup;
use super::merge::Merge;

/// Lazy set union of two sorted sequences.
///
/// Created by [`union`](super::union) and [`union_by`](super::union_by).
/// This is a [`Merge`] whose output has consecutive equal values collapsed,
/// so every value of either input appears exactly once.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Union<A, B, C>
where
    A: Iterator,
    B: IntoIterator<Item = A::Item>,
{
    merge: Merge<A, B, C>,
    dedup: Dedup<A::Item>,
}

impl<A, B, C> Union<A, B, C>
where
    A: Iterator,
    A::Item: Clone,
    B: IntoIterator<Item = A::Item>,
    C: FnMut(&A::Item, &A::Item) -> Ordering,
{
    pub(super) fn new(first: A, second: B, compare: C) -> Self {
        Self {
            merge: Merge::new(first, second, compare),
            dedup: Dedup::new(),
        }
    }
}

impl<A, B, C> Iterator for Union<A, B, C>
where
    A: Iterator,
    A::Item: Clone,
    B: IntoIterator<Item = A::Item>,
    C: FnMut(&A::Item, &A::Item) -> Ordering,
{
    type Item = A::Item;

    fn next(&mut self) -> Option<A::Item> {
        loop {
            let candidate = self.merge.next()?;
            if self.dedup.admit(&candidate, self.merge.compare_mut()) {
                return Some(candidate);
            }
        }
    }
}

impl<A, B, C> FusedIterator for Union<A, B, C>
where
    A: Iterator,
    A::Item: Clone,
    B: IntoIterator<Item = A::Item>,
    C: FnMut(&A::Item, &A::Item) -> Ordering,
{
}
