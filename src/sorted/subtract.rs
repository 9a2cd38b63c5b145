//! Set difference of two sorted sequences.

use std::cmp::Ordering;
use std::iter::{Fuse, FusedIterator};

use super::dedup::Dedup;
use super::lookahead::Lookahead;

/// Lazy set difference of two sorted sequences.
///
/// Created by [`subtract`](super::subtract) and
/// [`subtract_by`](super::subtract_by). Yields each value of the first input
/// that does not occur in the second, once.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Subtract<A, B, C>
where
    A: Iterator,
    B: IntoIterator<Item = A::Item>,
{
    first: Fuse<A>,
    second: Lookahead<B>,
    compare: C,
    dedup: Dedup<A::Item>,
}

impl<A, B, C> Subtract<A, B, C>
where
    A: Iterator,
    A::Item: Clone,
    B: IntoIterator<Item = A::Item>,
    C: FnMut(&A::Item, &A::Item) -> Ordering,
{
    pub(super) fn new(first: A, second: B, compare: C) -> Self {
        Self {
            first: first.fuse(),
            second: Lookahead::new(second),
            compare,
            dedup: Dedup::new(),
        }
    }
}

impl<A, B, C> Iterator for Subtract<A, B, C>
where
    A: Iterator,
    A::Item: Clone,
    B: IntoIterator<Item = A::Item>,
    C: FnMut(&A::Item, &A::Item) -> Ordering,
{
    type Item = A::Item;

    fn next(&mut self) -> Option<A::Item> {
        self.second.open();

        loop {
            let Some(element) = self.first.next() else {
                self.second.release();
                return None;
            };
            self.second.skip_less(&element, &mut self.compare);

            // A matching head stays put: later duplicates of this element
            // in the first input are skipped against it too.
            if self.second.head_is_equal(&element, &mut self.compare) {
                continue;
            }
            if self.dedup.admit(&element, &mut self.compare) {
                return Some(element);
            }
        }
    }
}

impl<A, B, C> FusedIterator for Subtract<A, B, C>
where
    A: Iterator,
    A::Item: Clone,
    B: IntoIterator<Item = A::Item>,
    C: FnMut(&A::Item, &A::Item) -> Ordering,
{
}
