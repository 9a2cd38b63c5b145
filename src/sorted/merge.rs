//! Order-preserving merge of two sorted sequences.

use std::cmp::Ordering;
use std::iter::{Fuse, FusedIterator};

use super::lookahead::Lookahead;

/// Lazy merge of two sorted sequences, keeping every occurrence.
///
/// Created by [`merge`](super::merge) and [`merge_by`](super::merge_by).
/// The first input is walked element by element. The second input is read
/// through a cursor that is opened on the first call to `next` and released
/// as soon as the merge is exhausted or dropped.
///
/// When elements compare equal, those from the first input come first.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Merge<A, B, C>
where
    A: Iterator,
    B: IntoIterator<Item = A::Item>,
{
    first: Fuse<A>,
    pending: Option<A::Item>,
    second: Lookahead<B>,
    compare: C,
}

impl<A, B, C> Merge<A, B, C>
where
    A: Iterator,
    B: IntoIterator<Item = A::Item>,
    C: FnMut(&A::Item, &A::Item) -> Ordering,
{
    pub(super) fn new(first: A, second: B, compare: C) -> Self {
        Self {
            first: first.fuse(),
            pending: None,
            second: Lookahead::new(second),
            compare,
        }
    }

    /// The comparator, shared with wrappers that compare emitted values.
    pub(super) fn compare_mut(&mut self) -> &mut C {
        &mut self.compare
    }

    fn drain_second(&mut self) -> Option<A::Item> {
        let next = self.second.advance();
        if next.is_none() {
            self.second.release();
        }
        next
    }
}

impl<A, B, C> Iterator for Merge<A, B, C>
where
    A: Iterator,
    B: IntoIterator<Item = A::Item>,
    C: FnMut(&A::Item, &A::Item) -> Ordering,
{
    type Item = A::Item;

    fn next(&mut self) -> Option<A::Item> {
        self.second.open();

        let Some(element) = self.pending.take().or_else(|| self.first.next()) else {
            return self.drain_second();
        };

        // Strictly less only, so equal elements of the first input go first.
        if self.second.head_is_less(&element, &mut self.compare) {
            self.pending = Some(element);
            return self.second.advance();
        }
        Some(element)
    }
}

impl<A, B, C> FusedIterator for Merge<A, B, C>
where
    A: Iterator,
    B: IntoIterator<Item = A::Item>,
    C: FnMut(&A::Item, &A::Item) -> Ordering,
{
}
