//! Set intersection of two sorted sequences.

use std::cmp::Ordering;
use std::iter::{Fuse, FusedIterator};

use super::dedup::Dedup;
use super::lookahead::Lookahead;

/// Lazy set intersection of two sorted sequences.
///
/// Created by [`intersect`](super::intersect) and
/// [`intersect_by`](super::intersect_by). Yields each value of the first
/// input that also occurs in the second, once.
///
/// Once the second input runs out nothing more can match, so the iterator
/// ends without reading the rest of the first input.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Intersect<A, B, C>
where
    A: Iterator,
    B: IntoIterator<Item = A::Item>,
{
    first: Fuse<A>,
    current: Option<A::Item>,
    second: Lookahead<B>,
    compare: C,
    dedup: Dedup<A::Item>,
}

impl<A, B, C> Intersect<A, B, C>
where
    A: Iterator,
    A::Item: Clone,
    B: IntoIterator<Item = A::Item>,
    C: FnMut(&A::Item, &A::Item) -> Ordering,
{
    pub(super) fn new(first: A, second: B, compare: C) -> Self {
        Self {
            first: first.fuse(),
            current: None,
            second: Lookahead::new(second),
            compare,
            dedup: Dedup::new(),
        }
    }

    fn finish(&mut self) {
        self.current = None;
        self.second.release();
    }
}

impl<A, B, C> Iterator for Intersect<A, B, C>
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
            // Each equal value in the second input is consumed and offers
            // the current element once more; the dedup absorbs the repeats.
            if let Some(element) = &self.current {
                if self.second.head_is_equal(element, &mut self.compare) {
                    self.second.advance();
                    if self.dedup.admit(element, &mut self.compare) {
                        return Some(element.clone());
                    }
                    continue;
                }
                self.current = None;
            }

            if self.second.is_exhausted() {
                self.finish();
                return None;
            }
            let Some(element) = self.first.next() else {
                self.finish();
                return None;
            };
            self.second.skip_less(&element, &mut self.compare);
            self.current = Some(element);
        }
    }
}

impl<A, B, C> FusedIterator for Intersect<A, B, C>
where
    A: Iterator,
    A::Item: Clone,
    B: IntoIterator<Item = A::Item>,
    C: FnMut(&A::Item, &A::Item) -> Ordering,
{
}
