//! Collapsing of consecutive equal values.

use std::cmp::Ordering;

/// Remembers the last value let through and rejects candidates equal to it.
///
/// Only consecutive values are compared, so the result is duplicate-free only
/// when the input is sorted under the same comparator.
#[derive(Debug, Clone)]
pub(crate) struct Dedup<T> {
    previous: Option<T>,
}

impl<T: Clone> Dedup<T> {
    pub(crate) const fn new() -> Self {
        Self { previous: None }
    }

    /// Returns `true` if `candidate` should be emitted, recording it as the
    /// last emitted value. Returns `false` if it equals that value.
    pub(crate) fn admit<C>(&mut self, candidate: &T, compare: &mut C) -> bool
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        if let Some(previous) = &self.previous
            && compare(candidate, previous) == Ordering::Equal
        {
            return false;
        }
        self.previous = Some(candidate.clone());
        true
    }

    /// Wraps a push-style sink so repeated values are absorbed.
    ///
    /// An absorbed value still reports "accepted" so that the producer keeps
    /// driving.
    pub(crate) fn sink<S, C>(mut sink: S, mut compare: C) -> impl FnMut(T) -> bool
    where
        S: FnMut(T) -> bool,
        C: FnMut(&T, &T) -> Ordering,
    {
        let mut dedup = Self::new();
        move |candidate| !dedup.admit(&candidate, &mut compare) || sink(candidate)
    }
}
