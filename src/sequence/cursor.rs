//! Pull-style cursor with guaranteed release.

use std::fmt;
use std::iter::FusedIterator;

/// A pull-style view over a single-pass sequence.
///
/// `Cursor` hands out the values of its source one at a time through
/// [`Iterator::next`]. Once the source is exhausted the cursor keeps returning
/// `None` and never polls the source again, even if the source is not a
/// [`FusedIterator`].
///
/// A cursor owns its source until it is released. [`Cursor::release`]
/// consumes the cursor, and dropping an unreleased cursor releases it as well,
/// so the source is freed exactly once on every exit path (early return,
/// `?`, or unwinding).
///
/// # Examples
///
/// ```rust
/// use lambars_sorted::sequence::Cursor;
///
/// let mut cursor = Cursor::new([3, 4].into_iter());
/// assert_eq!(cursor.next(), Some(3));
/// assert_eq!(cursor.pulled(), 1);
/// assert!(!cursor.is_exhausted());
///
/// assert_eq!(cursor.next(), Some(4));
/// assert_eq!(cursor.next(), None);
/// assert!(cursor.is_exhausted());
///
/// cursor.release();
/// ```
pub struct Cursor<I: Iterator> {
    source: I,
    pulled: usize,
    exhausted: bool,
}

impl<I: Iterator> Cursor<I> {
    /// Creates a cursor over `source`. Nothing is pulled until the first call
    /// to [`Iterator::next`].
    #[inline]
    #[must_use]
    pub const fn new(source: I) -> Self {
        Self {
            source,
            pulled: 0,
            exhausted: false,
        }
    }

    /// Returns how many values this cursor has handed out.
    #[inline]
    #[must_use]
    pub const fn pulled(&self) -> usize {
        self.pulled
    }

    /// Returns `true` once [`Iterator::next`] has reported exhaustion.
    #[inline]
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Releases the cursor and the source it holds.
    ///
    /// Release takes the cursor by value, so a released cursor cannot be
    /// pulled from again.
    #[inline]
    pub fn release(self) {
        drop(self);
    }
}

impl<I: Iterator> Drop for Cursor<I> {
    fn drop(&mut self) {
        tracing::trace!(
            pulled = self.pulled,
            exhausted = self.exhausted,
            "cursor released"
        );
    }
}

impl<I: Iterator> Iterator for Cursor<I> {
    type Item = I::Item;

    /// Pulls the next value, or returns `None` once the source is exhausted.
    ///
    /// After the first `None` every further call returns `None` without
    /// touching the source.
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        match self.source.next() {
            Some(value) => {
                self.pulled += 1;
                Some(value)
            }
            None => {
                self.exhausted = true;
                None
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            (0, Some(0))
        } else {
            self.source.size_hint()
        }
    }
}

impl<I: Iterator> FusedIterator for Cursor<I> {}

impl<I: Iterator> fmt::Debug for Cursor<I> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Cursor")
            .field("pulled", &self.pulled)
            .field("exhausted", &self.exhausted)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(Cursor<std::vec::IntoIter<i32>>: Send, Sync);
