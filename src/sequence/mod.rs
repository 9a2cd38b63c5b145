//! Lazy single-pass sequences and the pull-style cursor over them.
//!
//! This module provides the two primitives every sorted operation is built on:
//!
//! - [`Sequence`]: a lazy, single-pass producer of values. Every
//!   [`IntoIterator`] is a sequence. The trait adds push-style consumption
//!   through [`Sequence::drive`], where the consumer can stop at any value.
//! - [`Cursor`]: a pull-style view over a sequence with an explicit release
//!   step. Releasing consumes the cursor, and dropping it releases it too, so
//!   the underlying producer is freed on every exit path.
//!
//! # Examples
//!
//! ## Push-style consumption
//!
//! ```rust
//! use lambars_sorted::sequence::Sequence;
//!
//! let mut seen = Vec::new();
//! let exhausted = (1..).drive(|value| {
//!     seen.push(value);
//!     value < 3
//! });
//!
//! assert!(!exhausted);
//! assert_eq!(seen, vec![1, 2, 3]);
//! ```
//!
//! ## Pull-style consumption
//!
//! ```rust
//! use lambars_sorted::sequence::Sequence;
//!
//! let mut cursor = vec![10, 20].cursor();
//! assert_eq!(cursor.next(), Some(10));
//! assert_eq!(cursor.next(), Some(20));
//! assert_eq!(cursor.next(), None);
//! assert_eq!(cursor.next(), None);
//! cursor.release();
//! ```

mod cursor;

pub use cursor::Cursor;

/// A lazy, single-pass producer of values.
///
/// Any [`IntoIterator`] is a `Sequence`, so vectors, ranges, iterator adapters
/// and the outputs of [`crate::sorted`] can all be passed where a sequence is
/// expected. A sequence is consumed by value and cannot be restarted.
///
/// # Examples
///
/// ```rust
/// use lambars_sorted::sequence::Sequence;
///
/// let mut total = 0;
/// assert!(vec![1, 2, 3].drive(|value| {
///     total += value;
///     true
/// }));
/// assert_eq!(total, 6);
/// ```
pub trait Sequence: IntoIterator + Sized {
    /// Pushes every value into `sink` until the sequence is exhausted or the
    /// sink returns `false`.
    ///
    /// Returns `true` if the sequence was exhausted and `false` if the sink
    /// stopped it. In both cases the sequence, and any cursor it holds, has
    /// been dropped by the time this returns.
    fn drive<S>(self, mut sink: S) -> bool
    where
        S: FnMut(Self::Item) -> bool,
    {
        for value in self {
            if !sink(value) {
                return false;
            }
        }
        true
    }

    /// Opens a pull-style [`Cursor`] over this sequence.
    fn cursor(self) -> Cursor<Self::IntoIter> {
        Cursor::new(self.into_iter())
    }
}

impl<S: IntoIterator> Sequence for S {}
