//! The second input of a sorted operation, opened on first use.

use std::cmp::Ordering;

use crate::sequence::Cursor;

/// The state of the second input.
///
/// The input starts out `Pending` and is only turned into a cursor when the
/// operation first needs it. `Released` is terminal. A `stale` head was handed
/// out by `advance` and is refilled from the cursor on the next access.
enum LookaheadState<S: IntoIterator> {
    Pending(S),
    Open {
        cursor: Cursor<S::IntoIter>,
        head: Option<S::Item>,
        stale: bool,
    },
    Released,
}

/// A cursor over the second input together with its current value.
///
/// The head is the value the algorithms compare against the current element
/// of the first input. It is `None` once the cursor is exhausted.
///
/// Taking the head does not pull its successor. The cursor is only pulled
/// again when the head is next looked at, so a consumer that stops right
/// after receiving a value from the second input leaves nothing pulled
/// behind it.
pub(crate) struct Lookahead<S: IntoIterator> {
    state: LookaheadState<S>,
}

impl<S: IntoIterator> Lookahead<S> {
    pub(crate) const fn new(sequence: S) -> Self {
        Self {
            state: LookaheadState::Pending(sequence),
        }
    }

    /// Opens the cursor and pulls the first head. Does nothing once open or
    /// released.
    pub(crate) fn open(&mut self) {
        if !matches!(self.state, LookaheadState::Pending(_)) {
            return;
        }
        if let LookaheadState::Pending(sequence) =
            std::mem::replace(&mut self.state, LookaheadState::Released)
        {
            tracing::trace!("opening cursor over second input");
            let mut cursor = Cursor::new(sequence.into_iter());
            let head = cursor.next();
            self.state = LookaheadState::Open {
                cursor,
                head,
                stale: false,
            };
        }
    }

    /// Returns the current head, opening the cursor or refilling a stale
    /// head if needed.
    pub(crate) fn head(&mut self) -> Option<&S::Item> {
        self.open();
        match &mut self.state {
            LookaheadState::Open {
                cursor,
                head,
                stale,
            } => {
                if *stale {
                    *head = cursor.next();
                    *stale = false;
                }
                head.as_ref()
            }
            LookaheadState::Pending(_) | LookaheadState::Released => None,
        }
    }

    /// Takes the current head. Its successor is pulled on the next access.
    pub(crate) fn advance(&mut self) -> Option<S::Item> {
        self.head();
        match &mut self.state {
            LookaheadState::Open { head, stale, .. } => {
                let taken = head.take();
                *stale = taken.is_some();
                taken
            }
            LookaheadState::Pending(_) | LookaheadState::Released => None,
        }
    }

    /// Returns `true` if the head compares `Less` than `value`.
    pub(crate) fn head_is_less<C>(&mut self, value: &S::Item, compare: &mut C) -> bool
    where
        C: FnMut(&S::Item, &S::Item) -> Ordering,
    {
        self.head()
            .is_some_and(|head| compare(head, value) == Ordering::Less)
    }

    /// Returns `true` if the head compares `Equal` to `value`.
    pub(crate) fn head_is_equal<C>(&mut self, value: &S::Item, compare: &mut C) -> bool
    where
        C: FnMut(&S::Item, &S::Item) -> Ordering,
    {
        self.head()
            .is_some_and(|head| compare(head, value) == Ordering::Equal)
    }

    /// Discards every head that compares `Less` than `value`.
    pub(crate) fn skip_less<C>(&mut self, value: &S::Item, compare: &mut C)
    where
        C: FnMut(&S::Item, &S::Item) -> Ordering,
    {
        while self.head_is_less(value, compare) {
            self.advance();
        }
    }

    /// Returns `true` once the cursor is open and has no head left.
    pub(crate) fn is_exhausted(&mut self) -> bool {
        self.head().is_none()
    }

    /// Releases the cursor. Later calls see an exhausted input.
    pub(crate) fn release(&mut self) {
        if let LookaheadState::Open { cursor, .. } =
            std::mem::replace(&mut self.state, LookaheadState::Released)
        {
            cursor.release();
        }
    }
}
