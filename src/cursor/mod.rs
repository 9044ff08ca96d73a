//! Cursor trait and concrete cursors
//!
//! A cursor produces a lazy, finite, forward-only, non-restartable sequence
//! of elements. Two concrete cursors exist: [`SequentialCursor`] yields a
//! snapshot in insertion order, [`FilteredCursor`] wraps it with a predicate.

mod filtered;
mod sequential;

pub use filtered::FilteredCursor;
pub use sequential::SequentialCursor;

use crate::CursorError;

/// Shared iteration interface for the two cursor kinds
///
/// `has_more` is side-effect-free and idempotent; once it returns `false`
/// it returns `false` for the rest of the cursor's lifetime. `next` on an
/// exhausted cursor returns a [`CursorError`] instead of panicking.
pub trait Cursor {
    /// Element type produced by the cursor
    type Item;

    /// Whether a further call to `next` would succeed
    fn has_more(&self) -> bool;

    /// Produce the next element, advancing the cursor by one
    fn next(&mut self) -> Result<Self::Item, CursorError>;

    /// Bridge this cursor into a standard [`Iterator`]
    ///
    /// The iterator ends cleanly where the cursor reports exhaustion, so
    /// the error path of `next` is never hit through this adapter.
    fn into_iter(self) -> CursorIter<Self>
    where
        Self: Sized,
    {
        CursorIter { cursor: self }
    }
}

/// Adapter implementing [`Iterator`] on top of any [`Cursor`]
#[derive(Debug)]
pub struct CursorIter<C> {
    cursor: C,
}

impl<C: Cursor> Iterator for CursorIter<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.has_more() {
            self.cursor.next().ok()
        } else {
            None
        }
    }
}
