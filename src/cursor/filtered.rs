//! Predicate-filtered cursor with one-ahead lookahead
//!
//! `has_more` must be answerable without consuming from the underlying
//! cursor, and that cursor is forward-only. The filtered cursor therefore
//! buffers the next matching element eagerly: at construction and after
//! every yield it scans forward, discarding non-matching elements, until a
//! match is buffered or the underlying cursor runs out.

use std::fmt;

use tracing::trace;

use crate::cursor::SequentialCursor;
use crate::{Cursor, CursorError};

/// Cursor yielding the matching subsequence of an underlying cursor
///
/// The buffered slot doubles as the state flag: `Some` means a matching
/// element is staged, `None` means the cursor is exhausted. Exhaustion is
/// terminal since the refill scan never restarts the underlying cursor.
pub struct FilteredCursor<P> {
    base: SequentialCursor,
    predicate: P,
    buffered: Option<String>,
}

impl<P> FilteredCursor<P>
where
    P: Fn(&str) -> bool,
{
    /// Wrap `base` with `predicate`, staging the first match immediately
    pub fn new(base: SequentialCursor, predicate: P) -> Self {
        let mut cursor = Self {
            base,
            predicate,
            buffered: None,
        };
        cursor.refill();
        cursor
    }

    /// Scan forward to the next matching element, or exhaust
    fn refill(&mut self) {
        while self.base.has_more() {
            // The base cursor reported has_more, so this next cannot fail.
            let Ok(candidate) = self.base.next() else {
                break;
            };
            if (self.predicate)(&candidate) {
                trace!(value = %candidate, "buffered matching element");
                self.buffered = Some(candidate);
                return;
            }
            trace!(value = %candidate, "discarded non-matching element");
        }
        self.buffered = None;
    }
}

impl<P> Cursor for FilteredCursor<P>
where
    P: Fn(&str) -> bool,
{
    type Item = String;

    fn has_more(&self) -> bool {
        self.buffered.is_some()
    }

    fn next(&mut self) -> Result<String, CursorError> {
        let element = self
            .buffered
            .take()
            .ok_or(CursorError::FilterExhausted)?;
        self.refill();
        Ok(element)
    }
}

impl<P> fmt::Debug for FilteredCursor<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilteredCursor")
            .field("base", &self.base)
            .field("buffered", &self.buffered)
            .finish_non_exhaustive()
    }
}
