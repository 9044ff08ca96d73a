//! # In-memory string collection with lazy cursors
//!
//! This library implements an ordered, append-only string collection with
//! two traversal modes:
//!
//! 1. **Sequential**: yield every stored string in insertion order
//! 2. **Filtered**: yield only the strings satisfying a caller-supplied
//!    predicate, in insertion order, via one-ahead lookahead
//!
//! Cursors are forward-only and non-restartable. They snapshot the
//! collection's contents at creation time, so appends made after a cursor
//! exists are never observed by it.
//!
//! ## Usage Example
//!
//! ```
//! use stringtrail::{Cursor, StringCollection};
//!
//! let mut strings = StringCollection::new();
//! strings.add("hourglass");
//! strings.add("cat");
//!
//! let mut cursor = strings.filtered_cursor(|s| s.len() > 5);
//! assert!(cursor.has_more());
//! assert_eq!(cursor.next().unwrap(), "hourglass");
//! assert!(!cursor.has_more());
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

pub mod collection; // Ordered, append-only string storage
pub mod cursor;     // Cursor trait and the two concrete cursors

// Re-exports for convenience
pub use collection::StringCollection;
pub use cursor::{Cursor, CursorIter, FilteredCursor, SequentialCursor};

use thiserror::Error;

/// Errors produced by cursor traversal
///
/// Calling `next` on an exhausted cursor is a caller contract violation:
/// the error should be propagated, not caught and retried.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorError {
    /// `next` was called on a sequential cursor with no elements left
    #[error("no more elements remain in the cursor")]
    Exhausted,

    /// `next` was called on a filtered cursor with no matching elements left
    #[error("no more elements match the filter")]
    FilterExhausted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_cursor_kind() {
        assert_eq!(
            CursorError::Exhausted.to_string(),
            "no more elements remain in the cursor"
        );
        assert_eq!(
            CursorError::FilterExhausted.to_string(),
            "no more elements match the filter"
        );
    }
}
