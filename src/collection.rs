//! Ordered, append-only string storage
//!
//! The collection preserves insertion order, keeps duplicates, and defines
//! no removal operation. Cursors created from it snapshot its contents, so
//! a live cursor is isolated from later appends.

use tracing::debug;

use crate::cursor::{FilteredCursor, SequentialCursor};

/// Ordered sequence of strings with cursor-based traversal
#[derive(Debug, Clone, Default)]
pub struct StringCollection {
    strings: Vec<String>,
}

impl StringCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self {
            strings: Vec::new(),
        }
    }

    /// Append a string to the collection
    ///
    /// Any value is accepted, including the empty string. Duplicates are
    /// kept; insertion order is preserved.
    pub fn add(&mut self, value: impl Into<String>) {
        let value = value.into();
        debug!(value = %value, "added string");
        self.strings.push(value);
    }

    /// Number of stored strings
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Whether the collection holds no strings
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Create a cursor over all current contents, in insertion order
    ///
    /// The cursor snapshots the collection at this point: strings added
    /// afterwards are not visible through it.
    pub fn cursor(&self) -> SequentialCursor {
        debug!(len = self.strings.len(), "creating sequential cursor");
        SequentialCursor::new(self.strings.clone())
    }

    /// Create a cursor over the current contents satisfying `predicate`
    ///
    /// Yields the matching subsequence in insertion order. Snapshot
    /// semantics are the same as [`Self::cursor`].
    pub fn filtered_cursor<P>(&self, predicate: P) -> FilteredCursor<P>
    where
        P: Fn(&str) -> bool,
    {
        debug!(len = self.strings.len(), "creating filtered cursor");
        FilteredCursor::new(SequentialCursor::new(self.strings.clone()), predicate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cursor;

    #[test]
    fn add_preserves_order_and_duplicates() {
        let mut strings = StringCollection::new();
        strings.add("a");
        strings.add("b");
        strings.add("a");
        strings.add("");

        assert_eq!(strings.len(), 4);
        let collected: Vec<String> = strings.cursor().into_iter().collect();
        assert_eq!(collected, vec!["a", "b", "a", ""]);
    }

    #[test]
    fn empty_collection_reports_empty() {
        let strings = StringCollection::new();
        assert!(strings.is_empty());
        assert_eq!(strings.len(), 0);
        assert!(!strings.cursor().has_more());
    }

    #[test]
    fn cursor_snapshots_contents_at_creation() {
        let mut strings = StringCollection::new();
        strings.add("before");

        let mut cursor = strings.cursor();
        strings.add("after");

        assert_eq!(cursor.next().unwrap(), "before");
        assert!(!cursor.has_more(), "append after creation must not be seen");
        assert_eq!(strings.len(), 2);
    }
}
