//! Sequential cursor over a snapshot of the collection

use crate::{Cursor, CursorError};

/// Forward-only cursor yielding a snapshot in insertion order
///
/// Owns the snapshot outright, so the source collection may be mutated or
/// dropped while the cursor is live without affecting traversal.
#[derive(Debug, Clone)]
pub struct SequentialCursor {
    snapshot: Vec<String>,
    position: usize,
}

impl SequentialCursor {
    /// Create a cursor positioned before the first element of `snapshot`
    pub fn new(snapshot: Vec<String>) -> Self {
        Self {
            snapshot,
            position: 0,
        }
    }
}

impl Cursor for SequentialCursor {
    type Item = String;

    fn has_more(&self) -> bool {
        self.position < self.snapshot.len()
    }

    fn next(&mut self) -> Result<String, CursorError> {
        if !self.has_more() {
            return Err(CursorError::Exhausted);
        }
        let element = self.snapshot[self.position].clone();
        self.position += 1;
        Ok(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn yields_elements_in_insertion_order() {
        let mut cursor = SequentialCursor::new(words(&["one", "two", "three"]));

        assert_eq!(cursor.next().unwrap(), "one");
        assert_eq!(cursor.next().unwrap(), "two");
        assert_eq!(cursor.next().unwrap(), "three");
        assert!(!cursor.has_more());
    }

    #[test]
    fn next_on_exhausted_cursor_fails() {
        let mut cursor = SequentialCursor::new(Vec::new());

        assert!(!cursor.has_more());
        assert_eq!(cursor.next(), Err(CursorError::Exhausted));
        // Exhaustion is sticky
        assert!(!cursor.has_more());
        assert_eq!(cursor.next(), Err(CursorError::Exhausted));
    }

    #[test]
    fn has_more_is_idempotent() {
        let cursor = SequentialCursor::new(words(&["only"]));
        for _ in 0..5 {
            assert!(cursor.has_more());
        }
    }
}
