//! Logical text content of an input.
//!
//! [`TextBuffer`] is the raw string behind the wrapped layout: a rope indexed
//! by character offsets with a revision counter so layouts know when they are
//! stale. For cursor and selection handling see [`EditBuffer`](super::EditBuffer).

use crate::text::rope::RopeWrapper;
use std::ops::Range;

/// The only character that separates explicit lines.
pub const LINE_SEPARATOR: char = '\n';

/// Rope-backed text content.
#[derive(Clone, Debug, Default)]
pub struct TextBuffer {
    rope: RopeWrapper,
    revision: u64,
}

impl TextBuffer {
    /// Create an empty text buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer with initial text.
    #[must_use]
    pub fn with_text(text: &str) -> Self {
        Self {
            rope: RopeWrapper::from_str(text),
            revision: 0,
        }
    }

    /// Replace the whole content.
    pub fn set_text(&mut self, text: &str) {
        self.rope.replace(text);
        self.bump_revision();
    }

    /// Insert text at a char offset (clamped to the end).
    pub fn insert(&mut self, char_idx: usize, text: &str) {
        if text.is_empty() {
            return;
        }
        self.rope.insert(char_idx, text);
        self.bump_revision();
    }

    /// Remove a char range and return what was removed.
    pub fn remove(&mut self, range: Range<usize>) -> String {
        let removed = self.rope.slice_to_string(range.clone());
        if !removed.is_empty() {
            self.rope.remove(range);
            self.bump_revision();
        }
        removed
    }

    /// Copy a char range out of the buffer.
    #[must_use]
    pub fn slice(&self, range: Range<usize>) -> String {
        self.rope.slice_to_string(range)
    }

    /// Get the number of characters.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rope.is_empty()
    }

    /// Get the buffer revision (increments on content changes).
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Convert to plain string.
    #[must_use]
    pub fn to_string(&self) -> String {
        self.rope.to_string()
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_basic() {
        let mut buffer = TextBuffer::new();
        assert!(buffer.is_empty());
        buffer.set_text("Hello, world!");
        assert_eq!(buffer.len_chars(), 13);
        assert_eq!(buffer.revision(), 1);
    }

    #[test]
    fn test_insert_and_remove() {
        let mut buffer = TextBuffer::with_text("Hello!");
        buffer.insert(5, ", world");
        assert_eq!(buffer.to_string(), "Hello, world!");

        let removed = buffer.remove(5..12);
        assert_eq!(removed, ", world");
        assert_eq!(buffer.to_string(), "Hello!");
    }

    #[test]
    fn test_noop_edits_keep_revision() {
        let mut buffer = TextBuffer::with_text("abc");
        buffer.insert(1, "");
        assert_eq!(buffer.remove(2..2), "");
        assert_eq!(buffer.remove(7..9), "");
        assert_eq!(buffer.revision(), 0);
    }

}
