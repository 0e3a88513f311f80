//! Rope storage using the ropey crate.

use ropey::Rope;
use std::ops::Range;

/// Wrapper around `ropey::Rope` with clamping char-indexed edits.
///
/// Every index is a character offset. Out-of-range positions are clamped to
/// the rope length instead of panicking.
#[derive(Clone, Debug, Default)]
pub struct RopeWrapper {
    rope: Rope,
}

impl RopeWrapper {
    /// Create a rope from a string.
    #[must_use]
    pub fn from_str(s: &str) -> Self {
        Self {
            rope: Rope::from_str(s),
        }
    }

    /// Get the number of characters.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rope.len_bytes() == 0
    }

    /// Copy a char range out as a `String`.
    #[must_use]
    pub fn slice_to_string(&self, range: Range<usize>) -> String {
        let range = self.clamp_range(range);
        self.rope.slice(range).to_string()
    }

    /// Insert text at a character position (clamped to the end).
    pub fn insert(&mut self, char_idx: usize, text: &str) {
        let char_idx = char_idx.min(self.len_chars());
        self.rope.insert(char_idx, text);
    }

    /// Remove a range of characters (clamped to the rope).
    pub fn remove(&mut self, range: Range<usize>) {
        let range = self.clamp_range(range);
        if !range.is_empty() {
            self.rope.remove(range);
        }
    }

    /// Replace the entire contents.
    pub fn replace(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
    }

    /// Convert to string.
    #[must_use]
    pub fn to_string(&self) -> String {
        self.rope.to_string()
    }

    fn clamp_range(&self, range: Range<usize>) -> Range<usize> {
        let len = self.len_chars();
        let end = range.end.min(len);
        let start = range.start.min(end);
        start..end
    }
}
