//! Grapheme cluster iteration.

use unicode_segmentation::UnicodeSegmentation;

/// One grapheme cluster located by character offset.
///
/// Layout works in character offsets (the buffer's linear index), so spans
/// carry char positions rather than byte positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GraphemeSpan<'a> {
    pub text: &'a str,
    /// Character offset of the first scalar in the cluster.
    pub char_offset: usize,
    /// Number of chars in the cluster.
    pub char_len: usize,
    pub is_whitespace: bool,
}

/// Split a string into grapheme spans with char offsets.
#[must_use]
pub fn grapheme_spans(s: &str) -> Vec<GraphemeSpan<'_>> {
    let mut spans = Vec::new();
    let mut char_offset = 0usize;
    for text in s.graphemes(true) {
        let char_len = text.chars().count();
        spans.push(GraphemeSpan {
            text,
            char_offset,
            char_len,
            is_whitespace: text.chars().all(char::is_whitespace),
        });
        char_offset += char_len;
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spans_ascii() {
        let texts: Vec<&str> = grapheme_spans("abc").iter().map(|s| s.text).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_spans_track_char_offsets() {
        // "e" + combining acute is one cluster of two chars
        let spans = grapheme_spans("ae\u{0301}b c");
        assert_eq!(spans.len(), 5);
        assert_eq!(spans[1].char_offset, 1);
        assert_eq!(spans[1].char_len, 2);
        assert_eq!(spans[2].char_offset, 3);
        assert!(spans[3].is_whitespace);
        assert!(!spans[4].is_whitespace);
    }

    #[test]
    fn test_spans_empty() {
        assert!(grapheme_spans("").is_empty());
    }
}
