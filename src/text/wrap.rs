//! Line wrapping of logical text into visual lines.
//!
//! Text is split on [`LINE_SEPARATOR`] first; each explicit line is then
//! broken into visual rows no wider than the wrap width. A row produced by a
//! forced break is flagged with [`LineRecord::is_wrap`] so the original text
//! can be rebuilt from the rows.

use crate::text::buffer::LINE_SEPARATOR;
use crate::unicode::{GraphemeSpan, WidthMethod, grapheme_spans, grapheme_width};
use std::ops::Range;

/// Text wrapping mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WrapMode {
    /// No wrapping - lines extend beyond the width.
    None,
    /// Wrap at grapheme boundaries.
    Char,
    /// Wrap after whitespace, breaking mid-word only when a word is too long.
    #[default]
    Word,
}

/// Parameters that determine a layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WrapOptions {
    /// Row width in columns. Zero means unbounded.
    pub width: usize,
    pub mode: WrapMode,
    pub tab_width: usize,
    pub width_method: WidthMethod,
}

impl Default for WrapOptions {
    fn default() -> Self {
        Self {
            width: 0,
            mode: WrapMode::Word,
            tab_width: 4,
            width_method: WidthMethod::WcWidth,
        }
    }
}

impl WrapOptions {
    /// Options that wrap at `width` columns in word mode.
    #[must_use]
    pub fn with_width(width: usize) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    fn effective_width(&self) -> Option<usize> {
        if self.mode == WrapMode::None || self.width == 0 {
            None
        } else {
            Some(self.width)
        }
    }
}

/// One visual line: a char range of the buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LineRecord {
    /// First char offset of the row.
    pub start: usize,
    /// Char offset one past the last char of the row (separator excluded).
    pub end: usize,
    /// Display width in columns.
    pub width: usize,
    /// Row begins at a forced break rather than after a separator.
    pub is_wrap: bool,
}

impl LineRecord {
    /// Number of chars on the row.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the row holds no chars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Char range of the row.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Wrap `text` into visual lines.
///
/// Always returns at least one line; empty text yields a single empty row.
/// The result depends only on `text` and `options`.
#[must_use]
pub fn wrap(text: &str, options: &WrapOptions) -> Vec<LineRecord> {
    let wrap_width = options.effective_width();
    let mut lines = Vec::new();
    let mut segment_start = 0usize;

    for segment in text.split(LINE_SEPARATOR) {
        let spans = grapheme_spans(segment);
        wrap_segment(&spans, segment_start, wrap_width, options, &mut lines);
        segment_start += segment.chars().count() + 1;
    }

    lines
}

fn wrap_segment(
    spans: &[GraphemeSpan<'_>],
    base: usize,
    wrap_width: Option<usize>,
    options: &WrapOptions,
    lines: &mut Vec<LineRecord>,
) {
    let Some(wrap_width) = wrap_width else {
        let width = row_width(spans, options);
        lines.push(row_record(spans, base, 0, spans.len(), width));
        return;
    };

    let word_mode = options.mode == WrapMode::Word;
    let mut start = 0usize;
    let mut current_width = 0usize;
    // (span index just past the whitespace, row width at that point)
    let mut last_break: Option<(usize, usize)> = None;
    let mut i = 0usize;

    while i < spans.len() {
        let span = spans[i];
        let g_width = grapheme_width(
            span.text,
            current_width,
            options.tab_width,
            options.width_method,
        );

        // Whitespace hangs at the end of the row, it never opens a new one
        if word_mode && span.is_whitespace {
            current_width += g_width;
            i += 1;
            last_break = Some((i, current_width));
            continue;
        }

        if current_width + g_width > wrap_width && i > start {
            let (break_index, break_width) = match last_break {
                Some(brk) if word_mode => brk,
                _ => (i, current_width),
            };

            lines.push(row_record(spans, base, start, break_index, break_width));

            start = break_index;
            current_width = 0;
            last_break = None;
            i = break_index;
            continue;
        }

        current_width += g_width;
        i += 1;
    }

    lines.push(row_record(spans, base, start, spans.len(), current_width));
}

fn row_width(spans: &[GraphemeSpan<'_>], options: &WrapOptions) -> usize {
    spans.iter().fold(0, |col, span| {
        col + grapheme_width(span.text, col, options.tab_width, options.width_method)
    })
}

fn char_offset_of(spans: &[GraphemeSpan<'_>], index: usize) -> usize {
    match spans.get(index) {
        Some(span) => span.char_offset,
        None => spans.last().map_or(0, |s| s.char_offset + s.char_len),
    }
}

fn row_record(
    spans: &[GraphemeSpan<'_>],
    base: usize,
    start: usize,
    end: usize,
    width: usize,
) -> LineRecord {
    LineRecord {
        start: base + char_offset_of(spans, start),
        end: base + char_offset_of(spans, end),
        width,
        is_wrap: start > 0,
    }
}

/// Wrapped layout of a whole buffer. Row index = position in `lines`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineLayout {
    lines: Vec<LineRecord>,
    options: WrapOptions,
}

impl Default for LineLayout {
    fn default() -> Self {
        Self::build("", &WrapOptions::default())
    }
}

impl LineLayout {
    /// Wrap `text` with `options`.
    #[must_use]
    pub fn build(text: &str, options: &WrapOptions) -> Self {
        Self {
            lines: wrap(text, options),
            options: *options,
        }
    }

    /// Options the layout was built with.
    #[must_use]
    pub fn options(&self) -> &WrapOptions {
        &self.options
    }

    /// Number of visual rows (never zero).
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Index of the last row.
    #[must_use]
    pub fn last_row(&self) -> usize {
        self.lines.len().saturating_sub(1)
    }

    /// All rows in order.
    #[must_use]
    pub fn lines(&self) -> &[LineRecord] {
        &self.lines
    }

    /// Row by index.
    #[must_use]
    pub fn line(&self, row: usize) -> Option<&LineRecord> {
        self.lines.get(row)
    }

    /// Char count of a row, zero for rows past the end.
    #[must_use]
    pub fn line_len(&self, row: usize) -> usize {
        self.lines.get(row).map_or(0, LineRecord::len)
    }

    /// Total chars covered, separators included.
    #[must_use]
    pub fn total_chars(&self) -> usize {
        self.lines.last().map_or(0, |line| line.end)
    }

    /// Rebuild the logical text from the rows of `text`'s layout.
    ///
    /// Separators are re-inserted before every row that is not a forced
    /// break, so for the text the layout was built from this returns the
    /// text unchanged.
    #[must_use]
    pub fn reconstruct(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let mut out = String::with_capacity(text.len());
        for (row, line) in self.lines.iter().enumerate() {
            if row > 0 && !line.is_wrap {
                out.push(LINE_SEPARATOR);
            }
            let end = line.end.min(chars.len());
            let start = line.start.min(end);
            out.extend(&chars[start..end]);
        }
        out
    }

    /// Text of one row.
    #[must_use]
    pub fn line_text(&self, text: &str, row: usize) -> Option<String> {
        let line = self.lines.get(row)?;
        Some(text.chars().skip(line.start).take(line.len()).collect())
    }
}
