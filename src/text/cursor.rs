//! Cursor positions and selection ranges resolved against a [`LineLayout`].
//!
//! A cursor is a `(col, row)` pair on the wrapped layout; a linear index is a
//! char offset into the whole text. The two are converted through the layout
//! rows, so a layout rebuild (new text or new width) re-resolves the cursor
//! through its linear index.
//!
//! # Forced-break boundaries
//!
//! An index sitting exactly on a forced break belongs to two rows: the end
//! of the earlier one and the start of the later one. [`LineLayout::index_to_position`]
//! always picks the end of the earlier row. Converting either position back
//! yields the same index.

use crate::text::wrap::LineLayout;
use std::ops::Range;

/// Cursor location on the wrapped layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CursorPosition {
    /// Column in chars from the start of the visual row.
    pub col: usize,
    /// Visual row.
    pub row: usize,
}

impl CursorPosition {
    /// Create a new cursor position.
    #[must_use]
    pub fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

impl From<(usize, usize)> for CursorPosition {
    fn from((col, row): (usize, usize)) -> Self {
        Self::new(col, row)
    }
}

/// Selection between a fixed anchor and a moving active index.
///
/// An empty selection (`anchor == active`) is still a selection; editing
/// treats it like no selection at all.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Selection {
    pub anchor: usize,
    pub active: usize,
}

impl Selection {
    /// Create a new selection.
    #[must_use]
    pub fn new(anchor: usize, active: usize) -> Self {
        Self { anchor, active }
    }

    /// Empty selection at `index`.
    #[must_use]
    pub fn collapsed(index: usize) -> Self {
        Self::new(index, index)
    }

    /// Lower bound of the range.
    #[must_use]
    pub fn start(&self) -> usize {
        self.anchor.min(self.active)
    }

    /// Upper bound of the range.
    #[must_use]
    pub fn end(&self) -> usize {
        self.anchor.max(self.active)
    }

    /// Normalized char range.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start()..self.end()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.anchor == self.active
    }

    /// Clamp both ends to `len`.
    #[must_use]
    pub fn clamped(&self, len: usize) -> Self {
        Self::new(self.anchor.min(len), self.active.min(len))
    }
}

/// A cursor movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
    Left,
    Right,
    Up,
    Down,
    /// Start of the visual row.
    Home,
    /// End of the visual row.
    End,
    WordLeft,
    WordRight,
    DocumentStart,
    DocumentEnd,
    /// Up by a number of rows.
    PageUp(usize),
    /// Down by a number of rows.
    PageDown(usize),
}

impl LineLayout {
    /// Resolve a linear index to a cursor position (clamped to the text).
    #[must_use]
    pub fn index_to_position(&self, index: usize) -> CursorPosition {
        let lines = self.lines();
        let index = index.min(self.total_chars());
        let row = lines
            .partition_point(|line| line.end < index)
            .min(self.last_row());
        let line = lines[row];
        CursorPosition::new(index.saturating_sub(line.start).min(line.len()), row)
    }

    /// Resolve a cursor position to a linear index.
    ///
    /// Rows past the end clamp to the last row, columns past the row end
    /// clamp to the row end.
    #[must_use]
    pub fn position_to_index(&self, pos: CursorPosition) -> usize {
        let row = pos.row.min(self.last_row());
        let line = self.lines()[row];
        line.start + pos.col.min(line.len())
    }

    /// Clamp a position into the layout without changing rows needlessly.
    #[must_use]
    pub fn clamp_position(&self, pos: CursorPosition) -> CursorPosition {
        let row = pos.row.min(self.last_row());
        CursorPosition::new(pos.col.min(self.line_len(row)), row)
    }

    /// Position reached by applying `motion` from `pos`.
    ///
    /// `chars` is the text the layout was built from; only word motions read it.
    #[must_use]
    pub fn apply_motion(&self, chars: &[char], pos: CursorPosition, motion: Motion) -> CursorPosition {
        let pos = self.clamp_position(pos);
        let index = self.position_to_index(pos);
        match motion {
            Motion::Left => {
                if index == 0 {
                    pos
                } else {
                    self.index_to_position(index - 1)
                }
            }
            Motion::Right => {
                if index >= self.total_chars() {
                    pos
                } else {
                    self.index_to_position(index + 1)
                }
            }
            Motion::Up => self.vertical(pos, -1),
            Motion::Down => self.vertical(pos, 1),
            Motion::PageUp(rows) => self.vertical(pos, -isize::try_from(rows).unwrap_or(isize::MAX)),
            Motion::PageDown(rows) => self.vertical(pos, isize::try_from(rows).unwrap_or(isize::MAX)),
            Motion::Home => CursorPosition::new(0, pos.row),
            Motion::End => CursorPosition::new(self.line_len(pos.row), pos.row),
            Motion::WordLeft => self.index_to_position(prev_word_boundary(chars, index)),
            Motion::WordRight => self.index_to_position(next_word_boundary(chars, index)),
            Motion::DocumentStart => CursorPosition::new(0, 0),
            Motion::DocumentEnd => self.index_to_position(self.total_chars()),
        }
    }

    // Keeps the column when the target row is long enough, else clamps to its end.
    fn vertical(&self, pos: CursorPosition, delta: isize) -> CursorPosition {
        let target = pos
            .row
            .saturating_add_signed(delta)
            .min(self.last_row());
        if target == pos.row {
            return pos;
        }
        CursorPosition::new(pos.col.min(self.line_len(target)), target)
    }
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// First index after the word at or following `from`.
#[must_use]
pub fn next_word_boundary(chars: &[char], from: usize) -> usize {
    let len = chars.len();
    let mut idx = from.min(len);
    while idx < len && !is_word_char(chars[idx]) {
        idx += 1;
    }
    while idx < len && is_word_char(chars[idx]) {
        idx += 1;
    }
    idx
}

/// Start of the word at or preceding `from`.
#[must_use]
pub fn prev_word_boundary(chars: &[char], from: usize) -> usize {
    let mut idx = from.min(chars.len());
    while idx > 0 && !is_word_char(chars[idx - 1]) {
        idx -= 1;
    }
    while idx > 0 && is_word_char(chars[idx - 1]) {
        idx -= 1;
    }
    idx
}
