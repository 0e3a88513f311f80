//! Editable text with a wrapped layout, cursor and selection.
//!
//! This module provides [`EditBuffer`], which keeps three views of the same
//! content consistent: the raw [`TextBuffer`], its wrapped [`LineLayout`] and
//! the cursor `(col, row)`. Every accepted mutation rebuilds the layout and
//! re-resolves the cursor from its new linear index.
//!
//! # Examples
//!
//! ```
//! use textinput_core::{CursorPosition, EditBuffer};
//!
//! let mut buf = EditBuffer::with_text("Hello World");
//! assert_eq!(buf.cursor(), CursorPosition::new(11, 0));
//!
//! buf.delete_backward(); // Removes 'd'
//! assert_eq!(buf.text(), "Hello Worl");
//!
//! buf.set_wrap_width(6);
//! assert_eq!(buf.cursor(), CursorPosition::new(4, 1));
//! ```

use crate::text::TextBuffer;
use crate::text::cursor::{CursorPosition, Motion, Selection, next_word_boundary, prev_word_boundary};
use crate::text::wrap::{LineLayout, WrapMode, WrapOptions};
use crate::unicode::WidthMethod;
use std::ops::Range;
use tracing::trace;

/// Text buffer with layout, cursor and selection.
///
/// `EditBuffer` is the editing engine behind [`TextInput`](crate::TextInput).
/// It knows nothing about focus, modes or notifications; those policies live
/// in the widget. Operations never fail: indices clamp to the text and edits
/// that change nothing return `false`.
///
/// # Selection lifecycle
///
/// [`start_selection`](Self::start_selection) anchors a selection at the
/// cursor and enters the selecting phase. Cursor movement while a selection
/// exists moves its active end. [`end_selection`](Self::end_selection) leaves
/// the selecting phase but keeps the range until an edit consumes it or
/// [`cancel_selection`](Self::cancel_selection) drops it.
#[derive(Clone, Debug, Default)]
pub struct EditBuffer {
    buffer: TextBuffer,
    layout: LineLayout,
    cursor: CursorPosition,
    selection: Option<Selection>,
    selecting: bool,
}

impl EditBuffer {
    /// Create a new empty edit buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an edit buffer with initial text and the cursor at its end.
    #[must_use]
    pub fn with_text(text: &str) -> Self {
        Self::with_options(text, WrapOptions::default())
    }

    /// Create an edit buffer with initial text and wrap options.
    #[must_use]
    pub fn with_options(text: &str, options: WrapOptions) -> Self {
        let buffer = TextBuffer::with_text(text);
        let layout = LineLayout::build(text, &options);
        let cursor = layout.index_to_position(buffer.len_chars());
        Self {
            buffer,
            layout,
            cursor,
            selection: None,
            selecting: false,
        }
    }

    /// Get the underlying text buffer.
    #[must_use]
    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// Get the full text content.
    #[must_use]
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    /// Number of chars in the text.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.buffer.len_chars()
    }

    /// Current wrapped layout.
    #[must_use]
    pub fn layout(&self) -> &LineLayout {
        &self.layout
    }

    /// Options the layout is built with.
    #[must_use]
    pub fn wrap_options(&self) -> WrapOptions {
        *self.layout.options()
    }

    /// Replace the entire text.
    ///
    /// The cursor moves to the end of the new text and any selection is dropped.
    pub fn set_text(&mut self, text: &str) {
        self.buffer.set_text(text);
        self.selection = None;
        self.selecting = false;
        self.relayout_to(self.buffer.len_chars());
    }

    /// Change the wrap options, keeping the cursor on the same linear index.
    pub fn set_wrap_options(&mut self, options: WrapOptions) {
        if options == *self.layout.options() {
            return;
        }
        let index = self.cursor_index();
        self.layout = LineLayout::build(&self.buffer.to_string(), &options);
        self.cursor = self.layout.index_to_position(index);
        trace!(
            width = options.width,
            rows = self.layout.line_count(),
            "layout rebuilt for new wrap options"
        );
    }

    /// Change the wrap width in columns (0 = unbounded).
    pub fn set_wrap_width(&mut self, width: usize) {
        self.set_wrap_options(WrapOptions {
            width,
            ..self.wrap_options()
        });
    }

    /// Change the wrap mode.
    pub fn set_wrap_mode(&mut self, mode: WrapMode) {
        self.set_wrap_options(WrapOptions {
            mode,
            ..self.wrap_options()
        });
    }

    /// Change the tab width.
    pub fn set_tab_width(&mut self, tab_width: usize) {
        self.set_wrap_options(WrapOptions {
            tab_width: tab_width.max(1),
            ..self.wrap_options()
        });
    }

    /// Change the width calculation method.
    pub fn set_width_method(&mut self, width_method: WidthMethod) {
        self.set_wrap_options(WrapOptions {
            width_method,
            ..self.wrap_options()
        });
    }

    /// Get the current cursor position.
    #[must_use]
    pub fn cursor(&self) -> CursorPosition {
        self.cursor
    }

    /// Linear index of the cursor.
    #[must_use]
    pub fn cursor_index(&self) -> usize {
        self.layout.position_to_index(self.cursor)
    }

    /// Resolve a linear index against the current layout.
    #[must_use]
    pub fn index_to_position(&self, index: usize) -> CursorPosition {
        self.layout.index_to_position(index)
    }

    /// Resolve a position against the current layout.
    #[must_use]
    pub fn position_to_index(&self, pos: CursorPosition) -> usize {
        self.layout.position_to_index(pos)
    }

    /// Set the cursor position (clamped). A selection's active end follows.
    pub fn set_cursor(&mut self, pos: CursorPosition) {
        self.cursor = self.layout.clamp_position(pos);
        self.follow_cursor();
    }

    /// Set the cursor by linear index (clamped). A selection's active end follows.
    pub fn set_cursor_index(&mut self, index: usize) {
        self.cursor = self.layout.index_to_position(index);
        self.follow_cursor();
    }

    /// Move the cursor. Returns whether the position changed.
    ///
    /// While a selection exists its active end tracks the cursor and the
    /// anchor stays put.
    pub fn move_cursor(&mut self, motion: Motion) -> bool {
        let chars: Vec<char> = match motion {
            Motion::WordLeft | Motion::WordRight => self.buffer.to_string().chars().collect(),
            _ => Vec::new(),
        };
        let target = self.layout.apply_motion(&chars, self.cursor, motion);
        let moved = target != self.cursor;
        self.cursor = target;
        self.follow_cursor();
        trace!(?motion, col = target.col, row = target.row, "cursor moved");
        moved
    }

    /// Anchor a selection at the cursor and enter the selecting phase.
    ///
    /// An existing selection keeps its anchor, so releasing and pressing
    /// shift again continues the same range.
    pub fn start_selection(&mut self) {
        if self.selection.is_none() {
            self.selection = Some(Selection::collapsed(self.cursor_index()));
        }
        self.selecting = true;
    }

    /// Leave the selecting phase; the range is kept.
    pub fn end_selection(&mut self) {
        self.selecting = false;
    }

    /// Drop the selection.
    pub fn cancel_selection(&mut self) {
        self.selection = None;
        self.selecting = false;
    }

    /// Select the whole text, cursor at the end.
    pub fn select_all(&mut self) {
        self.select_range(0, self.buffer.len_chars());
    }

    /// Select `anchor..active` (either order), cursor on `active`.
    pub fn select_range(&mut self, anchor: usize, active: usize) {
        let selection = Selection::new(anchor, active).clamped(self.buffer.len_chars());
        self.cursor = self.layout.index_to_position(selection.active);
        self.selection = Some(selection);
        self.selecting = false;
    }

    /// Current selection, empty or not.
    #[must_use]
    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// Check for a non-empty selection.
    #[must_use]
    pub fn has_selection(&self) -> bool {
        self.selection.is_some_and(|sel| !sel.is_empty())
    }

    /// Check if the selecting phase (shift held) is active.
    #[must_use]
    pub fn is_selecting(&self) -> bool {
        self.selecting
    }

    /// Selected text, `None` when there is no selection or it is empty.
    #[must_use]
    pub fn selected_text(&self) -> Option<String> {
        let sel = self.selection?;
        if sel.is_empty() {
            return None;
        }
        Some(self.buffer.slice(sel.range()))
    }

    /// Insert text at the cursor, replacing a non-empty selection.
    ///
    /// Any selection is consumed. The cursor ends after the inserted text.
    /// Returns whether the text changed.
    pub fn insert(&mut self, text: &str) -> bool {
        let index = match self.take_selection_range() {
            Some(range) => {
                let start = range.start;
                self.buffer.remove(range);
                start
            }
            None if text.is_empty() => return false,
            None => self.cursor_index(),
        };
        self.buffer.insert(index, text);
        self.relayout_to(index + text.chars().count());
        true
    }

    /// Replace the selection with `replacement`.
    ///
    /// Without a selection this inserts at the cursor; identical to [`insert`](Self::insert).
    pub fn replace_selection(&mut self, replacement: &str) -> bool {
        self.insert(replacement)
    }

    /// Delete the selection if non-empty. Any selection is consumed.
    pub fn delete_selection(&mut self) -> bool {
        let Some(range) = self.take_selection_range() else {
            return false;
        };
        self.delete_range(range)
    }

    /// Delete the selection, or the character before the cursor.
    pub fn delete_backward(&mut self) -> bool {
        if self.has_selection() {
            return self.delete_selection();
        }
        self.cancel_selection();
        let index = self.cursor_index();
        if index == 0 {
            return false;
        }
        self.delete_range(index - 1..index)
    }

    /// Delete the selection, or the character at the cursor.
    pub fn delete_forward(&mut self) -> bool {
        if self.has_selection() {
            return self.delete_selection();
        }
        self.cancel_selection();
        let index = self.cursor_index();
        if index >= self.buffer.len_chars() {
            return false;
        }
        self.delete_range(index..index + 1)
    }

    /// Delete the selection, or back to the previous word boundary.
    pub fn delete_word_backward(&mut self) -> bool {
        if self.has_selection() {
            return self.delete_selection();
        }
        self.cancel_selection();
        let index = self.cursor_index();
        let chars: Vec<char> = self.buffer.to_string().chars().collect();
        let start = prev_word_boundary(&chars, index);
        self.delete_range(start..index)
    }

    /// Delete the selection, or forward to the next word boundary.
    pub fn delete_word_forward(&mut self) -> bool {
        if self.has_selection() {
            return self.delete_selection();
        }
        self.cancel_selection();
        let index = self.cursor_index();
        let chars: Vec<char> = self.buffer.to_string().chars().collect();
        let end = next_word_boundary(&chars, index);
        self.delete_range(index..end)
    }

    /// Delete a char range; the cursor lands on its start.
    pub fn delete_range(&mut self, range: Range<usize>) -> bool {
        let removed = self.buffer.remove(range.clone());
        if removed.is_empty() {
            return false;
        }
        self.relayout_to(range.start.min(self.buffer.len_chars()));
        true
    }

    // Consume the selection; returns its range when non-empty.
    fn take_selection_range(&mut self) -> Option<Range<usize>> {
        self.selecting = false;
        let sel = self.selection.take()?.clamped(self.buffer.len_chars());
        (!sel.is_empty()).then(|| sel.range())
    }

    fn follow_cursor(&mut self) {
        let index = self.cursor_index();
        if let Some(sel) = &mut self.selection {
            sel.active = index;
        }
    }

    fn relayout_to(&mut self, index: usize) {
        let options = *self.layout.options();
        self.layout = LineLayout::build(&self.buffer.to_string(), &options);
        self.cursor = self.layout.index_to_position(index);
    }
}
