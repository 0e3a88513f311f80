//! Text input widget core.
//!
//! [`TextInput`] wraps an [`EditBuffer`] with the policies of a text input
//! field: single-line vs multiline, disabled and readonly flags, input
//! filters, focus, and the notifications observers receive when text,
//! cursor or focus change.
//!
//! # Examples
//!
//! ```
//! use textinput_core::{KeyAction, KeyEvent, Notification, NotificationLog, TextInput, TextInputConfig};
//!
//! let mut input = TextInput::with_text(TextInputConfig::default(), "singleline");
//! let log = NotificationLog::new();
//! input.add_observer(log.clone());
//! input.set_focus(true);
//!
//! input.handle_key(KeyEvent::press(KeyAction::Enter));
//! assert_eq!(input.text(), "singleline");
//! assert!(!input.is_focused());
//! assert!(log.entries().contains(&Notification::TextValidate));
//! ```

mod config;
mod keymap;
mod observer;

pub use config::{InputFilter, TextInputConfig};
pub use observer::{Notification, NotificationLog, TextInputObserver};

use crate::error::Result;
use crate::text::{CursorPosition, EditBuffer, LINE_SEPARATOR, LineLayout, Selection};
use std::collections::VecDeque;
use std::fmt;
use tracing::debug;

/// Entry in the delivery queue.
#[derive(Debug)]
enum Pending {
    Notify(Notification),
    /// Apply `text_validate_unfocus` once the preceding validation was delivered.
    UnfocusAfterValidate,
}

/// A text input field's editing state.
///
/// All state lives on one thread; observers are plain boxed trait objects
/// and are called synchronously.
pub struct TextInput {
    edit_buffer: EditBuffer,
    config: TextInputConfig,
    focused: bool,
    observers: Vec<Box<dyn TextInputObserver>>,
    pending: VecDeque<Pending>,
    delivering: bool,
    /// Selection was started by a shift modifier on a navigation key.
    modifier_selection: bool,
    reported_revision: u64,
    reported_text: String,
    reported_cursor: CursorPosition,
}

impl fmt::Debug for TextInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextInput")
            .field("text", &self.reported_text)
            .field("cursor", &self.edit_buffer.cursor())
            .field("selection", &self.edit_buffer.selection())
            .field("focused", &self.focused)
            .field("config", &self.config)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new(TextInputConfig::default())
    }
}

impl TextInput {
    /// Create an empty input. Unusable config values are replaced by defaults.
    #[must_use]
    pub fn new(config: TextInputConfig) -> Self {
        Self::with_text(config, "")
    }

    /// Create an empty input, rejecting unusable config values.
    pub fn try_new(config: TextInputConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Create an input holding `text`, cursor at the end.
    #[must_use]
    pub fn with_text(config: TextInputConfig, text: &str) -> Self {
        let config = config.normalized();
        let edit_buffer = EditBuffer::with_options(text, config.wrap_options());
        Self {
            reported_revision: edit_buffer.buffer().revision(),
            reported_text: text.to_string(),
            reported_cursor: edit_buffer.cursor(),
            edit_buffer,
            config,
            focused: false,
            observers: Vec::new(),
            pending: VecDeque::new(),
            delivering: false,
            modifier_selection: false,
        }
    }

    /// Register an observer. Observers are called in registration order.
    pub fn add_observer(&mut self, observer: impl TextInputObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    // ============================================
    // Accessors
    // ============================================

    /// Current text.
    #[must_use]
    pub fn text(&self) -> String {
        self.edit_buffer.text()
    }

    /// Cursor position on the wrapped layout.
    #[must_use]
    pub fn cursor(&self) -> CursorPosition {
        self.edit_buffer.cursor()
    }

    /// Linear index of the cursor.
    #[must_use]
    pub fn cursor_index(&self) -> usize {
        self.edit_buffer.cursor_index()
    }

    /// Current selection, empty or not.
    #[must_use]
    pub fn selection(&self) -> Option<Selection> {
        self.edit_buffer.selection()
    }

    /// Selected text, `None` when nothing is selected.
    #[must_use]
    pub fn selected_text(&self) -> Option<String> {
        self.edit_buffer.selected_text()
    }

    /// Check whether the input has focus.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Live configuration.
    #[must_use]
    pub fn config(&self) -> &TextInputConfig {
        &self.config
    }

    /// Underlying edit buffer.
    #[must_use]
    pub fn edit_buffer(&self) -> &EditBuffer {
        &self.edit_buffer
    }

    /// Current wrapped layout.
    #[must_use]
    pub fn layout(&self) -> &LineLayout {
        self.edit_buffer.layout()
    }

    /// Resolve a linear index against the current layout.
    #[must_use]
    pub fn index_to_position(&self, index: usize) -> CursorPosition {
        self.edit_buffer.index_to_position(index)
    }

    /// Resolve a position against the current layout.
    #[must_use]
    pub fn position_to_index(&self, pos: CursorPosition) -> usize {
        self.edit_buffer.position_to_index(pos)
    }

    // ============================================
    // Inbound state changes
    // ============================================

    /// Replace the text. The cursor moves to the end; filters do not apply.
    pub fn set_text(&mut self, text: &str) {
        if self.edit_buffer.text() == text {
            return;
        }
        self.modifier_selection = false;
        self.edit_buffer.set_text(text);
        debug!(chars = self.edit_buffer.len_chars(), "text replaced");
        self.sync();
    }

    /// Change focus. Works on disabled inputs; fires only on change.
    ///
    /// Losing focus ends a shift-held selection phase but keeps the range.
    pub fn set_focus(&mut self, focused: bool) {
        if self.focused == focused {
            return;
        }
        self.focused = focused;
        if !focused {
            self.edit_buffer.end_selection();
        }
        debug!(focused, "focus changed");
        self.notify(Notification::FocusChanged(focused));
    }

    /// Set the disabled flag. Focus is unaffected.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.config.disabled = disabled;
    }

    /// Set the readonly flag.
    pub fn set_readonly(&mut self, readonly: bool) {
        self.config.readonly = readonly;
    }

    /// Set whether validation drops focus in single-line mode.
    pub fn set_text_validate_unfocus(&mut self, unfocus: bool) {
        self.config.text_validate_unfocus = unfocus;
    }

    /// Set or clear the input filter.
    pub fn set_input_filter(&mut self, filter: Option<InputFilter>) {
        self.config.input_filter = filter;
    }

    /// Switch between single-line and multiline. Existing text is kept.
    pub fn set_multiline(&mut self, multiline: bool) {
        self.config.multiline = multiline;
        self.relayout();
    }

    /// Change the wrap width in columns (0 = unbounded).
    pub fn set_width(&mut self, width: usize) {
        self.config.wrap_width = width;
        self.relayout();
    }

    /// Replace the whole configuration. Unusable values are replaced by defaults.
    pub fn set_config(&mut self, config: TextInputConfig) {
        self.config = config.normalized();
        self.relayout();
    }

    /// Move the cursor (clamped).
    pub fn set_cursor(&mut self, pos: CursorPosition) {
        self.edit_buffer.set_cursor(pos);
        self.sync();
    }

    /// Move the cursor to a linear index (clamped).
    pub fn set_cursor_index(&mut self, index: usize) {
        self.edit_buffer.set_cursor_index(index);
        self.sync();
    }

    /// Select the whole text, cursor at the end.
    pub fn select_all(&mut self) {
        self.modifier_selection = false;
        self.edit_buffer.select_all();
        self.sync();
    }

    /// Select `start..end`, cursor on `end`.
    pub fn select_text(&mut self, start: usize, end: usize) {
        self.modifier_selection = false;
        self.edit_buffer.select_range(start, end);
        self.sync();
    }

    /// Drop the selection.
    pub fn cancel_selection(&mut self) {
        self.modifier_selection = false;
        self.edit_buffer.cancel_selection();
    }

    /// Insert text at the cursor as if typed, replacing a non-empty selection.
    ///
    /// Rejected when readonly. The input filter applies; in single-line mode
    /// a lone newline is rejected and other newlines become spaces. A
    /// selection is deleted even when the filter leaves nothing to insert.
    /// Returns whether the text changed.
    pub fn insert_text(&mut self, text: &str) -> bool {
        if self.config.readonly {
            debug!("readonly input rejected insertion");
            return false;
        }
        if !self.config.multiline && text == "\n" {
            debug!("single-line input rejected newline");
            return false;
        }
        let mut text = match &self.config.input_filter {
            Some(filter) => filter.apply(text, &self.edit_buffer.text()),
            None => text.to_string(),
        };
        if !self.config.multiline && text.contains(LINE_SEPARATOR) {
            text = text.replace(LINE_SEPARATOR, " ");
        }
        if text.is_empty() && !self.edit_buffer.has_selection() {
            return false;
        }
        self.modifier_selection = false;
        let changed = self.edit_buffer.insert(&text);
        debug!(chars = text.chars().count(), "text inserted");
        self.sync();
        changed
    }

    // ============================================
    // Notifications
    // ============================================

    fn relayout(&mut self) {
        self.edit_buffer.set_wrap_options(self.config.wrap_options());
        self.sync();
    }

    /// Report text then cursor changes since the last report.
    fn sync(&mut self) {
        let revision = self.edit_buffer.buffer().revision();
        if revision != self.reported_revision {
            self.reported_revision = revision;
            let text = self.edit_buffer.text();
            if text != self.reported_text {
                self.reported_text.clone_from(&text);
                self.notify(Notification::TextChanged(text));
            }
        }
        let cursor = self.edit_buffer.cursor();
        if cursor != self.reported_cursor {
            self.reported_cursor = cursor;
            self.notify(Notification::CursorChanged(cursor));
        }
    }

    /// Queue a notification and deliver the queue unless already delivering.
    fn notify(&mut self, notification: Notification) {
        self.enqueue(Pending::Notify(notification));
    }

    /// Queue validation followed by the unfocus check.
    ///
    /// The check runs after every observer has seen the validation, even when
    /// validation is raised from inside another callback.
    fn validate(&mut self) {
        self.pending.push_back(Pending::Notify(Notification::TextValidate));
        self.enqueue(Pending::UnfocusAfterValidate);
    }

    fn enqueue(&mut self, entry: Pending) {
        self.pending.push_back(entry);
        if self.delivering {
            return;
        }
        self.delivering = true;
        let mut observers = std::mem::take(&mut self.observers);
        while let Some(entry) = self.pending.pop_front() {
            let notification = match entry {
                Pending::Notify(notification) => notification,
                Pending::UnfocusAfterValidate => {
                    // observers may have changed config or focus
                    if !self.config.multiline && self.config.text_validate_unfocus && self.focused {
                        self.set_focus(false);
                    }
                    continue;
                }
            };
            debug!(?notification, observers = observers.len(), "delivering notification");
            for observer in &mut observers {
                match &notification {
                    Notification::TextChanged(text) => observer.on_text_changed(text),
                    Notification::CursorChanged(cursor) => observer.on_cursor_changed(*cursor),
                    Notification::FocusChanged(focused) => observer.on_focus_changed(*focused),
                    Notification::TextValidate => observer.on_text_validate(self),
                }
            }
        }
        observers.append(&mut self.observers);
        self.observers = observers;
        self.delivering = false;
    }
}
