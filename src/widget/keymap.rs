//! Key event dispatch for [`TextInput`].

use crate::input::{KeyAction, KeyEvent, KeyEventKind, KeyModifiers};
use crate::text::Motion;
use crate::widget::TextInput;
use tracing::{debug, trace};

impl TextInput {
    /// Handle one key event.
    ///
    /// Returns whether the event changed the input's state or fired
    /// validation. Disabled inputs ignore every key press; a Shift release
    /// still ends the selecting phase.
    pub fn handle_key(&mut self, event: KeyEvent) -> bool {
        if event.kind == KeyEventKind::Release {
            // ending the selecting phase mutates nothing, so disabled inputs do it too
            if event.action == KeyAction::Shift {
                self.edit_buffer.end_selection();
                return true;
            }
            return false;
        }

        if self.config.disabled {
            debug!(action = ?event.action, "disabled input ignored key");
            return false;
        }

        match event.action {
            KeyAction::Shift => {
                self.modifier_selection = false;
                self.edit_buffer.start_selection();
                true
            }
            KeyAction::Enter => self.handle_enter(),
            KeyAction::Backspace => self.handle_delete(true, event.ctrl()),
            KeyAction::Delete => self.handle_delete(false, event.ctrl()),
            KeyAction::Char(ch) => self.handle_char(ch, event),
            action if action.is_navigation() => self.handle_navigation(action, event),
            _ => false,
        }
    }

    /// Handle a key given by its environment name, e.g. `"cursor_left"`.
    ///
    /// Unknown names are ignored.
    pub fn handle_key_name(
        &mut self,
        name: &str,
        kind: KeyEventKind,
        repeat: bool,
        modifiers: KeyModifiers,
    ) -> bool {
        let Some(action) = KeyAction::from_name(name) else {
            trace!(name, "ignoring unknown key action");
            return false;
        };
        let mut event = KeyEvent::new(action, kind, modifiers);
        event.repeat = repeat;
        self.handle_key(event)
    }

    fn handle_navigation(&mut self, action: KeyAction, event: KeyEvent) -> bool {
        let motion = match (action, event.ctrl()) {
            (KeyAction::CursorLeft, true) => Motion::WordLeft,
            (KeyAction::CursorLeft, false) => Motion::Left,
            (KeyAction::CursorRight, true) => Motion::WordRight,
            (KeyAction::CursorRight, false) => Motion::Right,
            (KeyAction::CursorHome, true) => Motion::DocumentStart,
            (KeyAction::CursorHome, false) => Motion::Home,
            (KeyAction::CursorEnd, true) => Motion::DocumentEnd,
            (KeyAction::CursorEnd, false) => Motion::End,
            (KeyAction::CursorUp, _) => Motion::Up,
            (KeyAction::CursorDown, _) => Motion::Down,
            (KeyAction::CursorPageUp, _) => Motion::PageUp(self.config.page_rows),
            (KeyAction::CursorPageDown, _) => Motion::PageDown(self.config.page_rows),
            _ => return false,
        };

        let selection_before = self.edit_buffer.selection();
        if event.shift() {
            if selection_before.is_none() {
                self.edit_buffer.start_selection();
                self.edit_buffer.end_selection();
                self.modifier_selection = true;
            }
        } else if self.modifier_selection {
            self.edit_buffer.cancel_selection();
            self.modifier_selection = false;
        }

        let moved = self.edit_buffer.move_cursor(motion);
        self.sync();
        moved || self.edit_buffer.selection() != selection_before
    }

    fn handle_enter(&mut self) -> bool {
        if self.config.multiline {
            self.insert_text("\n");
        } else {
            debug!("single-line input kept text on enter");
            self.cancel_selection();
        }
        self.sync();
        self.validate();
        true
    }

    fn handle_delete(&mut self, backward: bool, word: bool) -> bool {
        if self.config.readonly {
            debug!(backward, "readonly input rejected deletion");
            return false;
        }
        self.modifier_selection = false;
        let changed = match (backward, word) {
            (true, false) => self.edit_buffer.delete_backward(),
            (false, false) => self.edit_buffer.delete_forward(),
            (true, true) => self.edit_buffer.delete_word_backward(),
            (false, true) => self.edit_buffer.delete_word_forward(),
        };
        if changed {
            debug!(backward, word, "text deleted");
        }
        self.sync();
        changed
    }

    fn handle_char(&mut self, ch: char, event: KeyEvent) -> bool {
        if event.ctrl() && ch.eq_ignore_ascii_case(&'a') {
            self.select_all();
            return true;
        }
        if event.ctrl() || event.alt() || event.modifiers.contains(KeyModifiers::SUPER) {
            trace!(?ch, modifiers = ?event.modifiers, "ignoring shortcut");
            return false;
        }
        if ch == '\n' || ch == '\r' {
            return self.handle_enter();
        }
        let mut buf = [0u8; 4];
        self.insert_text(ch.encode_utf8(&mut buf))
    }
}
