//! Keyboard event types.

use crate::error::{Error, Result};
use bitflags::bitflags;
use std::str::FromStr;

bitflags! {
    /// Keyboard modifier flags.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct KeyModifiers: u8 {
        /// Shift key.
        const SHIFT = 0b0000_0001;
        /// Alt/Option key.
        const ALT = 0b0000_0010;
        /// Control key.
        const CTRL = 0b0000_0100;
        /// Super/Meta/Windows key.
        const SUPER = 0b0000_1000;
    }
}

/// Action carried by a key event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyAction {
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    CursorHome,
    CursorEnd,
    CursorPageUp,
    CursorPageDown,
    /// Shift pressed or released on its own (selection start/end).
    Shift,
    /// Enter/Return: newline in multiline mode, validation always.
    Enter,
    Backspace,
    Delete,
    /// A printable character (includes space).
    Char(char),
}

impl KeyAction {
    /// Parse an action name from the environment's key vocabulary.
    ///
    /// Accepts `cursor_left`, `cursor_right`, `cursor_up`, `cursor_down`,
    /// `cursor_home`, `cursor_end`, `cursor_pgup`, `cursor_pgdown`, `shift`
    /// (and `shift_L` / `shift_R`), `enter`, `backspace`, `del` / `delete`,
    /// and any single non-control character.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let action = match name {
            "cursor_left" => Self::CursorLeft,
            "cursor_right" => Self::CursorRight,
            "cursor_up" => Self::CursorUp,
            "cursor_down" => Self::CursorDown,
            "cursor_home" => Self::CursorHome,
            "cursor_end" => Self::CursorEnd,
            "cursor_pgup" => Self::CursorPageUp,
            "cursor_pgdown" => Self::CursorPageDown,
            "shift" | "shift_L" | "shift_R" => Self::Shift,
            "enter" => Self::Enter,
            "backspace" => Self::Backspace,
            "del" | "delete" => Self::Delete,
            _ => {
                let mut chars = name.chars();
                let ch = chars.next()?;
                if chars.next().is_some() || ch.is_control() {
                    return None;
                }
                Self::Char(ch)
            }
        };
        Some(action)
    }

    /// Check if this is a cursor navigation action.
    #[must_use]
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::CursorLeft
                | Self::CursorRight
                | Self::CursorUp
                | Self::CursorDown
                | Self::CursorHome
                | Self::CursorEnd
                | Self::CursorPageUp
                | Self::CursorPageDown
        )
    }
}

impl FromStr for KeyAction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| Error::UnknownKeyAction(s.to_string()))
    }
}

/// Whether the key went down or up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum KeyEventKind {
    #[default]
    Press,
    Release,
}

/// A keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub action: KeyAction,
    pub kind: KeyEventKind,
    /// Auto-repeat of a held key.
    pub repeat: bool,
    /// Modifier keys held.
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    /// Create a new key event.
    #[must_use]
    pub fn new(action: KeyAction, kind: KeyEventKind, modifiers: KeyModifiers) -> Self {
        Self {
            action,
            kind,
            repeat: false,
            modifiers,
        }
    }

    /// Key press with no modifiers.
    #[must_use]
    pub fn press(action: KeyAction) -> Self {
        Self::new(action, KeyEventKind::Press, KeyModifiers::empty())
    }

    /// Key release with no modifiers.
    #[must_use]
    pub fn release(action: KeyAction) -> Self {
        Self::new(action, KeyEventKind::Release, KeyModifiers::empty())
    }

    /// Create a character key press.
    #[must_use]
    pub fn char(c: char) -> Self {
        Self::press(KeyAction::Char(c))
    }

    /// Create a Ctrl+action press.
    #[must_use]
    pub fn with_ctrl(action: KeyAction) -> Self {
        Self::new(action, KeyEventKind::Press, KeyModifiers::CTRL)
    }

    /// Create a Shift+action press.
    #[must_use]
    pub fn with_shift(action: KeyAction) -> Self {
        Self::new(action, KeyEventKind::Press, KeyModifiers::SHIFT)
    }

    /// Mark the event as an auto-repeat.
    #[must_use]
    pub fn repeated(mut self) -> Self {
        self.repeat = true;
        self
    }

    /// Check if Shift is held.
    #[must_use]
    pub fn shift(&self) -> bool {
        self.modifiers.contains(KeyModifiers::SHIFT)
    }

    /// Check if Ctrl is held.
    #[must_use]
    pub fn ctrl(&self) -> bool {
        self.modifiers.contains(KeyModifiers::CTRL)
    }

    /// Check if Alt is held.
    #[must_use]
    pub fn alt(&self) -> bool {
        self.modifiers.contains(KeyModifiers::ALT)
    }
}
