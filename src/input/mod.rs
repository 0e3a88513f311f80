//! Key events consumed by the text-input core.
//!
//! The surrounding UI framework translates its native keyboard events into
//! [`KeyEvent`]s: an action from a fixed vocabulary, press/release, a repeat
//! flag and the held modifiers.

mod keyboard;

pub use keyboard::{KeyAction, KeyEvent, KeyEventKind, KeyModifiers};
