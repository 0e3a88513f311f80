//! Notifications emitted by a [`TextInput`].

use crate::text::CursorPosition;
use crate::widget::TextInput;
use std::cell::RefCell;
use std::rc::Rc;

/// A state change reported to observers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notification {
    TextChanged(String),
    CursorChanged(CursorPosition),
    FocusChanged(bool),
    TextValidate,
}

/// Receiver of [`TextInput`] notifications.
///
/// All methods default to no-ops. Notifications are delivered in order and
/// never nested: anything raised from inside a callback is queued and
/// delivered after that callback returns.
pub trait TextInputObserver {
    fn on_text_changed(&mut self, _text: &str) {}

    fn on_cursor_changed(&mut self, _cursor: CursorPosition) {}

    fn on_focus_changed(&mut self, _focused: bool) {}

    /// Called when the validate key is pressed.
    ///
    /// The input may be mutated freely; the enter handler re-reads its state
    /// after this returns.
    fn on_text_validate(&mut self, _input: &mut TextInput) {}
}

/// Observer recording every notification into a shared list.
#[derive(Clone, Debug, Default)]
pub struct NotificationLog {
    entries: Rc<RefCell<Vec<Notification>>>,
}

impl NotificationLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of recorded notifications.
    #[must_use]
    pub fn entries(&self) -> Vec<Notification> {
        self.entries.borrow().clone()
    }

    /// Remove and return recorded notifications.
    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.entries.borrow_mut())
    }

    /// Count notifications matching `pred`.
    #[must_use]
    pub fn count(&self, pred: impl Fn(&Notification) -> bool) -> usize {
        self.entries.borrow().iter().filter(|n| pred(n)).count()
    }

    fn push(&self, notification: Notification) {
        self.entries.borrow_mut().push(notification);
    }
}

impl TextInputObserver for NotificationLog {
    fn on_text_changed(&mut self, text: &str) {
        self.push(Notification::TextChanged(text.to_string()));
    }

    fn on_cursor_changed(&mut self, cursor: CursorPosition) {
        self.push(Notification::CursorChanged(cursor));
    }

    fn on_focus_changed(&mut self, focused: bool) {
        self.push(Notification::FocusChanged(focused));
    }

    fn on_text_validate(&mut self, _input: &mut TextInput) {
        self.push(Notification::TextValidate);
    }
}
