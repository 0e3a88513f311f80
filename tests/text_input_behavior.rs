//! Behaviour tests for the text input widget driven through key events.
//!
//! Each test replays the key sequence a user would type and checks text,
//! cursor, focus and the notifications observers saw.

use std::sync::Once;

use textinput_core::{
    CursorPosition, KeyAction, KeyEvent, Notification, NotificationLog, TextInput,
    TextInputConfig, TextInputObserver,
};
use tracing::info;

fn setup_test_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

fn key_down(input: &mut TextInput, action: KeyAction) {
    input.handle_key(KeyEvent::press(action));
}

fn key_up(input: &mut TextInput, action: KeyAction) {
    input.handle_key(KeyEvent::release(action));
}

fn focused_input(config: TextInputConfig, text: &str) -> (TextInput, NotificationLog) {
    let mut input = TextInput::with_text(config, text);
    input.set_focus(true);
    let log = NotificationLog::new();
    input.add_observer(log.clone());
    (input, log)
}

fn validate_count(log: &NotificationLog) -> usize {
    log.count(|n| *n == Notification::TextValidate)
}

// ============================================================================
// Word wrapping
// ============================================================================

#[test]
fn test_wordbreak_fixture() {
    setup_test_logging();
    let text = "Firstlongline\n\nSecondveryverylongline";
    let config = TextInputConfig::new().with_multiline(true).with_wrap_width(3);
    let input = TextInput::with_text(config, text);

    let pos_s = text.chars().position(|c| c == 'S').unwrap();
    info!(rows = input.layout().line_count(), "wrapped fixture");
    assert_eq!(input.index_to_position(pos_s), CursorPosition::new(0, 6));
    assert_eq!(input.layout().reconstruct(&input.text()), text);
}

#[test]
fn test_set_text_keeps_round_trip() {
    setup_test_logging();
    let text = "Firstlongline\n\nSecondveryverylongline";
    let config = TextInputConfig::new().with_multiline(true).with_wrap_width(3);
    let (mut input, log) = focused_input(config, "");

    input.set_text(text);
    assert_eq!(
        log.entries().first(),
        Some(&Notification::TextChanged(text.to_string()))
    );
    assert_eq!(input.layout().reconstruct(&input.text()), text);
}

// ============================================================================
// Enter with a selection
// ============================================================================

#[test]
fn test_selection_enter_singleline() {
    setup_test_logging();
    let text = "singleline";
    let (mut input, log) = focused_input(TextInputConfig::default(), text);
    assert_eq!(input.cursor(), CursorPosition::new(10, 0));

    let steps = 4;
    for (action, expected) in [(KeyAction::Enter, "singleline"), (KeyAction::Backspace, "single")] {
        info!(?action, "overwriting selection");
        key_down(&mut input, KeyAction::Shift);
        for _ in 0..steps {
            key_down(&mut input, KeyAction::CursorLeft);
        }
        key_up(&mut input, KeyAction::Shift);
        assert_eq!(input.cursor(), CursorPosition::new(6, 0));
        assert_eq!(input.text(), text);
        assert_eq!(input.selected_text().as_deref(), Some("line"));

        key_down(&mut input, action);
        assert_eq!(input.text(), expected);
        assert_eq!(input.selection(), None);
        key_down(&mut input, KeyAction::CursorEnd);
    }
    assert_eq!(validate_count(&log), 1);
}

#[test]
fn test_selection_enter_multiline() {
    setup_test_logging();
    let text = "multiline\ntext";
    let config = TextInputConfig::new().with_multiline(true);
    let (mut input, log) = focused_input(config, text);
    assert_eq!(input.cursor(), CursorPosition::new(4, 1));

    key_down(&mut input, KeyAction::Shift);
    key_down(&mut input, KeyAction::CursorUp);
    key_up(&mut input, KeyAction::Shift);
    assert_eq!(input.cursor(), CursorPosition::new(4, 0));
    assert_eq!(input.text(), text);

    key_down(&mut input, KeyAction::Enter);
    assert_eq!(input.text(), "mult\n");
    assert_eq!(input.cursor(), CursorPosition::new(0, 1));
    assert_eq!(input.selection(), None);
    assert!(input.is_focused());
    assert_eq!(validate_count(&log), 1);
    assert_eq!(
        log.entries()[..2],
        [
            Notification::CursorChanged(CursorPosition::new(4, 0)),
            Notification::TextChanged("mult\n".to_string()),
        ]
    );
}

// ============================================================================
// Validation and focus
// ============================================================================

#[test]
fn test_text_validate() {
    setup_test_logging();
    let (mut input, log) = focused_input(TextInputConfig::default(), "");
    assert!(!input.config().multiline);
    assert!(input.config().text_validate_unfocus);

    key_down(&mut input, KeyAction::Enter);
    assert_eq!(validate_count(&log), 1);
    assert!(!input.is_focused());
    assert_eq!(log.entries().last(), Some(&Notification::FocusChanged(false)));

    input.set_text_validate_unfocus(false);
    input.set_focus(true);
    assert!(input.is_focused());

    key_down(&mut input, KeyAction::Enter);
    assert_eq!(validate_count(&log), 2);
    assert!(input.is_focused());
    assert_eq!(input.text(), "");
}

#[test]
fn test_multiline_enter_keeps_focus() {
    setup_test_logging();
    let config = TextInputConfig::new().with_multiline(true);
    let (mut input, log) = focused_input(config, "ab");
    key_down(&mut input, KeyAction::Enter);
    assert_eq!(input.text(), "ab\n");
    assert!(input.is_focused());
    assert_eq!(validate_count(&log), 1);
}

#[test]
fn test_focusable_when_disabled() {
    setup_test_logging();
    let mut input = TextInput::with_text(TextInputConfig::default(), "abc");
    let log = NotificationLog::new();
    input.add_observer(log.clone());
    input.set_disabled(true);

    input.set_focus(true);
    assert!(input.is_focused());
    assert_eq!(log.entries(), vec![Notification::FocusChanged(true)]);

    for action in [
        KeyAction::Char('x'),
        KeyAction::Backspace,
        KeyAction::Enter,
        KeyAction::CursorLeft,
    ] {
        assert!(!input.handle_key(KeyEvent::press(action)));
    }
    assert_eq!(input.text(), "abc");
    assert_eq!(log.entries(), vec![Notification::FocusChanged(true)]);

    input.set_disabled(false);
    assert!(input.handle_key(KeyEvent::char('x')));
    assert_eq!(input.text(), "abcx");
}

// ============================================================================
// Observers mutating the input during validation
// ============================================================================

struct ReplaceOnValidate(&'static str);

impl TextInputObserver for ReplaceOnValidate {
    fn on_text_validate(&mut self, input: &mut TextInput) {
        input.set_text(self.0);
    }
}

struct MultilineOnValidate;

impl TextInputObserver for MultilineOnValidate {
    fn on_text_validate(&mut self, input: &mut TextInput) {
        input.set_multiline(true);
    }
}

struct UnfocusOnValidate;

impl TextInputObserver for UnfocusOnValidate {
    fn on_text_validate(&mut self, input: &mut TextInput) {
        input.set_focus(false);
    }
}

#[test]
fn test_validate_callback_replaces_text() {
    setup_test_logging();
    let mut input = TextInput::with_text(TextInputConfig::default(), "singleline");
    input.set_focus(true);
    input.add_observer(ReplaceOnValidate("replaced"));
    let log = NotificationLog::new();
    input.add_observer(log.clone());

    key_down(&mut input, KeyAction::Enter);
    assert_eq!(input.text(), "replaced");
    assert_eq!(input.cursor(), CursorPosition::new(8, 0));
    assert_eq!(
        log.entries(),
        vec![
            Notification::TextValidate,
            Notification::TextChanged("replaced".to_string()),
            Notification::CursorChanged(CursorPosition::new(8, 0)),
            Notification::FocusChanged(false),
        ]
    );
}

#[test]
fn test_validate_callback_switching_to_multiline_keeps_focus() {
    setup_test_logging();
    let mut input = TextInput::with_text(TextInputConfig::default(), "abc");
    input.set_focus(true);
    input.add_observer(MultilineOnValidate);

    key_down(&mut input, KeyAction::Enter);
    assert!(input.config().multiline);
    assert!(input.is_focused());
    assert_eq!(input.text(), "abc");
}

#[test]
fn test_validate_callback_unfocus_fires_once() {
    setup_test_logging();
    let mut input = TextInput::with_text(TextInputConfig::default(), "abc");
    input.set_focus(true);
    input.add_observer(UnfocusOnValidate);
    let log = NotificationLog::new();
    input.add_observer(log.clone());

    key_down(&mut input, KeyAction::Enter);
    assert!(!input.is_focused());
    assert_eq!(
        log.entries(),
        vec![Notification::TextValidate, Notification::FocusChanged(false)]
    );
}

struct EnterAgainOnValidate {
    pressed: bool,
}

impl TextInputObserver for EnterAgainOnValidate {
    fn on_text_validate(&mut self, input: &mut TextInput) {
        if !self.pressed {
            self.pressed = true;
            input.handle_key(KeyEvent::press(KeyAction::Enter));
        }
    }
}

struct KeepFocusOnValidate;

impl TextInputObserver for KeepFocusOnValidate {
    fn on_text_validate(&mut self, input: &mut TextInput) {
        input.set_text_validate_unfocus(false);
    }
}

#[test]
fn test_nested_enter_unfocus_waits_for_all_validate_observers() {
    setup_test_logging();
    let mut input = TextInput::with_text(TextInputConfig::default(), "abc");
    input.set_focus(true);
    input.add_observer(EnterAgainOnValidate { pressed: false });
    input.add_observer(KeepFocusOnValidate);
    let log = NotificationLog::new();
    input.add_observer(log.clone());

    key_down(&mut input, KeyAction::Enter);
    assert!(input.is_focused());
    assert!(!input.config().text_validate_unfocus);
    assert_eq!(validate_count(&log), 2);
    assert_eq!(
        log.entries(),
        vec![Notification::TextValidate, Notification::TextValidate]
    );
}

// ============================================================================
// Notification ordering
// ============================================================================

#[test]
fn test_typing_notifies_text_then_cursor() {
    setup_test_logging();
    let (mut input, log) = focused_input(TextInputConfig::default(), "");
    input.handle_key(KeyEvent::char('h'));
    input.handle_key(KeyEvent::char('i'));
    key_down(&mut input, KeyAction::CursorLeft);
    assert_eq!(
        log.entries(),
        vec![
            Notification::TextChanged("h".to_string()),
            Notification::CursorChanged(CursorPosition::new(1, 0)),
            Notification::TextChanged("hi".to_string()),
            Notification::CursorChanged(CursorPosition::new(2, 0)),
            Notification::CursorChanged(CursorPosition::new(1, 0)),
        ]
    );
}

#[test]
fn test_noop_keys_do_not_notify() {
    setup_test_logging();
    let (mut input, log) = focused_input(TextInputConfig::default(), "");
    key_down(&mut input, KeyAction::Backspace);
    key_down(&mut input, KeyAction::Delete);
    key_down(&mut input, KeyAction::CursorLeft);
    key_down(&mut input, KeyAction::CursorRight);
    assert!(log.entries().is_empty());
    assert_eq!(input.layout().line_count(), 1);
}
