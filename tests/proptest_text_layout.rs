//! Property-based tests for wrapping, cursor mapping and key handling.
//!
//! Uses proptest to verify invariants that must hold across all valid inputs.

use proptest::prelude::*;
use textinput_core::text::wrap;
use textinput_core::{
    KeyAction, KeyEvent, KeyEventKind, KeyModifiers, LineLayout, TextInput, TextInputConfig,
    WrapMode, WrapOptions,
};

// ============================================================================
// Strategies
// ============================================================================

/// Text mixing words, spaces, newlines, tabs, CJK and combining marks.
fn input_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "a", "b", "word", " ", "  ", "\n", "\t", "中", "文", "e\u{301}", "👍", "long_identifier",
        ]),
        0..40,
    )
    .prop_map(|parts| parts.concat())
}

fn wrap_mode() -> impl Strategy<Value = WrapMode> {
    prop::sample::select(vec![WrapMode::None, WrapMode::Char, WrapMode::Word])
}

fn wrap_options() -> impl Strategy<Value = WrapOptions> {
    (0usize..12, wrap_mode(), 1usize..9).prop_map(|(width, mode, tab_width)| WrapOptions {
        width,
        mode,
        tab_width,
        ..WrapOptions::default()
    })
}

fn key_event() -> impl Strategy<Value = KeyEvent> {
    let action = prop::sample::select(vec![
        KeyAction::CursorLeft,
        KeyAction::CursorRight,
        KeyAction::CursorUp,
        KeyAction::CursorDown,
        KeyAction::CursorHome,
        KeyAction::CursorEnd,
        KeyAction::CursorPageUp,
        KeyAction::CursorPageDown,
        KeyAction::Shift,
        KeyAction::Enter,
        KeyAction::Backspace,
        KeyAction::Delete,
        KeyAction::Char('x'),
        KeyAction::Char(' '),
        KeyAction::Char('中'),
        KeyAction::Char('\n'),
    ]);
    let kind = prop::sample::select(vec![KeyEventKind::Press, KeyEventKind::Release]);
    let modifiers = prop::sample::select(vec![
        KeyModifiers::empty(),
        KeyModifiers::SHIFT,
        KeyModifiers::CTRL,
    ]);
    (action, kind, modifiers).prop_map(|(action, kind, modifiers)| KeyEvent::new(action, kind, modifiers))
}

// ============================================================================
// Layout Properties
// ============================================================================

proptest! {
    /// Rebuilding text from the rows reproduces it exactly.
    #[test]
    fn layout_round_trips(text in input_text(), options in wrap_options()) {
        let layout = LineLayout::build(&text, &options);
        prop_assert_eq!(layout.reconstruct(&text), text);
    }

    /// Wrapping is deterministic.
    #[test]
    fn wrap_is_deterministic(text in input_text(), options in wrap_options()) {
        prop_assert_eq!(wrap(&text, &options), wrap(&text, &options));
    }

    /// Rows are contiguous and cover every char.
    #[test]
    fn rows_cover_text(text in input_text(), options in wrap_options()) {
        let layout = LineLayout::build(&text, &options);
        prop_assert!(layout.line_count() >= 1);
        let mut expected_start = 0;
        for line in layout.lines() {
            prop_assert!(line.start <= line.end);
            if line.is_wrap {
                prop_assert_eq!(line.start, expected_start);
            } else if line.start != 0 {
                prop_assert_eq!(line.start, expected_start + 1, "explicit rows skip one separator");
            }
            expected_start = line.end;
        }
        prop_assert_eq!(expected_start, text.chars().count());
    }

    /// Rows never exceed the wrap width unless holding a single grapheme.
    #[test]
    fn rows_fit_width(text in input_text(), width in 2usize..12) {
        let options = WrapOptions { width, mode: WrapMode::Char, ..WrapOptions::default() };
        let layout = LineLayout::build(&text, &options);
        for (row, line) in layout.lines().iter().enumerate() {
            let single = layout
                .line_text(&text, row)
                .is_some_and(|s| unicode_segmentation_count(&s) <= 1);
            prop_assert!(line.width <= width || single, "row {} is {} wide", row, line.width);
        }
    }

    /// index_to_position and position_to_index are inverses.
    #[test]
    fn position_inverse(text in input_text(), options in wrap_options()) {
        let layout = LineLayout::build(&text, &options);
        for index in 0..=text.chars().count() {
            let pos = layout.index_to_position(index);
            prop_assert!(pos.row < layout.line_count());
            prop_assert!(pos.col <= layout.line_len(pos.row));
            prop_assert_eq!(layout.position_to_index(pos), index);
        }
    }
}

fn unicode_segmentation_count(s: &str) -> usize {
    textinput_core::unicode::grapheme_spans(s).len()
}

// ============================================================================
// Key Handling Properties
// ============================================================================

proptest! {
    /// Any key sequence leaves the cursor and selection inside the text.
    #[test]
    fn keys_keep_state_in_bounds(
        text in input_text(),
        multiline in any::<bool>(),
        width in 0usize..10,
        keys in prop::collection::vec(key_event(), 0..60),
    ) {
        let config = TextInputConfig::new().with_multiline(multiline).with_wrap_width(width);
        let mut input = TextInput::with_text(config, &text);
        for key in keys {
            input.handle_key(key);
            let len = input.text().chars().count();
            let cursor = input.cursor();
            let layout = input.layout();
            prop_assert!(cursor.row < layout.line_count());
            prop_assert!(cursor.col <= layout.line_len(cursor.row));
            prop_assert!(input.cursor_index() <= len);
            if let Some(sel) = input.selection() {
                prop_assert!(sel.end() <= len);
            }
            prop_assert_eq!(layout.reconstruct(&input.text()), input.text());
        }
    }

    /// Single-line inputs never gain a newline from key events.
    #[test]
    fn single_line_never_gets_newline(keys in prop::collection::vec(key_event(), 0..60)) {
        let mut input = TextInput::default();
        for key in keys {
            input.handle_key(key);
        }
        prop_assert!(!input.text().contains('\n'));
        prop_assert_eq!(input.layout().line_count(), 1);
    }
}
