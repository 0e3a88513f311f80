//! `textinput_core` - Editing engine of a text input widget
//!
//! Keeps raw text, its word-wrapped line layout and a `(col, row)` cursor
//! mutually consistent under key-driven editing, with single-line and
//! multiline policies, selection, and change notifications.

// Crate-level lint configuration
#![forbid(unsafe_code)]
#![allow(clippy::module_name_repetitions)] // Allow TextInput::TextInputConfig etc
#![allow(clippy::struct_excessive_bools)] // Input configuration is a set of flags
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::inherent_to_string)] // to_string methods are convenient
#![allow(clippy::should_implement_trait)] // from_str naming is intentional
#![allow(clippy::items_after_statements)] // Common pattern in tests

pub mod error;
pub mod input;
pub mod text;
pub mod unicode;
pub mod widget;

// Re-export core types at crate root
pub use error::{Error, Result};
pub use widget::{InputFilter, Notification, NotificationLog, TextInput, TextInputConfig, TextInputObserver};

// Re-export input types
pub use input::{KeyAction, KeyEvent, KeyEventKind, KeyModifiers};

// Re-export text types
pub use text::{
    CursorPosition, EditBuffer, LineLayout, LineRecord, Motion, Selection, TextBuffer, WrapMode,
    WrapOptions,
};
pub use unicode::WidthMethod;
