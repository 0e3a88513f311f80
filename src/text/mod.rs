//! Text storage, line wrapping, cursor model and editing.
//!
//! Key types:
//!
//! - [`TextBuffer`]: Rope-backed logical text with a revision counter
//! - [`LineLayout`]: Visual rows produced by wrapping the text to a width
//! - [`CursorPosition`] and [`Selection`]: Cursor and selection on the layout
//! - [`EditBuffer`]: Text, layout and cursor kept consistent across edits
//!
//! # Examples
//!
//! ```
//! use textinput_core::{CursorPosition, LineLayout, WrapOptions};
//!
//! let text = "Firstlongline\n\nSecondveryverylongline";
//! let layout = LineLayout::build(text, &WrapOptions::with_width(3));
//!
//! assert_eq!(layout.index_to_position(15), CursorPosition::new(0, 6));
//! assert_eq!(layout.reconstruct(text), text);
//! ```

mod buffer;
mod cursor;
mod edit;
mod rope;
mod wrap;

pub use buffer::{LINE_SEPARATOR, TextBuffer};
pub use cursor::{CursorPosition, Motion, Selection, next_word_boundary, prev_word_boundary};
pub use edit::EditBuffer;
pub use rope::RopeWrapper;
pub use wrap::{LineLayout, LineRecord, WrapMode, WrapOptions, wrap};
