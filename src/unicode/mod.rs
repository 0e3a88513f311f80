//! Unicode utilities for grapheme handling and display width.

mod grapheme;
mod width;

pub use grapheme::{GraphemeSpan, grapheme_spans};
pub use width::{WidthMethod, display_width_with_method, grapheme_width};
