//! Display width calculation in terminal columns.

use unicode_width::UnicodeWidthStr;

/// Width calculation method for ambiguous-width characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WidthMethod {
    /// POSIX-like wcwidth: ambiguous width = 1.
    #[default]
    WcWidth,
    /// Unicode East Asian Width: ambiguous width = 2.
    Unicode,
}

/// Get the display width of a string in terminal columns using a specific method.
#[must_use]
pub fn display_width_with_method(s: &str, method: WidthMethod) -> usize {
    match method {
        WidthMethod::WcWidth => UnicodeWidthStr::width(s),
        WidthMethod::Unicode => UnicodeWidthStr::width_cjk(s),
    }
}

/// Width of one grapheme cluster placed at display column `col`.
///
/// Tabs advance to the next multiple of `tab_width`, so their width depends
/// on where they start.
#[inline]
#[must_use]
pub fn grapheme_width(grapheme: &str, col: usize, tab_width: usize, method: WidthMethod) -> usize {
    if grapheme == "\t" {
        let tab_width = tab_width.max(1);
        return tab_width - (col % tab_width);
    }
    // Fast path: ASCII printable
    if grapheme.len() == 1 && grapheme.as_bytes()[0].is_ascii_graphic() {
        return 1;
    }
    display_width_with_method(grapheme, method)
}
