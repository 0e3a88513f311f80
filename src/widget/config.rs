//! Widget configuration.
//!
//! All configuration is in-process: a [`TextInputConfig`] is built with
//! `with_*` builders and handed to [`TextInput`](super::TextInput), which
//! consults it at the top of every key dispatch.

use crate::error::{Error, Result};
use crate::text::{WrapMode, WrapOptions};
use crate::unicode::WidthMethod;

/// Restricts what text may be inserted.
///
/// Filters apply to key input and [`TextInput::insert_text`](super::TextInput::insert_text),
/// never to [`TextInput::set_text`](super::TextInput::set_text).
#[derive(Clone, Copy, Debug)]
pub enum InputFilter {
    /// ASCII digits only.
    Int,
    /// Digits and a single decimal point across the whole text.
    Float,
    /// Custom filter receiving the substring and an "is undo" flag.
    Custom(fn(&str, bool) -> String),
}

impl InputFilter {
    /// Filter `substring` about to be inserted into `current`.
    #[must_use]
    pub fn apply(&self, substring: &str, current: &str) -> String {
        match self {
            Self::Int => substring.chars().filter(char::is_ascii_digit).collect(),
            Self::Float => {
                let mut has_point = current.contains('.');
                substring
                    .chars()
                    .filter(|&ch| {
                        if ch == '.' {
                            let keep = !has_point;
                            has_point = true;
                            keep
                        } else {
                            ch.is_ascii_digit()
                        }
                    })
                    .collect()
            }
            Self::Custom(filter) => filter(substring, false),
        }
    }
}

/// Text input configuration.
#[derive(Clone, Copy, Debug)]
pub struct TextInputConfig {
    /// Allow explicit line breaks and wrapping.
    pub multiline: bool,
    /// Drop focus after validation in single-line mode.
    pub text_validate_unfocus: bool,
    /// Ignore all key events.
    pub disabled: bool,
    /// Allow navigation and selection but no text mutation.
    pub readonly: bool,
    /// Wrap width in columns (0 = unbounded).
    pub wrap_width: usize,
    pub wrap_mode: WrapMode,
    pub tab_width: usize,
    pub width_method: WidthMethod,
    /// Rows moved by page up/down.
    pub page_rows: usize,
    pub input_filter: Option<InputFilter>,
}

impl Default for TextInputConfig {
    fn default() -> Self {
        Self {
            multiline: false,
            text_validate_unfocus: true,
            disabled: false,
            readonly: false,
            wrap_width: 0,
            wrap_mode: WrapMode::Word,
            tab_width: 4,
            width_method: WidthMethod::WcWidth,
            page_rows: 10,
            input_filter: None,
        }
    }
}

impl TextInputConfig {
    /// Default single-line configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set multiline mode.
    #[must_use]
    pub fn with_multiline(mut self, multiline: bool) -> Self {
        self.multiline = multiline;
        self
    }

    /// Set whether validation drops focus.
    #[must_use]
    pub fn with_text_validate_unfocus(mut self, unfocus: bool) -> Self {
        self.text_validate_unfocus = unfocus;
        self
    }

    /// Set the disabled flag.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the readonly flag.
    #[must_use]
    pub fn with_readonly(mut self, readonly: bool) -> Self {
        self.readonly = readonly;
        self
    }

    /// Set the wrap width.
    #[must_use]
    pub fn with_wrap_width(mut self, width: usize) -> Self {
        self.wrap_width = width;
        self
    }

    /// Set the wrap mode.
    #[must_use]
    pub fn with_wrap_mode(mut self, mode: WrapMode) -> Self {
        self.wrap_mode = mode;
        self
    }

    /// Set the tab width.
    #[must_use]
    pub fn with_tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width;
        self
    }

    /// Set the width calculation method.
    #[must_use]
    pub fn with_width_method(mut self, method: WidthMethod) -> Self {
        self.width_method = method;
        self
    }

    /// Set the page size for page up/down.
    #[must_use]
    pub fn with_page_rows(mut self, rows: usize) -> Self {
        self.page_rows = rows;
        self
    }

    /// Set the input filter.
    #[must_use]
    pub fn with_input_filter(mut self, filter: InputFilter) -> Self {
        self.input_filter = Some(filter);
        self
    }

    /// Check values that cannot be used as given.
    pub fn validate(&self) -> Result<()> {
        if self.tab_width == 0 {
            return Err(Error::InvalidConfig("tab_width must be non-zero".to_string()));
        }
        if self.page_rows == 0 {
            return Err(Error::InvalidConfig("page_rows must be non-zero".to_string()));
        }
        Ok(())
    }

    /// Copy with unusable values replaced by the defaults.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        let defaults = Self::default();
        if self.tab_width == 0 {
            self.tab_width = defaults.tab_width;
        }
        if self.page_rows == 0 {
            self.page_rows = defaults.page_rows;
        }
        self
    }

    /// Layout options implied by this configuration.
    ///
    /// Single-line inputs never wrap.
    #[must_use]
    pub fn wrap_options(&self) -> WrapOptions {
        WrapOptions {
            width: self.wrap_width,
            mode: if self.multiline {
                self.wrap_mode
            } else {
                WrapMode::None
            },
            tab_width: self.tab_width.max(1),
            width_method: self.width_method,
        }
    }
}
