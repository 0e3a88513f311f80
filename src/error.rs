//! Error types for the text-input core.
//!
//! Editing operations never fail: they clamp or silently reject. Errors only
//! surface from parsing key names and validating configuration.

use std::fmt;

/// Result type alias for text-input operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for text-input operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A key action name outside the known vocabulary.
    UnknownKeyAction(String),
    /// A configuration value that cannot be used (e.g. zero tab width).
    InvalidConfig(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownKeyAction(name) => write!(f, "unknown key action: {name}"),
            Self::InvalidConfig(reason) => write!(f, "invalid configuration: {reason}"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnknownKeyAction("cursor_sideways".to_string());
        assert_eq!(err.to_string(), "unknown key action: cursor_sideways");

        let err = Error::InvalidConfig("tab_width must be non-zero".to_string());
        assert!(err.to_string().contains("tab_width"));
    }

    #[test]
    fn test_error_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&Error::InvalidConfig("x".into()));
    }
}
