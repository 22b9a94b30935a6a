//! Errors raised before extraction runs.

use thiserror::Error;

/// Why an input text was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The text has no bytes at all.
    #[error("Text is empty")]
    Empty,

    /// The text exceeds the accepted size.
    #[error("Text is too large (max {limit} bytes)")]
    TooLarge { limit: usize },

    /// The raw input is not valid UTF-8.
    #[error("Text is not valid UTF-8")]
    InvalidUtf8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(InputError::Empty.to_string(), "Text is empty");
        assert_eq!(
            InputError::TooLarge { limit: 1_000_000 }.to_string(),
            "Text is too large (max 1000000 bytes)"
        );
        assert_eq!(InputError::InvalidUtf8.to_string(), "Text is not valid UTF-8");
    }
}
