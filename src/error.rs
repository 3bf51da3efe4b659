//! Error types for the fallible entry points. The parsers themselves report "no match" with
//! `None`; this error only surfaces where a caller asked for a result or an error, such as
//! `FromStr` and [`Color::try_new`](crate::color::Color::try_new).

use thiserror::Error;

/// Failure to turn some input into a color.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum ColorParseError {
    /// The input string was empty or only whitespace.
    #[error("empty color string")]
    Empty,
    /// No grammar accepted the input string.
    #[error("invalid color syntax: {input:?}")]
    InvalidSyntax {
        /// The rejected input, trimmed.
        input: String,
    },
    /// No object parser found all of its required channels.
    #[error("no color model matches the given channels")]
    UnrecognizedObject,
}

impl ColorParseError {
    pub(crate) fn syntax(input: &str) -> ColorParseError {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            ColorParseError::Empty
        } else {
            ColorParseError::InvalidSyntax {
                input: trimmed.to_string(),
            }
        }
    }
}
