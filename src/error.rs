//! # Parse Errors
//!
//! Every way the tokenizer or the parser can reject an input. Errors carry the
//! byte offset they were detected at, plus the offending byte, token, or text
//! where there is one.
use std::error::Error;
use std::fmt;

use crate::tokenizer::TokenKind;

/// Represents errors that can occur while parsing a JSON document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /* Lexical */
    /// A byte that cannot start any token.
    UnknownByte {
        /// The offending byte
        byte: u8,
        /// Where it was found
        offset: usize,
    },
    /// End of input was reached before the closing quote of a string.
    UnterminatedString {
        /// Offset of the opening quote
        offset: usize,
    },
    /// A numeric literal with a second `.`.
    MalformedNumber {
        /// Offset of the second dot
        offset: usize,
    },
    /// A `t`, `f` or `n` that does not spell `true`, `false` or `null`.
    UnexpectedKeyword {
        /// The keyword implied by the first byte
        expected: &'static str,
        /// The text actually found, through the first mismatching byte
        found: String,
        /// Offset of the keyword start
        offset: usize,
    },

    /* Syntactic */
    /// An object member did not start with a string label.
    ExpectedLabel {
        /// The token found instead
        found: TokenKind,
        /// Where it was found
        offset: usize,
    },
    /// An object label was not followed by `:`.
    ExpectedColon {
        /// The token found instead
        found: TokenKind,
        /// Where it was found
        offset: usize,
    },
    /// A container member was followed by neither `,` nor the closing token.
    ExpectedCommaOrClose {
        /// The closing token of the enclosing container
        close: TokenKind,
        /// The token found instead
        found: TokenKind,
        /// Where it was found
        offset: usize,
    },
    /// A value was expected but a structural token or end of input was found.
    UnexpectedToken {
        /// The token found instead
        found: TokenKind,
        /// Where it was found
        offset: usize,
    },

    /// Containers nested deeper than the parser's limit.
    NestingTooDeep {
        /// The configured limit
        limit: usize,
        /// Offset of the container that crossed it
        offset: usize,
    },

    /* Conversion */
    /// A numeric literal that the decimal converter rejected, or whose value
    /// does not fit in a finite `f64`.
    InvalidNumber {
        /// The raw literal
        literal: String,
        /// Offset of the literal
        offset: usize,
    },
}

impl ParseError {
    /// Byte offset into the input where the error was detected.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::UnknownByte { offset, .. }
            | Self::UnterminatedString { offset }
            | Self::MalformedNumber { offset }
            | Self::UnexpectedKeyword { offset, .. }
            | Self::ExpectedLabel { offset, .. }
            | Self::ExpectedColon { offset, .. }
            | Self::ExpectedCommaOrClose { offset, .. }
            | Self::UnexpectedToken { offset, .. }
            | Self::NestingTooDeep { offset, .. }
            | Self::InvalidNumber { offset, .. } => *offset,
        }
    }
}

impl Error for ParseError {}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownByte { byte, offset } => {
                write!(f, "Unknown byte {:?} at {offset}", char::from(*byte))
            }
            Self::UnterminatedString { offset } => write!(
                f,
                "Unterminated string starting at {offset}: expected closing double quote, found EOF"
            ),
            Self::MalformedNumber { offset } => {
                write!(f, "Malformed number: second dot at {offset}")
            }
            Self::UnexpectedKeyword {
                expected,
                found,
                offset,
            } => write!(f, "Expected `{expected}`, got `{found}` at {offset}"),
            Self::ExpectedLabel { found, offset } => {
                write!(f, "Expected string label, got {found} at {offset}")
            }
            Self::ExpectedColon { found, offset } => {
                write!(f, "Expected `:`, got {found} at {offset}")
            }
            Self::ExpectedCommaOrClose {
                close,
                found,
                offset,
            } => write!(f, "Expected `,` or `{close}`, got {found} at {offset}"),
            Self::UnexpectedToken { found, offset } => {
                write!(f, "Unexpected token {found} at {offset}")
            }
            Self::NestingTooDeep { limit, offset } => {
                write!(f, "Nesting deeper than {limit} at {offset}")
            }
            Self::InvalidNumber { literal, offset } => {
                write!(f, "Invalid number `{literal}` at {offset}")
            }
        }
    }
}
