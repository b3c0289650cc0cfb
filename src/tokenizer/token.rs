//! # JSON Token
//!
//! Defines possible tokens from scanning a JSON document byte sequence.
use std::fmt::Display;

/// The kind of a token produced by the lexer.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    /// End of the input buffer. A valid terminal token, not an error.
    EndOfInput,

    /* Delimiters */
    /// Opening curly brace
    OpenBrace,

    /// Closing curly brace
    CloseBrace,

    /// Opening square bracket
    OpenBracket,

    /// Closing square bracket
    CloseBracket,

    /// Comma character
    Comma,

    /// Colon character
    Colon,

    /* Values */
    /// String literal, content taken verbatim between the quotes
    StringLiteral,

    /// Numeric literal, raw text not yet converted
    Number,

    /// `true` keyword
    True,

    /// `false` keyword
    False,

    /// `null` keyword
    Null,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EndOfInput => write!(f, "EOF"),
            Self::OpenBrace => write!(f, "{{"),
            Self::CloseBrace => write!(f, "}}"),
            Self::OpenBracket => write!(f, "["),
            Self::CloseBracket => write!(f, "]"),
            Self::Comma => write!(f, ","),
            Self::Colon => write!(f, ":"),
            Self::StringLiteral => write!(f, "StringLiteral"),
            Self::Number => write!(f, "Number"),
            Self::True => write!(f, "True"),
            Self::False => write!(f, "False"),
            Self::Null => write!(f, "Null"),
        }
    }
}

/// A lexical token.
///
/// The raw text is not copied out of the input: `start..end` marks the byte
/// range of the token in the buffer it was scanned from. For a
/// [`TokenKind::StringLiteral`] the range covers the content between the
/// quotes; for a [`TokenKind::Number`] it covers the untouched numeric
/// literal.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Token {
    /// What was scanned
    pub kind: TokenKind,
    /// Offset of the first byte of the raw text
    pub start: usize,
    /// Offset one past the last byte of the raw text
    pub end: usize,
}

impl Token {
    /// Construct a token spanning `start..end`.
    #[must_use]
    pub const fn new(kind: TokenKind, start: usize, end: usize) -> Self {
        Self { kind, start, end }
    }

    /// Resolve the raw text of this token against the buffer it was scanned
    /// from.
    ///
    /// # Panics
    ///
    /// Panics if `input` is not the buffer that produced the token.
    #[must_use]
    pub fn raw<'a>(&self, input: &'a [u8]) -> &'a [u8] {
        &input[self.start..self.end]
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}..{}]", self.kind, self.start, self.end)
    }
}
