//! # Tokenizer/ Lexer
//!
//! Turns an input sequence of bytes from a JSON document into a token stream,
//! and converts numeric token text into floating point values.
pub mod lexer;
pub mod number;
pub mod token;

// Re-exports
pub use lexer::{Lexer, tokenize};
pub use number::{DecimalError, parse_decimal};
pub use token::{Token, TokenKind};
