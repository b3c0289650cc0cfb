/*!
# JSON Parser

Recursive-descent parser that drives the [`Lexer`] one token at a time and
builds a [`Node`] tree. Every token is consumed exactly once by one grammar
rule; there is no backtracking and no lookahead beyond the token in hand.

## Examples

A [`Parser`] owns its input and is consumed by [`Parser::parse`]:

```rust
use haversine::json::{Node, Parser};

let parser = Parser::new(br#"{"hello": "world"}"#.to_vec());
let root = parser.parse().expect("valid document");
assert_eq!(root.get("hello").and_then(Node::as_str), Some("world"));
```

## Errors

Any lexical or syntactic problem aborts the whole parse with a
[`ParseError`]; no partial tree is returned:

```rust
use haversine::ParseError;
use haversine::json::parse;
use haversine::tokenizer::TokenKind;

let result = parse(b"[1, 2");
assert!(matches!(
    result,
    Err(ParseError::ExpectedCommaOrClose { found: TokenKind::EndOfInput, .. })
));
```
*/
use log::trace;
use std::collections::HashMap;
use std::io::{self, Read};

use crate::error::ParseError;
use crate::json::Node;
use crate::tokenizer::{Lexer, Token, TokenKind, parse_decimal};

/// Default limit on how deeply arrays and objects may nest.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Parser for turning a JSON byte buffer into a [`Node`] tree.
#[derive(Debug)]
pub struct Parser<B> {
    lexer: Lexer<B>,
    /// Containers currently open
    depth: usize,
    max_depth: usize,
}

impl Parser<Vec<u8>> {
    /// Read all of `reader` into memory and construct a parser over it.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised while reading.
    pub fn from_reader<R: Read>(mut reader: R) -> io::Result<Self> {
        let mut buffer = Vec::new();
        reader.read_to_end(&mut buffer)?;
        Ok(Self::new(buffer))
    }
}

impl<B: AsRef<[u8]>> Parser<B> {
    /// Construct a parser that owns `input`.
    pub const fn new(input: B) -> Self {
        Self::with_max_depth(input, DEFAULT_MAX_DEPTH)
    }

    /// Construct a parser that rejects containers nested deeper than
    /// `max_depth`.
    pub const fn with_max_depth(input: B, max_depth: usize) -> Self {
        Self {
            lexer: Lexer::new(input),
            depth: 0,
            max_depth,
        }
    }

    /// Parse one JSON value from the start of the input.
    ///
    /// Bytes after the first complete value are not examined.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseError`] encountered.
    pub fn parse(mut self) -> Result<Node, ParseError> {
        trace!("parsing {} byte(s)", self.lexer.input().len());
        let root = self.parse_value()?;
        trace!("parsed root {} at offset {}", root.kind(), self.lexer.position());
        Ok(root)
    }

    /// Read the next token and parse the value it starts.
    fn parse_value(&mut self) -> Result<Node, ParseError> {
        let token = self.lexer.next_token()?;
        self.parse_value_from(token)
    }

    /// Parse the value that starts with the already-read `token`.
    fn parse_value_from(&mut self, token: Token) -> Result<Node, ParseError> {
        match token.kind {
            TokenKind::OpenBrace => {
                self.enter(token)?;
                let object = self.parse_object();
                self.depth -= 1;
                object
            }
            TokenKind::OpenBracket => {
                self.enter(token)?;
                let array = self.parse_array();
                self.depth -= 1;
                array
            }
            TokenKind::StringLiteral => Ok(Node::String(self.text(token))),
            TokenKind::Number => self.parse_number(token),
            TokenKind::True => Ok(Node::Boolean(true)),
            TokenKind::False => Ok(Node::Boolean(false)),
            TokenKind::Null => Ok(Node::Null),
            TokenKind::EndOfInput
            | TokenKind::CloseBrace
            | TokenKind::CloseBracket
            | TokenKind::Comma
            | TokenKind::Colon => Err(ParseError::UnexpectedToken {
                found: token.kind,
                offset: token.start,
            }),
        }
    }

    /// Parse `label : value` members up to the closing brace. The opening
    /// brace has been consumed.
    fn parse_object(&mut self) -> Result<Node, ParseError> {
        let mut members = HashMap::new();

        let mut token = self.lexer.next_token()?;
        if token.kind == TokenKind::CloseBrace {
            return Ok(Node::Object(members));
        }

        loop {
            // label
            if token.kind != TokenKind::StringLiteral {
                return Err(ParseError::ExpectedLabel {
                    found: token.kind,
                    offset: token.start,
                });
            }
            let label = self.text(token);

            // :
            let colon = self.lexer.next_token()?;
            if colon.kind != TokenKind::Colon {
                return Err(ParseError::ExpectedColon {
                    found: colon.kind,
                    offset: colon.start,
                });
            }

            // value; last write wins on duplicate labels
            let value = self.parse_value()?;
            members.insert(label, value);

            if !self.has_more(TokenKind::CloseBrace)? {
                break;
            }
            token = self.lexer.next_token()?;
        }

        Ok(Node::Object(members))
    }

    /// Parse elements up to the closing bracket. The opening bracket has been
    /// consumed.
    fn parse_array(&mut self) -> Result<Node, ParseError> {
        let mut elements = Vec::new();

        let token = self.lexer.next_token()?;
        if token.kind == TokenKind::CloseBracket {
            return Ok(Node::Array(elements));
        }
        elements.push(self.parse_value_from(token)?);

        while self.has_more(TokenKind::CloseBracket)? {
            elements.push(self.parse_value()?);
        }

        Ok(Node::Array(elements))
    }

    /// Read the token after a container member: `,` means another member
    /// follows, `close` ends the container.
    fn has_more(&mut self, close: TokenKind) -> Result<bool, ParseError> {
        let token = self.lexer.next_token()?;
        match token.kind {
            TokenKind::Comma => Ok(true),
            kind if kind == close => Ok(false),
            found => Err(ParseError::ExpectedCommaOrClose {
                close,
                found,
                offset: token.start,
            }),
        }
    }

    /// Convert a number token. Literals too large for a finite `f64` are
    /// rejected along with bytes the converter does not accept.
    fn parse_number(&self, token: Token) -> Result<Node, ParseError> {
        let raw = token.raw(self.lexer.input());
        match parse_decimal(raw) {
            Ok(value) if value.is_finite() => Ok(Node::Number(value)),
            _ => Err(ParseError::InvalidNumber {
                literal: String::from_utf8_lossy(raw).into_owned(),
                offset: token.start,
            }),
        }
    }

    /// Account for one more open container.
    fn enter(&mut self, token: Token) -> Result<(), ParseError> {
        if self.depth >= self.max_depth {
            return Err(ParseError::NestingTooDeep {
                limit: self.max_depth,
                offset: token.start,
            });
        }
        self.depth += 1;
        Ok(())
    }

    fn text(&self, token: Token) -> String {
        String::from_utf8_lossy(token.raw(self.lexer.input())).into_owned()
    }
}

/// Parse a JSON document held in `input`.
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered.
pub fn parse(input: &[u8]) -> Result<Node, ParseError> {
    Parser::new(input).parse()
}
