//! # JSON Lexer
//!
//! Scans an in-memory byte buffer left to right, producing one token per
//! [`Lexer::next_token`] call. The cursor only moves forward: a byte, once
//! consumed, is never scanned again.
use crate::error::ParseError;
use crate::tokenizer::{Token, TokenKind};

/// A lexer over an owned input buffer.
///
/// The buffer can be anything that derefs to bytes: a `Vec<u8>`, a
/// `&[u8]`, or a memory-mapped file.
#[derive(Debug)]
pub struct Lexer<B> {
    /// The input sequence of bytes to tokenize
    input: B,
    /// Offset of the next byte to examine
    position: usize,
}

impl<B: AsRef<[u8]>> Lexer<B> {
    /// Construct a lexer positioned at the start of `input`.
    pub const fn new(input: B) -> Self {
        Self { input, position: 0 }
    }

    /// The whole input buffer.
    pub fn input(&self) -> &[u8] {
        self.input.as_ref()
    }

    /// Offset of the next byte to examine.
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Consume whitespace byte(s) starting from the current position.
    fn skip_whitespace(&mut self) {
        let input = self.input.as_ref();
        while matches!(input.get(self.position), Some(b' ' | b'\t' | b'\n')) {
            self.position += 1;
        }
    }

    /// Returns the next token in the input sequence from the current position.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the bytes at the current position do not
    /// form a token.
    pub fn next_token(&mut self) -> Result<Token, ParseError> {
        self.skip_whitespace();

        let Some(&byte) = self.input.as_ref().get(self.position) else {
            return Ok(Token::new(
                TokenKind::EndOfInput,
                self.position,
                self.position,
            ));
        };

        match byte {
            b'{' => Ok(self.read_delimiter(TokenKind::OpenBrace)),
            b'}' => Ok(self.read_delimiter(TokenKind::CloseBrace)),
            b'[' => Ok(self.read_delimiter(TokenKind::OpenBracket)),
            b']' => Ok(self.read_delimiter(TokenKind::CloseBracket)),
            b',' => Ok(self.read_delimiter(TokenKind::Comma)),
            b':' => Ok(self.read_delimiter(TokenKind::Colon)),
            b'"' => self.read_string(),
            b'-' | b'0'..=b'9' => self.read_number(),
            b't' => self.read_keyword(TokenKind::True, "true"),
            b'f' => self.read_keyword(TokenKind::False, "false"),
            b'n' => self.read_keyword(TokenKind::Null, "null"),
            _ => Err(ParseError::UnknownByte {
                byte,
                offset: self.position,
            }),
        }
    }

    /// Consumes a single structural byte.
    const fn read_delimiter(&mut self, kind: TokenKind) -> Token {
        let start = self.position;
        self.position += 1;
        Token::new(kind, start, self.position)
    }

    /// Reads a string literal. Everything up to the next `"` is content; a
    /// backslash is passed through like any other byte.
    fn read_string(&mut self) -> Result<Token, ParseError> {
        let open = self.position;
        let start = open + 1;
        let input = self.input.as_ref();

        let Some(len) = input[start..].iter().position(|&b| b == b'"') else {
            return Err(ParseError::UnterminatedString { offset: open });
        };

        let end = start + len;
        // skip closing quote
        self.position = end + 1;
        Ok(Token::new(TokenKind::StringLiteral, start, end))
    }

    /// Reads a numeric literal: an optional leading `-`, then digits with at
    /// most one `.`. The raw text is not validated further.
    fn read_number(&mut self) -> Result<Token, ParseError> {
        let start = self.position;
        let input = self.input.as_ref();
        let mut at = start;

        // optional leading '-'
        if input.get(at) == Some(&b'-') {
            at += 1;
        }

        let mut seen_dot = false;
        while let Some(&byte) = input.get(at) {
            match byte {
                b'0'..=b'9' => at += 1,
                b'.' if !seen_dot => {
                    seen_dot = true;
                    at += 1;
                }
                b'.' => return Err(ParseError::MalformedNumber { offset: at }),
                _ => break,
            }
        }

        self.position = at;
        Ok(Token::new(TokenKind::Number, start, at))
    }

    /// Reads one of the keywords `true`/`false`/`null`, which must match
    /// byte for byte.
    fn read_keyword(
        &mut self,
        kind: TokenKind,
        keyword: &'static str,
    ) -> Result<Token, ParseError> {
        let start = self.position;
        let input = self.input.as_ref();

        for (i, &expected) in keyword.as_bytes().iter().enumerate() {
            match input.get(start + i) {
                Some(&byte) if byte == expected => {}
                found => {
                    // report through the mismatching byte, or up to EOF
                    let end = if found.is_some() {
                        start + i + 1
                    } else {
                        input.len()
                    };
                    return Err(ParseError::UnexpectedKeyword {
                        expected: keyword,
                        found: String::from_utf8_lossy(&input[start..end])
                            .into_owned(),
                        offset: start,
                    });
                }
            }
        }

        self.position = start + keyword.len();
        Ok(Token::new(kind, start, self.position))
    }
}

/// Tokenize a JSON document from bytes into tokens, up to and including the
/// [`TokenKind::EndOfInput`] token.
///
/// # Errors
///
/// Returns the first lexical [`ParseError`] in the input.
pub fn tokenize(text: &[u8]) -> Result<Vec<Token>, ParseError> {
    let mut lexer = Lexer::new(text);
    let mut tokens: Vec<Token> = vec![];

    loop {
        let token = lexer.next_token()?;
        let is_eof = token.kind == TokenKind::EndOfInput;

        tokens.push(token);

        if is_eof {
            break;
        }
    }

    Ok(tokens)
}
