//! # Decimal Literal Conversion
//!
//! Converts the raw text of a numeric token into an `f64`.
//!
//! Only `-?[0-9]*(\.[0-9]*)?` is understood: there is no exponent syntax. The
//! integer digits are accumulated as `f = f * 10 + d`; after the dot each
//! digit is weighted by a scale that shrinks by a factor of ten per position.
//!
//! ```
//! use haversine::tokenizer::parse_decimal;
//!
//! let value = parse_decimal(b"-123.34").unwrap();
//! assert!((value + 123.34).abs() < 1e-9);
//! assert!(parse_decimal(b"1e5").is_err());
//! ```
use std::error::Error;
use std::fmt;

/// A byte outside `{-, ., 0-9}` in a numeric literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalError {
    /// The offending byte
    pub byte: u8,
    /// Its index within the literal
    pub index: usize,
}

impl Error for DecimalError {}

impl fmt::Display for DecimalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unexpected byte {:?} at index {} of numeric literal",
            char::from(self.byte),
            self.index
        )
    }
}

/// Convert an ASCII decimal literal into an `f64`.
///
/// A `-` anywhere flips the sign once; its position is not re-validated. A
/// trailing dot (`"1."`) or a bare sign (`"-"`) are accepted.
///
/// # Errors
///
/// Returns a [`DecimalError`] for the first byte that is not a digit, `-`, or
/// `.`.
#[allow(clippy::suggest_mul_add)]
pub fn parse_decimal(literal: &[u8]) -> Result<f64, DecimalError> {
    let mut value = 0.0_f64;
    let mut sign = 1.0_f64;
    // 10 while in the integer part, then the weight of the next fraction digit
    let mut scale = 10.0_f64;

    for (index, &byte) in literal.iter().enumerate() {
        match byte {
            b'-' => sign = -1.0,
            b'.' => scale = 1.0,
            b'0'..=b'9' => {
                let digit = f64::from(byte - b'0');
                if scale > 1.0 {
                    value = value * 10.0 + digit;
                } else {
                    scale /= 10.0;
                    value += digit * scale;
                }
            }
            _ => return Err(DecimalError { byte, index }),
        }
    }

    Ok(value * sign)
}
