/*!
# Answer Files

An answer file is a flat sequence of little-endian `f64` values: one haversine
distance per pair, in document order, followed by the average of all of them.
The generator writes one next to each JSON input so that a calculation can be
checked value by value.
*/
use std::error::Error;
use std::fmt;
use std::io::{self, ErrorKind, Read, Write};

/// Largest absolute difference tolerated between a computed value and the
/// recorded answer.
pub const TOLERANCE: f64 = 1e-6;

/// A computed value could not be confirmed against the answer file.
#[derive(Debug)]
pub enum AnswerError {
    /// The value at `index` differs from the recorded answer.
    Mismatch {
        index: usize,
        expected: f64,
        got: f64,
    },
    /// The file holds fewer than `index + 1` values.
    Exhausted { index: usize },
    /// Reading the file failed.
    Io(io::Error),
}

impl Error for AnswerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Mismatch { .. } | Self::Exhausted { .. } => None,
        }
    }
}

impl fmt::Display for AnswerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mismatch {
                index,
                expected,
                got,
            } => write!(f, "Answer {index}: expected {expected}, got {got}"),
            Self::Exhausted { index } => {
                write!(f, "Answer file ended before value {index}")
            }
            Self::Io(err) => write!(f, "Failed to read answer file: {err}"),
        }
    }
}

impl From<io::Error> for AnswerError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Appends answers to an underlying writer.
#[derive(Debug)]
pub struct AnswerWriter<W> {
    inner: W,
}

impl<W: Write> AnswerWriter<W> {
    /// Write answers to `inner`.
    pub const fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Append one value.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn write(&mut self, value: f64) -> io::Result<()> {
        self.inner.write_all(&value.to_le_bytes())
    }

    /// Flush and return the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns any error raised while flushing.
    pub fn finish(mut self) -> io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}

/// Reads answers back in order and checks computed values against them.
#[derive(Debug)]
pub struct AnswerReader<R> {
    inner: R,
    /// Index of the next value
    index: usize,
}

impl<R: Read> AnswerReader<R> {
    /// Read answers from `inner`, starting at the first value.
    pub const fn new(inner: R) -> Self {
        Self { inner, index: 0 }
    }

    /// Read the next recorded value, or `None` at a clean end of file.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the file ends mid-value.
    pub fn read(&mut self) -> io::Result<Option<f64>> {
        let mut bytes = [0_u8; 8];
        let mut filled = 0;
        while filled < bytes.len() {
            match self.inner.read(&mut bytes[filled..]) {
                Ok(0) if filled == 0 => return Ok(None),
                Ok(0) => {
                    return Err(io::Error::new(
                        ErrorKind::UnexpectedEof,
                        format!("truncated answer {}", self.index),
                    ));
                }
                Ok(n) => filled += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => {}
                Err(err) => return Err(err),
            }
        }
        self.index += 1;
        Ok(Some(f64::from_le_bytes(bytes)))
    }

    /// Compare `got` with the next recorded value.
    ///
    /// # Errors
    ///
    /// Returns an [`AnswerError`] if the values differ by more than
    /// [`TOLERANCE`], or no value is left.
    pub fn verify(&mut self, got: f64) -> Result<(), AnswerError> {
        let index = self.index;
        let expected = self.read()?.ok_or(AnswerError::Exhausted { index })?;
        if (got - expected).abs() > TOLERANCE {
            return Err(AnswerError::Mismatch {
                index,
                expected,
                got,
            });
        }
        Ok(())
    }
}
