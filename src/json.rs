//! # JSON Document Model
//!
//! A small recursive-descent JSON parser over an in-memory byte buffer and
//! the tree it produces. The grammar is deliberately narrow: numbers have no
//! exponent part, strings are taken verbatim without escape decoding, and
//! only space, tab and newline count as whitespace.

pub mod ast;
pub mod parser;

// Re-exports
pub use ast::{Node, NodeKind};
pub use parser::{DEFAULT_MAX_DEPTH, Parser, parse};
