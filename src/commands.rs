//! Drivers for the `haversine` subcommands.
pub mod calc;
pub mod dump;
pub mod generate;

use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::Path;

use crate::json::{Node, Parser};

/// Parse the JSON document at `path` with the crate's own parser.
///
/// The whole file is read into memory and parsed in place.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse.
pub fn parse_file(path: &Path) -> Result<Node> {
    let input = fs::read(path)
        .with_context(|| format!("Failed to read file {}", path.display()))?;
    debug!("parsing {} ({} bytes)", path.display(), input.len());

    Parser::new(input)
        .parse()
        .with_context(|| format!("Failed to parse JSON {}", path.display()))
}
