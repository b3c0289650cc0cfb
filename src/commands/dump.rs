//! `dump` subcommand.
use anyhow::Result;
use std::io::stdout;
use std::path::Path;

use crate::commands::parse_file;
use crate::utils::write_colored_node;

/// Parse `path` and print the resulting tree, pretty-printed unless `compact`.
/// With `show_depth` the depth of the tree is printed first.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or stdout cannot be
/// written.
pub fn dump(path: &Path, compact: bool, show_depth: bool) -> Result<()> {
    let root = parse_file(path)?;

    if show_depth {
        println!("Depth: {}", root.depth());
    }

    write_colored_node(&mut stdout().lock(), &root, !compact)
}
