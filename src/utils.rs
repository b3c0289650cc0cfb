//! Miscellaneous utility functions.

use anyhow::Context as _;
use colored::Colorize;
use std::io::Write;
use std::io::{self, ErrorKind};

use crate::json::Node;

// ==============================================================================
// Colorized Tree Output
// ==============================================================================

/// Write a parsed tree with syntax highlighting to `writer`, followed by a
/// newline. Silently returns `Ok(())` on broken pipe so that piping to tools
/// like `less` or `head` exits cleanly.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn write_colored_node<W: Write>(
    writer: &mut W,
    node: &Node,
    pretty: bool,
) -> anyhow::Result<()> {
    let result = (|| -> io::Result<()> {
        write_colored(writer, node, 0, pretty)?;
        writeln!(writer)?;
        Ok(())
    })();

    match result {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == ErrorKind::BrokenPipe => Ok(()),
        Err(err) => Err(err).context("write colorized JSON to stdout"),
    }
}

/// Recursively write a node with syntax highlighting. Layout matches the
/// node's `Display` form.
fn write_colored<W: Write>(
    writer: &mut W,
    node: &Node,
    indent: usize,
    pretty: bool,
) -> io::Result<()> {
    let next_indent = indent + 2;

    match node {
        Node::Null => write!(writer, "{}", "null".red().dimmed()),
        Node::Boolean(b) => {
            write!(writer, "{}", b.to_string().yellow().bold())
        }
        Node::Number(n) => write!(writer, "{}", n.to_string().yellow()),
        // strings are written back verbatim, never escaped
        Node::String(s) => write!(writer, "{}", format!("\"{s}\"").green()),
        Node::Array(arr) => {
            write!(writer, "[")?;
            for (i, item) in arr.iter().enumerate() {
                if i > 0 {
                    write!(writer, ",")?;
                }
                if pretty {
                    writeln!(writer)?;
                    write!(writer, "{:width$}", "", width = next_indent)?;
                }
                write_colored(writer, item, next_indent, pretty)?;
            }
            if pretty && !arr.is_empty() {
                writeln!(writer)?;
                write!(writer, "{:width$}", "", width = indent)?;
            }
            write!(writer, "]")
        }
        Node::Object(obj) => {
            write!(writer, "{{")?;
            for (i, (key, val)) in obj.iter().enumerate() {
                if i > 0 {
                    write!(writer, ",")?;
                }
                if pretty {
                    writeln!(writer)?;
                    write!(writer, "{:width$}", "", width = next_indent)?;
                }
                write!(writer, "{}", format!("\"{key}\"").cyan())?;
                if pretty {
                    write!(writer, ": ")?;
                } else {
                    write!(writer, ":")?;
                }
                write_colored(writer, val, next_indent, pretty)?;
            }
            if pretty && !obj.is_empty() {
                writeln!(writer)?;
                write!(writer, "{:width$}", "", width = indent)?;
            }
            write!(writer, "}}")
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::json::parse;

    fn render(node: &Node, pretty: bool) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        write_colored_node(&mut out, node, pretty).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_plain_output_matches_display() {
        let node = parse(br#"{"pairs": [{"x0": -1.5}, null, [], true, "s"]}"#).unwrap();
        assert_eq!(render(&node, false), format!("{node}\n"));
        assert_eq!(render(&node, true), format!("{node:#}\n"));
    }
}
