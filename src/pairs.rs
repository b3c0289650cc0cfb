/*!
# Pair Extraction

Walks a parsed tree of the form

```json
{"pairs": [{"x0": 1.0, "y0": 2.0, "x1": 3.0, "y1": 4.0}, ...]}
```

into a list of [`Pair`]s. The parser itself knows nothing about this shape; a
tree that does not match it is reported here as an [`ExtractError`], never as
a [`crate::ParseError`].
*/
use std::error::Error;
use std::fmt;

use crate::distance::Pair;
use crate::json::{Node, NodeKind};

/// Key of the top-level array of pairs.
pub const PAIRS_KEY: &str = "pairs";

/// The input parsed, but is not a document of coordinate pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// A node at `path` is not of the expected variant.
    WrongKind {
        /// Location in the document, e.g. `pairs[3].x0`
        path: String,
        expected: NodeKind,
        found: NodeKind,
    },
    /// An object at `path` lacks `key`.
    MissingKey {
        path: String,
        key: &'static str,
    },
}

impl Error for ExtractError {}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongKind {
                path,
                expected,
                found,
            } => write!(f, "Expected {expected} at `{path}`, got {found}"),
            Self::MissingKey { path, key } => {
                write!(f, "Missing key `{key}` in object at `{path}`")
            }
        }
    }
}

/// Extract every coordinate pair from `root`, in document order.
///
/// # Errors
///
/// Returns an [`ExtractError`] at the first node that does not fit the
/// expected shape.
pub fn extract_pairs(root: &Node) -> Result<Vec<Pair>, ExtractError> {
    let pairs = field(root, "", PAIRS_KEY)?;
    let elements = pairs.as_array().ok_or_else(|| ExtractError::WrongKind {
        path: PAIRS_KEY.to_string(),
        expected: NodeKind::Array,
        found: pairs.kind(),
    })?;

    elements
        .iter()
        .enumerate()
        .map(|(i, element)| {
            let path = format!("{PAIRS_KEY}[{i}]");
            let number = |key: &'static str| -> Result<f64, ExtractError> {
                let node = field(element, &path, key)?;
                node.as_f64().ok_or_else(|| ExtractError::WrongKind {
                    path: format!("{path}.{key}"),
                    expected: NodeKind::Number,
                    found: node.kind(),
                })
            };
            Ok(Pair {
                x0: number("x0")?,
                y0: number("y0")?,
                x1: number("x1")?,
                y1: number("y1")?,
            })
        })
        .collect()
}

/// Look up `key` in `node`, which must be an object.
fn field<'a>(
    node: &'a Node,
    path: &str,
    key: &'static str,
) -> Result<&'a Node, ExtractError> {
    let object = node.as_object().ok_or_else(|| ExtractError::WrongKind {
        path: path.to_string(),
        expected: NodeKind::Object,
        found: node.kind(),
    })?;
    object.get(key).ok_or_else(|| ExtractError::MissingKey {
        path: path.to_string(),
        key,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::json::parse;

    #[test]
    fn test_extracts_in_order() {
        let root = parse(
            br#"{"pairs": [
                {"x0": 1.5, "y0": -2, "x1": 3, "y1": 4.5},
                {"y1": 0.5, "x1": 2.5, "y0": -0.5, "x0": 10}
            ]}"#,
        )
        .unwrap();
        let pairs = extract_pairs(&root).unwrap();
        assert_eq!(
            pairs,
            vec![
                Pair {
                    x0: 1.5,
                    y0: -2.0,
                    x1: 3.0,
                    y1: 4.5
                },
                Pair {
                    x0: 10.0,
                    y0: -0.5,
                    x1: 2.5,
                    y1: 0.5
                },
            ]
        );
    }

    #[test]
    fn test_empty_pairs() {
        let root = parse(br#"{"pairs": []}"#).unwrap();
        assert!(extract_pairs(&root).unwrap().is_empty());
    }

    #[test]
    fn test_extra_keys_ignored() {
        let root = parse(
            br#"{"meta": "x", "pairs": [{"x0": 1, "y0": 2, "x1": 3, "y1": 4, "d": null}]}"#,
        )
        .unwrap();
        assert_eq!(extract_pairs(&root).unwrap().len(), 1);
    }

    #[test]
    fn test_root_not_object() {
        let root = parse(b"[1, 2]").unwrap();
        assert_eq!(
            extract_pairs(&root),
            Err(ExtractError::WrongKind {
                path: String::new(),
                expected: NodeKind::Object,
                found: NodeKind::Array
            })
        );
    }

    #[test]
    fn test_missing_pairs_key() {
        let root = parse(br#"{"points": []}"#).unwrap();
        assert_eq!(
            extract_pairs(&root),
            Err(ExtractError::MissingKey {
                path: String::new(),
                key: "pairs"
            })
        );
    }

    #[test]
    fn test_pairs_not_array() {
        let root = parse(br#"{"pairs": {"x0": 1}}"#).unwrap();
        assert!(matches!(
            extract_pairs(&root),
            Err(ExtractError::WrongKind {
                expected: NodeKind::Array,
                found: NodeKind::Object,
                ..
            })
        ));
    }

    #[test]
    fn test_bad_coordinate() {
        let root = parse(
            br#"{"pairs": [{"x0": 1, "y0": 2, "x1": 3, "y1": 4}, {"x0": 1, "y0": "2", "x1": 3, "y1": 4}]}"#,
        )
        .unwrap();
        let err = extract_pairs(&root).unwrap_err();
        assert_eq!(
            err,
            ExtractError::WrongKind {
                path: "pairs[1].y0".to_string(),
                expected: NodeKind::Number,
                found: NodeKind::String
            }
        );
        assert_eq!(err.to_string(), "Expected Number at `pairs[1].y0`, got String");
    }

    #[test]
    fn test_missing_coordinate() {
        let root = parse(br#"{"pairs": [{"x0": 1, "y0": 2, "x1": 3}]}"#).unwrap();
        assert_eq!(
            extract_pairs(&root),
            Err(ExtractError::MissingKey {
                path: "pairs[0]".to_string(),
                key: "y1"
            })
        );
    }

    #[test]
    fn test_element_not_object() {
        let root = parse(br#"{"pairs": [null]}"#).unwrap();
        assert!(matches!(
            extract_pairs(&root),
            Err(ExtractError::WrongKind { found: NodeKind::Null, .. })
        ));
    }
}
