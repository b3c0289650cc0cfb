/*!
# JSON AST

The tree produced by the parser. Every node is owned by its parent; the root
is handed to the caller as a plain owned value.

Objects map each key to the last value written for it; member order is not
kept. Array elements stay in source order.

Formatting a node with `{}` writes a compact canonical form; `{:#}` indents
it. Numbers are written in plain decimal and strings verbatim, so the output
for any tree the parser built (whose numbers are always finite) is accepted by
[`crate::json::parse`]:

```
use haversine::json::{Node, parse};

let node = parse(br#"[1.5, {"a": null}]"#).unwrap();
assert_eq!(node.to_string(), r#"[1.5,{"a":null}]"#);
assert_eq!(parse(node.to_string().as_bytes()).unwrap(), node);
```
*/
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// A parsed JSON value.
#[derive(PartialEq, Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Node {
    /// A JSON object with string keys and values of any type
    Object(HashMap<String, Node>),
    /// A JSON array containing values of any type, in source order
    Array(Vec<Node>),
    /// A JSON string value
    String(String),
    /// A JSON number, already converted
    Number(f64),
    /// A JSON Boolean value
    Boolean(bool),
    /// A JSON null value
    Null,
}

/// The variant of a [`Node`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// [`Node::Object`]
    Object,
    /// [`Node::Array`]
    Array,
    /// [`Node::String`]
    String,
    /// [`Node::Number`]
    Number,
    /// [`Node::Boolean`]
    Boolean,
    /// [`Node::Null`]
    Null,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Object => "Object",
            Self::Array => "Array",
            Self::String => "String",
            Self::Number => "Number",
            Self::Boolean => "Boolean",
            Self::Null => "Null",
        };
        f.write_str(name)
    }
}

impl Node {
    /// Report which variant this node is.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Object(_) => NodeKind::Object,
            Self::Array(_) => NodeKind::Array,
            Self::String(_) => NodeKind::String,
            Self::Number(_) => NodeKind::Number,
            Self::Boolean(_) => NodeKind::Boolean,
            Self::Null => NodeKind::Null,
        }
    }

    /// Compute the depth of the JSON document.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Object(map) => {
                1 + map.values().map(Self::depth).max().unwrap_or(0)
            }
            Self::Array(arr) => 1 + arr.iter().map(Self::depth).max().unwrap_or(0),
            Self::String(_) | Self::Number(_) | Self::Boolean(_) | Self::Null => 1,
        }
    }

    /// Look up `key` if this node is an object.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Self> {
        self.as_object().and_then(|map| map.get(key))
    }

    /// The members if this node is an object.
    #[must_use]
    pub const fn as_object(&self) -> Option<&HashMap<String, Self>> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// The elements if this node is an array.
    #[must_use]
    pub fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// The text if this node is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The value if this node is a number.
    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The value if this node is a Boolean.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    fn write_canonical(
        &self,
        f: &mut fmt::Formatter<'_>,
        indent: usize,
    ) -> fmt::Result {
        let pretty = f.alternate();
        let next_indent = indent + 2;

        match self {
            Self::Null => f.write_str("null"),
            Self::Boolean(b) => write!(f, "{b}"),
            // f64's Display never uses exponent notation
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "\"{s}\""),
            Self::Array(arr) => {
                f.write_str("[")?;
                for (i, item) in arr.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    if pretty {
                        write!(f, "\n{:width$}", "", width = next_indent)?;
                    }
                    item.write_canonical(f, next_indent)?;
                }
                if pretty && !arr.is_empty() {
                    write!(f, "\n{:width$}", "", width = indent)?;
                }
                f.write_str("]")
            }
            Self::Object(map) => {
                f.write_str("{")?;
                for (i, (key, val)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    if pretty {
                        write!(f, "\n{:width$}\"{key}\": ", "", width = next_indent)?;
                    } else {
                        write!(f, "\"{key}\":")?;
                    }
                    val.write_canonical(f, next_indent)?;
                }
                if pretty && !map.is_empty() {
                    write!(f, "\n{:width$}", "", width = indent)?;
                }
                f.write_str("}")
            }
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_canonical(f, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        let mut inner = HashMap::new();
        inner.insert("x0".to_string(), Node::Number(-0.5));
        Node::Object(HashMap::from([
            (
                "pairs".to_string(),
                Node::Array(vec![Node::Object(inner), Node::Null]),
            ),
        ]))
    }

    #[test]
    fn test_kind() {
        assert_eq!(Node::Null.kind(), NodeKind::Null);
        assert_eq!(Node::Boolean(true).kind(), NodeKind::Boolean);
        assert_eq!(Node::Number(1.0).kind(), NodeKind::Number);
        assert_eq!(Node::String(String::new()).kind(), NodeKind::String);
        assert_eq!(Node::Array(vec![]).kind(), NodeKind::Array);
        assert_eq!(sample().kind(), NodeKind::Object);
        assert_eq!(NodeKind::Boolean.to_string(), "Boolean");
    }

    #[test]
    fn test_depth() {
        assert_eq!(Node::Null.depth(), 1);
        assert_eq!(Node::Array(vec![]).depth(), 1);
        assert_eq!(sample().depth(), 4);
    }

    #[test]
    fn test_accessors() {
        let node = sample();
        let pairs = node.get("pairs").and_then(Node::as_array);
        assert_eq!(pairs.map(<[Node]>::len), Some(2));
        assert_eq!(
            pairs.and_then(|p| p[0].get("x0")).and_then(Node::as_f64),
            Some(-0.5)
        );
        assert!(node.get("missing").is_none());
        assert!(Node::Null.get("pairs").is_none());
        assert_eq!(Node::String("a".into()).as_str(), Some("a"));
        assert_eq!(Node::Boolean(false).as_bool(), Some(false));
        assert_eq!(Node::Null.as_f64(), None);
    }

    #[test]
    fn test_compact_display() {
        assert_eq!(sample().to_string(), r#"{"pairs":[{"x0":-0.5},null]}"#);
        assert_eq!(Node::Number(0.000_000_1).to_string(), "0.0000001");
        assert_eq!(Node::Object(HashMap::new()).to_string(), "{}");
    }

    #[test]
    fn test_serialize_matches_serde_json() {
        let document = r#"{"pairs": [{"x0": -0.5, "ok": true, "tag": "a"}, null, []], "empty": {}}"#;
        let node = crate::json::parse(document.as_bytes()).unwrap();
        let expected: serde_json::Value = serde_json::from_str(document).unwrap();
        assert_eq!(serde_json::to_value(&node).unwrap(), expected);
    }

    #[test]
    fn test_pretty_display() {
        let expected = "{\n  \"pairs\": [\n    {\n      \"x0\": -0.5\n    },\n    null\n  ]\n}";
        assert_eq!(format!("{:#}", sample()), expected);
        assert_eq!(format!("{:#}", Node::Array(vec![])), "[]");
    }
}
