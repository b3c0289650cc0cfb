/*!
# `haversine` Library

Tools for the haversine distance benchmark: a minimal hand-rolled JSON parser
that reads the benchmark input into a typed tree, the haversine formula, a
seeded generator of benchmark inputs, and binary answer files to verify
results against.

```
use haversine::json::parse;
use haversine::pairs::extract_pairs;

let root = parse(br#"{"pairs": [{"x0": 0, "y0": 0, "x1": 180, "y1": 0}]}"#)?;
let pairs = extract_pairs(&root)?;
assert!((pairs[0].distance() - 20020.741662797).abs() < 1e-6);
# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

pub mod answers;
pub mod commands;
pub mod distance;
pub mod error;
pub mod generator;
pub mod json;
pub mod pairs;
pub mod tokenizer;
pub mod utils;

// Re-exports
pub use error::ParseError;
