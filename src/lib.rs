//! # Overview
//!
//! This crate computes the [edit distance][ted] between ordered labeled trees, that is the lowest
//! total cost of deleting nodes, inserting nodes and substituting labels that transforms one tree
//! into the other, according to user-defined cost functions for each kind of edit.
//!
//! Trees are built once from a description of their shape and a sequence of labels, or from any
//! recursive structure, after which they are immutable and can be compared any number of times.
//! The distance is computed by the dynamic program of Zhang and Shasha, which also yields the
//! distance between every pair of subtrees as a byproduct.
//!
//! [ted]: https://en.wikipedia.org/wiki/Tree_edit_distance
//!
//! # Example
//!
//! ```rust
//! use ordered_tree_distance::*;
//! use serde_json::{json, Value};
//!
//! fn children(v: &Value) -> Vec<&Value> {
//!     match v {
//!         Value::Array(a) => a.iter().collect(),
//!         Value::Object(m) => m.values().collect(),
//!         _ => Vec::new(),
//!     }
//! }
//!
//! fn label(v: &Value) -> String {
//!     match v {
//!         Value::Array(_) => "[]".into(),
//!         Value::Object(_) => "{}".into(),
//!         v => v.to_string(),
//!     }
//! }
//!
//! let john = json!({
//!     "name": "John Doe",
//!     "age": 43,
//!     "phones": [
//!         "+44 1234567",
//!         "+44 2345678"
//!     ]
//! });
//!
//! let jane = json!({
//!     "name": "John Doe",
//!     "age": 43,
//!     "phones": [
//!         "+44 2345678"
//!     ]
//! });
//!
//! let a = OrderedLabeledTree::from_nested(&john, children, label);
//! let b = OrderedLabeledTree::from_nested(&jane, children, label);
//!
//! let ted = TreeEditDistance::new(
//!     |_: &String| 1.,
//!     |_: &String| 1.,
//!     |x: &String, y: &String| if x == y { 0. } else { 2. },
//! );
//!
//! // drop the first phone number
//! assert_eq!(ted.distance(&a, &b), 1.);
//!
//! // the distance between every pair of subtrees is also available
//! let table = ted.table(&a, &b);
//! assert_eq!(table.distance(), 1.);
//! assert_eq!(table[(0, 0)], 0.);
//! ```

mod cost;
mod distance;
mod error;
mod node;
mod notation;
mod table;
mod topology;
mod tree;

pub use cost::*;
pub use distance::*;
pub use error::*;
pub use node::*;
pub use table::*;
pub use topology::*;
pub use tree::*;
