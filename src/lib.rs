//! ramtree - shallow and retained memory of a live object graph, as a tree
//!
//! ```
//! use std::rc::Rc;
//!
//! use ramtree::{Inspect, Shape, Slot};
//!
//! struct Person {
//!     name: String,
//!     age: u32,
//!     friend: Option<Rc<Person>>,
//! }
//!
//! impl Inspect for Person {
//!     fn shape(&self) -> Shape<'_> {
//!         Shape::composite([
//!             Slot::field("name", &self.name),
//!             Slot::field("age", &self.age),
//!             Slot::field("friend", &self.friend),
//!         ])
//!     }
//! }
//!
//! let alice = Person { name: "Alice".to_string(), age: 36, friend: None };
//! let text = ramtree::dump(&alice)?;
//! assert!(text.contains("root => <Person#0>"));
//! assert!(text.contains("+- Person friend => null"));
//! # Ok::<(), ramtree::DumpError>(())
//! ```

use std::io::Write;

pub mod error;
pub mod inspect;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{AccessError, DumpError, Result};
pub use inspect::{ArrayShape, Element, Inspect, ObjectId, Shape, Slot};
pub use output::{OutputConfig, SizeFormat, TreeFormatter, print_json, to_json};
pub use tree::{DefaultEstimator, Node, NodeKind, SizeEstimator, TreeWalker};

/// Dump the object tree of `root` to a string.
pub fn dump<E: Element>(root: &E) -> Result<String> {
    let tree = TreeWalker::new().walk(root)?;
    Ok(TreeFormatter::new(OutputConfig::plain()).format(&tree))
}

/// Dump the object tree of `root` to a sink, one line per node.
pub fn dump_to<E: Element, W: Write>(sink: &mut W, root: &E) -> Result<()> {
    let tree = TreeWalker::new().walk(root)?;
    TreeFormatter::new(OutputConfig::plain()).write(&tree, sink)?;
    Ok(())
}
