//! Object graph walking
//!
//! `TreeWalker` visits every object reachable from a root and builds a tree
//! of `Node`s, one per distinct object, with shallow and retained sizes.
//! Repeated objects and null fields become zero-size marker nodes.

mod node;
mod size;
mod visited;
mod walker;

// Re-export public types
pub use node::{Node, NodeKind};
pub use size::{DefaultEstimator, SizeEstimator};
pub use visited::VisitedSet;
pub use walker::TreeWalker;
