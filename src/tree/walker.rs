//! TreeWalker - builds the object tree in memory

use tracing::{debug, trace};

use crate::error::{DumpError, Result};
use crate::inspect::{Element, Inspect, Shape};

use super::node::Node;
use super::size::{DefaultEstimator, SizeEstimator};
use super::visited::VisitedSet;

/// Walks every object reachable from a root and mirrors the reference graph
/// as a tree of [`Node`]s.
///
/// Objects reached a second time (cycles, shared references) become
/// `[seen <Type#index>]` markers, so each object is charged only to the
/// branch that discovers it first. Every call to [`TreeWalker::walk`] uses
/// a fresh visited set.
pub struct TreeWalker<S = DefaultEstimator> {
    estimator: S,
}

impl TreeWalker {
    pub fn new() -> Self {
        Self {
            estimator: DefaultEstimator,
        }
    }
}

impl Default for TreeWalker {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SizeEstimator> TreeWalker<S> {
    pub fn with_estimator(estimator: S) -> Self {
        Self { estimator }
    }

    /// Build the tree for `root`, which may be any field-like storage:
    /// an object, an `Option`, a smart pointer.
    pub fn walk<E: Element>(&self, root: &E) -> Result<Node> {
        if E::PRIMITIVE {
            return Err(DumpError::ScalarRoot(<E as Element>::declared_name().into_owned()));
        }
        self.walk_object(root.get())
    }

    /// Build the tree for a type-erased root. `None` and in-band null values
    /// are a null root.
    pub fn walk_object(&self, root: Option<&dyn Inspect>) -> Result<Node> {
        let root = root
            .filter(|root| !root.is_null())
            .ok_or(DumpError::NullRoot)?;
        let mut visited = VisitedSet::new();
        let node = self.visit("root".to_string(), root, &mut visited)?;
        debug!(
            objects = visited.len(),
            nodes = node.count(),
            deep_size = node.deep_size(),
            "built object tree"
        );
        Ok(node)
    }

    fn visit(&self, label: String, object: &dyn Inspect, visited: &mut VisitedSet) -> Result<Node> {
        if let Some(index) = visited.index_of(object.identity()) {
            let name = unique_name(object, index);
            debug!(%label, %name, "already visited");
            return Ok(Node::seen(&name));
        }
        let index = visited.insert(object.identity());
        let shallow_size = self.estimator.shallow_size_of(object);
        trace!(%label, index, shallow_size, "visiting");

        match object.shape() {
            Shape::Array(array) => {
                let mut parent = Node::new(format!("{} => {}", label, object.type_name()), shallow_size);
                if array.is_primitive() {
                    return Ok(parent);
                }
                for (i, element) in array.elements().iter().enumerate() {
                    // Null elements leave no trace, unlike null fields.
                    if let Some(element) = element.filter(|e| !e.is_null()) {
                        parent.add_child(self.visit(format!("[{}]", i), element, visited)?);
                    }
                }
                Ok(parent)
            }
            Shape::Composite(mut slots) => {
                slots.retain(|slot| !slot.is_type_level() && !slot.is_primitive());
                slots.sort_by(|a, b| a.name().cmp(b.name()));

                let mut parent = Node::new(
                    format!("{} => {}", label, unique_name(object, index)),
                    shallow_size,
                );
                for slot in &slots {
                    let value = slot.read().map_err(|source| DumpError::Inaccessible {
                        owner: object.type_name().into_owned(),
                        slot: slot.name().to_string(),
                        source,
                    })?;
                    let slot_label = format!("{} {}", slot.declared_type(), slot.name());
                    let child = match value.filter(|v| !v.is_null()) {
                        Some(value) => self.visit(slot_label, value, visited)?,
                        None => Node::null(&slot_label),
                    };
                    parent.add_child(child);
                }
                Ok(parent)
            }
        }
    }
}

fn unique_name(object: &dyn Inspect, index: usize) -> String {
    format!("<{}#{}>", object.type_name(), index)
}

#[cfg(test)]
mod tests {
    use std::cell::OnceCell;
    use std::rc::Rc;

    use crate::error::AccessError;
    use crate::inspect::Slot;

    use super::*;

    fn fixed(bytes: u64) -> impl Fn(&dyn Inspect) -> u64 {
        move |_: &dyn Inspect| bytes
    }

    struct Link {
        name: String,
        weight: u32,
        next: OnceCell<Rc<Link>>,
    }

    impl Link {
        fn new(name: &str) -> Rc<Self> {
            Rc::new(Self {
                name: name.to_string(),
                weight: 1,
                next: OnceCell::new(),
            })
        }
    }

    impl Inspect for Link {
        fn shape(&self) -> Shape<'_> {
            // Deliberately unsorted.
            Shape::composite([
                Slot::field("next", &self.next),
                Slot::field("weight", &self.weight),
                Slot::field("name", &self.name),
            ])
        }
    }

    struct Sealed;

    impl Inspect for Sealed {
        fn shape(&self) -> Shape<'_> {
            Shape::composite([
                Slot::inaccessible("secret", "Key", AccessError::new("access denied")),
                Slot::typed("open", "String", None),
            ])
        }
    }

    struct Config {
        instances: Option<Sealed>,
        label: Option<String>,
    }

    impl Inspect for Config {
        fn shape(&self) -> Shape<'_> {
            Shape::composite([
                Slot::field("INSTANCES", &self.instances).type_level(),
                Slot::field("label", &self.label),
            ])
        }
    }

    fn labels(node: &Node) -> Vec<&str> {
        node.children().iter().map(Node::label).collect()
    }

    #[test]
    fn test_composite_slots_sorted_and_primitives_skipped() {
        let link = Link::new("a");
        let tree = TreeWalker::with_estimator(fixed(10))
            .walk(&link)
            .expect("walk succeeds");

        assert_eq!(tree.label(), "root => <Link#0>");
        assert_eq!(
            labels(&tree),
            vec!["String name => String", "Link next => null"]
        );
        assert_eq!(tree.deep_size(), 20);
    }

    #[test]
    fn test_cycle_terminates_with_seen_marker() {
        let a = Link::new("a");
        let b = Link::new("b");
        let _ = a.next.set(Rc::clone(&b));
        let _ = b.next.set(Rc::clone(&a));

        let tree = TreeWalker::with_estimator(fixed(8))
            .walk(&a)
            .expect("walk succeeds");

        let next = &tree.children()[1];
        assert_eq!(next.label(), "Link next => <Link#2>");
        let back = &next.children()[1];
        assert_eq!(back.label(), "[seen <Link#0>]");
        assert_eq!(back.deep_size(), 0);
        assert_eq!(back.shallow_size(), 0);
        assert!(!back.has_children());
    }

    #[test]
    fn test_null_root_rejected() {
        let missing: Option<Rc<Link>> = None;
        let err = TreeWalker::new().walk(&missing).unwrap_err();
        assert!(matches!(err, DumpError::NullRoot));

        let err = TreeWalker::new().walk_object(None).unwrap_err();
        assert!(matches!(err, DumpError::NullRoot));
    }

    #[test]
    fn test_scalar_root_rejected() {
        let err = TreeWalker::new().walk(&42u64).unwrap_err();
        assert!(matches!(err, DumpError::ScalarRoot(ref ty) if ty == "u64"));
    }

    #[test]
    fn test_access_failure_aborts_walk() {
        let holder = vec![Sealed];
        let err = TreeWalker::new().walk(&holder).unwrap_err();
        match err {
            DumpError::Inaccessible { owner, slot, source } => {
                assert_eq!(owner, "Sealed");
                assert_eq!(slot, "secret");
                assert_eq!(source.reason, "access denied");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_type_level_slots_are_not_read() {
        let config = Config {
            instances: Some(Sealed),
            label: None,
        };
        let tree = TreeWalker::new().walk(&config).expect("walk succeeds");
        assert_eq!(labels(&tree), vec!["String label => null"]);
    }

    #[test]
    fn test_indices_assigned_in_visit_order() {
        let items = vec![Link::new("x"), Link::new("y")];
        let tree = TreeWalker::new().walk(&items).expect("walk succeeds");
        assert_eq!(tree.label(), "root => Link[]");
        // Each Link takes one index and its name String the next.
        assert_eq!(labels(&tree), vec!["[0] => <Link#1>", "[1] => <Link#3>"]);
    }
}
