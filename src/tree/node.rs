//! Node - one vertex of the object tree

use serde::Serialize;

/// What a node stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// An object visited for the first time.
    Object,
    /// An object already visited elsewhere in the tree.
    Seen,
    /// A null field.
    Null,
}

/// A visited object, or a terminal marker standing in for a null field or an
/// object that was already visited.
///
/// `deep_size` is the shallow size plus the deep size of every attached
/// child, accumulated as children are attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    label: String,
    kind: NodeKind,
    shallow_size: u64,
    deep_size: u64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<Node>,
}

impl Node {
    pub fn new(label: impl Into<String>, shallow_size: u64) -> Self {
        Self {
            label: label.into(),
            kind: NodeKind::Object,
            shallow_size,
            deep_size: shallow_size,
            children: Vec::new(),
        }
    }

    /// Zero-size marker for an object first visited as `<Type#index>`.
    pub fn seen(unique_name: &str) -> Self {
        Self::marker(format!("[seen {}]", unique_name), NodeKind::Seen)
    }

    /// Zero-size marker for a null field labelled `<Type> <name>`.
    pub fn null(slot_label: &str) -> Self {
        Self::marker(format!("{} => null", slot_label), NodeKind::Null)
    }

    fn marker(label: String, kind: NodeKind) -> Self {
        Self {
            kind,
            ..Self::new(label, 0)
        }
    }

    pub fn add_child(&mut self, child: Node) {
        self.deep_size += child.deep_size;
        self.children.push(child);
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn shallow_size(&self) -> u64 {
        self.shallow_size
    }

    pub fn deep_size(&self) -> u64 {
        self.deep_size
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Number of nodes in this subtree, markers included.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Node::count).sum::<usize>()
    }

    /// Length of the longest path from this node down to a leaf.
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_child_accumulates_deep_size() {
        let mut leaf = Node::new("leaf", 16);
        leaf.add_child(Node::null("String name"));
        let mut root = Node::new("root", 24);
        root.add_child(leaf);
        root.add_child(Node::new("other", 8));

        assert_eq!(root.shallow_size(), 24);
        assert_eq!(root.deep_size(), 48);
        assert_eq!(root.count(), 4);
        assert_eq!(root.depth(), 2);
    }

    #[test]
    fn test_markers_are_empty() {
        let seen = Node::seen("<Node#0>");
        assert_eq!(seen.label(), "[seen <Node#0>]");
        assert_eq!(seen.kind(), NodeKind::Seen);

        let null = Node::null("String name");
        assert_eq!(null.label(), "String name => null");
        assert_eq!(null.kind(), NodeKind::Null);

        for marker in [seen, null] {
            assert_eq!(marker.shallow_size(), 0);
            assert_eq!(marker.deep_size(), 0);
            assert!(!marker.has_children());
        }
        assert_eq!(Node::new("root", 8).kind(), NodeKind::Object);
    }

    #[test]
    fn test_serialize_skips_empty_children() {
        let node = Node::new("root => u8[]", 40);
        let json = serde_json::to_string(&node).expect("serializable");
        assert_eq!(
            json,
            r#"{"label":"root => u8[]","kind":"object","shallow_size":40,"deep_size":40}"#
        );
    }
}
