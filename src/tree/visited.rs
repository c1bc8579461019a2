//! Identity-keyed record of objects already turned into nodes

use std::collections::HashMap;

use crate::inspect::ObjectId;

/// Objects seen during one traversal, each with the index it was given on
/// first visit. Indices are sequential from zero in visitation order.
#[derive(Debug, Default)]
pub struct VisitedSet {
    indices: HashMap<ObjectId, usize>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index_of(&self, id: ObjectId) -> Option<usize> {
        self.indices.get(&id).copied()
    }

    /// Register `id`, returning its index. Re-inserting keeps the first index.
    pub fn insert(&mut self, id: ObjectId) -> usize {
        let next = self.indices.len();
        *self.indices.entry(id).or_insert(next)
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_follow_visit_order() {
        let (a, b) = (String::from("a"), String::from("b"));
        let mut visited = VisitedSet::new();
        assert!(visited.is_empty());
        assert_eq!(visited.insert(ObjectId::of(&b)), 0);
        assert_eq!(visited.insert(ObjectId::of(&a)), 1);
        assert_eq!(visited.insert(ObjectId::of(&b)), 0);
        assert_eq!(visited.index_of(ObjectId::of(&a)), Some(1));
        assert_eq!(visited.len(), 2);
    }

    #[test]
    fn test_equal_values_are_distinct_entries() {
        let (a, b) = (String::from("same"), String::from("same"));
        let mut visited = VisitedSet::new();
        visited.insert(ObjectId::of(&a));
        assert_eq!(visited.index_of(ObjectId::of(&b)), None);
    }
}
