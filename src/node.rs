/*!
# Node Representation

Nodes are identified by a *key* of any type that is totally ordered, hashable and cloneable
(see [`GraphKey`]). Integers and strings are the common choices.

A [`GraphNode`] holds its key together with its outgoing adjacency. Neighbors are stored by key
in an ordered set, never by reference: the owning graph is the only owner of node storage and
resolves neighbor keys on demand. This keeps nodes relocatable and makes dangling neighbor
references impossible as long as the graph purges keys on erase.
*/

use std::{
    collections::{BTreeSet, btree_set},
    fmt::Debug,
    hash::Hash,
};

use fxhash::FxHashMap;

/// Everything that can identify a node.
///
/// Automatically implemented for all types satisfying the bounds.
pub trait GraphKey: Ord + Hash + Clone + Debug {}

impl<K> GraphKey for K where K: Ord + Hash + Clone + Debug {}

/// Unordered mapping from keys to (borrowed) nodes as used by traversal results
pub type NodeMap<'a, K> = FxHashMap<K, &'a GraphNode<K>>;

/// A single vertex: its key and the keys of all its out-neighbors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode<K>
where
    K: GraphKey,
{
    key: K,
    adjacency: BTreeSet<K>,
}

impl<K> GraphNode<K>
where
    K: GraphKey,
{
    /// Creates a node without any neighbors
    pub fn new(key: K) -> Self {
        Self {
            key,
            adjacency: BTreeSet::new(),
        }
    }

    /// Returns the key identifying this node
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns the set of out-neighbor keys
    pub fn adjacency(&self) -> &BTreeSet<K> {
        &self.adjacency
    }

    /// Returns an iterator over the out-neighbor keys in ascending order
    pub fn neighbors(&self) -> btree_set::Iter<'_, K> {
        self.adjacency.iter()
    }

    /// Returns the number of out-neighbors
    pub fn degree(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns *true* if the node has no out-neighbors
    pub fn is_singleton(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Adds a directed edge to `key`.
    /// Returns *false* if the edge already existed.
    pub fn insert_edge(&mut self, key: K) -> bool {
        self.adjacency.insert(key)
    }

    /// Removes the directed edge to `key`.
    /// Returns *true* if the edge existed.
    pub fn remove_edge(&mut self, key: &K) -> bool {
        self.adjacency.remove(key)
    }

    /// Returns *true* if this node points to `key`
    pub fn has_edge(&self, key: &K) -> bool {
        self.adjacency.contains(key)
    }

    /// Returns *true* if this node points to `other` **and** `other` points back.
    /// A self loop is mutual with itself.
    pub fn has_mutual_edge(&self, other: &GraphNode<K>) -> bool {
        self.has_edge(&other.key) && other.has_edge(&self.key)
    }

    /// Removes all out-going edges and returns how many were removed
    pub(crate) fn clear_edges(&mut self) -> usize {
        let removed = self.adjacency.len();
        self.adjacency.clear();
        removed
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn insert_and_remove_edges() {
        let mut node = GraphNode::new(1u32);
        assert!(node.is_singleton());

        assert!(node.insert_edge(5));
        assert!(node.insert_edge(3));
        assert!(!node.insert_edge(5));
        assert_eq!(node.degree(), 2);
        assert_eq!(node.neighbors().copied().collect_vec(), vec![3, 5]);

        assert!(node.has_edge(&3));
        assert!(!node.has_edge(&4));

        assert!(node.remove_edge(&3));
        assert!(!node.remove_edge(&3));
        assert_eq!(node.neighbors().copied().collect_vec(), vec![5]);

        assert_eq!(node.clear_edges(), 1);
        assert!(node.is_singleton());
    }

    #[test]
    fn mutual_edges() {
        let mut a = GraphNode::new("a");
        let mut b = GraphNode::new("b");

        a.insert_edge("b");
        assert!(!a.has_mutual_edge(&b));
        assert!(!b.has_mutual_edge(&a));

        b.insert_edge("a");
        assert!(a.has_mutual_edge(&b));
        assert!(b.has_mutual_edge(&a));

        let mut c = GraphNode::new("c");
        assert!(!c.has_mutual_edge(&c.clone()));
        c.insert_edge("c");
        assert!(c.has_mutual_edge(&c.clone()));
    }
}
