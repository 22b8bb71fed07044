use std::fmt::{Debug, Display};

use crate::GraphKey;

/// An edge is defined by two keys/endpoints.
/// Edges stored in a graph are always directed from `.0` to `.1`.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge<K>(pub K, pub K);

impl<K> Display for Edge<K>
where
    K: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl<K> Debug for Edge<K>
where
    K: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:?},{:?})", self.0, self.1)
    }
}

impl<K> Edge<K>
where
    K: GraphKey,
{
    /// Normalizes the edge such that the endpoint with smaller key comes first
    pub fn normalized(&self) -> Self {
        if self.is_normalized() {
            self.clone()
        } else {
            self.reverse()
        }
    }

    /// Returns true if the endpoint with smaller key comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1.clone(), self.0.clone())
    }
}

impl<K> From<(K, K)> for Edge<K> {
    fn from(value: (K, K)) -> Self {
        Edge(value.0, value.1)
    }
}

impl<K> From<&(K, K)> for Edge<K>
where
    K: Clone,
{
    fn from(value: &(K, K)) -> Self {
        Edge(value.0.clone(), value.1.clone())
    }
}

impl<K> From<&Edge<K>> for Edge<K>
where
    K: Clone,
{
    fn from(value: &Edge<K>) -> Self {
        value.clone()
    }
}

/// Outcome of an upserting directed edge insertion
/// ([`add_directed_edge`](crate::ops::GraphEdgeEditing::add_directed_edge)).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectedInsertion {
    /// The parent node did not exist and was inserted
    pub parent_inserted: bool,
    /// The child node did not exist and was inserted
    pub child_inserted: bool,
    /// The edge did not exist and was added
    pub edge_added: bool,
}

impl DirectedInsertion {
    /// Returns *true* if the graph was modified in any way
    pub fn changed(&self) -> bool {
        self.parent_inserted || self.child_inserted || self.edge_added
    }
}

/// Outcome of an upserting undirected edge insertion
/// ([`add_undirected_edge`](crate::ops::GraphEdgeEditing::add_undirected_edge)).
///
/// Both directions are inserted independently: one may be added while the other already existed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UndirectedInsertion {
    /// The first endpoint did not exist and was inserted
    pub first_inserted: bool,
    /// The second endpoint did not exist and was inserted
    pub second_inserted: bool,
    /// The edge `first -> second` was added
    pub forward_added: bool,
    /// The edge `second -> first` was added
    pub backward_added: bool,
}

impl UndirectedInsertion {
    /// Returns *true* if the graph was modified in any way
    pub fn changed(&self) -> bool {
        self.first_inserted || self.second_inserted || self.forward_added || self.backward_added
    }

    /// Returns *true* if neither direction existed before
    pub fn both_added(&self) -> bool {
        self.forward_added && self.backward_added
    }
}
