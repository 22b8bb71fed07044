use std::collections::{BTreeMap, btree_map::Entry};

use tracing::debug;

use crate::{prelude::*, testing::test_graph_ops};

/// A keyed, simple, directed graph owning all of its nodes.
///
/// Cloning performs a deep copy: the clone is fully independent of the original.
///
/// # Examples
/// ```
/// use kgraphs::prelude::*;
///
/// let mut g = Graph::new();
/// g.add_undirected_edge("berlin", "hamburg");
/// g.add_directed_edge("hamburg", "kiel");
///
/// assert_eq!(g.number_of_nodes(), 3);
/// assert_eq!(g.number_of_edges(), 3);
/// assert!(g.has_mutual_edge(&"berlin", &"hamburg"));
/// assert!(!g.has_mutual_edge(&"hamburg", &"kiel"));
///
/// assert!(g.erase(&"hamburg"));
/// assert!(g.is_singleton());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<K>
where
    K: GraphKey,
{
    nodes: BTreeMap<K, GraphNode<K>>,
    num_edges: usize,
}

impl<K> Default for Graph<K>
where
    K: GraphKey,
{
    fn default() -> Self {
        Self {
            nodes: BTreeMap::new(),
            num_edges: 0,
        }
    }
}

impl<K> Graph<K>
where
    K: GraphKey,
{
    fn at_mut(&mut self, key: &K) -> GraphResult<&mut GraphNode<K>, K> {
        self.nodes
            .get_mut(key)
            .ok_or_else(|| GraphError::KeyNotFound(key.clone()))
    }

    /// Fails with the first of both keys that is absent
    fn ensure_endpoints(&self, parent: &K, child: &K) -> GraphResult<(), K> {
        self.at(parent)?;
        self.at(child)?;
        Ok(())
    }
}

impl<K> GraphNew for Graph<K>
where
    K: GraphKey,
{
    fn new() -> Self {
        Self::default()
    }
}

impl<K> GraphNodeOrder for Graph<K>
where
    K: GraphKey,
{
    type Key = K;

    fn number_of_nodes(&self) -> usize {
        self.nodes.len()
    }

    fn vertices(&self) -> impl Iterator<Item = &K> + '_ {
        self.nodes.keys()
    }

    fn contains_node(&self, key: &K) -> bool {
        self.nodes.contains_key(key)
    }
}

impl<K> GraphEdgeOrder for Graph<K>
where
    K: GraphKey,
{
    fn number_of_edges(&self) -> usize {
        self.num_edges
    }
}

impl<K> AdjacencyList for Graph<K>
where
    K: GraphKey,
{
    fn at(&self, key: &K) -> GraphResult<&GraphNode<K>, K> {
        self.nodes
            .get(key)
            .ok_or_else(|| GraphError::KeyNotFound(key.clone()))
    }

    fn nodes(&self) -> impl Iterator<Item = &GraphNode<K>> + '_ {
        self.nodes.values()
    }
}

impl<K> GraphNodeEditing for Graph<K>
where
    K: GraphKey,
{
    fn insert(&mut self, key: K) -> bool {
        match self.nodes.entry(key) {
            Entry::Vacant(entry) => {
                let node = GraphNode::new(entry.key().clone());
                entry.insert(node);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    fn erase(&mut self, key: &K) -> bool {
        let Some(mut node) = self.nodes.remove(key) else {
            return false;
        };

        let outgoing = node.clear_edges();
        let incoming: usize = self
            .nodes
            .values_mut()
            .map(|other| other.remove_edge(key) as usize)
            .sum();

        self.num_edges -= outgoing + incoming;
        debug!(?key, outgoing, incoming, "erased node");
        true
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.num_edges = 0;
    }
}

impl<K> GraphEdgeEditing for Graph<K>
where
    K: GraphKey,
{
    fn directed_edge(&mut self, parent: &K, child: &K) -> GraphResult<bool, K> {
        self.ensure_endpoints(parent, child)?;
        let added = self.at_mut(parent)?.insert_edge(child.clone());
        self.num_edges += added as usize;
        Ok(added)
    }

    fn remove_directed_edge(&mut self, parent: &K, child: &K) -> GraphResult<bool, K> {
        self.ensure_endpoints(parent, child)?;
        let removed = self.at_mut(parent)?.remove_edge(child);
        self.num_edges -= removed as usize;
        Ok(removed)
    }
}

test_graph_ops!(graph_u32_keys, u32);
test_graph_ops!(graph_i64_keys, i64);
test_graph_ops!(graph_string_keys, String);

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn self_loops() {
        let mut graph = Graph::from_edges([(1, 1), (1, 2)]);
        assert_eq!(graph.number_of_edges(), 2);
        assert!(graph.has_mutual_edge(&1, &1));

        assert_eq!(graph.remove_directed_edge(&1, &1), Ok(true));
        assert_eq!(graph.number_of_edges(), 1);

        graph.add_directed_edge(2, 2);
        assert!(graph.erase(&2));
        assert_eq!(graph.number_of_edges(), 0);
        assert_eq!(graph.vertices().copied().collect_vec(), vec![1]);
    }

    #[test]
    fn vertices_and_edges_are_ordered() {
        let graph = Graph::from_edges([("c", "a"), ("a", "c"), ("a", "b"), ("b", "a")]);
        assert_eq!(graph.vertices().copied().collect_vec(), vec!["a", "b", "c"]);
        assert_eq!(
            graph.edges().collect_vec(),
            vec![Edge("a", "b"), Edge("a", "c"), Edge("b", "a"), Edge("c", "a")]
        );
        assert_eq!(
            graph.at(&"a").unwrap().neighbors().copied().collect_vec(),
            vec!["b", "c"]
        );
    }

    #[test]
    fn moved_graph_keeps_structure() {
        let graph = Graph::from_undirected_edges([(0, 1), (1, 2)]);
        let moved = graph;
        assert_eq!(moved.number_of_edges(), 4);
        assert_eq!(moved.degree_of(&1), Ok(2));
        assert_eq!(moved.degree_of(&3), Err(GraphError::KeyNotFound(3)));
    }
}
