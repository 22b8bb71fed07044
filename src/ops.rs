/*!
# Graph Operations

Traits describing what a keyed graph can do, independent of its storage:

- [`GraphNodeOrder`] / [`GraphEdgeOrder`]: sizes and node enumeration,
- [`AdjacencyList`]: read access to nodes and their neighborhoods,
- [`GraphNew`], [`GraphNodeEditing`], [`GraphEdgeEditing`]: construction and mutation,
- [`GraphFromScratch`]: building a graph from an edge iterator in one go.

All algorithms in [`crate::algo`] are written against these traits.
*/

use crate::prelude::*;

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Type identifying a node
    type Key: GraphKey;

    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> usize;

    /// Returns an iterator over all keys in ascending order
    fn vertices(&self) -> impl Iterator<Item = &Self::Key> + '_;

    /// Returns *true* if a node with the given key exists
    fn contains_node(&self, key: &Self::Key) -> bool;

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.number_of_nodes() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of directed edges of the graph.
    /// An undirected edge counts twice (once per direction).
    fn number_of_edges(&self) -> usize;

    /// Returns *true* if the graph has no edges
    fn is_singleton(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for nodes, neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + GraphEdgeOrder {
    /// Returns the node identified by `key`.
    ///
    /// # Errors
    /// Fails with [`GraphError::KeyNotFound`] if no such node exists.
    ///
    /// # Examples
    /// ```
    /// use kgraphs::prelude::*;
    ///
    /// let g = Graph::from_edges([(1, 2)]);
    /// assert_eq!(g.at(&1).unwrap().degree(), 1);
    /// assert_eq!(g.at(&3), Err(GraphError::KeyNotFound(3)));
    /// ```
    fn at(&self, key: &Self::Key) -> GraphResult<&GraphNode<Self::Key>, Self::Key>;

    /// Returns an iterator over all nodes in ascending key order
    fn nodes(&self) -> impl Iterator<Item = &GraphNode<Self::Key>> + '_;

    /// Returns the number of out-neighbors of `key`
    fn degree_of(&self, key: &Self::Key) -> GraphResult<usize, Self::Key> {
        Ok(self.at(key)?.degree())
    }

    /// Returns *true* if the edge `parent -> child` exists.
    /// Absent keys simply have no edges.
    fn has_edge(&self, parent: &Self::Key, child: &Self::Key) -> bool {
        self.at(parent).is_ok_and(|node| node.has_edge(child))
    }

    /// Returns *true* if both `first -> second` and `second -> first` exist
    fn has_mutual_edge(&self, first: &Self::Key, second: &Self::Key) -> bool {
        match (self.at(first), self.at(second)) {
            (Ok(first), Ok(second)) => first.has_mutual_edge(second),
            _ => false,
        }
    }

    /// Returns an iterator over all directed edges ordered by `(parent, child)`
    fn edges(&self) -> impl Iterator<Item = Edge<Self::Key>> + '_ {
        self.nodes().flat_map(|node| {
            node.neighbors()
                .map(move |child| Edge(node.key().clone(), child.clone()))
        })
    }
}

/// Provides functions to create an empty graph
pub trait GraphNew {
    /// Creates a graph without any nodes
    fn new() -> Self;
}

/// Provides functions to insert/erase nodes
pub trait GraphNodeEditing: GraphNodeOrder {
    /// Inserts a node without neighbors.
    /// Returns *false* (and does nothing) if the key already exists.
    fn insert(&mut self, key: Self::Key) -> bool;

    /// Inserts multiple nodes and returns how many were new
    fn insert_nodes<I>(&mut self, keys: I) -> usize
    where
        I: IntoIterator<Item = Self::Key>,
    {
        keys.into_iter()
            .fold(0, |inserted, key| inserted + self.insert(key) as usize)
    }

    /// Removes a node and every edge pointing to or from it.
    /// Returns *false* if no node with this key existed.
    fn erase(&mut self, key: &Self::Key) -> bool;

    /// Removes all nodes and edges
    fn clear(&mut self);
}

/// Provides functions to insert/remove edges
pub trait GraphEdgeEditing: AdjacencyList + GraphNodeEditing {
    /// Adds the edge `parent -> child`.
    /// Returns *false* if the edge already existed.
    ///
    /// # Errors
    /// Fails with [`GraphError::KeyNotFound`] if either key is absent.
    fn directed_edge(
        &mut self,
        parent: &Self::Key,
        child: &Self::Key,
    ) -> GraphResult<bool, Self::Key>;

    /// Removes the edge `parent -> child`.
    /// Returns *false* if the edge did not exist.
    ///
    /// # Errors
    /// Fails with [`GraphError::KeyNotFound`] if either key is absent.
    fn remove_directed_edge(
        &mut self,
        parent: &Self::Key,
        child: &Self::Key,
    ) -> GraphResult<bool, Self::Key>;

    /// Adds both `first -> second` and `second -> first`.
    /// Each direction is reported independently.
    ///
    /// # Errors
    /// Fails with [`GraphError::KeyNotFound`] if either key is absent; the graph is unchanged then.
    fn undirected_edge(
        &mut self,
        first: &Self::Key,
        second: &Self::Key,
    ) -> GraphResult<(bool, bool), Self::Key> {
        self.at(first)?;
        self.at(second)?;
        Ok((
            self.directed_edge(first, second)?,
            self.directed_edge(second, first)?,
        ))
    }

    /// Adds the edge `parent -> child`, inserting missing endpoints first.
    ///
    /// # Examples
    /// ```
    /// use kgraphs::prelude::*;
    ///
    /// let mut g = Graph::new();
    /// g.insert(1);
    ///
    /// let outcome = g.add_directed_edge(1, 2);
    /// assert!(!outcome.parent_inserted);
    /// assert!(outcome.child_inserted);
    /// assert!(outcome.edge_added);
    ///
    /// assert!(!g.add_directed_edge(1, 2).changed());
    /// ```
    fn add_directed_edge(&mut self, parent: Self::Key, child: Self::Key) -> DirectedInsertion {
        match self.directed_edge(&parent, &child) {
            Ok(edge_added) => DirectedInsertion {
                edge_added,
                ..Default::default()
            },
            Err(GraphError::KeyNotFound(_)) => {
                let parent_inserted = self.insert(parent.clone());
                let child_inserted = self.insert(child.clone());
                DirectedInsertion {
                    parent_inserted,
                    child_inserted,
                    edge_added: matches!(self.directed_edge(&parent, &child), Ok(true)),
                }
            }
        }
    }

    /// Adds both `first -> second` and `second -> first`, inserting missing endpoints first.
    ///
    /// # Examples
    /// ```
    /// use kgraphs::prelude::*;
    ///
    /// let mut g = Graph::from_edges([("a", "b")]);
    ///
    /// let outcome = g.add_undirected_edge("a", "b");
    /// assert!(!outcome.forward_added);
    /// assert!(outcome.backward_added);
    /// assert!(g.has_mutual_edge(&"a", &"b"));
    /// ```
    fn add_undirected_edge(&mut self, first: Self::Key, second: Self::Key) -> UndirectedInsertion {
        let forward = self.add_directed_edge(first.clone(), second.clone());
        let backward = self.add_directed_edge(second, first);
        UndirectedInsertion {
            first_inserted: forward.parent_inserted,
            second_inserted: forward.child_inserted,
            forward_added: forward.edge_added,
            backward_added: backward.edge_added,
        }
    }

    /// Upserts every given edge as directed edge and returns how many edges were new
    fn add_directed_edges<I, E>(&mut self, edges: I) -> usize
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge<Self::Key>>,
    {
        edges.into_iter().fold(0, |added, edge| {
            let Edge(parent, child) = edge.into();
            added + self.add_directed_edge(parent, child).edge_added as usize
        })
    }

    /// Upserts every given edge as undirected edge and returns how many directed edges were new
    fn add_undirected_edges<I, E>(&mut self, edges: I) -> usize
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge<Self::Key>>,
    {
        edges.into_iter().fold(0, |added, edge| {
            let Edge(first, second) = edge.into();
            let outcome = self.add_undirected_edge(first, second);
            added + outcome.forward_added as usize + outcome.backward_added as usize
        })
    }
}

/// Creates a graph from a list of edges
pub trait GraphFromScratch: GraphNew + GraphEdgeEditing + Sized {
    /// Creates a graph containing the given directed edges and their endpoints
    fn from_edges<I, E>(edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge<Self::Key>>,
    {
        let mut graph = Self::new();
        graph.add_directed_edges(edges);
        graph
    }

    /// Creates a graph containing the given undirected edges (as mutual pairs) and their endpoints
    fn from_undirected_edges<I, E>(edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge<Self::Key>>,
    {
        let mut graph = Self::new();
        graph.add_undirected_edges(edges);
        graph
    }

    /// Creates a graph of isolated nodes
    fn from_nodes<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = Self::Key>,
    {
        let mut graph = Self::new();
        graph.insert_nodes(keys);
        graph
    }
}

impl<G> GraphFromScratch for G where G: GraphNew + GraphEdgeEditing + Sized {}
