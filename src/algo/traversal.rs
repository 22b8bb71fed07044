/*!
Graph traversal algorithms and traversal-derived utilities.

This module provides:
- a layered **breadth-first traversal** ([`BfsLayers`]) from which hop distances follow directly,
- an explicit-stack **depth-first traversal** producing nodes in *postorder of finish*,
  optionally sharing a caller-provided visited-set between several runs,
- hop [`distance`](Traversal::distance), [`shortest_path`](Traversal::shortest_path)
  and reachability queries.

Neighbors are always explored in ascending key order, so all results are deterministic
(up to the unordered maps inside a layer).
*/

use std::{
    collections::{VecDeque, btree_set},
    ops::Index,
    slice, vec,
};

use fxhash::{FxHashMap, FxHashSet};
use tracing::trace;

use super::*;

/// Result of a breadth-first traversal: layer `i` holds all nodes at hop distance `i`
/// from the source. Layer `0` consists of the source only.
#[derive(Debug, Clone)]
pub struct BfsLayers<'a, K>
where
    K: GraphKey,
{
    layers: Vec<NodeMap<'a, K>>,
}

impl<'a, K> BfsLayers<'a, K>
where
    K: GraphKey,
{
    /// Returns the node the traversal started at
    pub fn source(&self) -> Option<&'a GraphNode<K>> {
        self.layers.first()?.values().next().copied()
    }

    /// Returns the number of layers, i.e. the eccentricity of the source plus one
    pub fn number_of_layers(&self) -> usize {
        self.layers.len()
    }

    /// Returns the number of nodes reached (including the source)
    pub fn number_of_nodes(&self) -> usize {
        self.layers.iter().map(|layer| layer.len()).sum()
    }

    /// Returns the `i`-th layer if it exists
    pub fn layer(&self, i: usize) -> Option<&NodeMap<'a, K>> {
        self.layers.get(i)
    }

    /// Returns an iterator over all layers in increasing distance
    pub fn iter(&self) -> slice::Iter<'_, NodeMap<'a, K>> {
        self.layers.iter()
    }

    /// Returns the index of the layer containing `key`, i.e. its hop distance from the source.
    /// Returns `None` if `key` was not reached.
    pub fn depth_of(&self, key: &K) -> Option<usize> {
        self.layers.iter().position(|layer| layer.contains_key(key))
    }

    /// Returns *true* if `key` was reached
    pub fn contains(&self, key: &K) -> bool {
        self.depth_of(key).is_some()
    }

    /// Returns the keys of every layer, each layer sorted increasingly
    pub fn sorted_keys(&self) -> Vec<Vec<K>> {
        self.layers
            .iter()
            .map(|layer| {
                let mut keys: Vec<K> = layer.keys().cloned().collect();
                keys.sort_unstable();
                keys
            })
            .collect()
    }

    /// Consumes the result and returns the underlying layers
    pub fn into_inner(self) -> Vec<NodeMap<'a, K>> {
        self.layers
    }
}

impl<'a, K> Index<usize> for BfsLayers<'a, K>
where
    K: GraphKey,
{
    type Output = NodeMap<'a, K>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.layers[index]
    }
}

impl<'a, K> IntoIterator for BfsLayers<'a, K>
where
    K: GraphKey,
{
    type Item = NodeMap<'a, K>;
    type IntoIter = vec::IntoIter<NodeMap<'a, K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.layers.into_iter()
    }
}

impl<'b, 'a, K> IntoIterator for &'b BfsLayers<'a, K>
where
    K: GraphKey,
{
    type Item = &'b NodeMap<'a, K>;
    type IntoIter = slice::Iter<'b, NodeMap<'a, K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.layers.iter()
    }
}

/// Provides traversal-based queries directly on graphs
pub trait Traversal: AdjacencyList + Sized {
    /// Computes the BFS layers of all nodes reachable from `source`.
    ///
    /// Nodes are marked as visited when they are enqueued, so each node is enqueued once.
    /// Layer boundaries are found by counting how many nodes were enqueued while processing
    /// the current layer.
    ///
    /// # Errors
    /// Fails with [`GraphError::KeyNotFound`] if `source` is absent.
    ///
    /// # Examples
    /// ```
    /// use kgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_undirected_edges([(0, 1), (0, 2), (1, 3)]);
    ///
    /// let layers = g.breadth_first_traversal(&0).unwrap();
    /// assert_eq!(layers.sorted_keys(), vec![vec![0], vec![1, 2], vec![3]]);
    /// assert_eq!(layers.depth_of(&3), Some(2));
    /// ```
    fn breadth_first_traversal(
        &self,
        source: &Self::Key,
    ) -> GraphResult<BfsLayers<'_, Self::Key>, Self::Key> {
        let start = self.at(source)?;

        let mut visited: FxHashSet<&Self::Key> = FxHashSet::default();
        visited.insert(start.key());

        let mut queue = VecDeque::from([start]);
        let mut layers = Vec::new();
        let mut layer = NodeMap::default();

        // nodes of the current layer still in the queue / nodes enqueued for the next layer
        let mut remaining = 1usize;
        let mut enqueued = 0usize;

        while let Some(node) = queue.pop_front() {
            for child in node.neighbors() {
                if visited.insert(child) {
                    queue.push_back(self.at(child)?);
                    enqueued += 1;
                }
            }

            layer.insert(node.key().clone(), node);
            remaining -= 1;

            if remaining == 0 {
                layers.push(std::mem::take(&mut layer));
                remaining = enqueued;
                enqueued = 0;
            }
        }

        trace!(
            ?source,
            layers = layers.len(),
            reached = visited.len(),
            "breadth-first traversal"
        );
        Ok(BfsLayers { layers })
    }

    /// Returns all nodes reachable from `source` in **postorder of finish**: a node is emitted only
    /// after all of its (not yet visited) descendants have been emitted. The source comes last.
    ///
    /// # Errors
    /// Fails with [`GraphError::KeyNotFound`] if `source` is absent.
    ///
    /// # Examples
    /// ```
    /// use kgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges([(0, 1), (1, 2), (0, 3)]);
    ///
    /// let order: Vec<_> = g
    ///     .depth_first_traversal(&0)
    ///     .unwrap()
    ///     .into_iter()
    ///     .map(|node| *node.key())
    ///     .collect();
    /// assert_eq!(order, vec![2, 1, 3, 0]);
    /// ```
    fn depth_first_traversal(
        &self,
        source: &Self::Key,
    ) -> GraphResult<Vec<&GraphNode<Self::Key>>, Self::Key> {
        let mut visited: FxHashSet<Self::Key> = FxHashSet::default();
        self.depth_first_traversal_with(source, &mut visited)
    }

    /// Like [`Traversal::depth_first_traversal`] but uses (and updates) the given visited-set.
    /// Nodes already contained in `visited` are treated as explored and are neither entered nor
    /// emitted; the source itself is always entered.
    ///
    /// This allows composing multiple traversals over disjoint unvisited regions of a graph.
    ///
    /// # Errors
    /// Fails with [`GraphError::KeyNotFound`] if `source` is absent.
    ///
    /// # Examples
    /// ```
    /// use std::collections::BTreeSet;
    /// use kgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges([(0, 1), (2, 1)]);
    /// let mut visited = BTreeSet::new();
    ///
    /// assert_eq!(g.depth_first_traversal_with(&0, &mut visited).unwrap().len(), 2);
    /// // `1` was already explored by the first run
    /// assert_eq!(g.depth_first_traversal_with(&2, &mut visited).unwrap().len(), 1);
    /// assert_eq!(visited.len(), 3);
    /// ```
    fn depth_first_traversal_with<S>(
        &self,
        source: &Self::Key,
        visited: &mut S,
    ) -> GraphResult<Vec<&GraphNode<Self::Key>>, Self::Key>
    where
        S: Set<Self::Key>,
    {
        let start = self.at(source)?;
        visited.insert(source.clone());

        // each frame resumes its neighbor iterator; visited only grows, so resuming finds the
        // same first unvisited neighbor as a rescan would
        let mut stack: Vec<(&GraphNode<Self::Key>, btree_set::Iter<'_, Self::Key>)> =
            vec![(start, start.neighbors())];
        let mut finished = Vec::new();

        while let Some((node, neighbors)) = stack.last_mut() {
            match neighbors.find(|&child| !visited.contains(child)) {
                Some(child) => {
                    visited.insert(child.clone());
                    let next = self.at(child)?;
                    stack.push((next, next.neighbors()));
                }
                None => {
                    finished.push(*node);
                    stack.pop();
                }
            }
        }

        trace!(?source, finished = finished.len(), "depth-first traversal");
        Ok(finished)
    }

    /// Returns the hop distance from `begin` to `end`, or `None` if `end` is unreachable.
    ///
    /// # Errors
    /// Fails with [`GraphError::KeyNotFound`] if `end` is absent, otherwise if `begin` is absent.
    ///
    /// # Examples
    /// ```
    /// use kgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges([(0, 1), (1, 2), (3, 0)]);
    /// assert_eq!(g.distance(&0, &2), Ok(Some(2)));
    /// assert_eq!(g.distance(&0, &3), Ok(None));
    /// assert_eq!(g.distance(&0, &7), Err(GraphError::KeyNotFound(7)));
    /// ```
    fn distance(
        &self,
        begin: &Self::Key,
        end: &Self::Key,
    ) -> GraphResult<Option<usize>, Self::Key> {
        self.at(end)?;
        Ok(self.breadth_first_traversal(begin)?.depth_of(end))
    }

    /// Returns *true* if there is a directed path from `begin` to `end`
    ///
    /// # Errors
    /// Fails with [`GraphError::KeyNotFound`] if either key is absent.
    fn is_reachable(&self, begin: &Self::Key, end: &Self::Key) -> GraphResult<bool, Self::Key> {
        Ok(self.distance(begin, end)?.is_some())
    }

    /// Computes a path with the fewest edges from `begin` to `end` using BFS.
    ///
    /// - Returns `Some(path)` if a path exists, where `path` starts with `begin` and ends with `end`.
    /// - Returns `None` if no path exists.
    ///
    /// # Errors
    /// Fails with [`GraphError::KeyNotFound`] if either key is absent.
    ///
    /// # Examples
    /// ```
    /// use kgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges([(0, 1), (1, 2), (0, 3), (3, 4), (4, 2)]);
    ///
    /// let path: Vec<_> = g
    ///     .shortest_path(&0, &2)
    ///     .unwrap()
    ///     .unwrap()
    ///     .into_iter()
    ///     .map(|node| *node.key())
    ///     .collect();
    /// assert_eq!(path, vec![0, 1, 2]);
    /// ```
    fn shortest_path(
        &self,
        begin: &Self::Key,
        end: &Self::Key,
    ) -> GraphResult<Option<Vec<&GraphNode<Self::Key>>>, Self::Key> {
        let target = self.at(end)?;
        let start = self.at(begin)?;

        if begin == end {
            return Ok(Some(vec![start]));
        }

        // doubles as visited-set; the entry of `begin` is never followed
        let mut predecessor: FxHashMap<&Self::Key, &GraphNode<Self::Key>> = FxHashMap::default();
        predecessor.insert(start.key(), start);

        let mut queue = VecDeque::from([start]);
        'search: while let Some(node) = queue.pop_front() {
            for child in node.neighbors() {
                if predecessor.contains_key(child) {
                    continue;
                }

                predecessor.insert(child, node);
                if child == end {
                    break 'search;
                }
                queue.push_back(self.at(child)?);
            }
        }

        if !predecessor.contains_key(end) {
            return Ok(None);
        }

        let mut path = vec![target];
        let mut current = end;
        while current != begin {
            let Some(&parent) = predecessor.get(current) else {
                break;
            };
            path.push(parent);
            current = parent.key();
        }

        path.reverse();
        Ok(Some(path))
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    use super::*;
    use crate::testing::*;

    fn keys<K: GraphKey + Copy>(nodes: &[&GraphNode<K>]) -> Vec<K> {
        nodes.iter().map(|node| *node.key()).collect()
    }

    fn layered_graph() -> Graph<u32> {
        Graph::from_undirected_edges([
            (0, 1),
            (0, 3),
            (1, 2),
            (1, 4),
            (1, 6),
            (1, 7),
            (2, 3),
            (2, 8),
            (2, 9),
            (4, 6),
            (4, 7),
            (4, 5),
            (6, 7),
        ])
    }

    #[test]
    fn bfs_layers() {
        let graph = layered_graph();
        let layers = graph.breadth_first_traversal(&0).unwrap();

        assert_eq!(
            layers.sorted_keys(),
            vec![vec![0], vec![1, 3], vec![2, 4, 6, 7], vec![5, 8, 9]]
        );
        assert_eq!(layers.number_of_layers(), 4);
        assert_eq!(layers.number_of_nodes(), 10);
        assert_eq!(layers.source().map(|node| *node.key()), Some(0));
        assert_eq!(layers[1].len(), 2);
        assert!(layers.layer(4).is_none());

        assert_eq!(graph.distance(&0, &5), Ok(Some(3)));
        assert_eq!(graph.distance(&0, &0), Ok(Some(0)));
        assert_eq!(graph.distance(&5, &0), Ok(Some(3)));
    }

    #[test]
    fn bfs_directed_reaches_only_descendants() {
        //  / 2 --- \
        // 1         4 - 3
        //  \ 0 - 5 /
        let graph = Graph::from_edges([(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)]);

        let layers = graph.breadth_first_traversal(&1).unwrap();
        assert_eq!(
            layers.sorted_keys(),
            vec![vec![1], vec![0, 2], vec![4, 5], vec![3]]
        );

        let layers = graph.breadth_first_traversal(&5).unwrap();
        assert_eq!(layers.sorted_keys(), vec![vec![5], vec![4], vec![3]]);
        assert!(!layers.contains(&1));

        let layers = graph.breadth_first_traversal(&3).unwrap();
        assert_eq!(layers.sorted_keys(), vec![vec![3]]);
    }

    #[test]
    fn bfs_missing_source() {
        let graph = layered_graph();
        assert_eq!(
            graph.breadth_first_traversal(&42).map(|layers| layers.number_of_layers()),
            Err(GraphError::KeyNotFound(42))
        );
    }

    #[test]
    fn bfs_layers_match_hop_distances() {
        let rng = &mut Pcg64::seed_from_u64(1234);

        for n in [5u32, 20, 60] {
            for m_ub in [n, n * 2, n * 4] {
                let edges = random_edges(rng, n, m_ub as usize);
                let graph = graph_from_indices::<u32>(n, &edges);
                let oracle = hop_distances(n, &edges, 0);

                let layers = graph.breadth_first_traversal(&0).unwrap();
                assert_eq!(layers[0].len(), 1);
                assert!(layers[0].contains_key(&0));

                for u in 0..n {
                    assert_eq!(layers.depth_of(&u), oracle[u as usize]);
                    assert_eq!(graph.distance(&0, &u), Ok(oracle[u as usize]));
                }

                // every node of layer i > 0 has an in-neighbor in layer i - 1
                for i in 1..layers.number_of_layers() {
                    for key in layers[i].keys() {
                        assert!(
                            layers[i - 1]
                                .values()
                                .any(|parent| parent.has_edge(key))
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn dfs_postorder() {
        let graph = Graph::from_undirected_edges([
            (0, 1),
            (0, 2),
            (0, 4),
            (1, 3),
            (1, 4),
            (3, 4),
            (2, 5),
            (2, 6),
            (6, 5),
        ]);

        let order = graph.depth_first_traversal(&0).unwrap();
        assert_eq!(keys(&order), vec![4, 3, 1, 6, 5, 2, 0]);

        let graph = Graph::from_edges([(1, 2), (1, 0), (4, 3), (0, 5), (5, 4)]);
        assert_eq!(
            keys(&graph.depth_first_traversal(&1).unwrap()),
            vec![3, 4, 5, 0, 2, 1]
        );
        assert_eq!(
            keys(&graph.depth_first_traversal(&5).unwrap()),
            vec![3, 4, 5]
        );
        assert_eq!(
            graph.depth_first_traversal(&9).map(|order| order.len()),
            Err(GraphError::KeyNotFound(9))
        );
    }

    #[test]
    fn dfs_visits_reachable_nodes_once() {
        let rng = &mut Pcg64::seed_from_u64(42);

        for n in [5u32, 20, 60] {
            for m_ub in [n, n * 2, n * 4] {
                let edges = random_edges(rng, n, m_ub as usize);
                let graph = graph_from_indices::<u32>(n, &edges);
                let reach = reachability_matrix(n, &edges);

                for source in [0, n / 2, n - 1] {
                    let order = keys(&graph.depth_first_traversal(&source).unwrap());
                    assert_eq!(order.iter().unique().count(), order.len());
                    assert_eq!(order.last(), Some(&source));

                    let expected = (0..n).filter(|&v| reach[source as usize][v as usize]);
                    assert_eq!(
                        order.iter().copied().sorted().collect_vec(),
                        expected.collect_vec()
                    );
                }
            }
        }
    }

    #[test]
    fn dfs_with_shared_visited_set() {
        let graph = Graph::from_edges([(0, 1), (1, 2), (3, 1), (3, 4), (5, 5)]);
        let mut visited = BTreeSet::new();

        let first = keys(&graph.depth_first_traversal_with(&0, &mut visited).unwrap());
        let second = keys(&graph.depth_first_traversal_with(&3, &mut visited).unwrap());
        let third = keys(&graph.depth_first_traversal_with(&5, &mut visited).unwrap());

        assert_eq!(first, vec![2, 1, 0]);
        assert_eq!(second, vec![4, 3]);
        assert_eq!(third, vec![5]);
        assert_eq!(visited.into_iter().collect_vec(), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn distance_unreachable_and_missing() {
        let graph = Graph::from_edges([("a", "b"), ("c", "b")]);

        assert_eq!(graph.distance(&"a", &"b"), Ok(Some(1)));
        assert_eq!(graph.distance(&"a", &"c"), Ok(None));
        assert_eq!(graph.is_reachable(&"a", &"c"), Ok(false));
        assert_eq!(graph.is_reachable(&"c", &"b"), Ok(true));

        // the destination is checked first
        assert_eq!(
            graph.distance(&"x", &"y"),
            Err(GraphError::KeyNotFound("y"))
        );
        assert_eq!(
            graph.distance(&"x", &"a"),
            Err(GraphError::KeyNotFound("x"))
        );
    }

    #[test]
    fn shortest_paths() {
        let rng = &mut Pcg64::seed_from_u64(7);

        for n in [5u32, 20, 60] {
            let edges = random_edges(rng, n, (n * 2) as usize);
            let graph = graph_from_indices::<u32>(n, &edges);
            let oracle = hop_distances(n, &edges, 0);

            for v in 0..n {
                let path = graph.shortest_path(&0, &v).unwrap();
                match oracle[v as usize] {
                    None => assert!(path.is_none()),
                    Some(d) => {
                        let path = keys(&path.unwrap());
                        assert_eq!(path.len(), d + 1);
                        assert_eq!(path.first(), Some(&0));
                        assert_eq!(path.last(), Some(&v));
                        for (u, w) in path.iter().tuple_windows() {
                            assert!(graph.has_edge(u, w));
                        }
                    }
                }
            }
        }

        let graph = Graph::from_edges([(0, 1)]);
        assert_eq!(
            graph.shortest_path(&0, &2).map(|p| p.is_some()),
            Err(GraphError::KeyNotFound(2))
        );
        assert_eq!(graph.shortest_path(&1, &0).map(|p| p.is_some()), Ok(false));
    }
}
