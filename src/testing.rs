//! Crate-private helpers for randomized tests: key construction, random edge lists and
//! brute-force oracles to compare the graph algorithms against.

#[cfg(test)]
use rand::Rng;

#[cfg(test)]
use itertools::Itertools;

#[cfg(test)]
use crate::prelude::*;

/// Keys that can be derived from a dense index; used to run the same tests for different key types
#[cfg(test)]
pub(crate) trait TestKey: GraphKey {
    fn from_index(i: u32) -> Self;
}

#[cfg(test)]
impl TestKey for u32 {
    fn from_index(i: u32) -> Self {
        i
    }
}

#[cfg(test)]
impl TestKey for i64 {
    fn from_index(i: u32) -> Self {
        i as i64 - 1000
    }
}

#[cfg(test)]
impl TestKey for String {
    // zero-padded so that the lexicographic order matches the index order
    fn from_index(i: u32) -> Self {
        format!("v{i:04}")
    }
}

/// Creates a sorted list of at most `m_ub` distinct random directed edges between nodes `0..n`
#[cfg(test)]
pub(crate) fn random_edges<R: Rng>(rng: &mut R, n: u32, m_ub: usize) -> Vec<(u32, u32)> {
    let mut edges = (0..m_ub)
        .map(|_| (rng.random_range(0..n), rng.random_range(0..n)))
        .collect_vec();
    edges.sort_unstable();
    edges.dedup();
    edges
}

/// Builds a graph over nodes `0..n` (isolated nodes included) from index edges
#[cfg(test)]
pub(crate) fn graph_from_indices<K: TestKey>(n: u32, edges: &[(u32, u32)]) -> Graph<K> {
    let mut graph = Graph::from_nodes((0..n).map(K::from_index));
    for &(u, v) in edges {
        graph.add_directed_edge(K::from_index(u), K::from_index(v));
    }
    graph
}

/// Reflexive-transitive closure of the edge relation: `reach[u][v]` iff `v` is reachable from `u`
#[cfg(test)]
pub(crate) fn reachability_matrix(n: u32, edges: &[(u32, u32)]) -> Vec<Vec<bool>> {
    let n = n as usize;
    let mut reach = vec![vec![false; n]; n];
    for (u, row) in reach.iter_mut().enumerate() {
        row[u] = true;
    }
    for &(u, v) in edges {
        reach[u as usize][v as usize] = true;
    }
    for k in 0..n {
        for i in 0..n {
            if reach[i][k] {
                for j in 0..n {
                    if reach[k][j] {
                        reach[i][j] = true;
                    }
                }
            }
        }
    }
    reach
}

/// Hop distances from `source` computed by relaxing all edges until nothing changes
#[cfg(test)]
pub(crate) fn hop_distances(n: u32, edges: &[(u32, u32)], source: u32) -> Vec<Option<usize>> {
    let mut dist = vec![None; n as usize];
    dist[source as usize] = Some(0);
    let mut changed = true;
    while changed {
        changed = false;
        for &(u, v) in edges {
            if let Some(du) = dist[u as usize] {
                if dist[v as usize].is_none_or(|dv| du + 1 < dv) {
                    dist[v as usize] = Some(du + 1);
                    changed = true;
                }
            }
        }
    }
    dist
}

/// Every graph representation should pass the editing suite for several key types
macro_rules! test_graph_ops {
    ($env:ident, $key:ty) => {
        #[cfg(test)]
        mod $env {
            use std::collections::BTreeSet;

            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            use crate::{prelude::*, testing::*};

            type K = $key;

            fn key(i: u32) -> K {
                <K as TestKey>::from_index(i)
            }

            #[test]
            fn graph_new() {
                let graph = Graph::<K>::new();
                assert!(graph.is_empty());
                assert!(graph.is_singleton());
                assert_eq!(graph.number_of_nodes(), 0);
                assert_eq!(graph.number_of_edges(), 0);
                assert_eq!(graph.vertices().count(), 0);
                assert_eq!(graph.at(&key(0)), Err(GraphError::KeyNotFound(key(0))));
            }

            #[test]
            fn insert_is_idempotent() {
                let mut graph = Graph::<K>::new();
                for i in 0..20 {
                    assert!(graph.insert(key(i)));
                }
                graph.add_directed_edge(key(1), key(2));
                graph.add_directed_edge(key(2), key(1));

                let before = graph.clone();
                for i in 0..20 {
                    assert!(!graph.insert(key(i)));
                }
                assert_eq!(graph, before);
                assert_eq!(graph.number_of_nodes(), 20);
                assert_eq!(graph.vertices().cloned().collect_vec(), (0..20).map(key).collect_vec());
            }

            #[test]
            fn edges_require_existing_keys() {
                let mut graph = Graph::from_nodes([key(0), key(1)]);

                assert_eq!(
                    graph.directed_edge(&key(0), &key(7)),
                    Err(GraphError::KeyNotFound(key(7)))
                );
                assert_eq!(
                    graph.directed_edge(&key(5), &key(7)),
                    Err(GraphError::KeyNotFound(key(5)))
                );
                assert_eq!(
                    graph.undirected_edge(&key(1), &key(9)),
                    Err(GraphError::KeyNotFound(key(9)))
                );
                assert!(graph.is_singleton());

                assert_eq!(graph.directed_edge(&key(0), &key(1)), Ok(true));
                assert_eq!(graph.directed_edge(&key(0), &key(1)), Ok(false));
                assert_eq!(graph.undirected_edge(&key(0), &key(1)), Ok((false, true)));
                assert_eq!(graph.number_of_edges(), 2);
                assert!(graph.has_mutual_edge(&key(0), &key(1)));
            }

            #[test]
            fn upsert_reports_changes() {
                let mut graph = Graph::<K>::new();

                let outcome = graph.add_directed_edge(key(3), key(4));
                assert!(outcome.parent_inserted && outcome.child_inserted && outcome.edge_added);

                let outcome = graph.add_directed_edge(key(3), key(4));
                assert!(!outcome.changed());

                let outcome = graph.add_undirected_edge(key(4), key(5));
                assert!(!outcome.first_inserted);
                assert!(outcome.second_inserted);
                assert!(outcome.both_added());

                let outcome = graph.add_undirected_edge(key(3), key(4));
                assert!(!outcome.forward_added);
                assert!(outcome.backward_added);

                assert_eq!(graph.number_of_nodes(), 3);
                assert_eq!(graph.number_of_edges(), 4);
            }

            #[test]
            fn random_edge_editing() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for n in [10u32, 20, 50] {
                    for m_ub in [n * 2, n * 5, n * 10] {
                        let edges = random_edges(rng, n, m_ub as usize);
                        let mut oracle: BTreeSet<(u32, u32)> = edges.iter().copied().collect();

                        let mut graph = graph_from_indices::<K>(n, &edges);
                        assert_eq!(graph.number_of_nodes(), n as usize);
                        assert_eq!(graph.number_of_edges(), oracle.len());
                        assert_eq!(
                            graph.edges().collect_vec(),
                            oracle.iter().map(|&(u, v)| Edge(key(u), key(v))).collect_vec()
                        );

                        for _ in 0..(n * 2) {
                            let u = rng.random_range(0..n);
                            let v = rng.random_range(0..n);

                            assert_eq!(graph.has_edge(&key(u), &key(v)), oracle.contains(&(u, v)));
                            assert_eq!(
                                graph.remove_directed_edge(&key(u), &key(v)),
                                Ok(oracle.remove(&(u, v)))
                            );
                            assert_eq!(graph.number_of_edges(), oracle.len());
                        }

                        for u in 0..n {
                            let expected = oracle.iter().filter(|&&(p, _)| p == u).count();
                            assert_eq!(graph.degree_of(&key(u)), Ok(expected));
                        }
                    }
                }
            }

            #[test]
            fn erase_purges_references() {
                let rng = &mut Pcg64Mcg::seed_from_u64(4);

                for n in [10u32, 30] {
                    let edges = random_edges(rng, n, (n * 4) as usize);
                    let mut graph = graph_from_indices::<K>(n, &edges);

                    for u in (0..n).step_by(3) {
                        assert!(graph.erase(&key(u)));
                        assert!(!graph.erase(&key(u)));
                        assert_eq!(graph.at(&key(u)), Err(GraphError::KeyNotFound(key(u))));
                        assert!(graph.nodes().all(|node| !node.has_edge(&key(u))));
                    }

                    let remaining = edges
                        .iter()
                        .filter(|&&(u, v)| u % 3 != 0 && v % 3 != 0)
                        .count();
                    assert_eq!(graph.number_of_edges(), remaining);
                    assert_eq!(
                        graph.number_of_edges(),
                        graph.nodes().map(|node| node.degree()).sum::<usize>()
                    );
                }
            }

            #[test]
            fn clone_is_independent() {
                let mut graph = Graph::<K>::from_undirected_edges([(key(0), key(1)), (key(1), key(2))]);
                let copy = graph.clone();

                graph.erase(&key(1));
                graph.add_directed_edge(key(0), key(2));

                assert_eq!(copy.number_of_nodes(), 3);
                assert_eq!(copy.number_of_edges(), 4);
                assert!(copy.has_mutual_edge(&key(0), &key(1)));
                assert!(!copy.has_edge(&key(0), &key(2)));

                graph.clear();
                assert!(graph.is_empty() && graph.is_singleton());
                assert!(!copy.is_empty());
            }
        }
    };
}

pub(crate) use test_graph_ops;
