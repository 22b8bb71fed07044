/*!
Edge reversal.

The transpose of a graph has the same nodes and the edge `v -> u` for every edge `u -> v`.
Mutual pairs (and self loops) are their own reversal and are copied unchanged.
*/

use fxhash::FxHashSet;
use tracing::debug;

use super::*;

/// Provides the transpose of a graph
pub trait Transpose: Sized {
    /// Returns an independent copy of the graph with every edge reversed.
    ///
    /// # Examples
    /// ```
    /// use kgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges([(1, 2), (2, 3), (3, 2)]);
    /// let t = g.transpose();
    ///
    /// assert!(t.has_edge(&2, &1));
    /// assert!(!t.has_edge(&1, &2));
    /// assert!(t.has_mutual_edge(&2, &3));
    /// assert_eq!(t.number_of_edges(), g.number_of_edges());
    /// ```
    fn transpose(&self) -> Self;
}

impl<G> Transpose for G
where
    G: GraphEdgeEditing + Clone,
{
    fn transpose(&self) -> Self {
        let mut transposed = self.clone();
        let mut handled: FxHashSet<Edge<G::Key>> = FxHashSet::default();

        let mut reversed = 0usize;
        let mut kept = 0usize;

        // the original is never edited, so its edges serve as snapshot
        for edge in self.edges() {
            let Edge(parent, child) = &edge;
            if self.has_mutual_edge(parent, child) {
                kept += 1;
                continue;
            }
            if !handled.insert(edge.normalized()) {
                continue;
            }

            let removed = transposed.remove_directed_edge(parent, child);
            let added = transposed.directed_edge(child, parent);
            debug_assert_eq!(removed, Ok(true));
            debug_assert_eq!(added, Ok(true));
            reversed += 1;
        }

        debug!(reversed, kept, "transposed graph");
        transposed
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    use super::*;
    use crate::testing::*;

    #[test]
    fn transpose_reverses_edges() {
        let rng = &mut Pcg64::seed_from_u64(99);

        for n in [5u32, 20, 50] {
            for m_ub in [n, n * 3, n * 8] {
                let edges = random_edges(rng, n, m_ub as usize);
                let graph = graph_from_indices::<u32>(n, &edges);
                let transposed = graph.transpose();

                assert_eq!(transposed.number_of_nodes(), graph.number_of_nodes());
                assert_eq!(transposed.number_of_edges(), graph.number_of_edges());

                for (u, v) in (0..n).cartesian_product(0..n) {
                    assert_eq!(transposed.has_edge(&u, &v), graph.has_edge(&v, &u));
                }
            }
        }
    }

    #[test]
    fn transpose_is_an_involution() {
        let graph = Graph::from_edges([(0, 1), (1, 2), (2, 0), (0, 3), (3, 4), (4, 4)]);
        let transposed = graph.transpose();

        assert_eq!(
            transposed.edges().collect_vec(),
            vec![
                Edge(0, 2),
                Edge(1, 0),
                Edge(2, 1),
                Edge(3, 0),
                Edge(4, 3),
                Edge(4, 4)
            ]
        );
        assert_eq!(transposed.transpose(), graph);
    }

    #[test]
    fn mutual_pairs_are_kept() {
        let graph = Graph::from_edges([("a", "b"), ("b", "a"), ("b", "c")]);
        let transposed = graph.transpose();

        assert!(transposed.has_mutual_edge(&"a", &"b"));
        assert!(transposed.has_edge(&"c", &"b"));
        assert!(!transposed.has_edge(&"b", &"c"));
        assert_eq!(transposed.number_of_edges(), 3);

        // the original is untouched
        assert!(graph.has_edge(&"b", &"c"));
    }

    #[test]
    fn transpose_of_empty_graph() {
        let graph = Graph::<u32>::new();
        assert!(graph.transpose().is_empty());
    }
}
