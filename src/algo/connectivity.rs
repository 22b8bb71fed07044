use std::{ops::Index, slice, vec};

use fxhash::FxHashSet;
use tracing::debug;

use super::*;

/// Strongly connected components of a graph.
///
/// Every node of the graph belongs to exactly one component. Components are ordered
/// topologically w.r.t. the condensation: if a component can reach another one, it comes first.
#[derive(Debug, Clone)]
pub struct Components<'a, K>
where
    K: GraphKey,
{
    components: Vec<NodeMap<'a, K>>,
}

impl<'a, K> Components<'a, K>
where
    K: GraphKey,
{
    /// Returns the number of components
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns *true* if there are no components, i.e. the graph was empty
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, NodeMap<'a, K>> {
        self.components.iter()
    }

    pub fn get(&self, i: usize) -> Option<&NodeMap<'a, K>> {
        self.components.get(i)
    }

    /// Returns the index of the component containing `key`
    pub fn component_of(&self, key: &K) -> Option<usize> {
        self.components
            .iter()
            .position(|component| component.contains_key(key))
    }

    /// Returns the total number of nodes over all components
    pub fn number_of_nodes(&self) -> usize {
        self.components.iter().map(|component| component.len()).sum()
    }

    /// Returns the keys of all components in canonical form, see [`sort_components`]
    pub fn sorted_keys(&self) -> Vec<Vec<K>> {
        sort_components(
            self.components
                .iter()
                .map(|component| component.keys().cloned().collect())
                .collect(),
        )
    }

    pub fn into_inner(self) -> Vec<NodeMap<'a, K>> {
        self.components
    }
}

impl<'a, K> Index<usize> for Components<'a, K>
where
    K: GraphKey,
{
    type Output = NodeMap<'a, K>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.components[index]
    }
}

impl<'a, K> IntoIterator for Components<'a, K>
where
    K: GraphKey,
{
    type Item = NodeMap<'a, K>;
    type IntoIter = vec::IntoIter<NodeMap<'a, K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.into_iter()
    }
}

impl<'b, 'a, K> IntoIterator for &'b Components<'a, K>
where
    K: GraphKey,
{
    type Item = &'b NodeMap<'a, K>;
    type IntoIter = slice::Iter<'b, NodeMap<'a, K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

pub trait Connectivity: Traversal + Transpose {
    /// Returns all nodes in DFS postorder of finish. The search starts at the smallest key and
    /// is restarted from every key (ascending) that was not reached before.
    ///
    /// # Errors
    /// Fails with [`GraphError::KeyNotFound`] only if a neighborhood refers to a key that the
    /// graph cannot resolve.
    fn finish_order(&self) -> GraphResult<Vec<&GraphNode<Self::Key>>, Self::Key> {
        let mut visited: FxHashSet<Self::Key> = FxHashSet::default();
        let mut order = Vec::with_capacity(self.number_of_nodes());

        for key in self.vertices() {
            if !visited.contains(key) {
                order.extend(self.depth_first_traversal_with(key, &mut visited)?);
            }
        }

        Ok(order)
    }

    /// Computes the strongly connected components using Kosaraju's algorithm.
    /// Nodes of the returned components belong to `self`, not to its transpose.
    ///
    /// # Errors
    /// Same as [`Connectivity::finish_order`].
    ///
    /// # Examples
    /// ```
    /// use kgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_edges([(1, 2), (2, 3), (3, 1), (3, 4)]);
    /// let sccs = g.strongly_connected_components().unwrap();
    ///
    /// assert_eq!(sccs.len(), 2);
    /// assert_eq!(sccs.sorted_keys(), vec![vec![1, 2, 3], vec![4]]);
    /// assert_eq!(sccs.component_of(&2), sccs.component_of(&3));
    /// ```
    fn strongly_connected_components(
        &self,
    ) -> GraphResult<Components<'_, Self::Key>, Self::Key> {
        let order = self.finish_order()?;
        let transposed = self.transpose();

        let mut visited: FxHashSet<Self::Key> = FxHashSet::default();
        let mut components = Vec::new();

        for node in order.into_iter().rev() {
            if visited.contains(node.key()) {
                continue;
            }

            let component = transposed
                .depth_first_traversal_with(node.key(), &mut visited)?
                .into_iter()
                .map(|member| {
                    self.at(member.key())
                        .map(|original| (member.key().clone(), original))
                })
                .collect::<GraphResult<NodeMap<'_, Self::Key>, Self::Key>>()?;
            components.push(component);
        }

        debug!(
            nodes = self.number_of_nodes(),
            components = components.len(),
            "computed strongly connected components"
        );
        Ok(Components { components })
    }

    /// Returns *true* if every node can reach every other node.
    /// The empty graph is strongly connected.
    fn is_strongly_connected(&self) -> GraphResult<bool, Self::Key> {
        Ok(self.strongly_connected_components()?.len() <= 1)
    }
}

impl<G> Connectivity for G where G: Traversal + Transpose {}

/// Sorts each component and then the components by their smallest element.
/// Empty components are placed first.
pub fn sort_components<K: Ord>(mut components: Vec<Vec<K>>) -> Vec<Vec<K>> {
    components.iter_mut().for_each(|comp| comp.sort_unstable());
    components.sort_by(|a, b| a.first().cmp(&b.first()));
    components
}
