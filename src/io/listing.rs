//! # Listing
//!
//! Human-readable rendering of graphs and algorithm results, e.g.
//! ```text
//! 1 -> 2, 3
//! Layer 0: 1
//! Layer 1: 2, 3
//! Component 0: 1, 2, 3
//! ```
//! Keys are written via [`Display`]. Within a layer or component they are sorted ascendingly.

use std::{
    fmt::Display,
    io::{Result, Write},
};

use itertools::Itertools;

use super::*;
use crate::algo::{BfsLayers, Components};

/// A writer for neighborhood listings, BFS layers and components
///
/// # Examples
/// ```
/// use kgraphs::{prelude::*, algo::*, io::*};
///
/// let g = Graph::from_edges([(1, 2), (1, 3), (3, 1)]);
/// let writer = ListingWriter::new();
///
/// assert_eq!(writer.node_list(&g), "1, 2, 3");
/// assert_eq!(writer.node_listing(g.at(&1).unwrap()), "1 -> 2, 3");
///
/// let mut out = Vec::new();
/// writer.write_layers(&g.breadth_first_traversal(&3).unwrap(), &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "Layer 0: 3\nLayer 1: 1\nLayer 2: 2\n");
/// ```
#[derive(Debug, Clone)]
pub struct ListingWriter {
    /// Separates keys in a list (default: `", "`)
    separator: String,
    /// Separates a node from its neighbors (default: `" -> "`)
    arrow: String,
    /// Prefix of a BFS layer (default: `"Layer"`)
    layer_label: String,
    /// Prefix of a component (default: `"Component"`)
    component_label: String,
}

impl Default for ListingWriter {
    fn default() -> Self {
        Self {
            separator: ", ".to_string(),
            arrow: " -> ".to_string(),
            layer_label: "Layer".to_string(),
            component_label: "Component".to_string(),
        }
    }
}

impl ListingWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    pub fn separator<S: Into<String>>(mut self, separator: S) -> ListingWriter {
        self.separator = separator.into();
        self
    }

    pub fn arrow<S: Into<String>>(mut self, arrow: S) -> ListingWriter {
        self.arrow = arrow.into();
        self
    }

    pub fn layer_label<S: Into<String>>(mut self, label: S) -> ListingWriter {
        self.layer_label = label.into();
        self
    }

    pub fn component_label<S: Into<String>>(mut self, label: S) -> ListingWriter {
        self.component_label = label.into();
        self
    }

    /// Returns all keys of the graph in ascending order
    pub fn node_list<G>(&self, graph: &G) -> String
    where
        G: GraphNodeOrder,
        G::Key: Display,
    {
        graph.vertices().join(&self.separator)
    }

    /// Returns `key -> n1, n2, ...` for the given node
    pub fn node_listing<K>(&self, node: &GraphNode<K>) -> String
    where
        K: GraphKey + Display,
    {
        format!(
            "{}{}{}",
            node.key(),
            self.arrow,
            node.neighbors().join(&self.separator)
        )
    }

    /// Writes one `Layer i: ...` line per BFS layer
    pub fn write_layers<K, W>(&self, layers: &BfsLayers<'_, K>, writer: W) -> Result<()>
    where
        K: GraphKey + Display,
        W: Write,
    {
        self.write_groups(&self.layer_label, layers.sorted_keys(), writer)
    }

    /// Writes one `Component i: ...` line per component
    pub fn write_components<K, W>(&self, components: &Components<'_, K>, writer: W) -> Result<()>
    where
        K: GraphKey + Display,
        W: Write,
    {
        // keep the component order; only the members are sorted
        let groups = components
            .iter()
            .map(|component| component.keys().sorted().cloned().collect_vec())
            .collect_vec();
        self.write_groups(&self.component_label, groups, writer)
    }

    fn write_groups<K, W>(&self, label: &str, groups: Vec<Vec<K>>, mut writer: W) -> Result<()>
    where
        K: Display,
        W: Write,
    {
        for (i, group) in groups.iter().enumerate() {
            writeln!(writer, "{label} {i}: {}", group.iter().join(&self.separator))?;
        }

        Ok(())
    }
}

impl<G> GraphWriter<G> for ListingWriter
where
    G: AdjacencyList,
    G::Key: Display,
{
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        for node in graph.nodes() {
            writeln!(writer, "{}", self.node_listing(node))?;
        }

        Ok(())
    }
}
