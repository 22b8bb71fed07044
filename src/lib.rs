/*!
`kgraphs` is a graph data structure & algorithms library for **keyed** graphs:
- Nodes are identified by arbitrary keys (integers, strings, ...) rather than dense indices
- Neither nodes nor edges have a weight attached to them
- Graphs are directed; undirected edges are stored as mutual pairs of directed edges

# Representation

A [`Graph`](crate::repr::Graph) owns an ordered map from key to [`GraphNode`]. Each node stores
the keys of its out-neighbors in an ordered set, so nodes and neighborhoods are always
enumerated in ascending key order and every algorithm is deterministic.
For **edges**, we use a simple tuple-struct `Edge(K, K)`.

Operations addressing a node by its key return a [`GraphResult`] and fail with
[`GraphError::KeyNotFound`] if the key is absent. Duplicate insertions, duplicate edges and
erasing absent keys are not errors; they simply report `false`.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for keys, nodes, edges, errors, basic graph operations, and the graph representation,
- [`algo`] includes algorithm traits that are implemented on graphs itself such as BFS layers
  (`graph.breadth_first_traversal(&source)`), DFS finish orders, distances, transposition and
  strongly connected components (`graph.strongly_connected_components()`),
- [`io`] includes handlers for reading edge lists and writing edge lists and human-readable listings,
- [`utils`] includes helper traits such as the [`Set`](crate::utils::Set) abstraction used for shared visited-sets.

In most use-cases, `use kgraphs::{prelude::*, algo::*};` suffices for your needs.

```
use kgraphs::{prelude::*, algo::*};

let g = Graph::from_edges([(1, 2), (2, 3), (3, 1), (3, 4)]);

assert_eq!(g.distance(&1, &4), Ok(Some(3)));
assert_eq!(
    g.strongly_connected_components().unwrap().sorted_keys(),
    vec![vec![1, 2, 3], vec![4]]
);
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod utils;

pub use error::{GraphError, GraphResult};
pub use node::{GraphKey, GraphNode, NodeMap};

/// `kgraphs::prelude` includes definitions for keys, nodes, edges and errors, all basic graph operation traits as well as the graph representation.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}
