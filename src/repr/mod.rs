/*!
# Graph Representations

[`Graph`] is the owning keyed representation: an ordered map from key to [`GraphNode`],
each node holding the ordered set of its out-neighbor keys.

- Nodes are enumerated in ascending key order, neighbors likewise.
- Node lookups and edge tests cost `O(log n)`.
- Erasing a node scans all other nodes to purge references to it (`O(n log n)`).
- A graph is a *simple directed* graph: at most one edge per ordered pair.
  Undirected edges are stored as mutual pairs of directed edges.

`Graph` implements all traits of [`crate::ops`] and thereby every algorithm in [`crate::algo`].
*/

mod graph;

pub use graph::*;
