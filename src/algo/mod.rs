/*!
# Graph Algorithms

This module provides the **graph algorithms** built on top of the traits in [`crate::ops`].
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use kgraphs::algo::*;
```
and gain access to traversal, transposition and strongly connected components.

Algorithms are provided as traits that are automatically implemented for every graph
satisfying their requirements, e.g. `graph.breadth_first_traversal(&source)`.
Results borrow the nodes of the graph they were computed on.
*/

mod connectivity;
mod transpose;
mod traversal;

use crate::{prelude::*, utils::*};

pub use connectivity::*;
pub use transpose::*;
pub use traversal::*;
