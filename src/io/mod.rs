/*!
# IO

Utilities for reading and writing keyed graphs and algorithm results.

## Input Formats

- **EdgeList**: whitespace-separated key tokens, read pairwise as edges. Line breaks carry no
  meaning, so `1 2 3 4` and `1 2\n3 4` describe the same two edges.

## Output Formats

- **EdgeList**: one `parent child` line per directed edge.
- **Listing**: human-readable neighborhoods (`key -> a, b`), BFS layers (`Layer i: ...`) and
  strongly connected components (`Component i: ...`).

## Traits

To generalize over reading/writing, [`GraphReader`] and [`GraphWriter`] are implemented by
readers and writers for a specific format. [`EdgeListRead`] and [`EdgeListWrite`] are shorthands
implemented directly on graphs that use the default settings.
*/

pub mod edge_list;
pub mod listing;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Result, Write},
    path::Path,
};

use crate::prelude::*;

pub use edge_list::*;
pub use listing::*;

/// Trait for types that can read graphs in a specific format.
///
/// This trait provides both a low-level method to read from any
/// [`BufRead`] instance and a convenience wrapper to read directly
/// from files.
pub trait GraphReader<G> {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if reading from `reader` fails.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    /// Reads a graph from a file according to the settings in `self`.
    ///
    /// Internally wraps the file in a buffered reader.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or read.
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Trait for types that can write graphs in a specific format.
///
/// This trait provides both a low-level method to write to any
/// [`Write`] instance and a convenience wrapper to write directly
/// to files.
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the given graph to a file according to the settings in `self`.
    ///
    /// Internally wraps the file in a buffered writer.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_graph(graph, BufWriter::new(File::create(path)?))
    }
}
