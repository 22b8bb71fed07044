//! # EdgeList
//!
//! The EdgeList-Format is a stream of whitespace-separated keys where every two consecutive keys
//! `u v` form the edge `Edge(u, v)`. Keys are parsed via [`FromStr`], so any key type with a textual
//! representation can be read.
//!
//! Reading is lenient at the end of the input: the stream is consumed until the first token that
//! does not parse or until a dangling key without partner. Everything from there on is ignored.

use std::{
    fmt::Display,
    fs::File,
    io::{BufRead, BufWriter, Result, Write},
    path::Path,
    str::FromStr,
};

use tracing::debug;

use super::*;

/// How a pair of keys is inserted into the graph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Orientation {
    /// `u v` adds the edge `u -> v`
    #[default]
    Directed,
    /// `u v` adds the edges `u -> v` and `v -> u`
    Undirected,
}

/// A GraphReader for the EdgeList-Format
///
/// # Examples
/// ```
/// use kgraphs::{prelude::*, io::*};
///
/// let input = "# capitals\n1 2\n2 3 3\n1 x 5";
/// let graph: Graph<u32> = EdgeListReader::new()
///     .orientation(Orientation::Undirected)
///     .comment_identifier("#")
///     .try_read_graph(input.as_bytes())
///     .unwrap();
///
/// // `3 1` is read across the line break, `x` stops reading
/// assert_eq!(graph.number_of_nodes(), 3);
/// assert_eq!(graph.number_of_edges(), 6);
/// assert!(graph.has_mutual_edge(&3, &1));
/// assert!(!graph.contains_node(&5));
/// ```
#[derive(Debug, Clone, Default)]
pub struct EdgeListReader {
    /// Directed or undirected insertion of pairs
    orientation: Orientation,
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: Option<String>,
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the orientation of read edges
    pub fn orientation(mut self, orientation: Orientation) -> EdgeListReader {
        self.orientation = orientation;
        self
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> EdgeListReader {
        self.comment_identifier = Some(c.into());
        self
    }

    fn is_comment(&self, line: &str) -> bool {
        self.comment_identifier
            .as_deref()
            .is_some_and(|identifier| line.starts_with(identifier))
    }

    /// Reads edges from `reader` and upserts them into `graph`.
    /// Returns the number of key pairs fed to the graph.
    ///
    /// # Errors
    /// Returns an error if reading from `reader` fails. Malformed trailing input is not an error.
    pub fn read_edges_into<G, R>(&self, graph: &mut G, reader: R) -> Result<usize>
    where
        G: GraphEdgeEditing,
        G::Key: FromStr,
        R: BufRead,
    {
        let mut records = 0usize;
        let mut pending: Option<G::Key> = None;
        let mut stopped_at: Option<String> = None;

        'lines: for line in reader.lines() {
            let line = line?;
            if self.is_comment(&line) {
                continue;
            }

            for token in line.split_whitespace() {
                let Ok(key) = token.parse::<G::Key>() else {
                    stopped_at = Some(token.to_string());
                    break 'lines;
                };

                match pending.take() {
                    None => pending = Some(key),
                    Some(first) => {
                        match self.orientation {
                            Orientation::Directed => {
                                graph.add_directed_edge(first, key);
                            }
                            Orientation::Undirected => {
                                graph.add_undirected_edge(first, key);
                            }
                        }
                        records += 1;
                    }
                }
            }
        }

        debug!(
            records,
            dangling = ?pending,
            stopped_at = ?stopped_at,
            "read edge list"
        );
        Ok(records)
    }
}

impl<G> GraphReader<G> for EdgeListReader
where
    G: GraphNew + GraphEdgeEditing,
    G::Key: FromStr,
{
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G> {
        let mut graph = G::new();
        self.read_edges_into(&mut graph, reader)?;
        Ok(graph)
    }
}

/// Trait for creating graphs form an EdgeListReader.
/// Used as shorthand for default EdgeListReader settings
pub trait EdgeListRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_edge_list(BufReader::new(File::open(path)?))
    }
}

impl<G> EdgeListRead for G
where
    G: GraphNew + GraphEdgeEditing,
    G::Key: FromStr,
{
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        EdgeListReader::default().try_read_graph(reader)
    }
}

/// A writer for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListWriter {
    /// Separates both keys of an edge (default: ' ')
    separator: String,
}

impl Default for EdgeListWriter {
    fn default() -> Self {
        Self {
            separator: " ".to_string(),
        }
    }
}

impl EdgeListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the separator between both keys of an edge.
    /// Note that only whitespace separators can be read back by [`EdgeListReader`].
    pub fn separator<S: Into<String>>(mut self, separator: S) -> EdgeListWriter {
        self.separator = separator.into();
        self
    }
}

impl<G> GraphWriter<G> for EdgeListWriter
where
    G: AdjacencyList,
    G::Key: Display,
{
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        for Edge(u, v) in graph.edges() {
            writeln!(writer, "{u}{}{v}", self.separator)?;
        }

        Ok(())
    }
}

/// Trait for writing a graph to a writer in the EdgeList-Format.
/// Shorthand for default settings.
pub trait EdgeListWrite {
    /// Tries to write the graph to a writer
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_edge_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_edge_list(writer)
    }
}

impl<G> EdgeListWrite for G
where
    G: AdjacencyList,
    G::Key: Display,
{
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()> {
        EdgeListWriter::default().try_write_graph(self, writer)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use itertools::Itertools;

    use super::*;

    #[test]
    fn read_directed_pairs_across_lines() {
        let graph = Graph::<u32>::try_read_edge_list(Cursor::new("1 2 3\n4\n\n  5   1 ")).unwrap();

        assert_eq!(
            graph.edges().collect_vec(),
            vec![Edge(1, 2), Edge(3, 4), Edge(5, 1)]
        );
        assert_eq!(graph.number_of_nodes(), 5);
    }

    #[test]
    fn read_stops_at_malformed_or_dangling_token() {
        let graph = Graph::<i64>::try_read_edge_list(Cursor::new("1 2\n-3 4 five 6 7")).unwrap();
        assert_eq!(graph.edges().collect_vec(), vec![Edge(-3, 4), Edge(1, 2)]);
        assert!(!graph.contains_node(&6));

        let graph = Graph::<i64>::try_read_edge_list(Cursor::new("1 2 3")).unwrap();
        assert_eq!(graph.number_of_nodes(), 2);
        assert!(!graph.contains_node(&3));

        let graph = Graph::<u32>::try_read_edge_list(Cursor::new("")).unwrap();
        assert!(graph.is_empty());
    }

    #[test]
    fn read_into_existing_graph() {
        let mut graph = Graph::from_edges([(0u32, 1)]);
        let reader = EdgeListReader::new()
            .orientation(Orientation::Undirected)
            .comment_identifier("c");

        let records = reader
            .read_edges_into(&mut graph, Cursor::new("c some comment 7 8\n1 2\n0 1\n"))
            .unwrap();

        assert_eq!(records, 2);
        assert!(graph.has_mutual_edge(&0, &1));
        assert!(graph.has_mutual_edge(&1, &2));
        assert_eq!(graph.number_of_edges(), 4);
        assert!(!graph.contains_node(&7));
    }

    #[test]
    fn comments_need_an_identifier() {
        let input = "# 1 2\n3 4";

        // without identifier `#` fails to parse and stops reading right away
        let graph = Graph::<u32>::try_read_edge_list(Cursor::new(input)).unwrap();
        assert!(graph.is_empty());

        let graph: Graph<u32> = EdgeListReader::new()
            .comment_identifier("#")
            .try_read_graph(Cursor::new(input))
            .unwrap();
        assert_eq!(graph.edges().collect_vec(), vec![Edge(3, 4)]);
    }

    #[test]
    fn read_string_keys() {
        let graph = Graph::<String>::try_read_edge_list(Cursor::new("berlin hamburg\nhamburg kiel"))
            .unwrap();

        assert_eq!(graph.number_of_nodes(), 3);
        assert!(graph.has_edge(&"hamburg".to_string(), &"kiel".to_string()));
    }

    #[test]
    fn write_edge_list() {
        let graph = Graph::from_edges([(3, 1), (1, 2), (1, 3)]);

        let mut buffer = Vec::new();
        graph.try_write_edge_list(&mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "1 2\n1 3\n3 1\n");

        let mut buffer = Vec::new();
        EdgeListWriter::new()
            .separator("\t")
            .try_write_graph(&graph, &mut buffer)
            .unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "1\t2\n1\t3\n3\t1\n");
    }

    #[test]
    fn written_edge_list_reads_back() {
        let graph = Graph::from_undirected_edges([(0u32, 1), (1, 2), (2, 2), (5, 3)]);

        let mut buffer = Vec::new();
        graph.try_write_edge_list(&mut buffer).unwrap();

        let read = Graph::<u32>::try_read_edge_list(buffer.as_slice()).unwrap();
        assert_eq!(read, graph);
    }
}
