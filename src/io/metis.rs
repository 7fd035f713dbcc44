/*!
# Metis

This module provides readers and writers for the **Metis graph format**.

A Metis file consists of:
- a **header line** `n m`, where `m` is the number of undirected edges, and
- `n` lines, each line describing the (1-based) neighborhood of a node.

Each line of the adjacency section has the form:
```text
v1 v2 v3 v4 ...
```
An isolated node is represented by an empty line, so the position of a line (not its content)
identifies the node. Lines starting with `%` are comments.

# Examples

```
use mtxgraph::{prelude::*, io::*};
use std::io::Cursor;

let g = AdjGraph::from_edges(4, [(0, 1), (1, 2), (0, 2)]);

let mut buffer = Vec::new();
MetisWriter::new().try_write_graph(&g, &mut buffer).unwrap();
assert_eq!(String::from_utf8(buffer.clone()).unwrap(), "4 3\n2 3\n1 3\n1 2\n\n");

let parsed = MetisReader::new().try_read_graph(Cursor::new(buffer)).unwrap();
assert_eq!(parsed.graph, g);
```
*/

use std::io::Lines;

use tracing::debug;

use super::*;

/// A configurable reader for the **Metis format**.
///
/// Every neighborhood entry is validated like an edge of any other input format: self-loops
/// and out-of-range entries are skipped with a warning, missing reverse entries are added.
#[derive(Debug, Clone)]
pub struct MetisReader {
    /// HeaderFormat
    header: Header,
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for MetisReader {
    fn default() -> Self {
        Self {
            header: Header::metis(),
            comment_identifier: "%".to_string(),
        }
    }
}

impl MetisReader {
    /// Creates a new [`MetisReader`] with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier, consuming and returning `self` for chaining.
    pub fn comment_identifier<S>(mut self, c: S) -> Self
    where
        S: Into<String>,
    {
        self.comment_identifier = c.into();
        self
    }
}

impl GraphReader for MetisReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<ParsedGraph> {
        let mut edges = MetisEdgesReader::try_new(reader, &self.header, &self.comment_identifier)?;
        let n = edges.number_of_nodes();

        let mut builder = AdjacencyBuilder::new(n);
        builder.extend_lossy(&mut edges)?;
        let (graph, report) = builder.finish();

        if edges.number_of_lines() != n as usize {
            debug!(
                n,
                lines = edges.number_of_lines(),
                "number of neighborhoods differs from header"
            );
        }

        Ok(ParsedGraph {
            graph,
            report,
            comments: Vec::new(),
            declared_edges: edges.number_of_edges(),
        })
    }
}

/// Low-level reader that consumes a stream of lines and yields the 1-based edge
/// `(node, neighbor)` for every neighborhood entry.
///
/// Usually constructed internally by [`MetisReader`].
pub struct MetisEdgesReader<'a, R> {
    /// Lines in the reader
    lines: Lines<R>,
    /// 1-based number of the last line read
    line_no: usize,
    /// 1-based label of the current node
    curr_node: i64,
    /// Neighbors of the current node not yet yielded
    buffer: Vec<i64>,
    /// Number of nodes parsed from header
    number_of_nodes: NumNodes,
    /// Number of edges parsed from header
    number_of_edges: NumEdges,
    /// Comment identifier
    comment_identifier: &'a str,
}

impl<'a, R> MetisEdgesReader<'a, R>
where
    R: BufRead,
{
    /// Creates a new [`MetisEdgesReader`] and parses the first non-comment line as the header.
    ///
    /// # Errors
    /// Returns an error if no valid header is found.
    pub fn try_new(reader: R, header_format: &Header, comment_identifier: &'a str) -> Result<Self> {
        let mut metis_reader = Self {
            lines: reader.lines(),
            line_no: 0,
            curr_node: 0,
            buffer: Vec::new(),
            number_of_nodes: 0,
            number_of_edges: 0,
            comment_identifier,
        };

        let header = next_data_line(
            &mut metis_reader.lines,
            &mut metis_reader.line_no,
            comment_identifier,
            |_| {},
        )?
        .ok_or(GraphError::MissingHeader)?;

        (metis_reader.number_of_nodes, metis_reader.number_of_edges) =
            header_format.parse_header(metis_reader.line_no, &header)?;

        Ok(metis_reader)
    }

    /// Returns the number of edges as specified in the header.
    pub fn number_of_edges(&self) -> NumEdges {
        self.number_of_edges
    }

    /// Returns the number of nodes as specified in the header.
    pub fn number_of_nodes(&self) -> NumNodes {
        self.number_of_nodes
    }

    /// Returns the number of neighborhood lines read so far
    pub fn number_of_lines(&self) -> usize {
        self.curr_node as usize
    }

    /// Reads the next neighborhood line (blank lines included) into the buffer.
    /// Returns `Ok(None)` at the end of the input.
    fn next_line(&mut self) -> Result<Option<()>> {
        debug_assert!(self.buffer.is_empty());

        for line in self.lines.by_ref() {
            self.line_no += 1;
            let line = line?;
            if line.starts_with(self.comment_identifier) {
                continue;
            }

            self.curr_node += 1;
            let neighbors: Option<Vec<i64>> =
                line.split_ascii_whitespace().map(parse_label).collect();

            return match neighbors {
                Some(mut neighbors) => {
                    // yielded from the back
                    neighbors.reverse();
                    self.buffer = neighbors;
                    Ok(Some(()))
                }
                None => Err(GraphError::MalformedEdgeLine {
                    line: self.line_no,
                    content: line,
                }),
            };
        }

        Ok(None)
    }

    /// Tries to get the next edge in the buffer or parse the next neighborhood line if empty
    fn next_edge(&mut self) -> Result<Option<(usize, RawEdge)>> {
        while self.buffer.is_empty() {
            if self.next_line()?.is_none() {
                return Ok(None);
            }
        }

        Ok(self
            .buffer
            .pop()
            .map(|v| (self.line_no, RawEdge(self.curr_node, v))))
    }
}

impl<R> Iterator for MetisEdgesReader<'_, R>
where
    R: BufRead,
{
    type Item = Result<(usize, RawEdge)>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_edge().transpose()
    }
}

/// A writer for exporting graphs in the **Metis format**.
///
/// Handles writing the header and adjacency lists.
#[derive(Debug, Clone)]
pub struct MetisWriter {
    /// HeaderFormat
    header: Header,
}

impl Default for MetisWriter {
    fn default() -> Self {
        Self {
            header: Header::metis(),
        }
    }
}

impl MetisWriter {
    /// Creates a new [`MetisWriter`] with default settings.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<G> GraphWriter<G> for MetisWriter
where
    G: AdjacencyList + GraphEdgeOrder,
{
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        self.header
            .write_header(&mut writer, graph.number_of_nodes(), graph.number_of_edges())?;

        for u in graph.vertices() {
            writeln!(writer, "{}", graph.neighbors_of(u).map(label_of).join(" "))?;
        }

        Ok(())
    }
}
