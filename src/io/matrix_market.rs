/*!
# MatrixMarket

Reader and writer for the **MatrixMarket coordinate format** restricted to graphs.

A file consists of
- comment lines starting with `%` (the first one usually being the `%%MatrixMarket` banner),
- a **dimension line** `rows cols entries`; `rows` is taken as the number of nodes,
- one entry `u v` per line, both 1-based. Further columns (e.g. weights) are ignored.

# Examples

## Reading a graph
```
use mtxgraph::{prelude::*, io::*};
use std::io::Cursor;

let data = b"%%MatrixMarket matrix coordinate pattern symmetric\n% roads\n4 4 4\n1 2\n2 3\n1 3\n4 4\n";
let parsed = MatrixMarketReader::new().try_read_graph(Cursor::new(&data[..])).unwrap();

assert_eq!(parsed.graph.number_of_nodes(), 4);
assert_eq!(parsed.graph.number_of_edges(), 3);
assert_eq!(parsed.report.self_loops, 1);
assert_eq!(parsed.comments, vec!["% roads".to_string()]);
```

## Writing a graph
```
use mtxgraph::{prelude::*, io::*};

let g = AdjGraph::from_edges(3, [(0, 1), (2, 1)]);
let mut buffer = Vec::new();
MatrixMarketWriter::new().try_write_graph(&g, &mut buffer).unwrap();

assert_eq!(
    String::from_utf8(buffer).unwrap(),
    "%%MatrixMarket matrix coordinate pattern symmetric\n3 3 2\n1 2\n2 3\n"
);
```
*/

use std::io::Lines;

use tracing::{debug, warn};

use super::*;

/// The banner every written file starts with
pub const MATRIX_MARKET_BANNER: &str = "%%MatrixMarket matrix coordinate pattern symmetric";

/// Prefix identifying banner lines, which are never preserved as comments
const BANNER_PREFIX: &str = "%%MatrixMarket";

/// A configurable reader for the **MatrixMarket format**.
#[derive(Debug, Clone)]
pub struct MatrixMarketReader {
    /// HeaderFormat
    header: Header,
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for MatrixMarketReader {
    fn default() -> Self {
        Self {
            header: Header::matrix_market(),
            comment_identifier: "%".to_string(),
        }
    }
}

impl MatrixMarketReader {
    /// Creates a new reader with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> Self {
        self.comment_identifier = c.into();
        self
    }

    /// Parses the header of `reader` and returns a lazy stream over its entries.
    ///
    /// # Errors
    /// Returns [`GraphError::MissingHeader`] / [`GraphError::MalformedHeader`] if no valid
    /// dimension line precedes the entries, or an IO error.
    pub fn edges<R: BufRead>(&self, reader: R) -> Result<MatrixMarketEdges<'_, R>> {
        MatrixMarketEdges::try_new(reader, &self.header, &self.comment_identifier)
    }
}

impl GraphReader for MatrixMarketReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<ParsedGraph> {
        let mut edges = self.edges(reader)?;
        let n = edges.number_of_nodes();
        debug!(n, declared = edges.number_of_edges(), "matrix market header parsed");

        let mut builder = AdjacencyBuilder::new(n);
        builder.extend_lossy(&mut edges)?;
        let (graph, report) = builder.finish();

        let declared_edges = edges.number_of_edges();
        if report.accepted != declared_edges {
            debug!(
                declared = declared_edges,
                distinct = report.accepted,
                "declared entry count differs from distinct edges"
            );
        }

        Ok(ParsedGraph {
            graph,
            report,
            comments: edges.into_comments(),
            declared_edges,
        })
    }
}

/// Lazy stream of the entries of a MatrixMarket file.
///
/// Yields `(line_number, RawEdge)` for every data line; lines without two integer tokens
/// are yielded as [`GraphError::MalformedEdgeLine`] so the consumer may skip them.
pub struct MatrixMarketEdges<'a, R> {
    /// Lines in the reader
    lines: Lines<R>,
    /// 1-based number of the last line read
    line_no: usize,
    /// Number of nodes parsed from header
    number_of_nodes: NumNodes,
    /// Number of entries declared in the header
    number_of_edges: NumEdges,
    /// Comment lines preceding the header (without banner)
    comments: Vec<String>,
    /// Comment identifier
    comment_identifier: &'a str,
}

impl<'a, R: BufRead> MatrixMarketEdges<'a, R> {
    /// Creates a new stream and tries to parse the first non-comment-line as the header
    pub fn try_new(reader: R, header_format: &Header, comment_identifier: &'a str) -> Result<Self> {
        let mut stream = Self {
            lines: reader.lines(),
            line_no: 0,
            number_of_nodes: 0,
            number_of_edges: 0,
            comments: Vec::new(),
            comment_identifier,
        };

        let comments = &mut stream.comments;
        let header = next_data_line(
            &mut stream.lines,
            &mut stream.line_no,
            comment_identifier,
            |line| {
                if !line.starts_with(BANNER_PREFIX) {
                    comments.push(line);
                }
            },
        )?
        .ok_or(GraphError::MissingHeader)?;

        (stream.number_of_nodes, stream.number_of_edges) =
            header_format.parse_header(stream.line_no, &header)?;

        Ok(stream)
    }

    /// Returns the number of entries as declared in the header
    pub fn number_of_edges(&self) -> NumEdges {
        self.number_of_edges
    }

    /// Returns the number of nodes as declared in the header
    pub fn number_of_nodes(&self) -> NumNodes {
        self.number_of_nodes
    }

    /// Consumes the stream and returns the comment lines found before the header
    pub fn into_comments(self) -> Vec<String> {
        self.comments
    }
}

impl<R: BufRead> Iterator for MatrixMarketEdges<'_, R> {
    type Item = Result<(usize, RawEdge)>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = match next_data_line(
            &mut self.lines,
            &mut self.line_no,
            self.comment_identifier,
            |_| {},
        ) {
            Ok(line) => line?,
            Err(err) => return Some(Err(err)),
        };

        Some(parse_entry(&line).map(|edge| (self.line_no, edge)).ok_or_else(|| {
            GraphError::MalformedEdgeLine {
                line: self.line_no,
                content: line,
            }
        }))
    }
}

/// Parses the first two tokens of an entry line as integers
fn parse_entry(line: &str) -> Option<RawEdge> {
    let mut parts = line.split_ascii_whitespace();
    let u = parse_label(parts.next()?)?;
    let v = parse_label(parts.next()?)?;
    Some(RawEdge(u, v))
}

/// A writer for the **MatrixMarket format**.
///
/// Writes the banner, the configured comment lines verbatim, the dimension line `n n m`
/// and every edge once as `u v` with `u < v` in lexicographic order.
#[derive(Debug, Clone)]
pub struct MatrixMarketWriter {
    /// HeaderFormat
    header: Header,
    /// Comment lines written after the banner
    comments: Vec<String>,
}

impl Default for MatrixMarketWriter {
    fn default() -> Self {
        Self {
            header: Header::matrix_market(),
            comments: Vec::new(),
        }
    }
}

impl MatrixMarketWriter {
    /// Creates a new writer without comments
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the comment lines that are written after the banner
    pub fn comments<I, S>(mut self, comments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.comments = comments.into_iter().map(Into::into).collect();
        self
    }
}

impl<G> GraphWriter<G> for MatrixMarketWriter
where
    G: AdjacencyList + GraphEdgeOrder,
{
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        writeln!(writer, "{MATRIX_MARKET_BANNER}")?;
        for comment in &self.comments {
            if comment.starts_with('%') {
                writeln!(writer, "{comment}")?;
            } else {
                warn!("prefixing comment line {comment:?} with '%'");
                writeln!(writer, "%{comment}")?;
            }
        }

        self.header
            .write_header(&mut writer, graph.number_of_nodes(), graph.number_of_edges())?;

        for Edge(u, v) in graph.edges(true) {
            writeln!(writer, "{} {}", label_of(u), label_of(v))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use itertools::Itertools;

    use super::*;

    fn stream(data: &str) -> Result<Vec<Result<(usize, RawEdge)>>> {
        let reader = MatrixMarketReader::new();
        Ok(reader.edges(Cursor::new(data.as_bytes()))?.collect_vec())
    }

    #[test]
    fn lazy_entries_with_line_numbers() {
        let edges = stream("%%MatrixMarket x\n% c\n\n3 3 2\n1 2\n% late\n\n2 3 7.5\n").unwrap();
        let edges = edges.into_iter().map(|e| e.unwrap()).collect_vec();
        assert_eq!(edges, vec![(5, RawEdge(1, 2)), (8, RawEdge(2, 3))]);
    }

    #[test]
    fn malformed_entries_are_yielded_as_errors() {
        let edges = stream("3 3 2\n1\nfoo bar\n1 2\n").unwrap();
        assert!(matches!(
            &edges[0],
            Err(GraphError::MalformedEdgeLine { line: 2, content }) if content == "1"
        ));
        assert!(matches!(&edges[1], Err(GraphError::MalformedEdgeLine { line: 3, .. })));
        assert!(matches!(&edges[2], Ok((4, RawEdge(1, 2)))));
    }

    #[test]
    fn header_errors_are_fatal() {
        assert!(matches!(
            stream("% only comments\n\n"),
            Err(GraphError::MissingHeader)
        ));
        assert!(matches!(
            stream("% c\n3 3\n1 2\n"),
            Err(GraphError::MalformedHeader { line: 2, .. })
        ));
        assert!(matches!(
            MatrixMarketReader::new().try_read_graph(Cursor::new(b"abc 3 3\n1 2\n")),
            Err(GraphError::MalformedHeader { line: 1, .. })
        ));
    }

    #[test]
    fn read_skips_invalid_edges() {
        let data = "%%MatrixMarket matrix coordinate pattern symmetric\n% kept\n4 4 6\n1 2\n2 3\n1 3\n4 4\n0 1\n1 9\nx\n2 1\n";
        let parsed = MatrixMarketReader::new()
            .try_read_graph(Cursor::new(data.as_bytes()))
            .unwrap();

        assert_eq!(parsed.graph.number_of_edges(), 3);
        assert_eq!(parsed.declared_edges, 6);
        assert_eq!(parsed.comments, vec!["% kept".to_string()]);
        assert_eq!(
            parsed.report,
            BuildReport {
                accepted: 3,
                duplicates: 1,
                self_loops: 1,
                out_of_range: 2,
                malformed: 1,
            }
        );
    }

    #[test]
    fn overflowing_ids_are_out_of_range() {
        let data = "3 3 2\n1 99999999999999999999\n2 3\n";
        let edges = stream(data).unwrap();
        assert!(matches!(
            &edges[0],
            Ok((2, RawEdge(1, id))) if *id == i64::MAX
        ));

        let parsed = MatrixMarketReader::new()
            .try_read_graph(Cursor::new(data.as_bytes()))
            .unwrap();
        assert_eq!(parsed.report.out_of_range, 1);
        assert_eq!(parsed.report.malformed, 0);
        assert_eq!(parsed.graph.number_of_edges(), 1);
    }

    #[test]
    fn custom_comment_identifier() {
        let parsed = MatrixMarketReader::new()
            .comment_identifier("#")
            .try_read_graph(Cursor::new("# generated\n3 3 1\n# late\n1 3\n".as_bytes()))
            .unwrap();
        assert_eq!(parsed.comments, vec!["# generated".to_string()]);
        assert_eq!(parsed.graph.edges(true).collect_vec(), vec![Edge(0, 2)]);
    }

    #[test]
    fn write_preserves_comments() {
        let g = AdjGraph::from_edges(2, [(0, 1)]);
        let mut buffer = Vec::new();
        MatrixMarketWriter::new()
            .comments(["% source: roadNet-CA", "no marker"])
            .try_write_graph(&g, &mut buffer)
            .unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "%%MatrixMarket matrix coordinate pattern symmetric\n% source: roadNet-CA\n%no marker\n2 2 1\n1 2\n"
        );
    }

    #[test]
    fn empty_graph_is_well_formed() {
        let mut buffer = Vec::new();
        MatrixMarketWriter::new()
            .try_write_graph(&AdjGraph::new(2), &mut buffer)
            .unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "%%MatrixMarket matrix coordinate pattern symmetric\n2 2 0\n"
        );
    }
}
