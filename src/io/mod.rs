/*!
# IO

Utilities for reading and writing graphs from and to different file formats.
All formats number nodes starting at `1`; nodes are shifted by one when entering or leaving the crate.

## Input Formats

- **MatrixMarket** (coordinate): `%` comment lines, a dimension line `n n m` and one `u v` entry per line.
- **Metis**: a header `n m` followed by one neighborhood per line (blank line = isolated node).

Both readers are lossy in the same way: lines that are not a valid edge are skipped with a
warning, only a broken header aborts.

## Output Formats

- **Metis**: `n m` followed by the sorted neighborhood of every node.
- **MatrixMarket**: banner, preserved comments, `n n m` and every edge once as `u v` with `u < v`.
- **Csr**: `n m`, the `n + 1` offsets (`xadj`) and the concatenated 0-based neighborhoods (`adjncy`)
  as consumed by METIS partitioning drivers.

All writers derive the edge count written into the header from the graph itself.
*/

pub mod csr;
pub mod header;
pub mod matrix_market;
pub mod metis;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, ErrorKind, Write},
    path::Path,
    str::FromStr,
};

use itertools::Itertools;

use crate::{
    error::{GraphError, Result},
    prelude::*,
};

pub use csr::*;
pub use header::*;
pub use matrix_market::*;
pub use metis::*;

/// Identifier for a graph file format.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FileFormat {
    /// Metis neighborhood-list format
    Metis,
    /// MatrixMarket coordinate pattern format
    MatrixMarket,
    /// Compressed sparse row arrays
    Csr,
}

impl FromStr for FileFormat {
    type Err = std::io::Error;

    fn from_str(s: &str) -> std::io::Result<Self> {
        match s.to_lowercase().as_str() {
            "metis" => Ok(FileFormat::Metis),
            "mtx" | "matrixmarket" => Ok(FileFormat::MatrixMarket),
            "csr" => Ok(FileFormat::Csr),
            _ => Err(std::io::Error::new(
                ErrorKind::InvalidInput,
                format!("Unknown FileFormat: {s}"),
            )),
        }
    }
}

impl std::fmt::Display for FileFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileFormat::Metis => write!(f, "metis"),
            FileFormat::MatrixMarket => write!(f, "mtx"),
            FileFormat::Csr => write!(f, "csr"),
        }
    }
}

/// A graph read from a file together with everything learned while reading it
#[derive(Debug, Clone)]
pub struct ParsedGraph {
    pub graph: AdjGraph,
    /// Counters of accepted and skipped edges
    pub report: BuildReport,
    /// Comment lines preceding the header, verbatim
    pub comments: Vec<String>,
    /// Number of edges/entries as declared in the header
    pub declared_edges: NumEdges,
}

/// Trait for types that can read graphs in a specific format.
pub trait GraphReader {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the header is missing or malformed or if reading fails.
    /// Defective edge lines are skipped and only counted in [`ParsedGraph::report`].
    fn try_read_graph<R>(&self, reader: R) -> Result<ParsedGraph>
    where
        R: BufRead;

    /// Reads a graph from a file according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if [`GraphReader::try_read_graph`] fails.
    fn try_read_graph_file<P>(&self, path: P) -> Result<ParsedGraph>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Trait for types that can write graphs in a specific format.
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
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_graph(graph, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

/// Writes `graph` in the given format.
/// `comments` are only used by [`FileFormat::MatrixMarket`].
///
/// # Errors
/// Returns an error if writing fails.
pub fn try_write_as<G, W>(
    graph: &G,
    writer: W,
    format: FileFormat,
    comments: &[String],
) -> Result<()>
where
    G: AdjacencyList + GraphEdgeOrder,
    W: Write,
{
    match format {
        FileFormat::Metis => MetisWriter::new().try_write_graph(graph, writer),
        FileFormat::MatrixMarket => MatrixMarketWriter::new()
            .comments(comments.iter().cloned())
            .try_write_graph(graph, writer),
        FileFormat::Csr => CsrWriter::new().try_write_graph(graph, writer),
    }
}

/// Parses an integer node label. Integers beyond the range of `i64` saturate to its bounds.
fn parse_label(token: &str) -> Option<i64> {
    token
        .parse::<i128>()
        .ok()
        .map(|label| label.clamp(i64::MIN as i128, i64::MAX as i128) as i64)
}

/// Returns the next line of `lines` (with its 1-based number) that is neither blank nor a comment
/// and hands every comment line to `on_comment`.
fn next_data_line<I, F>(
    lines: &mut I,
    line_no: &mut usize,
    comment_identifier: &str,
    mut on_comment: F,
) -> Result<Option<String>>
where
    I: Iterator<Item = std::io::Result<String>>,
    F: FnMut(String),
{
    for line in lines.by_ref() {
        *line_no += 1;
        let line = line?;
        if line.starts_with(comment_identifier) {
            on_comment(line);
        } else if !line.trim().is_empty() {
            return Ok(Some(line));
        }
    }
    Ok(None)
}
