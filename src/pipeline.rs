/*!
# Pipeline

A run reads a MatrixMarket graph, builds its adjacency, optionally extracts a subgraph and
emits the result in one of the supported [`FileFormat`]s:

```text
MatrixMarketReader -> AdjacencyBuilder -> [Extraction] -> GraphWriter
```

Every stage completes before the next one starts. In particular the output is only opened
once the graph (and subgraph) exists, so fatal errors never leave an output file behind.

# Example
```
use mtxgraph::{algo::Extraction, io::FileFormat, pipeline::Pipeline};
use std::io::Cursor;

let input = "%%MatrixMarket matrix coordinate pattern symmetric\n4 4 4\n1 2\n2 3\n1 3\n4 4\n";
let mut output = Vec::new();
let summary = Pipeline::new(FileFormat::Metis)
    .run(Cursor::new(input), &mut output)
    .unwrap();

assert_eq!(String::from_utf8(output).unwrap(), "4 3\n2 3\n1 3\n1 2\n\n");
assert_eq!(summary.report.self_loops, 1);
```
*/

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use tracing::{info, info_span, warn};

use crate::{
    algo::{Extract, Extraction},
    error::Result,
    io::{FileFormat, GraphReader, MatrixMarketReader, ParsedGraph, try_write_as},
    prelude::*,
};

/// Outcome of a successful run
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of nodes declared by the input
    pub input_nodes: NumNodes,
    /// Number of distinct edges of the input graph
    pub input_edges: NumEdges,
    /// Counters of accepted and skipped input edges
    pub report: BuildReport,
    /// Number of nodes written
    pub output_nodes: NumNodes,
    /// Number of edges written
    pub output_edges: NumEdges,
}

/// Configuration of a single conversion or extraction run.
///
/// Use the setters to configure the run before calling [`Pipeline::run`] or [`Pipeline::run_files`].
#[derive(Debug, Clone)]
pub struct Pipeline {
    reader: MatrixMarketReader,
    extraction: Option<Extraction>,
    format: FileFormat,
}

/// The graph that is about to be written
struct Prepared {
    graph: AdjGraph,
    comments: Vec<String>,
    summary: RunSummary,
}

impl Pipeline {
    /// Creates a full conversion (no extraction) into `format`
    pub fn new(format: FileFormat) -> Self {
        Self {
            reader: MatrixMarketReader::new(),
            extraction: None,
            format,
        }
    }

    /// Selects the extraction strategy
    pub fn extraction(mut self, extraction: Extraction) -> Self {
        self.extraction = Some(extraction);
        self
    }

    /// Replaces the input reader, e.g. to change the comment identifier
    pub fn reader(mut self, reader: MatrixMarketReader) -> Self {
        self.reader = reader;
        self
    }

    /// Returns the output format
    pub fn format(&self) -> FileFormat {
        self.format
    }

    /// Runs the pipeline from `input` to `output`.
    ///
    /// # Errors
    /// Fails on a missing/malformed header, an invalid BFS source or IO errors.
    /// Defective edges are skipped and reported in [`RunSummary::report`].
    pub fn run<R, W>(&self, input: R, output: W) -> Result<RunSummary>
    where
        R: BufRead,
        W: Write,
    {
        let prepared = self.prepare(input)?;
        self.emit(&prepared, output)?;
        Ok(prepared.summary)
    }

    /// Runs the pipeline from the file `input` to the file `output`.
    /// `output` is created only after the input was read and the subgraph was extracted.
    ///
    /// # Errors
    /// See [`Pipeline::run`]; additionally fails if a file cannot be opened or created.
    pub fn run_files<P, Q>(&self, input: P, output: Q) -> Result<RunSummary>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let prepared = self.prepare(BufReader::new(File::open(input)?))?;

        let mut writer = BufWriter::new(File::create(output)?);
        self.emit(&prepared, &mut writer)?;
        writer.flush()?;

        Ok(prepared.summary)
    }

    fn prepare<R: BufRead>(&self, input: R) -> Result<Prepared> {
        let _span = info_span!("prepare").entered();

        let ParsedGraph {
            graph,
            report,
            comments,
            ..
        } = self.reader.try_read_graph(input)?;

        if report.skipped() > 0 {
            warn!(
                self_loops = report.self_loops,
                out_of_range = report.out_of_range,
                malformed = report.malformed,
                "skipped {} defective edge lines",
                report.skipped()
            );
        }
        info!(
            n = graph.number_of_nodes(),
            m = graph.number_of_edges(),
            duplicates = report.duplicates,
            "graph read"
        );

        let input_nodes = graph.number_of_nodes();
        let input_edges = graph.number_of_edges();

        let graph = match &self.extraction {
            None => graph,
            Some(extraction) => {
                let extracted = graph.extract(extraction)?;
                info!(
                    ?extraction,
                    n = extracted.graph.number_of_nodes(),
                    m = extracted.graph.number_of_edges(),
                    "subgraph extracted"
                );
                extracted.graph
            }
        };

        let summary = RunSummary {
            input_nodes,
            input_edges,
            report,
            output_nodes: graph.number_of_nodes(),
            output_edges: graph.number_of_edges(),
        };

        Ok(Prepared {
            graph,
            comments,
            summary,
        })
    }

    fn emit<W: Write>(&self, prepared: &Prepared, output: W) -> Result<()> {
        try_write_as(&prepared.graph, output, self.format, &prepared.comments)
    }
}
