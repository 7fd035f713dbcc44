use fxhash::FxHashSet;
use tracing::{debug, warn};

use super::*;
use crate::error::{EdgeDefect, GraphError, Result};

/// Counters collected while building a graph from a noisy edge stream
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Edges that were inserted for the first time
    pub accepted: u64,
    /// Valid edges that were already present (in either orientation)
    pub duplicates: u64,
    /// Rejected edges `(u, u)`
    pub self_loops: u64,
    /// Rejected edges with an endpoint outside of `1..=n`
    pub out_of_range: u64,
    /// Data lines that did not contain two integers
    pub malformed: u64,
}

impl BuildReport {
    /// Number of lines/edges that were skipped with a diagnostic
    pub fn skipped(&self) -> u64 {
        self.self_loops + self.out_of_range + self.malformed
    }
}

/// Builds a symmetric [`AdjGraph`] from raw, 1-based edges.
///
/// Every node `1..=n` exists from the start, so nodes without any valid edge still
/// show up as isolated nodes. Each accepted edge is inserted in both directions;
/// neighborhoods are sets so repeated edges collapse into one.
///
/// # Example
/// ```
/// use mtxgraph::prelude::*;
///
/// let mut builder = AdjacencyBuilder::new(4);
/// for (line, (u, v)) in [(1, 2), (2, 3), (1, 3), (4, 4)].into_iter().enumerate() {
///     let _ = builder.try_insert(line + 1, RawEdge(u, v));
/// }
/// let (graph, report) = builder.finish();
///
/// assert_eq!(graph.number_of_edges(), 3);
/// assert_eq!(report.self_loops, 1);
/// ```
#[derive(Debug, Clone)]
pub struct AdjacencyBuilder {
    nbs: Vec<FxHashSet<Node>>,
    report: BuildReport,
}

impl AdjacencyBuilder {
    /// Creates a builder for a graph with `n` nodes
    pub fn new(n: NumNodes) -> Self {
        Self {
            nbs: vec![FxHashSet::default(); n as usize],
            report: BuildReport::default(),
        }
    }

    /// Returns the number of nodes as declared on construction
    pub fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }

    /// Returns the counters collected so far
    pub fn report(&self) -> &BuildReport {
        &self.report
    }

    /// Validates and inserts a single edge read at (1-based) line `line`.
    ///
    /// Returns `Ok(true)` if the edge is new and `Ok(false)` if it was already present.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidEdge`] for self-loops and endpoints outside of `1..=n`.
    /// The builder stays usable after an error.
    pub fn try_insert(&mut self, line: usize, raw: RawEdge) -> Result<bool> {
        let n = self.number_of_nodes();
        let reject = |defect| GraphError::InvalidEdge {
            line,
            edge: raw,
            defect,
            n,
        };

        if raw.is_loop() {
            self.report.self_loops += 1;
            return Err(reject(EdgeDefect::SelfLoop));
        }

        let Some(Edge(u, v)) = raw.to_edge(n) else {
            self.report.out_of_range += 1;
            return Err(reject(EdgeDefect::OutOfRange));
        };

        let is_new = self.nbs[u as usize].insert(v);
        self.nbs[v as usize].insert(u);

        if is_new {
            self.report.accepted += 1;
        } else {
            self.report.duplicates += 1;
        }
        Ok(is_new)
    }

    /// Consumes a stream of parsed edges, skipping every recoverable defect with a warning.
    ///
    /// Malformed lines (as reported by the parser) and invalid edges are logged and counted,
    /// all other errors (e.g. IO errors) abort and are returned.
    pub fn extend_lossy<I>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = Result<(usize, RawEdge)>>,
    {
        for item in edges {
            let outcome = item.and_then(|(line, raw)| self.try_insert(line, raw));
            match outcome {
                Ok(_) => {}
                Err(err @ GraphError::MalformedEdgeLine { .. }) => {
                    self.report.malformed += 1;
                    warn!("skipping {err}");
                }
                Err(err @ GraphError::InvalidEdge { .. }) => warn!("skipping {err}"),
                Err(err) => return Err(err),
            }
        }
        Ok(())
    }

    /// Freezes the neighborhoods into an [`AdjGraph`] and returns it with the collected counters
    pub fn finish(self) -> (AdjGraph, BuildReport) {
        let report = self.report;
        let graph = AdjGraph::from_neighborhoods(
            self.nbs
                .into_iter()
                .map(|nb| nb.into_iter().collect())
                .collect(),
        );

        debug!(
            n = graph.number_of_nodes(),
            m = graph.number_of_edges(),
            ?report,
            "adjacency built"
        );
        (graph, report)
    }
}
