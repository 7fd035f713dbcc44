//! Error taxonomy shared by parsing, building, extraction and emission.
//!
//! Some variants are *recoverable*: the offending line or edge is skipped and a diagnostic is
//! logged, see [`GraphError::is_recoverable`]. All others abort the current run.

use crate::{edge::RawEdge, node::NumNodes};

/// Why a single edge was rejected by the [`AdjacencyBuilder`](crate::repr::AdjacencyBuilder)
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EdgeDefect {
    /// Both endpoints are equal
    SelfLoop,
    /// At least one endpoint lies outside of `1..=n`
    OutOfRange,
}

impl std::fmt::Display for EdgeDefect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EdgeDefect::SelfLoop => write!(f, "self-loop"),
            EdgeDefect::OutOfRange => write!(f, "endpoint out of range"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// The dimension line cannot be parsed; the declared number of nodes cannot be trusted
    #[error("malformed header at line {line}: {reason} (found {content:?})")]
    MalformedHeader {
        line: usize,
        content: String,
        reason: String,
    },

    /// The input ended before a dimension line was found
    #[error("no header found: input contains only comments or blank lines")]
    MissingHeader,

    /// A data line without two integer tokens
    #[error("malformed edge at line {line}: {content:?}")]
    MalformedEdgeLine { line: usize, content: String },

    /// A self-loop or an edge with an endpoint outside of `1..=n`
    #[error("invalid edge {edge} at line {line}: {defect} (n = {n})")]
    InvalidEdge {
        line: usize,
        edge: RawEdge,
        defect: EdgeDefect,
        n: NumNodes,
    },

    /// The seed of a breadth-first extraction is not a node of the graph (1-based label)
    #[error("invalid source vertex {vertex}: graph has vertices 1..={n}")]
    InvalidSourceVertex { vertex: i64, n: NumNodes },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GraphError {
    /// Returns *true* if a run may skip the offending item and continue
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GraphError::MalformedEdgeLine { .. } | GraphError::InvalidEdge { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
