use std::fmt::{Debug, Display};

use crate::node::*;

/// An undirected edge between two (0-based) nodes.
/// Within this crate edges are stored normalized whenever they leave a graph.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// Edge counts are derived from neighborhood sizes and may exceed `2^32` for half-sums of large graphs.
pub type NumEdges = u64;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

/// An edge exactly as read from a file: two 1-based labels that have not been validated yet.
///
/// Labels are kept signed so that `0` and negative entries survive parsing and can be
/// reported by the [`AdjacencyBuilder`](crate::repr::AdjacencyBuilder) instead of failing to parse.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RawEdge(pub i64, pub i64);

impl RawEdge {
    /// Returns true if both labels are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Converts both labels into nodes of a graph with `n` nodes.
    /// Returns `None` if at least one label lies outside of `1..=n`.
    pub fn to_edge(&self, n: NumNodes) -> Option<Edge> {
        Some(Edge(node_from_label(self.0, n)?, node_from_label(self.1, n)?))
    }
}

impl Display for RawEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

impl From<(i64, i64)> for RawEdge {
    fn from(value: (i64, i64)) -> Self {
        RawEdge(value.0, value.1)
    }
}
