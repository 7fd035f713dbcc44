//! Basic graph operations shared by all algorithms and writers.
//!
//! Writers and extractors are generic over these traits so they can be reused
//! for the full graph as well as for extracted subgraphs.

use std::ops::Range;

use crate::{edge::*, node::*};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V in ascending order.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns the range of all vertices.
    /// In contrast to self.vertices(), the range does not borrow self.
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of (undirected) edges of the graph
    fn number_of_edges(&self) -> NumEdges;
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the neighbors of a given vertex in ascending order.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of neighbors of `u`
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator to all vertices with non-zero degree
    fn vertices_with_neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices().filter(|&u| self.degree_of(u) > 0)
    }

    /// Returns the maximum degree of the graph or `0` for the empty graph
    fn max_degree(&self) -> NumNodes {
        self.vertices().map(|u| self.degree_of(u)).max().unwrap_or(0)
    }

    /// Returns the vertex of maximum degree together with its degree.
    /// Ties are broken in favor of the smallest vertex.
    fn max_degree_vertex(&self) -> Option<(Node, NumNodes)> {
        self.vertices()
            .map(|u| (u, self.degree_of(u)))
            .fold(None, |best, (u, d)| match best {
                Some((_, bd)) if bd >= d => best,
                _ => Some((u, d)),
            })
    }

    /// Returns the sum of all degrees, i.e. twice the number of undirected edges
    fn degree_sum(&self) -> u64 {
        self.vertices().map(|u| self.degree_of(u) as u64).sum()
    }

    /// Returns an iterator over all edges incident to `u`.
    /// If `only_normalized`, only edges `Edge(u, v)` with `u <= v` are returned.
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u)
            .filter(move |&v| !only_normalized || u <= v)
            .map(move |v| Edge(u, v))
    }

    /// Returns an iterator over all edges in lexicographic order.
    /// If `only_normalized`, every undirected edge is returned exactly once.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices().flat_map(move |u| self.edges_of(u, only_normalized))
    }
}

/// Provides membership queries for edges
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* exactly if the graph contains the edge `{u, v}`
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// Returns *true* if the node has a self-loop
    fn has_self_loop(&self, u: Node) -> bool {
        self.has_edge(u, u)
    }
}

/// Provides constructors for graphs from a known-valid edge list
pub trait GraphFromScratch: Sized {
    /// Creates a graph with `n` nodes from the given edges.
    /// Every edge is inserted in both directions.
    /// ** Panics if an endpoint is `>= n` **
    fn from_edges<I, T>(n: NumNodes, edges: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Edge>;
}
