/*!
`mtxgraph` converts large sparse graphs from the **MatrixMarket** coordinate format into the
**METIS** neighborhood-list format and cuts bounded subgraphs out of them for benchmarking.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
Files and the command line use 1-based labels; the conversion happens exclusively in [`io`] and
[`algo::Extraction`] (see [`node::label_of`] and [`node::node_from_label`]).
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`. All graphs are undirected, simple
and loop-free: [`repr::AdjacencyBuilder`] drops self-loops, duplicates and out-of-range entries
while reading and reports them in a [`repr::BuildReport`].

# Design

Readers, writers and the [`pipeline::Pipeline`] are configurable structs altered via the
*Builder* / *Setter* pattern before running them on an input.
Extraction strategies are implemented via traits on the graph itself
(`graph.bounded_bfs(start, limit)`, `graph.extract(&extraction)`), so they work on every
[`ops::AdjacencyList`].

# Usage

- [`prelude`] includes definitions for nodes, edges, basic graph operations and the graph representation,
- [`algo`] includes the bounded BFS, vertex-induced subgraphs and the two extraction strategies,
- [`io`] includes readers for MatrixMarket/METIS and writers for METIS, MatrixMarket and CSR,
- [`utils`] includes the node mappers translating between a graph and its subgraphs,
- [`pipeline`] chains all of the above into a single run.

In most use-cases, `use mtxgraph::{prelude::*, algo::*, io::*};` suffices.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod io;
pub mod node;
pub mod ops;
pub mod pipeline;
pub mod repr;
pub mod utils;

/// `mtxgraph::prelude` includes definitions for nodes and edges, all basic graph operation traits as well as the graph representation.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*};
}
