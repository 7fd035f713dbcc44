/*!
# Representations

A graph is stored as one sorted, deduplicated neighborhood per node ([`AdjGraph`]).
Graphs read from files are assembled by an [`AdjacencyBuilder`] that validates every
edge, symmetrizes it and freezes the result once all edges were seen.
*/

use crate::{edge::*, node::*, ops::*};

mod adj_graph;
mod builder;

pub use adj_graph::*;
pub use builder::*;
