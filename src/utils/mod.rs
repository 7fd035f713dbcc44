/*!
# Utilities

Helpers that do not belong to a specific algorithm, most importantly the node mappers
([`Renumbering`], [`ShiftMapping`]) that translate between a graph and an extracted subgraph.
*/

pub mod node_mapper;

pub use node_mapper::{NodeMapGetter, Renumbering, ShiftMapping, is_order_preserving};
