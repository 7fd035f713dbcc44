/*!
# Subgraph Algorithms

Vertex-induced subgraphs where the retained nodes and their new ids are given by a node mapper.
*/

use super::*;

/// A trait for creating vertex-induced subgraphs from a graph.
pub trait Subgraph: AdjacencyList {
    /// Creates the subgraph induced by all nodes that `mapping` maps, relabelled accordingly.
    ///
    /// The result has exactly `mapping.len()` nodes; targets without a preimage in this graph
    /// become isolated nodes. An edge `{u, v}` is retained iff both endpoints are mapped.
    ///
    /// # Example
    /// ```
    /// use mtxgraph::{prelude::*, algo::*, utils::*};
    ///
    /// // path 0 - 1 - 2 - 3
    /// let g = AdjGraph::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
    /// let sub: AdjGraph = g.vertex_induced(&Renumbering::from_retained([1, 3, 2]));
    ///
    /// assert_eq!(sub.number_of_nodes(), 3);
    /// assert_eq!(sub.number_of_edges(), 2);
    /// assert!(sub.has_edge(0, 1) && sub.has_edge(1, 2));
    /// ```
    fn vertex_induced<M, GO>(&self, mapping: &M) -> GO
    where
        M: NodeMapGetter,
        GO: GraphFromScratch,
    {
        GO::from_edges(
            mapping.len(),
            mapping
                .mapped_pairs(self.number_of_nodes())
                .flat_map(|(old_u, new_u)| {
                    self.neighbors_of(old_u).filter_map(move |old_v| {
                        let new_v = mapping.new_id_of(old_v)?;
                        (new_u < new_v).then_some(Edge(new_u, new_v))
                    })
                }),
        )
    }
}

impl<G> Subgraph for G where G: AdjacencyList {}
