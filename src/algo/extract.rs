/*!
# Extraction

Two interchangeable strategies to cut a bounded subgraph out of a large graph:

- [`Extraction::Bfs`] grows a ball around a source node with [`BoundedBfs`] until the requested
  number of nodes is reached and renumbers the visited nodes by ascending original id.
- [`Extraction::Window`] keeps the nodes with labels in `offset..offset + limit` regardless of
  topology and shifts them onto `1..=limit`.

All ids in [`Extraction`] are 1-based labels as they appear in files and on the command line.
*/

use tracing::{debug, info};

use super::*;

/// The extraction strategy of a run
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// Bounded breadth-first ball around `source`
    Bfs {
        /// 1-based label of the seed node
        source: i64,
        /// Number of nodes after which the traversal stops discovering
        target_size: NumNodes,
    },
    /// All nodes with labels in `offset..offset + limit`
    Window {
        /// Label of the first window slot; `0` is a slot without a node
        offset: u64,
        /// Number of nodes in the window (and in the output)
        limit: NumNodes,
    },
}

impl Extraction {
    /// Shorthand for [`Extraction::Bfs`]
    pub fn bfs(source: i64, target_size: NumNodes) -> Self {
        Extraction::Bfs {
            source,
            target_size,
        }
    }

    /// Shorthand for [`Extraction::Window`]
    pub fn window(offset: u64, limit: NumNodes) -> Self {
        Extraction::Window { offset, limit }
    }

    /// Shorthand for the window of the first `limit` nodes
    pub fn prefix(limit: NumNodes) -> Self {
        Extraction::Window {
            offset: 1,
            limit,
        }
    }
}

/// The node mapper used by an extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubgraphMapping {
    Renumbered(Renumbering),
    Shifted(ShiftMapping),
}

impl NodeMapGetter for SubgraphMapping {
    fn new_id_of(&self, old: Node) -> Option<Node> {
        match self {
            SubgraphMapping::Renumbered(m) => m.new_id_of(old),
            SubgraphMapping::Shifted(m) => m.new_id_of(old),
        }
    }

    fn old_id_of(&self, new: Node) -> Option<Node> {
        match self {
            SubgraphMapping::Renumbered(m) => m.old_id_of(new),
            SubgraphMapping::Shifted(m) => m.old_id_of(new),
        }
    }

    fn len(&self) -> NumNodes {
        match self {
            SubgraphMapping::Renumbered(m) => m.len(),
            SubgraphMapping::Shifted(m) => m.len(),
        }
    }
}

/// A subgraph together with the mapping from the nodes of the source graph onto its nodes
#[derive(Debug, Clone)]
pub struct Extracted {
    pub graph: AdjGraph,
    pub mapping: SubgraphMapping,
}

/// Extraction strategies directly available on graphs
pub trait Extract: AdjacencyList + Sized {
    /// Runs the bounded BFS strategy from the 0-based node `source` and returns the
    /// renumbered subgraph induced by the visited nodes.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidSourceVertex`] if `source` is not a node of the graph.
    fn extract_bfs(&self, source: Node, target_size: NumNodes) -> Result<Extracted> {
        let visited = self.bounded_bfs(source, target_size)?.into_visited();
        if (visited.len() as NumNodes) < target_size {
            info!(
                requested = target_size,
                reached = visited.len(),
                "component of source is smaller than requested"
            );
        }

        let mapping = Renumbering::from_retained(visited);
        debug_assert!(is_order_preserving(self, &mapping));
        let graph: AdjGraph = self.vertex_induced(&mapping);
        debug!(
            n = graph.number_of_nodes(),
            m = graph.number_of_edges(),
            "bfs subgraph extracted"
        );

        Ok(Extracted {
            graph,
            mapping: SubgraphMapping::Renumbered(mapping),
        })
    }

    /// Runs the window strategy over the nodes labelled `offset..offset + limit`.
    /// Never fails: an empty window yields `limit` isolated nodes.
    fn extract_window(&self, offset: u64, limit: NumNodes) -> Extracted {
        let mapping = ShiftMapping::new(offset, limit);
        debug_assert!(is_order_preserving(self, &mapping));
        let graph: AdjGraph = self.vertex_induced(&mapping);
        if graph.number_of_edges() == 0 {
            info!(offset, limit, "window contains no edges");
        }

        Extracted {
            graph,
            mapping: SubgraphMapping::Shifted(mapping),
        }
    }

    /// Dispatches to the strategy selected by `extraction`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidSourceVertex`] if a BFS seed is not a node of the graph.
    ///
    /// # Example
    /// ```
    /// use mtxgraph::{prelude::*, algo::*};
    ///
    /// let g = AdjGraph::from_edges(4, [(0, 1), (1, 2), (0, 2)]);
    ///
    /// let ball = g.extract(&Extraction::bfs(1, 3)).unwrap();
    /// assert_eq!(ball.graph.number_of_edges(), 3);
    ///
    /// let window = g.extract(&Extraction::window(2, 2)).unwrap();
    /// assert_eq!(window.graph.number_of_nodes(), 2);
    /// assert_eq!(window.graph.number_of_edges(), 1);
    /// ```
    fn extract(&self, extraction: &Extraction) -> Result<Extracted> {
        match *extraction {
            Extraction::Bfs {
                source,
                target_size,
            } => {
                let n = self.number_of_nodes();
                let start = node_from_label(source, n)
                    .ok_or(GraphError::InvalidSourceVertex { vertex: source, n })?;
                self.extract_bfs(start, target_size)
            }
            Extraction::Window { offset, limit } => Ok(self.extract_window(offset, limit)),
        }
    }
}

impl<G> Extract for G where G: AdjacencyList {}
