use smallvec::SmallVec;

use super::*;

/// Sparse graphs rarely exceed a handful of neighbors per node (road networks average below 3)
pub type Neighbors = SmallVec<[Node; 4]>;

/// An undirected simple graph stored as sorted neighborhoods.
///
/// Invariants upheld by every constructor:
/// - `v` is a neighbor of `u` exactly if `u` is a neighbor of `v`,
/// - no node is its own neighbor,
/// - every neighborhood is sorted ascending and free of duplicates,
/// - the number of edges equals half the sum of all degrees.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjGraph {
    nbs: Vec<Neighbors>,
    num_edges: NumEdges,
}

impl AdjGraph {
    /// Creates a graph with `n` isolated nodes
    pub fn new(n: NumNodes) -> Self {
        Self {
            nbs: vec![Neighbors::new(); n as usize],
            num_edges: 0,
        }
    }

    /// Freezes symmetric neighborhoods into a graph.
    /// Neighborhoods are sorted and deduplicated; the edge count is derived from their sizes.
    pub(crate) fn from_neighborhoods(mut nbs: Vec<Neighbors>) -> Self {
        for nb in nbs.iter_mut() {
            nb.sort_unstable();
            nb.dedup();
        }

        let degree_sum: u64 = nbs.iter().map(|nb| nb.len() as u64).sum();
        let graph = Self {
            nbs,
            num_edges: degree_sum / 2,
        };
        debug_assert!(graph.is_symmetric());
        graph
    }

    /// Returns *true* if every edge is stored in both directions and no self-loop exists
    pub fn is_symmetric(&self) -> bool {
        self.vertices().all(|u| {
            self.neighbors_of(u)
                .all(|v| v != u && self.nbs[v as usize].binary_search(&u).is_ok())
        })
    }
}

impl GraphNodeOrder for AdjGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl GraphEdgeOrder for AdjGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl AdjacencyList for AdjGraph {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].len() as NumNodes
    }
}

impl AdjacencyTest for AdjGraph {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.nbs[u as usize].binary_search(&v).is_ok()
    }
}

impl GraphFromScratch for AdjGraph {
    fn from_edges<I, T>(n: NumNodes, edges: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Edge>,
    {
        let mut nbs = vec![Neighbors::new(); n as usize];
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            debug_assert_ne!(u, v, "self-loops are not representable");
            if u == v {
                continue;
            }
            nbs[u as usize].push(v);
            nbs[v as usize].push(u);
        }
        Self::from_neighborhoods(nbs)
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn from_edges_symmetrizes_and_dedups() {
        let g = AdjGraph::from_edges(4, [(0, 1), (1, 0), (1, 2), (0, 2), (2, 1)]);
        assert_eq!(g.number_of_nodes(), 4);
        assert_eq!(g.number_of_edges(), 3);
        assert_eq!(g.neighbors_of(0).collect_vec(), vec![1, 2]);
        assert_eq!(g.neighbors_of(1).collect_vec(), vec![0, 2]);
        assert_eq!(g.neighbors_of(2).collect_vec(), vec![0, 1]);
        assert_eq!(g.degree_of(3), 0);
        assert!(g.is_symmetric());
    }

    #[test]
    fn normalized_edges_are_sorted() {
        let g = AdjGraph::from_edges(5, [(4, 0), (3, 1), (2, 0), (1, 0)]);
        assert_eq!(
            g.edges(true).collect_vec(),
            vec![Edge(0, 1), Edge(0, 2), Edge(0, 4), Edge(1, 3)]
        );
        assert_eq!(g.edges(false).count() as u64, 2 * g.number_of_edges());
    }

    #[test]
    fn max_degree_vertex_prefers_smallest() {
        let g = AdjGraph::from_edges(5, [(0, 1), (2, 3), (2, 4), (1, 3)]);
        assert_eq!(g.max_degree(), 2);
        assert_eq!(g.max_degree_vertex(), Some((1, 2)));
        assert_eq!(AdjGraph::new(0).max_degree_vertex(), None);
    }

    #[test]
    fn has_edge() {
        let g = AdjGraph::from_edges(3, [(0, 2)]);
        assert!(g.has_edge(0, 2));
        assert!(g.has_edge(2, 0));
        assert!(!g.has_edge(0, 1));
        assert!(!g.has_self_loop(0));
    }
}
