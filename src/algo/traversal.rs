/*!
Breadth-first traversal bounded by the number of discovered nodes.

The frontier is a FIFO queue and a node counts as visited the moment it is enqueued,
so no node ever enters the frontier twice. Neighbors are enumerated in ascending order,
which makes the set of visited nodes deterministic even when the traversal is cut off
in the middle of expanding a node.
*/

use std::collections::VecDeque;

use fxhash::FxHashSet;

use super::*;

/// Breadth-first search iterator that stops discovering new nodes once `limit` nodes were visited.
///
/// The iterator yields every visited node exactly once (in dequeue order): the yielded nodes
/// are precisely the visited set, which has size `min(limit, |component of start|)`
/// (but always includes `start`).
pub struct BoundedBfs<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    visited: FxHashSet<Node>,
    frontier: VecDeque<Node>,
    limit: usize,
}

impl<'a, G> BoundedBfs<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a new traversal starting at `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node, limit: NumNodes) -> Self {
        assert!(start < graph.number_of_nodes());

        let mut visited = FxHashSet::default();
        visited.insert(start);
        Self {
            graph,
            visited,
            frontier: VecDeque::from(vec![start]),
            limit: limit as usize,
        }
    }

    /// Returns *true* once no further nodes will be discovered
    pub fn is_saturated(&self) -> bool {
        self.visited.len() >= self.limit
    }

    /// Runs the traversal to completion and returns the visited set
    pub fn into_visited(mut self) -> FxHashSet<Node> {
        while self.next().is_some() {}
        self.visited
    }
}

impl<G> Iterator for BoundedBfs<'_, G>
where
    G: AdjacencyList,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.frontier.pop_front()?;

        for v in self.graph.neighbors_of(u) {
            if self.is_saturated() {
                break;
            }
            if self.visited.insert(v) {
                self.frontier.push_back(v);
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.limit.max(self.visited.len()) - self.visited.len();
        (
            self.frontier.len(),
            Some(self.frontier.len() + remaining.min(self.graph.len())),
        )
    }
}

/// Traversal methods directly available on graphs
pub trait BoundedTraversal: AdjacencyList {
    /// Returns a bounded BFS iterator starting at `start` that discovers at most
    /// `max(1, limit)` nodes.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidSourceVertex`] if `start` is not a node of the graph.
    ///
    /// # Example
    /// ```
    /// use mtxgraph::{prelude::*, algo::*};
    /// use itertools::Itertools;
    ///
    /// // path 0 - 1 - 2 - 3
    /// let g = AdjGraph::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
    /// let order = g.bounded_bfs(1, 3).unwrap().collect_vec();
    /// assert_eq!(order, vec![1, 0, 2]);
    /// ```
    fn bounded_bfs(&self, start: Node, limit: NumNodes) -> Result<BoundedBfs<'_, Self>> {
        if start >= self.number_of_nodes() {
            return Err(GraphError::InvalidSourceVertex {
                vertex: label_of(start) as i64,
                n: self.number_of_nodes(),
            });
        }
        Ok(BoundedBfs::new(self, start, limit))
    }
}

impl<G> BoundedTraversal for G where G: AdjacencyList {}
