/*!
# Node Mapper

Maps nodes of a graph onto the nodes of an extracted subgraph.

Two mappers are provided:
- [`Renumbering`]: an order-preserving bijection from an arbitrary set of retained nodes onto `0..M`,
- [`ShiftMapping`]: a fixed window `offset..offset + len` that is shifted onto `0..len`.

Both preserve the relative order of nodes, so an extracted subgraph does not depend on the
order in which its nodes were discovered.
*/
use fxhash::FxHashMap;
use itertools::Itertools;

use crate::{node::*, ops::*};

/// A trait for accessing node mappings.
///
/// `old` ids refer to the original graph, `new` ids to the extracted subgraph.
pub trait NodeMapGetter {
    /// If the mapping `(old, new)` exists, returns `Some(new)`, otherwise `None`.
    fn new_id_of(&self, old: Node) -> Option<Node>;

    /// If the mapping `(old, new)` exists, returns `Some(old)`, otherwise `None`.
    fn old_id_of(&self, new: Node) -> Option<Node>;

    /// Returns the number of nodes in the target range, i.e. the subgraph has nodes `0..len()`.
    fn len(&self) -> NumNodes;

    /// Returns `true` if the target range is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over all `(old, new)` pairs for which a mapping exists
    /// where `old` is a node of a graph with `n` nodes, ascending in `old`.
    fn mapped_pairs(&self, n: NumNodes) -> impl Iterator<Item = (Node, Node)> + '_ {
        (0..self.len()).filter_map(move |new| {
            self.old_id_of(new)
                .filter(|&old| old < n)
                .map(|old| (old, new))
        })
    }
}

/// Order-preserving bijection from a set of retained nodes onto `0..M`.
///
/// The retained nodes are sorted ascending and numbered consecutively; the `i`-th smallest
/// retained node is mapped to `i`.
///
/// # Example
/// ```
/// use mtxgraph::utils::*;
///
/// let mapping = Renumbering::from_retained([7, 2, 5, 2]);
/// assert_eq!(mapping.len(), 3);
/// assert_eq!(mapping.new_id_of(2), Some(0));
/// assert_eq!(mapping.new_id_of(5), Some(1));
/// assert_eq!(mapping.new_id_of(7), Some(2));
/// assert_eq!(mapping.new_id_of(3), None);
/// assert_eq!(mapping.old_id_of(1), Some(5));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Renumbering {
    new_to_old: Vec<Node>,
    old_to_new: FxHashMap<Node, Node>,
}

impl Renumbering {
    /// Builds the renumbering from retained nodes given in any order (duplicates are ignored)
    pub fn from_retained<I>(retained: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        let new_to_old = retained.into_iter().sorted_unstable().dedup().collect_vec();
        Self::from_sorted(new_to_old)
    }

    /// Builds the renumbering from retained nodes that are already sorted and free of duplicates
    pub fn from_sorted(new_to_old: Vec<Node>) -> Self {
        debug_assert!(new_to_old.is_sorted() && new_to_old.iter().all_unique());
        let old_to_new = new_to_old
            .iter()
            .enumerate()
            .map(|(new, &old)| (old, new as Node))
            .collect();

        Self {
            new_to_old,
            old_to_new,
        }
    }
}

impl NodeMapGetter for Renumbering {
    fn new_id_of(&self, old: Node) -> Option<Node> {
        self.old_to_new.get(&old).copied()
    }

    fn old_id_of(&self, new: Node) -> Option<Node> {
        self.new_to_old.get(new as usize).copied()
    }

    fn len(&self) -> NumNodes {
        self.new_to_old.len() as NumNodes
    }

    fn mapped_pairs(&self, n: NumNodes) -> impl Iterator<Item = (Node, Node)> + '_ {
        self.new_to_old
            .iter()
            .enumerate()
            .filter(move |&(_, &old)| old < n)
            .map(|(new, &old)| (old, new as Node))
    }
}

/// Maps the nodes with 1-based labels `offset..offset + len` onto `0..len`, so that the node
/// labelled `x` receives the label `x - offset + 1`.
///
/// Window slots without a node in the source graph (label `0` or beyond `n`) still occupy
/// their place in the target range; they simply become isolated nodes.
///
/// # Example
/// ```
/// use mtxgraph::utils::*;
///
/// // labels 2 and 3, i.e. nodes 1 and 2
/// let shift = ShiftMapping::new(2, 2);
/// assert_eq!(shift.new_id_of(0), None);
/// assert_eq!(shift.new_id_of(1), Some(0));
/// assert_eq!(shift.new_id_of(2), Some(1));
/// assert_eq!(shift.new_id_of(3), None);
/// assert_eq!(shift.old_id_of(1), Some(2));
///
/// // labels 0, 1 and 2: the first slot has no counterpart
/// let shift = ShiftMapping::new(0, 3);
/// assert_eq!(shift.old_id_of(0), None);
/// assert_eq!(shift.new_id_of(0), Some(1));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ShiftMapping {
    offset: u64,
    len: NumNodes,
}

impl ShiftMapping {
    /// Creates the mapping for the window of labels `offset..offset + len`
    pub fn new(offset: u64, len: NumNodes) -> Self {
        Self { offset, len }
    }

    /// Returns *true* if the 0-based node `old` lies within the window
    pub fn contains(&self, old: Node) -> bool {
        (self.offset..self.offset.saturating_add(self.len as u64)).contains(&label_of(old))
    }
}

impl NodeMapGetter for ShiftMapping {
    fn new_id_of(&self, old: Node) -> Option<Node> {
        self.contains(old)
            .then(|| (label_of(old) - self.offset) as Node)
    }

    fn old_id_of(&self, new: Node) -> Option<Node> {
        if new >= self.len {
            return None;
        }
        let label = self.offset.saturating_add(new as u64);
        label.checked_sub(1).and_then(|old| Node::try_from(old).ok())
    }

    fn len(&self) -> NumNodes {
        self.len
    }
}

/// Returns *true* if `mapping` restricted to the nodes of `graph` is a bijection between its
/// mapped nodes and a subset of `0..mapping.len()` that preserves the node order.
pub fn is_order_preserving<G, M>(graph: &G, mapping: &M) -> bool
where
    G: GraphNodeOrder,
    M: NodeMapGetter,
{
    let pairs = mapping.mapped_pairs(graph.number_of_nodes()).collect_vec();
    pairs
        .iter()
        .all(|&(old, new)| mapping.new_id_of(old) == Some(new))
        && pairs.windows(2).all(|w| w[0].0 < w[1].0 && w[0].1 < w[1].1)
}
