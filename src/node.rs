/*!
# Node Representation

We choose `Node = u32` as the road and web graphs this crate is used for stay well below `2^32` nodes.
Inside the crate nodes are numbered `0..n`, while every file format (and every number shown to a user)
is 1-based. The helpers in this module are the only place where the two numberings meet.
*/

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// Returns the 1-based label of a node as it appears in files and diagnostics
#[inline]
pub const fn label_of(u: Node) -> u64 {
    u as u64 + 1
}

/// Converts a 1-based label into a node of a graph with `n` nodes.
///
/// Returns `None` if `label` is `0` or exceeds `n`.
///
/// # Example
/// ```
/// use mtxgraph::node::*;
///
/// assert_eq!(node_from_label(1, 4), Some(0));
/// assert_eq!(node_from_label(4, 4), Some(3));
/// assert_eq!(node_from_label(0, 4), None);
/// assert_eq!(node_from_label(5, 4), None);
/// ```
pub fn node_from_label(label: i64, n: NumNodes) -> Option<Node> {
    if (1..=n as i64).contains(&label) {
        Some((label - 1) as Node)
    } else {
        None
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn labels_roundtrip() {
        for u in [0, 1, 17, 1000] {
            assert_eq!(node_from_label(label_of(u) as i64, 1001), Some(u));
        }
    }

    #[test]
    fn negative_labels_are_rejected() {
        assert_eq!(node_from_label(-3, 10), None);
        assert_eq!(node_from_label(1, 0), None);
    }
}
