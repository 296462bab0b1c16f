//! Builds the merge tree from a weighted symbol list.
//!
//! The classic description repeatedly stable-sorts the working list by weight, removes the first
//! two nodes, and appends their parent to the end of the list. Among nodes of equal weight that
//! always picks the one that entered the list first: leaves in input order, then merged nodes in
//! the order they were created. Here every node gets a sequence number when it is created and the
//! heap orders by (weight, sequence), which gives exactly the same trees in O(n log n).

use log::{info, trace, warn};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::huffman::Node;
use crate::error::{Error, Result};

/// A node waiting in the heap, tagged with its creation sequence number.
struct Pending<S> {
    seq: usize,
    node: Node<S>,
}

impl<S> Pending<S> {
    fn key(&self) -> (u64, usize) {
        (self.node.weight, self.seq)
    }
}

impl<S> PartialEq for Pending<S> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<S> Eq for Pending<S> {}

impl<S> PartialOrd for Pending<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for Pending<S> {
    /// Reversed so the BinaryHeap pops the lightest, then oldest, node first
    fn cmp(&self, other: &Self) -> Ordering {
        other.key().cmp(&self.key())
    }
}

/// Build the tree for a list of (symbol, weight) pairs sorted by ascending weight.
///
/// Each step takes the two smallest nodes, the first one removed becoming the left (0) child.
/// A one entry list returns that leaf as the root. An empty list returns `Error::EmptyInput`.
pub fn build_tree<S: Clone>(weighted: &[(S, u64)]) -> Result<Node<S>> {
    if weighted.windows(2).any(|pair| pair[0].1 > pair[1].1) {
        warn!("Weights are not in ascending order; equal weights will follow input order.");
    }

    let mut heap = weighted
        .iter()
        .enumerate()
        .map(|(seq, (sym, weight))| Pending {
            seq,
            node: Node::leaf(sym.clone(), *weight),
        })
        .collect::<BinaryHeap<Pending<S>>>();

    // Merged nodes are numbered after every leaf
    let mut next_seq = weighted.len();

    while let Some(left) = heap.pop() {
        let Some(right) = heap.pop() else {
            debug_assert!(left.node.is_well_formed());
            info!(
                "Built tree of {} symbols, weight {}, depth {}",
                weighted.len(),
                left.node.weight,
                left.node.depth
            );
            return Ok(left.node);
        };
        trace!(
            "Merge #{} ({}) + #{} ({}) -> #{} ({})",
            left.seq,
            left.node.weight,
            right.seq,
            right.node.weight,
            next_seq,
            left.node.weight + right.node.weight
        );
        heap.push(Pending {
            seq: next_seq,
            node: Node::merge(left.node, right.node),
        });
        next_seq += 1;
    }

    Err(Error::EmptyInput)
}
