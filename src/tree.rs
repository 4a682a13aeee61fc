//! Huffman tree construction.
//!
//! Builds the frequency-weighted binary tree whose leaf depths minimize
//! total weighted code length. One leaf per observed symbol is seeded
//! into a min-priority queue; the two lightest nodes are repeatedly
//! merged under a fresh internal node until a single root remains.

use std::collections::BinaryHeap;

use crate::error::{Error, Result};
use crate::freq::FrequencyTable;

/// Huffman tree node.
///
/// Either a leaf carrying one symbol, or an internal node owning
/// exactly two children. The merge loop only ever combines nodes in
/// pairs, so a one-child internal node cannot occur.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A leaf: one symbol and its total occurrence count.
    Leaf {
        /// The symbol this leaf encodes.
        symbol: u8,
        /// Occurrence count of the symbol.
        weight: u64,
    },
    /// An internal node: weight is the sum of both subtrees.
    Internal {
        /// Combined weight of both children.
        weight: u64,
        /// Subtree reached by appending a 0 bit.
        left: Box<Node>,
        /// Subtree reached by appending a 1 bit.
        right: Box<Node>,
    },
}

impl Node {
    /// Build the tree for a frequency table.
    ///
    /// A table with a single entry yields a root that is itself a leaf;
    /// no merge step runs. Code generation handles that case (see
    /// [`CodeTable`](crate::table::CodeTable)).
    ///
    /// # Errors
    /// Returns [`Error::EmptyAlphabet`] if the table has no entries.
    pub fn build(freqs: &FrequencyTable) -> Result<Self> {
        let mut pq = BinaryHeap::new();
        for (symbol, weight) in freqs.iter() {
            pq.push(Node::Leaf { symbol, weight });
        }

        if pq.is_empty() {
            return Err(Error::EmptyAlphabet);
        }

        // Extraction order among equal weights is whatever the heap
        // yields; optimality of the total weighted length holds either way.
        while pq.len() > 1 {
            let left = pq.pop().expect("heap has >= 2 nodes");
            let right = pq.pop().expect("heap has >= 2 nodes");
            let weight = left.weight() + right.weight();
            pq.push(Node::Internal {
                weight,
                left: Box::new(left),
                right: Box::new(right),
            });
        }

        Ok(pq.pop().expect("heap has exactly one node"))
    }

    /// Subtree weight (leaf frequency, or sum over both children).
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal { weight, .. } => *weight,
        }
    }

    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other.weight().cmp(&self.weight()) // Min-priority queue
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
