//! Frequency counting and Huffman tree construction.
//!
//! The builder is a pure function of the input stream: count how often each
//! byte occurs, make one leaf per distinct byte, then repeatedly merge the
//! two lowest-frequency nodes until a single root remains.
//!
//! # Determinism
//!
//! `std::collections::BinaryHeap` makes no ordering promise between equal
//! elements, so heap entries carry a sequence number assigned at push time
//! and order by `(freq, seq)`. Leaves are pushed in ascending symbol order.
//! Building twice from the same input therefore yields the identical tree,
//! and downstream the identical code table and bit sequence.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::{Result, TreeError};

/// A node in the Huffman tree.
///
/// Leaves hold exactly one symbol; internal nodes exclusively own two
/// children and carry the sum of their frequencies. The tree is immutable
/// once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Terminal node holding one symbol of the input alphabet
    Leaf { symbol: u8, freq: u64 },
    /// Merge of two subtrees; frequency is the sum of both children
    Internal {
        freq: u64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    /// Combined frequency of all leaves under this node.
    pub fn freq(&self) -> u64 {
        match self {
            Node::Leaf { freq, .. } => *freq,
            Node::Internal { freq, .. } => *freq,
        }
    }

    /// Number of leaves under this node.
    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }
}

/// Heap entry wrapping a node with its insertion sequence number.
///
/// Ordered as a min-heap on `(freq, seq)`: lower frequency first, and among
/// equal frequencies the node pushed earlier.
#[derive(Debug)]
struct HeapEntry {
    freq: u64,
    seq: u64,
    node: Node,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.freq == other.freq && self.seq == other.seq
    }
}

impl Eq for HeapEntry {}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap, we want min extraction
        (other.freq, other.seq).cmp(&(self.freq, self.seq))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Count how often each byte value occurs in the input.
///
/// Returns a 256-slot table indexed by byte value; absent symbols are zero.
pub fn count_frequencies(data: &[u8]) -> [u64; 256] {
    let mut freqs = [0u64; 256];
    for &byte in data {
        freqs[byte as usize] += 1;
    }
    freqs
}

/// Build a Huffman tree from an input stream.
///
/// Creates one leaf per distinct byte, then merges the two lowest-frequency
/// nodes until one root remains. Ties are broken by insertion order, so the
/// result is fully deterministic for a given input.
///
/// An input with a single distinct byte yields a lone leaf as the root;
/// [`derive_codes`](crate::code::derive_codes) assigns it the one-bit code
/// "0" so no symbol ever receives an empty code.
///
/// # Errors
/// Returns `TreeError::EmptyInput` if `data` is empty.
pub fn build_tree(data: &[u8]) -> Result<Node> {
    if data.is_empty() {
        return Err(TreeError::EmptyInput.into());
    }

    let freqs = count_frequencies(data);

    let mut seq = 0u64;
    let mut heap = BinaryHeap::new();
    for (symbol, &freq) in freqs.iter().enumerate() {
        if freq > 0 {
            heap.push(HeapEntry {
                freq,
                seq,
                node: Node::Leaf {
                    symbol: symbol as u8,
                    freq,
                },
            });
            seq += 1;
        }
    }

    while heap.len() > 1 {
        let first = heap.pop().unwrap();
        let second = heap.pop().unwrap();
        let freq = first.freq + second.freq;
        heap.push(HeapEntry {
            freq,
            seq,
            node: Node::Internal {
                freq,
                left: Box::new(first.node),
                right: Box::new(second.node),
            },
        });
        seq += 1;
    }

    // Non-empty input guarantees at least one leaf
    Ok(heap.pop().unwrap().node)
}
