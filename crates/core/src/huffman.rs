//! Huffman tree construction and code table generation.
//!
//! The pipeline is: byte frequencies -> prefix-code tree -> code table.
//! The tree is built bottom-up with the classic greedy merge: repeatedly
//! take the two lowest-frequency nodes and join them under a new internal
//! node until one root remains.
//!
//! # Tie-breaking
//!
//! When two nodes share a frequency, the one inserted into the priority
//! queue first wins. This makes code assignment fully deterministic for a
//! given input, though the container format does not depend on it: the
//! code table is stored verbatim in every `.cpm` header.
//!
//! # Single-symbol inputs
//!
//! An input with one distinct byte value would produce a lone leaf root,
//! and a leaf at depth zero has no path bits. The builder instead wraps
//! the leaf in a synthetic internal node with a single child, so the
//! symbol always receives the one-bit code `"0"`.

use std::collections::BinaryHeap;

use crate::error::{HuffmanError, Result};

/// Number of symbols in the frequency table. Covers all possible u8 values.
pub const MAX_SYMBOLS: usize = u8::MAX as usize + 1;

/// Count occurrences of each byte value.
///
/// The sum of all entries equals `data.len()`. An empty input produces an
/// all-zero table, which [`HuffmanTree::from_frequencies`] rejects.
pub fn byte_frequencies(data: &[u8]) -> [u64; MAX_SYMBOLS] {
    let mut freqs = [0u64; MAX_SYMBOLS];
    for &byte in data {
        freqs[byte as usize] += 1;
    }
    freqs
}

/// A node in the Huffman tree arena.
///
/// Children are indices into the owning [`HuffmanTree::nodes`] vector, so
/// the tree needs no pointer juggling and is acyclic by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    /// Terminal node carrying a real byte value and its frequency.
    Leaf { byte: u8, freq: u64 },

    /// Interior node with the combined frequency of its subtree, a left
    /// child and, except for the synthetic single-symbol root, a right
    /// child.
    Internal {
        freq: u64,
        left: usize,
        right: Option<usize>,
    },
}

impl Node {
    fn freq(&self) -> u64 {
        match *self {
            Node::Leaf { freq, .. } | Node::Internal { freq, .. } => freq,
        }
    }
}

/// Entry in the build queue. Ordering is reversed so that
/// `BinaryHeap` (a max-heap) pops the lowest frequency first, with
/// insertion sequence as the deterministic tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct QueueEntry {
    freq: u64,
    seq: u64,
    node: usize,
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (other.freq, other.seq).cmp(&(self.freq, self.seq))
    }
}

/// A strict binary prefix-code tree over byte values.
///
/// Built once per compression, consumed by [`CodeTable::from_tree`], then
/// discarded. Never serialized; the container stores the code table.
#[derive(Debug, Clone)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root: usize,
}

impl HuffmanTree {
    /// Build a tree from a byte frequency table.
    ///
    /// # Errors
    /// Returns [`HuffmanError::EmptyFrequencyTable`] if every entry is zero.
    pub fn from_frequencies(freqs: &[u64; MAX_SYMBOLS]) -> Result<Self> {
        let mut nodes = Vec::new();
        let mut queue = BinaryHeap::new();
        let mut seq = 0u64;

        for (byte, &freq) in freqs.iter().enumerate() {
            if freq > 0 {
                nodes.push(Node::Leaf {
                    byte: byte as u8,
                    freq,
                });
                queue.push(QueueEntry {
                    freq,
                    seq,
                    node: nodes.len() - 1,
                });
                seq += 1;
            }
        }

        if queue.is_empty() {
            return Err(HuffmanError::EmptyFrequencyTable.into());
        }

        // Single distinct symbol: wrap the lone leaf so traversal still
        // descends one edge and yields a non-empty code.
        if queue.len() == 1 {
            let only = queue.pop().unwrap();
            nodes.push(Node::Internal {
                freq: only.freq,
                left: only.node,
                right: None,
            });
            let root = nodes.len() - 1;
            return Ok(Self { nodes, root });
        }

        while queue.len() > 1 {
            let a = queue.pop().unwrap();
            let b = queue.pop().unwrap();

            nodes.push(Node::Internal {
                freq: a.freq + b.freq,
                left: a.node,
                right: Some(b.node),
            });
            queue.push(QueueEntry {
                freq: a.freq + b.freq,
                seq,
                node: nodes.len() - 1,
            });
            seq += 1;
        }

        let root = queue.pop().unwrap().node;
        Ok(Self { nodes, root })
    }

    /// Combined frequency at the root, equal to the input byte count.
    pub fn total_count(&self) -> u64 {
        self.nodes[self.root].freq()
    }
}

/// Mapping from byte value to its `'0'`/`'1'` code string.
///
/// Entries are empty for bytes that do not occur. The set of non-empty
/// codes forms a prefix code: no code is a prefix of another.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: Vec<String>,
}

impl CodeTable {
    /// Create a table with all 256 entries empty.
    pub fn empty() -> Self {
        Self {
            codes: vec![String::new(); MAX_SYMBOLS],
        }
    }

    /// Derive the code table from a tree by depth-first walk: `'0'` on
    /// the left edge, `'1'` on the right edge.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut table = Self::empty();

        // Explicit stack of (node, accumulated prefix); depth is bounded
        // by the symbol count so recursion would also be fine.
        let mut stack = vec![(tree.root, String::new())];
        while let Some((index, prefix)) = stack.pop() {
            match &tree.nodes[index] {
                Node::Leaf { byte, .. } => {
                    // Empty prefix can only happen for a bare leaf root;
                    // an empty code would be undecodable.
                    let code = if prefix.is_empty() {
                        "0".to_string()
                    } else {
                        prefix
                    };
                    table.codes[*byte as usize] = code;
                }
                Node::Internal { left, right, .. } => {
                    stack.push((*left, format!("{prefix}0")));
                    if let Some(right) = right {
                        stack.push((*right, format!("{prefix}1")));
                    }
                }
            }
        }

        table
    }

    /// Assign a code to a byte value. Used when reconstructing a table
    /// from a parsed container header.
    pub fn insert(&mut self, byte: u8, code: String) {
        if self.codes.is_empty() {
            self.codes = vec![String::new(); MAX_SYMBOLS];
        }
        self.codes[byte as usize] = code;
    }

    /// Code for a byte value, or `None` if the byte has no code.
    pub fn get(&self, byte: u8) -> Option<&str> {
        match self.codes.get(byte as usize).map(String::as_str) {
            Some("") | None => None,
            some => some,
        }
    }

    /// Iterate over `(byte, code)` pairs with non-empty codes, in byte order.
    pub fn entries(&self) -> impl Iterator<Item = (u8, &str)> {
        self.codes
            .iter()
            .enumerate()
            .filter(|(_, code)| !code.is_empty())
            .map(|(byte, code)| (byte as u8, code.as_str()))
    }

    /// Number of bytes that have a code.
    pub fn num_codes(&self) -> usize {
        self.codes.iter().filter(|code| !code.is_empty()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_for(data: &[u8]) -> CodeTable {
        let freqs = byte_frequencies(data);
        let tree = HuffmanTree::from_frequencies(&freqs).unwrap();
        CodeTable::from_tree(&tree)
    }

    #[test]
    fn test_frequencies_sum_to_input_length() {
        let data = b"abracadabra";
        let freqs = byte_frequencies(data);
        assert_eq!(freqs.iter().sum::<u64>(), data.len() as u64);
        assert_eq!(freqs[b'a' as usize], 5);
        assert_eq!(freqs[b'b' as usize], 2);
    }

    #[test]
    fn test_root_frequency_equals_input_length() {
        let data = b"mississippi";
        let freqs = byte_frequencies(data);
        let tree = HuffmanTree::from_frequencies(&freqs).unwrap();
        assert_eq!(tree.total_count(), data.len() as u64);

        let single = HuffmanTree::from_frequencies(&byte_frequencies(&[9u8; 42])).unwrap();
        assert_eq!(single.total_count(), 42);
    }

    #[test]
    fn test_empty_input_rejected() {
        let freqs = byte_frequencies(&[]);
        let result = HuffmanTree::from_frequencies(&freqs);
        assert!(matches!(
            result,
            Err(crate::Error::Huffman(HuffmanError::EmptyFrequencyTable))
        ));
    }

    #[test]
    fn test_single_symbol_gets_code_zero() {
        let table = table_for(&[b'Z'; 1000]);
        assert_eq!(table.num_codes(), 1);
        assert_eq!(table.get(b'Z'), Some("0"));
    }

    #[test]
    fn test_two_symbols_get_one_bit_each() {
        // "AAAB": two leaves merge directly under the root, so one gets
        // "0" and the other "1". Which is which depends on tie-break.
        let table = table_for(b"AAAB");
        let a = table.get(b'A').unwrap();
        let b = table.get(b'B').unwrap();
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 1);
        assert_ne!(a, b);
    }

    #[test]
    fn test_absent_bytes_have_no_code() {
        let table = table_for(b"AAAB");
        assert_eq!(table.get(b'C'), None);
        assert_eq!(table.entries().count(), 2);
    }

    #[test]
    fn test_more_frequent_symbol_gets_shorter_or_equal_code() {
        let table = table_for(b"aaaaaaaabbbc");
        let a = table.get(b'a').unwrap().len();
        let c = table.get(b'c').unwrap().len();
        assert!(a <= c);
    }

    #[test]
    fn test_prefix_property_full_alphabet() {
        let data: Vec<u8> = (0u8..=255).flat_map(|b| vec![b; b as usize + 1]).collect();
        let table = table_for(&data);
        assert_eq!(table.num_codes(), 256);

        let codes: Vec<&str> = table.entries().map(|(_, code)| code).collect();
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    assert!(!b.starts_with(a), "{a:?} is a prefix of {b:?}");
                }
            }
        }
    }

    #[test]
    fn test_deterministic_for_same_input() {
        let data = b"the quick brown fox jumps over the lazy dog";
        assert_eq!(table_for(data), table_for(data));
    }
}
