//! Huffman tree construction.
//!
//! The tree is built by repeatedly merging the two lowest-frequency nodes
//! from a [`MinQueue`]. Leaves are queued in ascending symbol order, so ties
//! between equal frequencies resolve first-in-first-out and the same input
//! always produces the same tree. The first node extracted in a merge
//! becomes the left child.

use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyTable;
use crate::queue::MinQueue;
use crate::symbol::Symbol;

/// A node of a Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode<S: Symbol> {
    /// Terminal node carrying a symbol.
    Leaf {
        /// The coded symbol.
        symbol: S,
        /// Occurrence count.
        frequency: u64,
    },
    /// Merge node; its frequency is the sum of its children's.
    Internal {
        /// Combined frequency.
        frequency: u64,
        /// Subtree reached with a `0` bit.
        left: Box<HuffmanNode<S>>,
        /// Subtree reached with a `1` bit.
        right: Box<HuffmanNode<S>>,
    },
}

impl<S: Symbol> HuffmanNode<S> {
    /// Frequency of this subtree.
    pub fn frequency(&self) -> u64 {
        match self {
            Self::Leaf { frequency, .. } | Self::Internal { frequency, .. } => *frequency,
        }
    }

    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    /// Number of leaves in this subtree.
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf { .. } => 1,
            Self::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Number of internal nodes in this subtree.
    pub fn internal_count(&self) -> usize {
        match self {
            Self::Leaf { .. } => 0,
            Self::Internal { left, right, .. } => 1 + left.internal_count() + right.internal_count(),
        }
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Self::Leaf { .. } => 0,
            Self::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    fn merge(left: Self, right: Self) -> Result<Self> {
        let (lf, rf) = (left.frequency(), right.frequency());
        let frequency = lf
            .checked_add(rf)
            .ok_or(HuffmanError::FrequencyOverflow { left: lf, right: rf })?;
        Ok(Self::Internal {
            frequency,
            left: Box::new(left),
            right: Box::new(right),
        })
    }
}

/// Build a Huffman tree from symbol frequencies.
///
/// A single-entry table yields a lone leaf. Fails with
/// [`HuffmanError::EmptyInput`] for an empty table, and with
/// [`HuffmanError::FrequencyOverflow`] if the counts sum past `u64::MAX`.
///
/// # Example
///
/// ```rust
/// use oxiarc_huffman::{FrequencyTable, build_tree};
///
/// let freqs = FrequencyTable::count("aaabbc".chars());
/// let root = build_tree(&freqs).unwrap();
/// assert_eq!(root.frequency(), 6);
/// assert_eq!(root.leaf_count(), 3);
/// ```
pub fn build_tree<S: Symbol>(table: &FrequencyTable<S>) -> Result<HuffmanNode<S>> {
    let mut queue = MinQueue::with_capacity(table.len());
    for (symbol, frequency) in table.iter() {
        let leaf = HuffmanNode::Leaf {
            symbol: symbol.clone(),
            frequency,
        };
        queue.push(frequency, leaf);
    }

    loop {
        let (_, first) = queue.pop().ok_or(HuffmanError::EmptyInput)?;
        let Some((_, second)) = queue.pop() else {
            return Ok(first);
        };

        let merged = HuffmanNode::merge(first, second)?;
        queue.push(merged.frequency(), merged);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf_symbol(node: &HuffmanNode<char>) -> Option<char> {
        match node {
            HuffmanNode::Leaf { symbol, .. } => Some(*symbol),
            HuffmanNode::Internal { .. } => None,
        }
    }

    #[test]
    fn test_build_aaabbc() {
        let freqs = FrequencyTable::count("aaabbc".chars());
        let root = build_tree(&freqs).unwrap();

        // c(1) + b(2) merge first; a(3) was queued before the merged (3).
        let HuffmanNode::Internal { frequency, left, right } = &root else {
            panic!("root must be internal");
        };
        assert_eq!(*frequency, 6);
        assert_eq!(leaf_symbol(left), Some('a'));

        let HuffmanNode::Internal { left: rl, right: rr, frequency: rf } = right.as_ref() else {
            panic!("right subtree must be internal");
        };
        assert_eq!(*rf, 3);
        assert_eq!(leaf_symbol(rl), Some('c'));
        assert_eq!(leaf_symbol(rr), Some('b'));
    }

    #[test]
    fn test_empty_table() {
        let freqs = FrequencyTable::<char>::count(std::iter::empty());
        assert!(matches!(build_tree(&freqs), Err(HuffmanError::EmptyInput)));
    }

    #[test]
    fn test_single_symbol_is_leaf() {
        let freqs = FrequencyTable::count("zzzz".chars());
        let root = build_tree(&freqs).unwrap();
        assert!(root.is_leaf());
        assert_eq!(root.frequency(), 4);
        assert_eq!(root.depth(), 0);
    }

    #[test]
    fn test_node_counts() {
        let text = "the quick brown fox jumps over the lazy dog";
        let freqs = FrequencyTable::count(text.chars());
        let root = build_tree(&freqs).unwrap();

        assert_eq!(root.leaf_count(), freqs.len());
        assert_eq!(root.internal_count(), freqs.len() - 1);
        assert_eq!(root.frequency(), text.chars().count() as u64);
    }

    #[test]
    fn test_deterministic() {
        let text = "abcdefgh abcdefgh";
        let freqs = FrequencyTable::count(text.chars());
        assert_eq!(build_tree(&freqs).unwrap(), build_tree(&freqs).unwrap());
    }

    #[test]
    fn test_skewed_depth() {
        // Fibonacci-like counts give a maximally unbalanced tree.
        let freqs = FrequencyTable::from_counts([(0u8, 1), (1, 1), (2, 2), (3, 3), (4, 5), (5, 8)]);
        let root = build_tree(&freqs).unwrap();
        assert_eq!(root.depth(), 5);
    }

    #[test]
    fn test_frequency_overflow() {
        let freqs = FrequencyTable::from_counts([('a', u64::MAX), ('b', 1)]);
        let err = build_tree(&freqs).unwrap_err();
        assert!(matches!(
            err,
            HuffmanError::FrequencyOverflow { left: 1, right: u64::MAX }
        ));

        // Lone leaf never merges, so a full-range count is fine.
        let freqs = FrequencyTable::from_counts([('a', u64::MAX)]);
        assert_eq!(build_tree(&freqs).unwrap().frequency(), u64::MAX);
    }
}
