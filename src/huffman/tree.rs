use std::fmt;

use log::{debug, trace};

use crate::error::{CodecError, Result};
use crate::{Freq, FrequencyEntry, Symbol};

/// A node of the merge tree. Every internal node exclusively owns its two children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffNode {
    Leaf {
        symbol: Symbol,
        freq: Freq,
    },
    Internal {
        freq: Freq,
        left: Box<HuffNode>,
        right: Box<HuffNode>,
    },
}

impl HuffNode {
    pub fn leaf(entry: &FrequencyEntry) -> Self {
        HuffNode::Leaf {
            symbol: entry.symbol,
            freq: entry.count,
        }
    }

    /// Creates the internal node having `left` and `right` as children.
    pub fn merge(left: Self, right: Self) -> Self {
        HuffNode::Internal {
            freq: left.freq() + right.freq(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn freq(&self) -> Freq {
        match self {
            HuffNode::Leaf { freq, .. } => *freq,
            HuffNode::Internal { freq, .. } => *freq,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffNode::Leaf { .. })
    }
}

/// The binary tree the codes are read from.
///
/// The tree is assembled by a fixed stack procedure rather than by the classic minimum-weight
/// merge, so the resulting code is deterministic but not necessarily optimal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeTree {
    root: HuffNode,
}

impl MergeTree {
    /// Builds the tree from a frequency table, taken in the given order.
    ///
    /// Every entry becomes a leaf pushed onto a stack, so the first entry ends up at the bottom
    /// and the last one on top. Then, while more than one node is left, the two topmost nodes are
    /// merged: with an even number of nodes on the stack the top becomes the right child and the
    /// one below the left child; with an odd number the roles are swapped. The merged node is
    /// pushed back and the last node standing is the root.
    ///
    /// A single entry gives a tree made of one leaf.
    pub fn build(entries: &[FrequencyEntry]) -> Result<Self> {
        if entries.is_empty() {
            return Err(CodecError::EmptyFrequencyTable);
        }

        let mut stack = entries.iter().map(HuffNode::leaf).collect::<Vec<HuffNode>>();

        while stack.len() > 1 {
            let even = stack.len() % 2 == 0;
            let (Some(top), Some(below)) = (stack.pop(), stack.pop()) else {
                unreachable!("the stack holds at least two nodes");
            };

            let (left, right) = match even {
                true => (below, top),
                false => (top, below),
            };

            trace!("merging {} (left) with {} (right)", left.freq(), right.freq());
            stack.push(HuffNode::merge(left, right));
        }

        let root = stack.pop().ok_or(CodecError::EmptyFrequencyTable)?;
        debug!("built merge tree with {} leaves, total weight {}", entries.len(), root.freq());

        Ok(Self { root })
    }

    pub fn root(&self) -> &HuffNode {
        &self.root
    }

    /// Whether the tree is a single leaf, i.e. the text had only one distinct symbol.
    pub fn is_degenerate(&self) -> bool {
        self.root.is_leaf()
    }

    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![&self.root];

        while let Some(node) = pending.pop() {
            match node {
                HuffNode::Leaf { .. } => count += 1,
                HuffNode::Internal { left, right, .. } => {
                    pending.push(right.as_ref());
                    pending.push(left.as_ref());
                }
            }
        }
        count
    }
}

impl fmt::Display for MergeTree {
    /// Pre-order dump of the tree, one node per line, indented by depth.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending = vec![(&self.root, 0_usize, "root")];

        while let Some((node, depth, label)) = pending.pop() {
            let indent = "  ".repeat(depth);
            match node {
                HuffNode::Leaf { symbol, freq } => {
                    writeln!(f, "{indent}{label}-> {:?} {freq}", symbol)?;
                }
                HuffNode::Internal { freq, left, right } => {
                    writeln!(f, "{indent}{label}-> * {freq}")?;
                    pending.push((right.as_ref(), depth + 1, "R"));
                    pending.push((left.as_ref(), depth + 1, "L"));
                }
            }
        }
        Ok(())
    }
}
