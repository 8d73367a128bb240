use std::collections::HashMap;
use std::fmt;

use crate::huffman::tree::{HuffNode, MergeTree};
use crate::Symbol;

/// Maps every symbol of the tree to its code, a string of '0' and '1'.
///
/// Entries are kept in the left-first depth-first order in which the leaves are met, which is
/// also the order used when iterating or printing the table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: Vec<(Symbol, String)>,
    index: HashMap<Symbol, usize>,
}

impl CodeTable {
    /// Walks the tree appending '0' on every left edge and '1' on every right edge.
    ///
    /// A degenerate tree gives its only symbol the empty code.
    pub fn from_tree(tree: &MergeTree) -> Self {
        let mut table = Self::default();
        let mut pending = vec![(tree.root(), String::new())];

        while let Some((node, code)) = pending.pop() {
            match node {
                HuffNode::Leaf { symbol, .. } => table.insert(*symbol, code),
                HuffNode::Internal { left, right, .. } => {
                    // right first, so that the left subtree is popped (and visited) first
                    pending.push((right.as_ref(), format!("{code}1")));
                    pending.push((left.as_ref(), format!("{code}0")));
                }
            }
        }
        table
    }

    fn insert(&mut self, symbol: Symbol, code: String) {
        match self.index.get(&symbol) {
            Some(&position) => self.codes[position].1 = code,
            None => {
                self.index.insert(symbol, self.codes.len());
                self.codes.push((symbol, code));
            }
        }
    }

    pub fn get(&self, symbol: Symbol) -> Option<&str> {
        self.index
            .get(&symbol)
            .map(|&position| self.codes[position].1.as_str())
    }

    pub fn contains(&self, symbol: Symbol) -> bool {
        self.index.contains_key(&symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &str)> {
        self.codes.iter().map(|(symbol, code)| (*symbol, code.as_str()))
    }
}

impl fmt::Display for CodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (symbol, code) in self.iter() {
            writeln!(f, "{{{:?}: {}}}", symbol, code)?;
        }
        Ok(())
    }
}
