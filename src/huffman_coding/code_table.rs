//! Code table derivation: walk the finished tree and record one bit
//! sequence per leaf. Left edges contribute a 0, right edges a 1, so the
//! table is prefix-free by construction. The encoder and decoder share
//! this convention; there is no other handshake between them.

use crate::huffman_coding::tree::{Node, NodeData};

/// One Huffman code: `len` bits, right-aligned in `bits`, most significant
/// code bit first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Code {
    pub bits: u64,
    pub len: u8,
}

/// Symbol-indexed code table derived from one tree. Immutable once built.
pub struct CodeTable {
    codes: [Option<Code>; 256],
}

impl CodeTable {
    /// Derive the table by depth-first walk from the root. The builder
    /// always produces an internal root, so every real leaf sits at depth
    /// one or more and no code is empty. The placeholder leaf paired
    /// against a lone symbol is skipped; nothing encodes to it.
    pub fn from_tree(root: &Node) -> Self {
        debug_assert!(
            matches!(root.node_data, NodeData::Kids(..)),
            "tree root must be an internal node"
        );
        let mut codes = [None; 256];
        record_leaves(root, 0, 0, &mut codes);
        CodeTable { codes }
    }

    /// The code for a symbol, or None if the symbol was absent from the
    /// frequency map the tree was built over.
    pub fn code(&self, sym: u8) -> Option<Code> {
        self.codes[sym as usize]
    }

    /// All (symbol, code) pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, Code)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(sym, code)| code.map(|c| (sym as u8, c)))
    }
}

/// Recursively walk the tree, accumulating the path bits down to each leaf.
fn record_leaves(node: &Node, bits: u64, len: u8, codes: &mut [Option<Code>; 256]) {
    match &node.node_data {
        NodeData::Kids(left, right) => {
            record_leaves(left, bits << 1, len + 1, codes);
            record_leaves(right, bits << 1 | 1, len + 1, codes);
        }
        NodeData::Leaf(sym) => {
            if let Ok(sym) = u8::try_from(*sym) {
                debug_assert!(len > 0, "leaf at the root would get an empty code");
                codes[sym as usize] = Some(Code { bits, len });
            }
        }
    }
}
