//! Huffman tree construction.

use log::trace;
use rustc_hash::FxHashMap;

use super::min_heap::MinHeap;

/// Leaf symbol value reserved for the placeholder paired against a lone
/// real symbol. Real symbols are 0-255, so 256 can never occur in input.
pub const DUMMY_SYM: u16 = 256;

#[derive(Eq, PartialEq, Debug, Clone)]
pub enum NodeData {
    Kids(Box<Node>, Box<Node>),
    Leaf(u16),
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Node {
    pub weight: u64,
    pub seq: u32,
    pub node_data: NodeData,
}

impl Node {
    /// Create a new node.
    pub fn new(weight: u64, seq: u32, node_data: NodeData) -> Node {
        Node {
            weight,
            seq,
            node_data,
        }
    }
}

impl Ord for Node {
    /// Order nodes by ascending weight, breaking ties by creation order.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.weight
            .cmp(&other.weight)
            .then(self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Build the Huffman tree for a frequency map. Returns None for an empty
/// map (nothing to encode). The root of a non-empty tree is always an
/// internal node: a map with a single symbol gets a zero-weight placeholder
/// leaf as a sibling so the real symbol still receives a one-bit code.
pub fn build_tree(freqs: &FxHashMap<u8, u32>) -> Option<Node> {
    if freqs.is_empty() {
        return None;
    }

    // Seed leaves in ascending symbol order so sequence numbers, and with
    // them tie-breaks, do not depend on hash iteration order.
    let mut symbols: Vec<(u8, u32)> = freqs.iter().map(|(&s, &c)| (s, c)).collect();
    symbols.sort_unstable_by_key(|&(s, _)| s);

    let mut seq = 0_u32;
    let mut heap = MinHeap::with_capacity(symbols.len() + 1);
    for (sym, count) in symbols {
        heap.insert(Node::new(count as u64, seq, NodeData::Leaf(sym as u16)));
        seq += 1;
    }

    if heap.len() == 1 {
        heap.insert(Node::new(0, seq, NodeData::Leaf(DUMMY_SYM)));
        seq += 1;
    }

    // Pare the heap down to a single node: first-extracted becomes the
    // left child, so bit 0 always points at the lighter subtree.
    while heap.len() > 1 {
        let left = heap.extract_min().expect("heap holds at least two nodes");
        let right = heap.extract_min().expect("heap holds at least two nodes");
        let merged = Node::new(
            left.weight + right.weight,
            seq,
            NodeData::Kids(Box::new(left), Box::new(right)),
        );
        seq += 1;
        heap.insert(merged);
    }

    let root = heap.extract_min().ok();
    trace!("built tree over {} nodes", seq);
    root
}

#[cfg(test)]
mod test {
    use super::{build_tree, Node, NodeData, DUMMY_SYM};
    use crate::tools::freq_count::freqs;

    fn leaf_depths(node: &Node, depth: u8, out: &mut Vec<(u16, u8)>) {
        match &node.node_data {
            NodeData::Kids(left, right) => {
                leaf_depths(left, depth + 1, out);
                leaf_depths(right, depth + 1, out);
            }
            NodeData::Leaf(sym) => out.push((*sym, depth)),
        }
    }

    #[test]
    fn empty_input_has_no_tree() {
        assert_eq!(build_tree(&freqs(b"")), None);
    }

    #[test]
    fn single_symbol_gets_a_dummy_sibling() {
        let root = build_tree(&freqs(b"aaaa")).unwrap();
        assert_eq!(root.weight, 4);
        let mut leaves = vec![];
        leaf_depths(&root, 0, &mut leaves);
        // Zero-weight placeholder extracts first, so it sits on the left.
        assert_eq!(leaves, vec![(DUMMY_SYM, 1), (b'a' as u16, 1)]);
    }

    #[test]
    fn abracadabra_tree_shape() {
        let root = build_tree(&freqs(b"abracadabra")).unwrap();
        assert_eq!(root.weight, 11);
        let mut leaves = vec![];
        leaf_depths(&root, 0, &mut leaves);
        // a:5 pairs last; {c,d} merge first, then {b,r}.
        assert_eq!(
            leaves,
            vec![
                (b'a' as u16, 1),
                (b'c' as u16, 3),
                (b'd' as u16, 3),
                (b'b' as u16, 3),
                (b'r' as u16, 3),
            ]
        );
    }

    #[test]
    fn root_weight_is_input_length() {
        let data = b"Making a silly test.";
        let root = build_tree(&freqs(data)).unwrap();
        assert_eq!(root.weight as usize, data.len());
    }

    #[test]
    fn identical_input_builds_identical_trees() {
        let a = build_tree(&freqs(b"mississippi"));
        let b = build_tree(&freqs(b"mississippi"));
        assert_eq!(a, b);
    }
}
