//! Binary min-heap ordering tree nodes by (weight, creation sequence).

use crate::error::HuffError;
use crate::huffman_coding::tree::Node;

/// Min-priority container for tree construction. Insert and extract are
/// O(log n); the heap is the dominant cost of building a tree, O(n log n)
/// over n distinct symbols.
#[derive(Debug, Clone, Default)]
pub struct MinHeap {
    elements: Vec<Node>,
}

impl MinHeap {
    pub fn new() -> Self {
        MinHeap { elements: vec![] }
    }

    pub fn with_capacity(n: usize) -> Self {
        MinHeap {
            elements: Vec::with_capacity(n),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Push a node and sift it up to its place.
    pub fn insert(&mut self, node: Node) {
        self.elements.push(node);
        let mut i = self.elements.len() - 1;
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.elements[i] < self.elements[parent] {
                self.elements.swap(i, parent);
                i = parent;
            } else {
                break;
            }
        }
    }

    /// Remove and return the minimum node. Calling this on an empty heap
    /// is a caller bug; the tree builder only extracts what it counted.
    pub fn extract_min(&mut self) -> Result<Node, HuffError> {
        if self.elements.is_empty() {
            return Err(HuffError::EmptyHeap);
        }
        let min = self.elements.swap_remove(0);
        self.sift_down(0);
        Ok(min)
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.elements.len();
        loop {
            let left = 2 * i + 1;
            let right = 2 * i + 2;
            let mut smallest = i;
            if left < n && self.elements[left] < self.elements[smallest] {
                smallest = left;
            }
            if right < n && self.elements[right] < self.elements[smallest] {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.elements.swap(i, smallest);
            i = smallest;
        }
    }
}
