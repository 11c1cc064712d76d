//! The huffman_coding module builds the tree and the code table for the
//! huffzip codec.
//!
//! Tree construction is the classic greedy merge: every distinct input
//! symbol starts as a leaf in a min-heap keyed by frequency, and the two
//! lightest nodes are repeatedly merged under a fresh internal node until
//! one root remains. Ties on frequency are broken by a creation sequence
//! number so the tree, and therefore every code, is reproducible run to
//! run on identical input.
//!
//! The process is inherently sequential and does not benefit from
//! multithreading.
//!
pub mod code_table;
pub mod min_heap;
pub mod tree;
