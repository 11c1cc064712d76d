//! Error type for the huffzip codec.
//!
//! Every failure the codec can report is a deterministic function of the
//! input buffer. There are no transient errors and no retries; a rejected
//! input stays rejected.

use thiserror::Error;

/// Errors surfaced by the codec.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HuffError {
    /// `extract_min` was called on an empty heap. The tree builder never
    /// does this; seeing it outside the heap's own API means a bug.
    #[error("extract-min called on an empty heap")]
    EmptyHeap,

    /// The encoded buffer is too short to hold the padding header byte.
    #[error("encoded buffer is missing its padding header")]
    MalformedHeader,

    /// The header declared a padding count outside 0-7.
    #[error("declared padding of {declared} bits is outside 0-7")]
    InvalidPadding {
        /// The padding count found in the header byte.
        declared: u8,
    },

    /// The bitstream ran out mid-walk, or claimed more padding than the
    /// payload holds. The input was truncated or the tree does not match
    /// the one used at encode time.
    #[error("bitstream ended mid-walk through the tree")]
    CorruptStream,

    /// A serialized frequency table was truncated or inconsistent.
    #[error("serialized frequency table is truncated or inconsistent")]
    MalformedFreqTable,
}
