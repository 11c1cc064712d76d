//! The tools module provides helper functions for the huffzip codec.
//!
//! The tools are:
//! - freq_count: Frequency count of the input bytes.
//! - freq_table: Invertible wire format for a frequency map, used by the
//!   archive framing so a decoder can rebuild the encode-time tree.
//!
pub mod freq_count;
pub mod freq_table;
