//! The bitstream module packs and unpacks the bit-level payload of the
//! huffzip codec.
//!
//! - bitpacker: accumulates variable-length codes in a bit queue and emits
//!   packed bytes, MSB-first, tracking how many zero bits padded the tail.
//! - bitreader: serves the packed bytes back one bit at a time, with the
//!   declared padding excluded from the readable length.
//!
pub mod bitpacker;
pub mod bitreader;
