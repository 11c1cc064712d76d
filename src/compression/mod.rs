//! The compression module is the public surface of the huffzip codec.
//!
//! compress turns an input buffer into a padding byte followed by the
//! bit-packed Huffman payload. decompress walks the encode-time tree over
//! that payload to rebuild the original bytes. The archive variants frame
//! a serialized frequency table in front of the payload so one buffer is
//! enough to decode later.
//!
//! Every call owns its own tree, table and buffers; nothing is shared or
//! reused across calls.
//!
pub mod compress;
pub mod decompress;
