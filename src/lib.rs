//! Huffman codec for arbitrary byte streams.
//!
//! Version 0.1.0
//!
//! Provides lossless compression and decompression of in-memory byte buffers
//! using a Huffman code built fresh from the input's symbol frequencies.
//! The codec is pure: bytes in, bytes out. Reading files, picking filenames
//! and any command surface belong to the caller.
//!
//! The encoded buffer starts with one byte holding the number of zero bits
//! (0-7) used to pad the packed bitstream out to a whole byte. The buffer
//! does not carry the tree itself; callers that need a self-contained
//! artifact can use the archive functions, which prepend a serialized
//! frequency table the decoder rebuilds the tree from.
//!
//! Basic usage:
//!
//! ```
//! use huffzip::{compress_to_archive, decompress_archive};
//!
//! let archive = compress_to_archive(b"abracadabra").unwrap();
//! assert_eq!(decompress_archive(&archive).unwrap(), b"abracadabra");
//! ```
//!
pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use compression::compress::{compress, compress_to_archive};
pub use compression::decompress::{decompress, decompress_archive, decompress_with_freqs};
pub use error::HuffError;
