use log::debug;
use rustc_hash::FxHashMap;

use crate::bitstream::bitreader::BitReader;
use crate::error::HuffError;
use crate::huffman_coding::tree::{build_tree, Node, NodeData};
use crate::tools::freq_table::decode_freq_table;

/// Decompress an encoded buffer against the tree used at encode time.
///
/// The walk starts at the root and consumes one bit per edge, 0 left,
/// 1 right, emitting a symbol and resetting at each leaf. Running out of
/// bits anywhere but the root means the stream was truncated or the tree
/// does not match.
pub fn decompress(buf: &[u8], root: &Node) -> Result<Vec<u8>, HuffError> {
    let (payload, padding) = strip_header(buf)?;
    let mut reader = BitReader::trimmed(payload, padding)?;

    // Rough guess; Huffman rarely beats 8:1 on byte data.
    let mut out: Vec<u8> = Vec::with_capacity(payload.len() * 2);
    let mut node = root;
    while let Some(bit) = reader.bit() {
        node = match &node.node_data {
            NodeData::Kids(left, right) => {
                if bit == 0 {
                    left.as_ref()
                } else {
                    right.as_ref()
                }
            }
            // The builder never roots a tree at a leaf.
            NodeData::Leaf(_) => return Err(HuffError::CorruptStream),
        };
        if let NodeData::Leaf(sym) = &node.node_data {
            match u8::try_from(*sym) {
                Ok(byte) => out.push(byte),
                // Landed on the placeholder leaf: nothing encodes to it.
                Err(_) => return Err(HuffError::CorruptStream),
            }
            node = root;
        }
    }
    if !std::ptr::eq(node, root) {
        return Err(HuffError::CorruptStream);
    }

    debug!("unpacked {} payload bytes into {}", payload.len(), out.len());
    Ok(out)
}

/// Decompress an encoded buffer, rebuilding the encode-time tree from its
/// frequency map first. An empty map only matches an empty payload.
pub fn decompress_with_freqs(
    buf: &[u8],
    freqs: &FxHashMap<u8, u32>,
) -> Result<Vec<u8>, HuffError> {
    match build_tree(freqs) {
        Some(root) => decompress(buf, &root),
        None => {
            let (payload, padding) = strip_header(buf)?;
            let reader = BitReader::trimmed(payload, padding)?;
            if reader.remaining() == 0 {
                Ok(Vec::new())
            } else {
                Err(HuffError::CorruptStream)
            }
        }
    }
}

/// Decompress a self-contained archive produced by
/// [`compress_to_archive`](crate::compression::compress::compress_to_archive).
pub fn decompress_archive(buf: &[u8]) -> Result<Vec<u8>, HuffError> {
    let frame: [u8; 4] = buf
        .get(..4)
        .and_then(|b| b.try_into().ok())
        .ok_or(HuffError::MalformedHeader)?;
    let table_len = u32::from_be_bytes(frame) as usize;
    let table = buf
        .get(4..4 + table_len)
        .ok_or(HuffError::MalformedHeader)?;
    let freqs = decode_freq_table(table)?;
    decompress_with_freqs(&buf[4 + table_len..], &freqs)
}

/// Split the encoded buffer into its declared padding and the packed
/// payload, validating the header on the way.
fn strip_header(buf: &[u8]) -> Result<(&[u8], u8), HuffError> {
    let (&padding, payload) = buf.split_first().ok_or(HuffError::MalformedHeader)?;
    if padding > 7 {
        return Err(HuffError::InvalidPadding { declared: padding });
    }
    Ok((payload, padding))
}
