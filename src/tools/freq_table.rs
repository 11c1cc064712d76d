//! Wire format for a frequency map.
//!
//! The encoded buffer carries only the padding count, not the tree, so a
//! caller that wants a self-contained artifact must also persist the
//! frequency map. The format here is a two-level symbol map followed by
//! one count per present symbol:
//!
//! - one 16 bit L1 index word: bit b set means at least one byte in the
//!   range `b*16 ..= b*16+15` occurred in the input,
//! - one 16 bit L2 map word per set L1 bit, marking which of those 16
//!   byte values occurred,
//! - one big-endian u32 count per present symbol, in ascending symbol
//!   order.
//!
//! All words are big-endian. Decoding rejects truncated input, trailing
//! bytes and zero counts.

use rustc_hash::FxHashMap;

use crate::error::HuffError;

const BIT_MASK: u16 = 0x8000;

/// Serialize a frequency map. The result is empty-input safe: a map with
/// no symbols encodes to the two zero bytes of an empty L1 index.
pub fn encode_freq_table(freqs: &FxHashMap<u8, u32>) -> Vec<u8> {
    let mut symbols: Vec<u8> = freqs.keys().copied().collect();
    symbols.sort_unstable();

    // Build the presence maps. L1 bit b covers symbols b*16..=b*16+15.
    let mut l1: u16 = 0;
    let mut l2 = [0_u16; 16];
    for &sym in &symbols {
        l1 |= BIT_MASK >> (sym >> 4);
        l2[(sym >> 4) as usize] |= BIT_MASK >> (sym & 0x0f);
    }

    let mut out = Vec::with_capacity(2 + 2 * l1.count_ones() as usize + 4 * symbols.len());
    out.extend_from_slice(&l1.to_be_bytes());
    for block in 0..16 {
        if l1 & (BIT_MASK >> block) > 0 {
            out.extend_from_slice(&l2[block].to_be_bytes());
        }
    }
    for &sym in &symbols {
        out.extend_from_slice(&freqs[&sym].to_be_bytes());
    }
    out
}

/// Rebuild a frequency map from its serialized form.
pub fn decode_freq_table(buf: &[u8]) -> Result<FxHashMap<u8, u32>, HuffError> {
    let l1 = u16::from_be_bytes(take(buf, 0)?);
    let mut cursor = 2;

    // Walk the L1 index and expand each present L2 map into symbol values.
    let mut symbols: Vec<u8> = Vec::with_capacity(256);
    for block in 0..16_u8 {
        if l1 & (BIT_MASK >> block) > 0 {
            let map = u16::from_be_bytes(take(buf, cursor)?);
            cursor += 2;
            for byte_idx in 0..16_u8 {
                if map & (BIT_MASK >> byte_idx) > 0 {
                    symbols.push((block << 4) + byte_idx);
                }
            }
        }
    }

    // The counts follow, one u32 per present symbol, ascending.
    let mut freqs =
        FxHashMap::with_capacity_and_hasher(symbols.len(), Default::default());
    for sym in symbols {
        let count = u32::from_be_bytes(take(buf, cursor)?);
        cursor += 4;
        if count == 0 {
            return Err(HuffError::MalformedFreqTable);
        }
        freqs.insert(sym, count);
    }

    if cursor != buf.len() {
        return Err(HuffError::MalformedFreqTable);
    }
    Ok(freqs)
}

/// Grab the next fixed-size word, or reject the table as truncated.
fn take<const N: usize>(buf: &[u8], at: usize) -> Result<[u8; N], HuffError> {
    buf.get(at..at + N)
        .and_then(|s| s.try_into().ok())
        .ok_or(HuffError::MalformedFreqTable)
}
