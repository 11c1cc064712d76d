use log::debug;
use rustc_hash::FxHashMap;

use crate::bitstream::bitpacker::BitPacker;
use crate::error::HuffError;
use crate::huffman_coding::code_table::CodeTable;
use crate::huffman_coding::tree::build_tree;
use crate::tools::freq_count::freqs;
use crate::tools::freq_table::encode_freq_table;

/// Compress a buffer into a padding byte followed by the bit-packed
/// Huffman payload. The result does not carry the tree; the caller must
/// keep the frequency map (or an equivalent tree) to decode, or use
/// [`compress_to_archive`] for a self-contained artifact.
///
/// Empty input compresses to the single padding byte 0.
pub fn compress(data: &[u8]) -> Result<Vec<u8>, HuffError> {
    let freqs = freqs(data);
    encode_payload(data, &freqs)
}

/// Compress a buffer into a self-contained archive:
/// a 4 byte big-endian frequency-table length, the serialized frequency
/// table, then the encoded buffer produced by [`compress`].
pub fn compress_to_archive(data: &[u8]) -> Result<Vec<u8>, HuffError> {
    let freqs = freqs(data);
    let table = encode_freq_table(&freqs);
    let payload = encode_payload(data, &freqs)?;

    let mut out = Vec::with_capacity(4 + table.len() + payload.len());
    out.extend_from_slice(&(table.len() as u32).to_be_bytes());
    out.extend_from_slice(&table);
    out.extend_from_slice(&payload);
    Ok(out)
}

/// Encode `data` against its own frequency map. Shared by both public
/// entry points so the archive path counts frequencies only once.
pub(crate) fn encode_payload(
    data: &[u8],
    freqs: &FxHashMap<u8, u32>,
) -> Result<Vec<u8>, HuffError> {
    let mut packer = BitPacker::new(data.len() / 2 + 1);

    if let Some(root) = build_tree(freqs) {
        let table = CodeTable::from_tree(&root);
        for &byte in data {
            // Every input byte has a count, so it has a leaf and a code.
            let code = table
                .code(byte)
                .expect("input symbol missing from code table");
            packer.push_code(code);
        }
    }
    packer.flush();

    let mut out = Vec::with_capacity(packer.output.len() + 1);
    out.push(packer.padding());
    out.extend_from_slice(&packer.output);

    debug!(
        "packed {} bytes into {} payload bytes, {} pad bits",
        data.len(),
        packer.output.len(),
        packer.padding()
    );
    Ok(out)
}

#[cfg(test)]
mod test {
    use super::{compress, compress_to_archive};
    use crate::huffman_coding::code_table::CodeTable;
    use crate::huffman_coding::tree::build_tree;
    use crate::tools::freq_count::freqs;

    #[test]
    fn empty_input_is_one_padding_byte() {
        assert_eq!(compress(b"").unwrap(), vec![0]);
    }

    #[test]
    fn single_symbol_input() {
        // 'a' gets the one-bit code 1, so "aaaa" packs to 1111_0000.
        assert_eq!(compress(b"aaaa").unwrap(), vec![4, 0b1111_0000]);
    }

    #[test]
    fn abracadabra_payload() {
        // a=0 c=100 d=101 b=110 r=111: 23 code bits, one pad bit.
        let buf = compress(b"abracadabra").unwrap();
        assert_eq!(buf[0], 1);
        assert_eq!(buf.len(), 4);
        assert_eq!(
            &buf[1..],
            &[0b0110_1110, 0b1000_1010, 0b1101_1100]
        );
    }

    #[test]
    fn padding_byte_is_always_in_range() {
        for len in 0..32 {
            let data: Vec<u8> = (0..len).map(|i| (i % 3) as u8).collect();
            let buf = compress(&data).unwrap();
            assert!(buf[0] <= 7, "padding {} out of range", buf[0]);
        }
    }

    #[test]
    fn payload_bit_count_matches_code_lengths() {
        let data = b"the quick brown fox jumps over the lazy dog";
        let f = freqs(data);
        let table = CodeTable::from_tree(&build_tree(&f).unwrap());
        let code_bits: usize = f
            .iter()
            .map(|(&s, &c)| c as usize * table.code(s).unwrap().len as usize)
            .sum();

        let buf = compress(data).unwrap();
        assert_eq!(8 * (buf.len() - 1) - buf[0] as usize, code_bits);
    }

    #[test]
    fn compression_is_deterministic() {
        let data = b"abracadabra abracadabra";
        assert_eq!(compress(data).unwrap(), compress(data).unwrap());
        assert_eq!(
            compress_to_archive(data).unwrap(),
            compress_to_archive(data).unwrap()
        );
    }

    #[test]
    fn archive_frames_table_then_payload() {
        let buf = compress_to_archive(b"aaaa").unwrap();
        let table_len = u32::from_be_bytes(buf[..4].try_into().unwrap()) as usize;
        // One symbol: L1 index + one L2 map + one count.
        assert_eq!(table_len, 8);
        assert_eq!(&buf[4 + table_len..], &compress(b"aaaa").unwrap()[..]);
    }
}
