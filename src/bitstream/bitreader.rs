//! BitReader: serves a packed payload back one bit at a time.
//!
//! The codec works on one finite in-memory buffer, so the reader is a
//! plain cursor over a borrowed slice. Bits come out MSB-first per byte,
//! mirroring the order BitPacker put them in.

use crate::error::HuffError;

const BIT_MASK: u8 = 0x80;

/// Reads a packed bitstream from a borrowed buffer.
#[derive(Debug)]
pub struct BitReader<'a> {
    buffer: &'a [u8],
    /// Next bit to serve, as an absolute bit index into the buffer.
    cursor: usize,
    /// Total readable bits; trailing pad bits sit beyond this.
    bit_len: usize,
}

impl<'a> BitReader<'a> {
    /// Create a reader over the whole buffer.
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            cursor: 0,
            bit_len: buffer.len() * 8,
        }
    }

    /// Create a reader that excludes `pad_bits` trailing bits from the
    /// readable length. A padding claim larger than the buffer itself
    /// means the payload was truncated.
    pub fn trimmed(buffer: &'a [u8], pad_bits: u8) -> Result<Self, HuffError> {
        let total = buffer.len() * 8;
        if pad_bits as usize > total {
            return Err(HuffError::CorruptStream);
        }
        Ok(Self {
            buffer,
            cursor: 0,
            bit_len: total - pad_bits as usize,
        })
    }

    /// Return the next bit (0 or 1), or None when the readable bits are
    /// exhausted.
    pub fn bit(&mut self) -> Option<u8> {
        if self.cursor >= self.bit_len {
            return None;
        }
        let bit = (self.buffer[self.cursor / 8] & BIT_MASK >> (self.cursor % 8)) > 0;
        self.cursor += 1;
        Some(bit as u8)
    }

    /// Count of bits not yet served.
    pub fn remaining(&self) -> usize {
        self.bit_len - self.cursor
    }
}

#[cfg(test)]
mod test {
    use super::BitReader;
    use crate::error::HuffError;

    #[test]
    fn bits_come_out_msb_first() {
        let mut br = BitReader::new(&[0b1011_0001]);
        let bits: Vec<u8> = (0..8).map(|_| br.bit().unwrap()).collect();
        assert_eq!(bits, vec![1, 0, 1, 1, 0, 0, 0, 1]);
        assert_eq!(br.bit(), None);
    }

    #[test]
    fn trimmed_reader_hides_pad_bits() {
        let mut br = BitReader::trimmed(&[0b1110_0000], 5).unwrap();
        assert_eq!(br.remaining(), 3);
        assert_eq!(br.bit(), Some(1));
        assert_eq!(br.bit(), Some(1));
        assert_eq!(br.bit(), Some(1));
        assert_eq!(br.bit(), None);
    }

    #[test]
    fn padding_beyond_buffer_is_corrupt() {
        assert!(matches!(
            BitReader::trimmed(&[], 1),
            Err(HuffError::CorruptStream)
        ));
    }

    #[test]
    fn empty_buffer_has_no_bits() {
        let mut br = BitReader::new(&[]);
        assert_eq!(br.remaining(), 0);
        assert_eq!(br.bit(), None);
    }
}
