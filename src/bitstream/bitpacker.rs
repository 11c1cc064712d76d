use log::error;

use crate::huffman_coding::code_table::Code;

/// Creates the packed bitstream for output.
pub struct BitPacker {
    pub output: Vec<u8>,
    pub last_bits: u8,
    queue: u64,
    q_bits: u8,
}

impl BitPacker {
    /// Create a new BitPacker with an output buffer of the size specified.
    /// Call flush() to drain the bit queue to the buffer before reading
    /// the output.
    pub fn new(size: usize) -> Self {
        Self {
            output: Vec::with_capacity(size),
            last_bits: 0,
            queue: 0,
            q_bits: 0,
        }
    }

    /// Internal bitstream write function common to all push functions.
    fn write_stream(&mut self) {
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte); //push the packed byte out
            self.q_bits -= 8; //adjust the count of bits left in the queue
        }
    }

    /// Append one Huffman code, most significant code bit first.
    pub fn push_code(&mut self, code: Code) {
        let mut len = code.len;
        // The queue holds at most 7 residual bits after write_stream, so
        // feed long codes in chunks of at most 32 bits.
        while len > 32 {
            len -= 32;
            self.push_bits(code.bits >> len, 32);
        }
        self.push_bits(code.bits, len);
    }

    /// Put `len` (0-32) bits, aligned to the least significant bit of
    /// `data`, on the stream.
    fn push_bits(&mut self, data: u64, len: u8) {
        if len == 0 {
            return;
        }
        self.queue <<= len; //shift queue by bit length
        self.queue |= data & (u64::MAX >> (64 - len)); //add data portion to queue
        self.q_bits += len; //update depth of queue bits
        self.write_stream();
    }

    /// Flushes the remaining bits (1-7) from the queue, padding with 0s in
    /// the least significant bits, and records the count of valid bits in
    /// the final byte.
    pub fn flush(&mut self) {
        self.last_bits = self.q_bits % 8;
        if self.q_bits > 0 {
            self.queue <<= 8 - self.q_bits; //pad the queue with zeros
            self.q_bits += 8 - self.q_bits;
            self.write_stream(); // write out all that is left
            if self.q_bits > 0 {
                error!("Stuff left in the BitPacker queue.");
            }
        }
    }

    /// Number of zero pad bits (0-7) appended by flush().
    pub fn padding(&self) -> u8 {
        (8 - self.last_bits % 8) % 8
    }
}

#[cfg(test)]
mod test {
    use super::BitPacker;
    use crate::huffman_coding::code_table::Code;

    #[test]
    fn full_byte_no_padding() {
        let mut bw = BitPacker::new(100);
        bw.push_code(Code { bits: b'!' as u64, len: 8 });
        bw.flush();
        assert_eq!(bw.output, "!".as_bytes());
        assert_eq!(bw.padding(), 0);
    }

    #[test]
    fn short_code_pads_with_zeros() {
        let mut bw = BitPacker::new(100);
        bw.push_code(Code { bits: 0b101, len: 3 });
        bw.flush();
        assert_eq!(bw.output, vec![0b1010_0000]);
        assert_eq!(bw.padding(), 5);
    }

    #[test]
    fn codes_pack_across_byte_boundaries() {
        let mut bw = BitPacker::new(100);
        for _ in 0..3 {
            bw.push_code(Code { bits: 0b11011, len: 5 });
        }
        bw.flush();
        // 11011 11011 11011 0 -> 1101_1110 1111_0110
        assert_eq!(bw.output, vec![0b1101_1110, 0b1111_0110]);
        assert_eq!(bw.padding(), 1);
    }

    #[test]
    fn empty_stream_flushes_to_nothing() {
        let mut bw = BitPacker::new(0);
        bw.flush();
        assert!(bw.output.is_empty());
        assert_eq!(bw.padding(), 0);
    }

    #[test]
    fn long_code_is_chunked() {
        let mut bw = BitPacker::new(100);
        bw.push_code(Code { bits: 0xDEAD_BEEF_CAFE, len: 48 });
        bw.flush();
        assert_eq!(bw.output, vec![0xDE, 0xAD, 0xBE, 0xEF, 0xCA, 0xFE]);
    }
}
