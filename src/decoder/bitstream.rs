/// Bit-level cursor over data codewords
///
/// Codewords are read MSB first, the order in which QR segments are packed.
/// Every read is bounds-checked: a read that would run past the final bit
/// returns `None` and leaves the cursor where it was.
#[derive(Debug, Clone)]
pub struct BitCursor<'a> {
    bytes: &'a [u8],
    byte_idx: usize,
    bit_offset: u8,
}

impl<'a> BitCursor<'a> {
    /// Create a cursor positioned at the first bit of `bytes`
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            byte_idx: 0,
            bit_offset: 0,
        }
    }

    /// Number of unread bits
    pub fn remaining(&self) -> usize {
        (self.bytes.len() * 8).saturating_sub(self.position())
    }

    /// Absolute bit position from the start of the buffer
    pub fn position(&self) -> usize {
        self.byte_idx * 8 + self.bit_offset as usize
    }

    /// Current (byte index, bit offset within byte)
    pub fn location(&self) -> (usize, u8) {
        (self.byte_idx, self.bit_offset)
    }

    /// True once every bit has been consumed
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Read `n` bits (at most 32) as an unsigned big-endian value
    pub fn read_bits(&mut self, n: usize) -> Option<u32> {
        if n > 32 || n > self.remaining() {
            return None;
        }

        let mut value = 0u32;
        let mut left = n;
        while left > 0 {
            let available = 8 - self.bit_offset as usize;
            let take = available.min(left);
            let shift = available - take;
            let mask = ((1u16 << take) - 1) as u8;
            let chunk = (self.bytes[self.byte_idx] >> shift) & mask;

            // `take` <= 8, so this never overflows even when n == 32
            value = ((value as u64) << take) as u32 | chunk as u32;
            left -= take;
            self.advance(take);
        }

        Some(value)
    }

    /// Read a full 8-bit value, which need not be byte aligned
    pub fn read_byte(&mut self) -> Option<u8> {
        self.read_bits(8).map(|v| v as u8)
    }

    /// Skip `n` bits without decoding them
    pub fn skip(&mut self, n: usize) -> Option<()> {
        if n > self.remaining() {
            return None;
        }
        self.advance(n);
        Some(())
    }

    fn advance(&mut self, n: usize) {
        let pos = self.position() + n;
        self.byte_idx = pos / 8;
        self.bit_offset = (pos % 8) as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_across_byte_boundary() {
        // 0100 0000 | 0011 0100 -> mode 0100, count 0000_0011, then 0100
        let bytes = [0x40, 0x34];
        let mut cursor = BitCursor::new(&bytes);
        assert_eq!(cursor.read_bits(4), Some(0b0100));
        assert_eq!(cursor.read_bits(8), Some(3));
        assert_eq!(cursor.location(), (1, 4));
        assert_eq!(cursor.read_bits(4), Some(0b0100));
        assert!(cursor.is_exhausted());
    }

    #[test]
    fn test_read_past_end_leaves_cursor() {
        let bytes = [0xFF];
        let mut cursor = BitCursor::new(&bytes);
        assert_eq!(cursor.read_bits(5), Some(0b11111));
        assert_eq!(cursor.read_bits(4), None);
        assert_eq!(cursor.remaining(), 3);
        assert_eq!(cursor.skip(4), None);
        assert_eq!(cursor.position(), 5);
    }

    #[test]
    fn test_read_32_bits() {
        let bytes = [0xDE, 0xAD, 0xBE, 0xEF, 0x80];
        let mut cursor = BitCursor::new(&bytes);
        assert_eq!(cursor.read_bits(1), Some(1));
        assert_eq!(cursor.read_bits(32), Some(0xBD5B_7DDF));
        assert_eq!(cursor.read_bits(33), None);
    }

    #[test]
    fn test_empty_buffer() {
        let mut cursor = BitCursor::new(&[]);
        assert!(cursor.is_exhausted());
        assert_eq!(cursor.read_bits(0), Some(0));
        assert_eq!(cursor.read_bits(1), None);
    }
}
