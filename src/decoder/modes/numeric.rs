/// Numeric mode decoder (Mode 0001)
/// Groups of 3 digits = 10 bits, 2 digits = 7 bits, 1 digit = 4 bits
use super::{ensure_data, read_data};
use crate::decoder::bitstream::BitCursor;
use crate::decoder::error::Result;
use crate::models::Mode;

/// Decoder for numeric segments
pub struct NumericDecoder;

impl NumericDecoder {
    /// Bits occupied by `count` digits
    pub fn bits_needed(count: usize) -> usize {
        let tail = match count % 3 {
            0 => 0,
            1 => 4,
            _ => 7,
        };
        (count / 3) * 10 + tail
    }

    /// Decode `count` digits. Groups whose value exceeds the group's digit
    /// range are rendered as U+FFFD.
    pub fn decode(cursor: &mut BitCursor<'_>, count: usize) -> Result<String> {
        ensure_data(cursor, Mode::Numeric, Self::bits_needed(count))?;

        let mut result = String::with_capacity(count);
        let mut chars_remaining = count;

        while chars_remaining > 0 {
            let group_size = chars_remaining.min(3);
            let (bits, limit) = match group_size {
                3 => (10, 1000),
                2 => (7, 100),
                _ => (4, 10),
            };
            let value = read_data(cursor, Mode::Numeric, bits)?;

            if value < limit {
                result.push_str(&format!("{:0width$}", value, width = group_size));
            } else {
                result.push(char::REPLACEMENT_CHARACTER);
            }
            chars_remaining -= group_size;
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_decode() {
        // "01234567" = 012 (10 bits) 345 (10 bits) 67 (7 bits)
        // 0000001100 0101011001 1000011 -> padded to 32 bits
        let bytes = [0b0000_0011, 0b0001_0101, 0b1001_1000, 0b0110_0000];
        let mut cursor = BitCursor::new(&bytes);
        let decoded = NumericDecoder::decode(&mut cursor, 8).unwrap();
        assert_eq!(decoded, "01234567");
        assert_eq!(cursor.position(), 27);
    }

    #[test]
    fn test_bits_needed() {
        assert_eq!(NumericDecoder::bits_needed(0), 0);
        assert_eq!(NumericDecoder::bits_needed(1), 4);
        assert_eq!(NumericDecoder::bits_needed(2), 7);
        assert_eq!(NumericDecoder::bits_needed(3), 10);
        assert_eq!(NumericDecoder::bits_needed(8), 27);
    }

    #[test]
    fn test_out_of_range_group() {
        // 1111111111 = 1023, not a 3-digit value
        let bytes = [0xFF, 0xC0];
        let mut cursor = BitCursor::new(&bytes);
        let decoded = NumericDecoder::decode(&mut cursor, 3).unwrap();
        assert_eq!(decoded, "\u{FFFD}");
    }

    #[test]
    fn test_truncated() {
        let bytes = [0x00];
        let mut cursor = BitCursor::new(&bytes);
        assert!(NumericDecoder::decode(&mut cursor, 3).is_err());
        assert_eq!(cursor.position(), 0);
    }
}
