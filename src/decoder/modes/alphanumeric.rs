/// Alphanumeric mode decoder (Mode 0010)
/// Alphanumeric character set: 0-9, A-Z, space, $%*+-./:
use super::{ensure_data, read_data};
use crate::decoder::bitstream::BitCursor;
use crate::decoder::error::Result;
use crate::models::Mode;

const ALPHANUMERIC_TABLE: [char; 45] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I',
    'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', ' ', '$',
    '%', '*', '+', '-', '.', '/', ':',
];

/// Decode alphanumeric data
/// Pairs = 11 bits, single = 6 bits
pub struct AlphanumericDecoder;

impl AlphanumericDecoder {
    /// Bits occupied by `count` characters
    pub fn bits_needed(count: usize) -> usize {
        (count / 2) * 11 + (count % 2) * 6
    }

    /// Decode `count` characters; values outside the table become U+FFFD
    pub fn decode(cursor: &mut BitCursor<'_>, count: usize) -> Result<String> {
        ensure_data(cursor, Mode::Alphanumeric, Self::bits_needed(count))?;

        let mut result = String::with_capacity(count);
        for _ in 0..count / 2 {
            let value = read_data(cursor, Mode::Alphanumeric, 11)? as usize;
            result.push(lookup(value / 45));
            result.push(lookup(value % 45));
        }
        if count % 2 == 1 {
            let value = read_data(cursor, Mode::Alphanumeric, 6)? as usize;
            result.push(lookup(value));
        }

        Ok(result)
    }
}

fn lookup(value: usize) -> char {
    ALPHANUMERIC_TABLE
        .get(value)
        .copied()
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphanumeric_decode() {
        // "A1" = (10 * 45 + 1) = 451 = 0b00111000011 (11 bits)
        let bytes = [0b0011_1000, 0b0110_0000];
        let mut cursor = BitCursor::new(&bytes);
        let decoded = AlphanumericDecoder::decode(&mut cursor, 2).unwrap();
        assert_eq!(decoded, "A1");
        assert_eq!(cursor.position(), 11);
    }

    #[test]
    fn test_odd_trailing_char() {
        // "AC-" : AC = 10*45+12 = 462 (11 bits), '-' = 41 (6 bits)
        // 00111001110 101001 -> 17 bits
        let bytes = [0b0011_1001, 0b1101_0100, 0b1000_0000];
        let mut cursor = BitCursor::new(&bytes);
        let decoded = AlphanumericDecoder::decode(&mut cursor, 3).unwrap();
        assert_eq!(decoded, "AC-");
        assert_eq!(cursor.position(), 17);
    }

    #[test]
    fn test_bits_needed() {
        assert_eq!(AlphanumericDecoder::bits_needed(1), 6);
        assert_eq!(AlphanumericDecoder::bits_needed(2), 11);
        assert_eq!(AlphanumericDecoder::bits_needed(5), 28);
    }
}
