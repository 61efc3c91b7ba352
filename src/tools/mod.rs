//! Helpers shared by `qrtool`, the benches and the tests: hex payload I/O
//! and a bit writer for building synthetic segment streams.

use crate::decoder::tables::char_count_bits;
use crate::decoder::version::{SymbolVersion, VersionTier};
use crate::models::Mode;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Failure to read a hex-encoded payload
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum HexError {
    #[error("odd number of hex digits ({0})")]
    OddLength(usize),
    #[error("invalid hex digit {digit:?} at position {position}")]
    InvalidDigit { digit: char, position: usize },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse a hex string into bytes. Whitespace, `:` and `-` separators are ignored.
pub fn parse_hex(text: &str) -> Result<Vec<u8>, HexError> {
    let digits: Vec<(usize, char)> = text
        .char_indices()
        .filter(|(_, c)| !c.is_whitespace() && *c != ':' && *c != '-')
        .collect();
    if digits.len() % 2 != 0 {
        return Err(HexError::OddLength(digits.len()));
    }

    let nibble = |(position, digit): (usize, char)| {
        digit
            .to_digit(16)
            .map(|d| d as u8)
            .ok_or(HexError::InvalidDigit { digit, position })
    };

    digits
        .chunks(2)
        .map(|pair| Ok((nibble(pair[0])? << 4) | nibble(pair[1])?))
        .collect()
}

/// Lowercase hex rendering with no separators
pub fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Read one hex payload per line, skipping blank lines and `#` comments.
pub fn read_hex_lines<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<u8>>, HexError> {
    let contents = fs::read_to_string(path)?;
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(parse_hex)
        .collect()
}

/// MSB-first bit packer for building segment streams
#[derive(Debug, Clone, Default)]
pub struct BitWriter {
    bytes: Vec<u8>,
    bit_len: usize,
}

impl BitWriter {
    /// Create an empty writer
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of bits written so far
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    /// Append `value` as a `count`-bit field, most significant bit first
    ///
    /// # Panics
    /// If `count` exceeds 32 or `value` does not fit in `count` bits.
    pub fn push_bits(&mut self, value: u32, count: usize) {
        assert!(count <= 32, "bit field of {} bits exceeds 32", count);
        assert!(
            count == 32 || value >> count == 0,
            "value {} does not fit in {} bits",
            value,
            count
        );
        for i in (0..count).rev() {
            let bit = (value >> i) & 1;
            if self.bit_len % 8 == 0 {
                self.bytes.push(0);
            }
            if bit != 0 {
                let last = self.bytes.len() - 1;
                self.bytes[last] |= 0x80 >> (self.bit_len % 8);
            }
            self.bit_len += 1;
        }
    }

    /// Append a byte-mode segment: indicator `0100`, a count field sized for
    /// `version`, then the bytes. Versions outside 1-40 use the 1-9 widths.
    ///
    /// # Panics
    /// If `data.len()` does not fit the count field: at most 255 bytes for
    /// versions 1-9, 65535 for versions 10-40.
    pub fn push_byte_segment(&mut self, data: &[u8], version: u8) {
        let tier = SymbolVersion::new(version)
            .map(|v| v.tier())
            .unwrap_or(VersionTier::Small);
        let width = char_count_bits(Mode::Byte, tier);
        assert!(
            data.len() < 1usize << width,
            "{} bytes exceed the {}-bit byte count field of version {}",
            data.len(),
            width,
            version
        );
        self.push_bits(Mode::Byte.indicator() as u32, 4);
        self.push_bits(data.len() as u32, width);
        for &byte in data {
            self.push_bits(byte as u32, 8);
        }
    }

    /// Append the `0000` terminator
    pub fn push_terminator(&mut self) {
        self.push_bits(Mode::Terminator.indicator() as u32, 4);
    }

    /// Finish, zero-padding the last partial byte
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("40 1a:FF").unwrap(), vec![0x40, 0x1A, 0xFF]);
        assert_eq!(parse_hex("").unwrap(), Vec::<u8>::new());
        assert!(matches!(parse_hex("abc"), Err(HexError::OddLength(3))));
        assert!(matches!(
            parse_hex("zz"),
            Err(HexError::InvalidDigit { digit: 'z', position: 0 })
        ));
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(to_hex(&[0x00, 0xAB, 0x7F]), "00ab7f");
    }

    #[test]
    fn test_bit_writer_packing() {
        let mut w = BitWriter::new();
        w.push_byte_segment(b"HI", 1);
        w.push_terminator();
        assert_eq!(w.bit_len(), 32);
        assert_eq!(w.into_bytes(), vec![0x40, 0x24, 0x84, 0x90]);
    }

    #[test]
    fn test_byte_segment_count_limits() {
        let data = vec![0x5A; 256];
        let mut w = BitWriter::new();
        w.push_byte_segment(&data[..255], 9);
        w.push_terminator();
        assert_eq!(crate::decode(&w.into_bytes(), 9).unwrap().as_bytes(), &data[..255]);

        let mut w = BitWriter::new();
        w.push_byte_segment(&data, 10);
        w.push_terminator();
        assert_eq!(crate::decode(&w.into_bytes(), 10).unwrap().as_bytes(), &data[..]);
    }

    #[test]
    #[should_panic(expected = "256 bytes exceed the 8-bit byte count field of version 1")]
    fn test_byte_segment_too_long_for_tier() {
        BitWriter::new().push_byte_segment(&[0; 256], 1);
    }

    #[test]
    #[should_panic(expected = "does not fit in 4 bits")]
    fn test_push_bits_value_too_wide() {
        BitWriter::new().push_bits(0x10, 4);
    }

    #[test]
    #[should_panic(expected = "exceeds 32")]
    fn test_push_bits_count_too_wide() {
        BitWriter::new().push_bits(1, 33);
    }

    #[test]
    fn test_push_bits_full_width() {
        let mut w = BitWriter::new();
        w.push_bits(u32::MAX, 32);
        assert_eq!(w.into_bytes(), vec![0xFF; 4]);
    }

    #[test]
    fn test_read_hex_lines() {
        let path = std::env::temp_dir().join(format!("qr_payload_hex_{}.txt", std::process::id()));
        fs::write(&path, "# header\n40 10 00\n\n4024849000\n").unwrap();
        let lines = read_hex_lines(&path).unwrap();
        assert_eq!(lines, vec![vec![0x40, 0x10, 0x00], vec![0x40, 0x24, 0x84, 0x90, 0x00]]);
        let _ = fs::remove_file(path);
    }
}
