/// Byte mode decoder (Mode 0100) for 8-bit data
use super::{ensure_data, read_data};
use crate::decoder::bitstream::BitCursor;
use crate::decoder::error::Result;
use crate::models::Mode;

/// Decoder for byte segments
pub struct ByteDecoder;

impl ByteDecoder {
    /// Bits occupied by `count` bytes
    pub fn bits_needed(count: usize) -> usize {
        count * 8
    }

    /// Read exactly `count` bytes; the bytes need not be byte aligned
    pub fn decode(cursor: &mut BitCursor<'_>, count: usize) -> Result<Vec<u8>> {
        ensure_data(cursor, Mode::Byte, Self::bits_needed(count))?;

        let mut bytes = Vec::with_capacity(count);
        for _ in 0..count {
            bytes.push(read_data(cursor, Mode::Byte, 8)? as u8);
        }
        Ok(bytes)
    }
}
