/// Kanji mode decoder (Mode 1000)
/// Each character is a 13-bit value expanded back to a Shift JIS double byte.
use super::{ensure_data, read_data};
use crate::decoder::bitstream::BitCursor;
use crate::decoder::error::Result;
use crate::models::Mode;

/// Decoder for kanji segments
pub struct KanjiDecoder;

impl KanjiDecoder {
    /// Bits occupied by `count` characters
    pub fn bits_needed(count: usize) -> usize {
        count * 13
    }

    /// Decode `count` characters into Shift JIS byte pairs
    pub fn decode(cursor: &mut BitCursor<'_>, count: usize) -> Result<Vec<u8>> {
        ensure_data(cursor, Mode::Kanji, Self::bits_needed(count))?;

        let mut sjis = Vec::with_capacity(count * 2);
        for _ in 0..count {
            let value = read_data(cursor, Mode::Kanji, 13)?;
            let mut code = ((value / 0xC0) << 8) | (value % 0xC0);
            if code < 0x1F00 {
                code += 0x8140;
            } else {
                code += 0xC140;
            }
            sjis.push((code >> 8) as u8);
            sjis.push((code & 0xFF) as u8);
        }
        Ok(sjis)
    }
}
