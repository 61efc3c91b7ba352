/// Header-only modes: ECI (0111), structured append (0011), FNC1 (0101/1001)
///
/// None of these carry a character count field.
use super::{ensure_data, read_data};
use crate::decoder::bitstream::BitCursor;
use crate::decoder::error::{DecodeError, Result};
use crate::models::{Mode, SegmentContent};

/// Decode an ECI assignment designator (1, 2 or 3 bytes).
///
/// `0xxxxxxx` -> 7-bit value, `10xxxxxx` + 1 byte -> 14-bit value,
/// `110xxxxx` + 2 bytes -> 21-bit value. A leading `111` is rejected.
pub fn decode_eci(cursor: &mut BitCursor<'_>) -> Result<u32> {
    let bit_offset = cursor.position();
    ensure_data(cursor, Mode::Eci, 8)?;
    let first = read_data(cursor, Mode::Eci, 8)?;

    let value = if first & 0x80 == 0 {
        first
    } else if first & 0xC0 == 0x80 {
        ensure_data(cursor, Mode::Eci, 8)?;
        ((first & 0x3F) << 8) | read_data(cursor, Mode::Eci, 8)?
    } else if first & 0xE0 == 0xC0 {
        ensure_data(cursor, Mode::Eci, 16)?;
        ((first & 0x1F) << 16) | read_data(cursor, Mode::Eci, 16)?
    } else {
        return Err(DecodeError::UnsupportedMode {
            indicator: Mode::Eci.indicator(),
            bit_offset,
        });
    };

    log::trace!("ECI designator {} at bit {}", value, bit_offset);
    Ok(value)
}

/// Decode a structured append header: 4-bit index, 4-bit total - 1, 8-bit parity
pub fn decode_structured_append(cursor: &mut BitCursor<'_>) -> Result<SegmentContent> {
    ensure_data(cursor, Mode::StructuredAppend, 16)?;
    let index = read_data(cursor, Mode::StructuredAppend, 4)? as u8;
    let total = read_data(cursor, Mode::StructuredAppend, 4)? as u8 + 1;
    let parity = read_data(cursor, Mode::StructuredAppend, 8)? as u8;

    log::trace!("structured append {}/{} parity {:#04x}", index + 1, total, parity);
    Ok(SegmentContent::StructuredAppend {
        index,
        total,
        parity,
    })
}

/// Decode an FNC1 marker; only second position carries an 8-bit application indicator
pub fn decode_fnc1(cursor: &mut BitCursor<'_>, mode: Mode) -> Result<SegmentContent> {
    let application = if mode == Mode::Fnc1Second {
        ensure_data(cursor, mode, 8)?;
        Some(read_data(cursor, mode, 8)? as u8)
    } else {
        None
    };
    Ok(SegmentContent::Fnc1 { application })
}
