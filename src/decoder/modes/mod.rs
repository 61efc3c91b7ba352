//! QR code data mode decoders
//!
//! Each decoder knows how many bits a segment of `count` characters occupies
//! and how to turn those bits into content:
//! - Numeric: digits, 3 per 10 bits
//! - Alphanumeric: 45-symbol set, 2 per 11 bits
//! - Byte: 8-bit data
//! - Kanji: Shift JIS, 13 bits per character
//! - Header modes without a count field (ECI, structured append, FNC1)

pub mod alphanumeric;
pub mod byte;
pub mod header;
pub mod kanji;
pub mod numeric;

use crate::decoder::bitstream::BitCursor;
use crate::decoder::error::{DecodeError, Result};
use crate::models::Mode;

/// Fail with `TruncatedData` unless `needed` bits are left
pub(crate) fn ensure_data(cursor: &BitCursor<'_>, mode: Mode, needed: usize) -> Result<()> {
    let remaining = cursor.remaining();
    if needed > remaining {
        return Err(DecodeError::TruncatedData {
            mode,
            needed,
            remaining,
        });
    }
    Ok(())
}

/// Read `n` bits that `ensure_data` has already vouched for
pub(crate) fn read_data(cursor: &mut BitCursor<'_>, mode: Mode, n: usize) -> Result<u32> {
    let remaining = cursor.remaining();
    cursor.read_bits(n).ok_or(DecodeError::TruncatedData {
        mode,
        needed: n,
        remaining,
    })
}
