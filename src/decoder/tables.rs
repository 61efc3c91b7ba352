use crate::decoder::version::VersionTier;
use crate::models::Mode;

// Character count indicator widths (ISO/IEC 18004 Table 3).
// Index: [mode][tier] with tiers 1-9, 10-26, 27-40.
const NUMERIC_COUNT_BITS: [u8; 3] = [10, 12, 14];
const ALPHANUMERIC_COUNT_BITS: [u8; 3] = [9, 11, 13];
const BYTE_COUNT_BITS: [u8; 3] = [8, 16, 16];
const KANJI_COUNT_BITS: [u8; 3] = [8, 10, 12];

/// Width of the character count field that follows `mode`'s indicator.
///
/// Modes without a count field (terminator, ECI, structured append, FNC1)
/// report 0.
pub fn char_count_bits(mode: Mode, tier: VersionTier) -> usize {
    let row = match mode {
        Mode::Numeric => &NUMERIC_COUNT_BITS,
        Mode::Alphanumeric => &ALPHANUMERIC_COUNT_BITS,
        Mode::Byte => &BYTE_COUNT_BITS,
        Mode::Kanji => &KANJI_COUNT_BITS,
        Mode::Terminator
        | Mode::StructuredAppend
        | Mode::Fnc1First
        | Mode::Eci
        | Mode::Fnc1Second => return 0,
    };
    row[tier.index()] as usize
}
