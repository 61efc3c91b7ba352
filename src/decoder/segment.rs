/// Segment loop over a symbol's data codewords
use crate::decoder::bitstream::BitCursor;
use crate::decoder::config::{DecodeOptions, TextSegmentPolicy};
use crate::decoder::error::{DecodeError, Result};
use crate::decoder::modes::{
    alphanumeric::AlphanumericDecoder, byte::ByteDecoder, header, kanji::KanjiDecoder,
    numeric::NumericDecoder,
};
use crate::decoder::tables::char_count_bits;
use crate::decoder::version::{SymbolVersion, VersionTier};
use crate::models::{Mode, Segment, SegmentContent};

/// Width of a mode indicator
const MODE_INDICATOR_BITS: usize = 4;

/// Walks the mode-tagged segments of one symbol's data codewords.
///
/// Yields segments in stream order and stops after the terminator, after
/// fewer than four bits remain, or after the first error.
#[derive(Debug, Clone)]
pub struct SegmentDecoder<'a> {
    cursor: BitCursor<'a>,
    tier: VersionTier,
    options: DecodeOptions,
    finished: bool,
}

impl<'a> SegmentDecoder<'a> {
    /// Start decoding `codewords` for a symbol of the given version
    pub fn new(
        codewords: &'a [u8],
        version: impl Into<i64>,
        options: DecodeOptions,
    ) -> Result<Self> {
        let version = SymbolVersion::new(version)?;
        Ok(Self {
            cursor: BitCursor::new(codewords),
            tier: version.tier(),
            options,
            finished: false,
        })
    }

    /// Bit position of the next unread bit
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    fn read_segment(&mut self) -> Result<Option<Segment>> {
        let remaining = self.cursor.remaining();
        if remaining < MODE_INDICATOR_BITS {
            log::debug!("stream ended with {} padding bits", remaining);
            return Ok(None);
        }

        let bit_offset = self.cursor.position();
        let Some(indicator) = self.cursor.read_bits(MODE_INDICATOR_BITS) else {
            return Ok(None);
        };
        let indicator = indicator as u8;
        let unsupported = || DecodeError::UnsupportedMode {
            indicator,
            bit_offset,
        };

        let mode = Mode::from_indicator(indicator).ok_or_else(unsupported)?;
        if mode.is_textual() && self.options.text_segments == TextSegmentPolicy::Reject {
            return Err(unsupported());
        }

        let (count, content) = match mode {
            Mode::Terminator => {
                log::debug!("terminator at bit {}", bit_offset);
                return Ok(None);
            }
            Mode::Numeric => {
                let count = self.read_count(mode)?;
                let text = NumericDecoder::decode(&mut self.cursor, count)?;
                (count, SegmentContent::Text(text))
            }
            Mode::Alphanumeric => {
                let count = self.read_count(mode)?;
                let text = AlphanumericDecoder::decode(&mut self.cursor, count)?;
                (count, SegmentContent::Text(text))
            }
            Mode::Byte => {
                let count = self.read_count(mode)?;
                let bytes = ByteDecoder::decode(&mut self.cursor, count)?;
                (count, SegmentContent::Bytes(bytes))
            }
            Mode::Kanji => {
                let count = self.read_count(mode)?;
                let sjis = KanjiDecoder::decode(&mut self.cursor, count)?;
                (count, SegmentContent::ShiftJis(sjis))
            }
            Mode::Eci => (0, SegmentContent::Eci(header::decode_eci(&mut self.cursor)?)),
            Mode::StructuredAppend => (0, header::decode_structured_append(&mut self.cursor)?),
            Mode::Fnc1First | Mode::Fnc1Second => (0, header::decode_fnc1(&mut self.cursor, mode)?),
        };

        log::debug!(
            "{:?} segment at bit {}: count={} next={}",
            mode,
            bit_offset,
            count,
            self.cursor.position()
        );
        Ok(Some(Segment {
            mode,
            count,
            bit_offset,
            content,
        }))
    }

    fn read_count(&mut self, mode: Mode) -> Result<usize> {
        let needed = char_count_bits(mode, self.tier);
        let remaining = self.cursor.remaining();
        self.cursor
            .read_bits(needed)
            .map(|count| count as usize)
            .ok_or_else(|| DecodeError::TruncatedLengthField {
                mode,
                needed,
                remaining,
            })
    }
}

impl Iterator for SegmentDecoder<'_> {
    type Item = Result<Segment>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let result = self.read_segment();
        if !matches!(result, Ok(Some(_))) {
            self.finished = true;
        }
        result.transpose()
    }
}

impl std::iter::FusedIterator for SegmentDecoder<'_> {}
