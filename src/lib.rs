//! qr_payload - binary payload recovery for scanned QR codes
//!
//! Takes the error-corrected data codewords a capture layer extracted from a
//! QR symbol, together with the symbol version, and walks the mode-tagged
//! segment stream to recover the bytes carried in byte-mode segments.
//!
//! ```
//! use qr_payload::tools::BitWriter;
//!
//! let mut stream = BitWriter::new();
//! stream.push_byte_segment(&[0xDE, 0xAD], 1);
//! stream.push_terminator();
//!
//! let payload = qr_payload::decode(&stream.into_bytes(), 1).unwrap();
//! assert_eq!(payload.as_bytes(), &[0xDE, 0xAD]);
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Stderr logger used by the command-line tools
pub mod debug;
/// Payload decoding modules (bit cursor, tables, data modes, segment loop)
pub mod decoder;
/// Core data structures (Mode, Segment, DecodedPayload)
pub mod models;
/// Hex I/O and bit-writer helpers for tools, benches and tests
pub mod tools;

pub use decoder::config::{DecodeOptions, TextSegmentPolicy};
pub use decoder::error::{DecodeError, DecodeErrorKind, Result};
pub use decoder::segment::SegmentDecoder;
pub use decoder::version::{SymbolVersion, VersionTier};
pub use models::{DecodedPayload, Mode, Segment, SegmentContent};

/// Recover the binary payload of a QR symbol
///
/// # Arguments
/// * `codewords` - Error-corrected data codewords, MSB first
/// * `version` - Symbol version (1-40)
///
/// # Returns
/// The concatenated bytes of every byte-mode segment, in stream order.
/// Numeric, alphanumeric, kanji and header segments are consumed but
/// contribute nothing. Any malformed segment fails the whole decode.
pub fn decode(codewords: &[u8], version: impl Into<i64>) -> Result<DecodedPayload> {
    decode_with_options(codewords, version, &DecodeOptions::default())
}

/// Same as [`decode`] with an explicit policy
pub fn decode_with_options(
    codewords: &[u8],
    version: impl Into<i64>,
    options: &DecodeOptions,
) -> Result<DecodedPayload> {
    let version = SymbolVersion::new(version)?;
    let mut payload = DecodedPayload::new();
    for segment in SegmentDecoder::new(codewords, version.number(), *options)? {
        payload.extend_from_slice(segment?.payload_bytes());
    }
    log::debug!("decoded {} payload bytes at version {}", payload.len(), version.number());
    Ok(payload)
}

/// Decode every segment, including the text of textual segments
///
/// Useful for diagnostics; the all-or-nothing failure rules of [`decode`]
/// apply.
pub fn decode_segments(codewords: &[u8], version: impl Into<i64>) -> Result<Vec<Segment>> {
    decode_segments_with_options(codewords, version, &DecodeOptions::default())
}

/// Same as [`decode_segments`] with an explicit policy
pub fn decode_segments_with_options(
    codewords: &[u8],
    version: impl Into<i64>,
    options: &DecodeOptions,
) -> Result<Vec<Segment>> {
    SegmentDecoder::new(codewords, version, *options)?.collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::BitWriter;

    #[test]
    fn test_decode_empty() {
        let payload = decode(&[], 1).unwrap();
        assert!(payload.is_empty());
    }

    #[test]
    fn test_decode_byte_mode() {
        // Byte mode, version 1: "HI"
        let mut w = BitWriter::new();
        w.push_byte_segment(b"HI", 1);
        w.push_terminator();
        let payload = decode(&w.into_bytes(), 1).unwrap();
        assert_eq!(payload.as_bytes(), b"HI");
    }

    #[test]
    fn test_invalid_version_checked_first() {
        assert_eq!(decode(&[], 0), Err(DecodeError::InvalidVersion { version: 0 }));
        assert_eq!(
            decode(&[0xFF, 0xFF], 41),
            Err(DecodeError::InvalidVersion { version: 41 })
        );
    }

    #[test]
    fn test_wide_versions_do_not_wrap() {
        // 257 and 297 would wrap to 1 and 41 as u8
        let mut w = BitWriter::new();
        w.push_byte_segment(b"HI", 1);
        let stream = w.into_bytes();
        assert_eq!(
            decode(&stream, 257u32),
            Err(DecodeError::InvalidVersion { version: 257 })
        );
        assert_eq!(
            decode(&stream, -1i32),
            Err(DecodeError::InvalidVersion { version: -1 })
        );
        assert_eq!(
            decode_segments(&stream, 297i64).unwrap_err().kind(),
            DecodeErrorKind::InvalidVersion
        );
        assert_eq!(decode(&stream, 1u8).unwrap().as_bytes(), b"HI");
    }
}
