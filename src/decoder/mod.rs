//! QR payload decoding modules
//!
//! This module turns a symbol's error-corrected data codewords back into
//! segments:
//! - Bit cursor over the codewords
//! - Version tiers and character count widths
//! - Data mode decoders (numeric, alphanumeric, byte, kanji, headers)
//! - The segment loop that ties them together

/// Bit cursor over data codewords
pub mod bitstream;
/// Decode policy options
pub mod config;
/// Decode failure taxonomy
pub mod error;
/// Data mode decoders (numeric, alphanumeric, byte, kanji, ECI/FNC1/structured append)
pub mod modes;
/// Segment loop
pub mod segment;
/// Character count width tables
pub mod tables;
/// Symbol version validation and tiers
pub mod version;
