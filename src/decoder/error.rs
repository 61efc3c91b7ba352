//! Decode failure taxonomy.

use crate::models::Mode;
use thiserror::Error;

/// Why a payload could not be decoded.
///
/// Every variant aborts the whole decode; no partial payload is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum DecodeError {
    /// The symbol version is outside 1..=40.
    #[error("invalid symbol version {version}, expected 1-40")]
    InvalidVersion { version: i64 },

    /// Fewer bits remain than the mode's character count field needs.
    #[error("truncated {mode:?} length field: need {needed} bits, {remaining} remain")]
    TruncatedLengthField {
        mode: Mode,
        needed: usize,
        remaining: usize,
    },

    /// Fewer bits remain than the segment's declared data needs.
    #[error("truncated {mode:?} data: need {needed} bits, {remaining} remain")]
    TruncatedData {
        mode: Mode,
        needed: usize,
        remaining: usize,
    },

    /// The mode indicator (or ECI designator) is not one this decoder handles.
    #[error("unsupported mode indicator {indicator:#06b} at bit {bit_offset}")]
    UnsupportedMode { indicator: u8, bit_offset: usize },
}

/// The bare failure reason, without diagnostic context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum DecodeErrorKind {
    InvalidVersion,
    TruncatedLengthField,
    TruncatedData,
    UnsupportedMode,
}

impl DecodeError {
    /// Reason only, for callers that branch on the taxonomy.
    pub fn kind(&self) -> DecodeErrorKind {
        match self {
            DecodeError::InvalidVersion { .. } => DecodeErrorKind::InvalidVersion,
            DecodeError::TruncatedLengthField { .. } => DecodeErrorKind::TruncatedLengthField,
            DecodeError::TruncatedData { .. } => DecodeErrorKind::TruncatedData,
            DecodeError::UnsupportedMode { .. } => DecodeErrorKind::UnsupportedMode,
        }
    }
}

/// A convenience `Result` alias using [`DecodeError`].
pub type Result<T> = std::result::Result<T, DecodeError>;
