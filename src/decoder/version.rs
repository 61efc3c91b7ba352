/// Symbol version validation and field-width tiers
use crate::decoder::error::{DecodeError, Result};

/// A QR Code Model 2 symbol version, guaranteed to be in 1..=40
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SymbolVersion(u8);

impl SymbolVersion {
    /// Smallest valid version
    pub const MIN: u8 = 1;
    /// Largest valid version
    pub const MAX: u8 = 40;

    /// Validate a raw version number.
    ///
    /// Accepts any integer type that widens to `i64`, so out-of-range values
    /// such as 257 or -1 are rejected instead of wrapping into 1..=40.
    pub fn new(version: impl Into<i64>) -> Result<Self> {
        let version = version.into();
        if (Self::MIN as i64..=Self::MAX as i64).contains(&version) {
            Ok(Self(version as u8))
        } else {
            Err(DecodeError::InvalidVersion { version })
        }
    }

    /// The version number (1-40)
    pub fn number(self) -> u8 {
        self.0
    }

    /// Side length in modules
    pub fn size(self) -> usize {
        4 * self.0 as usize + 17
    }

    /// Which character-count width tier applies
    pub fn tier(self) -> VersionTier {
        match self.0 {
            1..=9 => VersionTier::Small,
            10..=26 => VersionTier::Medium,
            _ => VersionTier::Large,
        }
    }
}

impl TryFrom<u8> for SymbolVersion {
    type Error = DecodeError;

    fn try_from(version: u8) -> Result<Self> {
        Self::new(version)
    }
}

/// Version ranges sharing one set of character-count field widths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionTier {
    /// Versions 1-9
    Small = 0,
    /// Versions 10-26
    Medium = 1,
    /// Versions 27-40
    Large = 2,
}

impl VersionTier {
    /// Column index into the character-count table
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}
