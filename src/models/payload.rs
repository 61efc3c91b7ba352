use std::ops::Deref;

/// Binary payload recovered from a symbol: the concatenated data of every
/// byte-mode segment, in stream order
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DecodedPayload {
    bytes: Vec<u8>,
}

impl DecodedPayload {
    /// Create an empty payload
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn extend_from_slice(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }

    /// Borrow the payload bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Take ownership of the payload bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Number of payload bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True when the symbol carried no byte-mode data
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl Deref for DecodedPayload {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes
    }
}

impl AsRef<[u8]> for DecodedPayload {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<DecodedPayload> for Vec<u8> {
    fn from(payload: DecodedPayload) -> Self {
        payload.bytes
    }
}
