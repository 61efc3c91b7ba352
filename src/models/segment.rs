/// QR data segment mode (the 4-bit mode indicator)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// End of message (0000)
    Terminator = 0b0000,
    /// Decimal digits, 3 per 10 bits (0001)
    Numeric = 0b0001,
    /// 45-symbol set, 2 per 11 bits (0010)
    Alphanumeric = 0b0010,
    /// Structured append header (0011)
    StructuredAppend = 0b0011,
    /// 8-bit data (0100)
    Byte = 0b0100,
    /// FNC1 in first position (0101)
    Fnc1First = 0b0101,
    /// Extended Channel Interpretation (0111)
    Eci = 0b0111,
    /// Shift JIS double-byte characters, 13 bits each (1000)
    Kanji = 0b1000,
    /// FNC1 in second position (1001)
    Fnc1Second = 0b1001,
}

impl Mode {
    /// Map a 4-bit mode indicator to a mode; unknown indicators give `None`
    pub fn from_indicator(bits: u8) -> Option<Self> {
        match bits & 0x0F {
            0b0000 => Some(Mode::Terminator),
            0b0001 => Some(Mode::Numeric),
            0b0010 => Some(Mode::Alphanumeric),
            0b0011 => Some(Mode::StructuredAppend),
            0b0100 => Some(Mode::Byte),
            0b0101 => Some(Mode::Fnc1First),
            0b0111 => Some(Mode::Eci),
            0b1000 => Some(Mode::Kanji),
            0b1001 => Some(Mode::Fnc1Second),
            _ => None,
        }
    }

    /// The 4-bit indicator for this mode
    pub fn indicator(self) -> u8 {
        self as u8
    }

    /// Modes whose content is text a string reader already handles
    pub fn is_textual(self) -> bool {
        matches!(self, Mode::Numeric | Mode::Alphanumeric | Mode::Kanji)
    }
}

/// What a segment carried
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentContent {
    /// Raw 8-bit data; the only content that reaches the binary payload
    Bytes(Vec<u8>),
    /// Numeric or alphanumeric text
    Text(String),
    /// Kanji characters expanded to Shift JIS byte pairs
    ShiftJis(Vec<u8>),
    /// ECI assignment number
    Eci(u32),
    /// Structured append header
    StructuredAppend {
        /// Position of this symbol in the sequence (0-based)
        index: u8,
        /// Number of symbols in the sequence
        total: u8,
        /// XOR of all bytes of the complete message
        parity: u8,
    },
    /// FNC1 marker (first position carries no data)
    Fnc1 {
        /// Application indicator, present only in second position
        application: Option<u8>,
    },
}

/// One mode-tagged run of data from the stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Segment mode
    pub mode: Mode,
    /// Declared character/byte count (0 for modes without a count field)
    pub count: usize,
    /// Bit position of the mode indicator
    pub bit_offset: usize,
    /// Decoded content
    pub content: SegmentContent,
}

impl Segment {
    /// Bytes this segment contributes to the binary payload
    pub fn payload_bytes(&self) -> &[u8] {
        match &self.content {
            SegmentContent::Bytes(bytes) => bytes,
            _ => &[],
        }
    }
}
