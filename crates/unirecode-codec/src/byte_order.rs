//! Byte order of fixed-width code units.
//!
//! UCS-2 and UTF-32 codecs latch an order on first use and keep it for the
//! rest of the stream.

/// Byte-order mark for 2-byte units, big-endian.
pub const BOM16_BE: [u8; 2] = [0xFE, 0xFF];

/// Byte-order mark for 2-byte units, little-endian.
pub const BOM16_LE: [u8; 2] = [0xFF, 0xFE];

/// Byte-order mark for 4-byte units, big-endian.
pub const BOM32_BE: [u8; 4] = [0xFE, 0xFF, 0x00, 0x00];

/// Byte-order mark for 4-byte units, little-endian.
pub const BOM32_LE: [u8; 4] = [0xFF, 0xFE, 0x00, 0x00];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ByteOrder {
    /// Not yet decided; the decoder will sniff the first unit.
    #[default]
    Unknown,
    LittleEndian,
    BigEndian,
}

impl ByteOrder {
    pub fn is_known(self) -> bool {
        !matches!(self, ByteOrder::Unknown)
    }

    /// Combine two bytes into a unit. `Unknown` is treated as little-endian.
    pub fn read_u16(self, bytes: [u8; 2]) -> u16 {
        match self {
            ByteOrder::BigEndian => u16::from_be_bytes(bytes),
            ByteOrder::LittleEndian | ByteOrder::Unknown => u16::from_le_bytes(bytes),
        }
    }

    /// Combine four bytes into a unit. `Unknown` is treated as little-endian.
    pub fn read_u32(self, bytes: [u8; 4]) -> u32 {
        match self {
            ByteOrder::BigEndian => u32::from_be_bytes(bytes),
            ByteOrder::LittleEndian | ByteOrder::Unknown => u32::from_le_bytes(bytes),
        }
    }

    pub fn write_u16(self, unit: u16) -> [u8; 2] {
        match self {
            ByteOrder::BigEndian => unit.to_be_bytes(),
            ByteOrder::LittleEndian | ByteOrder::Unknown => unit.to_le_bytes(),
        }
    }

    pub fn write_u32(self, unit: u32) -> [u8; 4] {
        match self {
            ByteOrder::BigEndian => unit.to_be_bytes(),
            ByteOrder::LittleEndian | ByteOrder::Unknown => unit.to_le_bytes(),
        }
    }

    /// The 2-byte BOM serialized in this order.
    pub fn bom16(self) -> [u8; 2] {
        self.write_u16(0xFEFF)
    }

    /// Returns a human-readable name for the byte order.
    pub fn name(self) -> &'static str {
        match self {
            ByteOrder::Unknown => "unknown",
            ByteOrder::LittleEndian => "little-endian",
            ByteOrder::BigEndian => "big-endian",
        }
    }
}

/// Match a 2-byte BOM, returning the order it selects.
pub fn sniff_bom16(bytes: [u8; 2]) -> Option<ByteOrder> {
    match bytes {
        BOM16_BE => Some(ByteOrder::BigEndian),
        BOM16_LE => Some(ByteOrder::LittleEndian),
        _ => None,
    }
}

/// Match a 4-byte BOM, returning the order it selects.
pub fn sniff_bom32(bytes: [u8; 4]) -> Option<ByteOrder> {
    match bytes {
        BOM32_BE => Some(ByteOrder::BigEndian),
        BOM32_LE => Some(ByteOrder::LittleEndian),
        _ => None,
    }
}
