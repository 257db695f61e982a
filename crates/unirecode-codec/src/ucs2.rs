//! UCS-2: every character is exactly one 16-bit unit, so only U+0000-U+FFFF
//! can be represented.
//!
//! | name      | decoder                              | encoder                |
//! |-----------|--------------------------------------|------------------------|
//! | `UCS-2`   | sniffs a BOM, else little-endian     | little-endian, no BOM  |
//! | `UCS-2LE` | little-endian, BOM is a character    | little-endian with BOM |
//! | `UCS-2BE` | big-endian, BOM is a character       | big-endian with BOM    |

use std::io::Write;

use tracing::debug;

use crate::byte_order::{sniff_bom16, ByteOrder};
use crate::codepoint::CodePoint;
use crate::error::{CodecError, Result};
use crate::traits::{read_unit, ByteSource, Decoder, Encoder};

/// Largest value a single 16-bit unit can carry.
pub const UCS2_MAX: u32 = 0xFFFF;

#[derive(Debug, Default, Clone)]
pub struct Ucs2Decoder {
    byte_order: ByteOrder,
}

impl Ucs2Decoder {
    /// Sniff the byte order from a leading BOM, defaulting to little-endian.
    pub fn new() -> Self {
        Self::with_byte_order(ByteOrder::Unknown)
    }

    pub fn little_endian() -> Self {
        Self::with_byte_order(ByteOrder::LittleEndian)
    }

    pub fn big_endian() -> Self {
        Self::with_byte_order(ByteOrder::BigEndian)
    }

    pub fn with_byte_order(byte_order: ByteOrder) -> Self {
        Self { byte_order }
    }

    /// The latched byte order, `Unknown` until the first unit is read.
    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Read one 16-bit unit, consuming a leading BOM if the order is still
    /// unknown.
    pub fn decode_unit(&mut self, src: &mut dyn ByteSource) -> Result<Option<u16>> {
        let mut buf = [0u8; 2];
        if !read_unit(src, &mut buf)? {
            return Ok(None);
        }

        if !self.byte_order.is_known() {
            match sniff_bom16(buf) {
                Some(order) => {
                    self.byte_order = order;
                    debug!(byte_order = order.name(), "UCS-2 byte order from BOM");
                    // A BOM with nothing after it is an empty stream.
                    if !read_unit(src, &mut buf)? {
                        return Ok(None);
                    }
                }
                None => {
                    self.byte_order = ByteOrder::LittleEndian;
                    debug!("no UCS-2 BOM, assuming little-endian");
                }
            }
        }

        Ok(Some(self.byte_order.read_u16(buf)))
    }
}

impl Decoder for Ucs2Decoder {
    fn decode(&mut self, src: &mut dyn ByteSource) -> Result<Option<CodePoint>> {
        Ok(self.decode_unit(src)?.map(CodePoint::from))
    }
}

#[derive(Debug, Clone)]
pub struct Ucs2Encoder {
    byte_order: ByteOrder,
    write_bom: bool,
}

impl Ucs2Encoder {
    /// Little-endian without a BOM.
    pub fn new() -> Self {
        Self::with_options(ByteOrder::LittleEndian, false)
    }

    /// Little-endian, writing a BOM before the first character.
    pub fn little_endian() -> Self {
        Self::with_options(ByteOrder::LittleEndian, true)
    }

    /// Big-endian, writing a BOM before the first character.
    pub fn big_endian() -> Self {
        Self::with_options(ByteOrder::BigEndian, true)
    }

    /// `ByteOrder::Unknown` encodes as little-endian.
    pub fn with_options(byte_order: ByteOrder, write_bom: bool) -> Self {
        let byte_order = if byte_order.is_known() {
            byte_order
        } else {
            ByteOrder::LittleEndian
        };
        Self {
            byte_order,
            write_bom,
        }
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// True until the BOM has been written.
    pub fn bom_pending(&self) -> bool {
        self.write_bom
    }

    /// Write one 16-bit unit, preceded by the BOM if it is still pending.
    pub fn encode_unit(&mut self, dst: &mut dyn Write, unit: u16) -> Result<()> {
        if self.write_bom {
            self.write_bom = false;
            dst.write_all(&self.byte_order.bom16())?;
        }
        dst.write_all(&self.byte_order.write_u16(unit))?;
        Ok(())
    }
}

impl Default for Ucs2Encoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder for Ucs2Encoder {
    fn encode(&mut self, dst: &mut dyn Write, cp: CodePoint) -> Result<()> {
        if cp.value() > UCS2_MAX {
            return Err(CodecError::OutOfRange {
                codepoint: cp,
                encoding: "UCS-2",
            });
        }
        self.encode_unit(dst, cp.value() as u16)
    }
}
