//! UTF-32 / UCS-4: every character is one 32-bit unit.
//!
//! Without a BOM the decoder infers the byte order from the first unit. A
//! code point below 0x110000 needs at most 21 bits, so its most significant
//! byte is always zero: a zero first byte means big-endian, a zero last byte
//! means little-endian.

use std::io::Write;

use tracing::debug;

use crate::byte_order::{sniff_bom32, ByteOrder};
use crate::codepoint::CodePoint;
use crate::error::{CodecError, Result};
use crate::traits::{read_unit, ByteSource, Decoder, Encoder};

#[derive(Debug, Default, Clone)]
pub struct Utf32Decoder {
    byte_order: ByteOrder,
}

impl Utf32Decoder {
    /// Detect the byte order from a BOM or from the zero byte of the first
    /// unit.
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

    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }
}

impl Decoder for Utf32Decoder {
    fn decode(&mut self, src: &mut dyn ByteSource) -> Result<Option<CodePoint>> {
        let mut buf = [0u8; 4];
        if !read_unit(src, &mut buf)? {
            return Ok(None);
        }

        if !self.byte_order.is_known() {
            if let Some(order) = sniff_bom32(buf) {
                self.byte_order = order;
                debug!(byte_order = order.name(), "UTF-32 byte order from BOM");
                if !read_unit(src, &mut buf)? {
                    return Ok(None);
                }
            } else {
                self.byte_order = infer_byte_order(buf)?;
                debug!(
                    byte_order = self.byte_order.name(),
                    "UTF-32 byte order inferred from first unit"
                );
            }
        }

        // Values above U+10FFFF are passed through unchecked.
        Ok(Some(CodePoint::new(self.byte_order.read_u32(buf))))
    }
}

fn infer_byte_order(bytes: [u8; 4]) -> Result<ByteOrder> {
    if bytes[0] == 0 {
        Ok(ByteOrder::BigEndian)
    } else if bytes[3] == 0 {
        Ok(ByteOrder::LittleEndian)
    } else {
        Err(CodecError::UnrecognizedByteOrder { bytes })
    }
}

/// Writes every code point as four bytes. No UTF-32 encoder writes a BOM.
#[derive(Debug, Clone)]
pub struct Utf32Encoder {
    byte_order: ByteOrder,
}

impl Utf32Encoder {
    /// Little-endian; identical to [`Utf32Encoder::little_endian`].
    ///
    /// No BOM is written, so [`Utf32Decoder::new`] can misread this output.
    /// A first character whose low byte is zero (U+0100 is `00 01 00 00`) is
    /// inferred as big-endian, and a leading U+FEFF (`FF FE 00 00`) is taken
    /// as a BOM. Pair it with [`Utf32Decoder::little_endian`] for lossless
    /// round trips.
    pub fn new() -> Self {
        Self::little_endian()
    }

    pub fn little_endian() -> Self {
        Self {
            byte_order: ByteOrder::LittleEndian,
        }
    }

    pub fn big_endian() -> Self {
        Self {
            byte_order: ByteOrder::BigEndian,
        }
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }
}

impl Default for Utf32Encoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder for Utf32Encoder {
    // No range check: any 32-bit value is written as-is.
    fn encode(&mut self, dst: &mut dyn Write, cp: CodePoint) -> Result<()> {
        dst.write_all(&self.byte_order.write_u32(cp.value()))?;
        Ok(())
    }
}
