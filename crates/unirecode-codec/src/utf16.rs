//! UTF-16 layered on top of UCS-2.
//!
//! Characters up to U+FFFF are a single UCS-2 unit. Characters above that are
//! split into a surrogate pair: a high unit `0xD800 | hi10` followed by a low
//! unit `0xDC00 | lo10`, where `hi10:lo10` is `codepoint - 0x10000`.
//!
//! Byte order and BOM behavior come entirely from the embedded UCS-2 codec,
//! so the three names (`UTF-16`, `UTF-16LE`, `UTF-16BE`) mirror the UCS-2
//! variants.

use std::io::Write;

use crate::byte_order::ByteOrder;
use crate::codepoint::CodePoint;
use crate::error::{CodecError, Result};
use crate::traits::{ByteSource, Decoder, Encoder};
use crate::ucs2::{Ucs2Decoder, Ucs2Encoder};

/// Selects the six high bits of a 16-bit unit.
const SURROGATE_MASK: u16 = 0xFC00;
const HIGH_SURROGATE: u16 = 0xD800;
const LOW_SURROGATE: u16 = 0xDC00;
const SURROGATE_PAYLOAD: u16 = 0x03FF;
const SUPPLEMENTARY_BASE: u32 = 0x10000;

#[derive(Debug, Default, Clone)]
pub struct Utf16Decoder {
    ucs2: Ucs2Decoder,
}

impl Utf16Decoder {
    /// Sniff the byte order from a leading BOM, defaulting to little-endian.
    pub fn new() -> Self {
        Self {
            ucs2: Ucs2Decoder::new(),
        }
    }

    pub fn little_endian() -> Self {
        Self {
            ucs2: Ucs2Decoder::little_endian(),
        }
    }

    pub fn big_endian() -> Self {
        Self {
            ucs2: Ucs2Decoder::big_endian(),
        }
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.ucs2.byte_order()
    }
}

impl Decoder for Utf16Decoder {
    fn decode(&mut self, src: &mut dyn ByteSource) -> Result<Option<CodePoint>> {
        let Some(high) = self.ucs2.decode_unit(src)? else {
            return Ok(None);
        };

        if high & SURROGATE_MASK != HIGH_SURROGATE {
            return Ok(Some(CodePoint::from(high)));
        }

        let low = self
            .ucs2
            .decode_unit(src)?
            .ok_or(CodecError::ShortRead {
                expected: 4,
                actual: 2,
            })?;

        if low & SURROGATE_MASK != LOW_SURROGATE {
            return Err(CodecError::InvalidSurrogatePair { high, low });
        }

        let value = ((u32::from(high & SURROGATE_PAYLOAD) << 10)
            | u32::from(low & SURROGATE_PAYLOAD))
            + SUPPLEMENTARY_BASE;
        Ok(Some(CodePoint::new(value)))
    }
}

#[derive(Debug, Default, Clone)]
pub struct Utf16Encoder {
    ucs2: Ucs2Encoder,
}

impl Utf16Encoder {
    /// Little-endian without a BOM.
    pub fn new() -> Self {
        Self {
            ucs2: Ucs2Encoder::new(),
        }
    }

    /// Little-endian, writing a BOM before the first character.
    pub fn little_endian() -> Self {
        Self {
            ucs2: Ucs2Encoder::little_endian(),
        }
    }

    /// Big-endian, writing a BOM before the first character.
    pub fn big_endian() -> Self {
        Self {
            ucs2: Ucs2Encoder::big_endian(),
        }
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.ucs2.byte_order()
    }
}

impl Encoder for Utf16Encoder {
    fn encode(&mut self, dst: &mut dyn Write, cp: CodePoint) -> Result<()> {
        let value = cp.value();
        if value < SUPPLEMENTARY_BASE {
            return self.ucs2.encode(dst, cp);
        }
        if value > CodePoint::MAX.value() {
            return Err(CodecError::OutOfRange {
                codepoint: cp,
                encoding: "UTF-16",
            });
        }

        // At most 20 bits remain after removing the base.
        let v = value - SUPPLEMENTARY_BASE;
        let high = HIGH_SURROGATE | (v >> 10) as u16;
        let low = LOW_SURROGATE | (v as u16 & SURROGATE_PAYLOAD);

        self.ucs2.encode_unit(dst, high)?;
        self.ucs2.encode_unit(dst, low)
    }
}
