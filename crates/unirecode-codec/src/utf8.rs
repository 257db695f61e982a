use std::io::Write;

use crate::codepoint::CodePoint;
use crate::error::{CodecError, Result};
use crate::traits::{ByteSource, Decoder, Encoder};

/// Decodes variable-width UTF-8 sequences of 1 to 4 bytes.
///
/// Lead and continuation bytes are checked for their bit patterns. Overlong
/// forms and encoded surrogates are not rejected.
#[derive(Debug, Default, Clone)]
pub struct Utf8Decoder;

impl Utf8Decoder {
    pub fn new() -> Self {
        Self
    }
}

impl Decoder for Utf8Decoder {
    fn decode(&mut self, src: &mut dyn ByteSource) -> Result<Option<CodePoint>> {
        let Some(lead) = src.next_byte()? else {
            return Ok(None);
        };

        let len = sequence_len(lead).ok_or(CodecError::InvalidSequence { byte: lead })?;
        if len == 1 {
            return Ok(Some(CodePoint::from(lead)));
        }

        // Payload bits left after the length prefix: 5, 4 or 3.
        let mut value = u32::from(lead & (0x7F >> len));

        for read in 1..len {
            let byte = src.next_byte()?.ok_or(CodecError::ShortRead {
                expected: len,
                actual: read,
            })?;
            if !is_continuation(byte) {
                return Err(CodecError::InvalidSequence { byte });
            }
            value = (value << 6) | u32::from(byte & 0x3F);
        }

        Ok(Some(CodePoint::new(value)))
    }
}

/// Total sequence length announced by a lead byte, or `None` for a byte that
/// cannot start a sequence (`10xxxxxx` or `11111xxx`).
pub fn sequence_len(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        _ if lead & 0xE0 == 0xC0 => Some(2),
        _ if lead & 0xF0 == 0xE0 => Some(3),
        _ if lead & 0xF8 == 0xF0 => Some(4),
        _ => None,
    }
}

fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Encodes code points up to U+10FFFF as UTF-8.
#[derive(Debug, Default, Clone)]
pub struct Utf8Encoder;

impl Utf8Encoder {
    pub fn new() -> Self {
        Self
    }
}

impl Encoder for Utf8Encoder {
    fn encode(&mut self, dst: &mut dyn Write, cp: CodePoint) -> Result<()> {
        let mut buf = [0u8; 4];
        let value = cp.value();
        let len = match value {
            0..=0x7F => {
                buf[0] = value as u8;
                1
            }
            0x80..=0x7FF => {
                buf[0] = 0xC0 | (value >> 6) as u8;
                buf[1] = continuation(value);
                2
            }
            0x800..=0xFFFF => {
                buf[0] = 0xE0 | (value >> 12) as u8;
                buf[1] = continuation(value >> 6);
                buf[2] = continuation(value);
                3
            }
            0x10000..=0x10FFFF => {
                buf[0] = 0xF0 | (value >> 18) as u8;
                buf[1] = continuation(value >> 12);
                buf[2] = continuation(value >> 6);
                buf[3] = continuation(value);
                4
            }
            _ => {
                return Err(CodecError::OutOfRange {
                    codepoint: cp,
                    encoding: "UTF-8",
                })
            }
        };

        dst.write_all(&buf[..len])?;
        Ok(())
    }
}

fn continuation(bits: u32) -> u8 {
    0x80 | (bits & 0x3F) as u8
}
