use std::io::Write;

use crate::codepoint::CodePoint;
use crate::error::{CodecError, Result};
use crate::traits::{ByteSource, Decoder, Encoder};

/// Highest code point representable in 7-bit ASCII.
pub const ASCII_MAX: u32 = 0x7F;

/// Decodes one byte per character.
///
/// Bytes above 0x7F are passed through as code points 0x80-0xFF rather than
/// rejected.
#[derive(Debug, Default, Clone)]
pub struct AsciiDecoder;

impl AsciiDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl Decoder for AsciiDecoder {
    fn decode(&mut self, src: &mut dyn ByteSource) -> Result<Option<CodePoint>> {
        Ok(src.next_byte()?.map(CodePoint::from))
    }
}

/// Encodes code points up to 0x7F as a single byte.
#[derive(Debug, Default, Clone)]
pub struct AsciiEncoder;

impl AsciiEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl Encoder for AsciiEncoder {
    fn encode(&mut self, dst: &mut dyn Write, cp: CodePoint) -> Result<()> {
        if cp.value() > ASCII_MAX {
            return Err(CodecError::OutOfRange {
                codepoint: cp,
                encoding: "ASCII",
            });
        }
        dst.write_all(&[cp.value() as u8])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{decode_all, encode_str};

    #[test]
    fn decode_reads_one_byte_per_character() {
        let mut decoder = AsciiDecoder::new();
        assert_eq!(decode_all(&mut decoder, b"x\n").unwrap(), vec![0x78, 0x0A]);
    }

    #[test]
    fn decode_passes_high_bytes_through() {
        let mut decoder = AsciiDecoder::new();
        assert_eq!(decode_all(&mut decoder, &[0xE9]).unwrap(), vec![0xE9]);
    }

    #[test]
    fn encode_writes_single_byte() {
        let mut encoder = AsciiEncoder::new();
        assert_eq!(encode_str(&mut encoder, "x").unwrap(), b"x");
    }

    #[test]
    fn encode_rejects_non_ascii() {
        let mut encoder = AsciiEncoder::new();
        let mut out = Vec::new();
        let err = encoder.encode(&mut out, CodePoint::new(0x80)).unwrap_err();
        assert!(matches!(err, CodecError::OutOfRange { encoding: "ASCII", .. }));
        assert!(out.is_empty());
    }

    #[test]
    fn roundtrip_seven_bit_range() {
        let mut encoder = AsciiEncoder::new();
        let mut decoder = AsciiDecoder::new();
        let mut wire = Vec::new();
        for value in 0..=ASCII_MAX {
            encoder.encode(&mut wire, CodePoint::new(value)).unwrap();
        }
        let decoded = decode_all(&mut decoder, &wire).unwrap();
        assert_eq!(decoded, (0..=ASCII_MAX).collect::<Vec<_>>());
    }
}
