use std::io::{BufRead, ErrorKind, Write};

use crate::codepoint::CodePoint;
use crate::error::{CodecError, Result};

/// A byte-at-a-time input source.
///
/// Implemented for every [`BufRead`], so `&[u8]`, `Cursor<Vec<u8>>` and
/// `BufReader<File>` all work directly. Callers are responsible for buffering.
pub trait ByteSource {
    /// Read the next byte, or `None` at end of input.
    fn next_byte(&mut self) -> std::io::Result<Option<u8>>;
}

impl<R: BufRead + ?Sized> ByteSource for R {
    fn next_byte(&mut self) -> std::io::Result<Option<u8>> {
        loop {
            let byte = match self.fill_buf() {
                Ok(buf) => buf.first().copied(),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            };
            if byte.is_some() {
                self.consume(1);
            }
            return Ok(byte);
        }
    }
}

/// Fill `buf` with one fixed-width unit.
///
/// Returns `Ok(false)` if the input ended before the first byte, and
/// [`CodecError::ShortRead`] if it ended after at least one.
pub fn read_unit(src: &mut dyn ByteSource, buf: &mut [u8]) -> Result<bool> {
    for (filled, slot) in buf.iter_mut().enumerate() {
        match src.next_byte()? {
            Some(byte) => *slot = byte,
            None if filled == 0 => return Ok(false),
            None => {
                return Err(CodecError::ShortRead {
                    expected: buf.len(),
                    actual: filled,
                })
            }
        }
    }
    Ok(true)
}

/// Reads one character at a time from a byte source.
pub trait Decoder: Send {
    /// Decode the next character.
    ///
    /// Returns `Ok(None)` on a clean end of stream, i.e. when no byte of a new
    /// character has been read. Bytes consumed toward a malformed character
    /// are reported in the error, never retried.
    fn decode(&mut self, src: &mut dyn ByteSource) -> Result<Option<CodePoint>>;
}

/// Writes the serialized form of one character to a byte sink.
pub trait Encoder: Send {
    /// Encode `cp` completely, or fail without writing it if the format
    /// cannot represent it.
    fn encode(&mut self, dst: &mut dyn Write, cp: CodePoint) -> Result<()>;
}
