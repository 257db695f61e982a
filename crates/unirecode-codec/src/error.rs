use crate::codepoint::CodePoint;

/// Errors that can occur while decoding or encoding a single character.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The stream ended partway through a character.
    #[error("short read ({actual} of {expected} bytes before end of input)")]
    ShortRead { expected: usize, actual: usize },

    /// A UTF-8 lead or continuation byte has the wrong bit pattern.
    #[error("invalid character (unexpected byte 0x{byte:02X})")]
    InvalidSequence { byte: u8 },

    /// A UTF-16 high surrogate was not followed by a low surrogate.
    #[error("invalid UTF-16 surrogate pair (0x{high:04X} 0x{low:04X})")]
    InvalidSurrogatePair { high: u16, low: u16 },

    /// UTF-32 input without a BOM and without a zero byte at either end.
    #[error("invalid UTF-32 character (unrecognized byte order in {bytes:02X?})")]
    UnrecognizedByteOrder { bytes: [u8; 4] },

    /// The code point cannot be represented in the target encoding.
    #[error("character out of range ({codepoint} cannot be encoded as {encoding})")]
    OutOfRange {
        codepoint: CodePoint,
        encoding: &'static str,
    },

    /// An I/O error occurred on the byte source or sink.
    #[error("codec I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CodecError {
    /// True when the input bytes, not the environment, caused the error.
    pub fn is_data_error(&self) -> bool {
        !matches!(self, CodecError::Io(_))
    }
}

pub type Result<T> = std::result::Result<T, CodecError>;
