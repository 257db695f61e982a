//! Streaming character-encoding codecs.
//!
//! Every format is a pair of independent state machines:
//! - a [`Decoder`] pulls bytes from a [`ByteSource`] and yields one
//!   [`CodePoint`] per call
//! - an [`Encoder`] writes the serialized form of one code point to a sink
//!
//! Instances are cheap, single-stream objects. The only state they carry is a
//! latched [`ByteOrder`] and a pending byte-order-mark flag.
//!
//! [`recode()`] drives one decoder and one encoder over a stream.

pub mod ascii;
pub mod byte_order;
pub mod codepoint;
pub mod error;
pub mod recode;
pub mod traits;
pub mod ucs2;
pub mod utf16;
pub mod utf32;
pub mod utf8;

pub use ascii::{AsciiDecoder, AsciiEncoder};
pub use byte_order::ByteOrder;
pub use codepoint::CodePoint;
pub use error::{CodecError, Result};
pub use recode::{
    recode, recode_stream, RecodeConfig, RecodeError, RecodeStats, DEFAULT_BUFFER_SIZE,
};
pub use traits::{read_unit, ByteSource, Decoder, Encoder};
pub use ucs2::{Ucs2Decoder, Ucs2Encoder};
pub use utf16::{Utf16Decoder, Utf16Encoder};
pub use utf32::{Utf32Decoder, Utf32Encoder};
pub use utf8::{Utf8Decoder, Utf8Encoder};

#[cfg(test)]
mod testing;
