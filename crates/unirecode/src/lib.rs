//! Streaming character-encoding transcoder.
//!
//! unirecode reads a byte stream in one Unicode encoding and writes it in
//! another, one character at a time, without materializing the whole text.
//!
//! # Crate Structure
//!
//! - [`codec`]: decoders, encoders and the [`codec::recode`] pipeline
//! - [`registry`]: name-keyed lookup of the built-in codecs
//!
//! ```
//! use unirecode::registry::CodecRegistry;
//!
//! let registry = CodecRegistry::with_builtin();
//! let mut decoder = registry.decoder("UTF-8").unwrap();
//! let mut encoder = registry.encoder("UTF-16BE").unwrap();
//!
//! let mut input: &[u8] = "hi".as_bytes();
//! let mut output = Vec::new();
//! unirecode::codec::recode(decoder.as_mut(), encoder.as_mut(), &mut input, &mut output).unwrap();
//! assert_eq!(output, [0xFE, 0xFF, 0x00, b'h', 0x00, b'i']);
//! ```

/// Re-export codec types.
pub mod codec {
    pub use unirecode_codec::*;
}

/// Re-export registry types.
pub mod registry {
    pub use unirecode_registry::*;
}
