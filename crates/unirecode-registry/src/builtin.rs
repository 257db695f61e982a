//! Registrations for the formats shipped with unirecode.

use unirecode_codec::{
    AsciiDecoder, AsciiEncoder, Decoder, Encoder, Ucs2Decoder, Ucs2Encoder, Utf16Decoder,
    Utf16Encoder, Utf32Decoder, Utf32Encoder, Utf8Decoder, Utf8Encoder,
};

use crate::registry::CodecRegistry;

/// Every built-in codec name.
pub const BUILTIN_CODECS: [&str; 14] = [
    "ASCII", "UTF-8", "UCS-2", "UCS-2LE", "UCS-2BE", "UTF-16", "UTF-16LE", "UTF-16BE", "UTF-32",
    "UTF-32LE", "UTF-32BE", "UCS-4", "UCS-4LE", "UCS-4BE",
];

fn decoder<D: Decoder + 'static>(make: fn() -> D) -> impl Fn() -> Box<dyn Decoder> + Send + Sync {
    move || -> Box<dyn Decoder> { Box::new(make()) }
}

fn encoder<E: Encoder + 'static>(make: fn() -> E) -> impl Fn() -> Box<dyn Encoder> + Send + Sync {
    move || -> Box<dyn Encoder> { Box::new(make()) }
}

/// Register every built-in codec into `registry`.
pub fn register_builtin(registry: &mut CodecRegistry) {
    registry.register_with_description(
        "ASCII",
        "one byte per character; encoder rejects code points above 0x7F",
        decoder(AsciiDecoder::new),
        encoder(AsciiEncoder::new),
    );
    registry.register_with_description(
        "UTF-8",
        "1-4 byte variable-width Unicode",
        decoder(Utf8Decoder::new),
        encoder(Utf8Encoder::new),
    );

    registry.register_with_description(
        "UCS-2",
        "2-byte BMP-only; decoder sniffs a BOM, encoder writes little-endian without BOM",
        decoder(Ucs2Decoder::new),
        encoder(Ucs2Encoder::new),
    );
    registry.register_with_description(
        "UCS-2LE",
        "2-byte BMP-only, little-endian; encoder writes a BOM",
        decoder(Ucs2Decoder::little_endian),
        encoder(Ucs2Encoder::little_endian),
    );
    registry.register_with_description(
        "UCS-2BE",
        "2-byte BMP-only, big-endian; encoder writes a BOM",
        decoder(Ucs2Decoder::big_endian),
        encoder(Ucs2Encoder::big_endian),
    );

    registry.register_with_description(
        "UTF-16",
        "surrogate pairs; decoder sniffs a BOM, encoder writes little-endian without BOM",
        decoder(Utf16Decoder::new),
        encoder(Utf16Encoder::new),
    );
    registry.register_with_description(
        "UTF-16LE",
        "16-bit units with surrogate pairs, little-endian; encoder writes a BOM",
        decoder(Utf16Decoder::little_endian),
        encoder(Utf16Encoder::little_endian),
    );
    registry.register_with_description(
        "UTF-16BE",
        "16-bit units with surrogate pairs, big-endian; encoder writes a BOM",
        decoder(Utf16Decoder::big_endian),
        encoder(Utf16Encoder::big_endian),
    );

    for (utf32, ucs4) in UTF32_SYNONYMS {
        for name in [utf32, ucs4] {
            register_utf32(registry, name);
        }
    }
}

/// UTF-32 names paired with their UCS-4 synonyms.
const UTF32_SYNONYMS: [(&str, &str); 3] = [
    ("UTF-32", "UCS-4"),
    ("UTF-32LE", "UCS-4LE"),
    ("UTF-32BE", "UCS-4BE"),
];

fn register_utf32(registry: &mut CodecRegistry, name: &str) {
    let (description, make_decoder, make_encoder): (
        &str,
        fn() -> Utf32Decoder,
        fn() -> Utf32Encoder,
    ) = match name {
        "UTF-32LE" | "UCS-4LE" => (
            "4-byte fixed width, little-endian",
            Utf32Decoder::little_endian,
            Utf32Encoder::little_endian,
        ),
        "UTF-32BE" | "UCS-4BE" => (
            "4-byte fixed width, big-endian",
            Utf32Decoder::big_endian,
            Utf32Encoder::big_endian,
        ),
        _ => (
            "4-byte fixed width; decoder sniffs order, encoder writes little-endian without BOM",
            Utf32Decoder::new,
            Utf32Encoder::new,
        ),
    };
    registry.register_with_description(
        name,
        description,
        decoder(make_decoder),
        encoder(make_encoder),
    );
}

#[cfg(test)]
mod tests {
    use unirecode_codec::{recode, CodecError, CodePoint, RecodeError};

    use super::*;

    fn transcode(registry: &CodecRegistry, from: &str, to: &str, input: &[u8]) -> Vec<u8> {
        let mut decoder = registry.decoder(from).unwrap();
        let mut encoder = registry.encoder(to).unwrap();
        let mut src = input;
        let mut out = Vec::new();
        recode(decoder.as_mut(), encoder.as_mut(), &mut src, &mut out).unwrap();
        out
    }

    #[test]
    fn every_builtin_name_resolves() {
        let registry = CodecRegistry::with_builtin();
        assert_eq!(registry.len(), BUILTIN_CODECS.len());
        for name in BUILTIN_CODECS {
            assert!(registry.decoder(name).is_ok(), "decoder {name}");
            assert!(registry.encoder(name).is_ok(), "encoder {name}");
        }
    }

    #[test]
    fn ucs4_names_share_utf32_behavior() {
        let registry = CodecRegistry::with_builtin();
        for (utf32, ucs4) in UTF32_SYNONYMS {
            assert_eq!(
                transcode(&registry, "UTF-8", utf32, "A🐇".as_bytes()),
                transcode(&registry, "UTF-8", ucs4, "A🐇".as_bytes()),
            );
            assert_eq!(registry.description(utf32), registry.description(ucs4));
        }
    }

    #[test]
    fn byte_order_variants_differ() {
        let registry = CodecRegistry::with_builtin();
        assert_eq!(transcode(&registry, "UTF-8", "UCS-2", b"A"), [0x41, 0x00]);
        assert_eq!(transcode(&registry, "UTF-8", "UCS-2LE", b"A"), [0xFF, 0xFE, 0x41, 0x00]);
        assert_eq!(transcode(&registry, "UTF-8", "UCS-2BE", b"A"), [0xFE, 0xFF, 0x00, 0x41]);
        assert_eq!(transcode(&registry, "UTF-8", "UTF-32LE", b"A"), [0x41, 0, 0, 0]);
        assert_eq!(transcode(&registry, "UTF-8", "UTF-32BE", b"A"), [0, 0, 0, 0x41]);
    }

    #[test]
    fn plain_utf32_encoder_is_little_endian() {
        let registry = CodecRegistry::with_builtin();
        for name in ["UTF-32", "UCS-4"] {
            assert_eq!(transcode(&registry, "UTF-8", name, b"A"), [0x41, 0, 0, 0]);
        }

        let wire = transcode(&registry, "UTF-8", "UTF-32", "A".as_bytes());
        assert_eq!(transcode(&registry, "UTF-32", "UTF-8", &wire), b"A");
    }

    #[test]
    fn plain_utf32_pair_misreads_zero_low_byte() {
        let registry = CodecRegistry::with_builtin();
        // U+0100 is `00 01 00 00`; the sniffing decoder infers big-endian.
        let wire = transcode(&registry, "UTF-8", "UTF-32", "Ā".as_bytes());
        assert_eq!(
            transcode(&registry, "UTF-32", "UTF-8", &wire),
            "\u{10000}".as_bytes()
        );
        assert_eq!(transcode(&registry, "UTF-32LE", "UTF-8", &wire), "Ā".as_bytes());
    }

    #[test]
    fn ucs2_rejects_supplementary_characters() {
        let registry = CodecRegistry::with_builtin();
        let mut decoder = registry.decoder("UTF-8").unwrap();
        let mut encoder = registry.encoder("UCS-2").unwrap();
        let mut src = "a🐇".as_bytes();
        let mut out = Vec::new();

        let err = recode(decoder.as_mut(), encoder.as_mut(), &mut src, &mut out).unwrap_err();
        assert!(matches!(
            err,
            RecodeError::Encode {
                position: 1,
                source: CodecError::OutOfRange { .. }
            }
        ));
        assert_eq!(out, [0x61, 0x00]);
    }

    #[test]
    fn utf16_decoder_sniffs_bom() {
        let registry = CodecRegistry::with_builtin();
        let mut decoder = registry.decoder("UTF-16").unwrap();
        let mut src: &[u8] = &[0xFE, 0xFF, 0x00, 0x41];
        assert_eq!(decoder.decode(&mut src).unwrap(), Some(CodePoint::new(0x41)));
    }
}
