use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};
use unirecode_codec::{Decoder, Encoder};

use crate::builtin::register_builtin;
use crate::config::RegistryConfig;
use crate::error::{RegistryError, Result};

/// Builds a fresh decoder for one stream.
pub type DecoderFactory = Arc<dyn Fn() -> Box<dyn Decoder> + Send + Sync>;

/// Builds a fresh encoder for one stream.
pub type EncoderFactory = Arc<dyn Fn() -> Box<dyn Encoder> + Send + Sync>;

#[derive(Clone)]
struct Registration {
    description: String,
    decoder: DecoderFactory,
    encoder: EncoderFactory,
}

/// A registered codec name and its description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecInfo<'a> {
    pub name: &'a str,
    pub description: &'a str,
}

/// Case-sensitive map from format name to decoder and encoder factories.
#[derive(Clone, Default)]
pub struct CodecRegistry {
    codecs: HashMap<String, Registration>,
    config: RegistryConfig,
}

impl CodecRegistry {
    /// Create an empty registry with default config.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create an empty registry with explicit config.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            codecs: HashMap::new(),
            config,
        }
    }

    /// Create a registry holding every built-in codec.
    pub fn with_builtin() -> Self {
        Self::with_builtin_and_config(RegistryConfig::default())
    }

    /// Create a registry holding every built-in codec, with explicit config.
    pub fn with_builtin_and_config(config: RegistryConfig) -> Self {
        let mut registry = Self::with_config(config);
        register_builtin(&mut registry);
        registry
    }

    /// Register a codec under `name`, replacing any existing entry.
    pub fn register<D, E>(&mut self, name: impl Into<String>, decoder: D, encoder: E)
    where
        D: Fn() -> Box<dyn Decoder> + Send + Sync + 'static,
        E: Fn() -> Box<dyn Encoder> + Send + Sync + 'static,
    {
        self.register_with_description(name, "", decoder, encoder);
    }

    /// Register a codec with a human-readable description.
    pub fn register_with_description<D, E>(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        decoder: D,
        encoder: E,
    ) where
        D: Fn() -> Box<dyn Decoder> + Send + Sync + 'static,
        E: Fn() -> Box<dyn Encoder> + Send + Sync + 'static,
    {
        let name = name.into();
        let registration = Registration {
            description: description.into(),
            decoder: Arc::new(decoder),
            encoder: Arc::new(encoder),
        };

        if self.codecs.insert(name.clone(), registration).is_some() {
            warn!(codec = %name, "codec registration replaced");
        } else {
            debug!(codec = %name, "codec registered");
        }
    }

    /// Build a fresh decoder for `name`.
    pub fn decoder(&self, name: &str) -> Result<Box<dyn Decoder>> {
        let (resolved, registration) = self
            .resolve(name)
            .ok_or_else(|| RegistryError::UnknownDecoder(name.to_string()))?;
        debug!(codec = resolved, "decoder created");
        Ok((registration.decoder)())
    }

    /// Build a fresh encoder for `name`.
    pub fn encoder(&self, name: &str) -> Result<Box<dyn Encoder>> {
        let (resolved, registration) = self
            .resolve(name)
            .ok_or_else(|| RegistryError::UnknownEncoder(name.to_string()))?;
        debug!(codec = resolved, "encoder created");
        Ok((registration.encoder)())
    }

    /// The decoder factory for `name`, for callers that build many instances.
    pub fn decoder_factory(&self, name: &str) -> Result<DecoderFactory> {
        self.resolve(name)
            .map(|(_, registration)| Arc::clone(&registration.decoder))
            .ok_or_else(|| RegistryError::UnknownDecoder(name.to_string()))
    }

    /// The encoder factory for `name`, for callers that build many instances.
    pub fn encoder_factory(&self, name: &str) -> Result<EncoderFactory> {
        self.resolve(name)
            .map(|(_, registration)| Arc::clone(&registration.encoder))
            .ok_or_else(|| RegistryError::UnknownEncoder(name.to_string()))
    }

    /// Check if a codec is registered under `name`, honoring the lookup config.
    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    /// Description of the codec registered under `name`.
    pub fn description(&self, name: &str) -> Option<&str> {
        self.resolve(name)
            .map(|(_, registration)| registration.description.as_str())
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.codecs.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Registered codecs with their descriptions, sorted by name.
    pub fn codecs(&self) -> Vec<CodecInfo<'_>> {
        let mut codecs: Vec<CodecInfo<'_>> = self
            .codecs
            .iter()
            .map(|(name, registration)| CodecInfo {
                name,
                description: &registration.description,
            })
            .collect();
        codecs.sort_unstable_by(|a, b| a.name.cmp(b.name));
        codecs
    }

    pub fn len(&self) -> usize {
        self.codecs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }

    /// Get registry configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    fn resolve(&self, name: &str) -> Option<(&str, &Registration)> {
        if let Some((key, registration)) = self.codecs.get_key_value(name) {
            return Some((key.as_str(), registration));
        }
        if !self.config.case_insensitive_lookup {
            return None;
        }
        // Smallest matching key keeps the choice deterministic.
        self.codecs
            .iter()
            .filter(|(key, _)| key.eq_ignore_ascii_case(name))
            .min_by(|(a, _), (b, _)| a.cmp(b))
            .map(|(key, registration)| (key.as_str(), registration))
    }
}

impl fmt::Debug for CodecRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodecRegistry")
            .field("codecs", &self.names())
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use unirecode_codec::{recode, AsciiDecoder, AsciiEncoder, CodePoint, Utf8Decoder};

    use super::*;

    fn ascii_registry() -> CodecRegistry {
        let mut registry = CodecRegistry::new();
        registry.register_with_description(
            "ASCII",
            "7-bit ASCII",
            || -> Box<dyn Decoder> { Box::new(AsciiDecoder::new()) },
            || -> Box<dyn Encoder> { Box::new(AsciiEncoder::new()) },
        );
        registry
    }

    #[test]
    fn register_and_lookup() {
        let registry = ascii_registry();

        let mut decoder = registry.decoder("ASCII").unwrap();
        let mut src: &[u8] = b"x";
        assert_eq!(decoder.decode(&mut src).unwrap(), Some(CodePoint::new(0x78)));

        let mut encoder = registry.encoder("ASCII").unwrap();
        let mut out = Vec::new();
        encoder.encode(&mut out, CodePoint::new(0x78)).unwrap();
        assert_eq!(out, b"x");

        assert_eq!(registry.description("ASCII"), Some("7-bit ASCII"));
    }

    #[test]
    fn unknown_names_fail() {
        let registry = ascii_registry();
        assert!(matches!(
            registry.decoder("EBCDIC"),
            Err(RegistryError::UnknownDecoder(name)) if name == "EBCDIC"
        ));
        assert!(matches!(
            registry.encoder("EBCDIC"),
            Err(RegistryError::UnknownEncoder(name)) if name == "EBCDIC"
        ));
    }

    #[test]
    fn lookup_is_case_sensitive_by_default() {
        let registry = ascii_registry();
        assert!(!registry.contains("ascii"));
        assert!(registry.decoder("ascii").is_err());
    }

    #[test]
    fn case_insensitive_lookup_is_opt_in() {
        let mut registry = CodecRegistry::with_config(RegistryConfig {
            case_insensitive_lookup: true,
        });
        registry.register(
            "ASCII",
            || -> Box<dyn Decoder> { Box::new(AsciiDecoder::new()) },
            || -> Box<dyn Encoder> { Box::new(AsciiEncoder::new()) },
        );
        assert!(registry.contains("ascii"));
        assert!(registry.encoder("Ascii").is_ok());
        assert!(!registry.contains("ascii7"));
    }

    #[test]
    fn register_overwrites_existing_entry() {
        let mut registry = ascii_registry();
        registry.register(
            "ASCII",
            || -> Box<dyn Decoder> { Box::new(Utf8Decoder::new()) },
            || -> Box<dyn Encoder> { Box::new(AsciiEncoder::new()) },
        );
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.description("ASCII"), Some(""));

        // The replacement decoder reads multi-byte UTF-8.
        let mut decoder = registry.decoder("ASCII").unwrap();
        let mut src: &[u8] = "∠".as_bytes();
        assert_eq!(decoder.decode(&mut src).unwrap(), Some(CodePoint::new(0x2220)));
    }

    #[test]
    fn each_lookup_returns_an_independent_instance() {
        let registry = CodecRegistry::with_builtin();

        // The first encoder writes its BOM; a fresh one must write it again.
        for _ in 0..2 {
            let mut encoder = registry.encoder("UCS-2BE").unwrap();
            let mut out = Vec::new();
            encoder.encode(&mut out, CodePoint::new(0x41)).unwrap();
            assert_eq!(out, [0xFE, 0xFF, 0x00, 0x41]);
        }
    }

    #[test]
    fn factories_build_working_pipelines() {
        let registry = CodecRegistry::with_builtin();
        let make_decoder = registry.decoder_factory("UTF-16").unwrap();
        let make_encoder = registry.encoder_factory("UTF-8").unwrap();

        for _ in 0..3 {
            let mut out = Vec::new();
            let mut src: &[u8] = &[0xFE, 0xFF, 0xD8, 0x3D, 0xDC, 0x07];
            recode(
                make_decoder().as_mut(),
                make_encoder().as_mut(),
                &mut src,
                &mut out,
            )
            .unwrap();
            assert_eq!(out, "🐇".as_bytes());
        }
    }

    #[test]
    fn names_and_codecs_are_sorted() {
        let registry = CodecRegistry::with_builtin();
        let names = registry.names();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);

        let codecs = registry.codecs();
        assert_eq!(codecs.len(), registry.len());
        assert_eq!(codecs[0].name, names[0]);
        assert!(codecs.iter().all(|info| !info.description.is_empty()));
    }

    #[test]
    fn debug_lists_names() {
        let rendered = format!("{:?}", ascii_registry());
        assert!(rendered.contains("ASCII"));
    }
}
