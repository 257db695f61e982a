use std::sync::Arc;

use parking_lot::RwLock;
use unirecode_codec::{Decoder, Encoder};

use crate::error::Result;
use crate::registry::CodecRegistry;

/// A [`CodecRegistry`] behind a read-write lock, cheap to clone across
/// threads.
///
/// Lookups take the read lock and only hold it while a factory runs, so
/// concurrent transcodes never block each other. Registration takes the
/// write lock.
#[derive(Debug, Clone, Default)]
pub struct SharedCodecRegistry {
    inner: Arc<RwLock<CodecRegistry>>,
}

impl SharedCodecRegistry {
    pub fn new() -> Self {
        Self::from(CodecRegistry::new())
    }

    pub fn with_builtin() -> Self {
        Self::from(CodecRegistry::with_builtin())
    }

    /// Register a codec under `name`, replacing any existing entry.
    pub fn register<D, E>(&self, name: impl Into<String>, decoder: D, encoder: E)
    where
        D: Fn() -> Box<dyn Decoder> + Send + Sync + 'static,
        E: Fn() -> Box<dyn Encoder> + Send + Sync + 'static,
    {
        self.inner.write().register(name, decoder, encoder);
    }

    pub fn register_with_description<D, E>(
        &self,
        name: impl Into<String>,
        description: impl Into<String>,
        decoder: D,
        encoder: E,
    ) where
        D: Fn() -> Box<dyn Decoder> + Send + Sync + 'static,
        E: Fn() -> Box<dyn Encoder> + Send + Sync + 'static,
    {
        self.inner
            .write()
            .register_with_description(name, description, decoder, encoder);
    }

    pub fn decoder(&self, name: &str) -> Result<Box<dyn Decoder>> {
        self.inner.read().decoder(name)
    }

    pub fn encoder(&self, name: &str) -> Result<Box<dyn Encoder>> {
        self.inner.read().encoder(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.inner.read().contains(name)
    }

    /// Registered names, sorted. Owned, since the lock is released on return.
    pub fn names(&self) -> Vec<String> {
        self.inner
            .read()
            .names()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Run `f` against the registry under the read lock.
    pub fn with_registry<T>(&self, f: impl FnOnce(&CodecRegistry) -> T) -> T {
        f(&self.inner.read())
    }
}

impl From<CodecRegistry> for SharedCodecRegistry {
    fn from(registry: CodecRegistry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use unirecode_codec::{recode, AsciiDecoder, AsciiEncoder};

    use super::*;
    use crate::builtin::BUILTIN_CODECS;

    #[test]
    fn concurrent_lookups_share_one_registry() {
        let shared = SharedCodecRegistry::with_builtin();

        thread::scope(|scope| {
            for name in BUILTIN_CODECS {
                let shared = shared.clone();
                scope.spawn(move || {
                    let mut decoder = shared.decoder("UTF-8").unwrap();
                    let mut encoder = shared.encoder(name).unwrap();
                    let mut src: &[u8] = b"rabbit";
                    let mut out = Vec::new();
                    let stats =
                        recode(decoder.as_mut(), encoder.as_mut(), &mut src, &mut out).unwrap();
                    assert_eq!(stats.characters, 6);
                    assert!(!out.is_empty());
                });
            }
        });
    }

    #[test]
    fn registration_is_visible_to_clones() {
        let shared = SharedCodecRegistry::new();
        let clone = shared.clone();
        assert!(!clone.contains("ASCII"));

        shared.register(
            "ASCII",
            || -> Box<dyn Decoder> { Box::new(AsciiDecoder::new()) },
            || -> Box<dyn Encoder> { Box::new(AsciiEncoder::new()) },
        );

        assert!(clone.contains("ASCII"));
        assert_eq!(clone.names(), vec!["ASCII".to_string()]);
        assert!(clone.encoder("ASCII").is_ok());
    }

    #[test]
    fn with_registry_exposes_descriptions() {
        let shared = SharedCodecRegistry::with_builtin();
        let description = shared.with_registry(|registry| {
            registry.description("UTF-8").map(str::to_string)
        });
        assert!(description.is_some_and(|d| !d.is_empty()));
    }
}
