//! Name-keyed registry of codec constructors.
//!
//! A [`CodecRegistry`] maps a format name such as `"UTF-8"` or `"UCS-2LE"` to
//! a pair of factories. Every lookup builds a fresh, independent decoder or
//! encoder, so one registry can serve any number of streams.
//!
//! The registry is an ordinary value: build it once with
//! [`CodecRegistry::with_builtin`] and pass it by reference. Use
//! [`SharedCodecRegistry`] when codecs must be registered while other
//! threads are already looking them up.

pub mod builtin;
pub mod config;
pub mod error;
pub mod registry;
pub mod shared;

pub use builtin::{register_builtin, BUILTIN_CODECS};
pub use config::RegistryConfig;
pub use error::{RegistryError, Result};
pub use registry::{CodecInfo, CodecRegistry, DecoderFactory, EncoderFactory};
pub use shared::SharedCodecRegistry;
