/// Errors that can occur during codec lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// No codec is registered under the requested decoder name.
    #[error("no decoder named {0}")]
    UnknownDecoder(String),

    /// No codec is registered under the requested encoder name.
    #[error("no encoder named {0}")]
    UnknownEncoder(String),
}

pub type Result<T> = std::result::Result<T, RegistryError>;
