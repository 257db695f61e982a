/// Controls codec lookup behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistryConfig {
    /// When true, a name with no exact match falls back to an ASCII
    /// case-insensitive match (`utf-8` finds `UTF-8`). Exact matches always
    /// win.
    pub case_insensitive_lookup: bool,
}
