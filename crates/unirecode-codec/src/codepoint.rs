use std::fmt;

/// A single decoded character value.
///
/// Valid Unicode code points lie in `0..=0x10FFFF`, excluding the surrogate
/// range `0xD800..=0xDFFF`. The type itself does not enforce this: permissive
/// decoders (ASCII above 0x7F, UTF-32 without a range check) hand back
/// whatever the input spelled, and encoders decide what they can represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CodePoint(u32);

impl CodePoint {
    /// The byte-order mark, U+FEFF.
    pub const BOM: CodePoint = CodePoint(0xFEFF);

    /// The largest Unicode code point, U+10FFFF.
    pub const MAX: CodePoint = CodePoint(0x10FFFF);

    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    /// True for values in the UTF-16 surrogate range.
    pub const fn is_surrogate(self) -> bool {
        matches!(self.0, 0xD800..=0xDFFF)
    }

    /// True when the value is a Unicode scalar value (in range, not a surrogate).
    pub const fn is_scalar_value(self) -> bool {
        self.0 <= Self::MAX.0 && !self.is_surrogate()
    }

    pub fn to_char(self) -> Option<char> {
        char::from_u32(self.0)
    }
}

impl From<char> for CodePoint {
    fn from(c: char) -> Self {
        Self(c as u32)
    }
}

impl From<u8> for CodePoint {
    fn from(b: u8) -> Self {
        Self(u32::from(b))
    }
}

impl From<u16> for CodePoint {
    fn from(unit: u16) -> Self {
        Self(u32::from(unit))
    }
}

impl From<CodePoint> for u32 {
    fn from(cp: CodePoint) -> Self {
        cp.0
    }
}

impl fmt::Display for CodePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{:04X}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_unicode_notation() {
        assert_eq!(CodePoint::new(0x41).to_string(), "U+0041");
        assert_eq!(CodePoint::new(0x1F407).to_string(), "U+1F407");
    }

    #[test]
    fn scalar_value_excludes_surrogates_and_overflow() {
        assert!(CodePoint::new(0xD7FF).is_scalar_value());
        assert!(!CodePoint::new(0xD800).is_scalar_value());
        assert!(!CodePoint::new(0xDFFF).is_scalar_value());
        assert!(CodePoint::MAX.is_scalar_value());
        assert!(!CodePoint::new(0x110000).is_scalar_value());
    }

    #[test]
    fn char_conversion() {
        assert_eq!(CodePoint::from('∠').value(), 0x2220);
        assert_eq!(CodePoint::new(0x1F407).to_char(), Some('🐇'));
        assert_eq!(CodePoint::new(0xDC00).to_char(), None);
    }
}
