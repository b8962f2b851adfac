//! Character set identifiers.
//!
//! A charset is an opaque, case-insensitive label such as `UTF-8`. Values are
//! stored uppercased so that equality and hashing ignore case.

use crate::error::{Error, Result};
use crate::grammar::{classify_visible, first_invalid};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// A validated, uppercase character set identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Charset(Cow<'static, str>);

impl Charset {
    pub const UTF_8: Charset = Charset::from_static("UTF-8");
    pub const US_ASCII: Charset = Charset::from_static("US-ASCII");
    pub const ISO_8859_1: Charset = Charset::from_static("ISO-8859-1");
    pub const ISO_8859_2: Charset = Charset::from_static("ISO-8859-2");
    pub const ISO_8859_15: Charset = Charset::from_static("ISO-8859-15");
    pub const UTF_16: Charset = Charset::from_static("UTF-16");
    pub const UTF_16BE: Charset = Charset::from_static("UTF-16BE");
    pub const UTF_16LE: Charset = Charset::from_static("UTF-16LE");
    pub const UTF_32: Charset = Charset::from_static("UTF-32");
    pub const WINDOWS_1252: Charset = Charset::from_static("WINDOWS-1252");

    /// Parses a charset from raw header bytes.
    ///
    /// Every byte must be printable US-ASCII; the result is uppercased.
    ///
    /// # Examples
    ///
    /// ```
    /// use mime_header_values::Charset;
    ///
    /// let charset = Charset::parse(b"utf-8").unwrap();
    /// assert_eq!(charset, Charset::UTF_8);
    /// assert_eq!(charset.as_str(), "UTF-8");
    /// ```
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Err(Error::Empty);
        }

        if let Some((byte, reason)) = first_invalid(bytes, classify_visible) {
            return Err(Error::invalid_character(byte, reason, bytes));
        }

        // All bytes are visible ASCII at this point.
        let value: String = bytes.iter().map(|&b| b.to_ascii_uppercase() as char).collect();
        Ok(Charset(Cow::Owned(value)))
    }

    /// Builds a charset from a trusted literal, uppercasing it without validation.
    pub(crate) fn from_literal(value: &str) -> Self {
        Charset(Cow::Owned(value.to_ascii_uppercase()))
    }

    /// Wraps a literal that is already uppercase.
    const fn from_static(value: &'static str) -> Self {
        Charset(Cow::Borrowed(value))
    }

    /// Returns the uppercase identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the canonical wire bytes.
    pub fn serialize(&self) -> Vec<u8> {
        self.0.as_bytes().to_vec()
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Charset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s.as_bytes())
    }
}

impl TryFrom<&[u8]> for Charset {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::parse(bytes)
    }
}

impl TryFrom<&str> for Charset {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s.as_bytes())
    }
}

impl AsRef<str> for Charset {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ByteClass;
    use std::collections::HashSet;

    #[test]
    fn test_parse_uppercases() {
        let charset = Charset::parse(b"iso-8859-1").unwrap();
        assert_eq!(charset.as_str(), "ISO-8859-1");
        assert_eq!(charset, Charset::ISO_8859_1);
    }

    #[test]
    fn test_case_insensitive_equality_and_hash() {
        let a: Charset = "utf-8".parse().unwrap();
        let b: Charset = "UTF-8".parse().unwrap();
        let c: Charset = "Utf-8".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);

        let set: HashSet<Charset> = [a, b, c, Charset::UTF_8].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(Charset::parse(b""), Err(Error::Empty)));
    }

    #[test]
    fn test_parse_invalid_characters() {
        match Charset::parse(&[0x00]) {
            Err(Error::InvalidCharacter { byte, reason, .. }) => {
                assert_eq!(byte, 0x00);
                assert_eq!(reason, ByteClass::Control);
            }
            other => panic!("unexpected result: {:?}", other),
        }

        assert!(matches!(
            Charset::parse(b"utf 8"),
            Err(Error::InvalidCharacter { byte: b' ', reason: ByteClass::Space, .. })
        ));
        assert!(matches!(
            Charset::parse("utf-\u{e9}".as_bytes()),
            Err(Error::InvalidCharacter { reason: ByteClass::NonAscii, .. })
        ));
    }

    #[test]
    fn test_round_trip_constants() {
        for charset in [
            Charset::UTF_8,
            Charset::US_ASCII,
            Charset::ISO_8859_1,
            Charset::ISO_8859_2,
            Charset::ISO_8859_15,
            Charset::UTF_16,
            Charset::UTF_16BE,
            Charset::UTF_16LE,
            Charset::UTF_32,
            Charset::WINDOWS_1252,
        ] {
            assert_eq!(Charset::parse(&charset.serialize()).unwrap(), charset);
        }
    }

    #[test]
    fn test_from_literal_and_display() {
        let charset = Charset::from_literal("windows-1252");
        assert_eq!(charset, Charset::WINDOWS_1252);
        assert_eq!(charset.to_string(), "WINDOWS-1252");
        assert_eq!(charset.serialize(), b"WINDOWS-1252");
    }
}
