//! Content-Type parameter names.

use crate::error::{Error, Result};
use crate::grammar::{classify_token_byte, first_invalid};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// A case-insensitive parameter name (an RFC 2045 token).
///
/// The name is lowercased on construction, so the derived equality, hashing
/// and ordering are all case-insensitive. Used as the key of
/// [`ContentType`](crate::ContentType) parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(Cow<'static, str>);

impl Name {
    pub const CHARSET: Name = Name(Cow::Borrowed("charset"));
    pub const BOUNDARY: Name = Name(Cow::Borrowed("boundary"));
    /// Deprecated by RFC 2183 in favor of `Content-Disposition; filename`.
    pub const NAME: Name = Name(Cow::Borrowed("name"));

    /// Parses a parameter name, rejecting anything that is not a token.
    ///
    /// # Examples
    ///
    /// ```
    /// use mime_header_values::parameter::Name;
    ///
    /// let name = Name::parse(b"Charset").unwrap();
    /// assert_eq!(name, Name::CHARSET);
    /// assert!(Name::parse(b"file name").is_err());
    /// ```
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Err(Error::Empty);
        }

        if let Some((byte, reason)) = first_invalid(bytes, classify_token_byte) {
            return Err(Error::invalid_character(byte, reason, bytes));
        }

        let value: String = bytes.iter().map(|&b| b.to_ascii_lowercase() as char).collect();
        Ok(Name(Cow::Owned(value)))
    }

    /// Lowercases a trusted name without checking token rules.
    pub(crate) fn from_literal(value: &str) -> Self {
        Name(Cow::Owned(value.to_ascii_lowercase()))
    }

    /// Returns the lowercase name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn serialize(&self) -> Vec<u8> {
        self.0.as_bytes().to_vec()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Name {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s.as_bytes())
    }
}

impl TryFrom<&[u8]> for Name {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::parse(bytes)
    }
}

impl TryFrom<&str> for Name {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s.as_bytes())
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ByteClass;
    use std::collections::HashMap;

    #[test]
    fn test_parse_lowercases() {
        let name = Name::parse(b"X-Custom").unwrap();
        assert_eq!(name.as_str(), "x-custom");
        assert_eq!(name.serialize(), b"x-custom");
    }

    #[test]
    fn test_case_insensitive_map_key() {
        let mut map = HashMap::new();
        map.insert(Name::parse(b"BOUNDARY").unwrap(), "abc");
        assert_eq!(map.get(&Name::BOUNDARY), Some(&"abc"));
        assert_eq!(map.get(&"Boundary".parse::<Name>().unwrap()), Some(&"abc"));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(Name::parse(b""), Err(Error::Empty)));

        for &b in b"()<>@,;:\\\"/[]?=" {
            let input = [b'a', b];
            match Name::parse(&input) {
                Err(Error::InvalidCharacter { byte, reason, .. }) => {
                    assert_eq!(byte, b);
                    assert_eq!(reason, ByteClass::TSpecial);
                }
                other => panic!("{:?} accepted: {:?}", b as char, other),
            }
        }

        assert!(matches!(
            Name::parse(b"a b"),
            Err(Error::InvalidCharacter { reason: ByteClass::Space, .. })
        ));
        assert!(matches!(
            Name::parse(b"a\x7f"),
            Err(Error::InvalidCharacter { reason: ByteClass::Control, .. })
        ));
    }

    #[test]
    fn test_ordering() {
        assert!(Name::BOUNDARY < Name::CHARSET);
        assert!(Name::parse(b"BOUNDARY").unwrap() < Name::parse(b"charset").unwrap());

        let mut names = vec![
            Name::parse(b"x-custom").unwrap(),
            Name::CHARSET,
            Name::parse(b"Boundary").unwrap(),
        ];
        names.sort();
        let sorted: Vec<&str> = names.iter().map(Name::as_str).collect();
        assert_eq!(sorted, ["boundary", "charset", "x-custom"]);
    }

    #[test]
    fn test_round_trip() {
        for name in [Name::CHARSET, Name::BOUNDARY, Name::NAME, Name::from_literal("Format")] {
            assert_eq!(Name::parse(&name.serialize()).unwrap(), name);
        }
    }
}
