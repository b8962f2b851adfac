//! The Content-Type header value.
//!
//! Implements RFC 2045 section 5 media types: a lowercase `type/subtype`
//! pair followed by `; name=value` parameters.

use crate::charset::Charset;
use crate::error::{Error, Result};
use crate::grammar::{classify_token_byte, first_invalid, is_token, is_whitespace, trim_whitespace};
use crate::parameter::Name;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A parsed media type with its parameters.
///
/// Parameters are keyed by case-insensitive [`Name`] and always serialized in
/// ascending name order, so two equal values produce identical bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentType {
    type_: Cow<'static, str>,
    subtype: Cow<'static, str>,
    parameters: BTreeMap<Name, String>,
}

impl ContentType {
    /// Parses a Content-Type header value.
    ///
    /// The type and subtype must be RFC 2045 tokens: a space, control,
    /// non-ASCII or tspecial byte inside either fails with
    /// [`Error::InvalidCharacter`], which is stricter than checking the `/`
    /// separator alone. Parameter parsing is lenient: pairs without `=` are
    /// skipped and a repeated name replaces the earlier value.
    ///
    /// # Examples
    ///
    /// ```
    /// use mime_header_values::{Charset, ContentType};
    ///
    /// let ct = ContentType::parse(b"text/html; charset=UTF-8").unwrap();
    /// assert_eq!(ct.type_(), "text");
    /// assert_eq!(ct.subtype(), "html");
    /// assert_eq!(ct.charset(), Some(Charset::UTF_8));
    /// ```
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Err(Error::Empty);
        }

        let (essence, rest) = match bytes.iter().position(|&b| b == b';') {
            Some(i) => (&bytes[..i], Some(&bytes[i + 1..])),
            None => (bytes, None),
        };

        let slash = essence
            .iter()
            .position(|&b| b == b'/')
            .ok_or_else(|| Error::MissingSeparator(lossy(bytes)))?;
        let type_ = trim_whitespace(&essence[..slash]);
        let subtype = trim_whitespace(&essence[slash + 1..]);

        if type_.is_empty() {
            return Err(Error::EmptyType(lossy(bytes)));
        }
        if subtype.is_empty() {
            return Err(Error::EmptySubtype(lossy(bytes)));
        }
        validate_token(type_, bytes)?;
        validate_token(subtype, bytes)?;

        let mut parameters = BTreeMap::new();
        if let Some(rest) = rest {
            for pair in split_parameters(rest) {
                let Some(eq) = pair.iter().position(|&b| b == b'=') else {
                    log::debug!("skipping parameter without '=': {:?}", lossy(pair));
                    continue;
                };

                let key = trim_whitespace(&pair[..eq]);
                if key.is_empty() {
                    log::debug!("skipping parameter with empty name: {:?}", lossy(pair));
                    continue;
                }

                let name = Name::from_literal(&String::from_utf8_lossy(key));
                let value = parse_value(&pair[eq + 1..]);
                if let Some(previous) = parameters.insert(name, value) {
                    log::debug!("parameter {:?} repeated, replacing {:?}", lossy(key), previous);
                }
            }
        }

        Ok(ContentType {
            type_: Cow::Owned(ascii_lowercase(type_)),
            subtype: Cow::Owned(ascii_lowercase(subtype)),
            parameters,
        })
    }

    /// Creates a media type without parameters.
    ///
    /// Type and subtype are lowercased and must be tokens, so construction
    /// is fallible rather than trusting its input.
    pub fn new(type_: &str, subtype: &str) -> Result<Self> {
        Self::with_parameters(type_, subtype, BTreeMap::new())
    }

    /// Creates a media type with the given parameters.
    ///
    /// # Examples
    ///
    /// ```
    /// use mime_header_values::parameter::Name;
    /// use mime_header_values::ContentType;
    ///
    /// let ct = ContentType::with_parameters(
    ///     "multipart",
    ///     "mixed",
    ///     [
    ///         (Name::CHARSET, "UTF-8".to_string()),
    ///         (Name::BOUNDARY, "X".to_string()),
    ///     ],
    /// )
    /// .unwrap();
    /// assert_eq!(ct.to_string(), "multipart/mixed; boundary=X; charset=UTF-8");
    /// ```
    pub fn with_parameters(
        type_: &str,
        subtype: &str,
        parameters: impl IntoIterator<Item = (Name, String)>,
    ) -> Result<Self> {
        let input = format!("{}/{}", type_, subtype);
        if type_.is_empty() {
            return Err(Error::EmptyType(input));
        }
        if subtype.is_empty() {
            return Err(Error::EmptySubtype(input));
        }
        validate_token(type_.as_bytes(), input.as_bytes())?;
        validate_token(subtype.as_bytes(), input.as_bytes())?;

        Ok(ContentType {
            type_: Cow::Owned(type_.to_ascii_lowercase()),
            subtype: Cow::Owned(subtype.to_ascii_lowercase()),
            parameters: parameters.into_iter().collect(),
        })
    }

    /// Builds a preset from lowercase literals without validation.
    pub(crate) fn from_static(type_: &'static str, subtype: &'static str) -> Self {
        ContentType {
            type_: Cow::Borrowed(type_),
            subtype: Cow::Borrowed(subtype),
            parameters: BTreeMap::new(),
        }
    }

    /// Adds a trusted parameter to a preset.
    pub(crate) fn with_static_parameter(mut self, name: Name, value: impl Into<String>) -> Self {
        self.parameters.insert(name, value.into());
        self
    }

    /// Returns a copy with `name` set to `value`, replacing any previous value.
    ///
    /// The name must be a valid token.
    pub fn with_parameter(mut self, name: &str, value: impl Into<String>) -> Result<Self> {
        self.parameters.insert(Name::parse(name.as_bytes())?, value.into());
        Ok(self)
    }

    /// Creates `multipart/mixed` with the given boundary.
    pub fn multipart_mixed(boundary: impl Into<String>) -> Self {
        Self::from_static("multipart", "mixed").with_static_parameter(Name::BOUNDARY, boundary)
    }

    /// Creates `multipart/alternative` with the given boundary.
    pub fn multipart_alternative(boundary: impl Into<String>) -> Self {
        Self::from_static("multipart", "alternative").with_static_parameter(Name::BOUNDARY, boundary)
    }

    /// Creates `multipart/mixed` with a freshly generated boundary.
    pub fn multipart_mixed_random() -> Result<Self> {
        Ok(Self::multipart_mixed(generate_boundary()?))
    }

    /// Creates `multipart/alternative` with a freshly generated boundary.
    pub fn multipart_alternative_random() -> Result<Self> {
        Ok(Self::multipart_alternative(generate_boundary()?))
    }

    /// Returns the lowercase top-level type, such as `text`.
    pub fn type_(&self) -> &str {
        &self.type_
    }

    /// Returns the lowercase subtype, such as `plain`.
    pub fn subtype(&self) -> &str {
        &self.subtype
    }

    /// Returns `type/subtype` without parameters.
    pub fn essence(&self) -> String {
        format!("{}/{}", self.type_, self.subtype)
    }

    /// Looks up a parameter value by case-insensitive name.
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters.get(&Name::from_literal(name)).map(String::as_str)
    }

    /// Iterates parameters in serialization order.
    pub fn parameters(&self) -> impl Iterator<Item = (&Name, &str)> {
        self.parameters.iter().map(|(name, value)| (name, value.as_str()))
    }

    /// Returns the `charset` parameter, if any.
    ///
    /// The value is uppercased but not validated.
    pub fn charset(&self) -> Option<Charset> {
        self.parameters.get(&Name::CHARSET).map(|v| Charset::from_literal(v))
    }

    /// Returns the `boundary` parameter, if any.
    pub fn boundary(&self) -> Option<&str> {
        self.parameters.get(&Name::BOUNDARY).map(String::as_str)
    }

    pub fn is_multipart(&self) -> bool {
        self.type_ == "multipart"
    }

    pub fn is_text(&self) -> bool {
        self.type_ == "text"
    }

    /// Returns the canonical wire bytes.
    pub fn serialize(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.type_, self.subtype)?;

        for (name, value) in &self.parameters {
            write!(f, "; {}=", name)?;
            if needs_quotes(value) {
                f.write_str("\"")?;
                for ch in value.chars() {
                    if ch == '"' || ch == '\\' {
                        f.write_str("\\")?;
                    }
                    write!(f, "{}", ch)?;
                }
                f.write_str("\"")?;
            } else {
                f.write_str(value)?;
            }
        }

        Ok(())
    }
}

impl FromStr for ContentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s.as_bytes())
    }
}

impl TryFrom<&[u8]> for ContentType {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::parse(bytes)
    }
}

impl TryFrom<&str> for ContentType {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s.as_bytes())
    }
}

/// Generates a random multipart boundary of 60 lowercase hex characters.
pub fn generate_boundary() -> Result<String> {
    let mut buf = [0u8; 30];
    getrandom::getrandom(&mut buf)?;

    Ok(buf.iter().map(|b| format!("{:02x}", b)).collect())
}

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

fn ascii_lowercase(bytes: &[u8]) -> String {
    lossy(bytes).to_ascii_lowercase()
}

fn validate_token(component: &[u8], input: &[u8]) -> Result<()> {
    match first_invalid(component, classify_token_byte) {
        Some((byte, reason)) => Err(Error::invalid_character(byte, reason, input)),
        None => Ok(()),
    }
}

/// Splits the parameter section on `;`.
///
/// A `"` opens a quoted-string only as the first non-blank byte of a value,
/// and `;` inside it does not split. An unterminated quote is plain text.
fn split_parameters(input: &[u8]) -> Vec<&[u8]> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut seen_eq = false;
    let mut i = 0;

    while i < input.len() {
        match input[i] {
            b';' => {
                parts.push(&input[start..i]);
                start = i + 1;
                seen_eq = false;
            }
            b'=' if !seen_eq => {
                seen_eq = true;
                let value_start = i + 1 + input[i + 1..].iter().take_while(|&&b| is_whitespace(b)).count();
                if input.get(value_start) == Some(&b'"') {
                    if let Some(close) = closing_quote(&input[value_start + 1..]) {
                        i = value_start + 1 + close + 1;
                        continue;
                    }
                }
            }
            _ => {}
        }
        i += 1;
    }
    parts.push(&input[start..]);

    parts
}

/// Finds the first unescaped `"`.
fn closing_quote(input: &[u8]) -> Option<usize> {
    let mut escaped = false;
    for (i, &b) in input.iter().enumerate() {
        match b {
            _ if escaped => escaped = false,
            b'\\' => escaped = true,
            b'"' => return Some(i),
            _ => {}
        }
    }
    None
}

/// Trims a raw parameter value and resolves a surrounding quoted-string.
fn parse_value(raw: &[u8]) -> String {
    let value = trim_whitespace(raw);

    match value {
        [b'"', inner @ .., b'"'] => {
            let mut out = Vec::with_capacity(inner.len());
            let mut bytes = inner.iter();
            while let Some(&b) = bytes.next() {
                match (b, bytes.clone().next()) {
                    (b'\\', Some(&next)) => {
                        out.push(next);
                        bytes.next();
                    }
                    _ => out.push(b),
                }
            }
            lossy(&out)
        }
        [b'"', ..] => {
            log::warn!("unterminated quoted parameter value kept verbatim: {:?}", lossy(value));
            lossy(value)
        }
        _ => lossy(value),
    }
}

fn needs_quotes(value: &str) -> bool {
    !is_token(value.as_bytes())
}
