//! The Content-Transfer-Encoding header value (RFC 2045 section 6).

use crate::error::{Error, Result};
use crate::grammar::trim_whitespace;
use crate::quotedprintable;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::fmt;
use std::str::FromStr;

/// Line length for base64 bodies, excluding the CRLF.
const BASE64_LINE_LEN: usize = 76;

/// One of the five transfer encodings defined by RFC 2045.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentTransferEncoding {
    /// `7bit`: short lines of US-ASCII.
    SevenBit,
    /// `8bit`: short lines that may contain octets above 127.
    EightBit,
    /// `binary`: arbitrary octets, no line length limit.
    Binary,
    /// `quoted-printable`
    QuotedPrintable,
    /// `base64`
    Base64,
}

impl ContentTransferEncoding {
    pub const ALL: [ContentTransferEncoding; 5] = [
        ContentTransferEncoding::SevenBit,
        ContentTransferEncoding::EightBit,
        ContentTransferEncoding::Binary,
        ContentTransferEncoding::QuotedPrintable,
        ContentTransferEncoding::Base64,
    ];

    /// Parses a header value such as `" Base64\t"`.
    ///
    /// Surrounding spaces and tabs are ignored and matching is
    /// case-insensitive, but the token must match exactly.
    ///
    /// # Examples
    ///
    /// ```
    /// use mime_header_values::ContentTransferEncoding;
    ///
    /// let encoding = ContentTransferEncoding::parse(b"  BASE64 ").unwrap();
    /// assert_eq!(encoding, ContentTransferEncoding::Base64);
    /// assert!(ContentTransferEncoding::parse(b"base").is_err());
    /// ```
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let trimmed = trim_whitespace(bytes);
        if trimmed.is_empty() {
            return Err(Error::Empty);
        }

        Self::ALL
            .into_iter()
            .find(|encoding| trimmed.eq_ignore_ascii_case(encoding.as_str().as_bytes()))
            .ok_or_else(|| Error::UnrecognizedEncoding(String::from_utf8_lossy(bytes).into_owned()))
    }

    /// Returns the canonical lowercase token.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentTransferEncoding::SevenBit => "7bit",
            ContentTransferEncoding::EightBit => "8bit",
            ContentTransferEncoding::Binary => "binary",
            ContentTransferEncoding::QuotedPrintable => "quoted-printable",
            ContentTransferEncoding::Base64 => "base64",
        }
    }

    pub fn serialize(&self) -> Vec<u8> {
        self.as_str().as_bytes().to_vec()
    }

    /// Whether arbitrary binary content survives a 7bit transport in this encoding.
    pub fn is_binary_safe(&self) -> bool {
        matches!(
            self,
            ContentTransferEncoding::QuotedPrintable | ContentTransferEncoding::Base64
        )
    }

    /// Whether the body is transformed (as opposed to an identity encoding).
    pub fn is_encoded(&self) -> bool {
        matches!(
            self,
            ContentTransferEncoding::QuotedPrintable | ContentTransferEncoding::Base64
        )
    }

    /// Encodes a body for transport.
    ///
    /// Base64 output is wrapped into CRLF-terminated lines of 76 characters.
    /// Identity encodings return the input unchanged.
    pub fn encode(&self, body: &[u8]) -> Vec<u8> {
        match self {
            ContentTransferEncoding::Base64 => {
                let encoded = STANDARD.encode(body);
                let mut out = Vec::with_capacity(encoded.len() + encoded.len() / BASE64_LINE_LEN * 2);
                for (i, line) in encoded.as_bytes().chunks(BASE64_LINE_LEN).enumerate() {
                    if i > 0 {
                        out.extend_from_slice(b"\r\n");
                    }
                    out.extend_from_slice(line);
                }
                out
            }
            ContentTransferEncoding::QuotedPrintable => quotedprintable::encode(body),
            ContentTransferEncoding::SevenBit
            | ContentTransferEncoding::EightBit
            | ContentTransferEncoding::Binary => body.to_vec(),
        }
    }

    /// Decodes a transported body.
    ///
    /// Base64 input may contain line breaks and other ASCII whitespace.
    pub fn decode(&self, body: &[u8]) -> Result<Vec<u8>> {
        match self {
            ContentTransferEncoding::Base64 => {
                let compact: Vec<u8> = body
                    .iter()
                    .copied()
                    .filter(|b| !b.is_ascii_whitespace())
                    .collect();
                Ok(STANDARD.decode(compact)?)
            }
            ContentTransferEncoding::QuotedPrintable => quotedprintable::decode(body),
            ContentTransferEncoding::SevenBit
            | ContentTransferEncoding::EightBit
            | ContentTransferEncoding::Binary => Ok(body.to_vec()),
        }
    }
}

impl fmt::Display for ContentTransferEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentTransferEncoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s.as_bytes())
    }
}

impl TryFrom<&[u8]> for ContentTransferEncoding {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::parse(bytes)
    }
}

impl TryFrom<&str> for ContentTransferEncoding {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s.as_bytes())
    }
}
