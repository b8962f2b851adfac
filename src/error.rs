//! Error types for header value parsing.

use std::fmt;
use thiserror::Error;

/// The class of byte that made a value invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteClass {
    /// A control character (0x00-0x1F or 0x7F).
    Control,
    /// A space character.
    Space,
    /// One of the RFC 2045 `tspecials`.
    TSpecial,
    /// A byte outside of US-ASCII.
    NonAscii,
}

impl fmt::Display for ByteClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            ByteClass::Control => "control character",
            ByteClass::Space => "space",
            ByteClass::TSpecial => "special character",
            ByteClass::NonAscii => "non-ASCII byte",
        };
        f.write_str(reason)
    }
}

/// The main error type for this crate.
#[derive(Error, Debug)]
pub enum Error {
    /// The input had no meaningful bytes.
    #[error("empty value")]
    Empty,

    /// A byte outside the permitted class for the grammar.
    #[error("invalid character 0x{byte:02x} ({reason}) in {input:?}")]
    InvalidCharacter {
        byte: u8,
        reason: ByteClass,
        input: String,
    },

    /// The `/` between type and subtype is missing.
    #[error("missing '/' separator in content type {0:?}")]
    MissingSeparator(String),

    /// The type before the `/` is empty.
    #[error("empty type in content type {0:?}")]
    EmptyType(String),

    /// The subtype after the `/` is empty.
    #[error("empty subtype in content type {0:?}")]
    EmptySubtype(String),

    /// A well-formed token that names no known transfer encoding.
    #[error("unrecognized content transfer encoding {0:?}")]
    UnrecognizedEncoding(String),

    /// Body encoding or decoding failed.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// The system random source failed.
    #[error("random source error: {0}")]
    Random(#[from] getrandom::Error),
}

impl Error {
    pub(crate) fn invalid_character(byte: u8, reason: ByteClass, input: &[u8]) -> Self {
        Error::InvalidCharacter {
            byte,
            reason,
            input: String::from_utf8_lossy(input).into_owned(),
        }
    }
}

impl From<base64::DecodeError> for Error {
    fn from(err: base64::DecodeError) -> Self {
        Error::Encoding(format!("base64: {}", err))
    }
}

/// Specialized Result type for header value operations.
pub type Result<T> = std::result::Result<T, Error>;
