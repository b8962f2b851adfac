//! Strongly-typed MIME header values (RFC 2045).
//!
//! This crate provides parsing, validation and canonical serialization for:
//! - `Content-Type` media types with parameters ([`ContentType`])
//! - character set identifiers ([`Charset`])
//! - case-insensitive parameter names ([`parameter::Name`])
//! - `Content-Transfer-Encoding` values ([`ContentTransferEncoding`]),
//!   including base64 and quoted-printable body codecs
//!
//! Every type parses from raw header bytes and serializes back to canonical
//! bytes; `FromStr` and `Display` provide the text layer.
//!
//! ```
//! use mime_header_values::{ContentTransferEncoding, ContentType};
//!
//! let ct: ContentType = "Multipart/Mixed; boundary=\"----=_Part 1234\"".parse().unwrap();
//! assert!(ct.is_multipart());
//! assert_eq!(ct.boundary(), Some("----=_Part 1234"));
//! assert_eq!(ct.to_string(), "multipart/mixed; boundary=\"----=_Part 1234\"");
//!
//! let cte: ContentTransferEncoding = " BASE64 ".parse().unwrap();
//! assert_eq!(cte.serialize(), b"base64");
//! ```

pub mod charset;
pub mod content_type;
pub mod error;
pub mod grammar;
pub mod parameter;
pub mod presets;
pub mod quotedprintable;
pub mod transfer_encoding;

// Re-export commonly used types
pub use charset::Charset;
pub use content_type::{generate_boundary, ContentType};
pub use error::{ByteClass, Error, Result};
pub use transfer_encoding::ContentTransferEncoding;
