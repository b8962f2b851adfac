//! Quoted-printable body encoding (RFC 2045 section 6.7).

mod decode;
mod encode;

pub use decode::decode;
pub use encode::{encode, Encoder};

/// Maximum length of an encoded line, excluding the CRLF.
const LINE_MAX_LEN: usize = 76;
