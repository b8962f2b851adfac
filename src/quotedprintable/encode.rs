//! Quoted-printable encoding.

use super::LINE_MAX_LEN;
use crate::grammar::is_whitespace;

const UPPER_HEX: &[u8] = b"0123456789ABCDEF";

/// A quoted-printable encoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct Encoder {
    /// Binary mode treats input as pure binary: CR and LF are escaped
    /// instead of being written as CRLF line breaks.
    pub binary: bool,
}

impl Encoder {
    /// Creates a text-mode encoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Encodes `input`, keeping every output line within 76 characters.
    ///
    /// # Examples
    ///
    /// ```
    /// use mime_header_values::quotedprintable::Encoder;
    ///
    /// let encoder = Encoder { binary: true };
    /// assert_eq!(encoder.encode(b"\r\n"), b"=0D=0A");
    /// ```
    pub fn encode(&self, input: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(input.len() + input.len() / LINE_MAX_LEN * 3);
        let mut line_len = 0;
        let mut i = 0;

        while i < input.len() {
            let b = input[i];

            if !self.binary && (b == b'\r' || b == b'\n') {
                out.extend_from_slice(b"\r\n");
                line_len = 0;
                i += if b == b'\r' && input.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                continue;
            }

            // Whitespace at the end of a line would be stripped in transit.
            let literal = if is_whitespace(b) {
                !self.ends_line(input, i + 1)
            } else {
                (b'!'..=b'~').contains(&b) && b != b'='
            };
            let width = if literal { 1 } else { 3 };

            // Leave room for the '=' of a soft line break.
            if line_len + width > LINE_MAX_LEN - 1 {
                out.extend_from_slice(b"=\r\n");
                line_len = 0;
            }

            if literal {
                out.push(b);
            } else {
                out.push(b'=');
                out.push(UPPER_HEX[(b >> 4) as usize]);
                out.push(UPPER_HEX[(b & 0x0F) as usize]);
            }
            line_len += width;
            i += 1;
        }

        out
    }

    fn ends_line(&self, input: &[u8], next: usize) -> bool {
        match input.get(next) {
            None => true,
            Some(b'\r') | Some(b'\n') => !self.binary,
            Some(_) => false,
        }
    }
}

/// Encodes `input` as quoted-printable text.
///
/// # Examples
///
/// ```
/// use mime_header_values::quotedprintable::encode;
///
/// assert_eq!(encode(b"test=test"), b"test=3Dtest");
/// ```
pub fn encode(input: &[u8]) -> Vec<u8> {
    Encoder::new().encode(input)
}
