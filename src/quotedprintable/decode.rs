//! Quoted-printable decoding.

use crate::error::{Error, Result};
use crate::grammar::is_whitespace;

/// Decodes quoted-printable data.
///
/// Soft line breaks are removed, trailing whitespace on each line is dropped,
/// and an `=` that does not start a valid escape is kept literally.
///
/// # Examples
///
/// ```
/// use mime_header_values::quotedprintable::decode;
///
/// assert_eq!(decode(b"Hello=20World").unwrap(), b"Hello World");
/// assert_eq!(decode(b"Hello=\r\nWorld").unwrap(), b"HelloWorld");
/// ```
pub fn decode(input: &[u8]) -> Result<Vec<u8>> {
    let mut result = Vec::with_capacity(input.len());
    for line in input.split_inclusive(|&b| b == b'\n') {
        decode_line(line, &mut result)?;
    }
    Ok(result)
}

/// Decodes a single line, including its line ending if present.
fn decode_line(line: &[u8], result: &mut Vec<u8>) -> Result<()> {
    let has_lf = line.ends_with(b"\n");
    let has_crlf = line.ends_with(b"\r\n");

    let mut trimmed = line;
    while let Some((&last, rest)) = trimmed.split_last() {
        if last == b'\n' || last == b'\r' || is_whitespace(last) {
            trimmed = rest;
        } else {
            break;
        }
    }

    let is_soft_break = trimmed.ends_with(b"=");
    if is_soft_break {
        trimmed = &trimmed[..trimmed.len() - 1];
    }

    let mut i = 0;
    while i < trimmed.len() {
        let b = trimmed[i];
        if b == b'=' {
            if let (Some(&high), Some(&low)) = (trimmed.get(i + 1), trimmed.get(i + 2)) {
                if let (Some(h), Some(l)) = (hex_value(high), hex_value(low)) {
                    result.push((h << 4) | l);
                    i += 3;
                    continue;
                }
            }
            result.push(b'=');
        } else if b < b' ' && b != b'\t' && b != b'\r' {
            return Err(Error::Encoding(format!(
                "invalid unescaped byte: 0x{:02x}",
                b
            )));
        } else {
            result.push(b);
        }
        i += 1;
    }

    if !is_soft_break && has_lf {
        if has_crlf {
            result.extend_from_slice(b"\r\n");
        } else {
            result.push(b'\n');
        }
    }

    Ok(())
}

fn hex_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_simple() {
        assert_eq!(decode(b"Hello World").unwrap(), b"Hello World");
    }

    #[test]
    fn test_decode_soft_line_break() {
        assert_eq!(decode(b"Hello=\r\nWorld").unwrap(), b"HelloWorld");
        assert_eq!(decode(b"Hello=\nWorld").unwrap(), b"HelloWorld");
    }

    #[test]
    fn test_decode_with_newlines() {
        assert_eq!(decode(b"Line1\r\nLine2\r\n").unwrap(), b"Line1\r\nLine2\r\n");
        assert_eq!(decode(b"Line1\nLine2").unwrap(), b"Line1\nLine2");
    }

    #[test]
    fn test_decode_hex() {
        assert_eq!(decode(b"=48=65=6C=6c=6F").unwrap(), b"Hello");
        assert_eq!(decode(b"caf=C3=A9").unwrap(), "caf\u{e9}".as_bytes());
    }

    #[test]
    fn test_decode_trailing_whitespace_dropped() {
        assert_eq!(decode(b"trailing   \r\nnext").unwrap(), b"trailing\r\nnext");
    }

    #[test]
    fn test_decode_malformed_escape_kept() {
        assert_eq!(decode(b"a=ZZb").unwrap(), b"a=ZZb");
        assert_eq!(decode(b"a=4").unwrap(), b"a=4");
    }

    #[test]
    fn test_decode_rejects_control_bytes() {
        assert!(matches!(decode(b"a\x01b"), Err(Error::Encoding(_))));
    }
}
