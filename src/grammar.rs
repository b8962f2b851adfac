//! Byte classification helpers for header value grammars.
//!
//! Based on RFC 822 and RFC 2045 token definitions.

use crate::error::ByteClass;

/// Reports whether the byte is in 'tspecials' as defined by RFC 1521 and RFC 2045.
///
/// tspecials := "(" / ")" / "<" / ">" / "@" / "," / ";" / ":" / "\" / <"> / "/" / "[" / "]" / "?" / "="
pub fn is_tspecial(b: u8) -> bool {
    matches!(
        b,
        b'(' | b')' | b'<' | b'>' | b'@' | b',' | b';' | b':' | b'\\' | b'"' | b'/' | b'[' | b']' | b'?' | b'='
    )
}

/// Reports whether the byte is visible (printing, non-space) US-ASCII.
pub fn is_visible_ascii(b: u8) -> bool {
    (0x21..=0x7e).contains(&b)
}

/// Reports whether the byte is linear whitespace (space or horizontal tab).
pub fn is_whitespace(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

/// Reports whether the byte is in 'token' as defined by RFC 1521 and RFC 2045.
///
/// token := 1*<any (US-ASCII) CHAR except SPACE, CTLs, or tspecials>
pub fn is_token_byte(b: u8) -> bool {
    is_visible_ascii(b) && !is_tspecial(b)
}

/// Reports whether the bytes form a valid 'token'.
pub fn is_token(s: &[u8]) -> bool {
    !s.is_empty() && s.iter().copied().all(is_token_byte)
}

/// Strips leading and trailing bytes matching `pred`.
pub fn trim(bytes: &[u8], pred: impl Fn(u8) -> bool) -> &[u8] {
    let start = bytes.iter().position(|&b| !pred(b)).unwrap_or(bytes.len());
    let end = bytes.iter().rposition(|&b| !pred(b)).map_or(start, |i| i + 1);
    &bytes[start..end]
}

/// Strips leading and trailing spaces and tabs.
pub fn trim_whitespace(bytes: &[u8]) -> &[u8] {
    trim(bytes, is_whitespace)
}

/// Explains why a byte is not visible ASCII, if it isn't.
pub fn classify_visible(b: u8) -> Option<ByteClass> {
    match b {
        _ if is_visible_ascii(b) => None,
        b' ' => Some(ByteClass::Space),
        0x00..=0x1f | 0x7f => Some(ByteClass::Control),
        _ => Some(ByteClass::NonAscii),
    }
}

/// Explains why a byte is not a token byte, if it isn't.
pub fn classify_token_byte(b: u8) -> Option<ByteClass> {
    match classify_visible(b) {
        None if is_tspecial(b) => Some(ByteClass::TSpecial),
        class => class,
    }
}

/// Finds the first byte rejected by `classify`, returning it with its class.
pub(crate) fn first_invalid(
    bytes: &[u8],
    classify: impl Fn(u8) -> Option<ByteClass>,
) -> Option<(u8, ByteClass)> {
    bytes
        .iter()
        .find_map(|&b| classify(b).map(|class| (b, class)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_tspecial() {
        for &b in b"()<>@,;:\\\"/[]?=" {
            assert!(is_tspecial(b), "{:?} should be a tspecial", b as char);
        }

        assert!(!is_tspecial(b'a'));
        assert!(!is_tspecial(b'Z'));
        assert!(!is_tspecial(b'0'));
        assert!(!is_tspecial(b'-'));
    }

    #[test]
    fn test_is_visible_ascii() {
        assert!(is_visible_ascii(b'!'));
        assert!(is_visible_ascii(b'~'));
        assert!(is_visible_ascii(b'-'));
        assert!(is_visible_ascii(b'='));

        assert!(!is_visible_ascii(b' '));
        assert!(!is_visible_ascii(0x00));
        assert!(!is_visible_ascii(0x7f));
        assert!(!is_visible_ascii(0x80));
    }

    #[test]
    fn test_is_token_byte() {
        assert!(is_token_byte(b'a'));
        assert!(is_token_byte(b'Z'));
        assert!(is_token_byte(b'0'));
        assert!(is_token_byte(b'-'));
        assert!(is_token_byte(b'_'));

        assert!(!is_token_byte(b' '));
        assert!(!is_token_byte(b'\t'));
        assert!(!is_token_byte(b'('));
        assert!(!is_token_byte(0x1f));
        assert!(!is_token_byte(0x7f));
        assert!(!is_token_byte(0xc3));
    }

    #[test]
    fn test_is_token() {
        assert!(is_token(b"text"));
        assert!(is_token(b"x-custom"));

        assert!(!is_token(b""));
        assert!(!is_token(b"text/plain"));
        assert!(!is_token(b"with space"));
    }

    #[test]
    fn test_trim() {
        assert_eq!(trim_whitespace(b"  base64\t"), b"base64");
        assert_eq!(trim_whitespace(b" \t "), b"");
        assert_eq!(trim_whitespace(b""), b"");
        assert_eq!(trim_whitespace(b"a b"), b"a b");
        // only space and tab count
        assert_eq!(trim_whitespace(b"\nx\r"), b"\nx\r");
        assert_eq!(trim(b"--x--", |b| b == b'-'), b"x");
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify_visible(b'a'), None);
        assert_eq!(classify_visible(b'-'), None);
        assert_eq!(classify_visible(b' '), Some(ByteClass::Space));
        assert_eq!(classify_visible(0x00), Some(ByteClass::Control));
        assert_eq!(classify_visible(0x7f), Some(ByteClass::Control));
        assert_eq!(classify_visible(0x80), Some(ByteClass::NonAscii));

        assert_eq!(classify_token_byte(b'='), Some(ByteClass::TSpecial));
        assert_eq!(classify_token_byte(b'\t'), Some(ByteClass::Control));
        assert_eq!(classify_token_byte(b'x'), None);
    }

    #[test]
    fn test_first_invalid() {
        assert_eq!(first_invalid(b"utf-8", classify_visible), None);
        assert_eq!(
            first_invalid(b"a b\x00", classify_visible),
            Some((b' ', ByteClass::Space))
        );
    }
}
