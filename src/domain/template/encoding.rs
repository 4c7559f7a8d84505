// Percent-encoding modes used during expansion

use std::borrow::Cow;

/// Which characters an operator lets through unescaped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Only `A-Za-z0-9-._~` pass through
    Unreserved,
    /// Unreserved plus RFC 3986 gen-delims and sub-delims, and existing `%XX` triples
    UnreservedAndReserved,
}

impl Encoding {
    pub fn encode<'a>(&self, value: &'a str) -> Cow<'a, str> {
        match self {
            Encoding::Unreserved => urlencoding::encode(value),
            Encoding::UnreservedAndReserved => encode_allowing_reserved(value),
        }
    }
}

pub fn is_unreserved(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '-' | '.' | '_' | '~')
}

pub fn is_reserved(ch: char) -> bool {
    matches!(
        ch,
        ':' | '/' | '?' | '#' | '[' | ']' | '@'
            | '!' | '$' | '&' | '\'' | '(' | ')' | '*' | '+' | ',' | ';' | '='
    )
}

fn is_pct_triple(bytes: &[u8]) -> bool {
    bytes.len() >= 3
        && bytes[0] == b'%'
        && bytes[1].is_ascii_hexdigit()
        && bytes[2].is_ascii_hexdigit()
}

fn encode_allowing_reserved(value: &str) -> Cow<'_, str> {
    let bytes = value.as_bytes();
    let needs_encoding = value
        .char_indices()
        .any(|(i, ch)| !(is_unreserved(ch) || is_reserved(ch) || is_pct_triple(&bytes[i..])));
    if !needs_encoding {
        return Cow::Borrowed(value);
    }

    let mut encoded = String::with_capacity(value.len() * 3);
    for (i, ch) in value.char_indices() {
        if is_unreserved(ch) || is_reserved(ch) || is_pct_triple(&bytes[i..]) {
            encoded.push(ch);
        } else {
            encoded.push_str(&urlencoding::encode(&value[i..i + ch.len_utf8()]));
        }
    }
    Cow::Owned(encoded)
}
