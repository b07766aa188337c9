//! Percent-encoding of variable values.
//!
//! Values are encoded against the RFC 3986 unreserved set: every byte of the
//! UTF-8 representation that is not `ALPHA / DIGIT / "-" / "." / "_" / "~"`
//! becomes a `%HH` triple with uppercase hex digits.

use std::borrow::Cow;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use crate::constants::{PERCENT, UNRESERVED_MARKS};

/// Everything outside the unreserved set.
const RESERVED: &AsciiSet = &reserved_set();

const fn reserved_set() -> AsciiSet {
    let marks = UNRESERVED_MARKS.as_bytes();
    let mut set = NON_ALPHANUMERIC.remove(marks[0]);
    let mut i = 1;
    while i < marks.len() {
        set = set.remove(marks[i]);
        i += 1;
    }
    set
}

/// Percent-encodes a raw value for substitution into a URI.
///
/// Borrows the input when it contains unreserved characters only.
///
/// # Examples
///
/// ```
/// use uri_pattern::codec;
///
/// assert_eq!(codec::encode("a b/c"), "a%20b%2Fc");
/// assert_eq!(codec::encode("plain-value_1.0~"), "plain-value_1.0~");
/// ```
#[must_use]
pub fn encode(value: &str) -> Cow<'_, str> {
    utf8_percent_encode(value, RESERVED).into()
}

/// Decodes the percent-encoded triples in a value.
///
/// Malformed triples are kept verbatim and byte sequences that are not valid
/// UTF-8 are replaced with `U+FFFD`, so decoding never fails.
///
/// # Examples
///
/// ```
/// use uri_pattern::codec;
///
/// assert_eq!(codec::decode("a%20b%2Fc"), "a b/c");
/// assert_eq!(codec::decode("caf%C3%A9"), "café");
/// ```
#[must_use]
pub fn decode(value: &str) -> Cow<'_, str> {
    percent_decode_str(value).decode_utf8_lossy()
}

/// Uppercases the hex digits of the percent-encoded triples in a value.
///
/// Nothing else is touched: unreserved characters written as triples stay
/// encoded, and the bytes a triple stands for need not be valid UTF-8.
/// Borrows the input when every triple is already uppercase.
///
/// # Examples
///
/// ```
/// use uri_pattern::codec;
///
/// assert_eq!(codec::normalize("a%2fb%FF"), "a%2Fb%FF");
/// assert_eq!(codec::normalize("%41bc"), "%41bc");
/// ```
#[must_use]
pub fn normalize(encoded: &str) -> Cow<'_, str> {
    let lowercase = encoded
        .split(PERCENT)
        .skip(1)
        .filter_map(triple_digits)
        .any(|digits| digits.bytes().any(|b| b.is_ascii_lowercase()));
    if !lowercase {
        return Cow::Borrowed(encoded);
    }

    let mut normalized = String::with_capacity(encoded.len());
    for (i, piece) in encoded.split(PERCENT).enumerate() {
        if i > 0 {
            normalized.push(PERCENT);
            if let Some(digits) = triple_digits(piece) {
                normalized.push_str(&digits.to_ascii_uppercase());
                normalized.push_str(&piece[2..]);
                continue;
            }
        }
        normalized.push_str(piece);
    }
    Cow::Owned(normalized)
}

/// The two hex digits opening `piece`, if it follows a well-formed `%`.
fn triple_digits(piece: &str) -> Option<&str> {
    piece
        .get(..2)
        .filter(|digits| digits.bytes().all(|b| b.is_ascii_hexdigit()))
}

/// Returns true if the character belongs to the unreserved set.
#[must_use]
pub fn is_unreserved(c: char) -> bool {
    c.is_ascii_alphanumeric() || UNRESERVED_MARKS.contains(c)
}
