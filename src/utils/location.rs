//! Encoding of stored URLs for the `Location` header.
//!
//! Stored URLs are kept verbatim, so they may contain characters that are not
//! allowed in a header value (controls, spaces, non-ASCII). Those are
//! percent-encoded; reserved URL characters and well-formed `%XX` escapes are
//! left untouched. A `%` that does not start an escape becomes `%25`.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Characters escaped in addition to controls and non-ASCII bytes.
const LOCATION_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Encodes `url` so that it is a valid, visible-ASCII header value.
pub fn encode_location(url: &str) -> String {
    let escaped = escape_stray_percents(url);
    utf8_percent_encode(&escaped, LOCATION_ENCODE_SET).to_string()
}

/// Replaces every `%` not followed by two hex digits with `%25`.
fn escape_stray_percents(url: &str) -> String {
    let bytes = url.as_bytes();
    let mut out = String::with_capacity(url.len());

    for (i, c) in url.char_indices() {
        let is_escape = c == '%'
            && bytes.get(i + 1).is_some_and(u8::is_ascii_hexdigit)
            && bytes.get(i + 2).is_some_and(u8::is_ascii_hexdigit);

        if c == '%' && !is_escape {
            out.push_str("%25");
        } else {
            out.push(c);
        }
    }

    out
}
