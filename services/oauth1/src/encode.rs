use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

/// Everything except the RFC 3986 unreserved characters `A-Z a-z 0-9 - . _ ~`.
///
/// Space becomes `%20`, never `+`, and `percent_encoding` always writes
/// uppercase hex digits.
///
/// - [RFC 5849 3.6. Percent Encoding](https://www.rfc-editor.org/rfc/rfc5849#section-3.6)
pub const OAUTH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode arbitrary bytes.
pub fn percent_encode(input: &[u8]) -> String {
    percent_encoding::percent_encode(input, OAUTH_ENCODE_SET).to_string()
}

/// Percent-encode the utf-8 bytes of a string.
pub fn percent_encode_str(input: &str) -> String {
    percent_encode(input.as_bytes())
}
