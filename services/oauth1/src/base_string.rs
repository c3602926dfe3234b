use crate::encode::percent_encode_str;

/// Construct the signature base string.
///
/// ## Format
///
/// ```text
/// UPPER(method) + "&" +
/// encode(lower(scheme) + "://" + lower(host) [+ ":" + port] + path) + "&" +
/// encode(canonical_query)
/// ```
///
/// The port is dropped when it is the default one of the scheme. The path
/// is used as given, an empty path stays empty.
///
/// ## Reference
///
/// - [RFC 5849 3.4.1. Signature Base String](https://www.rfc-editor.org/rfc/rfc5849#section-3.4.1)
pub fn signature_base_string(
    method: &str,
    scheme: &str,
    host: &str,
    path: &str,
    canonical_query: &str,
) -> String {
    let base_uri = base_string_uri(scheme, host, path);

    let mut s = method.to_ascii_uppercase();
    s.push('&');
    s.push_str(&percent_encode_str(&base_uri));
    s.push('&');
    s.push_str(&percent_encode_str(canonical_query));
    s
}

/// Build the normalized base uri: `scheme://host[:port]path`.
pub fn base_string_uri(scheme: &str, host: &str, path: &str) -> String {
    let scheme = scheme.to_ascii_lowercase();
    let (host, port) = split_host_port(host);

    let mut uri = String::with_capacity(scheme.len() + host.len() + path.len() + 9);
    uri.push_str(&scheme);
    uri.push_str("://");
    uri.push_str(&host.to_ascii_lowercase());
    if let Some(port) = port {
        if !is_default_port(&scheme, port) {
            uri.push(':');
            uri.push_str(port);
        }
    }
    uri.push_str(path);
    uri
}

fn is_default_port(scheme: &str, port: &str) -> bool {
    matches!((scheme, port), ("http", "80") | ("https", "443"))
}

/// Split `host[:port]` on the last colon.
///
/// The part before the colon must be a bracketed ipv6 literal or contain no
/// colon at all, otherwise `[::1]` would lose its last group. A trailing `:`
/// without digits is an empty port and is dropped.
fn split_host_port(authority: &str) -> (&str, Option<&str>) {
    let Some((host, port)) = authority.rsplit_once(':') else {
        return (authority, None);
    };

    let host_ok = host.ends_with(']') || !host.contains(':');
    if !host_ok || !port.bytes().all(|b| b.is_ascii_digit()) {
        return (authority, None);
    }

    if port.is_empty() {
        (host, None)
    } else {
        (host, Some(port))
    }
}
