//! Utility functions and types.

use std::fmt::Debug;

/// Redacts secrets in `Debug` output.
///
/// - Empty values print as `EMPTY`, so a missing token is still visible.
/// - Values shorter than 12 bytes are fully hidden.
/// - Longer values keep their first and last three bytes, which is enough to
///   tell two consumer keys apart without leaking them.
pub struct Redact<'a>(&'a str);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(value)
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(value.as_str())
    }
}

impl<'a> From<&'a Option<String>> for Redact<'a> {
    fn from(value: &'a Option<String>) -> Self {
        Redact(value.as_deref().unwrap_or_default())
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let v = self.0;
        match v.len() {
            0 => f.write_str("EMPTY"),
            n if n < 12 => f.write_str("***"),
            // Secrets are not guaranteed to be ASCII, fall back to full redaction
            // if the edges are not on char boundaries.
            n => match (v.get(..3), v.get(n - 3..)) {
                (Some(head), Some(tail)) => write!(f, "{head}***{tail}"),
                _ => f.write_str("***"),
            },
        }
    }
}
