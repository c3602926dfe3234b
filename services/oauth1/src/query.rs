//! Request parameter normalization.
//!
//! - [RFC 5849 3.4.1.3. Request Parameters](https://www.rfc-editor.org/rfc/rfc5849#section-3.4.1.3)

use std::borrow::Cow;
use std::collections::BTreeMap;

use oauth1_signer_core::{Error, Result};
use percent_encoding::percent_decode_str;

use crate::constants::RESERVED_PARAMETERS;
use crate::encode::percent_encode_str;

/// A multi-map from parameter name to every value supplied for it.
///
/// Names are kept in byte order. Values keep their insertion order here and
/// are only sorted when serialized, so the serialization never depends on
/// how the set was built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet {
    params: BTreeMap<String, Vec<String>>,
}

impl ParameterSet {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw query string (without the leading `?`).
    ///
    /// - Pairs are separated by `&`, empty segments are skipped.
    /// - A segment without `=` is a name with an empty value.
    /// - `+` decodes to a space, `%XX` to the byte `XX`.
    ///
    /// Returns a [`MalformedQuery`](oauth1_signer_core::ErrorKind::MalformedQuery)
    /// error for a broken escape, a name or value that does not decode to
    /// utf-8, or an empty name. Nothing is dropped silently.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut set = Self::new();

        for pair in raw.split('&').filter(|v| !v.is_empty()) {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));

            let name = decode_component(name)?;
            if name.is_empty() {
                return Err(Error::malformed_query(format!(
                    "parameter without name: {pair:?}"
                )));
            }
            let value = decode_component(value)?;

            set.insert(name, value);
        }

        Ok(set)
    }

    /// Append a value for the given name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.params
            .entry(name.into())
            .or_default()
            .push(value.into());
    }

    /// Get all values for the given name in insertion order.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.params.get(name).map(Vec::as_slice)
    }

    /// Get the first value for the given name.
    pub fn get_first(&self, name: &str) -> Option<&str> {
        self.get(name)
            .and_then(|v| v.first())
            .map(String::as_str)
    }

    /// Check whether the given name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    /// Number of name/value pairs.
    pub fn len(&self) -> usize {
        self.params.values().map(Vec::len).sum()
    }

    /// Check whether the set has no pairs.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterate over names in byte order and their values in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.params
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Merge protocol parameters into this set of request parameters.
    ///
    /// Request parameters must not use any reserved `oauth_*` name; such a
    /// collision is an [`InvalidParameter`](oauth1_signer_core::ErrorKind::InvalidParameter)
    /// error rather than being overridden.
    pub fn merge_protocol(&mut self, protocol: &ParameterSet) -> Result<()> {
        if let Some(name) = self
            .params
            .keys()
            .find(|k| RESERVED_PARAMETERS.contains(&k.as_str()))
        {
            return Err(Error::invalid_parameter(format!(
                "request parameter {name:?} is reserved for the oauth protocol"
            )));
        }

        for (name, values) in &protocol.params {
            self.params
                .entry(name.clone())
                .or_default()
                .extend(values.iter().cloned());
        }

        Ok(())
    }
}

impl<K, V> FromIterator<(K, V)> for ParameterSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut set = Self::new();
        for (k, v) in iter {
            set.insert(k, v);
        }
        set
    }
}

/// Serialize parameters into the normalized form used by signatures.
///
/// Pairs are sorted by name, then by value for repeated names, both in byte
/// order. Every name and value is percent-encoded and pairs are joined by
/// `&`. An empty set serializes to `""`.
pub fn encode_sorted_query(params: &ParameterSet) -> String {
    let mut s = String::with_capacity(16);

    for (name, values) in params.iter() {
        let mut values: Vec<&str> = values.iter().map(String::as_str).collect();
        values.sort_unstable();

        let name = percent_encode_str(name);
        for value in values {
            if !s.is_empty() {
                s.push('&');
            }
            s.push_str(&name);
            s.push('=');
            s.push_str(&percent_encode_str(value));
        }
    }

    s
}

/// Parse the raw query, merge the protocol parameters and serialize the
/// result in normalized form.
pub fn canonicalize(raw_query: &str, protocol: &ParameterSet) -> Result<String> {
    let mut params = ParameterSet::parse(raw_query)?;
    params.merge_protocol(protocol)?;

    Ok(encode_sorted_query(&params))
}

fn decode_component(s: &str) -> Result<String> {
    let bytes = s.as_bytes();
    for (idx, _) in s.match_indices('%') {
        let valid = bytes
            .get(idx + 1..idx + 3)
            .is_some_and(|v| v.iter().all(u8::is_ascii_hexdigit));
        if !valid {
            return Err(Error::malformed_query(format!(
                "invalid percent escape at byte {idx} of {s:?}"
            )));
        }
    }

    let s = if s.contains('+') {
        Cow::Owned(s.replace('+', " "))
    } else {
        Cow::Borrowed(s)
    };

    percent_decode_str(&s)
        .decode_utf8()
        .map(Cow::into_owned)
        .map_err(|e| {
            Error::malformed_query(format!("parameter {s:?} is not valid utf-8")).with_source(e)
        })
}
