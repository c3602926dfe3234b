use http::Uri;
use oauth1_signer_core::{Error, Result, SigningRequest};

/// RequestDescriptor is a read-only view of the request being signed.
///
/// `host` may carry a port, `raw_query` is the query string exactly as it
/// will be sent, without the leading `?`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    /// HTTP method, case is normalized when signing.
    pub method: String,
    /// URI scheme, case is normalized when signing.
    pub scheme: String,
    /// Host with optional `:port`.
    pub host: String,
    /// Path, may be empty.
    pub path: String,
    /// Raw query without the leading `?`.
    pub raw_query: String,
}

impl RequestDescriptor {
    /// Create a descriptor from its parts.
    pub fn new(
        method: impl Into<String>,
        scheme: impl Into<String>,
        host: impl Into<String>,
        path: impl Into<String>,
        raw_query: impl Into<String>,
    ) -> Self {
        Self {
            method: method.into(),
            scheme: scheme.into(),
            host: host.into(),
            path: path.into(),
            raw_query: raw_query.into(),
        }
    }

    /// Create a descriptor from an absolute url like `https://host.net/resource?a=b`.
    ///
    /// Returns a [`RequestInvalid`](oauth1_signer_core::ErrorKind::RequestInvalid)
    /// error if the url can't be parsed or lacks a scheme or host.
    pub fn from_url(method: impl Into<String>, url: &str) -> Result<Self> {
        let uri: Uri = url.parse()?;

        let scheme = uri
            .scheme_str()
            .ok_or_else(|| Error::request_invalid(format!("url {url:?} has no scheme")))?;
        let authority = uri
            .authority()
            .ok_or_else(|| Error::request_invalid(format!("url {url:?} has no host")))?;

        Ok(Self::new(
            method,
            scheme,
            strip_userinfo(authority.as_str()),
            uri.path(),
            uri.query().unwrap_or_default(),
        ))
    }

    /// Create a descriptor from a signing request.
    pub fn from_signing_request(req: &SigningRequest) -> Self {
        Self::new(
            req.method.as_str(),
            req.scheme.as_str(),
            strip_userinfo(req.authority.as_str()),
            req.path.as_str(),
            req.query_str(),
        )
    }
}

/// Userinfo is not part of the base string uri.
fn strip_userinfo(authority: &str) -> &str {
    authority.rsplit_once('@').map_or(authority, |(_, v)| v)
}
