use std::mem;
use std::str::FromStr;

use http::uri::Authority;
use http::uri::PathAndQuery;
use http::uri::Scheme;
use http::HeaderMap;
use http::Method;
use http::Uri;

use crate::{Error, Result};

/// Signing context for request.
///
/// The query is kept raw: signers that canonicalize parameters must see
/// exactly what the caller wrote, including escapes.
#[derive(Debug)]
pub struct SigningRequest {
    /// HTTP method.
    pub method: Method,
    /// HTTP scheme.
    pub scheme: Scheme,
    /// HTTP authority.
    pub authority: Authority,
    /// HTTP path.
    pub path: String,
    /// Raw HTTP query without the leading `?`, `None` if the uri has none.
    pub query: Option<String>,
    /// HTTP headers.
    pub headers: HeaderMap,
}

impl SigningRequest {
    /// Build a signing context from http::request::Parts.
    ///
    /// The request is left untouched if it can't be signed.
    pub fn build(parts: &mut http::request::Parts) -> Result<Self> {
        if parts.uri.authority().is_none() {
            return Err(Error::request_invalid(
                "request without authority is invalid for signing",
            ));
        }

        let uri = mem::take(&mut parts.uri).into_parts();
        let paq = uri
            .path_and_query
            .unwrap_or_else(|| PathAndQuery::from_static("/"));

        Ok(SigningRequest {
            method: parts.method.clone(),
            scheme: uri.scheme.unwrap_or(Scheme::HTTP),
            authority: uri.authority.ok_or_else(|| {
                Error::unexpected("authority disappeared while taking the uri")
            })?,
            path: paq.path().to_string(),
            query: paq.query().map(|v| v.to_string()),

            // Take the headers out of the request to avoid copy.
            // We will return it back when apply the context.
            headers: mem::take(&mut parts.headers),
        })
    }

    /// Apply the signing context back to http::request::Parts.
    pub fn apply(mut self, parts: &mut http::request::Parts) -> Result<()> {
        // Return headers back.
        mem::swap(&mut parts.headers, &mut self.headers);
        parts.method = self.method;
        parts.uri = {
            let mut uri_parts = mem::take(&mut parts.uri).into_parts();
            uri_parts.scheme = Some(self.scheme);
            uri_parts.authority = Some(self.authority);
            uri_parts.path_and_query = {
                let paq = match self.query {
                    Some(q) if !q.is_empty() => {
                        let mut s = self.path;
                        s.reserve(q.len() + 1);
                        s.push('?');
                        s.push_str(&q);
                        s
                    }
                    _ => self.path,
                };

                Some(PathAndQuery::from_str(&paq)?)
            };
            Uri::from_parts(uri_parts)?
        };

        Ok(())
    }

    /// Get the raw query, empty if the uri has none.
    #[inline]
    pub fn query_str(&self) -> &str {
        self.query.as_deref().unwrap_or_default()
    }

    /// Replace the whole query string.
    #[inline]
    pub fn query_replace(&mut self, query: impl Into<String>) {
        self.query = Some(query.into());
    }
}

/// SigningMethod decides where the signature goes.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum SigningMethod {
    /// Signing with the `Authorization` header.
    #[default]
    Header,
    /// Signing with the query string.
    Query,
}
