use std::sync::Arc;

use http::header::AUTHORIZATION;
use http::HeaderValue;
use log::debug;
use oauth1_signer_core::{Context, Error, Result, SignRequest, SigningMethod, SigningRequest};

use crate::base_string::signature_base_string;
use crate::constants::*;
use crate::credential::Credential;
use crate::descriptor::RequestDescriptor;
use crate::encode::percent_encode_str;
use crate::nonce::{OsNonceProvider, ProvideNonce};
use crate::query::{encode_sorted_query, ParameterSet};
use crate::signature::SignatureMethod;

/// RequestSigner that implements OAuth 1.0a request signing.
///
/// Every call draws a fresh nonce and timestamp, so two calls never produce
/// the same signature. The signer holds no per-request state and can be
/// shared between threads.
///
/// - [RFC 5849 3. Authenticated Requests](https://www.rfc-editor.org/rfc/rfc5849#section-3)
#[derive(Debug, Clone)]
pub struct RequestSigner {
    nonce: Arc<dyn ProvideNonce>,
    realm: String,
    method: SignatureMethod,
}

impl Default for RequestSigner {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestSigner {
    /// Create a new signer using the os random source and system clock.
    pub fn new() -> Self {
        Self {
            nonce: Arc::new(OsNonceProvider),
            realm: String::new(),
            method: SignatureMethod::default(),
        }
    }

    /// Specify the nonce and timestamp provider.
    ///
    /// # Note
    ///
    /// We should always use a fresh nonce and the current time to sign
    /// requests. Only replace the provider for testing.
    pub fn with_nonce_provider(mut self, provider: impl ProvideNonce) -> Self {
        self.nonce = Arc::new(provider);
        self
    }

    /// Set the realm sent in the `Authorization` header, empty by default.
    pub fn with_realm(mut self, realm: impl Into<String>) -> Self {
        self.realm = realm.into();
        self
    }

    /// Set the signature method.
    pub fn with_signature_method(mut self, method: SignatureMethod) -> Self {
        self.method = method;
        self
    }

    /// Sign the request and return every parameter of it, including
    /// `oauth_signature`.
    pub fn sign(&self, req: &RequestDescriptor, cred: &Credential) -> Result<SignedParameters> {
        let nonce = self.nonce.next_nonce()?;
        let timestamp = self.nonce.current_timestamp();

        let protocol: ParameterSet = [
            (OAUTH_CONSUMER_KEY, cred.consumer_key.as_str()),
            (OAUTH_NONCE, nonce.as_str()),
            (OAUTH_SIGNATURE_METHOD, self.method.name()),
            (OAUTH_TIMESTAMP, timestamp.as_str()),
            (OAUTH_TOKEN, cred.token.as_str()),
            (OAUTH_VERSION, OAUTH_VERSION_1_0),
        ]
        .into_iter()
        .collect();

        let mut params = ParameterSet::parse(&req.raw_query)?;
        params.merge_protocol(&protocol)?;

        let string_to_sign = string_to_sign(req, &params);
        let signature = self.method.sign(cred, &string_to_sign);
        params.insert(OAUTH_SIGNATURE, signature);

        Ok(SignedParameters { params })
    }

    /// Sign the request and render the value of the `Authorization` header.
    pub fn sign_as_header(&self, req: &RequestDescriptor, cred: &Credential) -> Result<String> {
        Ok(self.sign(req, cred)?.to_header(&self.realm))
    }

    /// Sign the request and render the full signed query string.
    pub fn sign_as_query(&self, req: &RequestDescriptor, cred: &Credential) -> Result<String> {
        Ok(self.sign(req, cred)?.to_query())
    }
}

#[async_trait::async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _ctx: &Context,
        parts: &mut http::request::Parts,
        credential: Option<&Self::Credential>,
        method: SigningMethod,
    ) -> Result<()> {
        let k = credential.ok_or_else(|| Error::credential_invalid("missing credential"))?;

        let mut req = SigningRequest::build(parts)?;
        let signed = match self.sign(&RequestDescriptor::from_signing_request(&req), k) {
            Ok(v) => v,
            Err(err) => {
                // Hand the untouched request back before failing.
                req.apply(parts)?;
                return Err(err);
            }
        };

        match method {
            SigningMethod::Header => {
                req.headers.insert(AUTHORIZATION, {
                    let mut value: HeaderValue = signed.to_header(&self.realm).parse()?;
                    value.set_sensitive(true);

                    value
                });
            }
            SigningMethod::Query => req.query_replace(signed.to_query()),
        }

        req.apply(parts)
    }
}

/// SignedParameters holds every parameter of one signed request.
///
/// Both output forms render from the same value, so they always agree on
/// nonce, timestamp and signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedParameters {
    params: ParameterSet,
}

impl SignedParameters {
    /// The base64 `oauth_signature` value.
    pub fn signature(&self) -> &str {
        self.get(OAUTH_SIGNATURE).unwrap_or_default()
    }

    /// Get the first value of the given parameter.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get_first(name)
    }

    /// All parameters, request and protocol ones alike.
    pub fn parameters(&self) -> &ParameterSet {
        &self.params
    }

    /// Render the `Authorization` header value.
    ///
    /// ```text
    /// OAuth realm="", oauth_consumer_key="...", oauth_nonce="...", ...
    /// ```
    ///
    /// Only `oauth_*` parameters are included, sorted by name. Every value is
    /// percent-encoded before quoting.
    ///
    /// - [RFC 5849 3.5.1. Authorization Header](https://www.rfc-editor.org/rfc/rfc5849#section-3.5.1)
    pub fn to_header(&self, realm: &str) -> String {
        let mut s = String::with_capacity(256);
        s.push_str("OAuth realm=\"");
        s.push_str(&percent_encode_str(realm));
        s.push('"');

        for (name, values) in self
            .params
            .iter()
            .filter(|(k, _)| k.starts_with(OAUTH_PARAMETER_PREFIX))
        {
            let mut values: Vec<&str> = values.iter().map(String::as_str).collect();
            values.sort_unstable();

            for value in values {
                s.push_str(", ");
                s.push_str(&percent_encode_str(name));
                s.push_str("=\"");
                s.push_str(&percent_encode_str(value));
                s.push('"');
            }
        }

        s
    }

    /// Render the full signed query string in normalized form.
    pub fn to_query(&self) -> String {
        encode_sorted_query(&self.params)
    }
}

/// Construct string to sign
///
/// The signature is left out: it's computed over this string.
fn string_to_sign(req: &RequestDescriptor, params: &ParameterSet) -> String {
    let s = signature_base_string(
        &req.method,
        &req.scheme,
        &req.host,
        &req.path,
        &encode_sorted_query(params),
    );

    debug!("string to sign: {}", &s);
    s
}
