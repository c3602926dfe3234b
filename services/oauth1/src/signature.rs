use std::fmt::{Display, Formatter};

use oauth1_signer_core::hash::base64_hmac_sha1;

use crate::credential::Credential;

/// SignatureMethod is the algorithm used to sign the base string.
///
/// - [RFC 5849 3.4. Signature](https://www.rfc-editor.org/rfc/rfc5849#section-3.4)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum SignatureMethod {
    /// HMAC-SHA1 keyed by [`Credential::signing_key`].
    #[default]
    HmacSha1,
}

impl SignatureMethod {
    /// Value sent as `oauth_signature_method`.
    pub fn name(&self) -> &'static str {
        match self {
            SignatureMethod::HmacSha1 => "HMAC-SHA1",
        }
    }

    /// Sign the base string, returning the value of `oauth_signature`.
    ///
    /// Every call builds its own digest state.
    pub fn sign(&self, cred: &Credential, base_string: &str) -> String {
        match self {
            SignatureMethod::HmacSha1 => {
                base64_hmac_sha1(cred.signing_key().as_bytes(), base_string.as_bytes())
            }
        }
    }
}

impl Display for SignatureMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
