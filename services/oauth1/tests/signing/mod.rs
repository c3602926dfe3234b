mod concurrent;
mod query;
mod standard;

use oauth1_signer::{Credential, RequestSigner, StaticCredentialProvider, StaticNonceProvider};
use oauth1_signer_core::{Context, Signer};

pub const NONCE: &str = "6162636465666768696a6b6c6d6e6f70";
pub const TIMESTAMP: &str = "1234567890";

/// Signature of `GET http://host.net/resource?a=b&c=d` with [`credential`],
/// [`NONCE`] and [`TIMESTAMP`].
pub const SIGNATURE: &str = "1tmN5A+YWWmCKpm0beiLUpsU1Ec=";

pub fn credential() -> Credential {
    Credential::new("abcd", "efgh", "ijkl", "mnop")
}

/// Request signer with a fixed nonce and timestamp.
pub fn request_signer() -> RequestSigner {
    RequestSigner::new().with_nonce_provider(StaticNonceProvider::new(NONCE, TIMESTAMP))
}

/// Initialize a signer that loads the static credential.
pub fn init_signer() -> Signer<Credential> {
    let _ = env_logger::builder().is_test(true).try_init();

    let loader = StaticCredentialProvider::new("abcd", "efgh").with_token("ijkl", "mnop");
    Signer::new(Context::new(), loader, request_signer())
}

pub fn parts(method: http::Method, uri: &str) -> http::request::Parts {
    let mut req = http::Request::new(());
    *req.method_mut() = method;
    *req.uri_mut() = uri.parse().expect("uri must be valid");
    req.into_parts().0
}
