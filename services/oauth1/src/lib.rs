//! OAuth 1.0a request signing.
//!
//! This crate signs HTTP requests with the HMAC-SHA1 method of
//! [RFC 5849](https://www.rfc-editor.org/rfc/rfc5849), producing either an
//! `Authorization` header or a signed query string. Token acquisition is not
//! handled here: callers bring a consumer key and secret and, if any, a token
//! issued by an earlier handshake.
//!
//! ## Quick Start
//!
//! ```no_run
//! use oauth1_signer::{DefaultCredentialProvider, RequestSigner, StaticCredentialProvider};
//! use oauth1_signer_core::{Context, OsEnv, Result, Signer, SigningMethod};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let ctx = Context::new().with_env(OsEnv);
//!
//!     // The static credential is tried before env values.
//!     let loader = DefaultCredentialProvider::new().push_front(
//!         StaticCredentialProvider::new("consumer_key", "consumer_secret")
//!             .with_token("token", "token_secret"),
//!     );
//!     let signer = Signer::new(ctx, loader, RequestSigner::new());
//!
//!     let mut req = http::Request::get("https://api.example.com/resource?a=b")
//!         .body(())?
//!         .into_parts()
//!         .0;
//!     signer.sign(&mut req, SigningMethod::Header).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Signing without http types
//!
//! ```
//! use oauth1_signer::{Credential, RequestDescriptor, RequestSigner};
//!
//! # fn main() -> oauth1_signer_core::Result<()> {
//! let cred = Credential::new("consumer_key", "consumer_secret", "token", "token_secret");
//! let req = RequestDescriptor::from_url("GET", "http://host.net/resource?a=b")?;
//!
//! let header = RequestSigner::new().sign_as_header(&req, &cred)?;
//! assert!(header.starts_with("OAuth realm=\"\", oauth_consumer_key=\"consumer_key\""));
//! # Ok(())
//! # }
//! ```
//!
//! ## Credential Sources
//!
//! ### Environment Variables
//!
//! ```bash
//! export OAUTH1_CONSUMER_KEY=your-consumer-key
//! export OAUTH1_CONSUMER_SECRET=your-consumer-secret
//! export OAUTH1_TOKEN=your-token                # Optional
//! export OAUTH1_TOKEN_SECRET=your-token-secret  # Optional
//! ```
//!
//! ### Config
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use oauth1_signer::{Config, ConfigCredentialProvider};
//!
//! let config = Config::new()
//!     .with_consumer_key("consumer_key")
//!     .with_consumer_secret("consumer_secret");
//! let loader = ConfigCredentialProvider::new(Arc::new(config));
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod constants;

pub mod encode;
pub mod query;

mod base_string;
pub use base_string::{base_string_uri, signature_base_string};

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod descriptor;
pub use descriptor::RequestDescriptor;

mod nonce;
pub use nonce::{OsNonceProvider, ProvideNonce, StaticNonceProvider};

mod signature;
pub use signature::SignatureMethod;

mod sign_request;
pub use sign_request::{RequestSigner, SignedParameters};

mod provide_credential;
pub use provide_credential::*;
