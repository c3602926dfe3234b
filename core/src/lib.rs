//! Core components for signing HTTP requests.
//!
//! This crate provides the scheme-agnostic types and traits shared by the
//! oauth1-signer crates.
//!
//! ## Overview
//!
//! - **Context**: holds the [`Env`] that credential providers read from
//! - **Traits**: [`ProvideCredential`] loads credentials, [`SignRequest`]
//!   signs an `http::request::Parts` in place
//! - **Signer**: pairs a provider with a request signer and caches the
//!   loaded credential
//!
//! ## Example
//!
//! ```no_run
//! use async_trait::async_trait;
//! use http::request::Parts;
//! use oauth1_signer_core::{
//!     Context, Error, ProvideCredential, Result, SignRequest, Signer, SigningCredential,
//!     SigningMethod,
//! };
//!
//! #[derive(Clone, Debug)]
//! struct MyCredential {
//!     key: String,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn is_valid(&self) -> bool {
//!         !self.key.is_empty()
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MyLoader;
//!
//! #[async_trait]
//! impl ProvideCredential for MyLoader {
//!     type Credential = MyCredential;
//!
//!     async fn provide_credential(&self, ctx: &Context) -> Result<Option<MyCredential>> {
//!         Ok(ctx.env_var("MY_KEY").map(|key| MyCredential { key }))
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MySigner;
//!
//! #[async_trait]
//! impl SignRequest for MySigner {
//!     type Credential = MyCredential;
//!
//!     async fn sign_request(
//!         &self,
//!         _: &Context,
//!         req: &mut Parts,
//!         cred: Option<&MyCredential>,
//!         _: SigningMethod,
//!     ) -> Result<()> {
//!         let cred = cred.ok_or_else(|| Error::credential_invalid("missing credential"))?;
//!         req.headers.insert("x-key", cred.key.parse()?);
//!         Ok(())
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let signer = Signer::new(Context::new(), MyLoader, MySigner);
//! let (mut parts, _) = http::Request::get("https://example.com").body(())?.into_parts();
//! signer.sign(&mut parts, SigningMethod::Header).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: stateless HMAC-SHA1 and encoding helpers
//! - [`time`]: clock helpers
//! - [`utils`]: redaction of secrets in `Debug` output

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod error;
pub use error::{Error, ErrorKind, Result};

mod context;
pub use context::{Context, Env, NoopEnv, OsEnv, StaticEnv};

mod api;
pub use api::{ProvideCredential, SignRequest, SigningCredential};
mod chain;
pub use chain::ProvideCredentialChain;
mod request;
pub use request::{SigningMethod, SigningRequest};
mod signer;
pub use signer::Signer;
