use std::fmt::Debug;

use oauth1_signer_core::hash::hex_encode;
use oauth1_signer_core::time::{format_unix_timestamp, now};
use oauth1_signer_core::{Error, Result};
use rand::rngs::OsRng;
use rand::RngCore;

/// Number of random bytes in a nonce, 32 hex characters once encoded.
const NONCE_BYTES: usize = 16;

/// ProvideNonce supplies the per-request nonce and timestamp.
///
/// - [RFC 5849 3.3. Nonce and Timestamp](https://www.rfc-editor.org/rfc/rfc5849#section-3.3)
pub trait ProvideNonce: Debug + Send + Sync + 'static {
    /// Generate a fresh nonce.
    ///
    /// Implementations must draw from a cryptographically secure source and
    /// fail instead of falling back to a predictable one.
    fn next_nonce(&self) -> Result<String>;

    /// Whole seconds since the Unix epoch, in base 10.
    fn current_timestamp(&self) -> String;
}

/// OsNonceProvider reads nonces from the operating system's random source
/// and timestamps from the system clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsNonceProvider;

impl ProvideNonce for OsNonceProvider {
    fn next_nonce(&self) -> Result<String> {
        let mut bytes = [0u8; NONCE_BYTES];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| Error::random_source("failed to read os random source").with_source(e))?;

        Ok(hex_encode(&bytes))
    }

    fn current_timestamp(&self) -> String {
        format_unix_timestamp(now())
    }
}

/// StaticNonceProvider always returns the same nonce and timestamp.
///
/// # Note
///
/// Reusing a nonce lets anyone replay the signed request. Only use this
/// provider for testing.
#[derive(Debug, Clone)]
pub struct StaticNonceProvider {
    nonce: String,
    timestamp: String,
}

impl StaticNonceProvider {
    /// Create a new StaticNonceProvider.
    pub fn new(nonce: &str, timestamp: &str) -> Self {
        Self {
            nonce: nonce.to_string(),
            timestamp: timestamp.to_string(),
        }
    }
}

impl ProvideNonce for StaticNonceProvider {
    fn next_nonce(&self) -> Result<String> {
        Ok(self.nonce.clone())
    }

    fn current_timestamp(&self) -> String {
        self.timestamp.clone()
    }
}
