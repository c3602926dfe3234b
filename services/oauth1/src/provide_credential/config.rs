use std::sync::Arc;

use crate::{Config, Credential};
use async_trait::async_trait;
use oauth1_signer_core::{Context, Error, ProvideCredential, Result};

/// ConfigCredentialProvider loads credentials from [`Config`].
///
/// Fields set on the config win, the rest are filled from env. A consumer
/// key without its secret, or the other way around, is a
/// [`ConfigInvalid`](oauth1_signer_core::ErrorKind::ConfigInvalid) error.
#[derive(Debug)]
pub struct ConfigCredentialProvider {
    config: Arc<Config>,
}

impl ConfigCredentialProvider {
    /// Create a new ConfigCredentialProvider
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ProvideCredential for ConfigCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let config = self.config.as_ref().clone().from_env(ctx);

        match (config.consumer_key, config.consumer_secret) {
            (Some(ck), Some(cs)) => Ok(Some(Credential::new(
                ck,
                cs,
                config.token.unwrap_or_default(),
                config.token_secret.unwrap_or_default(),
            ))),
            (None, None) => Ok(None),
            (Some(_), None) => Err(Error::config_invalid(
                "consumer_key is set but consumer_secret is missing",
            )),
            (None, Some(_)) => Err(Error::config_invalid(
                "consumer_secret is set but consumer_key is missing",
            )),
        }
    }
}
