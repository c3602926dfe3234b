// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use oauth1_signer::{
    Config, ConfigCredentialProvider, Credential, DefaultCredentialProvider,
    EnvCredentialProvider, StaticCredentialProvider,
};
use oauth1_signer_core::{Context, Error, ProvideCredential, ProvideCredentialChain, StaticEnv};

#[derive(Debug)]
struct CountingProvider {
    name: &'static str,
    return_credential: bool,
    call_count: Arc<AtomicUsize>,
}

#[async_trait]
impl ProvideCredential for CountingProvider {
    type Credential = Credential;

    async fn provide_credential(
        &self,
        _ctx: &Context,
    ) -> oauth1_signer_core::Result<Option<Self::Credential>> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        if self.return_credential {
            Ok(Some(Credential::consumer_only(
                format!("{}_key", self.name),
                format!("{}_secret", self.name),
            )))
        } else {
            Ok(None)
        }
    }
}

#[derive(Debug)]
struct FailingProvider;

#[async_trait]
impl ProvideCredential for FailingProvider {
    type Credential = Credential;

    async fn provide_credential(
        &self,
        _ctx: &Context,
    ) -> oauth1_signer_core::Result<Option<Self::Credential>> {
        Err(Error::config_invalid("consumer secret is not readable"))
    }
}

#[tokio::test]
async fn test_chain_stops_at_first_success() {
    let _ = env_logger::builder().is_test(true).try_init();

    let count1 = Arc::new(AtomicUsize::new(0));
    let count2 = Arc::new(AtomicUsize::new(0));
    let count3 = Arc::new(AtomicUsize::new(0));

    let chain = ProvideCredentialChain::new()
        .push(CountingProvider {
            name: "provider1",
            return_credential: false,
            call_count: count1.clone(),
        })
        .push(CountingProvider {
            name: "provider2",
            return_credential: true,
            call_count: count2.clone(),
        })
        .push(CountingProvider {
            name: "provider3",
            return_credential: true,
            call_count: count3.clone(),
        });

    let cred = chain
        .provide_credential(&Context::new())
        .await
        .unwrap()
        .expect("credential must be loaded");
    assert_eq!(cred.consumer_key, "provider2_key");
    assert_eq!(cred.consumer_secret, "provider2_secret");

    assert_eq!(count1.load(Ordering::SeqCst), 1);
    assert_eq!(count2.load(Ordering::SeqCst), 1);
    assert_eq!(count3.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_chain_skips_failing_provider() {
    let _ = env_logger::builder().is_test(true).try_init();

    let chain = ProvideCredentialChain::new()
        .push(FailingProvider)
        .push(StaticCredentialProvider::new("abcd", "efgh"));

    let cred = chain
        .provide_credential(&Context::new())
        .await
        .unwrap()
        .expect("credential must be loaded");
    assert_eq!(cred.consumer_key, "abcd");
}

#[tokio::test]
async fn test_chain_with_real_providers() {
    let ctx = Context::new().with_env(StaticEnv::from_pairs([
        ("OAUTH1_CONSUMER_KEY", "env_key"),
        ("OAUTH1_CONSUMER_SECRET", "env_secret"),
    ]));

    let config = Arc::new(Config::new().with_token("ijkl").with_token_secret("mnop"));
    let chain = ProvideCredentialChain::new()
        .push(ConfigCredentialProvider::new(config))
        .push(EnvCredentialProvider::new());

    let cred = chain
        .provide_credential(&ctx)
        .await
        .unwrap()
        .expect("credential must be loaded");
    assert_eq!(cred.consumer_key, "env_key");
    assert_eq!(cred.consumer_secret, "env_secret");
    assert_eq!(cred.token, "ijkl");
    assert_eq!(cred.token_secret, "mnop");
}

#[tokio::test]
async fn test_default_provider_with_custom_chain() {
    let chain = ProvideCredentialChain::new().push(FailingProvider);
    let provider = DefaultCredentialProvider::with_chain(chain);

    let cred = provider.provide_credential(&Context::new()).await.unwrap();
    assert!(cred.is_none());
}

#[tokio::test]
async fn test_chain_all_providers_return_none() {
    let ctx = Context::new().with_env(StaticEnv::default());
    let chain = ProvideCredentialChain::new()
        .push(EnvCredentialProvider::new())
        .push(ConfigCredentialProvider::new(Arc::new(Config::new())));

    let cred = chain.provide_credential(&ctx).await.unwrap();
    assert!(cred.is_none());
}
