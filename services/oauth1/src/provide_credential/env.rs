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

use crate::constants::*;
use crate::Credential;
use async_trait::async_trait;
use oauth1_signer_core::{Context, ProvideCredential, Result};

/// EnvCredentialProvider loads oauth1 credentials from environment variables.
///
/// This provider looks for the following environment variables:
/// - `OAUTH1_CONSUMER_KEY`: the consumer key
/// - `OAUTH1_CONSUMER_SECRET`: the consumer secret
/// - `OAUTH1_TOKEN`: the token (optional)
/// - `OAUTH1_TOKEN_SECRET`: the token secret (optional)
#[derive(Debug, Default, Clone)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let consumer_key = ctx.env_var(OAUTH1_CONSUMER_KEY);
        let consumer_secret = ctx.env_var(OAUTH1_CONSUMER_SECRET);

        match (consumer_key, consumer_secret) {
            (Some(ck), Some(cs)) => Ok(Some(Credential::new(
                ck,
                cs,
                ctx.env_var(OAUTH1_TOKEN).unwrap_or_default(),
                ctx.env_var(OAUTH1_TOKEN_SECRET).unwrap_or_default(),
            ))),
            _ => Ok(None),
        }
    }
}
