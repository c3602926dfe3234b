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

use std::fmt::{Debug, Formatter};

use oauth1_signer_core::{utils::Redact, SigningCredential};

use crate::encode::percent_encode_str;

/// Credential for oauth1.
///
/// `token` and `token_secret` are empty for two-legged requests that only
/// identify the client.
#[derive(Clone, Default)]
pub struct Credential {
    /// Consumer key identifying the client.
    pub consumer_key: String,
    /// Consumer secret shared with the server.
    pub consumer_secret: String,
    /// Token issued to the resource owner.
    pub token: String,
    /// Token secret issued with the token.
    pub token_secret: String,
}

impl Credential {
    /// Create a new credential.
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        token: impl Into<String>,
        token_secret: impl Into<String>,
    ) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            token: token.into(),
            token_secret: token_secret.into(),
        }
    }

    /// Create a credential without token, used by two-legged requests.
    pub fn consumer_only(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
    ) -> Self {
        Self::new(consumer_key, consumer_secret, "", "")
    }

    /// Build the HMAC signing key: `encode(consumer_secret) "&" encode(token_secret)`.
    ///
    /// The `&` is always present, even when the token secret is empty.
    ///
    /// - [RFC 5849 3.4.2. HMAC-SHA1](https://www.rfc-editor.org/rfc/rfc5849#section-3.4.2)
    pub fn signing_key(&self) -> String {
        let mut key = percent_encode_str(&self.consumer_secret);
        key.push('&');
        key.push_str(&percent_encode_str(&self.token_secret));
        key
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("consumer_key", &Redact::from(&self.consumer_key))
            .field("consumer_secret", &Redact::from(&self.consumer_secret))
            .field("token", &Redact::from(&self.token))
            .field("token_secret", &Redact::from(&self.token_secret))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.consumer_key.is_empty()
    }
}
