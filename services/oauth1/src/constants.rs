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

// Env values used by oauth1 credential providers.
pub const OAUTH1_CONSUMER_KEY: &str = "OAUTH1_CONSUMER_KEY";
pub const OAUTH1_CONSUMER_SECRET: &str = "OAUTH1_CONSUMER_SECRET";
pub const OAUTH1_TOKEN: &str = "OAUTH1_TOKEN";
pub const OAUTH1_TOKEN_SECRET: &str = "OAUTH1_TOKEN_SECRET";

// Protocol parameters.
pub const OAUTH_CONSUMER_KEY: &str = "oauth_consumer_key";
pub const OAUTH_NONCE: &str = "oauth_nonce";
pub const OAUTH_SIGNATURE: &str = "oauth_signature";
pub const OAUTH_SIGNATURE_METHOD: &str = "oauth_signature_method";
pub const OAUTH_TIMESTAMP: &str = "oauth_timestamp";
pub const OAUTH_TOKEN: &str = "oauth_token";
pub const OAUTH_VERSION: &str = "oauth_version";

pub const OAUTH_PARAMETER_PREFIX: &str = "oauth_";
pub const OAUTH_VERSION_1_0: &str = "1.0";

/// Parameters the signer owns. Callers must not supply them.
pub const RESERVED_PARAMETERS: [&str; 7] = [
    OAUTH_CONSUMER_KEY,
    OAUTH_NONCE,
    OAUTH_SIGNATURE,
    OAUTH_SIGNATURE_METHOD,
    OAUTH_TIMESTAMP,
    OAUTH_TOKEN,
    OAUTH_VERSION,
];
