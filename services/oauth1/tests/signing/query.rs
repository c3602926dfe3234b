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

use anyhow::Result;
use http::header::AUTHORIZATION;
use http::Method;
use oauth1_signer::query::ParameterSet;
use oauth1_signer_core::{ErrorKind, SigningMethod};
use pretty_assertions::assert_eq;

use super::*;

#[tokio::test]
async fn test_sign_query() -> Result<()> {
    let signer = init_signer();

    let mut req = parts(Method::GET, "http://host.net/resource?c=d&a=b");
    signer.sign(&mut req, SigningMethod::Query).await?;

    assert!(!req.headers.contains_key(AUTHORIZATION));
    assert_eq!(
        req.uri.to_string(),
        "http://host.net/resource?a=b&c=d&oauth_consumer_key=abcd\
         &oauth_nonce=6162636465666768696a6b6c6d6e6f70\
         &oauth_signature=1tmN5A%2BYWWmCKpm0beiLUpsU1Ec%3D&oauth_signature_method=HMAC-SHA1\
         &oauth_timestamp=1234567890&oauth_token=ijkl&oauth_version=1.0"
    );
    Ok(())
}

#[tokio::test]
async fn test_sign_query_without_query() -> Result<()> {
    let signer = init_signer();

    let mut req = parts(Method::DELETE, "https://host.net/resource");
    signer.sign(&mut req, SigningMethod::Query).await?;

    let query = ParameterSet::parse(req.uri.query().unwrap_or_default())?;
    assert_eq!(query.len(), 7);
    assert_eq!(query.get_first("oauth_consumer_key"), Some("abcd"));
    assert!(query.get_first("oauth_signature").is_some());
    assert_eq!(req.uri.path(), "/resource");
    Ok(())
}

#[tokio::test]
async fn test_sign_query_decodes_to_signature() -> Result<()> {
    let signer = init_signer();

    let mut req = parts(Method::GET, "http://host.net/resource?a=b&c=d");
    signer.sign(&mut req, SigningMethod::Query).await?;

    let query = ParameterSet::parse(req.uri.query().unwrap_or_default())?;
    assert_eq!(query.get_first("oauth_signature"), Some(SIGNATURE));
    Ok(())
}

#[tokio::test]
async fn test_sign_query_keeps_repeated_parameters() -> Result<()> {
    let signer = init_signer();

    let mut req = parts(Method::GET, "http://host.net/?tag=b&tag=a&empty");
    signer.sign(&mut req, SigningMethod::Query).await?;

    let query = ParameterSet::parse(req.uri.query().unwrap_or_default())?;
    assert_eq!(
        query.get("tag"),
        Some(&["a".to_string(), "b".to_string()][..])
    );
    assert_eq!(query.get_first("empty"), Some(""));
    Ok(())
}

#[tokio::test]
async fn test_sign_query_rejects_reserved_parameter() -> Result<()> {
    let signer = init_signer();

    let mut req = parts(Method::GET, "http://host.net/?oauth_signature=forged");
    let err = signer
        .sign(&mut req, SigningMethod::Query)
        .await
        .expect_err("reserved parameter must be rejected");

    assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    assert_eq!(req.uri.to_string(), "http://host.net/?oauth_signature=forged");
    Ok(())
}
