use anyhow::Result;
use http::header::AUTHORIZATION;
use http::Method;
use log::debug;
use oauth1_signer::{EnvCredentialProvider, RequestDescriptor, RequestSigner};
use oauth1_signer_core::{Context, ErrorKind, Signer, SigningMethod, StaticEnv};
use pretty_assertions::assert_eq;

use super::*;

#[tokio::test]
async fn test_sign_header() -> Result<()> {
    let signer = init_signer();

    let mut req = parts(Method::GET, "http://host.net/resource?a=b&c=d");
    signer.sign(&mut req, SigningMethod::Header).await?;
    debug!("signed request: {req:?}");

    assert_eq!(
        req.headers[AUTHORIZATION].to_str()?,
        "OAuth realm=\"\", oauth_consumer_key=\"abcd\", \
         oauth_nonce=\"6162636465666768696a6b6c6d6e6f70\", \
         oauth_signature=\"1tmN5A%2BYWWmCKpm0beiLUpsU1Ec%3D\", \
         oauth_signature_method=\"HMAC-SHA1\", oauth_timestamp=\"1234567890\", \
         oauth_token=\"ijkl\", oauth_version=\"1.0\""
    );
    // Header mode leaves the url alone.
    assert_eq!(req.uri.to_string(), "http://host.net/resource?a=b&c=d");
    Ok(())
}

#[tokio::test]
async fn test_sign_header_default_port() -> Result<()> {
    let signer = init_signer();

    let mut with_port = parts(Method::GET, "http://host.net:80/resource?a=b&c=d");
    signer.sign(&mut with_port, SigningMethod::Header).await?;

    let mut without_port = parts(Method::GET, "http://host.net/resource?a=b&c=d");
    signer.sign(&mut without_port, SigningMethod::Header).await?;

    assert_eq!(
        with_port.headers[AUTHORIZATION],
        without_port.headers[AUTHORIZATION]
    );
    Ok(())
}

#[tokio::test]
async fn test_sign_header_matches_descriptor() -> Result<()> {
    let signer = init_signer();

    let mut req = parts(Method::POST, "https://api.host.net:8443/1/statuses?status=hello%20world");
    signer.sign(&mut req, SigningMethod::Header).await?;

    let desc =
        RequestDescriptor::from_url("POST", "https://api.host.net:8443/1/statuses?status=hello%20world")?;
    assert_eq!(
        req.headers[AUTHORIZATION].to_str()?,
        request_signer().sign_as_header(&desc, &credential())?
    );
    Ok(())
}

#[tokio::test]
async fn test_sign_with_realm() -> Result<()> {
    let signer = Signer::new(
        Context::new(),
        oauth1_signer::StaticCredentialProvider::new("abcd", "efgh"),
        request_signer().with_realm("http://photos.example.net/"),
    );

    let mut req = parts(Method::GET, "http://host.net/");
    signer.sign(&mut req, SigningMethod::Header).await?;

    assert!(req.headers[AUTHORIZATION]
        .to_str()?
        .starts_with("OAuth realm=\"http%3A%2F%2Fphotos.example.net%2F\", "));
    Ok(())
}

#[tokio::test]
async fn test_sign_without_credential() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    let ctx = Context::new().with_env(StaticEnv::default());
    let signer = Signer::new(ctx, EnvCredentialProvider::new(), RequestSigner::new());

    let mut req = parts(Method::GET, "http://host.net/");
    let err = signer
        .sign(&mut req, SigningMethod::Header)
        .await
        .expect_err("signing without credential must fail");

    assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
    assert!(!req.headers.contains_key(AUTHORIZATION));
    Ok(())
}

#[tokio::test]
async fn test_sign_relative_uri() -> Result<()> {
    let signer = init_signer();

    let mut req = parts(Method::GET, "/resource?a=b");
    let err = signer
        .sign(&mut req, SigningMethod::Header)
        .await
        .expect_err("relative uri must be rejected");

    assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    Ok(())
}

#[tokio::test]
async fn test_sign_uses_fresh_nonce() -> Result<()> {
    let signer = Signer::new(
        Context::new(),
        oauth1_signer::StaticCredentialProvider::new("abcd", "efgh"),
        RequestSigner::new(),
    );

    let mut first = parts(Method::GET, "http://host.net/resource");
    signer.sign(&mut first, SigningMethod::Header).await?;
    let mut second = parts(Method::GET, "http://host.net/resource");
    signer.sign(&mut second, SigningMethod::Header).await?;

    assert_ne!(first.headers[AUTHORIZATION], second.headers[AUTHORIZATION]);
    Ok(())
}
