use std::sync::Arc;
use std::thread;

use anyhow::Result;
use http::header::AUTHORIZATION;
use http::Method;
use oauth1_signer::{Credential, RequestDescriptor, RequestSigner};
use oauth1_signer_core::SigningMethod;

use super::*;

#[test]
fn test_shared_credential_across_threads() {
    let signer = Arc::new(request_signer());
    let cred = Arc::new(credential());
    let req = Arc::new(RequestDescriptor::new(
        "GET", "http", "host.net", "/resource", "a=b&c=d",
    ));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let (signer, cred, req) = (signer.clone(), cred.clone(), req.clone());
            thread::spawn(move || {
                (0..100)
                    .map(|_| {
                        signer
                            .sign(&req, &cred)
                            .expect("sign must succeed")
                            .signature()
                            .to_string()
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        for signature in handle.join().expect("thread must not panic") {
            assert_eq!(signature, SIGNATURE);
        }
    }
}

#[test]
fn test_random_nonces_across_threads() {
    let signer = Arc::new(RequestSigner::new());
    let cred = Arc::new(Credential::consumer_only("abcd", "efgh"));
    let req = Arc::new(RequestDescriptor::new("GET", "http", "host.net", "/", ""));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let (signer, cred, req) = (signer.clone(), cred.clone(), req.clone());
            thread::spawn(move || {
                (0..50)
                    .map(|_| {
                        signer
                            .sign(&req, &cred)
                            .expect("sign must succeed")
                            .get("oauth_nonce")
                            .map(str::to_string)
                            .unwrap_or_default()
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut nonces = std::collections::HashSet::new();
    for handle in handles {
        for nonce in handle.join().expect("thread must not panic") {
            assert_eq!(nonce.len(), 32);
            assert!(nonces.insert(nonce), "nonce reused");
        }
    }
    assert_eq!(nonces.len(), 200);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_signer_shared_across_tasks() -> Result<()> {
    let signer = init_signer();

    let mut tasks = Vec::new();
    for _ in 0..16 {
        let signer = signer.clone();
        tasks.push(tokio::spawn(async move {
            let mut req = parts(Method::GET, "http://host.net/resource?a=b&c=d");
            signer.sign(&mut req, SigningMethod::Header).await?;
            Ok::<_, oauth1_signer_core::Error>(req.headers[AUTHORIZATION].clone())
        }));
    }

    let mut values = Vec::new();
    for task in tasks {
        values.push(task.await??);
    }
    assert!(values.windows(2).all(|w| w[0] == w[1]));
    Ok(())
}
