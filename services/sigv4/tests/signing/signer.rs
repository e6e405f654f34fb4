use super::{header, parts, test_credential};
use agcod_core::time::from_unix_timestamp;
use agcod_core::{Context, ErrorKind, Signer};
use agcod_sigv4::{RequestSigner, StaticCredentialProvider};
use anyhow::Result;
use http::Method;

#[tokio::test]
async fn test_signer_with_static_provider() -> Result<()> {
    let signer = Signer::new(
        Context::new(),
        StaticCredentialProvider::new("AKID", "SECRET").with_session_token("SESSION"),
        RequestSigner::new("es", "us-east-1"),
    );

    let mut req = parts(
        Method::GET,
        "https://subdomain.us-east-1.es.amazonaws.com/log-*/_search",
        &[],
    );
    signer
        .sign(&mut req, None, from_unix_timestamp(0)?)
        .await?;

    assert!(header(&req, "authorization")
        .ends_with("Signature=6601e883cc6d23871fd6c2a394c5677ea2b8c82b04a6446786d64cd74f520967"));
    Ok(())
}

#[tokio::test]
async fn test_signer_without_credential() -> Result<()> {
    // Empty env, nothing to load.
    let signer = Signer::new(
        Context::new(),
        agcod_sigv4::EnvCredentialProvider::new(),
        RequestSigner::new("AGCODService", "us-east-1"),
    );

    let mut req = parts(
        Method::POST,
        "https://agcod-v2-fe-gamma.amazon.com/GetAvailableFunds",
        &[("accept", "application/json")],
    );
    let err = signer
        .sign(&mut req, Some(b"{}".as_slice()), from_unix_timestamp(0)?)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
    assert!(req.headers.get("authorization").is_none());
    assert!(req.headers.get("x-amz-date").is_none());
    Ok(())
}

#[tokio::test]
async fn test_resign_replaces_date_and_signature() -> Result<()> {
    let signer = RequestSigner::new("AGCODService", "us-west-2");
    let cred = test_credential("");

    let mut req = parts(
        Method::POST,
        "https://agcod-v2-fe-gamma.amazon.com/GetAvailableFunds",
        &[("accept", "application/json")],
    );
    signer.sign(&mut req, Some(b"{}".as_slice()), &cred, from_unix_timestamp(0)?)?;
    let first = header(&req, "authorization").to_string();

    signer.sign(&mut req, Some(b"{}".as_slice()), &cred, from_unix_timestamp(60)?)?;

    assert_eq!(req.headers.get_all("authorization").iter().count(), 1);
    assert_eq!(header(&req, "x-amz-date"), "19700101T000100Z");
    assert_ne!(header(&req, "authorization"), first);
    Ok(())
}
