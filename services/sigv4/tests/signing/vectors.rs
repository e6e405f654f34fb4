use super::{header, parts, test_credential};
use agcod_core::time::from_unix_timestamp;
use agcod_sigv4::RequestSigner;
use anyhow::Result;
use http::Method;
use pretty_assertions::assert_eq;

#[test]
fn test_elasticsearch_get() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut req = parts(
        Method::GET,
        "https://subdomain.us-east-1.es.amazonaws.com/log-*/_search",
        &[],
    );
    RequestSigner::new("es", "us-east-1").sign(
        &mut req,
        None,
        &test_credential("SESSION"),
        from_unix_timestamp(0)?,
    )?;

    assert_eq!(
        header(&req, "authorization"),
        "AWS4-HMAC-SHA256 Credential=AKID/19700101/us-east-1/es/aws4_request, SignedHeaders=host;x-amz-date;x-amz-security-token, Signature=6601e883cc6d23871fd6c2a394c5677ea2b8c82b04a6446786d64cd74f520967"
    );
    assert_eq!(header(&req, "x-amz-date"), "19700101T000000Z");
    assert_eq!(header(&req, "x-amz-security-token"), "SESSION");
    Ok(())
}

#[test]
fn test_agcod_create_gift_card() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    let body = r#"{"creationRequestId":"","partnerId":"Amazon","value":{"currencyCode":"USD","amount":null}}"#;
    let mut req = parts(
        Method::POST,
        "https://agcod-v2-fe-gamma.amazon.com/CreateGiftCard",
        &[
            (
                "x-amz-target",
                "com.amazonaws.agcod.AGCODService.CreateGiftCard",
            ),
            ("accept", "application/json"),
        ],
    );
    RequestSigner::new("AGCODService", "us-west-2").sign(
        &mut req,
        Some(body.as_bytes()),
        &test_credential(""),
        from_unix_timestamp(1467963107)?,
    )?;

    assert_eq!(
        header(&req, "authorization"),
        "AWS4-HMAC-SHA256 Credential=AKID/20160708/us-west-2/AGCODService/aws4_request, SignedHeaders=accept;host;x-amz-date;x-amz-target, Signature=a47dd06c1bcff61e8c96fee2c87c4230a4dd5f7d4ffb5b958897027a3acae54b"
    );
    assert_eq!(header(&req, "x-amz-date"), "20160708T073147Z");
    assert_eq!(header(&req, "host"), "agcod-v2-fe-gamma.amazon.com");
    assert!(req.headers.get("x-amz-security-token").is_none());
    Ok(())
}
