//! Cross check signatures against the official `aws-sigv4` crate.

use std::time::SystemTime;

use agcod_core::time::from_unix_timestamp;
use agcod_sigv4::{Credential, RequestSigner};
use anyhow::Result;
use aws_credential_types::Credentials;
use aws_sigv4::http_request::{PayloadChecksumKind, SignableBody, SignableRequest, SigningSettings};
use aws_sigv4::sign::v4;
use http::Request;
use pretty_assertions::assert_eq;
use test_case::test_case;

fn get_funds() -> Request<&'static str> {
    Request::builder()
        .method("POST")
        .uri("https://agcod-v2-fe-gamma.amazon.com/GetAvailableFunds")
        .header("accept", "application/json")
        .header("content-type", "application/json")
        .header(
            "x-amz-target",
            "com.amazonaws.agcod.AGCODService.GetAvailableFunds",
        )
        .body(r#"{"partnerId":"Amazon"}"#)
        .expect("request must be valid")
}

fn cancel_gift_card() -> Request<&'static str> {
    Request::builder()
        .method("POST")
        .uri("https://agcod-v2-gamma.amazon.com/CancelGiftCard")
        .header("accept", "application/json")
        .header("content-type", "application/json")
        .header(
            "x-amz-target",
            "com.amazonaws.agcod.AGCODService.CancelGiftCard",
        )
        .body(r#"{"creationRequestId":"Amazon123","partnerId":"Amazon","gcId":"A2B3C4"}"#)
        .expect("request must be valid")
}

fn get_with_query() -> Request<&'static str> {
    Request::builder()
        .method("GET")
        .uri("https://example.us-east-1.amazonaws.com/items?limit=10&after=abc&filter=gift")
        .header("accept", "application/json")
        .body("")
        .expect("request must be valid")
}

fn get_root() -> Request<&'static str> {
    Request::builder()
        .method("GET")
        .uri("https://example.us-east-1.amazonaws.com/")
        .body("")
        .expect("request must be valid")
}

fn get_wildcard_index() -> Request<&'static str> {
    Request::builder()
        .method("GET")
        .uri("https://search-logs.us-east-1.es.amazonaws.com/log-*/_search")
        .body("")
        .expect("request must be valid")
}

fn get_escaped_space() -> Request<&'static str> {
    Request::builder()
        .method("GET")
        .uri("https://search-logs.us-east-1.es.amazonaws.com/idx/_doc/a%20b")
        .body("")
        .expect("request must be valid")
}

fn get_escaped_slash() -> Request<&'static str> {
    Request::builder()
        .method("GET")
        .uri("https://search-logs.us-east-1.es.amazonaws.com/idx/_doc/a%2Fb")
        .body("")
        .expect("request must be valid")
}

fn aws_sign(req: &mut Request<&'static str>, session_token: Option<&str>) -> Result<()> {
    let mut ss = SigningSettings::default();
    ss.payload_checksum_kind = PayloadChecksumKind::NoHeader;

    let id = Credentials::new(
        "access_key_id",
        "secret_access_key",
        session_token.map(|v| v.to_string()),
        None,
        "hardcoded-credentials",
    )
    .into();
    let sp = v4::SigningParams::builder()
        .identity(&id)
        .region("us-east-1")
        .name("AGCODService")
        .time(SystemTime::from(from_unix_timestamp(1467963107)?))
        .settings(ss)
        .build()?;

    let output = aws_sigv4::http_request::sign(
        SignableRequest::new(
            req.method().as_str(),
            req.uri().to_string(),
            req.headers()
                .iter()
                .map(|(k, v)| (k.as_str(), v.to_str().expect("header must be valid"))),
            SignableBody::Bytes(req.body().as_bytes()),
        )?,
        &sp.into(),
    )?;
    let (instructions, _) = output.into_parts();
    instructions.apply_to_request_http1x(req);
    Ok(())
}

fn signed_headers(req: &Request<&str>) -> Vec<(String, String)> {
    ["authorization", "x-amz-date", "x-amz-security-token"]
        .iter()
        .filter_map(|name| {
            req.headers().get(*name).map(|v| {
                (
                    name.to_string(),
                    v.to_str().expect("header must be valid").to_string(),
                )
            })
        })
        .collect()
}

#[test_case(get_funds, None; "get available funds")]
#[test_case(cancel_gift_card, None; "cancel gift card")]
#[test_case(get_funds, Some("SESSION"); "get available funds with token")]
#[test_case(get_with_query, None; "query string")]
#[test_case(get_root, Some("SESSION"); "root path with token")]
#[test_case(get_wildcard_index, None; "wildcard index path")]
#[test_case(get_escaped_space, None; "escaped space in path")]
#[test_case(get_escaped_slash, None; "escaped slash in path")]
fn test_matches_aws_sigv4(req_fn: fn() -> Request<&'static str>, token: Option<&str>) {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut expected = req_fn();
    aws_sign(&mut expected, token).expect("aws sigv4 must sign");

    let req = req_fn();
    let (mut parts, body) = req.into_parts();
    let mut cred = Credential::new("access_key_id", "secret_access_key");
    if let Some(token) = token {
        cred = cred.with_session_token(token);
    }
    RequestSigner::new("AGCODService", "us-east-1")
        .sign(
            &mut parts,
            Some(body.as_bytes()),
            &cred,
            from_unix_timestamp(1467963107).expect("timestamp must be valid"),
        )
        .expect("sign must succeed");
    let actual = Request::from_parts(parts, body);

    assert_eq!(signed_headers(&expected), signed_headers(&actual));
}
