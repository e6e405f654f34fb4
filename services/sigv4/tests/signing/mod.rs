mod aws_sigv4_compat;
mod signer;
mod vectors;

use agcod_sigv4::Credential;
use http::request::Parts;

/// Build request parts for signing tests.
pub fn parts(method: http::Method, uri: &str, headers: &[(&str, &str)]) -> Parts {
    let mut builder = http::Request::builder().method(method).uri(uri);
    for (k, v) in headers {
        builder = builder.header(*k, *v);
    }
    builder
        .body(())
        .expect("request must be valid")
        .into_parts()
        .0
}

/// Credential shared by signing tests.
pub fn test_credential(session_token: &str) -> Credential {
    Credential::new("AKID", "SECRET").with_session_token(session_token)
}

/// Read a header as str, panic if missing.
pub fn header<'a>(parts: &'a Parts, name: &str) -> &'a str {
    parts
        .headers
        .get(name)
        .unwrap_or_else(|| panic!("header {name} must be set"))
        .to_str()
        .expect("header must be visible ascii")
}
